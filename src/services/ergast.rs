//! Client for the Jolpica/Ergast F1 statistics API.
//!
//! Failures (network, non-2xx, undecodable body) are logged and reported as
//! `None`; callers decide whether that is fatal. No retries, no backoff.

use futures::future::join_all;
use reqwest::Client;
use tracing::warn;

use crate::models::ergast::{ErgastResponse, MrData, RaceTable, StandingsTable};

// Upstream defaults to 30 rows per document, which truncates the crowded
// 1950s standings lists. 100 covers every season.
const PAGE_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct ErgastClient {
    http: Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Driver standings document for one season.
    pub async fn driver_standings(&self, season: &str) -> Option<StandingsTable> {
        let url = format!(
            "{}/{}/driverstandings/?format=json&limit={}",
            self.base_url, season, PAGE_LIMIT
        );
        self.get_mr_data(&url).await.and_then(|d| d.standings_table)
    }

    /// Driver standings for several seasons, fetched concurrently with no
    /// concurrency cap. Each season keeps its own success/failure outcome.
    pub async fn driver_standings_many(
        &self,
        seasons: &[String],
    ) -> Vec<(String, Option<StandingsTable>)> {
        let fetches = seasons.iter().map(|season| async move {
            (season.clone(), self.driver_standings(season).await)
        });
        join_all(fetches).await
    }

    /// Race results document for one season, restricted to winning results.
    pub async fn race_results(&self, season: &str) -> Option<RaceTable> {
        let url = format!(
            "{}/{}/results/1/?format=json&limit={}",
            self.base_url, season, PAGE_LIMIT
        );
        self.get_mr_data(&url).await.and_then(|d| d.race_table)
    }

    async fn get_mr_data(&self, url: &str) -> Option<MrData> {
        let res = match self.http.get(url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("request to {url} failed: {e}");
                return None;
            }
        };
        if !res.status().is_success() {
            warn!("upstream returned {} for {url}", res.status());
            return None;
        }
        match res.json::<ErgastResponse>().await {
            Ok(body) => Some(body.mr_data),
            Err(e) => {
                warn!("could not decode upstream response from {url}: {e}");
                None
            }
        }
    }
}

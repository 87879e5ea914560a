//! Champions vertical: one championship winner per season over the whole
//! configured year range, paginated over seasons.

use crate::db;
use crate::models::response::{Envelope, SeasonWinnerDto};
use crate::services::{ingest, season_winners, ServiceError};
use crate::utils::pagination::Page;
use crate::utils::state::AppState;

pub async fn list_champions(
    state: &AppState,
    page: Page,
) -> Result<Envelope<SeasonWinnerDto>, ServiceError> {
    let seasons: Vec<String> = (state.config.min_year..=state.config.max_year)
        .map(|y| y.to_string())
        .collect();
    let total = seasons.len() as i64;
    let page_seasons: Vec<String> = seasons
        .into_iter()
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .collect();
    if page_seasons.is_empty() {
        return Ok(Envelope::new(Vec::new(), total, &page));
    }

    ingest::ensure_standings_loaded(state, &page_seasons).await?;
    let rows = db::season_winners::find_by_seasons(&state.db_pool, &page_seasons).await?;
    let data = season_winners::assemble(&state.db_pool, &rows).await?;
    Ok(Envelope::new(data, total, &page))
}

//! Season-winners vertical: championship winners for an explicit season or
//! year range, served from storage after ingestion.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::db;
use crate::models::response::{ConstructorDto, DriverDto, Envelope, SeasonWinnerDto};
use crate::models::winners::SeasonWinner;
use crate::services::{ingest, ServiceError};
use crate::utils::pagination::Page;
use crate::utils::state::AppState;
use crate::utils::validation::YearRange;

pub async fn list_winners(
    state: &AppState,
    range: YearRange,
    page: Page,
) -> Result<Envelope<SeasonWinnerDto>, ServiceError> {
    let seasons: Vec<String> = (range.min..=range.max).map(|y| y.to_string()).collect();
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
    let data = assemble(&state.db_pool, &rows).await?;
    Ok(Envelope::new(data, total, &page))
}

pub async fn winner_for_season(
    state: &AppState,
    season: i32,
    page: Page,
) -> Result<Envelope<SeasonWinnerDto>, ServiceError> {
    let season = season.to_string();
    ingest::ensure_standings_loaded(state, std::slice::from_ref(&season)).await?;

    let rows: Vec<SeasonWinner> = db::season_winners::find_by_season(&state.db_pool, &season)
        .await?
        .into_iter()
        .collect();
    let total = rows.len() as i64;
    let data = assemble(&state.db_pool, &rows).await?;
    Ok(Envelope::new(data, total, &page))
}

/// Joins winner rows with their driver and constructor documents. Refs are
/// deduplicated, batch-fetched, then matched in memory; a row whose ref has
/// no stored document keeps a null in its place.
pub(crate) async fn assemble(
    pool: &PgPool,
    rows: &[SeasonWinner],
) -> Result<Vec<SeasonWinnerDto>, ServiceError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut driver_refs: Vec<String> = rows.iter().map(|r| r.driver_ref.clone()).collect();
    driver_refs.sort();
    driver_refs.dedup();
    let mut constructor_refs: Vec<String> =
        rows.iter().filter_map(|r| r.constructor_ref.clone()).collect();
    constructor_refs.sort();
    constructor_refs.dedup();

    let drivers = db::drivers::find_by_ids(pool, &driver_refs).await?;
    let constructors = db::constructors::find_by_ids(pool, &constructor_refs).await?;
    let driver_map: HashMap<&str, DriverDto> = drivers
        .iter()
        .map(|d| (d.driver_id.as_str(), DriverDto::from(d)))
        .collect();
    let constructor_map: HashMap<&str, ConstructorDto> = constructors
        .iter()
        .map(|c| (c.constructor_id.as_str(), ConstructorDto::from(c)))
        .collect();

    Ok(rows
        .iter()
        .map(|row| SeasonWinnerDto {
            season: row.season.clone(),
            position: row.position.clone(),
            position_text: row.position_text.clone(),
            points: row.points.clone(),
            wins: row.wins.clone(),
            round: row.round.clone(),
            driver: driver_map.get(row.driver_ref.as_str()).cloned(),
            constructor: row
                .constructor_ref
                .as_deref()
                .and_then(|r| constructor_map.get(r))
                .cloned(),
        })
        .collect())
}

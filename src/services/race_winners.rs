//! Race-winners vertical: per-round winners within one season.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::db;
use crate::models::response::{
    CircuitDto, ConstructorDto, DriverDto, Envelope, RaceWinnerDto, WinnerDetailsDto,
};
use crate::models::winners::RaceWinner;
use crate::services::{ingest, ServiceError};
use crate::utils::pagination::Page;
use crate::utils::state::AppState;

pub async fn list_race_winners(
    state: &AppState,
    season: i32,
    page: Page,
) -> Result<Envelope<RaceWinnerDto>, ServiceError> {
    let season = season.to_string();
    ingest::ensure_races_loaded(state, &season).await?;

    let pool = &state.db_pool;
    let total = db::race_winners::count_by_season(pool, &season).await?;
    let rows = db::race_winners::find_by_season(pool, &season, page.limit, page.offset).await?;
    let data = assemble(pool, &rows).await?;
    Ok(Envelope::new(data, total, &page))
}

async fn assemble(pool: &PgPool, rows: &[RaceWinner]) -> Result<Vec<RaceWinnerDto>, ServiceError> {
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
    let mut circuit_refs: Vec<String> =
        rows.iter().filter_map(|r| r.circuit_ref.clone()).collect();
    circuit_refs.sort();
    circuit_refs.dedup();

    let drivers = db::drivers::find_by_ids(pool, &driver_refs).await?;
    let constructors = db::constructors::find_by_ids(pool, &constructor_refs).await?;
    let circuits = db::circuits::find_by_ids(pool, &circuit_refs).await?;
    let driver_map: HashMap<&str, DriverDto> = drivers
        .iter()
        .map(|d| (d.driver_id.as_str(), DriverDto::from(d)))
        .collect();
    let constructor_map: HashMap<&str, ConstructorDto> = constructors
        .iter()
        .map(|c| (c.constructor_id.as_str(), ConstructorDto::from(c)))
        .collect();
    let circuit_map: HashMap<&str, CircuitDto> = circuits
        .iter()
        .map(|c| (c.circuit_id.as_str(), CircuitDto::from(c)))
        .collect();

    Ok(rows
        .iter()
        .map(|row| RaceWinnerDto {
            season: row.season.clone(),
            round: row.round.to_string(),
            race_name: row.race_name.clone(),
            date: row.date.clone(),
            time: row.time.clone(),
            url: row.url.clone(),
            circuit: row
                .circuit_ref
                .as_deref()
                .and_then(|r| circuit_map.get(r))
                .cloned(),
            winner_details: WinnerDetailsDto {
                number: row.winner_number.clone(),
                position: row.winner_position.clone(),
                points: row.winner_points.clone(),
                laps: row.winner_laps.clone(),
                time: row.winner_time.clone(),
            },
            driver: driver_map.get(row.driver_ref.as_str()).cloned(),
            constructor: row
                .constructor_ref
                .as_deref()
                .and_then(|r| constructor_map.get(r))
                .cloned(),
        })
        .collect())
}

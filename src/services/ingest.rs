//! Ingestion: ensure a season's upstream data is present in storage.
//!
//! The freshness marker in `season_loads` replaces any per-process state: a
//! season is fetched, extracted and persisted only when its marker is absent,
//! and the marker is written last so a failed load is retried on the next
//! request. All writes are natural-key upserts, so two replicas racing the
//! same cold season converge on the same rows.

use tracing::info;

use crate::db;
use crate::db::load_marks::{RACES_DATASET, STANDINGS_DATASET};
use crate::services::{extract, ServiceError};
use crate::utils::state::AppState;

/// Makes sure driver standings for every given season are persisted. Seasons
/// that fail upstream are reported as one "unable to fetch" error after the
/// successful ones have been stored and marked.
pub async fn ensure_standings_loaded(
    state: &AppState,
    seasons: &[String],
) -> Result<(), ServiceError> {
    let pool = &state.db_pool;

    let mut missing = Vec::new();
    for season in seasons {
        if !db::load_marks::is_loaded(pool, STANDINGS_DATASET, season).await? {
            missing.push(season.clone());
        }
    }
    if missing.is_empty() {
        return Ok(());
    }

    info!("loading driver standings for {} season(s)", missing.len());
    let fetched = state.ergast.driver_standings_many(&missing).await;

    let mut tables = Vec::new();
    let mut loaded = Vec::new();
    let mut failed = 0usize;
    for (season, table) in fetched {
        match table {
            Some(table) => {
                tables.push(table);
                loaded.push(season);
            }
            None => failed += 1,
        }
    }

    if !tables.is_empty() {
        let extracted = extract::extract_standings(&tables);
        let drivers: Vec<_> = extracted.drivers.into_values().collect();
        let constructors: Vec<_> = extracted.constructors.into_values().collect();
        db::drivers::upsert_drivers(pool, &drivers).await?;
        db::constructors::upsert_constructors(pool, &constructors).await?;
        db::season_winners::insert_season_winners(pool, &extracted.season_winners).await?;
        for season in &loaded {
            db::seasons::ensure_season(pool, season).await?;
            db::load_marks::mark_loaded(pool, STANDINGS_DATASET, season).await?;
        }
    }

    if failed > 0 {
        return Err(ServiceError::UpstreamUnavailable);
    }
    Ok(())
}

/// Makes sure race winners for one season are persisted.
pub async fn ensure_races_loaded(state: &AppState, season: &str) -> Result<(), ServiceError> {
    let pool = &state.db_pool;

    if db::load_marks::is_loaded(pool, RACES_DATASET, season).await? {
        return Ok(());
    }

    info!("loading race results for season {season}");
    let table = state
        .ergast
        .race_results(season)
        .await
        .ok_or(ServiceError::UpstreamUnavailable)?;

    let extracted = extract::extract_races(&table);
    let drivers: Vec<_> = extracted.drivers.into_values().collect();
    let constructors: Vec<_> = extracted.constructors.into_values().collect();
    let circuits: Vec<_> = extracted.circuits.into_values().collect();
    db::drivers::upsert_drivers(pool, &drivers).await?;
    db::constructors::upsert_constructors(pool, &constructors).await?;
    db::circuits::upsert_circuits(pool, &circuits).await?;
    db::race_winners::insert_race_winners(pool, &extracted.race_winners).await?;
    db::seasons::ensure_season(pool, season).await?;
    db::load_marks::mark_loaded(pool, RACES_DATASET, season).await?;

    Ok(())
}

//! Persisted data-freshness markers.
//!
//! One row per (dataset, season) records that ingestion for that season
//! completed. The marker is written only after a successful load, so a failed
//! upstream fetch leaves nothing behind and the next request retries.

use sqlx::PgPool;

pub const STANDINGS_DATASET: &str = "standings";
pub const RACES_DATASET: &str = "races";

pub async fn is_loaded(pool: &PgPool, dataset: &str, season: &str) -> Result<bool, sqlx::Error> {
    let found = sqlx::query_scalar::<_, i32>(
        "SELECT 1 FROM season_loads WHERE dataset = $1 AND season = $2",
    )
    .bind(dataset)
    .bind(season)
    .fetch_optional(pool)
    .await?;
    Ok(found.is_some())
}

pub async fn mark_loaded(pool: &PgPool, dataset: &str, season: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO season_loads (dataset, season) VALUES ($1, $2)
         ON CONFLICT (dataset, season) DO NOTHING",
    )
    .bind(dataset)
    .bind(season)
    .execute(pool)
    .await?;
    Ok(())
}

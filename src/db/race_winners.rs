use sqlx::PgPool;

use crate::models::winners::RaceWinner;
use crate::services::extract::RaceWinnerRecord;

/// Insert race winners. The compound unique index on (season, round) keeps
/// re-ingestion idempotent per round rather than per season.
pub async fn insert_race_winners(
    pool: &PgPool,
    winners: &[RaceWinnerRecord],
) -> Result<(), sqlx::Error> {
    for winner in winners {
        sqlx::query(
            "INSERT INTO race_winners
                 (season, round, race_name, date, time, url, circuit_ref, driver_ref,
                  constructor_ref, winner_number, winner_position, winner_points,
                  winner_laps, winner_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             ON CONFLICT (season, round) DO NOTHING",
        )
        .bind(&winner.season)
        .bind(winner.round)
        .bind(&winner.race_name)
        .bind(&winner.date)
        .bind(&winner.time)
        .bind(&winner.url)
        .bind(&winner.circuit_ref)
        .bind(&winner.driver_ref)
        .bind(&winner.constructor_ref)
        .bind(&winner.winner_number)
        .bind(&winner.winner_position)
        .bind(&winner.winner_points)
        .bind(&winner.winner_laps)
        .bind(&winner.winner_time)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn find_by_season(
    pool: &PgPool,
    season: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<RaceWinner>, sqlx::Error> {
    sqlx::query_as::<_, RaceWinner>(
        "SELECT * FROM race_winners WHERE season = $1 ORDER BY round LIMIT $2 OFFSET $3",
    )
    .bind(season)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_by_season(pool: &PgPool, season: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM race_winners WHERE season = $1")
        .bind(season)
        .fetch_one(pool)
        .await
}

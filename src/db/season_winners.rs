use sqlx::PgPool;

use crate::models::winners::SeasonWinner;
use crate::services::extract::SeasonWinnerRecord;

/// Insert championship winners. The unique index on `season` is the
/// at-most-one-winner-per-season invariant; conflicting rows are skipped.
pub async fn insert_season_winners(
    pool: &PgPool,
    winners: &[SeasonWinnerRecord],
) -> Result<(), sqlx::Error> {
    for winner in winners {
        sqlx::query(
            "INSERT INTO season_winners
                 (season, position, position_text, points, wins, round, driver_ref, constructor_ref)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (season) DO NOTHING",
        )
        .bind(&winner.season)
        .bind(&winner.position)
        .bind(&winner.position_text)
        .bind(&winner.points)
        .bind(&winner.wins)
        .bind(&winner.round)
        .bind(&winner.driver_ref)
        .bind(&winner.constructor_ref)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn find_by_seasons(
    pool: &PgPool,
    seasons: &[String],
) -> Result<Vec<SeasonWinner>, sqlx::Error> {
    sqlx::query_as::<_, SeasonWinner>(
        "SELECT * FROM season_winners WHERE season = ANY($1) ORDER BY season",
    )
    .bind(seasons)
    .fetch_all(pool)
    .await
}

pub async fn find_by_season(
    pool: &PgPool,
    season: &str,
) -> Result<Option<SeasonWinner>, sqlx::Error> {
    sqlx::query_as::<_, SeasonWinner>("SELECT * FROM season_winners WHERE season = $1")
        .bind(season)
        .fetch_optional(pool)
        .await
}

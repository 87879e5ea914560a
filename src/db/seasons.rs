use sqlx::PgPool;

pub async fn ensure_season(pool: &PgPool, year: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO seasons (year) VALUES ($1) ON CONFLICT (year) DO NOTHING")
        .bind(year)
        .execute(pool)
        .await?;
    Ok(())
}

use sqlx::PgPool;

use crate::models::driver::Driver;
use crate::services::extract::DriverRecord;

/// Upsert by natural key; re-ingesting a driver refreshes its attributes.
pub async fn upsert_drivers(pool: &PgPool, drivers: &[DriverRecord]) -> Result<(), sqlx::Error> {
    for driver in drivers {
        sqlx::query(
            "INSERT INTO drivers (driver_id, given_name, family_name, date_of_birth, nationality, url)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (driver_id) DO UPDATE SET
                 given_name = EXCLUDED.given_name,
                 family_name = EXCLUDED.family_name,
                 date_of_birth = EXCLUDED.date_of_birth,
                 nationality = EXCLUDED.nationality,
                 url = EXCLUDED.url",
        )
        .bind(&driver.driver_id)
        .bind(&driver.given_name)
        .bind(&driver.family_name)
        .bind(&driver.date_of_birth)
        .bind(&driver.nationality)
        .bind(&driver.url)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<Driver>, sqlx::Error> {
    sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE driver_id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

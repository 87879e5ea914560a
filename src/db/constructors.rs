use sqlx::PgPool;

use crate::models::constructor::Constructor;
use crate::services::extract::ConstructorRecord;

pub async fn upsert_constructors(
    pool: &PgPool,
    constructors: &[ConstructorRecord],
) -> Result<(), sqlx::Error> {
    for constructor in constructors {
        sqlx::query(
            "INSERT INTO constructors (constructor_id, name, nationality, url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (constructor_id) DO UPDATE SET
                 name = EXCLUDED.name,
                 nationality = EXCLUDED.nationality,
                 url = EXCLUDED.url",
        )
        .bind(&constructor.constructor_id)
        .bind(&constructor.name)
        .bind(&constructor.nationality)
        .bind(&constructor.url)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<Constructor>, sqlx::Error> {
    sqlx::query_as::<_, Constructor>("SELECT * FROM constructors WHERE constructor_id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

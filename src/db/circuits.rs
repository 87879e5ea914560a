use sqlx::PgPool;

use crate::models::circuit::Circuit;
use crate::services::extract::CircuitRecord;

pub async fn upsert_circuits(pool: &PgPool, circuits: &[CircuitRecord]) -> Result<(), sqlx::Error> {
    for circuit in circuits {
        sqlx::query(
            "INSERT INTO circuits (circuit_id, circuit_name, url, lat, long, locality, country)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (circuit_id) DO UPDATE SET
                 circuit_name = EXCLUDED.circuit_name,
                 url = EXCLUDED.url,
                 lat = EXCLUDED.lat,
                 long = EXCLUDED.long,
                 locality = EXCLUDED.locality,
                 country = EXCLUDED.country",
        )
        .bind(&circuit.circuit_id)
        .bind(&circuit.circuit_name)
        .bind(&circuit.url)
        .bind(&circuit.lat)
        .bind(&circuit.long)
        .bind(&circuit.locality)
        .bind(&circuit.country)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<Circuit>, sqlx::Error> {
    sqlx::query_as::<_, Circuit>("SELECT * FROM circuits WHERE circuit_id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await
}

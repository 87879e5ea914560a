use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct Constructor {
    pub id: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

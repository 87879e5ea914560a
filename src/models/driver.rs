use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

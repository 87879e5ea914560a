use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Championship winner for one season. At most one row per season, enforced
/// by a unique index on `season`.
#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct SeasonWinner {
    pub id: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub season: String,
    pub position: Option<String>,
    #[serde(rename = "positionText")]
    pub position_text: Option<String>,
    pub points: String,
    pub wins: String,
    pub round: Option<String>,
    #[serde(rename = "driverRef")]
    pub driver_ref: String,
    #[serde(rename = "constructorRef")]
    pub constructor_ref: Option<String>,
}

/// Winner of one race (round) within a season. At most one row per
/// (season, round), enforced by a compound unique index.
#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct RaceWinner {
    pub id: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub season: String,
    pub round: i32,
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "circuitRef")]
    pub circuit_ref: Option<String>,
    #[serde(rename = "driverRef")]
    pub driver_ref: String,
    #[serde(rename = "constructorRef")]
    pub constructor_ref: Option<String>,
    pub winner_number: Option<String>,
    pub winner_position: Option<String>,
    pub winner_points: Option<String>,
    pub winner_laps: Option<String>,
    pub winner_time: Option<String>,
}

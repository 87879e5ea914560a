//! Upstream Jolpica/Ergast response schema.
//!
//! Only the fields the pipeline reads are modeled; the API nests everything
//! under `MRData` with a `StandingsTable` for championship standings and a
//! `RaceTable` for race results.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastResponse {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MrData {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub total: Option<String>,
    #[serde(rename = "StandingsTable")]
    pub standings_table: Option<StandingsTable>,
    #[serde(rename = "RaceTable")]
    pub race_table: Option<RaceTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandingsTable {
    pub season: Option<String>,
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandingsList {
    pub season: String,
    pub round: Option<String>,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverStanding {
    pub position: Option<String>,
    #[serde(rename = "positionText")]
    pub position_text: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: ErgastDriver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<ErgastConstructor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastDriver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub url: Option<String>,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastConstructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub url: Option<String>,
    pub name: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceTable {
    pub season: Option<String>,
    #[serde(rename = "Races", default)]
    pub races: Vec<ErgastRace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastRace {
    pub season: String,
    pub round: String,
    pub url: Option<String>,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: ErgastCircuit,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(rename = "Results", default)]
    pub results: Vec<ErgastResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastCircuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    pub url: Option<String>,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: Option<ErgastLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastLocation {
    pub lat: Option<String>,
    pub long: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastResult {
    pub number: Option<String>,
    pub position: Option<String>,
    pub points: Option<String>,
    pub laps: Option<String>,
    #[serde(rename = "Time")]
    pub time: Option<ErgastTime>,
    #[serde(rename = "Driver")]
    pub driver: ErgastDriver,
    #[serde(rename = "Constructor")]
    pub constructor: ErgastConstructor,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErgastTime {
    pub millis: Option<String>,
    pub time: Option<String>,
}

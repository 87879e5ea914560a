//! External-facing response shapes.
//!
//! Every list endpoint wraps its items in [`Envelope`], echoing the applied
//! `limit`/`offset` back as strings next to the total row count.

use serde::Serialize;

use crate::models::{circuit::Circuit, constructor::Constructor, driver::Driver};
use crate::utils::pagination::Page;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub limit: String,
    pub offset: String,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>, total: i64, page: &Page) -> Self {
        Self {
            data,
            total,
            limit: page.limit.to_string(),
            offset: page.offset.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverDto {
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

impl From<&Driver> for DriverDto {
    fn from(row: &Driver) -> Self {
        Self {
            driver_id: row.driver_id.clone(),
            given_name: row.given_name.clone(),
            family_name: row.family_name.clone(),
            date_of_birth: row.date_of_birth.clone(),
            nationality: row.nationality.clone(),
            url: row.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstructorDto {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

impl From<&Constructor> for ConstructorDto {
    fn from(row: &Constructor) -> Self {
        Self {
            constructor_id: row.constructor_id.clone(),
            name: row.name.clone(),
            nationality: row.nationality.clone(),
            url: row.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationDto {
    pub lat: Option<String>,
    pub long: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CircuitDto {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    pub url: Option<String>,
    pub location: Option<LocationDto>,
}

impl From<&Circuit> for CircuitDto {
    fn from(row: &Circuit) -> Self {
        let has_location = row.lat.is_some()
            || row.long.is_some()
            || row.locality.is_some()
            || row.country.is_some();
        Self {
            circuit_id: row.circuit_id.clone(),
            circuit_name: row.circuit_name.clone(),
            url: row.url.clone(),
            location: has_location.then(|| LocationDto {
                lat: row.lat.clone(),
                long: row.long.clone(),
                locality: row.locality.clone(),
                country: row.country.clone(),
            }),
        }
    }
}

/// One season's champion, joined with its driver and constructor documents.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonWinnerDto {
    pub season: String,
    pub position: Option<String>,
    #[serde(rename = "positionText")]
    pub position_text: Option<String>,
    pub points: String,
    pub wins: String,
    pub round: Option<String>,
    pub driver: Option<DriverDto>,
    pub constructor: Option<ConstructorDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinnerDetailsDto {
    pub number: Option<String>,
    pub position: Option<String>,
    pub points: Option<String>,
    pub laps: Option<String>,
    pub time: Option<String>,
}

/// One race's winner, joined with driver, constructor and circuit documents.
#[derive(Debug, Clone, Serialize)]
pub struct RaceWinnerDto {
    pub season: String,
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
    pub circuit: Option<CircuitDto>,
    #[serde(rename = "winnerDetails")]
    pub winner_details: WinnerDetailsDto,
    pub driver: Option<DriverDto>,
    pub constructor: Option<ConstructorDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_echoes_limit_and_offset_as_strings() {
        let page = Page {
            limit: 5,
            offset: 10,
        };
        let envelope = Envelope::new(vec!["a", "b"], 42, &page);
        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(body["limit"], "5");
        assert_eq!(body["offset"], "10");
        assert_eq!(body["total"], 42);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }
}

//! Flattens the nested Ergast documents into records the storage layer can
//! upsert directly.
//!
//! Drivers and constructors are deduplicated by natural key while folding, so
//! a driver appearing in several standings lists yields a single record.
//! Winner rows carry natural-key references (`driver_ref`, `constructor_ref`,
//! `circuit_ref`) instead of storage ids.

use std::collections::HashMap;

use crate::models::ergast::{
    ErgastCircuit, ErgastConstructor, ErgastDriver, RaceTable, StandingsTable,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub driver_id: String,
    pub given_name: String,
    pub family_name: String,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

impl From<&ErgastDriver> for DriverRecord {
    fn from(driver: &ErgastDriver) -> Self {
        Self {
            driver_id: driver.driver_id.clone(),
            given_name: driver.given_name.clone(),
            family_name: driver.family_name.clone(),
            date_of_birth: driver.date_of_birth.clone(),
            nationality: driver.nationality.clone(),
            url: driver.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorRecord {
    pub constructor_id: String,
    pub name: String,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

impl From<&ErgastConstructor> for ConstructorRecord {
    fn from(constructor: &ErgastConstructor) -> Self {
        Self {
            constructor_id: constructor.constructor_id.clone(),
            name: constructor.name.clone(),
            nationality: constructor.nationality.clone(),
            url: constructor.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitRecord {
    pub circuit_id: String,
    pub circuit_name: String,
    pub url: Option<String>,
    pub lat: Option<String>,
    pub long: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
}

impl From<&ErgastCircuit> for CircuitRecord {
    fn from(circuit: &ErgastCircuit) -> Self {
        let location = circuit.location.as_ref();
        Self {
            circuit_id: circuit.circuit_id.clone(),
            circuit_name: circuit.circuit_name.clone(),
            url: circuit.url.clone(),
            lat: location.and_then(|l| l.lat.clone()),
            long: location.and_then(|l| l.long.clone()),
            locality: location.and_then(|l| l.locality.clone()),
            country: location.and_then(|l| l.country.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonWinnerRecord {
    pub season: String,
    pub position: Option<String>,
    pub position_text: Option<String>,
    pub points: String,
    pub wins: String,
    pub round: Option<String>,
    pub driver_ref: String,
    pub constructor_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceWinnerRecord {
    pub season: String,
    pub round: i32,
    pub race_name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
    pub circuit_ref: Option<String>,
    pub driver_ref: String,
    pub constructor_ref: Option<String>,
    pub winner_number: Option<String>,
    pub winner_position: Option<String>,
    pub winner_points: Option<String>,
    pub winner_laps: Option<String>,
    pub winner_time: Option<String>,
}

#[derive(Debug, Default)]
pub struct ExtractedStandings {
    pub drivers: HashMap<String, DriverRecord>,
    pub constructors: HashMap<String, ConstructorRecord>,
    pub season_winners: Vec<SeasonWinnerRecord>,
}

/// Walks one or more standings tables. Every listed driver and constructor is
/// collected; only the first standing of each list becomes a season-winner
/// row.
pub fn extract_standings(tables: &[StandingsTable]) -> ExtractedStandings {
    let mut extracted = ExtractedStandings::default();

    for table in tables {
        for list in &table.standings_lists {
            for (index, standing) in list.driver_standings.iter().enumerate() {
                extracted
                    .drivers
                    .entry(standing.driver.driver_id.clone())
                    .or_insert_with(|| DriverRecord::from(&standing.driver));
                for constructor in &standing.constructors {
                    extracted
                        .constructors
                        .entry(constructor.constructor_id.clone())
                        .or_insert_with(|| ConstructorRecord::from(constructor));
                }

                if index == 0 {
                    extracted.season_winners.push(SeasonWinnerRecord {
                        season: list.season.clone(),
                        position: standing.position.clone(),
                        position_text: standing.position_text.clone(),
                        points: standing.points.clone(),
                        wins: standing.wins.clone(),
                        round: list.round.clone(),
                        driver_ref: standing.driver.driver_id.clone(),
                        constructor_ref: standing
                            .constructors
                            .first()
                            .map(|c| c.constructor_id.clone()),
                    });
                }
            }
        }
    }

    extracted
}

#[derive(Debug, Default)]
pub struct ExtractedRaces {
    pub drivers: HashMap<String, DriverRecord>,
    pub constructors: HashMap<String, ConstructorRecord>,
    pub circuits: HashMap<String, CircuitRecord>,
    pub race_winners: Vec<RaceWinnerRecord>,
}

/// Walks a race table. The first result of each race is its winner; races
/// without results or with a non-numeric round are skipped.
pub fn extract_races(table: &RaceTable) -> ExtractedRaces {
    let mut extracted = ExtractedRaces::default();

    for race in &table.races {
        let Ok(round) = race.round.parse::<i32>() else {
            continue;
        };
        let Some(winner) = race.results.first() else {
            continue;
        };

        for result in &race.results {
            extracted
                .drivers
                .entry(result.driver.driver_id.clone())
                .or_insert_with(|| DriverRecord::from(&result.driver));
            extracted
                .constructors
                .entry(result.constructor.constructor_id.clone())
                .or_insert_with(|| ConstructorRecord::from(&result.constructor));
        }
        extracted
            .circuits
            .entry(race.circuit.circuit_id.clone())
            .or_insert_with(|| CircuitRecord::from(&race.circuit));

        extracted.race_winners.push(RaceWinnerRecord {
            season: race.season.clone(),
            round,
            race_name: race.race_name.clone(),
            date: race.date.clone(),
            time: race.time.clone(),
            url: race.url.clone(),
            circuit_ref: Some(race.circuit.circuit_id.clone()),
            driver_ref: winner.driver.driver_id.clone(),
            constructor_ref: Some(winner.constructor.constructor_id.clone()),
            winner_number: winner.number.clone(),
            winner_position: winner.position.clone(),
            winner_points: winner.points.clone(),
            winner_laps: winner.laps.clone(),
            winner_time: winner.time.as_ref().and_then(|t| t.time.clone()),
        });
    }

    extracted
}

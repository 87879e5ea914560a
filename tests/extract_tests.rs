use f1_stats_backend::models::ergast::ErgastResponse;
use f1_stats_backend::services::extract::{extract_races, extract_standings};
use serde_json::json;

fn standings_response(season: &str, standings: serde_json::Value) -> ErgastResponse {
    serde_json::from_value(json!({
        "MRData": {
            "limit": "100",
            "offset": "0",
            "total": "1",
            "StandingsTable": {
                "season": season,
                "StandingsLists": [{
                    "season": season,
                    "round": "22",
                    "DriverStandings": standings,
                }],
            },
        },
    }))
    .expect("fixture should match the upstream schema")
}

fn verstappen() -> serde_json::Value {
    json!({
        "driverId": "max_verstappen",
        "givenName": "Max",
        "familyName": "Verstappen",
        "dateOfBirth": "1997-09-30",
        "nationality": "Dutch",
        "url": "http://en.wikipedia.org/wiki/Max_Verstappen",
    })
}

fn red_bull() -> serde_json::Value {
    json!({
        "constructorId": "red_bull",
        "name": "Red Bull",
        "nationality": "Austrian",
        "url": "http://en.wikipedia.org/wiki/Red_Bull_Racing",
    })
}

#[test]
fn standings_extraction_takes_only_the_first_standing_as_winner() {
    let response = standings_response(
        "2023",
        json!([
            {
                "position": "1", "positionText": "1", "points": "575", "wins": "19",
                "Driver": verstappen(),
                "Constructors": [red_bull()],
            },
            {
                "position": "2", "positionText": "2", "points": "285", "wins": "2",
                "Driver": {
                    "driverId": "perez",
                    "givenName": "Sergio",
                    "familyName": "Perez",
                    "dateOfBirth": "1990-01-26",
                    "nationality": "Mexican",
                    "url": "http://en.wikipedia.org/wiki/Sergio_Perez",
                },
                "Constructors": [red_bull()],
            },
        ]),
    );
    let table = response.mr_data.standings_table.unwrap();

    let extracted = extract_standings(std::slice::from_ref(&table));

    assert_eq!(extracted.drivers.len(), 2);
    assert_eq!(extracted.constructors.len(), 1);
    assert_eq!(extracted.season_winners.len(), 1);

    let winner = &extracted.season_winners[0];
    assert_eq!(winner.season, "2023");
    assert_eq!(winner.driver_ref, "max_verstappen");
    assert_eq!(winner.constructor_ref.as_deref(), Some("red_bull"));
    assert_eq!(winner.points, "575");
    assert_eq!(winner.wins, "19");
}

#[test]
fn standings_extraction_deduplicates_drivers_across_lists() {
    let entry = json!({
        "position": "1", "positionText": "1", "points": "454", "wins": "15",
        "Driver": verstappen(),
        "Constructors": [red_bull()],
    });
    let first = standings_response("2022", json!([entry.clone()]));
    let second = standings_response("2023", json!([entry]));
    let tables = vec![
        first.mr_data.standings_table.unwrap(),
        second.mr_data.standings_table.unwrap(),
    ];

    let extracted = extract_standings(&tables);

    assert_eq!(extracted.drivers.len(), 1);
    assert!(extracted.drivers.contains_key("max_verstappen"));
    assert_eq!(extracted.constructors.len(), 1);
    // One winner row per season, both pointing at the same driver.
    assert_eq!(extracted.season_winners.len(), 2);
    assert!(extracted.season_winners.iter().all(|w| w.driver_ref == "max_verstappen"));
}

#[test]
fn race_extraction_maps_winner_and_skips_races_without_results() {
    let response: ErgastResponse = serde_json::from_value(json!({
        "MRData": {
            "limit": "100",
            "offset": "0",
            "total": "2",
            "RaceTable": {
                "season": "2023",
                "Races": [
                    {
                        "season": "2023",
                        "round": "1",
                        "url": "http://en.wikipedia.org/wiki/2023_Bahrain_Grand_Prix",
                        "raceName": "Bahrain Grand Prix",
                        "date": "2023-03-05",
                        "time": "15:00:00Z",
                        "Circuit": {
                            "circuitId": "bahrain",
                            "circuitName": "Bahrain International Circuit",
                            "url": "http://en.wikipedia.org/wiki/Bahrain_International_Circuit",
                            "Location": {
                                "lat": "26.0325",
                                "long": "50.5106",
                                "locality": "Sakhir",
                                "country": "Bahrain",
                            },
                        },
                        "Results": [{
                            "number": "1",
                            "position": "1",
                            "points": "25",
                            "laps": "57",
                            "Time": { "millis": "5636736", "time": "1:33:56.736" },
                            "Driver": verstappen(),
                            "Constructor": red_bull(),
                        }],
                    },
                    {
                        "season": "2023",
                        "round": "2",
                        "raceName": "Saudi Arabian Grand Prix",
                        "Circuit": {
                            "circuitId": "jeddah",
                            "circuitName": "Jeddah Corniche Circuit",
                        },
                        "Results": [],
                    },
                ],
            },
        },
    }))
    .expect("fixture should match the upstream schema");
    let table = response.mr_data.race_table.unwrap();

    let extracted = extract_races(&table);

    assert_eq!(extracted.race_winners.len(), 1);
    let winner = &extracted.race_winners[0];
    assert_eq!(winner.season, "2023");
    assert_eq!(winner.round, 1);
    assert_eq!(winner.race_name, "Bahrain Grand Prix");
    assert_eq!(winner.circuit_ref.as_deref(), Some("bahrain"));
    assert_eq!(winner.driver_ref, "max_verstappen");
    assert_eq!(winner.winner_laps.as_deref(), Some("57"));
    assert_eq!(winner.winner_time.as_deref(), Some("1:33:56.736"));

    // Only the raced circuit is collected; the resultless round contributes
    // nothing.
    assert_eq!(extracted.circuits.len(), 1);
    let circuit = extracted.circuits.get("bahrain").unwrap();
    assert_eq!(circuit.locality.as_deref(), Some("Sakhir"));
    assert_eq!(extracted.drivers.len(), 1);
}

#[test]
fn empty_standings_lists_produce_no_winners() {
    let response = standings_response("2023", json!([]));
    let table = response.mr_data.standings_table.unwrap();

    let extracted = extract_standings(std::slice::from_ref(&table));

    assert!(extracted.season_winners.is_empty());
    assert!(extracted.drivers.is_empty());
    assert!(extracted.constructors.is_empty());
}

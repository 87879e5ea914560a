use f1_stats_backend::utils::validation::{
    validate_season, validate_year_range, SEASON_FORMAT_ERROR, SEASON_FORMAT_TYPE_ERROR,
    SEASON_RANGE_ERROR, YEAR_RANGE_LOGIC_ERROR,
};

const MIN_YEAR: i32 = 1950;
const MAX_YEAR: i32 = 2024;

#[test]
fn valid_seasons_echo_parsed_integers() {
    assert_eq!(validate_season("1950", MIN_YEAR, MAX_YEAR), Ok(1950));
    assert_eq!(validate_season("2023", MIN_YEAR, MAX_YEAR), Ok(2023));
    assert_eq!(validate_season("2024", MIN_YEAR, MAX_YEAR), Ok(2024));
}

#[test]
fn non_numeric_season_is_a_type_error() {
    for raw in ["abcd", "20a3", "", "20.3", "-203"] {
        let err = validate_season(raw, MIN_YEAR, MAX_YEAR).unwrap_err();
        assert_eq!(err.code, SEASON_FORMAT_TYPE_ERROR, "season {raw:?}");
        assert_eq!(err.status, 400);
    }
}

#[test]
fn wrong_length_season_is_a_format_error() {
    for raw in ["195", "19500", "1"] {
        let err = validate_season(raw, MIN_YEAR, MAX_YEAR).unwrap_err();
        assert_eq!(err.code, SEASON_FORMAT_ERROR, "season {raw:?}");
    }
}

#[test]
fn out_of_range_season_is_a_range_error() {
    let err = validate_season("1949", MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, SEASON_RANGE_ERROR);

    let err = validate_season("2025", MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, SEASON_RANGE_ERROR);
}

#[test]
fn valid_year_range_echoes_parsed_integers() {
    let range = validate_year_range(Some("1960"), Some("1970"), MIN_YEAR, MAX_YEAR).unwrap();
    assert_eq!(range.min, 1960);
    assert_eq!(range.max, 1970);
}

#[test]
fn missing_bounds_fall_back_to_configured_range() {
    let range = validate_year_range(None, None, MIN_YEAR, MAX_YEAR).unwrap();
    assert_eq!(range.min, MIN_YEAR);
    assert_eq!(range.max, MAX_YEAR);

    let range = validate_year_range(Some("2000"), None, MIN_YEAR, MAX_YEAR).unwrap();
    assert_eq!(range.min, 2000);
    assert_eq!(range.max, MAX_YEAR);
}

#[test]
fn reversed_range_is_always_a_logic_error() {
    // Both bounds individually valid.
    let err = validate_year_range(Some("1970"), Some("1960"), MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, YEAR_RANGE_LOGIC_ERROR);

    // Both bounds individually out of range: the logic check still wins.
    let err = validate_year_range(Some("3000"), Some("1000"), MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, YEAR_RANGE_LOGIC_ERROR);
}

#[test]
fn in_order_but_out_of_range_bounds_are_range_errors() {
    let err = validate_year_range(Some("1900"), Some("1960"), MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, SEASON_RANGE_ERROR);

    let err = validate_year_range(Some("1960"), Some("2030"), MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, SEASON_RANGE_ERROR);
}

#[test]
fn format_errors_in_range_bounds_use_season_codes() {
    let err = validate_year_range(Some("19x0"), Some("1970"), MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, SEASON_FORMAT_TYPE_ERROR);

    let err = validate_year_range(Some("1960"), Some("197"), MIN_YEAR, MAX_YEAR).unwrap_err();
    assert_eq!(err.code, SEASON_FORMAT_ERROR);
}

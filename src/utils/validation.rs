//! Season and year-range validation for everything that reaches the pipeline.
//!
//! Seasons arrive as path/query strings and must be exact 4-digit years inside
//! the configured `[min_year, max_year]` window before any lookup happens.

pub const SEASON_FORMAT_TYPE_ERROR: &str = "SEASON_FORMAT_TYPE_ERROR";
pub const SEASON_FORMAT_ERROR: &str = "SEASON_FORMAT_ERROR";
pub const SEASON_RANGE_ERROR: &str = "SEASON_RANGE_ERROR";
pub const YEAR_RANGE_LOGIC_ERROR: &str = "YEAR_RANGE_LOGIC_ERROR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
    pub status: u16,
}

impl ValidationError {
    fn new(code: &'static str, message: String) -> Self {
        Self {
            code,
            message,
            status: 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// Format-only check: exactly four ASCII digits.
fn parse_season_format(raw: &str) -> Result<i32, ValidationError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            SEASON_FORMAT_TYPE_ERROR,
            format!("season {raw:?} is not numeric"),
        ));
    }
    if raw.len() != 4 {
        return Err(ValidationError::new(
            SEASON_FORMAT_ERROR,
            format!("season {raw:?} must be a 4-digit year"),
        ));
    }
    raw.parse().map_err(|_| {
        ValidationError::new(
            SEASON_FORMAT_ERROR,
            format!("season {raw:?} must be a 4-digit year"),
        )
    })
}

pub fn validate_season(raw: &str, min_year: i32, max_year: i32) -> Result<i32, ValidationError> {
    let year = parse_season_format(raw)?;
    if year < min_year || year > max_year {
        return Err(ValidationError::new(
            SEASON_RANGE_ERROR,
            format!("season {year} is outside the supported range {min_year}-{max_year}"),
        ));
    }
    Ok(year)
}

/// Validates an optional min/max year pair, falling back to the configured
/// bounds. The min > max check runs before the per-bound range check, so a
/// reversed pair is always reported as a logic error.
pub fn validate_year_range(
    min_raw: Option<&str>,
    max_raw: Option<&str>,
    min_year: i32,
    max_year: i32,
) -> Result<YearRange, ValidationError> {
    let min = match min_raw {
        Some(raw) => parse_season_format(raw)?,
        None => min_year,
    };
    let max = match max_raw {
        Some(raw) => parse_season_format(raw)?,
        None => max_year,
    };

    if min > max {
        return Err(ValidationError::new(
            YEAR_RANGE_LOGIC_ERROR,
            format!("minYear {min} is greater than maxYear {max}"),
        ));
    }

    for year in [min, max] {
        if year < min_year || year > max_year {
            return Err(ValidationError::new(
                SEASON_RANGE_ERROR,
                format!("season {year} is outside the supported range {min_year}-{max_year}"),
            ));
        }
    }

    Ok(YearRange { min, max })
}

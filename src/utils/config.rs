use chrono::Datelike;
use std::{env, fmt::Display, str::FromStr};

#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub ergast_base_url: String,
    pub min_year: i32,
    pub max_year: i32,
    pub default_page_size: i64,
    pub port: u16,
}

impl Config {
    pub fn init() -> Self {
        Config {
            db_url: env::var("DATABASE_URL").expect("DATABASE_URL not set"),
            ergast_base_url: env::var("ERGAST_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.jolpi.ca/ergast/f1".to_string()),
            min_year: parse_var("MIN_SEASON_YEAR", 1950),
            max_year: parse_var("MAX_SEASON_YEAR", chrono::Utc::now().year()),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", 30),
            port: parse_var("PORT", 4000),
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => panic!("Invalid {key} value {raw:?}: {e}"),
        },
        Err(_) => default,
    }
}

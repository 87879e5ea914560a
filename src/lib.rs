pub mod db;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use routes::make_app;
pub use services::extract::{extract_races, extract_standings};
pub use utils::pagination::Page;
pub use utils::validation::{validate_season, validate_year_range};

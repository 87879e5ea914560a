pub mod champions;
pub mod ergast;
pub mod extract;
pub mod ingest;
pub mod race_winners;
pub mod season_winners;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("unable to fetch data from the upstream API")]
    UpstreamUnavailable,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::race_winners::get_race_winners;
use crate::utils::state::AppState;

pub fn race_winner_routes() -> Router<Arc<AppState>> {
    Router::new().route("/seasons/{season}/race-winners", get(get_race_winners))
}

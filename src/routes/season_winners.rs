use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::season_winners::{get_season_winner, get_winners};
use crate::utils::state::AppState;

pub fn season_winner_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/winners", get(get_winners))
        .route("/season/{season_year}/winners", get(get_season_winner))
}

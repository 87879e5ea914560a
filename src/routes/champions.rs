use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::champions::get_champions;
use crate::utils::state::AppState;

pub fn champion_routes() -> Router<Arc<AppState>> {
    Router::new().route("/champions", get(get_champions))
}

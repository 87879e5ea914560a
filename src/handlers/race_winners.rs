use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::models::error::ApiError;
use crate::models::response::{Envelope, RaceWinnerDto};
use crate::services::race_winners;
use crate::utils::pagination::Page;
use crate::utils::state::AppState;
use crate::utils::validation::validate_season;

pub async fn get_race_winners(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<RaceWinnerDto>>, ApiError> {
    let season = validate_season(&season, state.config.min_year, state.config.max_year)?;
    let page = Page::from_params(&params, state.config.default_page_size);
    let envelope = race_winners::list_race_winners(&state, season, page).await?;
    Ok(Json(envelope))
}

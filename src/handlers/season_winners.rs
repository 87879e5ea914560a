use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::models::error::ApiError;
use crate::models::response::{Envelope, SeasonWinnerDto};
use crate::services::season_winners;
use crate::utils::pagination::Page;
use crate::utils::state::AppState;
use crate::utils::validation::{validate_season, validate_year_range};

pub async fn get_winners(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<SeasonWinnerDto>>, ApiError> {
    let range = validate_year_range(
        params.get("minYear").map(String::as_str),
        params.get("maxYear").map(String::as_str),
        state.config.min_year,
        state.config.max_year,
    )?;
    let page = Page::from_params(&params, state.config.default_page_size);
    let envelope = season_winners::list_winners(&state, range, page).await?;
    Ok(Json(envelope))
}

pub async fn get_season_winner(
    State(state): State<Arc<AppState>>,
    Path(season_year): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<SeasonWinnerDto>>, ApiError> {
    let season = validate_season(&season_year, state.config.min_year, state.config.max_year)?;
    let page = Page::from_params(&params, state.config.default_page_size);
    let envelope = season_winners::winner_for_season(&state, season, page).await?;
    Ok(Json(envelope))
}

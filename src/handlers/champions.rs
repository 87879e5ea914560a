use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    Json,
};

use crate::models::error::ApiError;
use crate::models::response::{Envelope, SeasonWinnerDto};
use crate::services::champions;
use crate::utils::pagination::Page;
use crate::utils::state::AppState;

pub async fn get_champions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<SeasonWinnerDto>>, ApiError> {
    let page = Page::from_params(&params, state.config.default_page_size);
    let envelope = champions::list_champions(&state, page).await?;
    Ok(Json(envelope))
}

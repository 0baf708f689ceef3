//! GIF search handler.
//!
//! Unlike the game-stats routes, upstream statuses are never propagated:
//! anything other than "no results" collapses to a generic 500.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use brawl_core::{GifQuery, GifResult};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::HttpError;
use crate::state::AppState;

/// Answer when the upstream found nothing.
pub const NO_GIF_FOUND: &str = "No GIF found";

/// Answer for every other failure.
pub const FAILED_TO_FETCH_GIFS: &str = "Failed to fetch GIFs";

/// Query string of `GET /gif`.
#[derive(Debug, Deserialize)]
pub struct GifParams {
    pub q: Option<String>,
}

/// Success body of `GET /gif`.
#[derive(Debug, Serialize)]
pub struct GifsResponse {
    pub gifs: Vec<GifResult>,
}

/// Trending or search GIFs.
///
/// A query string that does not deserialize (e.g. `q` given twice) is one
/// more failure and gets the same 500 as an upstream error.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<GifParams>, QueryRejection>,
) -> Result<Json<GifsResponse>, HttpError> {
    let Query(params) = params.map_err(|e| {
        error!(error = %e, "{FAILED_TO_FETCH_GIFS}");
        HttpError::Internal(FAILED_TO_FETCH_GIFS.to_string())
    })?;
    let query = GifQuery::from_param(params.q.as_deref());

    let gifs = state.gifs.search(&query).await.map_err(|e| {
        error!(error = %e, "{FAILED_TO_FETCH_GIFS}");
        HttpError::Internal(FAILED_TO_FETCH_GIFS.to_string())
    })?;

    if gifs.is_empty() {
        return Err(HttpError::NotFound(NO_GIF_FOUND.to_string()));
    }

    Ok(Json(GifsResponse { gifs }))
}

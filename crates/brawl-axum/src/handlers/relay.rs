//! Game-stats relay handlers.
//!
//! Every game-stats route has the same shape: turn the path parameter into
//! one upstream path, forward it, relay the JSON. The factories below build
//! that handler from a path builder and the route's fallback message.

use axum::Json;
use axum::extract::{Path, State};
use axum::routing::{MethodRouter, get};
use brawl_core::{PlayerTag, UpstreamError};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::HttpError;
use crate::state::AppState;

/// Forward `path` and relay the answer, mapping failures for this route.
pub async fn relay(
    state: &AppState,
    path: &str,
    fallback: &'static str,
) -> Result<Json<Value>, HttpError> {
    match state.stats.forward(path).await {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            match &err {
                UpstreamError::Api { status, message } => {
                    debug!(path, status, message, "Relaying upstream rejection");
                }
                UpstreamError::Transport { cause } => {
                    error!(path, cause, "{fallback}");
                }
            }
            Err(HttpError::from_upstream(err, fallback))
        }
    }
}

/// Route without parameters, always forwarding the same upstream path.
pub fn fixed(path: &'static str, fallback: &'static str) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move { relay(&state, path, fallback).await })
}

/// Route with a tag parameter, normalized before the path is built.
pub fn by_tag(build: fn(&PlayerTag) -> String, fallback: &'static str) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, Path(raw): Path<String>| async move {
            let path = build(&PlayerTag::parse(&raw));
            relay(&state, &path, fallback).await
        },
    )
}

/// Route with an id parameter, passed to the path builder unmodified.
pub fn by_id(build: fn(&str) -> String, fallback: &'static str) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, Path(id): Path<String>| async move {
            let path = build(&id);
            relay(&state, &path, fallback).await
        },
    )
}

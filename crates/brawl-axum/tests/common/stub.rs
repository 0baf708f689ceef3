//! Stub of both upstream APIs.
//!
//! Game-stats requests echo the raw path and Authorization header the relay
//! sent. A few fixed paths misbehave on purpose:
//!
//! - `/clubs/%23MISSING` answers 404 with a `reason`
//! - `/brawlers/0` answers 403 with a plain-text body
//! - `/gamemodes` answers 200 with a body that is not JSON
//!
//! GIF requests answer three GIFs whose ids encode the endpoint and query;
//! `q=nothing` yields no results and `q=broken` an unparseable body.

use std::collections::HashMap;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use tokio::net::TcpListener;

use super::{BRAWL_KEY, GIPHY_KEY};

async fn brawl(uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().trim_start_matches("/brawl/v1").to_string();
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if auth != format!("Bearer {BRAWL_KEY}") {
        return (
            StatusCode::FORBIDDEN,
            axum::Json(json!({ "reason": "accessDenied", "message": "Invalid authorization" })),
        )
            .into_response();
    }

    match path.as_str() {
        "/clubs/%23MISSING" => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "reason": "notFound" })),
        )
            .into_response(),
        "/brawlers/0" => (StatusCode::FORBIDDEN, "forbidden").into_response(),
        "/gamemodes" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => axum::Json(json!({ "path": path, "auth": auth })).into_response(),
    }
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> &'a str {
    params.get(name).map(String::as_str).unwrap_or_default()
}

async fn gifs(
    Path(endpoint): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if param(&params, "api_key") != GIPHY_KEY {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({ "message": "Unauthorized" })),
        )
            .into_response();
    }
    if param(&params, "limit") != "3" || param(&params, "rating") != "pg" {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match param(&params, "q") {
        "nothing" => axum::Json(json!({ "data": [] })).into_response(),
        "broken" => (StatusCode::OK, "not json").into_response(),
        q => {
            let data: Vec<_> = (0..3)
                .map(|i| {
                    let id = format!("{endpoint}-{q}-{i}");
                    json!({
                        "id": id,
                        "title": "ignored",
                        "images": {
                            "fixed_width_small": { "url": format!("https://media.test/{i}/100w.gif") },
                            "original": { "url": format!("https://media.test/{i}/giphy.gif") },
                        }
                    })
                })
                .collect();
            axum::Json(json!({ "data": data })).into_response()
        }
    }
}

/// Spawn the stub and return its base URL.
pub async fn spawn() -> String {
    let app = Router::new()
        .route("/brawl/v1/{*rest}", get(brawl))
        .route("/gifs/{endpoint}", get(gifs));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move { axum::serve(listener, app).await });

    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}")
}

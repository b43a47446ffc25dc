//! HTTP routes.
//!
//! - `GET /`: static greeting
//! - `POST /score`: classify a JSON payload, `1`/`0` on success, 400 with
//!   the aggregated error report otherwise

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use mushroom_core::score_body;

/// Build the service router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/score", post(score_handler))
}

pub(crate) async fn home_handler() -> Html<&'static str> {
    Html("<p>Hello World</p>")
}

/// The body is read raw so that malformed or absent JSON reaches the scorer
/// as an empty mapping instead of being rejected by an extractor.
pub(crate) async fn score_handler(body: Bytes) -> Response {
    match score_body(&body) {
        Ok(classification) => {
            tracing::debug!(classification = %classification, "Scored request");
            (StatusCode::OK, classification.as_body()).into_response()
        }
        Err(e) => {
            tracing::warn!(
                missing = e.missing.len(),
                invalid = e.invalid.len(),
                "Rejected scoring request"
            );
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

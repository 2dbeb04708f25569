//! HTTP route handlers for the widget delivery service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Demo host page (mounts the widget when query
//!                         parameters carry a complete embed config)
//! GET  /health          - Health check
//!
//! # Widget
//! GET  /widget/panel    - Server-rendered panel fragment (fetches the
//!                         configured products; failures render the error
//!                         panel, incomplete config renders nothing)
//! GET  /widget/snippet  - Copy-paste embed <script> tag for a config
//!
//! # Static
//! GET  /static/embed.js             - Embed loader script
//! GET  /static/css/widget.css       - Widget stylesheet
//! GET  /static/css/derived/...      - Content-hashed stylesheet copies
//! ```

pub mod demo;
pub mod widget;

use axum::http::Uri;
use axum::{Router, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create the application router (static assets are nested in `main`).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(demo::index))
        .route("/widget/panel", get(widget::panel))
        .route("/widget/snippet", get(widget::snippet))
        .fallback(not_found)
}

/// Fallback for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

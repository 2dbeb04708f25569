//! Widget fragment and snippet handlers.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use shopin_widget::config::EmbedAttrs;
use shopin_widget::{StorefrontClient, Widget, views};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Server-rendered panel fragment.
///
/// Drives one controller through open → fetch → render. Fetch failures stay
/// inside the widget: the error panel (with its Retry control) is rendered
/// with HTTP 200. An incomplete embed config renders nothing at all, per the
/// widget's silent-skip contract.
pub async fn panel(
    State(state): State<AppState>,
    Query(attrs): Query<EmbedAttrs>,
) -> Result<Response> {
    let Some(config) = attrs.resolve() else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let client = StorefrontClient::with_http_client(state.http().clone(), &config);
    let mut widget = Widget::new(config, client);
    widget.open().await;

    let html = views::render_panel(widget.config(), widget.state())?;
    Ok(Html(html).into_response())
}

/// Copy-paste embed snippet for a configuration.
///
/// Unlike the panel route this is an integrator-facing tool, so an
/// incomplete config is reported as a client error.
pub async fn snippet(
    State(state): State<AppState>,
    Query(attrs): Query<EmbedAttrs>,
) -> Result<Response> {
    let Some(config) = attrs.resolve() else {
        return Err(AppError::BadRequest(
            "shop_domain, token, and product_ids are required".to_string(),
        ));
    };

    let snippet = config.embed_snippet(&state.config().embed_script_url());
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        snippet,
    )
        .into_response())
}

//! Demo host page.
//!
//! Stands in for an external website embedding the widget: when the query
//! string carries a complete embed config the generated `<script>` tag is
//! placed into the page, so the widget mounts exactly as it would on a
//! merchant's site.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use shopin_widget::config::EmbedAttrs;

use crate::filters;
use crate::state::AppState;

/// Demo page template.
#[derive(Template, WebTemplate)]
#[template(path = "demo.html")]
pub struct DemoTemplate {
    /// The generated embed tag, present when the query resolved.
    pub embed_tag: Option<String>,
}

/// Display the demo host page.
pub async fn index(
    State(state): State<AppState>,
    Query(attrs): Query<EmbedAttrs>,
) -> impl IntoResponse {
    let embed_tag = attrs
        .resolve()
        .map(|config| config.embed_snippet(&state.config().embed_script_url()));

    DemoTemplate { embed_tag }
}

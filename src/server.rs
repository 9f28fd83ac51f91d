use axum::{
    Router,
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use leptos::tachys::view::RenderHtml;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::connector::ReleaseStage;
use crate::ui::components::{BadgeNode, BadgeOptions, release_stage_badge};
use crate::ui::gallery::gallery_page;

/// Query string of `GET /badge`. Omitted flags take the [`BadgeOptions`] defaults.
#[derive(Debug, Default, Deserialize)]
pub struct BadgeQuery {
    pub stage: Option<ReleaseStage>,
    pub small: Option<bool>,
    pub tooltip: Option<bool>,
}

impl BadgeQuery {
    pub fn options(&self) -> BadgeOptions {
        let defaults = BadgeOptions::default();
        BadgeOptions {
            small: self.small.unwrap_or(defaults.small),
            tooltip: self.tooltip.unwrap_or(defaults.tooltip),
        }
    }

    pub fn stage(&self) -> Option<&ReleaseStage> {
        self.stage.as_ref()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(gallery_handler))
        .route("/badge", get(badge_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let address = config.bind_address();
    let state = AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %address,
        "Server started"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn gallery_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(gallery_page(state.i18n, state.theme))
}

/// Bare badge markup, empty when there is nothing to show.
async fn badge_handler(
    State(state): State<AppState>,
    Query(query): Query<BadgeQuery>,
) -> impl IntoResponse {
    let html = release_stage_badge(
        query.stage(),
        query.options(),
        state.i18n.as_ref(),
        state.theme.as_ref(),
    )
    .map(BadgeNode::render)
    .to_html();

    Html(html)
}

async fn health_handler() -> &'static str {
    "ok"
}

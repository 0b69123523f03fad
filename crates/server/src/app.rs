//! Router and request handlers.
//!
//! One GET route renders the form, one POST route runs the pipeline. Each
//! interaction is independent: the only shared state is the configured
//! pipeline behind an `Arc`.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use serde::Deserialize;
use tracing::{info, warn};

use recast_core::{AccessContext, Audience, Channel, RecastError, Recaster};

use crate::views::{PageView, render_page};

pub struct AppState {
    pub recaster: Recaster,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/rewrite", post(rewrite))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct RewriteForm {
    #[serde(default)]
    url: String,
    #[serde(default)]
    audience: String,
    #[serde(default)]
    context: String,
    #[serde(default)]
    channel: String,
}

/// A user-facing message for each failure class, so fetch, extraction,
/// and generation problems read differently.
fn error_message(err: &RecastError) -> String {
    if err.is_fetch_error() {
        format!("Could not fetch the page. {}", err)
    } else if err.is_model_error() {
        format!("Could not rewrite the content. {}", err)
    } else {
        format!("Could not extract content from the page. {}", err)
    }
}

async fn rewrite(State(state): State<Arc<AppState>>, Form(form): Form<RewriteForm>) -> Html<String> {
    let mut view = PageView {
        url: form.url.clone(),
        audience: form.audience.clone(),
        context: form.context.clone(),
        channel: form.channel.clone(),
        ..Default::default()
    };

    if form.url.trim().is_empty() {
        view.warning = Some("Please enter a valid URL.".to_string());
        return Html(render_page(&view));
    }

    let audience = match form.audience.parse::<Audience>() {
        Ok(audience) => audience,
        Err(e) => {
            view.error = Some(e);
            return Html(render_page(&view));
        }
    };
    let context = match form.context.parse::<AccessContext>() {
        Ok(context) => context,
        Err(e) => {
            view.error = Some(e);
            return Html(render_page(&view));
        }
    };
    let channel = if form.channel.is_empty() {
        None
    } else {
        match form.channel.parse::<Channel>() {
            Ok(channel) => Some(channel),
            Err(e) => {
                view.error = Some(e);
                return Html(render_page(&view));
            }
        }
    };

    info!(url = %form.url, audience = %audience, context = %context, "rewrite requested");

    match state.recaster.rewrite_url(&form.url, audience, context, channel).await {
        Ok(rewrite) => {
            info!(words = rewrite.word_count, "rewrite complete");
            view.title = rewrite.title;
            view.original = Some(rewrite.original);
            view.rewritten = Some(rewrite.rewritten);
        }
        Err(err) => {
            warn!(error = %err, "rewrite failed");
            view.error = Some(error_message(&err));
        }
    }

    Html(render_page(&view))
}

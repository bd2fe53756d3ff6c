//! HTTP request handlers

use super::state::AppState;
use crate::results::Article;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tera::Context;
use tracing::error;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Page number. Kept as a raw string: an absent or empty value defaults
    /// to 1, while a present-but-unparsable one is a server error.
    pub page: Option<String>,
}

/// Article fields as rendered into the results template
#[derive(Debug, Serialize)]
struct ArticleView {
    source_name: String,
    author: String,
    title: String,
    description: String,
    url: String,
    url_to_image: String,
    published: String,
    content: String,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            source_name: article.source.name.clone(),
            author: article.author.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            url: article.url.clone(),
            url_to_image: article.url_to_image.clone(),
            published: article.format_published_date(),
            content: article.content.clone(),
        }
    }
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());

    match state.templates.render("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Search handler
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => return (StatusCode::BAD_REQUEST, "no query").into_response(),
    };

    let page = match params.page.as_deref() {
        None | Some("") => 1,
        Some(raw) => match raw.parse::<u32>() {
            Ok(page) => page,
            Err(_) => {
                return (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected server error")
                    .into_response()
            }
        },
    };

    let start = Instant::now();
    let outcome = state.search.search(state.credential(), &query, page).await;
    let elapsed = start.elapsed();

    let mut search_state = match outcome {
        Ok(search_state) => search_state,
        Err(failure) => {
            error!(query = %failure.state.query, "search failed: {}", failure.error);
            return (StatusCode::INTERNAL_SERVER_ERROR, failure.error.to_string())
                .into_response();
        }
    };

    search_state.elapsed = elapsed;
    search_state.timeout = state.search.timeout();

    let articles: Vec<ArticleView> = search_state.page.articles.iter().map(Into::into).collect();

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("query", &search_state.query);
    ctx.insert("articles", &articles);
    ctx.insert("total_results", &search_state.page.total_results);
    ctx.insert("total_pages", &search_state.total_pages);
    ctx.insert("current_page", &search_state.current_page());
    ctx.insert("previous_page", &search_state.previous_page());
    ctx.insert("next_page", &search_state.requested_page);
    ctx.insert("is_last_page", &search_state.is_last_page());
    ctx.insert("elapsed_ms", &(search_state.elapsed.as_millis() as u64));
    ctx.insert("timeout_ms", &(search_state.timeout.as_millis() as u64));

    match state.templates.render("search.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt() -> impl IntoResponse {
    (
        [(axum::http::header::CONTENT_TYPE, "text/plain")],
        "User-agent: *\nAllow: /\nDisallow: /search\n",
    )
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

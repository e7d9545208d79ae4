//! Development server exposing the content as a JSON API

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{BlogPost, ContentReader, ContentType, Project};
use crate::helpers::{filter_by_tag, paginate, sort_by_published_desc, tag_counts, Page};
use crate::seo::SeoMetadata;
use crate::Folio;

/// Server state
struct ServerState {
    config: SiteConfig,
    reader: ContentReader,
}

/// Error body returned by the API
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Content task failed: {}", err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Query string of list endpoints
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    tag: Option<String>,
    page: Option<usize>,
}

/// Build the API router for a site
pub fn router(folio: &Folio) -> Router {
    let state = Arc::new(ServerState {
        config: folio.config.clone(),
        reader: folio.reader(),
    });

    Router::new()
        .route("/api/health", get(health))
        .route("/api/blog", get(list_blog))
        .route("/api/blog/:slug", get(get_blog_post))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:slug", get(get_project))
        .route("/api/tags", get(list_tags))
        .route("/api/categories", get(list_categories))
        .route("/api/seo/:kind/:slug", get(get_seo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the development server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let app = router(folio);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Content API running at http://{}:{}/api", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run a filesystem read on the blocking pool
async fn blocking<T, F>(f: F) -> std::result::Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await?)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_blog(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Page<BlogPost>> {
    let reader = state.reader.clone();
    let mut posts = blocking(move || reader.list::<BlogPost>()).await?;

    if posts.is_empty() {
        posts = state.config.fallback.blog_posts();
    }
    sort_by_published_desc(&mut posts);

    if let Some(tag) = query.tag.as_deref().filter(|t| !t.trim().is_empty()) {
        posts = filter_by_tag(posts, tag);
    }

    Ok(Json(paginate(
        posts,
        query.page.unwrap_or(1),
        state.config.per_page,
    )))
}

async fn get_blog_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> ApiResult<BlogPost> {
    let reader = state.reader.clone();
    let lookup = slug.clone();
    blocking(move || reader.get_by_slug::<BlogPost>(&lookup))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no blog post '{}'", slug)))
}

async fn list_projects(State(state): State<Arc<ServerState>>) -> ApiResult<Vec<Project>> {
    let reader = state.reader.clone();
    let mut projects = blocking(move || reader.list::<Project>()).await?;
    sort_by_published_desc(&mut projects);
    Ok(Json(projects))
}

async fn get_project(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> ApiResult<Project> {
    let reader = state.reader.clone();
    let lookup = slug.clone();
    blocking(move || reader.get_by_slug::<Project>(&lookup))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no project '{}'", slug)))
}

async fn list_tags(State(state): State<Arc<ServerState>>) -> ApiResult<IndexMap<String, usize>> {
    let reader = state.reader.clone();
    let posts = blocking(move || reader.list::<BlogPost>()).await?;
    Ok(Json(tag_counts(&posts)))
}

async fn list_categories(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(state.config.fallback.categories.clone())
}

async fn get_seo(
    State(state): State<Arc<ServerState>>,
    Path((kind, slug)): Path<(String, String)>,
) -> ApiResult<SeoMetadata> {
    let kind: ContentType = kind
        .parse()
        .map_err(|e: crate::content::UnknownContentType| ApiError::not_found(e.to_string()))?;

    let reader = state.reader.clone();
    let lookup = slug.clone();
    let item = blocking(move || reader.get_content_by_slug(kind, &lookup))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("no {} entry '{}'", kind, slug)))?;

    Ok(Json(SeoMetadata::for_item(&state.config, &item)))
}

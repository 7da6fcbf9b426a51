use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use search_core::snippet::{highlight_terms, literal_terms, snippet};
use search_core::{DocId, Library, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { DEFAULT_TOP_K }

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[derive(Clone)]
pub struct AppState {
    pub library: Arc<Library>,
}

pub fn build_app(library: Library) -> Router {
    let app_state = AppState { library: Arc::new(library) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let library = &state.library;

    let ranked = library.engine().rank(&params.q);
    let total_hits = ranked.len();
    let k = params.k.clamp(1, MAX_K);
    let hits = library.resolve(ranked.into_iter().take(k).collect());

    let raw_terms = literal_terms(&params.q);
    let results = hits
        .into_iter()
        .map(|hit| SearchHit {
            doc_id: hit.doc.doc_id,
            score: hit.score,
            title: hit.doc.title.clone(),
            url: hit.doc.url.clone(),
            snippet: highlight_terms(&snippet(&hit.doc.text, &params.q), &raw_terms),
        })
        .collect();

    let elapsed = start.elapsed();
    Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results })
}

pub async fn doc_handler(State(state): State<AppState>, Path(doc_id): Path<DocId>) -> (StatusCode, Json<serde_json::Value>) {
    match state.library.corpus().get(doc_id) {
        Some(doc) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "doc_id": doc.doc_id,
                "title": doc.title,
                "url": doc.url,
                "text": doc.text,
            })),
        ),
        None => (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" }))),
    }
}

//! # API REST
//!
//! Stateless REST surface for the Teen Health Talk consultation guide.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation generated by utoipa
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Session state lives with the client: the API serves the active section list for a mode and
//! the documents generated at the end of a consultation. Nothing is stored server-side.

#![warn(rust_2018_idioms)]

pub mod models;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tht_core::{
    ConsultationMode, DocumentGenerator, FixedClock, ModeResolver, SectionCatalog, SystemClock,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use models::{
    ConceptRes, DocumentsQuery, DocumentsRes, HealthRes, ModeQuery, PromptRes, SectionRes,
    SectionsRes,
};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<SectionCatalog>,
}

impl AppState {
    pub fn new(catalog: SectionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_sections, get_section, documents),
    components(schemas(
        HealthRes,
        PromptRes,
        ConceptRes,
        SectionRes,
        SectionsRes,
        DocumentsRes
    ))
)]
pub struct ApiDoc;

/// Build the REST router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sections", get(list_sections))
        .route("/sections/:id", get(get_section))
        .route("/documents", get(documents))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Teen Health Talk REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/sections",
    params(ModeQuery),
    responses(
        (status = 200, description = "Active sections in traversal order", body = SectionsRes)
    )
)]
/// List the active sections for a consultation mode
///
/// Unrecognised or missing modes resolve to the full consultation.
async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
) -> Json<SectionsRes> {
    let (mode, sections) = ModeResolver::new(&state.catalog).resolve_selector(query.mode.as_deref());
    Json(SectionsRes {
        mode: mode.as_str().to_owned(),
        sections: sections.iter().map(SectionRes::from).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/sections/{id}",
    params(
        ("id" = String, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Section content", body = SectionRes),
        (status = 404, description = "Section not found")
    )
)]
/// Fetch one section by id
async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SectionRes>, (StatusCode, &'static str)> {
    state
        .catalog
        .get(&id)
        .map(|section| Json(SectionRes::from(section)))
        .ok_or((StatusCode::NOT_FOUND, "Section not found"))
}

#[utoipa::path(
    get,
    path = "/documents",
    params(DocumentsQuery),
    responses(
        (status = 200, description = "Clinical summary and concept list", body = DocumentsRes),
        (status = 400, description = "Bad request")
    )
)]
/// Generate the end-of-consultation documents for a mode
///
/// The summary date defaults to today; pass `date` to pin it.
async fn documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentsQuery>,
) -> Result<Json<DocumentsRes>, (StatusCode, &'static str)> {
    let mode = ConsultationMode::from_selector(query.mode.as_deref());
    let sections = ModeResolver::new(&state.catalog).resolve(mode);

    let documents = match query.date.as_deref() {
        Some(date) => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                tracing::warn!("rejected documents date {:?}: {}", date, e);
                (StatusCode::BAD_REQUEST, "date must be YYYY-MM-DD")
            })?;
            DocumentGenerator::new(FixedClock(date)).documents(mode, &sections)
        }
        None => DocumentGenerator::new(SystemClock).documents(mode, &sections),
    };

    Ok(Json(DocumentsRes::from(documents)))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

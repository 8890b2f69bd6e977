pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::export::handlers as export_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis",
            post(analysis_handlers::handle_generate_analysis),
        )
        // Export API
        .route(
            "/api/v1/export/markdown",
            post(export_handlers::handle_export_markdown),
        )
        .route(
            "/api/v1/export/docx",
            post(export_handlers::handle_export_docx),
        )
        .route(
            "/api/v1/export/pdf",
            post(export_handlers::handle_export_pdf),
        )
        .with_state(state)
}

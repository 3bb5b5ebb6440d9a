//! HTTP view of the relational mirror.
//!
//! `GET /instructors` renders the mirror's instructor summary as HTML. Every
//! request re-queries the database, so the page follows its contents.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, info};
use crate::api::view;
use crate::infrastructure::mirror;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/instructors", get(instructors))
        .fallback(not_found)
        .with_state(state)
}

/// Serve the instructor page on `127.0.0.1:<port>` until the process exits.
pub async fn start_server(port: u16, db_path: &Path) -> Result<()> {
    let address = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    info!("serving http://{}/instructors from {}", address, db_path.display());
    axum::serve(listener, build_router(AppState::new(db_path.to_path_buf()))).await?;
    Ok(())
}

/// GET /instructors
async fn instructors(State(state): State<AppState>) -> Response {
    let db_path = Arc::clone(&state.db_path);
    let rows = tokio::task::spawn_blocking(move || mirror::instructor_summary(&db_path)).await;

    match rows {
        Ok(Ok(rows)) => Html(view::render_instructor_page(&rows)).into_response(),
        Ok(Err(e)) => {
            error!("mirror query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error: Unable to open database at {}", state.db_path.display()),
            )
                .into_response()
        }
        Err(e) => {
            error!("mirror query task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

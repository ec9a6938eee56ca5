use crate::adapters::http::AppState;
use crate::domain::ports::UserStore;
use crate::utils::error::{AtsError, Result};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path as FsPath, PathBuf};
use std::sync::Arc;

pub const INDEX_PAGE: &str = "register.html";

/// Joins `filename` onto `root`, refusing anything that could leave it.
fn resolve_page(root: &FsPath, filename: &str) -> Option<PathBuf> {
    let relative = FsPath::new(filename);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

fn not_found_or_io(e: std::io::Error, path: &FsPath) -> AtsError {
    if e.kind() == std::io::ErrorKind::NotFound {
        tracing::debug!("Page not found: {}", path.display());
        AtsError::NotFound
    } else {
        AtsError::IoError(e)
    }
}

/// Pages are served byte for byte; only regular files count.
async fn read_page(root: &FsPath, filename: &str) -> Result<Response> {
    let path = resolve_page(root, filename).ok_or(AtsError::NotFound)?;

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| not_found_or_io(e, &path))?;
    if !metadata.is_file() {
        tracing::debug!("Not a regular file: {}", path.display());
        return Err(AtsError::NotFound);
    }

    let contents = tokio::fs::read(&path)
        .await
        .map_err(|e| not_found_or_io(e, &path))?;
    Ok(([(header::CONTENT_TYPE, "text/html")], contents).into_response())
}

pub async fn index_handler<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Response> {
    read_page(&state.static_dir, INDEX_PAGE).await
}

pub async fn page_handler<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(filename): Path<String>,
) -> Response {
    if !filename.ends_with(".html") {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    read_page(&state.static_dir, &filename).await.into_response()
}

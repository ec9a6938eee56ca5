use crate::adapters::http::AppState;
use crate::domain::model::{LoginRequest, RegisterRequest};
use crate::domain::ports::UserStore;
use crate::utils::error::{AtsError, Result};
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Bodies are parsed by hand so that bad JSON gets the same `{"error": ...}` shape as every other failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        AtsError::MalformedPayload {
            message: e.to_string(),
        }
    })
}

pub async fn register_handler<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let request: RegisterRequest = parse_body(&body)?;
    let response = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login_handler<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let request: LoginRequest = parse_body(&body)?;
    let response = state.auth.login(request).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn not_found_handler() -> AtsError {
    AtsError::NotFound
}

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::*;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        // Identity
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
        .with_state(state)
}

// ============ Request Helpers ============

/// Unparsable or missing JSON bodies are treated as an empty object, so the
/// usual field validation decides the response.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable request body: {}", rejection.body_text());
            T::default()
        }
    }
}

/// Header bytes that are not valid UTF-8 are replaced rather than dropped,
/// so a present but undecodable header still reaches the token check.
fn authorization(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    headers
        .get(header::AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
}

// ============ Health Endpoints ============

async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.health())
}

// ============ Identity Endpoints ============

async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body_or_default(payload);
    let identity = state.register(&req)?;
    Ok((StatusCode::CREATED, Json(identity)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body_or_default(payload);
    let resp = state.login(&req)?;
    Ok(Json(resp))
}

async fn profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let identity = state.profile(authorization(&headers).as_deref())?;
    Ok(Json(identity))
}

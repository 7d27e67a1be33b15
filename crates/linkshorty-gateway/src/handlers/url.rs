use crate::error::{ApiError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, GetUrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use linkshorty_core::{ShortCode, UrlRecord};
use tracing::debug;

pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    // Presence validation lives here; the core stores whatever it is given.
    if request.original_url.is_empty() {
        return Err(ApiError::EmptyOriginalUrl);
    }

    let code = state
        .shortener()
        .shorten(request.original_url.clone())
        .await?;
    debug!(code = %code, "shortened url");

    let response = CreateUrlResponse {
        short_url: code.to_url(state.base_url()),
        short_code: code.to_string(),
        original_url: request.original_url,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GetUrlResponse>> {
    let record = resolve_code(&state, &short_code).await?;
    Ok(Json(GetUrlResponse {
        original_url: record.original_url,
    }))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let record = resolve_code(&state, &short_code).await?;
    Ok(Redirect::temporary(&record.original_url))
}

/// Looks up a path parameter as a short code.
///
/// Strings that fail `ShortCode` validation can never name a stored mapping,
/// so they answer `NotFound` without consulting the store.
async fn resolve_code(state: &AppState, short_code: &str) -> Result<UrlRecord> {
    let Ok(code) = ShortCode::new(short_code) else {
        return Err(ApiError::NotFound);
    };

    state
        .shortener()
        .resolve(&code)
        .await?
        .ok_or(ApiError::NotFound)
}

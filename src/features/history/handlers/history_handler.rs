use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::history::dtos::HistoryEntryResponseDto;
use crate::features::history::services::HistoryService;
use crate::features::nik::dtos::{NikParseResponse, NikRequestDto};
use crate::features::nik::handlers::MISSING_NIK_MESSAGE;
use crate::features::nik::{NikError, NikService};
use crate::shared::types::{ApiResponse, Meta};

/// State for history handlers
#[derive(Clone)]
pub struct HistoryState {
    pub history_service: Arc<HistoryService>,
    pub nik_service: Arc<NikService>,
}

/// List recorded lookups, most recent first
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Recorded lookups", body = ApiResponse<Vec<HistoryEntryResponseDto>>)
    ),
    tag = "history"
)]
pub async fn list_history(
    State(state): State<HistoryState>,
) -> Result<Json<ApiResponse<Vec<HistoryEntryResponseDto>>>> {
    let entries: Vec<HistoryEntryResponseDto> = state
        .history_service
        .list()
        .await
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta {
        total: entries.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(entries), None, Some(meta))))
}

/// Decode a NIK and record the outcome
///
/// Rejected NIKs are recorded too, as long as they are 16 digits.
#[utoipa::path(
    post,
    path = "/api/history",
    request_body = NikRequestDto,
    responses(
        (status = 201, description = "Lookup recorded", body = ApiResponse<HistoryEntryResponseDto>),
        (status = 400, description = "Missing or malformed NIK"),
        (status = 500, description = "Region catalog unavailable")
    ),
    tag = "history"
)]
pub async fn record_history(
    State(state): State<HistoryState>,
    AppJson(dto): AppJson<NikRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<HistoryEntryResponseDto>>)> {
    let nik = dto
        .nik
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_NIK_MESSAGE.to_string()))?;

    let result = state.nik_service.parse(&nik).await;
    match &result {
        Err(e @ NikError::InvalidFormat) => return Err(AppError::BadRequest(e.to_string())),
        Err(NikError::CatalogUnavailable(msg)) => {
            return Err(AppError::CatalogUnavailable(msg.clone()))
        }
        _ => {}
    }

    let entry = state
        .history_service
        .save(&nik, NikParseResponse::from(&result))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(entry.into()), None, None)),
    ))
}

/// Remove the entry for one NIK
#[utoipa::path(
    delete,
    path = "/api/history/{nik}",
    params(
        ("nik" = String, Path, description = "NIK of the entry to remove")
    ),
    responses(
        (status = 200, description = "Entry removed"),
        (status = 404, description = "No entry for this NIK")
    ),
    tag = "history"
)]
pub async fn delete_history_entry(
    State(state): State<HistoryState>,
    Path(nik): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    if !state.history_service.remove(&nik).await {
        return Err(AppError::NotFound(format!(
            "No history entry for NIK '{}'",
            nik
        )));
    }
    Ok(Json(ApiResponse::success(
        None,
        Some("History entry removed".to_string()),
        None,
    )))
}

/// Remove every entry
#[utoipa::path(
    delete,
    path = "/api/history",
    responses(
        (status = 200, description = "History cleared")
    ),
    tag = "history"
)]
pub async fn clear_history(State(state): State<HistoryState>) -> Result<Json<ApiResponse<()>>> {
    state.history_service.clear().await;
    Ok(Json(ApiResponse::success(
        None,
        Some("History cleared".to_string()),
        None,
    )))
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::nik::dtos::{
    GenerateNikRequestDto, GeneratedNikResponseDto, NikParseResponse, NikQuery, NikRequestDto,
};
use crate::features::nik::error::{NikError, NikErrorKind};
use crate::features::nik::models::ParsedNik;
use crate::features::nik::services::NikService;
use crate::shared::types::ApiResponse;

pub const MISSING_NIK_MESSAGE: &str = "NIK parameter is required";

/// HTTP status for a decode outcome. Semantic rejections are still a
/// successful request; only malformed input and an unusable catalog are not.
pub fn outcome_status(result: &std::result::Result<ParsedNik, NikError>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::OK,
        Err(e) => match e.kind() {
            NikErrorKind::Format => StatusCode::BAD_REQUEST,
            NikErrorKind::CatalogUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            NikErrorKind::UnknownRegion | NikErrorKind::InvalidDate => StatusCode::OK,
        },
    }
}

fn envelope(status: StatusCode, body: NikParseResponse) -> Response {
    (status, Json(body)).into_response()
}

async fn validate(service: &NikService, nik: Option<String>) -> Response {
    let Some(nik) = nik.filter(|n| !n.is_empty()) else {
        return envelope(
            StatusCode::BAD_REQUEST,
            NikParseResponse::error(MISSING_NIK_MESSAGE),
        );
    };

    let result = service.parse(&nik).await;
    envelope(outcome_status(&result), NikParseResponse::from(&result))
}

/// Validate and decode a NIK given as a query parameter
#[utoipa::path(
    get,
    path = "/api/nik/validate",
    params(NikQuery),
    responses(
        (status = 200, description = "Decode outcome (valid or rejected NIK)", body = NikParseResponse),
        (status = 400, description = "Missing or malformed NIK", body = NikParseResponse),
        (status = 500, description = "Region catalog unavailable", body = NikParseResponse)
    ),
    tag = "nik"
)]
pub async fn validate_nik_get(
    State(service): State<Arc<NikService>>,
    Query(query): Query<NikQuery>,
) -> Response {
    validate(&service, query.nik).await
}

/// Validate and decode a NIK given in a JSON body
#[utoipa::path(
    post,
    path = "/api/validate/nik",
    request_body = NikRequestDto,
    responses(
        (status = 200, description = "Decode outcome (valid or rejected NIK)", body = NikParseResponse),
        (status = 400, description = "Missing or malformed NIK, or invalid JSON", body = NikParseResponse),
        (status = 500, description = "Region catalog unavailable", body = NikParseResponse)
    ),
    tag = "nik"
)]
pub async fn validate_nik_post(
    State(service): State<Arc<NikService>>,
    payload: std::result::Result<AppJson<NikRequestDto>, AppJsonRejection>,
) -> Response {
    match payload {
        Ok(AppJson(dto)) => validate(&service, dto.nik).await,
        Err(rejection) => envelope(
            StatusCode::BAD_REQUEST,
            NikParseResponse::error(rejection.message()),
        ),
    }
}

/// Compose a NIK from region codes, birth date, sex and sequence
#[utoipa::path(
    post,
    path = "/api/nik/generate",
    request_body = GenerateNikRequestDto,
    responses(
        (status = 200, description = "Generated NIK with its decode outcome", body = ApiResponse<GeneratedNikResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "nik"
)]
pub async fn generate_nik(
    State(service): State<Arc<NikService>>,
    AppJson(dto): AppJson<GenerateNikRequestDto>,
) -> Result<Json<ApiResponse<GeneratedNikResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let generated = service
        .generate(
            &dto.province_code,
            &dto.city_code,
            &dto.district_code,
            dto.birth_date,
            dto.sex,
            &dto.sequence,
        )
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if let Err(NikError::CatalogUnavailable(msg)) = &generated.verification {
        return Err(AppError::CatalogUnavailable(msg.clone()));
    }

    let response = GeneratedNikResponseDto {
        verification: NikParseResponse::from(&generated.verification),
        nik: generated.nik,
    };

    Ok(Json(ApiResponse::success(
        Some(response),
        Some("NIK generated".to_string()),
        None,
    )))
}

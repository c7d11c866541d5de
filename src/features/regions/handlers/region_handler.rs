use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{
    CityResponseDto, DistrictResponseDto, ProvinceResponseDto, RegionSearchQuery,
};
use crate::features::regions::services::RegionCatalogService;
use crate::shared::types::{ApiResponse, Meta};

fn list_response<T>(items: Vec<T>) -> Json<ApiResponse<Vec<T>>> {
    let meta = Meta {
        total: items.len() as i64,
    };
    Json(ApiResponse::success(Some(items), None, Some(meta)))
}

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>),
        (status = 500, description = "Region catalog unavailable")
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionCatalogService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let catalog = service.catalog().await?;
    let dtos: Vec<ProvinceResponseDto> = catalog
        .provinces()
        .into_iter()
        .filter(|p| query.matches(&p.name))
        .map(Into::into)
        .collect();
    Ok(list_response(dtos))
}

/// Get a province by code
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}",
    params(
        ("code" = String, Path, description = "Province code (2 digits)")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn get_province(
    State(service): State<Arc<RegionCatalogService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let catalog = service.catalog().await?;
    let province = catalog
        .province(&code)
        .ok_or_else(|| AppError::NotFound(format!("Province with code '{}' not found", code)))?;
    Ok(Json(ApiResponse::success(
        Some(province.into()),
        None,
        None,
    )))
}

/// List cities/regencies in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/cities",
    params(
        ("code" = String, Path, description = "Province code (2 digits)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of cities in the province", body = ApiResponse<Vec<CityResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_cities_by_province(
    State(service): State<Arc<RegionCatalogService>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let catalog = service.catalog().await?;
    let dtos: Vec<CityResponseDto> = catalog
        .cities_of(&code)
        .into_iter()
        .filter(|c| query.matches(&c.name))
        .map(Into::into)
        .collect();
    Ok(list_response(dtos))
}

// ==================== City Handlers ====================

/// Get a city/regency by code
#[utoipa::path(
    get,
    path = "/api/regions/cities/{code}",
    params(
        ("code" = String, Path, description = "City code (4 digits)")
    ),
    responses(
        (status = 200, description = "City details", body = ApiResponse<CityResponseDto>),
        (status = 404, description = "City not found")
    ),
    tag = "regions"
)]
pub async fn get_city(
    State(service): State<Arc<RegionCatalogService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let catalog = service.catalog().await?;
    let city = catalog
        .city(&code)
        .ok_or_else(|| AppError::NotFound(format!("City with code '{}' not found", code)))?;
    Ok(Json(ApiResponse::success(Some(city.into()), None, None)))
}

/// List districts in a city/regency
#[utoipa::path(
    get,
    path = "/api/regions/cities/{code}/districts",
    params(
        ("code" = String, Path, description = "City code (4 digits)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of districts in the city", body = ApiResponse<Vec<DistrictResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_districts_by_city(
    State(service): State<Arc<RegionCatalogService>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let catalog = service.catalog().await?;
    let dtos: Vec<DistrictResponseDto> = catalog
        .districts_of(&code)
        .into_iter()
        .filter(|d| query.matches(&d.name))
        .map(Into::into)
        .collect();
    Ok(list_response(dtos))
}

// ==================== District Handlers ====================

/// Get a district by code, including its postal code
#[utoipa::path(
    get,
    path = "/api/regions/districts/{code}",
    params(
        ("code" = String, Path, description = "District code (6 digits)")
    ),
    responses(
        (status = 200, description = "District details", body = ApiResponse<DistrictResponseDto>),
        (status = 404, description = "District not found")
    ),
    tag = "regions"
)]
pub async fn get_district(
    State(service): State<Arc<RegionCatalogService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<DistrictResponseDto>>> {
    let catalog = service.catalog().await?;
    let district = catalog
        .district(&code)
        .ok_or_else(|| AppError::NotFound(format!("District with code '{}' not found", code)))?;
    Ok(Json(ApiResponse::success(
        Some(district.into()),
        None,
        None,
    )))
}

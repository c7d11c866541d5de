use utoipa::{Modify, OpenApi};

use crate::features::history::{dtos as history_dtos, handlers as history_handlers};
use crate::features::nik::{dtos as nik_dtos, handlers as nik_handlers, models as nik_models};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // NIK
        nik_handlers::validate_nik_get,
        nik_handlers::validate_nik_post,
        nik_handlers::generate_nik,
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        regions_handlers::list_cities_by_province,
        regions_handlers::get_city,
        regions_handlers::list_districts_by_city,
        regions_handlers::get_district,
        // History
        history_handlers::list_history,
        history_handlers::record_history,
        history_handlers::delete_history_entry,
        history_handlers::clear_history,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // NIK
            nik_models::Sex,
            nik_dtos::NikRequestDto,
            nik_dtos::NikStatus,
            nik_dtos::NikParseResponse,
            nik_dtos::NikDataDto,
            nik_dtos::NikExtrasDto,
            nik_dtos::GenerateNikRequestDto,
            nik_dtos::GeneratedNikResponseDto,
            ApiResponse<nik_dtos::GeneratedNikResponseDto>,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::CityResponseDto,
            regions_dtos::DistrictResponseDto,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<Vec<regions_dtos::CityResponseDto>>,
            ApiResponse<regions_dtos::CityResponseDto>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            ApiResponse<regions_dtos::DistrictResponseDto>,
            // History
            history_dtos::HistoryEntryResponseDto,
            ApiResponse<Vec<history_dtos::HistoryEntryResponseDto>>,
            ApiResponse<history_dtos::HistoryEntryResponseDto>,
        )
    ),
    tags(
        (name = "nik", description = "NIK validation, decoding and generation"),
        (name = "regions", description = "Indonesian administrative regions (provinces, cities, districts)"),
        (name = "history", description = "Recent NIK lookups"),
    ),
    info(
        title = "NIK Parser API",
        version = "0.1.0",
        description = "Decode and compose Indonesian national identity numbers (NIK)",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/nik/validate",
            "/api/validate/nik",
            "/api/nik/generate",
            "/api/regions/provinces",
            "/api/regions/districts/{code}",
            "/api/history",
            "/api/history/{nik}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Desc".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}

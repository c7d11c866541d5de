use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{City, District, Province};

/// Query parameters for listing regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Filter by name (case-insensitive, partial match)
    #[param(example = "jakarta")]
    pub search: Option<String>,
}

impl RegionSearchQuery {
    /// Whether a region name passes the optional search filter
    pub fn matches(&self, name: &str) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => name.to_lowercase().contains(&term.to_lowercase()),
            _ => true,
        }
    }
}

/// Response DTO for province data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceResponseDto {
    #[schema(example = "33")]
    pub code: String,
    #[schema(example = "JAWA TENGAH")]
    pub name: String,
}

impl From<&Province> for ProvinceResponseDto {
    fn from(province: &Province) -> Self {
        Self {
            code: province.code.clone(),
            name: province.name.clone(),
        }
    }
}

/// Response DTO for city/regency data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    #[schema(example = "3301")]
    pub code: String,
    #[schema(example = "KAB. CILACAP")]
    pub name: String,
    pub province_code: String,
}

impl From<&City> for CityResponseDto {
    fn from(city: &City) -> Self {
        Self {
            code: city.code.clone(),
            name: city.name.clone(),
            province_code: city.province_code().to_string(),
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    #[schema(example = "330101")]
    pub code: String,
    #[schema(example = "KEDUNGREJA")]
    pub name: String,
    #[schema(example = "53263")]
    pub postal_code: String,
    pub city_code: String,
}

impl From<&District> for DistrictResponseDto {
    fn from(district: &District) -> Self {
        Self {
            code: district.code.clone(),
            name: district.name.clone(),
            postal_code: district.postal_code.clone(),
            city_code: district.city_code().to_string(),
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::time::Duration;

use crate::features::regions::models::{City, District, Province};

lazy_static! {
    /// Object literals embedded in the upstream provider's script distribution
    static ref PROVINCES_RE: Regex = Regex::new(r#""provinsi"\s*:\s*(\{[^}]+\})"#).unwrap();
    static ref CITIES_RE: Regex = Regex::new(r#""kabkot"\s*:\s*(\{[^}]+\})"#).unwrap();
    static ref DISTRICTS_RE: Regex = Regex::new(r#""kecamatan"\s*:\s*(\{[^}]+\})"#).unwrap();
}

/// Separator between district name and postal code in the source document
const POSTAL_SEPARATOR: &str = " -- ";

const PROVINCE_CODE_LEN: usize = 2;
const CITY_CODE_LEN: usize = 4;
const DISTRICT_CODE_LEN: usize = 6;

/// The three raw mappings carried by a region document
#[derive(Debug, Default, Deserialize)]
struct RegionDocument {
    #[serde(default)]
    provinsi: BTreeMap<String, String>,
    #[serde(default)]
    kabkot: BTreeMap<String, String>,
    #[serde(default)]
    kecamatan: BTreeMap<String, String>,
}

impl RegionDocument {
    /// Parse either a JSON document or a script embedding the three object literals
    fn parse(text: &str) -> Result<Self, CatalogError> {
        if text.trim_start().starts_with('{') {
            return serde_json::from_str(text)
                .map_err(|e| CatalogError::Malformed(format!("invalid JSON document: {}", e)));
        }

        Ok(Self {
            provinsi: Self::extract_object(&PROVINCES_RE, text, "provinsi")?,
            kabkot: Self::extract_object(&CITIES_RE, text, "kabkot")?,
            kecamatan: Self::extract_object(&DISTRICTS_RE, text, "kecamatan")?,
        })
    }

    fn extract_object(
        re: &Regex,
        text: &str,
        key: &str,
    ) -> Result<BTreeMap<String, String>, CatalogError> {
        let literal = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| CatalogError::Malformed(format!("missing \"{}\" mapping", key)))?;

        serde_json::from_str(literal)
            .map_err(|e| CatalogError::Malformed(format!("invalid \"{}\" mapping: {}", key, e)))
    }
}

/// Immutable lookup table of Indonesian administrative regions.
///
/// Codes are stored in ordered maps, so prefix enumeration walks a contiguous
/// key range and comes out sorted by code.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    provinces: BTreeMap<String, Province>,
    cities: BTreeMap<String, City>,
    districts: BTreeMap<String, District>,
}

impl RegionCatalog {
    /// Build a catalog from a region document (JSON or provider script)
    pub fn from_document(text: &str) -> Result<Self, CatalogError> {
        let document = RegionDocument::parse(text)?;

        if document.provinsi.is_empty() {
            return Err(CatalogError::Malformed(
                "document contains no provinces".to_string(),
            ));
        }

        let mut provinces = BTreeMap::new();
        for (code, name) in document.provinsi {
            check_code(&code, PROVINCE_CODE_LEN, "province")?;
            let name = name.trim().to_string();
            provinces.insert(code.clone(), Province { code, name });
        }

        let mut cities = BTreeMap::new();
        for (code, name) in document.kabkot {
            check_code(&code, CITY_CODE_LEN, "city")?;
            let city = City {
                code: code.clone(),
                name: name.trim().to_string(),
            };
            if !provinces.contains_key(city.province_code()) {
                tracing::warn!("City {} has no matching province entry", city.code);
            }
            cities.insert(code, city);
        }

        let mut districts = BTreeMap::new();
        for (code, value) in document.kecamatan {
            check_code(&code, DISTRICT_CODE_LEN, "district")?;
            let (name, postal_code) = split_district_value(&value);
            let district = District {
                code: code.clone(),
                name,
                postal_code,
            };
            if !cities.contains_key(district.city_code()) {
                tracing::warn!("District {} has no matching city entry", district.code);
            }
            districts.insert(code, district);
        }

        Ok(Self {
            provinces,
            cities,
            districts,
        })
    }

    // ==================== Exact lookups ====================

    pub fn province(&self, code: &str) -> Option<&Province> {
        self.provinces.get(code)
    }

    pub fn city(&self, code: &str) -> Option<&City> {
        self.cities.get(code)
    }

    /// Exact 6-digit lookup; the entry carries the postal code
    pub fn district(&self, code: &str) -> Option<&District> {
        self.districts.get(code)
    }

    // ==================== Enumeration ====================

    /// All provinces ordered by code
    pub fn provinces(&self) -> Vec<&Province> {
        self.provinces.values().collect()
    }

    /// Cities whose code starts with the province code (left-padded to 2 digits)
    pub fn cities_of(&self, province_code: &str) -> Vec<&City> {
        let prefix = format!("{:0>2}", province_code);
        with_prefix(&self.cities, &prefix)
    }

    /// Districts whose code starts with the city code (left-padded to 4 digits)
    pub fn districts_of(&self, city_code: &str) -> Vec<&District> {
        let prefix = format!("{:0>4}", city_code);
        with_prefix(&self.districts, &prefix)
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn district_count(&self) -> usize {
        self.districts.len()
    }
}

fn with_prefix<'a, T>(map: &'a BTreeMap<String, T>, prefix: &str) -> Vec<&'a T> {
    map.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .take_while(|(code, _)| code.starts_with(prefix))
        .map(|(_, entry)| entry)
        .collect()
}

fn check_code(code: &str, len: usize, level: &str) -> Result<(), CatalogError> {
    if code.len() == len && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CatalogError::Malformed(format!(
            "{} code '{}' must be {} digits",
            level, code, len
        )))
    }
}

/// Split "NAME -- POSTAL" into its parts; a missing postal code becomes empty
fn split_district_value(value: &str) -> (String, String) {
    match value.split_once(POSTAL_SEPARATOR) {
        Some((name, postal)) => (name.trim().to_string(), postal.trim().to_string()),
        None => (value.trim().to_string(), String::new()),
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Region source unavailable: {0}")]
    Unavailable(String),

    #[error("Region catalog load timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed region document: {0}")]
    Malformed(String),
}

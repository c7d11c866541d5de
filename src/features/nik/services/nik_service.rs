use chrono::NaiveDate;
use std::sync::Arc;

use crate::features::nik::error::{EncodeError, NikError};
use crate::features::nik::models::{ParsedNik, Sex};
use crate::features::nik::services::decoder::is_well_formed;
use crate::features::nik::services::{encode, encode_parsed, NikDecoder};
use crate::features::regions::RegionCatalogService;

/// A freshly composed NIK and the outcome of decoding it back
#[derive(Debug, Clone)]
pub struct GeneratedNik {
    pub nik: String,
    pub verification: Result<ParsedNik, NikError>,
}

/// Decodes and composes NIKs against the shared region catalog
pub struct NikService {
    catalog_service: Arc<RegionCatalogService>,
}

impl NikService {
    pub fn new(catalog_service: Arc<RegionCatalogService>) -> Self {
        Self { catalog_service }
    }

    async fn decoder(&self) -> Result<NikDecoder, NikError> {
        let catalog = self.catalog_service.catalog().await?;
        Ok(NikDecoder::new(catalog))
    }

    /// Decode a NIK relative to today's date.
    ///
    /// Malformed input is rejected before the catalog is touched, so it is
    /// reported as a format error even while the catalog is unavailable.
    pub async fn parse(&self, nik: &str) -> Result<ParsedNik, NikError> {
        if !is_well_formed(nik) {
            tracing::debug!("NIK rejected: {}", NikError::InvalidFormat);
            return Err(NikError::InvalidFormat);
        }

        let result = self.decoder().await?.decode(nik);
        if let Err(ref e) = result {
            tracing::debug!("NIK rejected: {}", e);
        }
        result
    }

    /// Compose a NIK, then decode it to confirm it resolves against the catalog
    pub async fn generate(
        &self,
        province_code: &str,
        city_code: &str,
        district_code: &str,
        birth_date: NaiveDate,
        sex: Sex,
        sequence: &str,
    ) -> Result<GeneratedNik, EncodeError> {
        let nik = encode(
            province_code,
            city_code,
            district_code,
            birth_date,
            sex,
            sequence,
        )?;
        let verification = self.parse(&nik).await;
        if let Ok(parsed) = &verification {
            debug_assert_eq!(encode_parsed(parsed).as_deref(), Ok(nik.as_str()));
        }

        Ok(GeneratedNik { nik, verification })
    }
}

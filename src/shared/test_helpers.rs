use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::features::regions::services::RegionSource;
use crate::features::regions::{CatalogError, RegionCatalog, RegionCatalogService};

/// Small region document covering the codes used across tests
pub const TEST_REGION_DOCUMENT: &str = r#"{
    "provinsi": {
        "31": "DKI JAKARTA",
        "32": "JAWA BARAT",
        "33": "JAWA TENGAH",
        "34": "DI YOGYAKARTA"
    },
    "kabkot": {
        "3171": "KOTA ADM. JAKARTA PUSAT",
        "3273": "KOTA BANDUNG",
        "3301": "KAB. CILACAP",
        "3302": "KAB. BANYUMAS",
        "3374": "KOTA SEMARANG"
    },
    "kecamatan": {
        "317101": "GAMBIR -- 10110",
        "327301": "SUKASARI -- 40151",
        "330101": "KEDUNGREJA -- 53263",
        "330102": "KESUGIHAN -- 53274",
        "330103": "ADIPALA -- 53271",
        "330201": "LUMBIR -- 53177"
    }
}"#;

pub fn test_catalog() -> RegionCatalog {
    RegionCatalog::from_document(TEST_REGION_DOCUMENT).unwrap()
}

/// In-memory region source that counts fetches and can be told to fail
pub struct StaticSource {
    document: String,
    delay: Duration,
    pub fetch_count: AtomicUsize,
    pub fail: AtomicBool,
}

impl StaticSource {
    pub fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
            delay: Duration::ZERO,
            fetch_count: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl RegionSource for StaticSource {
    fn describe(&self) -> String {
        "static:test".to_string()
    }

    async fn fetch(&self) -> Result<String, CatalogError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("static source failure".to_string()));
        }
        Ok(self.document.clone())
    }
}

pub fn test_catalog_service() -> Arc<RegionCatalogService> {
    Arc::new(RegionCatalogService::new(
        Arc::new(StaticSource::new(TEST_REGION_DOCUMENT)),
        Duration::from_secs(5),
    ))
}

pub fn failing_catalog_service() -> Arc<RegionCatalogService> {
    Arc::new(RegionCatalogService::new(
        Arc::new(StaticSource::new(TEST_REGION_DOCUMENT).failing()),
        Duration::from_secs(5),
    ))
}

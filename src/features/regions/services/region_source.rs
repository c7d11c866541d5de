use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::RegionSourceKind;
use crate::features::regions::services::CatalogError;

/// Seed region document compiled into the binary
pub(crate) const EMBEDDED_DOCUMENT: &str = include_str!("../../../../data/wilayah.json");

/// Supplier of the raw region document.
///
/// The document format belongs to the data provider; implementations only
/// deliver the text and report transport failures.
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Short label used in logs
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<String, CatalogError>;
}

/// Build the source selected by configuration
pub fn from_config(
    kind: &RegionSourceKind,
    timeout: Duration,
) -> Result<Arc<dyn RegionSource>, CatalogError> {
    let source: Arc<dyn RegionSource> = match kind {
        RegionSourceKind::Embedded => {
            tracing::warn!(
                "Using the embedded region seed; most cities and districts are missing from it"
            );
            Arc::new(EmbeddedSource)
        }
        RegionSourceKind::File(path) => Arc::new(FileSource::new(path)),
        RegionSourceKind::Http(url) => Arc::new(HttpSource::new(url, timeout)?),
    };
    Ok(source)
}

pub struct EmbeddedSource;

#[async_trait]
impl RegionSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded:data/wilayah.json".to_string()
    }

    async fn fetch(&self) -> Result<String, CatalogError> {
        Ok(EMBEDDED_DOCUMENT.to_string())
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RegionSource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unavailable(format!("failed to read {}: {}", self.path.display(), e))
        })
    }
}

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent("NikParser/0.1 (region-catalog)")
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Unavailable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl RegionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, CatalogError> {
        tracing::debug!("Fetching region document from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "region document request failed: HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Unavailable(format!("failed to read body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embedded_source_returns_document() {
        let text = EmbeddedSource.fetch().await.unwrap();
        assert!(text.contains("\"provinsi\""));
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_unavailable() {
        let source = FileSource::new("/definitely/not/a/region/file.json");
        let result = source.fetch().await;
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
        assert!(source.describe().starts_with("file:"));
    }

    #[tokio::test]
    async fn test_file_source_reads_document() {
        let path = std::env::temp_dir().join(format!("wilayah-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, r#"{"provinsi": {"33": "JAWA TENGAH"}}"#)
            .await
            .unwrap();

        let text = FileSource::new(&path).fetch().await.unwrap();
        assert!(text.contains("JAWA TENGAH"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_http_source_loads_provider_script() {
        use crate::features::regions::RegionCatalog;
        use axum::{http::StatusCode, routing::get, Router};

        const SCRIPT: &str = r#"function nikParse(nik, callback) {
            var wilayah = {"provinsi":{"31":"DKI JAKARTA"},"kabkot":{"3174":"KOTA ADM. JAKARTA BARAT"},"kecamatan":{"317401":"KEMBANGAN -- 11610"}};
        }"#;

        let app = Router::new()
            .route("/nik_parse.js", get(|| async { SCRIPT }))
            .route("/missing.js", get(|| async { StatusCode::NOT_FOUND }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let timeout = Duration::from_secs(5);
        let source = HttpSource::new(&format!("http://{}/nik_parse.js", addr), timeout).unwrap();
        let catalog = RegionCatalog::from_document(&source.fetch().await.unwrap()).unwrap();
        assert_eq!(catalog.city("3174").unwrap().name, "KOTA ADM. JAKARTA BARAT");
        assert_eq!(catalog.district("317401").unwrap().postal_code, "11610");

        let missing = HttpSource::new(&format!("http://{}/missing.js", addr), timeout).unwrap();
        assert!(matches!(
            missing.fetch().await,
            Err(CatalogError::Unavailable(_))
        ));
    }

    #[test]
    fn test_from_config_selects_source() {
        let timeout = Duration::from_secs(1);
        let embedded = from_config(&RegionSourceKind::Embedded, timeout).unwrap();
        assert_eq!(embedded.describe(), "embedded:data/wilayah.json");

        let http = from_config(
            &RegionSourceKind::Http("https://example.test/wilayah.json".to_string()),
            timeout,
        )
        .unwrap();
        assert_eq!(http.describe(), "https://example.test/wilayah.json");
    }
}

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub region_source: RegionSourceConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Where the region table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSourceKind {
    /// Small seed document compiled into the binary (`data/wilayah.json`),
    /// for offline runs only
    Embedded,
    /// Document read from the local filesystem
    File(String),
    /// Document fetched over HTTP(S)
    Http(String),
}

#[derive(Debug, Clone)]
pub struct RegionSourceConfig {
    pub kind: RegionSourceKind,
    /// Upper bound on a single catalog load, transport included
    pub load_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            region_source: RegionSourceConfig::from_env()?,
            history: HistoryConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "NIK Parser API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Decode and generate Indonesian population identification numbers (NIK)".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl RegionSourceConfig {
    const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 15;

    /// Full region table published by the data provider
    pub const DEFAULT_REGION_SOURCE_URL: &'static str =
        "https://raw.githubusercontent.com/bachors/nik_parse.js/refs/heads/master/src/nik_parse.js";

    pub fn from_env() -> Result<Self, String> {
        let source = env::var("REGION_SOURCE").unwrap_or_else(|_| "http".to_string());

        let kind = Self::parse_kind(
            &source,
            env::var("REGION_SOURCE_PATH").ok(),
            env::var("REGION_SOURCE_URL").ok(),
        )?;

        let load_timeout_secs = env::var("REGION_LOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_LOAD_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "REGION_LOAD_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            kind,
            load_timeout: Duration::from_secs(load_timeout_secs),
        })
    }

    fn parse_kind(
        source: &str,
        path: Option<String>,
        url: Option<String>,
    ) -> Result<RegionSourceKind, String> {
        match source.trim().to_lowercase().as_str() {
            "embedded" => Ok(RegionSourceKind::Embedded),
            "file" => path
                .filter(|p| !p.is_empty())
                .map(RegionSourceKind::File)
                .ok_or_else(|| "REGION_SOURCE_PATH must be set when REGION_SOURCE=file".to_string()),
            "http" => Ok(RegionSourceKind::Http(
                url.filter(|u| !u.is_empty())
                    .unwrap_or_else(|| Self::DEFAULT_REGION_SOURCE_URL.to_string()),
            )),
            other => Err(format!(
                "Invalid REGION_SOURCE '{}': expected embedded, file or http",
                other
            )),
        }
    }
}

impl HistoryConfig {
    pub fn from_env() -> Result<Self, String> {
        let max_entries = env::var("HISTORY_MAX_ENTRIES")
            .unwrap_or_else(|_| crate::shared::constants::MAX_HISTORY_ENTRIES.to_string())
            .parse::<usize>()
            .map_err(|_| "HISTORY_MAX_ENTRIES must be a valid number".to_string())?;

        if max_entries == 0 {
            return Err("HISTORY_MAX_ENTRIES must be greater than zero".to_string());
        }

        Ok(Self { max_entries })
    }
}

use serde::Serialize;

/// City or regency (kabupaten/kota), keyed by a 4-digit code whose first two
/// digits are the province code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub code: String,
    pub name: String,
}

impl City {
    pub fn province_code(&self) -> &str {
        self.code.get(..2).unwrap_or_default()
    }
}

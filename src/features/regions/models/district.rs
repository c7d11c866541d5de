use serde::Serialize;

/// District (kecamatan), keyed by a 6-digit code whose first four digits are
/// the city code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct District {
    pub code: String,
    pub name: String,
    pub postal_code: String,
}

impl District {
    pub fn city_code(&self) -> &str {
        self.code.get(..4).unwrap_or_default()
    }
}

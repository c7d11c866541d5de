use chrono::{DateTime, Utc};

use crate::features::nik::dtos::NikParseResponse;

/// One recorded lookup, keyed by the NIK
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub nik: String,
    pub result: NikParseResponse,
    pub saved_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::history::models::HistoryEntry;
use crate::features::nik::dtos::NikParseResponse;

/// Response DTO for a history entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponseDto {
    pub nik: String,
    pub result: NikParseResponse,
    pub saved_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryResponseDto {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            nik: entry.nik,
            result: entry.result,
            saved_at: entry.saved_at,
        }
    }
}

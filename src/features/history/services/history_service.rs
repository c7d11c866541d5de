use chrono::Utc;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::features::history::models::HistoryEntry;
use crate::features::nik::dtos::NikParseResponse;

/// Bounded most-recent-first log of NIK lookups, one entry per NIK
pub struct HistoryService {
    entries: RwLock<VecDeque<HistoryEntry>>,
    max_entries: usize,
}

impl HistoryService {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    /// Record a lookup at the front, replacing any earlier entry for the same
    /// NIK and dropping the oldest entries beyond the cap
    pub async fn save(&self, nik: &str, result: NikParseResponse) -> HistoryEntry {
        let entry = HistoryEntry {
            nik: nik.to_string(),
            result,
            saved_at: Utc::now(),
        };

        let mut entries = self.entries.write().await;
        entries.retain(|e| e.nik != nik);
        entries.push_front(entry.clone());
        entries.truncate(self.max_entries);

        tracing::debug!("History entry saved, size={}", entries.len());
        entry
    }

    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    /// Returns whether an entry for `nik` existed
    pub async fn remove(&self, nik: &str) -> bool {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.nik != nik);
        entries.len() != before
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(pesan: &str) -> NikParseResponse {
        NikParseResponse::error(pesan)
    }

    fn niks(entries: &[HistoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.nik.as_str()).collect()
    }

    #[tokio::test]
    async fn test_save_is_most_recent_first() {
        let service = HistoryService::new(50);
        service.save("1", result("a")).await;
        service.save("2", result("b")).await;
        service.save("3", result("c")).await;

        assert_eq!(niks(&service.list().await), vec!["3", "2", "1"]);
    }

    #[tokio::test]
    async fn test_save_existing_moves_to_front() {
        let service = HistoryService::new(50);
        service.save("1", result("old")).await;
        service.save("2", result("b")).await;
        service.save("1", result("new")).await;

        let entries = service.list().await;
        assert_eq!(niks(&entries), vec!["1", "2"]);
        assert_eq!(entries[0].result.pesan, "new");
    }

    #[tokio::test]
    async fn test_cap_drops_oldest() {
        let service = HistoryService::new(3);
        for nik in ["1", "2", "3", "4", "5"] {
            service.save(nik, result("x")).await;
        }

        assert_eq!(niks(&service.list().await), vec!["5", "4", "3"]);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let service = HistoryService::new(50);
        service.save("1", result("a")).await;
        service.save("2", result("b")).await;

        assert!(service.remove("1").await);
        assert!(!service.remove("1").await);
        assert_eq!(niks(&service.list().await), vec!["2"]);

        service.clear().await;
        assert!(service.list().await.is_empty());
    }
}

use serde::Serialize;

/// Province (provinsi), keyed by a 2-digit code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Province {
    pub code: String,
    pub name: String,
}

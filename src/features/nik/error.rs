use thiserror::Error;

use crate::features::regions::CatalogError;

/// Why a NIK was rejected. `Display` is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NikError {
    #[error("invalid format, must be 16 digits.")]
    InvalidFormat,

    #[error("unknown province code.")]
    UnknownProvince,

    #[error("unknown city code.")]
    UnknownCity,

    #[error("unknown district code.")]
    UnknownDistrict,

    #[error("invalid day.")]
    InvalidDay,

    #[error("invalid month.")]
    InvalidMonth,

    #[error("invalid date.")]
    InvalidDate,

    #[error("region catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

/// Coarse classification of [`NikError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NikErrorKind {
    Format,
    UnknownRegion,
    InvalidDate,
    CatalogUnavailable,
}

impl NikError {
    pub fn kind(&self) -> NikErrorKind {
        match self {
            NikError::InvalidFormat => NikErrorKind::Format,
            NikError::UnknownProvince | NikError::UnknownCity | NikError::UnknownDistrict => {
                NikErrorKind::UnknownRegion
            }
            NikError::InvalidDay | NikError::InvalidMonth | NikError::InvalidDate => {
                NikErrorKind::InvalidDate
            }
            NikError::CatalogUnavailable(_) => NikErrorKind::CatalogUnavailable,
        }
    }
}

impl From<CatalogError> for NikError {
    fn from(err: CatalogError) -> Self {
        NikError::CatalogUnavailable(err.to_string())
    }
}

/// Caller contract violations when composing a NIK
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{level} code must be {len} digits, got '{value}'")]
    InvalidCode {
        level: &'static str,
        len: usize,
        value: String,
    },

    #[error("{level} code '{code}' does not start with {parent} code '{parent_code}'")]
    PrefixMismatch {
        level: &'static str,
        code: String,
        parent: &'static str,
        parent_code: String,
    },

    #[error("sequence must be 1 to 4 digits, got '{0}'")]
    InvalidSequence(String),
}

use chrono::NaiveDate;

use crate::features::nik::models::{Pasaran, Sex, Zodiac};

/// Elapsed time since birth in calendar units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Time left until the next birthday; all zero on the birthday itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthdayCountdown {
    pub months: u32,
    pub days: u32,
    pub total_days: u32,
}

/// Everything extracted from and derived for one NIK.
///
/// A value object: decoding the same NIK on the same day always yields an
/// equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNik {
    pub nik: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub province_code: String,
    pub province_name: String,
    pub city_code: String,
    pub city_name: String,
    pub district_code: String,
    pub district_name: String,
    /// Trailing 4-digit disambiguator
    pub sequence: String,
    pub postal_code: String,
    /// Whole years; 0 when the birth date lies in the future
    pub age: u32,
    pub age_detail: AgeBreakdown,
    pub next_birthday: BirthdayCountdown,
    pub zodiac: Zodiac,
    pub pasaran: Pasaran,
}

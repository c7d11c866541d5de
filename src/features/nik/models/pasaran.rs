use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

/// Day of the Javanese five-day market week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

/// Friday 17 August 1945 (proclamation day) fell on Legi.
/// Expressed as days from 0001-01-01 (day 1), proleptic Gregorian.
const ANCHOR_DAYS_FROM_CE: i32 = 710_260;

const CYCLE: [Pasaran; 5] = [
    Pasaran::Legi,
    Pasaran::Pahing,
    Pasaran::Pon,
    Pasaran::Wage,
    Pasaran::Kliwon,
];

impl Pasaran {
    pub fn of(date: NaiveDate) -> Self {
        let offset = (date.num_days_from_ce() - ANCHOR_DAYS_FROM_CE).rem_euclid(5);
        CYCLE[offset as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pasaran::Legi => "Legi",
            Pasaran::Pahing => "Pahing",
            Pasaran::Pon => "Pon",
            Pasaran::Wage => "Wage",
            Pasaran::Kliwon => "Kliwon",
        }
    }
}

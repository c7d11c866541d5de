use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

/// Western sun sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Zodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl Zodiac {
    /// Sign for a calendar date. Each arm holds the last day of the sign that
    /// ends in that month.
    pub fn of(date: NaiveDate) -> Self {
        let day = date.day();
        match date.month() {
            1 if day <= 19 => Zodiac::Capricorn,
            1 => Zodiac::Aquarius,
            2 if day <= 18 => Zodiac::Aquarius,
            2 => Zodiac::Pisces,
            3 if day <= 20 => Zodiac::Pisces,
            3 => Zodiac::Aries,
            4 if day <= 19 => Zodiac::Aries,
            4 => Zodiac::Taurus,
            5 if day <= 20 => Zodiac::Taurus,
            5 => Zodiac::Gemini,
            6 if day <= 20 => Zodiac::Gemini,
            6 => Zodiac::Cancer,
            7 if day <= 22 => Zodiac::Cancer,
            7 => Zodiac::Leo,
            8 if day <= 22 => Zodiac::Leo,
            8 => Zodiac::Virgo,
            9 if day <= 22 => Zodiac::Virgo,
            9 => Zodiac::Libra,
            10 if day <= 22 => Zodiac::Libra,
            10 => Zodiac::Scorpio,
            11 if day <= 21 => Zodiac::Scorpio,
            11 => Zodiac::Sagittarius,
            _ if day <= 21 => Zodiac::Sagittarius,
            _ => Zodiac::Capricorn,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(month: u32, day: u32) -> Zodiac {
        Zodiac::of(NaiveDate::from_ymd_opt(2001, month, day).unwrap())
    }

    #[test]
    fn test_zodiac_boundaries() {
        assert_eq!(sign(3, 20), Zodiac::Pisces);
        assert_eq!(sign(3, 21), Zodiac::Aries);
        assert_eq!(sign(4, 19), Zodiac::Aries);
        assert_eq!(sign(4, 20), Zodiac::Taurus);
        assert_eq!(sign(7, 22), Zodiac::Cancer);
        assert_eq!(sign(7, 23), Zodiac::Leo);
        assert_eq!(sign(11, 21), Zodiac::Scorpio);
        assert_eq!(sign(11, 22), Zodiac::Sagittarius);
    }

    #[test]
    fn test_capricorn_wraps_the_year() {
        assert_eq!(sign(12, 21), Zodiac::Sagittarius);
        assert_eq!(sign(12, 22), Zodiac::Capricorn);
        assert_eq!(sign(1, 1), Zodiac::Capricorn);
        assert_eq!(sign(1, 19), Zodiac::Capricorn);
        assert_eq!(sign(1, 20), Zodiac::Aquarius);
    }

    #[test]
    fn test_leap_day_is_pisces() {
        let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(Zodiac::of(date), Zodiac::Pisces);
        assert_eq!(sign(5, 15).name(), "Taurus");
    }
}

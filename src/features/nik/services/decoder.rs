use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::features::nik::error::NikError;
use crate::features::nik::models::{ParsedNik, Pasaran, Sex, Zodiac};
use crate::features::nik::services::calendar;
use crate::features::regions::RegionCatalog;
use crate::shared::validation::NIK_REGEX;

/// Two-digit years above this belong to the 1900s, the rest to the 2000s.
///
/// Convention only: a year field of 24 can be a 1924 or a 2024 birth and the
/// NIK itself cannot tell them apart.
pub const CENTURY_PIVOT: u32 = 50;

/// Fixed-offset slices of a well-formed NIK. City and district codes include
/// their parent prefixes.
struct NikFields<'a> {
    province_code: &'a str,
    city_code: &'a str,
    district_code: &'a str,
    day: u32,
    month: u32,
    year: u32,
    sequence: &'a str,
}

impl<'a> NikFields<'a> {
    fn split(input: &'a str) -> Result<Self, NikError> {
        if !is_well_formed(input) {
            return Err(NikError::InvalidFormat);
        }

        Ok(Self {
            province_code: &input[0..2],
            city_code: &input[0..4],
            district_code: &input[0..6],
            day: two_digits(&input[6..8]),
            month: two_digits(&input[8..10]),
            year: two_digits(&input[10..12]),
            sequence: &input[12..16],
        })
    }
}

/// Exactly 16 ASCII digits
pub fn is_well_formed(input: &str) -> bool {
    NIK_REGEX.is_match(input)
}

/// Value of a two-character ASCII digit slice
fn two_digits(field: &str) -> u32 {
    field
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Split the day field into sex and actual day of month
fn decode_day(raw: u32) -> Result<(Sex, u32), NikError> {
    let (sex, day) = if raw > Sex::FEMALE_DAY_OFFSET {
        (Sex::Female, raw - Sex::FEMALE_DAY_OFFSET)
    } else {
        (Sex::Male, raw)
    };

    if (1..=31).contains(&day) {
        Ok((sex, day))
    } else {
        Err(NikError::InvalidDay)
    }
}

pub fn expand_year(two_digit_year: u32) -> i32 {
    let year = two_digit_year as i32;
    if two_digit_year > CENTURY_PIVOT {
        1900 + year
    } else {
        2000 + year
    }
}

/// Validates NIKs against a region catalog and derives their attributes
#[derive(Clone)]
pub struct NikDecoder {
    catalog: Arc<RegionCatalog>,
}

impl NikDecoder {
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self { catalog }
    }

    /// Decode relative to today's local date
    pub fn decode(&self, input: &str) -> Result<ParsedNik, NikError> {
        self.decode_on(input, Local::now().date_naive())
    }

    /// Decode with age and birthday countdown computed as of `today`.
    ///
    /// Checks run in a fixed order and stop at the first failure: format,
    /// province, city, district, day, month, then the full calendar date.
    pub fn decode_on(&self, input: &str, today: NaiveDate) -> Result<ParsedNik, NikError> {
        let fields = NikFields::split(input)?;

        let province = self
            .catalog
            .province(fields.province_code)
            .ok_or(NikError::UnknownProvince)?;
        let city = self
            .catalog
            .city(fields.city_code)
            .ok_or(NikError::UnknownCity)?;
        let district = self
            .catalog
            .district(fields.district_code)
            .ok_or(NikError::UnknownDistrict)?;

        let (sex, day) = decode_day(fields.day)?;
        if !(1..=12).contains(&fields.month) {
            return Err(NikError::InvalidMonth);
        }
        let birth_date = NaiveDate::from_ymd_opt(expand_year(fields.year), fields.month, day)
            .ok_or(NikError::InvalidDate)?;

        let age_detail = calendar::age_on(birth_date, today);

        Ok(ParsedNik {
            nik: input.to_string(),
            sex,
            birth_date,
            province_code: province.code.clone(),
            province_name: province.name.clone(),
            city_code: city.code.clone(),
            city_name: city.name.clone(),
            district_code: district.code.clone(),
            district_name: district.name.clone(),
            sequence: fields.sequence.to_string(),
            postal_code: district.postal_code.clone(),
            age: age_detail.years,
            age_detail,
            next_birthday: calendar::birthday_countdown(birth_date, today),
            zodiac: Zodiac::of(birth_date),
            pasaran: Pasaran::of(birth_date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_catalog;

    fn decoder() -> NikDecoder {
        NikDecoder::new(Arc::new(test_catalog()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_decode_male_nik() {
        let parsed = decoder().decode_on("3301011505990001", today()).unwrap();

        assert_eq!(parsed.sex, Sex::Male);
        assert_eq!(
            parsed.birth_date,
            NaiveDate::from_ymd_opt(1999, 5, 15).unwrap()
        );
        assert_eq!(parsed.province_code, "33");
        assert_eq!(parsed.province_name, "JAWA TENGAH");
        assert_eq!(parsed.city_code, "3301");
        assert_eq!(parsed.city_name, "KAB. CILACAP");
        assert_eq!(parsed.district_code, "330101");
        assert_eq!(parsed.district_name, "KEDUNGREJA");
        assert_eq!(parsed.sequence, "0001");
        assert_eq!(parsed.postal_code, "53263");
        assert_eq!(parsed.age, 27);
        assert_eq!(parsed.zodiac, Zodiac::Taurus);
        assert_eq!(parsed.pasaran, Pasaran::Kliwon);
    }

    #[test]
    fn test_decode_female_nik() {
        let parsed = decoder().decode_on("3301015505990001", today()).unwrap();
        assert_eq!(parsed.sex, Sex::Female);
        assert_eq!(
            parsed.birth_date,
            NaiveDate::from_ymd_opt(1999, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_female_day_range() {
        let decoder = decoder();
        for raw in 41..=71 {
            let nik = format!("330101{:02}01990001", raw);
            let parsed = decoder.decode_on(&nik, today()).unwrap();
            assert_eq!(parsed.sex, Sex::Female);
            assert_eq!(parsed.birth_date.format("%d").to_string(), format!("{:02}", raw - 40));
        }
    }

    #[test]
    fn test_male_day_range() {
        let decoder = decoder();
        for raw in 1..=31 {
            let nik = format!("330101{:02}01990001", raw);
            assert_eq!(decoder.decode_on(&nik, today()).unwrap().sex, Sex::Male);
        }
    }

    #[test]
    fn test_invalid_format() {
        let decoder = decoder();
        for input in ["12345", "", "33010115059900011", "330101150599000a", "3301011505990001 ", "３３01011505990001"] {
            assert_eq!(
                decoder.decode_on(input, today()),
                Err(NikError::InvalidFormat),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_region_lookup_order() {
        let decoder = decoder();
        assert_eq!(
            decoder.decode_on("9901011505990001", today()),
            Err(NikError::UnknownProvince)
        );
        assert_eq!(
            decoder.decode_on("3399011505990001", today()),
            Err(NikError::UnknownCity)
        );
        assert_eq!(
            decoder.decode_on("3301991505990001", today()),
            Err(NikError::UnknownDistrict)
        );
        // Region failures win over date failures
        assert_eq!(
            decoder.decode_on("3301990013990001", today()),
            Err(NikError::UnknownDistrict)
        );
    }

    #[test]
    fn test_invalid_day() {
        let decoder = decoder();
        for raw in ["00", "32", "40", "72", "99"] {
            let nik = format!("330101{}05990001", raw);
            assert_eq!(decoder.decode_on(&nik, today()), Err(NikError::InvalidDay));
        }
    }

    #[test]
    fn test_invalid_month() {
        let decoder = decoder();
        assert_eq!(
            decoder.decode_on("3301011513990001", today()),
            Err(NikError::InvalidMonth)
        );
        assert_eq!(
            decoder.decode_on("3301011500990001", today()),
            Err(NikError::InvalidMonth)
        );
        // Day is checked before month
        assert_eq!(
            decoder.decode_on("3301010013990001", today()),
            Err(NikError::InvalidDay)
        );
    }

    #[test]
    fn test_invalid_calendar_date() {
        let decoder = decoder();
        assert_eq!(
            decoder.decode_on("3301013002990001", today()),
            Err(NikError::InvalidDate)
        );
        // 1999 is not a leap year, 2000 is
        assert_eq!(
            decoder.decode_on("3301012902990001", today()),
            Err(NikError::InvalidDate)
        );
        assert!(decoder.decode_on("3301012902000001", today()).is_ok());
        assert_eq!(
            decoder.decode_on("3301017104990001", today()),
            Err(NikError::InvalidDate)
        );
    }

    #[test]
    fn test_year_expansion() {
        assert_eq!(expand_year(51), 1951);
        assert_eq!(expand_year(99), 1999);
        assert_eq!(expand_year(0), 2000);
        assert_eq!(expand_year(50), 2050);
    }

    #[test]
    fn test_future_birth_date_keeps_nik_valid() {
        let parsed = decoder().decode_on("3301010101490001", today()).unwrap();
        assert_eq!(parsed.birth_date.format("%Y").to_string(), "2049");
        assert_eq!(parsed.age, 0);
    }

    #[test]
    fn test_decode_is_repeatable() {
        let decoder = decoder();
        let first = decoder.decode_on("3301015505990001", today()).unwrap();
        let second = decoder.decode_on("3301015505990001", today()).unwrap();
        assert_eq!(first, second);
    }
}

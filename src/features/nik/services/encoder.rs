use chrono::{Datelike, NaiveDate};

use crate::features::nik::error::EncodeError;
use crate::features::nik::models::{ParsedNik, Sex};

fn check_code(level: &'static str, code: &str, len: usize) -> Result<(), EncodeError> {
    if code.len() == len && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(EncodeError::InvalidCode {
            level,
            len,
            value: code.to_string(),
        })
    }
}

fn check_prefix(
    level: &'static str,
    code: &str,
    parent: &'static str,
    parent_code: &str,
) -> Result<(), EncodeError> {
    if code.starts_with(parent_code) {
        Ok(())
    } else {
        Err(EncodeError::PrefixMismatch {
            level,
            code: code.to_string(),
            parent,
            parent_code: parent_code.to_string(),
        })
    }
}

/// Compose a 16-digit NIK from its parts.
///
/// Pure formatting: the codes are not looked up in any catalog, so a caller
/// that needs a valid NIK has to decode the result. Codes must be 2, 4 and 6
/// digits, each prefixed by its parent; the sequence must be 1 to 4 digits and
/// is left-padded with zeros.
pub fn encode(
    province_code: &str,
    city_code: &str,
    district_code: &str,
    birth_date: NaiveDate,
    sex: Sex,
    sequence: &str,
) -> Result<String, EncodeError> {
    check_code("province", province_code, 2)?;
    check_code("city", city_code, 4)?;
    check_code("district", district_code, 6)?;
    check_prefix("city", city_code, "province", province_code)?;
    check_prefix("district", district_code, "city", city_code)?;

    if sequence.is_empty() || sequence.len() > 4 || !sequence.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(EncodeError::InvalidSequence(sequence.to_string()));
    }

    let day = match sex {
        Sex::Male => birth_date.day(),
        Sex::Female => birth_date.day() + Sex::FEMALE_DAY_OFFSET,
    };

    Ok(format!(
        "{}{}{}{:02}{:02}{:02}{:0>4}",
        province_code,
        &city_code[2..4],
        &district_code[4..6],
        day,
        birth_date.month(),
        birth_date.year().rem_euclid(100),
        sequence
    ))
}

/// Re-encode a decoded NIK from its extracted fields
pub fn encode_parsed(parsed: &ParsedNik) -> Result<String, EncodeError> {
    encode(
        &parsed.province_code,
        &parsed.city_code,
        &parsed.district_code,
        parsed.birth_date,
        parsed.sex,
        &parsed.sequence,
    )
}

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::NIK_LENGTH;

lazy_static! {
    /// A complete NIK: exactly 16 ASCII digits
    pub static ref NIK_REGEX: Regex = Regex::new(&format!(r"^[0-9]{{{}}}$", NIK_LENGTH)).unwrap();

    /// Province code, e.g. "33"
    pub static ref PROVINCE_CODE_REGEX: Regex = Regex::new(r"^[0-9]{2}$").unwrap();

    /// City/regency code including its province prefix, e.g. "3301"
    pub static ref CITY_CODE_REGEX: Regex = Regex::new(r"^[0-9]{4}$").unwrap();

    /// District code including its city prefix, e.g. "330101"
    pub static ref DISTRICT_CODE_REGEX: Regex = Regex::new(r"^[0-9]{6}$").unwrap();

    /// Registration sequence before zero padding
    /// - Valid: "1", "0001", "9999"
    /// - Invalid: "", "12345", "12a"
    pub static ref SEQUENCE_REGEX: Regex = Regex::new(r"^[0-9]{1,4}$").unwrap();
}

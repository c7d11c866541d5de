use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::nik::error::NikError;
use crate::features::nik::models::{ParsedNik, Sex};
use crate::features::nik::services::calendar;
use crate::shared::validation::{
    CITY_CODE_REGEX, DISTRICT_CODE_REGEX, PROVINCE_CODE_REGEX, SEQUENCE_REGEX,
};

/// Message returned with every successfully decoded NIK
pub const NIK_VALID_MESSAGE: &str = "NIK valid";

/// Query parameters for `GET /api/nik/validate`
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct NikQuery {
    /// 16-digit NIK
    #[param(example = "3301011505990001")]
    pub nik: Option<String>,
}

/// Request body carrying a NIK
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NikRequestDto {
    #[schema(example = "3301011505990001")]
    pub nik: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NikStatus {
    Success,
    Error,
}

/// Result envelope: either a decoded NIK or one human-readable reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NikParseResponse {
    pub status: NikStatus,
    pub pesan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NikDataDto>,
}

/// Decoded NIK in the field layout existing clients consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NikDataDto {
    pub nik: String,
    /// "LAKI-LAKI" or "PEREMPUAN"
    pub kelamin: String,
    /// Birth date as DD/MM/YYYY
    pub lahir: String,
    pub provinsi: String,
    pub kotakab: String,
    pub kecamatan: String,
    pub uniqcode: String,
    pub tambahan: NikExtrasDto,
}

/// Derived attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NikExtrasDto {
    pub kodepos: String,
    /// Weekday and pasaran of the birth date, e.g. "Sabtu Kliwon"
    pub pasaran: String,
    /// e.g. "27 Tahun 5 Bulan 1 Hari"
    pub usia: String,
    /// Time until the next birthday, e.g. "6 Bulan 29 Hari Lagi"
    pub ultah: String,
    pub zodiak: String,
}

impl From<&ParsedNik> for NikDataDto {
    fn from(parsed: &ParsedNik) -> Self {
        let age = parsed.age_detail;
        let countdown = parsed.next_birthday;
        let ultah = if countdown.total_days == 0 {
            "Hari ini".to_string()
        } else {
            format!("{} Bulan {} Hari Lagi", countdown.months, countdown.days)
        };

        Self {
            nik: parsed.nik.clone(),
            kelamin: parsed.sex.label().to_string(),
            lahir: parsed.birth_date.format("%d/%m/%Y").to_string(),
            provinsi: parsed.province_name.clone(),
            kotakab: parsed.city_name.clone(),
            kecamatan: parsed.district_name.clone(),
            uniqcode: parsed.sequence.clone(),
            tambahan: NikExtrasDto {
                kodepos: parsed.postal_code.clone(),
                pasaran: format!(
                    "{} {}",
                    calendar::weekday_name(parsed.birth_date),
                    parsed.pasaran.name()
                ),
                usia: format!("{} Tahun {} Bulan {} Hari", parsed.age, age.months, age.days),
                ultah,
                zodiak: parsed.zodiac.name().to_string(),
            },
        }
    }
}

impl NikParseResponse {
    pub fn success(parsed: &ParsedNik) -> Self {
        Self {
            status: NikStatus::Success,
            pesan: NIK_VALID_MESSAGE.to_string(),
            data: Some(parsed.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: NikStatus::Error,
            pesan: message.into(),
            data: None,
        }
    }
}

impl From<&Result<ParsedNik, NikError>> for NikParseResponse {
    fn from(result: &Result<ParsedNik, NikError>) -> Self {
        match result {
            Ok(parsed) => Self::success(parsed),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// Request DTO for composing a NIK
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNikRequestDto {
    #[validate(regex(path = *PROVINCE_CODE_REGEX, message = "provinceCode must be 2 digits"))]
    #[schema(example = "33")]
    pub province_code: String,

    #[validate(regex(path = *CITY_CODE_REGEX, message = "cityCode must be 4 digits"))]
    #[schema(example = "3301")]
    pub city_code: String,

    #[validate(regex(path = *DISTRICT_CODE_REGEX, message = "districtCode must be 6 digits"))]
    #[schema(example = "330101")]
    pub district_code: String,

    #[schema(value_type = String, format = Date, example = "1999-05-15")]
    pub birth_date: NaiveDate,

    /// MALE/FEMALE (L/P also accepted)
    pub sex: Sex,

    #[validate(regex(path = *SEQUENCE_REGEX, message = "sequence must be 1 to 4 digits"))]
    #[schema(example = "0001")]
    pub sequence: String,
}

/// Response DTO for a composed NIK
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNikResponseDto {
    pub nik: String,
    /// Decoding the composed NIK back against the region catalog
    pub verification: NikParseResponse,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sex as folded into the NIK day field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    #[serde(alias = "L", alias = "LAKI-LAKI")]
    Male,
    #[serde(alias = "P", alias = "PEREMPUAN")]
    Female,
}

impl Sex {
    /// Added to the birth day for women
    pub const FEMALE_DAY_OFFSET: u32 = 40;

    /// Label printed on the identity card
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "LAKI-LAKI",
            Sex::Female => "PEREMPUAN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_accepts_card_codes() {
        let male: Sex = serde_json::from_str("\"L\"").unwrap();
        let female: Sex = serde_json::from_str("\"PEREMPUAN\"").unwrap();
        assert_eq!(male, Sex::Male);
        assert_eq!(female, Sex::Female);
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"FEMALE\"");
    }
}

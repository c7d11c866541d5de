mod parsed_nik;
mod pasaran;
mod sex;
mod zodiac;

pub use parsed_nik::{AgeBreakdown, BirthdayCountdown, ParsedNik};
pub use pasaran::Pasaran;
pub use sex::Sex;
pub use zodiac::Zodiac;

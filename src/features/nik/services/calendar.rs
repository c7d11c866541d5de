use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::features::nik::models::{AgeBreakdown, BirthdayCountdown};

/// Largest whole-month step from `from` that does not pass `to`, together with
/// the date it lands on. Month-end days clamp (31 Jan + 1 month = 28/29 Feb).
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> (u32, NaiveDate) {
    let estimate = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = estimate.max(0) as u32;

    loop {
        match from.checked_add_months(Months::new(months)) {
            Some(date) if date <= to => return (months, date),
            _ if months > 0 => months -= 1,
            _ => return (0, from),
        }
    }
}

fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    (to - from).num_days().max(0) as u32
}

/// Age on `today`. Future birth dates yield zero.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    if birth_date > today {
        return AgeBreakdown::default();
    }

    let (months, anniversary) = whole_months_between(birth_date, today);
    AgeBreakdown {
        years: months / 12,
        months: months % 12,
        days: days_between(anniversary, today),
    }
}

/// Birthday falling in `year`; 29 February becomes 28 February in common years
fn birthday_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

pub fn birthday_countdown(birth_date: NaiveDate, today: NaiveDate) -> BirthdayCountdown {
    let next = birthday_in(birth_date, today.year())
        .filter(|date| *date >= today)
        .or_else(|| birthday_in(birth_date, today.year() + 1))
        .unwrap_or(today);

    let (months, anchor) = whole_months_between(today, next);
    BirthdayCountdown {
        months,
        days: days_between(anchor, next),
        total_days: days_between(today, next),
    }
}

/// Indonesian weekday name
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_age_on() {
        let age = age_on(date(1999, 5, 15), date(2026, 10, 16));
        assert_eq!(
            age,
            AgeBreakdown {
                years: 27,
                months: 5,
                days: 1
            }
        );
    }

    #[test]
    fn test_age_day_before_birthday() {
        let age = age_on(date(1999, 5, 15), date(2025, 5, 14));
        assert_eq!(age.years, 25);
        assert_eq!(age.months, 11);
    }

    #[test]
    fn test_age_on_birthday() {
        let age = age_on(date(1999, 5, 15), date(2025, 5, 15));
        assert_eq!(
            age,
            AgeBreakdown {
                years: 26,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_future_birth_date_is_zero_age() {
        assert_eq!(
            age_on(date(2049, 1, 1), date(2026, 10, 16)),
            AgeBreakdown::default()
        );
    }

    #[test]
    fn test_leap_day_birth_ages_on_feb_28() {
        assert_eq!(age_on(date(2000, 2, 29), date(2025, 2, 28)).years, 25);
        assert_eq!(age_on(date(2000, 2, 29), date(2025, 2, 27)).years, 24);
    }

    #[test]
    fn test_month_end_clamping() {
        let age = age_on(date(2025, 1, 31), date(2025, 3, 30));
        assert_eq!(
            age,
            AgeBreakdown {
                years: 0,
                months: 1,
                days: 30
            }
        );
    }

    #[test]
    fn test_birthday_countdown() {
        let countdown = birthday_countdown(date(1999, 5, 15), date(2026, 10, 16));
        assert_eq!(countdown.total_days, 211);
        assert_eq!(countdown.months, 6);
        assert_eq!(countdown.days, 29);
    }

    #[test]
    fn test_birthday_countdown_later_this_year() {
        let countdown = birthday_countdown(date(1990, 12, 25), date(2026, 12, 1));
        assert_eq!(
            countdown,
            BirthdayCountdown {
                months: 0,
                days: 24,
                total_days: 24
            }
        );
    }

    #[test]
    fn test_birthday_today_is_zero() {
        let countdown = birthday_countdown(date(1999, 5, 15), date(2026, 5, 15));
        assert_eq!(countdown, BirthdayCountdown::default());
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let countdown = birthday_countdown(date(2000, 2, 29), date(2026, 2, 1));
        assert_eq!(countdown.total_days, 27);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(date(1945, 8, 17)), "Jumat");
        assert_eq!(weekday_name(date(1999, 5, 15)), "Sabtu");
    }
}

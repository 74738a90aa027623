use chrono::{Datelike, Local, Month, NaiveDate, Weekday};
use num_traits::FromPrimitive;
use std::fmt;

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() as u32 + 1, 1)
    }
    .unwrap()
    .signed_duration_since(
        NaiveDate::from_ymd_opt(year, month.number_from_month() as u32, 1).unwrap(),
    )
    .num_days() as u32
}

/// Day-of-week index (Sunday = 0) of the first day of the month, i.e. the
/// number of leading blank cells in a Sun-first grid.
pub fn first_weekday_offset(index: &MonthIndex) -> u32 {
    index.first_day().weekday().num_days_from_sunday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// All weekend dates in `begin..=end`, ascending. Empty if `begin > end`.
pub fn weekends_between(begin: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    begin
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_weekend(*day))
        .collect()
}

/// Display-only rendering of an optional date. Never used for comparisons.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Not selected".to_owned(),
    }
}

/// The (month, year) pair a calendar grid is showing. Day-of-month carries no
/// meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthIndex {
    index: Month,
    year: i32,
}

impl MonthIndex {
    pub fn new(index: Month, year: i32) -> Self {
        MonthIndex { index, year }
    }

    pub fn month(&self) -> Month {
        self.index
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.index.number_from_month(), 1).unwrap()
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(&self.index, self.year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.index.number_from_month()
    }

    pub fn step_months(self, delta: i32) -> Self {
        let months = self.year * 12 + self.index.number_from_month() as i32 - 1 + delta;

        MonthIndex {
            index: Month::from_u32(months.rem_euclid(12) as u32 + 1).unwrap(),
            year: months.div_euclid(12),
        }
    }

    pub fn step_years(self, delta: i32) -> Self {
        MonthIndex {
            index: self.index,
            year: self.year + delta,
        }
    }
}

impl Default for MonthIndex {
    fn default() -> Self {
        let today = Local::now().date_naive();

        MonthIndex {
            index: Month::from_u32(today.month()).unwrap_or(Month::January),
            year: today.year(),
        }
    }
}

impl<T: Datelike> From<T> for MonthIndex {
    fn from(d: T) -> Self {
        MonthIndex::new(Month::from_u32(d.month()).unwrap(), d.year())
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(&Month::January, 2023), 31);
        assert_eq!(days_of_month(&Month::February, 2023), 28);
        assert_eq!(days_of_month(&Month::February, 2024), 29);
        assert_eq!(days_of_month(&Month::February, 1900), 28);
        assert_eq!(days_of_month(&Month::February, 2000), 29);
        assert_eq!(days_of_month(&Month::December, 2023), 31);
    }

    #[test]
    fn offset_is_sunday_based() {
        // 2024-03-01 is a Friday, 2023-10-01 a Sunday, 2024-01-01 a Monday.
        assert_eq!(
            first_weekday_offset(&MonthIndex::new(Month::March, 2024)),
            5
        );
        assert_eq!(
            first_weekday_offset(&MonthIndex::new(Month::October, 2023)),
            0
        );
        assert_eq!(
            first_weekday_offset(&MonthIndex::new(Month::January, 2024)),
            1
        );
    }

    #[test]
    fn weekend_classification() {
        assert!(is_weekend(date(2024, 3, 9)));
        assert!(is_weekend(date(2024, 3, 10)));
        assert!(is_weekday(date(2024, 3, 8)));
        assert!(is_weekday(date(2024, 3, 11)));
    }

    #[test]
    fn weekends_of_single_day() {
        assert_eq!(
            weekends_between(date(2024, 3, 9), date(2024, 3, 9)),
            vec![date(2024, 3, 9)]
        );
        assert!(weekends_between(date(2024, 3, 8), date(2024, 3, 8)).is_empty());
    }

    #[test]
    fn weekends_across_year_boundary() {
        assert_eq!(
            weekends_between(date(2023, 12, 29), date(2024, 1, 7)),
            vec![
                date(2023, 12, 30),
                date(2023, 12, 31),
                date(2024, 1, 6),
                date(2024, 1, 7),
            ]
        );
    }

    #[test]
    fn weekends_match_reference_enumeration() {
        let begin = date(2024, 1, 15);

        for span in 0..=400 {
            let end = begin + chrono::Duration::days(span);

            let mut expected = Vec::new();
            let mut day = begin;
            while day <= end {
                if is_weekend(day) {
                    expected.push(day);
                }
                day = day.succ_opt().unwrap();
            }

            assert_eq!(weekends_between(begin, end), expected, "span {}", span);
        }
    }

    #[test]
    fn step_months_rolls_over_years() {
        let nov = MonthIndex::new(Month::November, 2023);

        assert_eq!(nov.step_months(2), MonthIndex::new(Month::January, 2024));
        assert_eq!(nov.step_months(-11), MonthIndex::new(Month::December, 2022));
        assert_eq!(nov.step_months(14), MonthIndex::new(Month::January, 2025));
    }

    #[test]
    fn step_months_is_periodic_and_invertible() {
        let start = MonthIndex::new(Month::June, 2021);

        let mut index = start;
        for _ in 0..12 {
            index = index.step_months(1);
        }
        assert_eq!(index, start.step_years(1));

        assert_eq!(start.step_months(1).step_months(-1), start);
    }

    #[test]
    fn formats_dates_for_display() {
        assert_eq!(format_date(Some(date(2024, 3, 4))), "Mar 4, 2024");
        assert_eq!(format_date(None), "Not selected");
    }

    #[test]
    fn index_tracks_containment() {
        let march = MonthIndex::new(Month::March, 2024);

        assert!(march.contains(date(2024, 3, 1)));
        assert!(march.contains(date(2024, 3, 31)));
        assert!(!march.contains(date(2024, 4, 1)));
        assert!(!march.contains(date(2023, 3, 15)));
        assert_eq!(march.to_string(), "March 2024");
    }
}

use chrono::NaiveDate;
use std::error;
use std::fmt;

use crate::calendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn open(start: NaiveDate) -> Self {
        DateRange {
            start: Some(start),
            end: None,
        }
    }

    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_open(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Weekend dates enclosed by the range, ascending. Empty unless closed.
    pub fn weekends(&self) -> Vec<NaiveDate> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => calendar::weekends_between(start, end),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionError {
    rejected: NaiveDate,
}

impl SelectionError {
    pub fn weekend(rejected: NaiveDate) -> Self {
        SelectionError { rejected }
    }

    pub fn rejected(&self) -> NaiveDate {
        self.rejected
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weekend dates cannot be selected")
    }
}

impl error::Error for SelectionError {}

/// A completed selection together with the weekend dates it encloses. Handed
/// to the host once per transition into the closed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub range: DateRange,
    pub weekends: Vec<NaiveDate>,
}

/// A shortcut range offered by the host, picked by label rather than by
/// clicking endpoints.
pub struct PredefinedRange {
    pub label: String,
    pub produce: Box<dyn Fn() -> DateRange>,
}

#[derive(Debug, Default)]
pub struct RangePicker {
    range: DateRange,
    validation: Option<SelectionError>,
}

impl RangePicker {
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn validation(&self) -> Option<&SelectionError> {
        self.validation.as_ref()
    }

    pub fn clear_validation(&mut self) {
        self.validation = None;
    }

    /// Interprets one user pick against the current range. Weekend candidates
    /// are rejected without touching the range; otherwise an empty or closed
    /// range reopens at the candidate, and an open range closes with its
    /// endpoints ordered.
    pub fn select_date(&mut self, candidate: NaiveDate) -> Option<Commit> {
        if calendar::is_weekend(candidate) {
            log::warn!("rejected weekend pick {}", candidate);
            self.validation = Some(SelectionError::weekend(candidate));
            return None;
        }

        self.validation = None;

        self.range = match (self.range.start, self.range.end) {
            (Some(start), None) => {
                if candidate < start {
                    DateRange::closed(candidate, start)
                } else {
                    DateRange::closed(start, candidate)
                }
            }
            _ => DateRange::open(candidate),
        };

        self.commit()
    }

    /// Installs a host-supplied range verbatim. Unlike `select_date` this
    /// accepts weekend endpoints: shortcut ranges are trusted as-is.
    pub fn select_predefined(&mut self, range: DateRange) -> Option<Commit> {
        self.validation = None;
        self.range = range;

        self.commit()
    }

    fn commit(&self) -> Option<Commit> {
        if !self.range.is_closed() {
            return None;
        }

        let weekends = self.range.weekends();
        log::info!(
            "range committed: {} - {} ({} weekend days)",
            calendar::format_date(self.range.start),
            calendar::format_date(self.range.end),
            weekends.len()
        );

        Some(Commit {
            range: self.range,
            weekends,
        })
    }
}

use chrono::{Local, NaiveDate};

use crate::calendar::MonthIndex;
use crate::range::{Commit, RangePicker};

/// Shared mutable state of the picker: the displayed month, the keyboard
/// cursor and the range selection machine. Controllers mutate it, widgets
/// read it.
pub struct Context {
    pub viewport: MonthIndex,
    pub cursor: Option<NaiveDate>,
    pub picker: RangePicker,
    pending_commit: Option<Commit>,
    today: NaiveDate,
}

impl Context {
    pub fn new() -> Self {
        Self::with_viewport(MonthIndex::default())
    }

    pub fn with_viewport(viewport: MonthIndex) -> Self {
        Context {
            viewport,
            cursor: None,
            picker: RangePicker::default(),
            pending_commit: None,
            today: Local::now().date_naive(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn update(&mut self) {
        self.today = Local::now().date_naive();
    }

    /// Parks a completed selection until the host forwards it to its
    /// range-change sink. At most one commit per handled input exists.
    pub fn push_commit(&mut self, commit: Commit) {
        self.pending_commit = Some(commit);
    }

    pub fn take_commit(&mut self) -> Option<Commit> {
        self.pending_commit.take()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

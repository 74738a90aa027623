pub mod calendar;
pub mod summary;

pub use calendar::MonthView;
pub use summary::SummaryView;

//! Calendar view rendering support.

mod grouping;
mod render;
mod rows;

pub use grouping::group_by_day;
pub use render::CalendarRowExpander;
pub use rows::{CalendarItem, DateField, ResultRow};

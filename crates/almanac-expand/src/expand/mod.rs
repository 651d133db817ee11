//! Day-by-day occurrence expansion.
//!
//! Pieces, leaf first:
//! - [`TimeWindow`]: a closed interval of instants and the clipping operation
//! - day boundaries in a display timezone (`day`)
//! - all-day detection on a clipped interval ([`AllDayPolicy`])
//! - the walk itself ([`OccurrenceExpander`])

mod all_day;
mod day;
mod event;
mod expander;
mod occurrence;
mod timezone;
mod window;

pub use all_day::{AllDayPolicy, is_all_day};
pub use day::{day_window, is_day_start, local_midnight, resolve_local};
pub use event::{Event, ViewRange};
pub use expander::{ExpandOptions, OccurrenceExpander};
pub use occurrence::{Occurrence, OccurrenceId};
pub use timezone::{ConversionError, LocalClock, TimeZoneResolver};
pub use window::{TimeWindow, clip};

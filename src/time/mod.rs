//! Weekly time model: clock markers, day sets and recurring meeting times.
//!
//! Time of day is carried as a [`qtty::Quantity`] in [`qtty::Minute`]s since
//! midnight, so spans can be converted to other time units when presenting
//! them.

mod block;
mod clock;
mod days;
mod error;
mod interval;

pub use block::TimeInterval;
pub use clock::{format_clock, parse_clock};
pub use days::{DaySet, Weekday};
pub use error::TimeError;
pub use interval::Interval;

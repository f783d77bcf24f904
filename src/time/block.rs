//! Recurring weekly meeting time.

use std::fmt;
use std::str::FromStr;

use qtty::{Minute, Quantity};

use super::clock::{format_clock, parse_clock};
use super::days::DaySet;
use super::error::TimeError;
use super::interval::Interval;

/// A daily span `[start, end]` that repeats on a set of weekdays.
///
/// # Invariants
///
/// - `start <= end` (enforced by [`Interval`])
/// - the day set is non-empty
///
/// Two values are equal iff start, end and day set are all equal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeInterval {
    span: Interval<Minute>,
    days: DaySet,
}

impl TimeInterval {
    /// Builds a meeting time from an already validated span.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDays` if `days` is empty.
    pub fn new(span: Interval<Minute>, days: DaySet) -> Result<Self, TimeError> {
        if days.is_empty() {
            return Err(TimeError::EmptyDays);
        }
        Ok(Self { span, days })
    }

    /// Builds a meeting time from raw start/end markers and a day string.
    ///
    /// ```rust
    /// use class_scheduler::time::TimeInterval;
    ///
    /// let lecture = TimeInterval::parse("9:00am", "9:50am", "MWF").unwrap();
    /// assert_eq!(lecture.start().value(), 540.0);
    /// assert_eq!(lecture.to_string(), "MWF 9:00 AM - 9:50 AM");
    /// ```
    pub fn parse(start: &str, end: &str, days: &str) -> Result<Self, TimeError> {
        let span = Interval::try_new(parse_clock(start)?, parse_clock(end)?)?;
        Self::new(span, DaySet::parse(days)?)
    }

    /// Builds a meeting time from minutes since midnight.
    pub fn from_minutes(start: f64, end: f64, days: DaySet) -> Result<Self, TimeError> {
        let span = Interval::try_new(Quantity::new(start), Quantity::new(end))?;
        Self::new(span, days)
    }

    pub const fn start(&self) -> Quantity<Minute> {
        self.span.start()
    }

    pub const fn end(&self) -> Quantity<Minute> {
        self.span.end()
    }

    pub const fn span(&self) -> Interval<Minute> {
        self.span
    }

    pub const fn days(&self) -> DaySet {
        self.days
    }

    pub fn duration(&self) -> Quantity<Minute> {
        self.span.duration()
    }

    /// True iff the day sets intersect and the daily spans overlap.
    ///
    /// Touching endpoints count as a conflict.
    pub const fn conflicts_with(&self, other: &TimeInterval) -> bool {
        self.days.intersects(&other.days) && self.span.overlaps(&other.span)
    }

    /// Strict less-than on the start of day.
    pub const fn precedes_start_of(&self, other: &TimeInterval) -> bool {
        self.span.starts_before(&other.span)
    }
}

impl FromStr for TimeInterval {
    type Err = TimeError;

    /// Parses a meeting description such as `"MWF 9:00am - 9:50am"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::MalformedMeeting(s.to_string());
        let trimmed = s.trim();
        let (days, times) = trimmed.split_once(char::is_whitespace).ok_or_else(malformed)?;
        let (start, end) = times.split_once('-').ok_or_else(malformed)?;
        Self::parse(start, end, days)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.days,
            format_clock(self.start()),
            format_clock(self.end())
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            span: Interval<Minute>,
            days: DaySet,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.span, raw.days).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ti(start: &str, end: &str, days: &str) -> TimeInterval {
        TimeInterval::parse(start, end, days).unwrap()
    }

    #[test]
    fn parse_builds_minutes_and_days() {
        let t = ti("3:00pm", "4:20pm", "MW");
        assert_eq!(t.start().value(), 900.0);
        assert_eq!(t.end().value(), 980.0);
        assert_eq!(t.duration().value(), 80.0);
        assert_eq!(t.days().to_string(), "MW");
    }

    #[test]
    fn parse_rejects_reversed_markers() {
        let result = TimeInterval::parse("10:00am", "9:00am", "M");
        assert!(matches!(result, Err(TimeError::StartAfterEnd { .. })));
    }

    #[test]
    fn parse_rejects_bad_marker() {
        let result = TimeInterval::parse("TBA", "9:00am", "M");
        assert_eq!(result, Err(TimeError::MalformedMarker("TBA".to_string())));
    }

    #[test]
    fn parse_rejects_empty_days() {
        let result = TimeInterval::parse("9:00am", "9:50am", "");
        assert_eq!(result, Err(TimeError::EmptyDays));
    }

    #[test]
    fn equality_covers_start_end_and_days() {
        assert_eq!(ti("9:00am", "9:50am", "MWF"), ti("9:00 AM", "9:50 AM", "FWM"));
        assert_ne!(ti("9:00am", "9:50am", "MWF"), ti("9:00am", "9:50am", "MW"));
        assert_ne!(ti("9:00am", "9:50am", "MWF"), ti("9:00am", "9:55am", "MWF"));
    }

    #[test]
    fn overlapping_times_on_shared_day_conflict() {
        let a = ti("9:00am", "9:50am", "M");
        let b = ti("9:30am", "10:00am", "M");
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn overlapping_times_on_disjoint_days_do_not_conflict() {
        let a = ti("10:00am", "11:50am", "MW");
        let b = ti("10:00am", "11:20am", "TR");
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn touching_endpoints_conflict() {
        let a = ti("9:00am", "10:00am", "W");
        let b = ti("10:00am", "10:50am", "W");
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn interval_conflicts_with_itself() {
        let a = ti("5:00pm", "6:30pm", "W");
        assert!(a.conflicts_with(&a));
    }

    #[test]
    fn precedes_is_strict_on_start() {
        let a = ti("9:00am", "9:50am", "MWF");
        let b = ti("9:00am", "10:15am", "TR");
        let c = ti("1:00pm", "1:50pm", "MWF");
        assert!(!a.precedes_start_of(&b));
        assert!(!b.precedes_start_of(&a));
        assert!(a.precedes_start_of(&c));
    }

    #[test]
    fn from_str_parses_meeting_description() {
        let t: TimeInterval = "TR 10:00 AM - 11:20 AM".parse().unwrap();
        assert_eq!(t, ti("10:00am", "11:20am", "TR"));
    }

    #[test]
    fn from_str_rejects_missing_dash() {
        let result = "MWF 9:00am".parse::<TimeInterval>();
        assert_eq!(
            result,
            Err(TimeError::MalformedMeeting("MWF 9:00am".to_string()))
        );
    }

    #[test]
    fn display_uses_canonical_days_and_12_hour_clock() {
        let t = ti("17:00", "18:30", "W");
        assert_eq!(t.to_string(), "W 5:00 PM - 6:30 PM");
    }
}

//! Clock marker parsing and formatting.
//!
//! Markers are written the way registrars print them: `9:57 am`, `2pm`,
//! `12:00PM`. A marker without a meridiem is read on the 24-hour clock
//! (`14:30`). The parsed value is minutes since midnight.

use qtty::{Minute, Quantity};

use super::error::TimeError;

const MINUTES_PER_HOUR: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parses a clock marker into minutes since midnight.
///
/// # Errors
///
/// Returns `MalformedMarker` when the hour or minute cannot be read, or when
/// either is out of range for the clock in use.
pub fn parse_clock(marker: &str) -> Result<Quantity<Minute>, TimeError> {
    let malformed = || TimeError::MalformedMarker(marker.to_string());

    let compact: String = marker
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    let (digits, meridiem) = if let Some(rest) = compact.strip_suffix("AM") {
        (rest, Some(Meridiem::Am))
    } else if let Some(rest) = compact.strip_suffix("PM") {
        (rest, Some(Meridiem::Pm))
    } else {
        (compact.as_str(), None)
    };

    let (hour_text, minute_text) = digits.split_once(':').unwrap_or((digits, "00"));
    if hour_text.is_empty()
        || hour_text.len() > 2
        || minute_text.len() != 2
        || !hour_text.chars().all(|c| c.is_ascii_digit())
        || !minute_text.chars().all(|c| c.is_ascii_digit())
    {
        return Err(malformed());
    }

    let hour: u32 = hour_text.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_text.parse().map_err(|_| malformed())?;
    if minute >= MINUTES_PER_HOUR {
        return Err(malformed());
    }

    let hour24 = match meridiem {
        Some(half) => {
            if !(1..=12).contains(&hour) {
                return Err(malformed());
            }
            match half {
                Meridiem::Am => hour % 12,
                Meridiem::Pm => hour % 12 + 12,
            }
        }
        None => {
            if hour > 23 {
                return Err(malformed());
            }
            hour
        }
    };

    Ok(Quantity::new(f64::from(hour24 * MINUTES_PER_HOUR + minute)))
}

/// Formats minutes since midnight as a 12-hour marker, e.g. `2:56 PM`.
pub fn format_clock(time: Quantity<Minute>) -> String {
    let total = time.value().round().max(0.0) as u32;
    let hour24 = (total / MINUTES_PER_HOUR) % 24;
    let minute = total % MINUTES_PER_HOUR;
    let (hour, half) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{hour}:{minute:02} {half}")
}

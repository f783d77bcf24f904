use thiserror::Error;

/// Malformed time input: bad clock markers, day strings, or reversed spans.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeError {
    #[error("Malformed time marker: {0:?}")]
    MalformedMarker(String),

    #[error("Interval start ({start} min) is after its end ({end} min)")]
    StartAfterEnd { start: f64, end: f64 },

    #[error("Time value cannot be NaN")]
    NaNTime,

    #[error("Unknown day symbol {0:?}, expected one of M T W R F S U")]
    UnknownDay(char),

    #[error("Day set cannot be empty")]
    EmptyDays,

    #[error("Malformed meeting description: {0:?}")]
    MalformedMeeting(String),
}

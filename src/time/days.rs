//! Days of the week and compact day sets.

use std::fmt;
use std::str::FromStr;

use super::error::TimeError;

/// A day of the week, written with the registrar's one-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// One-letter symbol: `M T W R F S U`.
    pub const fn symbol(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
            Weekday::Saturday => 'S',
            Weekday::Sunday => 'U',
        }
    }

    /// Parses a one-letter symbol, case-insensitively.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'R' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            'S' => Some(Weekday::Saturday),
            'U' => Some(Weekday::Sunday),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of weekdays stored as a 7-bit mask.
///
/// Iteration and display always follow Monday-first order, regardless of the
/// order the days were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    pub const EMPTY: DaySet = DaySet(0);

    /// Parses a day string such as `"MWF"` or `"t r"`.
    ///
    /// Whitespace is ignored and repeated days collapse.
    ///
    /// # Errors
    ///
    /// - `UnknownDay` for a symbol outside `M T W R F S U`
    /// - `EmptyDays` if no day is named
    pub fn parse(days: &str) -> Result<Self, TimeError> {
        let mut set = DaySet::EMPTY;
        for symbol in days.chars().filter(|c| !c.is_whitespace()) {
            let day = Weekday::from_symbol(symbol).ok_or(TimeError::UnknownDay(symbol))?;
            set = set.with(day);
        }
        if set.is_empty() {
            return Err(TimeError::EmptyDays);
        }
        Ok(set)
    }

    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        DaySet(self.0 | day.bit())
    }

    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// True if at least one day is shared.
    pub const fn intersects(&self, other: &DaySet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let set = *self;
        Weekday::ALL.into_iter().filter(move |day| set.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(DaySet::EMPTY, DaySet::with)
    }
}

impl FromStr for DaySet {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DaySet::parse(s)
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.symbol())?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DaySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DaySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DaySet::parse(&raw).map_err(serde::de::Error::custom)
    }
}

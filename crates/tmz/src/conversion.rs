// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use jiff::civil::{Date, Time};
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp, Zoned};

use crate::ZoneId;

/// The signed difference between the UTC offsets of two zones at one instant.
///
/// The difference is positive when the target zone is ahead of the source zone. It can be
/// fractional when expressed in hours, for example `+5.5` between UTC and `Asia/Kolkata`.
///
/// # Examples
///
/// ```
/// use tmz::OffsetDifference;
///
/// let difference = OffsetDifference::from_seconds(5 * 3600 + 45 * 60);
///
/// assert_eq!(difference.hours(), 5.75);
/// assert_eq!(difference.minutes(), 345);
/// assert_eq!(difference.to_string(), "+5.75 hours");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetDifference {
    seconds: i32,
}

impl OffsetDifference {
    /// Creates a difference from a number of seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Returns the difference `target - source` between two offsets.
    #[must_use]
    pub fn between(source: Offset, target: Offset) -> Self {
        Self::from_seconds(target.seconds() - source.seconds())
    }

    /// Returns the difference in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Returns the difference in whole minutes.
    #[must_use]
    pub const fn minutes(&self) -> i32 {
        self.seconds / 60
    }

    /// Returns the difference in hours, which may be fractional.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.seconds) / 3600.0
    }

    /// Returns the difference as a duration.
    #[must_use]
    pub fn to_duration(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::from(self.seconds))
    }
}

impl fmt::Display for OffsetDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds >= 0 {
            f.write_str("+")?;
        }

        write!(f, "{} hours", self.hours())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OffsetDifference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.hours())
    }
}

/// One instant expressed in a source zone and a target zone, produced by
/// [`TimeConversionEngine::convert`][crate::TimeConversionEngine::convert].
///
/// [`source_local`][Self::source_local] and [`target_local`][Self::target_local] always
/// denote the same absolute instant. Only their wall-clock rendering differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    source_zone: ZoneId,
    target_zone: ZoneId,
    source_local: Zoned,
    target_local: Zoned,
    formatted_source: String,
    formatted_target: String,
}

impl ConversionResult {
    pub(crate) fn new(
        (source_zone, source_local): (ZoneId, Zoned),
        (target_zone, target_local): (ZoneId, Zoned),
        formatted_source: String,
        formatted_target: String,
    ) -> Self {
        Self {
            source_zone,
            target_zone,
            source_local,
            target_local,
            formatted_source,
            formatted_target,
        }
    }

    /// Returns the zone the input date and time were given in.
    #[must_use]
    pub const fn source_zone(&self) -> &ZoneId {
        &self.source_zone
    }

    /// Returns the zone the instant was converted to.
    #[must_use]
    pub const fn target_zone(&self) -> &ZoneId {
        &self.target_zone
    }

    /// Returns the absolute instant named by the input.
    #[must_use]
    pub fn source_instant(&self) -> Timestamp {
        self.source_local.timestamp()
    }

    /// Returns the instant as a date and time in the source zone.
    #[must_use]
    pub const fn source_local(&self) -> &Zoned {
        &self.source_local
    }

    /// Returns the instant as a date and time in the target zone.
    #[must_use]
    pub const fn target_local(&self) -> &Zoned {
        &self.target_local
    }

    /// Returns the calendar date in the target zone.
    #[must_use]
    pub fn target_date(&self) -> Date {
        self.target_local.date()
    }

    /// Returns the wall-clock time in the target zone.
    #[must_use]
    pub fn target_time(&self) -> Time {
        self.target_local.time()
    }

    /// Returns the offset difference between the zones at the instant.
    #[must_use]
    pub fn offset_difference(&self) -> OffsetDifference {
        OffsetDifference::between(self.source_local.offset(), self.target_local.offset())
    }

    /// Shorthand for `self.offset_difference().hours()`.
    #[must_use]
    pub fn offset_difference_hours(&self) -> f64 {
        self.offset_difference().hours()
    }

    /// Returns how many calendar days the target date is ahead of the source date.
    ///
    /// This is non-zero when the conversion crosses midnight or the International Date Line.
    /// Zones on opposite sides of the line can be more than a day apart, so the shift can
    /// reach `-2` or `2`.
    #[must_use]
    pub fn day_shift(&self) -> i64 {
        self.target_local.date().duration_since(self.source_local.date()).as_hours() / 24
    }

    /// Returns the source side rendered with the engine's date-time format.
    #[must_use]
    pub fn formatted_source(&self) -> &str {
        &self.formatted_source
    }

    /// Returns the target side rendered with the engine's date-time format.
    #[must_use]
    pub fn formatted_target(&self) -> &str {
        &self.formatted_target
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConversionResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ConversionResult", 8)?;
        state.serialize_field("source_zone", &self.source_zone)?;
        state.serialize_field("target_zone", &self.target_zone)?;
        state.serialize_field("source_instant", &self.source_instant())?;
        state.serialize_field("source_local", &self.source_local)?;
        state.serialize_field("target_local", &self.target_local)?;
        state.serialize_field("offset_difference_hours", &self.offset_difference())?;
        state.serialize_field("formatted_source", &self.formatted_source)?;
        state.serialize_field("formatted_target", &self.formatted_target)?;
        state.end()
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;

use jiff::civil::DateTime;
use jiff::tz::Offset;

/// The result type for fallible operations that use the [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error returned by [`TimeConversionEngine`][crate::TimeConversionEngine] operations.
///
/// Every failure belongs to one [`ErrorKind`], which callers use to explain the problem
/// to the user. The message names the literal input that was rejected.
///
/// # Limited introspection
///
/// Apart from [`kind`][Self::kind] and [`input`][Self::input], this error type provides no
/// introspection capabilities. The underlying parser or database error, if any, is
/// available through [`std::error::Error::source`].
///
/// # Examples
///
/// ```
/// use tick::Clock;
/// use tmz::{DatabaseZoneRules, ErrorKind, TimeConversionEngine};
///
/// let engine = TimeConversionEngine::new(DatabaseZoneRules::bundled(), &Clock::new_frozen());
/// let error = engine.current_snapshot("Not/AZone").unwrap_err();
///
/// assert_eq!(error.kind(), ErrorKind::InvalidZone);
/// assert_eq!(error.input(), "Not/AZone");
/// ```
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(Repr);

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The time zone identifier is not recognized by the zone database.
    InvalidZone,

    /// The date or time is malformed, or does not name a real moment in the zone.
    InvalidDateTime,

    /// A configured format pattern could not be applied.
    InvalidFormat,
}

#[derive(Debug, thiserror::Error)]
enum Repr {
    #[error("unrecognized time zone '{zone}'")]
    UnknownZone { zone: String },

    #[error("'{input}' is not a valid date, expected YYYY-MM-DD")]
    MalformedDate {
        input: String,
        #[source]
        source: jiff::Error,
    },

    #[error("'{input}' is not a valid time, expected HH:MM or HH:MM:SS")]
    MalformedTime {
        input: String,
        #[source]
        source: jiff::Error,
    },

    #[error("{datetime} does not exist in {zone}, the clocks move from {before} to {after}")]
    SkippedLocalTime {
        zone: String,
        datetime: DateTime,
        before: Offset,
        after: Offset,
    },

    #[error("{datetime} occurs twice in {zone}, at {earlier} and at {later}")]
    RepeatedLocalTime {
        zone: String,
        datetime: DateTime,
        earlier: Offset,
        later: Offset,
    },

    #[error("{datetime} in {zone} is outside the supported range")]
    OutOfRange {
        zone: String,
        datetime: DateTime,
        #[source]
        source: jiff::Error,
    },

    #[error("the clock reading is outside the supported range")]
    ClockOutOfRange {
        #[source]
        source: jiff::Error,
    },

    #[error("cannot format with pattern '{pattern}'")]
    Format {
        pattern: Cow<'static, str>,
        #[source]
        source: jiff::Error,
    },
}

impl Error {
    const fn from_repr(repr: Repr) -> Self {
        Self(repr)
    }

    pub(crate) fn unknown_zone(zone: impl Into<String>) -> Self {
        Self::from_repr(Repr::UnknownZone { zone: zone.into() })
    }

    pub(crate) fn malformed_date(input: impl Into<String>, source: jiff::Error) -> Self {
        Self::from_repr(Repr::MalformedDate {
            input: input.into(),
            source,
        })
    }

    pub(crate) fn malformed_time(input: impl Into<String>, source: jiff::Error) -> Self {
        Self::from_repr(Repr::MalformedTime {
            input: input.into(),
            source,
        })
    }

    pub(crate) fn skipped_local_time(zone: impl Into<String>, datetime: DateTime, before: Offset, after: Offset) -> Self {
        Self::from_repr(Repr::SkippedLocalTime {
            zone: zone.into(),
            datetime,
            before,
            after,
        })
    }

    pub(crate) fn repeated_local_time(zone: impl Into<String>, datetime: DateTime, earlier: Offset, later: Offset) -> Self {
        Self::from_repr(Repr::RepeatedLocalTime {
            zone: zone.into(),
            datetime,
            earlier,
            later,
        })
    }

    pub(crate) fn out_of_range(zone: impl Into<String>, datetime: DateTime, source: jiff::Error) -> Self {
        Self::from_repr(Repr::OutOfRange {
            zone: zone.into(),
            datetime,
            source,
        })
    }

    pub(crate) fn clock_out_of_range(source: jiff::Error) -> Self {
        Self::from_repr(Repr::ClockOutOfRange { source })
    }

    pub(crate) fn format(pattern: Cow<'static, str>, source: jiff::Error) -> Self {
        Self::from_repr(Repr::Format { pattern, source })
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match &self.0 {
            Repr::UnknownZone { .. } => ErrorKind::InvalidZone,
            Repr::MalformedDate { .. }
            | Repr::MalformedTime { .. }
            | Repr::SkippedLocalTime { .. }
            | Repr::RepeatedLocalTime { .. }
            | Repr::OutOfRange { .. }
            | Repr::ClockOutOfRange { .. } => ErrorKind::InvalidDateTime,
            Repr::Format { .. } => ErrorKind::InvalidFormat,
        }
    }

    /// Returns the input that was rejected.
    ///
    /// This is the zone name for [`ErrorKind::InvalidZone`], the offending text for
    /// malformed dates and times, the zone name for local times that do not resolve,
    /// and the pattern for [`ErrorKind::InvalidFormat`]. It is empty when the clock reading
    /// itself could not be represented.
    #[must_use]
    pub fn input(&self) -> &str {
        match &self.0 {
            Repr::UnknownZone { zone }
            | Repr::SkippedLocalTime { zone, .. }
            | Repr::RepeatedLocalTime { zone, .. }
            | Repr::OutOfRange { zone, .. } => zone,
            Repr::MalformedDate { input, .. } | Repr::MalformedTime { input, .. } => input,
            Repr::Format { pattern, .. } => pattern,
            Repr::ClockOutOfRange { .. } => "",
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidZone`.
    #[must_use]
    pub fn is_invalid_zone(&self) -> bool {
        self.kind() == ErrorKind::InvalidZone
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidDateTime`.
    #[must_use]
    pub fn is_invalid_date_time(&self) -> bool {
        self.kind() == ErrorKind::InvalidDateTime
    }
}

/// The zone rule provider could not enumerate its time zones.
///
/// Returned by [`ZoneRules::zone_names`][crate::ZoneRules::zone_names].
/// [`ZoneCatalog::load`][crate::ZoneCatalog::load] recovers from this error by falling
/// back to a fixed list of common zones, so it never reaches users of the catalog.
///
/// # Examples
///
/// ```
/// use tmz::CatalogUnavailable;
///
/// let error = CatalogUnavailable::new("no zoneinfo directory");
/// assert_eq!(error.to_string(), "time zone catalog unavailable: no zoneinfo directory");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("time zone catalog unavailable: {reason}")]
pub struct CatalogUnavailable {
    reason: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl CatalogUnavailable {
    /// Creates the error with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }

    /// Creates the error with a reason and the error that caused it.
    #[must_use]
    pub fn caused_by(reason: impl Into<Cow<'static, str>>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the reason the catalog is unavailable.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

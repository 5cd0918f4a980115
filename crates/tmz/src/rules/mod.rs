// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Zone rule providers.
//!
//! A provider answers three questions on behalf of the catalog and the engine:
//!
//! - Which zone names exist? See [`ZoneRules::zone_names`].
//! - What is the UTC offset of a zone at an instant? See [`ZoneRules::offset_at`].
//! - Which instant does a local date and time name in a zone? See [`ZoneRules::resolve_local`].
//!
//! Two providers are included:
//!
//! - [`DatabaseZoneRules`] reads an IANA time zone database: the one installed on the
//!   machine, a specific zoneinfo directory, or the copy bundled into the binary.
//! - [`FallbackZoneRules`] only knows the fixed list of common zones in [`FALLBACK_ZONES`].
//!
//! The provider is chosen once at startup. The engine and the catalog cannot tell them apart.

mod database;
mod fallback;

use std::fmt::Debug;

use jiff::civil::DateTime;
use jiff::tz::{AmbiguousOffset, Offset, TimeZone};
use jiff::Timestamp;

pub use database::DatabaseZoneRules;
pub use fallback::{FALLBACK_ZONES, FallbackZoneRules};

use crate::{CatalogUnavailable, ZoneId};

/// Supplies time zone names and rules.
///
/// Implementations must be cheap to query repeatedly; the engine asks for the rules of
/// a zone on every call and never caches them.
///
/// Only [`zone_names`][Self::zone_names] and [`time_zone`][Self::time_zone] are required.
/// The remaining methods are derived from the rules returned by `time_zone`.
///
/// # Examples
///
/// A provider that knows a single fixed-offset zone:
///
/// ```
/// use jiff::tz::{TimeZone, offset};
/// use tmz::{CatalogUnavailable, ZoneId, ZoneRules};
///
/// #[derive(Debug)]
/// struct Ship;
///
/// impl ZoneRules for Ship {
///     fn zone_names(&self) -> Result<Vec<ZoneId>, CatalogUnavailable> {
///         Ok(vec![ZoneId::new("Ship/Time")])
///     }
///
///     fn time_zone(&self, zone: &str) -> Option<TimeZone> {
///         (zone == "Ship/Time").then(|| TimeZone::fixed(offset(3)))
///     }
/// }
///
/// assert_eq!(Ship.offset_at("Ship/Time", jiff::Timestamp::UNIX_EPOCH), Some(offset(3)));
/// assert_eq!(Ship.offset_at("Ship/Other", jiff::Timestamp::UNIX_EPOCH), None);
/// ```
pub trait ZoneRules: Debug + Send + Sync {
    /// Enumerates every zone name known to the provider, in the provider's order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] when the provider cannot enumerate its zones.
    fn zone_names(&self) -> Result<Vec<ZoneId>, CatalogUnavailable>;

    /// Returns the rules of `zone`, or `None` when the zone is not recognized.
    fn time_zone(&self, zone: &str) -> Option<TimeZone>;

    /// Returns the UTC offset of `zone` at `instant`, or `None` when the zone is not recognized.
    fn offset_at(&self, zone: &str, instant: Timestamp) -> Option<Offset> {
        self.time_zone(zone).map(|tz| tz.to_offset(instant))
    }

    /// Resolves a local date and time in `zone` to absolute time.
    ///
    /// Returns `None` when the zone is not recognized.
    fn resolve_local(&self, zone: &str, datetime: DateTime) -> Option<LocalResolution> {
        self.time_zone(zone).map(|tz| LocalResolution::new(&tz, datetime))
    }
}

/// How a local date and time maps onto absolute time in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalResolution {
    /// The local time occurs exactly once.
    Unique {
        /// The offset in effect at that time.
        offset: Offset,
    },

    /// The local time occurs twice because the clocks were set back.
    Ambiguous {
        /// The offset of the first occurrence.
        earlier: Offset,
        /// The offset of the second occurrence.
        later: Offset,
    },

    /// The local time never occurs because the clocks were set forward past it.
    Skipped {
        /// The offset in effect before the transition.
        before: Offset,
        /// The offset in effect after the transition.
        after: Offset,
    },
}

impl LocalResolution {
    /// Classifies `datetime` against the rules of `tz`.
    #[must_use]
    pub fn new(tz: &TimeZone, datetime: DateTime) -> Self {
        match tz.to_ambiguous_timestamp(datetime).offset() {
            AmbiguousOffset::Unambiguous { offset } => Self::Unique { offset },
            AmbiguousOffset::Fold { before, after } => Self::Ambiguous {
                earlier: before,
                later: after,
            },
            AmbiguousOffset::Gap { before, after } => Self::Skipped { before, after },
        }
    }
}

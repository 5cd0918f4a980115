// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::tz::Offset;
use jiff::{Timestamp, Zoned};

use crate::ZoneId;

/// The current time in a zone, produced by
/// [`TimeConversionEngine::current_snapshot`][crate::TimeConversionEngine::current_snapshot].
///
/// The UTC offset is the offset of the zone at [`instant`][Self::instant], so it reflects
/// daylight saving time in effect at that moment. A snapshot is never updated; ask the
/// engine for a new one to refresh it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    zone: ZoneId,
    local: Zoned,
    formatted_time: String,
    formatted_date: String,
}

impl ZoneSnapshot {
    pub(crate) const fn new(zone: ZoneId, local: Zoned, formatted_time: String, formatted_date: String) -> Self {
        Self {
            zone,
            local,
            formatted_time,
            formatted_date,
        }
    }

    /// Returns the zone, spelled the way the zone database spells it.
    #[must_use]
    pub const fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Returns the absolute instant of the snapshot.
    #[must_use]
    pub fn instant(&self) -> Timestamp {
        self.local.timestamp()
    }

    /// Returns the instant as a date and time in the zone.
    #[must_use]
    pub const fn local(&self) -> &Zoned {
        &self.local
    }

    /// Returns the UTC offset of the zone at the instant.
    #[must_use]
    pub fn utc_offset(&self) -> Offset {
        self.local.offset()
    }

    /// Returns the UTC offset in whole minutes, negative west of Greenwich.
    #[must_use]
    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset().seconds() / 60
    }

    /// Returns the offset as a short label such as `UTC-5` or `UTC+5:30`.
    #[must_use]
    pub fn utc_offset_label(&self) -> String {
        offset_label(self.utc_offset())
    }

    /// Returns the local time rendered with the engine's time format.
    #[must_use]
    pub fn formatted_time(&self) -> &str {
        &self.formatted_time
    }

    /// Returns the local date rendered with the engine's date format.
    #[must_use]
    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ZoneSnapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ZoneSnapshot", 7)?;
        state.serialize_field("zone", &self.zone)?;
        state.serialize_field("instant", &self.instant())?;
        state.serialize_field("local", &self.local)?;
        state.serialize_field("utc_offset_minutes", &self.utc_offset_minutes())?;
        state.serialize_field("utc_offset_label", &self.utc_offset_label())?;
        state.serialize_field("formatted_time", &self.formatted_time)?;
        state.serialize_field("formatted_date", &self.formatted_date)?;
        state.end()
    }
}

pub(crate) fn offset_label(offset: Offset) -> String {
    let sign = if offset.seconds() < 0 { '-' } else { '+' };
    let minutes = offset.seconds().unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::tz::TimeZone;

use super::{DatabaseZoneRules, ZoneRules};
use crate::{CatalogUnavailable, ZoneId};

/// Common time zones covering the major regions of the world.
///
/// Used by [`ZoneCatalog::load`][crate::ZoneCatalog::load] when the provider cannot
/// enumerate its zones, and as the complete zone list of [`FallbackZoneRules`].
pub const FALLBACK_ZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Asia/Tokyo",
    "Asia/Shanghai",
    "Australia/Sydney",
    "Pacific/Auckland",
    "America/Sao_Paulo",
    "Asia/Dubai",
    "Asia/Kolkata",
    "Africa/Johannesburg",
    "America/Mexico_City",
    "Asia/Hong_Kong",
    "UTC",
];

/// Zone rules restricted to the fixed list in [`FALLBACK_ZONES`].
///
/// Zones outside the list are not recognized. The rules of the listed zones come from the
/// database bundled into the binary, so this provider works on machines without a time
/// zone database.
///
/// # Examples
///
/// ```
/// use tmz::{FallbackZoneRules, ZoneRules};
///
/// let rules = FallbackZoneRules::new();
///
/// assert!(rules.time_zone("Asia/Tokyo").is_some());
/// assert!(rules.time_zone("Asia/Kathmandu").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FallbackZoneRules {
    rules: DatabaseZoneRules,
}

impl FallbackZoneRules {
    /// Creates the provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: DatabaseZoneRules::bundled(),
        }
    }

    fn listed(zone: &str) -> Option<&'static str> {
        FALLBACK_ZONES.iter().copied().find(|name| name.eq_ignore_ascii_case(zone))
    }
}

impl Default for FallbackZoneRules {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneRules for FallbackZoneRules {
    fn zone_names(&self) -> Result<Vec<ZoneId>, CatalogUnavailable> {
        Ok(FALLBACK_ZONES.iter().copied().map(ZoneId::from).collect())
    }

    fn time_zone(&self, zone: &str) -> Option<TimeZone> {
        Self::listed(zone).and_then(|name| self.rules.time_zone(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_zone_has_rules() {
        let rules = FallbackZoneRules::new();

        for zone in FALLBACK_ZONES {
            assert!(rules.time_zone(zone).is_some(), "{zone} has no rules");
        }
    }

    #[test]
    fn names_match_list_in_order() {
        let names = FallbackZoneRules::new().zone_names().unwrap();

        assert_eq!(names.len(), FALLBACK_ZONES.len());
        assert!(names.iter().zip(FALLBACK_ZONES).all(|(zone, name)| zone == name));
    }

    #[test]
    fn lookup_ignores_case_and_canonicalizes() {
        let tz = FallbackZoneRules::new().time_zone("europe/LONDON").unwrap();

        assert_eq!(tz.iana_name(), Some("Europe/London"));
    }

    #[test]
    fn unlisted_zone_is_unknown() {
        let rules = FallbackZoneRules::new();

        assert!(rules.time_zone("Asia/Kathmandu").is_none());
        assert!(rules.time_zone("Not/AZone").is_none());
    }
}

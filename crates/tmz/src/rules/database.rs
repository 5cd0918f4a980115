// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::Path;

use jiff::tz::{TimeZone, TimeZoneDatabase};

use super::ZoneRules;
use crate::{CatalogUnavailable, ZoneId};

/// Zone rules backed by an IANA time zone database.
///
/// This is the platform-native provider. It can read:
///
/// - The database installed on the machine, see [`system`][Self::system]. On Unix this is
///   `/usr/share/zoneinfo` or the directory named by `TZDIR`.
/// - A specific zoneinfo directory, see [`from_dir`][Self::from_dir].
/// - The copy of the database compiled into the binary, see [`bundled`][Self::bundled].
///
/// Zone names are matched case-insensitively, so `america/new_york` resolves to
/// `America/New_York`.
///
/// # Examples
///
/// ```
/// use tmz::{DatabaseZoneRules, ZoneRules};
///
/// let rules = DatabaseZoneRules::bundled();
///
/// assert!(rules.time_zone("Europe/Paris").is_some());
/// assert!(rules.time_zone("Europe/Atlantis").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseZoneRules {
    db: TimeZoneDatabase,
}

impl DatabaseZoneRules {
    /// Uses the time zone database of the machine, falling back to the bundled copy when
    /// the machine has none.
    #[must_use]
    pub fn system() -> Self {
        Self {
            db: jiff::tz::db().clone(),
        }
    }

    /// Uses the zoneinfo directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] when `path` cannot be read as a zoneinfo directory.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self, CatalogUnavailable> {
        let path = path.as_ref();
        let db = TimeZoneDatabase::from_dir(path)
            .map_err(|e| CatalogUnavailable::caused_by(format!("cannot read zoneinfo directory {}", path.display()), e))?;

        if db.available().next().is_none() {
            return Err(CatalogUnavailable::new(format!(
                "zoneinfo directory {} contains no time zones",
                path.display()
            )));
        }

        Ok(Self { db })
    }

    /// Uses the copy of the IANA time zone database compiled into the binary.
    ///
    /// The result does not depend on the machine, which makes it the right choice for tests.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            db: TimeZoneDatabase::bundled(),
        }
    }
}

impl Default for DatabaseZoneRules {
    fn default() -> Self {
        Self::system()
    }
}

impl ZoneRules for DatabaseZoneRules {
    fn zone_names(&self) -> Result<Vec<ZoneId>, CatalogUnavailable> {
        let names: Vec<ZoneId> = self.db.available().map(|name| ZoneId::new(name.as_str())).collect();

        if names.is_empty() {
            return Err(CatalogUnavailable::new("the time zone database lists no zones"));
        }

        Ok(names)
    }

    fn time_zone(&self, zone: &str) -> Option<TimeZone> {
        self.db.get(zone).ok()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::offset;

    use super::*;
    use crate::LocalResolution;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(DatabaseZoneRules: Send, Sync, Clone);
    }

    #[test]
    fn bundled_lists_common_zones() {
        let names = DatabaseZoneRules::bundled().zone_names().unwrap();

        assert!(names.len() > 300);
        assert!(names.iter().any(|zone| zone == "Asia/Tokyo"));
        assert!(names.iter().any(|zone| zone == "Europe/London"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let tz = DatabaseZoneRules::bundled().time_zone("america/new_york").unwrap();

        assert_eq!(tz.iana_name(), Some("America/New_York"));
    }

    #[test]
    fn unknown_zone_is_none() {
        let rules = DatabaseZoneRules::bundled();

        assert!(rules.time_zone("Not/AZone").is_none());
        assert!(rules.time_zone("").is_none());
    }

    #[test]
    fn offset_follows_daylight_saving() {
        let rules = DatabaseZoneRules::bundled();
        let winter = date(2024, 1, 15).at(12, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
        let summer = date(2024, 7, 15).at(12, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();

        assert_eq!(rules.offset_at("Europe/London", winter), Some(offset(0)));
        assert_eq!(rules.offset_at("Europe/London", summer), Some(offset(1)));
    }

    #[test]
    fn resolve_local_detects_gap() {
        let resolution = DatabaseZoneRules::bundled()
            .resolve_local("America/New_York", date(2024, 3, 10).at(2, 30, 0, 0))
            .unwrap();

        assert!(matches!(resolution, LocalResolution::Skipped { .. }));
    }

    #[test]
    fn from_missing_dir_is_unavailable() {
        let error = DatabaseZoneRules::from_dir("/definitely/not/a/zoneinfo/dir").unwrap_err();

        assert!(error.reason().contains("/definitely/not/a/zoneinfo/dir"));
    }
}

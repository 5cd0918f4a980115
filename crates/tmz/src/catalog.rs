// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use tracing::Level;

use crate::rules::FALLBACK_ZONES;
use crate::{CatalogOptions, ZoneId, ZoneRules};

/// Where the zones of a [`ZoneCatalog`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// The zones were enumerated by the zone rule provider.
    Provider,

    /// The provider could not enumerate its zones and the catalog holds [`FALLBACK_ZONES`].
    Fallback,
}

/// The ordered list of known time zone names, used for autocomplete.
///
/// The catalog is loaded once at startup and is immutable afterwards. Clones share the
/// same list. It is advisory: the [`TimeConversionEngine`][crate::TimeConversionEngine]
/// never consults it, so a zone missing from the catalog may still be converted.
///
/// # Examples
///
/// ```
/// use tmz::{CatalogOptions, DatabaseZoneRules, ZoneCatalog};
///
/// let catalog = ZoneCatalog::load(&DatabaseZoneRules::bundled(), CatalogOptions::default());
///
/// let suggestions = catalog.search("tokyo");
/// assert!(suggestions.iter().any(|zone| zone == "Asia/Tokyo"));
///
/// // Queries shorter than two characters produce no suggestions.
/// assert!(catalog.search("a").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    entries: Arc<[Entry]>,
    source: CatalogSource,
    options: CatalogOptions,
}

#[derive(Debug)]
struct Entry {
    zone: ZoneId,
    // Lowercase copy of the name, matched against lowercase queries.
    key: String,
}

impl ZoneCatalog {
    /// Loads the zone names of `rules`.
    ///
    /// When the provider cannot enumerate its zones, or enumerates none, the catalog
    /// holds [`FALLBACK_ZONES`] instead. This never fails and the catalog is never empty.
    #[must_use]
    pub fn load(rules: &dyn ZoneRules, options: CatalogOptions) -> Self {
        match rules.zone_names() {
            Ok(names) if !names.is_empty() => {
                tracing::event!(name: "tmz.catalog.loaded", Level::DEBUG, catalog.zones = names.len());
                Self::from_zones(names, CatalogSource::Provider, options)
            }
            Ok(_) => {
                tracing::event!(
                    name: "tmz.catalog.fallback",
                    Level::WARN,
                    catalog.zones = FALLBACK_ZONES.len(),
                    "zone rule provider listed no zones, using the fallback list"
                );
                Self::fallback(options)
            }
            Err(error) => {
                tracing::event!(
                    name: "tmz.catalog.fallback",
                    Level::WARN,
                    catalog.zones = FALLBACK_ZONES.len(),
                    error = %error,
                    "cannot enumerate time zones, using the fallback list"
                );
                Self::fallback(options)
            }
        }
    }

    /// Creates a catalog holding [`FALLBACK_ZONES`].
    #[must_use]
    pub fn fallback(options: CatalogOptions) -> Self {
        Self::from_zones(FALLBACK_ZONES.iter().copied().map(ZoneId::from), CatalogSource::Fallback, options)
    }

    fn from_zones(zones: impl IntoIterator<Item = ZoneId>, source: CatalogSource, options: CatalogOptions) -> Self {
        let entries = zones
            .into_iter()
            .map(|zone| Entry {
                key: zone.as_str().to_lowercase(),
                zone,
            })
            .collect();

        Self {
            entries,
            source,
            options,
        }
    }

    /// Returns up to [`max_results`][CatalogOptions::max_results] zones whose name contains
    /// `query`, ignoring case, in catalog order.
    ///
    /// The match is on any substring, not only on prefixes, so `york` matches
    /// `America/New_York`. Queries shorter than
    /// [`min_query_chars`][CatalogOptions::min_query_chars] characters return nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<ZoneId> {
        self.search_limit(query, self.options.get_max_results())
    }

    /// Like [`search`][Self::search], with an explicit limit on the number of results.
    #[must_use]
    pub fn search_limit(&self, query: &str, limit: usize) -> Vec<ZoneId> {
        if query.chars().count() < self.options.get_min_query_chars() {
            return Vec::new();
        }

        let needle = query.to_lowercase();

        self.entries
            .iter()
            .filter(|entry| entry.key.contains(&needle))
            .take(limit)
            .map(|entry| entry.zone.clone())
            .collect()
    }

    /// Whether the catalog lists `zone`, compared exactly.
    #[must_use]
    pub fn contains(&self, zone: &str) -> bool {
        self.entries.iter().any(|entry| entry.zone == zone)
    }

    /// Iterates over the zones in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneId> {
        self.entries.iter().map(|entry| &entry.zone)
    }

    /// Returns the number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for symmetry with [`len`][Self::len].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns where the zones came from.
    #[must_use]
    pub const fn source(&self) -> CatalogSource {
        self.source
    }

    /// Returns the search options.
    #[must_use]
    pub const fn options(&self) -> &CatalogOptions {
        &self.options
    }
}

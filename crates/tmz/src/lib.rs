// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::unwrap_used,
        reason = "Allow these lints in tests to improve the readability of the tests"
    )
)]

//! Time zone lookup, conversion and autocomplete over the IANA time zone database.
//!
//! This crate answers three questions:
//!
//! - What time is it right now in a given zone?
//! - Which instant does a date and time in one zone name, and how does it read in another zone?
//! - Which zone names match what the user typed so far?
//!
//! # Core Types
//!
//! - [`TimeConversionEngine`]: Produces [`ZoneSnapshot`]s of the current time in a zone, and
//!   [`ConversionResult`]s that express one instant in two zones.
//! - [`ZoneCatalog`]: The list of known zone names, searched for autocomplete suggestions.
//! - [`ZoneRules`]: The provider of zone names and rules behind both. [`DatabaseZoneRules`] reads
//!   an IANA time zone database and [`FallbackZoneRules`] knows a short list of common zones.
//!
//! The engine reads "now" from a [`Clock`][tick::Clock], so tests can freeze or advance time.
//!
//! # Examples
//!
//! ```
//! use tick::Clock;
//! use tmz::{CatalogOptions, DatabaseZoneRules, TimeConversionEngine, ZoneCatalog};
//!
//! let rules = DatabaseZoneRules::bundled();
//! let catalog = ZoneCatalog::load(&rules, CatalogOptions::default());
//! let engine = TimeConversionEngine::new(rules, &Clock::new_frozen());
//!
//! // Suggest zones while the user types.
//! let suggestions = catalog.search("kolk");
//! assert_eq!(suggestions, ["Asia/Kolkata"]);
//!
//! // Show the current time in the chosen zone.
//! let snapshot = engine.current_snapshot(suggestions[0].as_str())?;
//! assert_eq!(snapshot.utc_offset_label(), "UTC+5:30");
//!
//! // Convert a meeting time to another zone.
//! let meeting = engine.convert_input("Asia/Kolkata", "2024-01-15", "18:30", "Europe/Paris")?;
//! assert_eq!(meeting.target_time(), jiff::civil::time(14, 0, 0, 0));
//! assert_eq!(meeting.offset_difference().to_string(), "-4.5 hours");
//! # Ok::<(), tmz::Error>(())
//! ```
//!
//! # Errors
//!
//! Engine operations fail with an [`Error`] whose [`ErrorKind`] tells an unknown zone apart from
//! a date or time that does not exist. Loading a catalog never fails: when the provider cannot
//! list its zones, the catalog falls back to [`FALLBACK_ZONES`] and logs a warning.
//!
//! # Features
//!
//! - `serde`: Implements `Serialize` for [`ZoneId`], [`ZoneSnapshot`], [`ConversionResult`] and
//!   [`OffsetDifference`], and `Deserialize` for [`ZoneId`].

mod catalog;
mod conversion;
mod engine;
mod error;
mod local;
mod options;
mod rules;
mod snapshot;
mod zone_id;

pub use catalog::{CatalogSource, ZoneCatalog};
pub use conversion::{ConversionResult, OffsetDifference};
pub use engine::TimeConversionEngine;
pub use error::{CatalogUnavailable, Error, ErrorKind, Result};
pub use local::local_zone;
pub use options::{CatalogOptions, EngineOptions, FoldResolution};
pub use rules::{DatabaseZoneRules, FALLBACK_ZONES, FallbackZoneRules, LocalResolution, ZoneRules};
pub use snapshot::ZoneSnapshot;
pub use zone_id::ZoneId;

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::tz::TimeZone;
use tracing::Level;

use crate::ZoneId;

/// Detects the IANA name of the time zone the machine is configured for.
///
/// The zone comes from the `TZ` environment variable when it is set, and from the
/// platform configuration otherwise. Returns `None` when no zone is configured, or when
/// the configured zone has no IANA name, such as a POSIX rule string in `TZ`.
///
/// # Examples
///
/// ```
/// if let Some(zone) = tmz::local_zone() {
///     println!("this machine runs on {zone}");
/// }
/// ```
#[must_use]
pub fn local_zone() -> Option<ZoneId> {
    match TimeZone::try_system() {
        Ok(tz) => {
            let zone = tz.iana_name().map(ZoneId::from);

            if zone.is_none() {
                tracing::event!(name: "tmz.local.unnamed", Level::DEBUG, "local time zone has no IANA name");
            }

            zone
        }
        Err(error) => {
            tracing::event!(
                name: "tmz.local.undetected",
                Level::WARN,
                error = %error,
                "cannot detect the local time zone"
            );
            None
        }
    }
}

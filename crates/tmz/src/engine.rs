// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::sync::Arc;

use jiff::civil::{Date, DateTime, Time};
use jiff::fmt::strtime;
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};
use tick::Clock;
use tracing::Level;

use crate::conversion::ConversionResult;
use crate::snapshot::ZoneSnapshot;
use crate::{EngineOptions, Error, FoldResolution, LocalResolution, Result, ZoneId, ZoneRules};

const UTC: &str = "UTC";

/// Looks up the current time in a zone and converts moments between zones.
///
/// The engine is immutable after construction. It reads the clock once per
/// [`current_snapshot`][Self::current_snapshot] call and never caches "now". It resolves zone
/// names through its [`ZoneRules`] provider only and does not consult a
/// [`ZoneCatalog`][crate::ZoneCatalog].
///
/// Zone names are matched the way the provider matches them, which is case-insensitive for
/// the included providers. Results report the provider's canonical spelling.
///
/// # Examples
///
/// ```
/// use jiff::civil::date;
/// use tick::Clock;
/// use tmz::{DatabaseZoneRules, TimeConversionEngine};
///
/// let engine = TimeConversionEngine::new(DatabaseZoneRules::bundled(), &Clock::new_frozen());
///
/// let result = engine
///     .convert("America/New_York", date(2024, 1, 15), jiff::civil::time(9, 0, 0, 0), "Europe/London")
///     .unwrap();
///
/// assert_eq!(result.target_time(), jiff::civil::time(14, 0, 0, 0));
/// assert_eq!(result.offset_difference_hours(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct TimeConversionEngine {
    rules: Arc<dyn ZoneRules>,
    clock: Clock,
    options: EngineOptions,
}

impl TimeConversionEngine {
    /// Creates an engine over `rules` that reads "now" from `clock`.
    #[must_use]
    pub fn new(rules: impl ZoneRules + 'static, clock: &Clock) -> Self {
        Self::from_shared(Arc::new(rules), clock)
    }

    /// Creates an engine over a provider that is shared with other components.
    #[must_use]
    pub fn from_shared(rules: Arc<dyn ZoneRules>, clock: &Clock) -> Self {
        Self {
            rules,
            clock: clock.clone(),
            options: EngineOptions::new(),
        }
    }

    /// Replaces the options of the engine.
    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options of the engine.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the zone rule provider of the engine.
    #[must_use]
    pub fn rules(&self) -> &dyn ZoneRules {
        self.rules.as_ref()
    }

    /// Reads the clock.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDateTime`][crate::ErrorKind::InvalidDateTime] when the clock
    /// reports a time outside the range supported by [`Timestamp`].
    pub fn now(&self) -> Result<Timestamp> {
        Timestamp::try_from(self.clock.system_time()).map_err(Error::clock_out_of_range)
    }

    /// Returns the current time in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidZone`][crate::ErrorKind::InvalidZone] when the provider does not
    /// recognize `zone`, and [`ErrorKind::InvalidFormat`][crate::ErrorKind::InvalidFormat] when
    /// a configured pattern cannot be applied.
    pub fn current_snapshot(&self, zone: &str) -> Result<ZoneSnapshot> {
        let (zone, tz) = self.lookup(zone)?;

        self.snapshot(zone, tz, self.now()?)
    }

    /// Returns the time in `zone` at `instant`.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`current_snapshot`][Self::current_snapshot].
    pub fn snapshot_at(&self, zone: &str, instant: Timestamp) -> Result<ZoneSnapshot> {
        let (zone, tz) = self.lookup(zone)?;

        self.snapshot(zone, tz, instant)
    }

    /// Returns the current time in the zone the machine is configured for.
    ///
    /// When the machine zone cannot be detected, or the provider does not recognize it, the
    /// snapshot is taken in `UTC`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFormat`][crate::ErrorKind::InvalidFormat] when a configured
    /// pattern cannot be applied.
    pub fn local_snapshot(&self) -> Result<ZoneSnapshot> {
        let zone = self.local_zone_or_utc();

        self.current_snapshot(zone.as_str())
    }

    /// Returns the zone the machine is configured for, or `UTC` when it cannot be detected
    /// or the provider does not recognize it.
    #[must_use]
    pub fn local_zone_or_utc(&self) -> ZoneId {
        let detected = crate::local_zone();

        if let Some(zone) = detected.as_ref()
            && self.rules.time_zone(zone.as_str()).is_some()
        {
            return zone.clone();
        }

        tracing::event!(
            name: "tmz.engine.local_fallback",
            Level::WARN,
            zone = detected.as_ref().map(ZoneId::as_str),
            "local time zone is not available, using UTC"
        );

        ZoneId::from(UTC)
    }

    /// Converts `date` at `time` in `source_zone` to the same instant in `target_zone`.
    ///
    /// Both zones are validated before the local time is resolved. A local time that falls
    /// in a daylight saving gap is rejected. A local time that occurs twice is resolved as
    /// configured by [`EngineOptions::fold_resolution`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidZone`][crate::ErrorKind::InvalidZone] when either zone is not
    /// recognized, and [`ErrorKind::InvalidDateTime`][crate::ErrorKind::InvalidDateTime] when the
    /// local time does not name exactly one instant in `source_zone`.
    pub fn convert(&self, source_zone: &str, date: Date, time: Time, target_zone: &str) -> Result<ConversionResult> {
        let source = self.lookup(source_zone)?;
        let target = self.lookup(target_zone)?;

        self.convert_resolved(source, date.to_datetime(time), target)
    }

    /// Like [`convert`][Self::convert], with the date as `YYYY-MM-DD` and the time as `HH:MM`
    /// or `HH:MM:SS`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`convert`][Self::convert], and with
    /// [`ErrorKind::InvalidDateTime`][crate::ErrorKind::InvalidDateTime] when either text is
    /// malformed. Zones are validated first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tick::Clock;
    /// use tmz::{DatabaseZoneRules, ErrorKind, TimeConversionEngine};
    ///
    /// let engine = TimeConversionEngine::new(DatabaseZoneRules::bundled(), &Clock::new_frozen());
    ///
    /// let result = engine.convert_input("UTC", "2024-06-01", "12:00", "Asia/Kolkata").unwrap();
    /// assert_eq!(result.offset_difference_hours(), 5.5);
    ///
    /// let error = engine.convert_input("UTC", "2024-13-45", "12:00", "Asia/Kolkata").unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::InvalidDateTime);
    /// assert_eq!(error.input(), "2024-13-45");
    /// ```
    pub fn convert_input(&self, source_zone: &str, date: &str, time: &str, target_zone: &str) -> Result<ConversionResult> {
        let source = self.lookup(source_zone)?;
        let target = self.lookup(target_zone)?;

        let date = parse_date(date)?;
        let time = parse_time(time)?;

        self.convert_resolved(source, date.to_datetime(time), target)
    }

    fn convert_resolved(
        &self,
        (source_zone, source_tz): (ZoneId, TimeZone),
        datetime: DateTime,
        (target_zone, target_tz): (ZoneId, TimeZone),
    ) -> Result<ConversionResult> {
        let source_local = self.resolve(&source_zone, &source_tz, datetime)?;
        let target_local = source_local.with_time_zone(target_tz);

        let pattern = self.options.datetime_pattern();
        let formatted_source = format(pattern, &source_local)?;
        let formatted_target = format(pattern, &target_local)?;

        let result = ConversionResult::new(
            (source_zone, source_local),
            (target_zone, target_local),
            formatted_source,
            formatted_target,
        );

        tracing::event!(
            name: "tmz.engine.convert",
            Level::DEBUG,
            convert.source = result.source_zone().as_str(),
            convert.target = result.target_zone().as_str(),
            convert.instant = %result.source_instant(),
            convert.difference = %result.offset_difference(),
        );

        Ok(result)
    }

    fn lookup(&self, zone: &str) -> Result<(ZoneId, TimeZone)> {
        let Some(tz) = self.rules.time_zone(zone) else {
            tracing::event!(name: "tmz.engine.unknown_zone", Level::DEBUG, zone, "zone not recognized");
            return Err(Error::unknown_zone(zone));
        };

        let canonical = tz.iana_name().map_or_else(|| ZoneId::from(zone), ZoneId::from);

        Ok((canonical, tz))
    }

    fn resolve(&self, zone: &ZoneId, tz: &TimeZone, datetime: DateTime) -> Result<Zoned> {
        let offset = match LocalResolution::new(tz, datetime) {
            LocalResolution::Unique { offset } => offset,
            LocalResolution::Skipped { before, after } => {
                return Err(Error::skipped_local_time(zone.as_str(), datetime, before, after));
            }
            LocalResolution::Ambiguous { earlier, later } => match self.options.get_fold_resolution() {
                FoldResolution::Earlier => earlier,
                FoldResolution::Later => later,
                FoldResolution::Reject => {
                    return Err(Error::repeated_local_time(zone.as_str(), datetime, earlier, later));
                }
            },
        };

        to_zoned(zone, tz, datetime, offset)
    }

    fn snapshot(&self, zone: ZoneId, tz: TimeZone, instant: Timestamp) -> Result<ZoneSnapshot> {
        let local = instant.to_zoned(tz);
        let formatted_time = format(self.options.time_pattern(), &local)?;
        let formatted_date = format(self.options.date_pattern(), &local)?;

        tracing::event!(
            name: "tmz.engine.snapshot",
            Level::DEBUG,
            snapshot.zone = zone.as_str(),
            snapshot.instant = %instant,
            snapshot.offset = %local.offset(),
        );

        Ok(ZoneSnapshot::new(zone, local, formatted_time, formatted_date))
    }
}

fn to_zoned(zone: &ZoneId, tz: &TimeZone, datetime: DateTime, offset: Offset) -> Result<Zoned> {
    offset
        .to_timestamp(datetime)
        .map(|instant| instant.to_zoned(tz.clone()))
        .map_err(|source| Error::out_of_range(zone.as_str(), datetime, source))
}

fn format(pattern: &Cow<'static, str>, local: &Zoned) -> Result<String> {
    strtime::format(pattern.as_bytes(), local).map_err(|source| Error::format(pattern.clone(), source))
}

fn parse_date(input: &str) -> Result<Date> {
    let input = input.trim();

    input.parse().map_err(|source| Error::malformed_date(input, source))
}

fn parse_time(input: &str) -> Result<Time> {
    let input = input.trim();

    input.parse().map_err(|source| Error::malformed_time(input, source))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, SystemTime};

    use jiff::civil::{date, time};
    use jiff::tz::offset;
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;
    use crate::{CatalogUnavailable, DatabaseZoneRules, ErrorKind, FallbackZoneRules};

    // 2024-01-15T14:00:00Z
    const JAN_15_1400_UTC: u64 = 1_705_327_200;

    fn engine() -> TimeConversionEngine {
        TimeConversionEngine::new(DatabaseZoneRules::bundled(), &Clock::new_frozen())
    }

    fn engine_at(seconds: u64) -> TimeConversionEngine {
        let clock = Clock::new_frozen_at(SystemTime::UNIX_EPOCH + Duration::from_secs(seconds));

        TimeConversionEngine::new(DatabaseZoneRules::bundled(), &clock)
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(TimeConversionEngine: Send, Sync, Clone);
    }

    #[test]
    fn snapshot_reads_clock() {
        let snapshot = engine_at(JAN_15_1400_UTC).current_snapshot("America/New_York").unwrap();

        assert_eq!(snapshot.zone(), "America/New_York");
        assert_eq!(snapshot.instant(), Timestamp::from_second(1_705_327_200).unwrap());
        assert_eq!(snapshot.utc_offset_minutes(), -300);
        assert_eq!(snapshot.utc_offset_label(), "UTC-5");
        assert_eq!(snapshot.formatted_time(), "9:00:00 AM");
        assert_eq!(snapshot.formatted_date(), "January 15, 2024");
    }

    #[test]
    fn snapshot_offset_matches_database() {
        let engine = engine_at(JAN_15_1400_UTC);
        let now = engine.now().unwrap();

        for zone in ["Europe/Paris", "Asia/Tokyo", "Australia/Sydney", "UTC"] {
            let snapshot = engine.current_snapshot(zone).unwrap();

            assert_eq!(Some(snapshot.utc_offset()), engine.rules().offset_at(zone, now), "{zone}");
            assert_eq!(snapshot.instant(), now);
        }
    }

    #[test]
    fn snapshot_reports_canonical_name() {
        let snapshot = engine().current_snapshot("asia/tokyo").unwrap();

        assert_eq!(snapshot.zone(), "Asia/Tokyo");
        assert_eq!(snapshot.utc_offset_minutes(), 540);
    }

    #[test]
    fn snapshot_follows_clock() {
        let control = tick::ClockControl::new_at(SystemTime::UNIX_EPOCH + Duration::from_secs(JAN_15_1400_UTC));
        let engine = TimeConversionEngine::new(DatabaseZoneRules::bundled(), &control.to_clock());

        let first = engine.current_snapshot("UTC").unwrap();
        control.advance(Duration::from_secs(90));
        let second = engine.current_snapshot("UTC").unwrap();

        assert_eq!(first.formatted_time(), "2:00:00 PM");
        assert_eq!(second.formatted_time(), "2:01:30 PM");
    }

    #[test]
    fn snapshot_at_daylight_saving_time() {
        let summer = date(2024, 7, 15).at(12, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
        let snapshot = engine().snapshot_at("America/New_York", summer).unwrap();

        assert_eq!(snapshot.utc_offset_label(), "UTC-4");
        assert_eq!(snapshot.formatted_time(), "8:00:00 AM");
    }

    #[traced_test]
    #[test]
    fn unknown_zone_snapshot() {
        let error = engine().current_snapshot("Not/AZone").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidZone);
        assert_eq!(error.input(), "Not/AZone");
        assert!(logs_contain("zone not recognized"));
    }

    #[rstest]
    #[case::winter(date(2024, 1, 15))]
    #[case::summer(date(2024, 7, 15))]
    fn new_york_to_london(#[case] day: Date) {
        let result = engine()
            .convert("America/New_York", day, time(9, 0, 0, 0), "Europe/London")
            .unwrap();

        assert_eq!(result.target_date(), day);
        assert_eq!(result.target_time(), time(14, 0, 0, 0));
        assert_eq!(result.offset_difference_hours(), 5.0);
        assert_eq!(result.offset_difference().to_string(), "+5 hours");
        assert_eq!(result.day_shift(), 0);
    }

    #[test]
    fn formats_both_sides() {
        let result = engine()
            .convert("America/New_York", date(2024, 1, 15), time(9, 0, 0, 0), "Europe/London")
            .unwrap();

        assert_eq!(result.formatted_source(), "January 15, 2024 at 9:00 AM EST");
        assert_eq!(result.formatted_target(), "January 15, 2024 at 2:00 PM GMT");
    }

    #[test]
    fn crossing_the_date_line() {
        let result = engine()
            .convert("Pacific/Auckland", date(2024, 3, 1), time(10, 0, 0, 0), "America/Los_Angeles")
            .unwrap();

        assert_eq!(result.target_date(), date(2024, 2, 29));
        assert_eq!(result.target_time(), time(13, 0, 0, 0));
        assert_eq!(result.day_shift(), -1);
        assert_eq!(result.offset_difference_hours(), -21.0);

        let result = engine()
            .convert("Pacific/Kiritimati", date(2024, 1, 15), time(0, 30, 0, 0), "Pacific/Pago_Pago")
            .unwrap();

        assert_eq!(result.target_date(), date(2024, 1, 13));
        assert_eq!(result.target_time(), time(23, 30, 0, 0));
        assert_eq!(result.day_shift(), -2);
        assert_eq!(result.offset_difference_hours(), -25.0);
    }

    #[test]
    fn beyond_supported_range() {
        let error = engine()
            .convert("UTC", date(9999, 12, 31), time(23, 59, 59, 0), "Asia/Tokyo")
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidDateTime);
        assert_eq!(error.input(), "UTC");
    }

    #[test]
    fn convert_input_looks_up_each_zone_once() {
        #[derive(Debug)]
        struct Counting {
            inner: DatabaseZoneRules,
            lookups: AtomicUsize,
        }

        impl ZoneRules for Counting {
            fn zone_names(&self) -> std::result::Result<Vec<ZoneId>, CatalogUnavailable> {
                self.inner.zone_names()
            }

            fn time_zone(&self, zone: &str) -> Option<TimeZone> {
                self.lookups.fetch_add(1, Ordering::Relaxed);
                self.inner.time_zone(zone)
            }
        }

        let rules = Arc::new(Counting {
            inner: DatabaseZoneRules::bundled(),
            lookups: AtomicUsize::new(0),
        });
        let engine = TimeConversionEngine::from_shared(Arc::clone(&rules) as Arc<dyn ZoneRules>, &Clock::new_frozen());

        engine
            .convert_input("America/New_York", "2024-01-15", "09:00", "Europe/London")
            .unwrap();

        assert_eq!(rules.lookups.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn round_trip_preserves_instant() {
        let engine = engine();
        let there = engine
            .convert("Asia/Tokyo", date(2024, 5, 20), time(18, 45, 30, 0), "America/Sao_Paulo")
            .unwrap();
        let back = engine
            .convert("America/Sao_Paulo", there.target_date(), there.target_time(), "Asia/Tokyo")
            .unwrap();

        assert_eq!(back.target_local().timestamp(), there.source_instant());
        assert_eq!(back.target_date(), date(2024, 5, 20));
        assert_eq!(back.target_time(), time(18, 45, 30, 0));
        assert_eq!(back.offset_difference().seconds(), -there.offset_difference().seconds());
    }

    #[test]
    fn both_sides_share_instant() {
        let result = engine()
            .convert("Europe/Berlin", date(2024, 10, 27), time(4, 15, 0, 0), "Australia/Sydney")
            .unwrap();

        assert_eq!(result.source_local().timestamp(), result.target_local().timestamp());
        assert_eq!(result.source_zone(), "Europe/Berlin");
        assert_eq!(result.target_zone(), "Australia/Sydney");
    }

    #[test]
    fn skipped_local_time_is_invalid() {
        let error = engine()
            .convert("America/New_York", date(2024, 3, 10), time(2, 30, 0, 0), "Europe/London")
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidDateTime);
        assert_eq!(error.input(), "America/New_York");
    }

    #[rstest]
    #[case::earlier(FoldResolution::Earlier, offset(-4), 5)]
    #[case::later(FoldResolution::Later, offset(-5), 6)]
    fn repeated_local_time(#[case] fold: FoldResolution, #[case] expected: Offset, #[case] utc_hour: i8) {
        let result = engine()
            .with_options(EngineOptions::new().fold_resolution(fold))
            .convert("America/New_York", date(2024, 11, 3), time(1, 30, 0, 0), "UTC")
            .unwrap();

        assert_eq!(result.source_local().offset(), expected);
        assert_eq!(result.target_time(), time(utc_hour, 30, 0, 0));
    }

    #[test]
    fn repeated_local_time_rejected() {
        let error = engine()
            .with_options(EngineOptions::new().fold_resolution(FoldResolution::Reject))
            .convert("America/New_York", date(2024, 11, 3), time(1, 30, 0, 0), "UTC")
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidDateTime);
    }

    #[rstest]
    #[case::source("Not/AZone", "Europe/London")]
    #[case::target("Europe/London", "Not/AZone")]
    fn unknown_zone_conversion(#[case] source: &str, #[case] target: &str) {
        let engine = engine();

        // An unknown zone wins over a date that does not exist.
        for day in [date(2024, 1, 15), date(2024, 3, 10)] {
            let error = engine.convert(source, day, time(2, 30, 0, 0), target).unwrap_err();

            assert_eq!(error.kind(), ErrorKind::InvalidZone);
            assert_eq!(error.input(), "Not/AZone");
        }

        let error = engine.convert_input(source, "garbage", "garbage", target).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidZone);
    }

    #[test]
    fn convert_input_parses_text() {
        let result = engine()
            .convert_input("America/New_York", " 2024-01-15 ", "09:00", "Europe/London")
            .unwrap();

        assert_eq!(result.target_time(), time(14, 0, 0, 0));

        let result = engine()
            .convert_input("America/New_York", "2024-01-15", "09:00:45", "Europe/London")
            .unwrap();

        assert_eq!(result.target_time(), time(14, 0, 45, 0));
    }

    #[rstest]
    #[case::bad_month("2024-13-01", "09:00", "2024-13-01")]
    #[case::not_a_date("tomorrow", "09:00", "tomorrow")]
    #[case::bad_hour("2024-01-15", "25:00", "25:00")]
    #[case::empty_time("2024-01-15", "", "")]
    fn convert_input_rejects_malformed(#[case] day: &str, #[case] clock: &str, #[case] rejected: &str) {
        let error = engine()
            .convert_input("America/New_York", day, clock, "Europe/London")
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidDateTime);
        assert_eq!(error.input(), rejected);
    }

    #[test]
    fn custom_formats() {
        let engine = engine_at(JAN_15_1400_UTC).with_options(
            EngineOptions::new()
                .time_format("%H:%M")
                .date_format("%Y-%m-%d")
                .datetime_format("%Y-%m-%d %H:%M %:z"),
        );

        let snapshot = engine.current_snapshot("Asia/Kolkata").unwrap();
        assert_eq!(snapshot.formatted_time(), "19:30");
        assert_eq!(snapshot.formatted_date(), "2024-01-15");

        let result = engine
            .convert("UTC", date(2024, 1, 15), time(0, 0, 0, 0), "Asia/Kolkata")
            .unwrap();
        assert_eq!(result.formatted_target(), "2024-01-15 05:30 +05:30");
    }

    #[test]
    fn invalid_format() {
        let error = engine()
            .with_options(EngineOptions::new().time_format("%H:%M %"))
            .current_snapshot("UTC")
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidFormat);
        assert_eq!(error.input(), "%H:%M %");
    }

    #[test]
    fn fallback_rules() {
        let engine = TimeConversionEngine::new(FallbackZoneRules::new(), &Clock::new_frozen());

        assert!(engine.current_snapshot("Asia/Tokyo").is_ok());
        assert!(engine.current_snapshot("Asia/Kathmandu").unwrap_err().is_invalid_zone());
    }

    #[test]
    fn local_snapshot_is_always_available() {
        let snapshot = engine().local_snapshot().unwrap();

        assert!(engine().rules().time_zone(snapshot.zone().as_str()).is_some());
    }

    #[test]
    fn local_zone_is_known_to_the_rules() {
        let engine = engine();
        let zone = engine.local_zone_or_utc();

        assert!(engine.rules().time_zone(zone.as_str()).is_some());
        assert!(engine.convert(zone.as_str(), date(2024, 1, 15), time(12, 0, 0, 0), "UTC").is_ok());
    }

    #[test]
    fn local_zone_unknown_to_the_rules_is_utc() {
        #[derive(Debug)]
        struct UtcOnly;

        impl ZoneRules for UtcOnly {
            fn zone_names(&self) -> std::result::Result<Vec<ZoneId>, CatalogUnavailable> {
                Ok(Vec::new())
            }

            fn time_zone(&self, zone: &str) -> Option<TimeZone> {
                (zone == UTC).then_some(TimeZone::UTC)
            }
        }

        let engine = TimeConversionEngine::new(UtcOnly, &Clock::new_frozen());

        assert_eq!(engine.local_zone_or_utc(), "UTC");
        assert_eq!(engine.local_snapshot().unwrap().zone(), "UTC");
    }
}

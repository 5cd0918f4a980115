// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;

pub(crate) const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub(crate) const DEFAULT_MAX_RESULTS: usize = 10;

pub(crate) const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";
pub(crate) const DEFAULT_DATETIME_FORMAT: &str = "%B %-d, %Y at %-I:%M %p %Z";

/// Options that control [`ZoneCatalog::search`][crate::ZoneCatalog::search].
///
/// Both thresholds are user experience choices. No correctness property depends on them.
///
/// # Examples
///
/// ```
/// use tmz::CatalogOptions;
///
/// let options = CatalogOptions::new().min_query_chars(3).max_results(5);
///
/// assert_eq!(options.get_min_query_chars(), 3);
/// assert_eq!(options.get_max_results(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    min_query_chars: usize,
    max_results: usize,
}

impl CatalogOptions {
    /// Creates options with a minimum query length of 2 characters and at most 10 results.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Sets the number of characters a query needs before any suggestion is returned.
    #[must_use]
    pub const fn min_query_chars(mut self, chars: usize) -> Self {
        self.min_query_chars = chars;
        self
    }

    /// Sets the maximum number of suggestions returned by a search.
    #[must_use]
    pub const fn max_results(mut self, limit: usize) -> Self {
        self.max_results = limit;
        self
    }

    /// Returns the minimum query length in characters.
    #[must_use]
    pub const fn get_min_query_chars(&self) -> usize {
        self.min_query_chars
    }

    /// Returns the maximum number of suggestions.
    #[must_use]
    pub const fn get_max_results(&self) -> usize {
        self.max_results
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Which instant to pick when a local time occurs twice.
///
/// When the clocks are set back, the hour before the transition repeats. A local time
/// inside that hour names two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldResolution {
    /// Pick the first occurrence, the one with the offset in effect before the transition.
    #[default]
    Earlier,

    /// Pick the second occurrence, the one with the offset in effect after the transition.
    Later,

    /// Treat the local time as invalid.
    Reject,
}

/// Options that control [`TimeConversionEngine`][crate::TimeConversionEngine].
///
/// Format patterns use the `strftime` syntax of [`jiff::fmt::strtime`]. The defaults produce
/// output such as `9:05:03 AM` for times, `January 15, 2024` for dates and
/// `January 15, 2024 at 9:00 AM EST` for full date-times.
///
/// # Examples
///
/// ```
/// use tmz::{EngineOptions, FoldResolution};
///
/// let options = EngineOptions::new()
///     .time_format("%H:%M:%S")
///     .fold_resolution(FoldResolution::Reject);
///
/// assert_eq!(options.get_time_format(), "%H:%M:%S");
/// assert_eq!(options.get_fold_resolution(), FoldResolution::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    time_format: Cow<'static, str>,
    date_format: Cow<'static, str>,
    datetime_format: Cow<'static, str>,
    fold: FoldResolution,
}

impl EngineOptions {
    /// Creates options with the default formats and [`FoldResolution::Earlier`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time_format: Cow::Borrowed(DEFAULT_TIME_FORMAT),
            date_format: Cow::Borrowed(DEFAULT_DATE_FORMAT),
            datetime_format: Cow::Borrowed(DEFAULT_DATETIME_FORMAT),
            fold: FoldResolution::Earlier,
        }
    }

    /// Sets the pattern for [`ZoneSnapshot::formatted_time`][crate::ZoneSnapshot::formatted_time].
    #[must_use]
    pub fn time_format(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.time_format = pattern.into();
        self
    }

    /// Sets the pattern for [`ZoneSnapshot::formatted_date`][crate::ZoneSnapshot::formatted_date].
    #[must_use]
    pub fn date_format(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.date_format = pattern.into();
        self
    }

    /// Sets the pattern for both sides of a [`ConversionResult`][crate::ConversionResult].
    #[must_use]
    pub fn datetime_format(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.datetime_format = pattern.into();
        self
    }

    /// Sets how a repeated local time is resolved.
    #[must_use]
    pub const fn fold_resolution(mut self, fold: FoldResolution) -> Self {
        self.fold = fold;
        self
    }

    /// Returns the time pattern.
    #[must_use]
    pub fn get_time_format(&self) -> &str {
        &self.time_format
    }

    /// Returns the date pattern.
    #[must_use]
    pub fn get_date_format(&self) -> &str {
        &self.date_format
    }

    /// Returns the full date-time pattern.
    #[must_use]
    pub fn get_datetime_format(&self) -> &str {
        &self.datetime_format
    }

    /// Returns how a repeated local time is resolved.
    #[must_use]
    pub const fn get_fold_resolution(&self) -> FoldResolution {
        self.fold
    }

    pub(crate) fn time_pattern(&self) -> &Cow<'static, str> {
        &self.time_format
    }

    pub(crate) fn date_pattern(&self) -> &Cow<'static, str> {
        &self.date_format
    }

    pub(crate) fn datetime_pattern(&self) -> &Cow<'static, str> {
        &self.datetime_format
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::new()
    }
}

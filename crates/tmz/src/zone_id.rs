// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The name of an IANA time zone, such as `Europe/Paris` or `UTC`.
///
/// A `ZoneId` is only a name. Whether the name is recognized is decided by the
/// [`ZoneRules`][crate::ZoneRules] provider at the time it is used, so holding a
/// `ZoneId` does not imply that the zone exists.
///
/// Cloning is inexpensive (an `Arc` clone), which lets the catalog hand out
/// identifiers without copying strings.
///
/// # Examples
///
/// ```
/// use tmz::ZoneId;
///
/// let zone = ZoneId::new("Asia/Tokyo");
///
/// assert_eq!(zone.as_str(), "Asia/Tokyo");
/// assert_eq!(zone.to_string(), "Asia/Tokyo");
/// assert_eq!(zone, "Asia/Tokyo");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ZoneId(Arc<str>);

impl ZoneId {
    /// Creates a zone identifier from its name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name of the zone.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZoneId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ZoneId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for ZoneId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ZoneId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ZoneId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ZoneId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

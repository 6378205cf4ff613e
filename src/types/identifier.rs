// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifier types used as URL path segments.
//!
//! Identifiers are chosen by the caller (the server does not generate device
//! or sensor IDs) and are taken verbatim. They are percent-encoded only when
//! substituted into a request path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Identifier of a device on the server.
///
/// # Examples
///
/// ```
/// use gohome_client::types::DeviceId;
///
/// let id = DeviceId::new("dev-42").unwrap();
/// assert_eq!(id.as_str(), "dev-42");
///
/// assert!(DeviceId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a device identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyIdentifier` if `id` is empty, or
    /// `ValueError::DotSegment` if it is `.` or `..`.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        validate(id.into(), "device").map(Self)
    }

    /// Returns the identifier as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier percent-encoded for use as one path segment.
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

/// Identifier of a sensor, unique within its device.
///
/// # Examples
///
/// ```
/// use gohome_client::types::SensorId;
///
/// let id: SensorId = "temperature".parse().unwrap();
/// assert_eq!(id.to_string(), "temperature");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SensorId(String);

impl SensorId {
    /// Creates a sensor identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyIdentifier` if `id` is empty, or
    /// `ValueError::DotSegment` if it is `.` or `..`.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        validate(id.into(), "sensor").map(Self)
    }

    /// Returns the identifier as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier percent-encoded for use as one path segment.
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

fn validate(id: String, kind: &'static str) -> Result<String, ValueError> {
    if id.is_empty() {
        return Err(ValueError::EmptyIdentifier { kind });
    }
    // URL parsers resolve these as relative segments even when percent-encoded
    if id == "." || id == ".." {
        return Err(ValueError::DotSegment { kind, value: id });
    }
    Ok(id)
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SensorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DeviceId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for SensorId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DeviceId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DeviceId {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for SensorId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SensorId {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}

impl From<SensorId> for String {
    fn from(id: SensorId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_keeps_value_verbatim() {
        let id = DeviceId::new("Living Room").unwrap();
        assert_eq!(id.as_str(), "Living Room");
        assert_eq!(id.to_string(), "Living Room");
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert_eq!(
            DeviceId::new(""),
            Err(ValueError::EmptyIdentifier { kind: "device" })
        );
        assert_eq!(
            SensorId::new(String::new()),
            Err(ValueError::EmptyIdentifier { kind: "sensor" })
        );
    }

    #[test]
    fn well_formed_segment_is_unchanged() {
        let id = DeviceId::new("dev-42").unwrap();
        assert_eq!(id.to_path_segment(), "dev-42");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let id = DeviceId::new("a/../b c").unwrap();
        assert_eq!(id.to_path_segment(), "a%2F..%2Fb%20c");

        let sensor = SensorId::new("temp?x=1").unwrap();
        assert_eq!(sensor.to_path_segment(), "temp%3Fx%3D1");
    }

    #[test]
    fn dot_segments_are_rejected() {
        assert_eq!(
            DeviceId::new(".."),
            Err(ValueError::DotSegment {
                kind: "device",
                value: "..".to_string()
            })
        );
        assert!(SensorId::new(".").is_err());
        assert!(serde_json::from_str::<DeviceId>("\"..\"").is_err());

        // Dots inside a longer identifier stay allowed
        assert_eq!(DeviceId::new("...").unwrap().to_path_segment(), "...");
        assert_eq!(SensorId::new("temp.1").unwrap().to_path_segment(), "temp.1");
    }

    #[test]
    fn parse_and_try_from() {
        let parsed: DeviceId = "lamp".parse().unwrap();
        let converted = DeviceId::try_from("lamp").unwrap();
        assert_eq!(parsed, converted);
        assert!("".parse::<SensorId>().is_err());
    }

    #[test]
    fn serde_rejects_empty_id() {
        let id: DeviceId = serde_json::from_str("\"dev-1\"").unwrap();
        assert_eq!(id.as_str(), "dev-1");
        assert!(serde_json::from_str::<SensorId>("\"\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"dev-1\"");
    }
}

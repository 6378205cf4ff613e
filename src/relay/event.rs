// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded inbound frames.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;
use crate::types::{DeviceId, SensorId};

/// A JSON value received from the server.
///
/// The shape is not fixed; observers interpret it, either directly through
/// [`InboundEvent::value`] or with [`InboundEvent::decode`].
///
/// # Examples
///
/// ```
/// use gohome_client::relay::InboundEvent;
///
/// let event = InboundEvent::from_text(r#"{"type": "x", "n": 1}"#).unwrap();
/// assert_eq!(event.event_type(), Some("x"));
/// assert_eq!(event.get("n"), Some(&serde_json::json!(1)));
///
/// assert!(InboundEvent::from_text("not json").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    value: Value,
}

impl InboundEvent {
    /// Decodes a text frame.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the frame is not valid JSON.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            value: serde_json::from_str(text)?,
        })
    }

    /// Decodes a binary frame holding UTF-8 JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the frame is not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        Ok(Self {
            value: serde_json::from_slice(bytes)?,
        })
    }

    /// Returns the decoded value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the event and returns the decoded value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns a top-level field, if the value is an object holding it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Returns a top-level field.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the field is absent.
    pub fn field(&self, key: &str) -> Result<&Value, ParseError> {
        self.get(key)
            .ok_or_else(|| ParseError::MissingField(key.to_string()))
    }

    /// Returns the `type` field when it is a string.
    #[must_use]
    pub fn event_type(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    /// Interprets the value as `T`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the value does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        T::deserialize(&self.value).map_err(Into::into)
    }
}

impl From<Value> for InboundEvent {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

/// A sensor value the server broadcasts when it stores one.
///
/// Both field spellings the server emits are accepted: `snake_case`
/// (`sensor_id`, ...) and the untagged `PascalCase` form (`SensorID`,
/// `DeviceID`, `Value`, `Timestamp`) written by the `/ws` output binding.
///
/// # Examples
///
/// ```
/// use gohome_client::relay::{InboundEvent, SensorValueEvent};
///
/// let event = InboundEvent::from_text(
///     r#"{"sensor_id":"temp","device_id":"thermo","value":"21.5",
///         "timestamp":"2024-03-01T12:00:00+01:00"}"#,
/// )
/// .unwrap();
///
/// let reading: SensorValueEvent = event.decode().unwrap();
/// assert_eq!(reading.sensor_id.as_str(), "temp");
/// assert_eq!(reading.value, "21.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorValueEvent {
    /// Sensor that produced the value.
    #[serde(alias = "SensorID")]
    pub sensor_id: SensorId,
    /// Device owning the sensor.
    #[serde(alias = "DeviceID")]
    pub device_id: DeviceId,
    /// The value as text.
    #[serde(alias = "Value")]
    pub value: String,
    /// Measurement time.
    #[serde(alias = "Timestamp")]
    pub timestamp: DateTime<FixedOffset>,
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor and sensor-value request bodies.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::types::{DataType, PollingStrategy, SensorId, SensorType};

/// Body of a create-sensor request.
///
/// Use [`CreateSensorRequest::external`] for sensors whose values are pushed
/// to the server, or [`CreateSensorRequest::polling`] for sensors the server
/// polls itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSensorRequest {
    /// Identifier, unique within the device.
    pub id: SensorId,
    /// Human readable name (the server requires at least 3 characters).
    pub name: String,
    /// Type of the reported values.
    pub data_type: DataType,
    /// Unit of the reported values; empty for none.
    pub unit: String,
    /// How the sensor receives values.
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    /// Polling interval in seconds; zero for external sensors.
    pub polling_interval: u32,
    /// Endpoint polled by the server; empty for external sensors.
    pub polling_endpoint: String,
    /// Strategy used to poll `polling_endpoint`.
    pub polling_strategy: PollingStrategy,
}

impl CreateSensorRequest {
    /// Creates a body for a sensor whose values are pushed to the server.
    #[must_use]
    pub fn external(id: SensorId, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id,
            name: name.into(),
            data_type,
            unit: String::new(),
            sensor_type: SensorType::External,
            polling_interval: 0,
            polling_endpoint: String::new(),
            polling_strategy: PollingStrategy::default(),
        }
    }

    /// Creates a body for a sensor the server polls every `interval_secs`.
    #[must_use]
    pub fn polling(
        id: SensorId,
        name: impl Into<String>,
        data_type: DataType,
        endpoint: impl Into<String>,
        interval_secs: u32,
    ) -> Self {
        Self {
            sensor_type: SensorType::Polling,
            polling_interval: interval_secs,
            polling_endpoint: endpoint.into(),
            polling_strategy: PollingStrategy::Ping,
            ..Self::external(id, name, data_type)
        }
    }

    /// Sets the unit of the reported values.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// Body of an add-sensor-value request.
///
/// When no timestamp is set the server stamps the value on arrival.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use gohome_client::request::AddSensorValueRequest;
///
/// let at = DateTime::parse_from_rfc3339("2024-03-01T12:00:00+01:00").unwrap();
/// let body = AddSensorValueRequest::new("21.5").with_timestamp(at);
///
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["value"], "21.5");
/// assert!(json["timestamp"].as_str().unwrap().starts_with("2024-03-01T12:00:00"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSensorValueRequest {
    /// The value, formatted as text regardless of the sensor's data type.
    pub value: String,
    /// Measurement time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl AddSensorValueRequest {
    /// Creates a value body without a timestamp.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            timestamp: None,
        }
    }

    /// Sets the measurement time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor_id(id: &str) -> SensorId {
        SensorId::new(id).unwrap()
    }

    #[test]
    fn external_sensor_json_shape() {
        let body = CreateSensorRequest::external(sensor_id("temp"), "Temperature", DataType::Float)
            .with_unit("°C");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "id": "temp",
                "name": "Temperature",
                "data_type": "float",
                "unit": "°C",
                "type": "external",
                "polling_interval": 0,
                "polling_endpoint": "",
                "polling_strategy": "ping"
            })
        );
    }

    #[test]
    fn polling_sensor_sets_polling_fields() {
        let body = CreateSensorRequest::polling(
            sensor_id("online"),
            "Online",
            DataType::Bool,
            "http://192.168.1.20",
            30,
        );

        assert_eq!(body.sensor_type, SensorType::Polling);
        assert_eq!(body.polling_interval, 30);
        assert_eq!(body.polling_endpoint, "http://192.168.1.20");
        assert_eq!(body.polling_strategy, PollingStrategy::Ping);
        assert!(body.unit.is_empty());
    }

    #[test]
    fn value_without_timestamp_omits_field() {
        let json = serde_json::to_value(AddSensorValueRequest::new("on")).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "on" }));
    }

    #[test]
    fn value_with_timestamp_keeps_offset() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T12:00:00+01:00").unwrap();
        let body = AddSensorValueRequest::new("1").with_timestamp(at);

        let json = serde_json::to_string(&body).unwrap();
        let back: AddSensorValueRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp, Some(at));
        assert!(json.contains("+01:00"));
    }
}

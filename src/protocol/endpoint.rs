// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint descriptors for the server's create-operations.

use std::fmt;

use crate::types::{DeviceId, SensorId};

/// Path prefix shared by every REST endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// A create-operation and the path it is posted to.
///
/// Identifiers are percent-encoded when substituted into the path, so an
/// identifier can never address a different resource.
///
/// # Examples
///
/// ```
/// use gohome_client::protocol::Endpoint;
/// use gohome_client::types::DeviceId;
///
/// let endpoint = Endpoint::CreateSensor {
///     device: DeviceId::new("dev-42").unwrap(),
/// };
/// assert_eq!(endpoint.path(), "/api/v1/devices/dev-42/sensors");
/// assert_eq!(Endpoint::CreateRule.path(), "/api/v1/rules");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /api/v1/devices`
    CreateDevice,
    /// `POST /api/v1/devices/{device}/sensors`
    CreateSensor {
        /// Device owning the new sensor.
        device: DeviceId,
    },
    /// `POST /api/v1/devices/{device}/commands`
    CreateCommand {
        /// Device owning the new command.
        device: DeviceId,
    },
    /// `POST /api/v1/rules`
    CreateRule,
    /// `POST /api/v1/devices/{device}/sensors/{sensor}/values`
    AddSensorValue {
        /// Device owning the sensor.
        device: DeviceId,
        /// Sensor receiving the value.
        sensor: SensorId,
    },
}

impl Endpoint {
    /// Returns the request path, starting with [`API_PREFIX`].
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::CreateDevice => format!("{API_PREFIX}/devices"),
            Self::CreateSensor { device } => {
                format!("{API_PREFIX}/devices/{}/sensors", device.to_path_segment())
            }
            Self::CreateCommand { device } => {
                format!("{API_PREFIX}/devices/{}/commands", device.to_path_segment())
            }
            Self::CreateRule => format!("{API_PREFIX}/rules"),
            Self::AddSensorValue { device, sensor } => format!(
                "{API_PREFIX}/devices/{}/sensors/{}/values",
                device.to_path_segment(),
                sensor.to_path_segment()
            ),
        }
    }

    /// Returns the logical operation name, used in log records.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::CreateDevice => "create-device",
            Self::CreateSensor { .. } => "create-sensor",
            Self::CreateCommand { .. } => "create-command",
            Self::CreateRule => "create-rule",
            Self::AddSensorValue { .. } => "add-sensor-value",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POST {}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str) -> DeviceId {
        DeviceId::new(id).unwrap()
    }

    #[test]
    fn fixed_paths() {
        assert_eq!(Endpoint::CreateDevice.path(), "/api/v1/devices");
        assert_eq!(Endpoint::CreateRule.path(), "/api/v1/rules");
    }

    #[test]
    fn device_scoped_paths() {
        assert_eq!(
            Endpoint::CreateSensor {
                device: device("dev-42")
            }
            .path(),
            "/api/v1/devices/dev-42/sensors"
        );
        assert_eq!(
            Endpoint::CreateCommand {
                device: device("dev-42")
            }
            .path(),
            "/api/v1/devices/dev-42/commands"
        );
    }

    #[test]
    fn sensor_value_path() {
        let endpoint = Endpoint::AddSensorValue {
            device: device("thermo"),
            sensor: SensorId::new("temp").unwrap(),
        };
        assert_eq!(endpoint.path(), "/api/v1/devices/thermo/sensors/temp/values");
    }

    #[test]
    fn path_injection_is_encoded() {
        let endpoint = Endpoint::CreateCommand {
            device: device("../rules"),
        };
        assert_eq!(endpoint.path(), "/api/v1/devices/..%2Frules/commands");
    }

    #[test]
    fn display_and_operation() {
        assert_eq!(Endpoint::CreateDevice.to_string(), "POST /api/v1/devices");
        assert_eq!(Endpoint::CreateRule.operation(), "create-rule");
        assert_eq!(
            Endpoint::CreateSensor {
                device: device("x")
            }
            .operation(),
            "create-sensor"
        );
    }
}

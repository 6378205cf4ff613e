// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor classification types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Data type of the values a sensor reports.
///
/// # Examples
///
/// ```
/// use gohome_client::types::DataType;
///
/// assert_eq!(DataType::Float.as_str(), "float");
/// assert_eq!("BOOL".parse::<DataType>().unwrap(), DataType::Bool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free-form text.
    #[default]
    String,
    /// Integer number.
    Int,
    /// Floating-point number.
    Float,
    /// Boolean.
    Bool,
}

impl DataType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// Returns true if values of this type can carry a unit.
    ///
    /// The server rejects a unit on `string` and `bool` sensors.
    #[must_use]
    pub const fn accepts_unit(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "bool" => Ok(Self::Bool),
            _ => Err(ValueError::UnknownVariant {
                kind: "data type",
                value: s.to_string(),
            }),
        }
    }
}

/// How a sensor receives its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    /// Values are pushed to the server by an external party.
    #[default]
    External,
    /// The server polls an endpoint at a fixed interval.
    Polling,
}

impl SensorType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Polling => "polling",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "external" => Ok(Self::External),
            "polling" => Ok(Self::Polling),
            _ => Err(ValueError::UnknownVariant {
                kind: "sensor type",
                value: s.to_string(),
            }),
        }
    }
}

/// Strategy used by the server to poll a sensor endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollingStrategy {
    /// Reachability check of the polling endpoint.
    #[default]
    Ping,
}

impl PollingStrategy {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for PollingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DataType::Int).unwrap(), "\"int\"");
        let parsed: DataType = serde_json::from_str("\"float\"").unwrap();
        assert_eq!(parsed, DataType::Float);
    }

    #[test]
    fn data_type_unit_rules() {
        assert!(DataType::Float.accepts_unit());
        assert!(DataType::Int.accepts_unit());
        assert!(!DataType::Bool.accepts_unit());
        assert!(!DataType::String.accepts_unit());
    }

    #[test]
    fn data_type_from_str_rejects_unknown() {
        let err = "decimal".parse::<DataType>().unwrap_err();
        assert_eq!(err.to_string(), "invalid data type: decimal");
    }

    #[test]
    fn sensor_type_round_trips_through_str() {
        for ty in [SensorType::External, SensorType::Polling] {
            assert_eq!(ty.as_str().parse::<SensorType>().unwrap(), ty);
        }
        assert!("push".parse::<SensorType>().is_err());
    }

    #[test]
    fn polling_strategy_wire_name() {
        assert_eq!(
            serde_json::to_string(&PollingStrategy::Ping).unwrap(),
            "\"ping\""
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed request bodies for the server's create-operations.
//!
//! The submitter accepts any [`serde::Serialize`] value as a body; these types
//! mirror the JSON the server expects so callers do not have to assemble it by
//! hand. No validation happens here beyond what the types enforce, the server
//! validates and answers with an `error` message.
//!
//! | Body | Endpoint |
//! |------|----------|
//! | [`CreateDeviceRequest`] | `POST /api/v1/devices` |
//! | [`CreateSensorRequest`] | `POST /api/v1/devices/{id}/sensors` |
//! | [`CreateCommandRequest`] | `POST /api/v1/devices/{id}/commands` |
//! | [`CreateRuleRequest`] | `POST /api/v1/rules` |
//! | [`AddSensorValueRequest`] | `POST /api/v1/devices/{id}/sensors/{id}/values` |
//!
//! # Examples
//!
//! ```
//! use gohome_client::request::CreateSensorRequest;
//! use gohome_client::types::{DataType, SensorId};
//!
//! let sensor = CreateSensorRequest::external(
//!     SensorId::new("temperature").unwrap(),
//!     "Temperature",
//!     DataType::Float,
//! )
//! .with_unit("°C");
//!
//! let json = serde_json::to_value(&sensor).unwrap();
//! assert_eq!(json["type"], "external");
//! assert_eq!(json["unit"], "°C");
//! ```

mod command;
mod device;
mod rule;
mod sensor;

pub use command::CreateCommandRequest;
pub use device::CreateDeviceRequest;
pub use rule::CreateRuleRequest;
pub use sensor::{AddSensorValueRequest, CreateSensorRequest};

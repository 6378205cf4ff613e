// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by request bodies and endpoints.
//!
//! # Types
//!
//! - [`DeviceId`] / [`SensorId`] - Non-empty identifiers used as path segments
//! - [`DataType`] - Value type a sensor reports (`string`, `int`, `float`, `bool`)
//! - [`SensorType`] - `external` (pushed) or `polling` sensors
//! - [`PollingStrategy`] - How a polling sensor is polled
//! - [`CommandMethod`] - HTTP method of a device command

mod identifier;
mod method;
mod sensor;

pub use identifier::{DeviceId, SensorId};
pub use method::CommandMethod;
pub use sensor::{DataType, PollingStrategy, SensorType};

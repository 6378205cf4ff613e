// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command submission against the server's REST API.
//!
//! Every create-operation is a single JSON `POST` whose result is reduced to
//! an [`Outcome`]: `Ok(())` when the server answers `201 Created`, otherwise a
//! [`SubmitError`](crate::error::SubmitError) carrying a display message.
//!
//! - [`Endpoint`]: the path each operation is posted to
//! - [`Submitter`]: the submission contract, with one helper per operation
//! - [`ApiClient`]: the HTTP implementation

mod endpoint;
#[cfg(feature = "http")]
mod http;

pub use endpoint::{API_PREFIX, Endpoint};
#[cfg(feature = "http")]
pub use http::ApiClient;

use serde::Serialize;

use crate::error::Outcome;
use crate::request::{
    AddSensorValueRequest, CreateCommandRequest, CreateDeviceRequest, CreateRuleRequest,
    CreateSensorRequest,
};
use crate::types::{DeviceId, SensorId};

/// Trait for clients that submit create-operations to the server.
///
/// Implementors only provide [`Submitter::submit`]; the per-operation helpers
/// build the matching [`Endpoint`] and delegate to it.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    /// Posts `body` as JSON to `endpoint`.
    ///
    /// Resolves to `Ok(())` only on `201 Created`. Never panics: every
    /// failure is returned as an error.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the body cannot be encoded, the request does
    /// not complete, or the server answers with any other status.
    async fn submit<B>(&self, endpoint: &Endpoint, body: &B) -> Outcome
    where
        B: Serialize + Sync + ?Sized;

    /// Creates a device.
    ///
    /// # Errors
    ///
    /// See [`Submitter::submit`].
    async fn create_device(&self, body: &CreateDeviceRequest) -> Outcome {
        self.submit(&Endpoint::CreateDevice, body).await
    }

    /// Creates a sensor on `device`.
    ///
    /// # Errors
    ///
    /// See [`Submitter::submit`].
    async fn create_sensor(&self, device: &DeviceId, body: &CreateSensorRequest) -> Outcome {
        let endpoint = Endpoint::CreateSensor {
            device: device.clone(),
        };
        self.submit(&endpoint, body).await
    }

    /// Creates a command on `device`.
    ///
    /// # Errors
    ///
    /// See [`Submitter::submit`].
    async fn create_command(&self, device: &DeviceId, body: &CreateCommandRequest) -> Outcome {
        let endpoint = Endpoint::CreateCommand {
            device: device.clone(),
        };
        self.submit(&endpoint, body).await
    }

    /// Creates a rule.
    ///
    /// # Errors
    ///
    /// See [`Submitter::submit`].
    async fn create_rule(&self, body: &CreateRuleRequest) -> Outcome {
        self.submit(&Endpoint::CreateRule, body).await
    }

    /// Stores a value for `sensor` on `device`.
    ///
    /// # Errors
    ///
    /// See [`Submitter::submit`].
    async fn add_sensor_value(
        &self,
        device: &DeviceId,
        sensor: &SensorId,
        body: &AddSensorValueRequest,
    ) -> Outcome {
        let endpoint = Endpoint::AddSensorValue {
            device: device.clone(),
            sensor: sensor.clone(),
        };
        self.submit(&endpoint, body).await
    }
}

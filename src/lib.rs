// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `gohome_client` - An async Rust client for the go home server.
//!
//! The server manages devices, their sensors and commands, and automation
//! rules. This library covers the two ways a front end talks to it:
//!
//! - **Command submission**: create-operations are JSON `POST` requests that
//!   succeed only on `201 Created`; any failure carries a message ready for
//!   display (the server's `error` field, or `"Unknown error"`).
//! - **Event relay**: a single WebSocket connection whose JSON frames are
//!   delivered to every registered observer, in registration order.
//!
//! # Features
//!
//! - `http` (default): [`ApiClient`], the REST submitter
//! - `websocket` (default): [`EventRelay`], the WebSocket relay
//!
//! # Quick Start
//!
//! ## Creating a Device and a Sensor
//!
//! ```no_run
//! use gohome_client::{ClientConfig, CreateDeviceRequest, CreateSensorRequest, Submitter};
//! use gohome_client::types::{DataType, DeviceId, SensorId};
//!
//! #[tokio::main]
//! async fn main() -> gohome_client::Result<()> {
//!     let client = ClientConfig::new("192.168.1.10")
//!         .with_port(8080)
//!         .into_api_client()?;
//!
//!     let device = DeviceId::new("living-room")?;
//!     client
//!         .create_device(&CreateDeviceRequest::new(device.clone(), "Living Room"))
//!         .await?;
//!
//!     let sensor = CreateSensorRequest::external(
//!         SensorId::new("temperature")?,
//!         "Temperature",
//!         DataType::Float,
//!     )
//!     .with_unit("°C");
//!
//!     if let Err(e) = client.create_sensor(&device, &sensor).await {
//!         eprintln!("{}", e.message());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Observing Sensor Values
//!
//! ```no_run
//! use gohome_client::{ClientConfig, SensorValueEvent};
//!
//! #[tokio::main]
//! async fn main() -> gohome_client::Result<()> {
//!     let relay = ClientConfig::new("192.168.1.10")
//!         .with_port(8080)
//!         .event_relay();
//!
//!     relay.register(|event| {
//!         if let Ok(reading) = event.decode::<SensorValueEvent>() {
//!             println!("{} = {}", reading.sensor_id, reading.value);
//!         }
//!     });
//!
//!     relay.connect().await?;
//!     tokio::time::sleep(std::time::Duration::from_secs(60)).await;
//!     relay.close().await;
//!     Ok(())
//! }
//! ```

mod config;
pub mod error;
pub mod protocol;
pub mod relay;
pub mod report;
pub mod request;
pub mod types;

pub use config::ClientConfig;
pub use error::{
    Error, FALLBACK_MESSAGE, Outcome, ParseError, ProtocolError, Result, SubmitError, ValueError,
};
#[cfg(feature = "http")]
pub use protocol::ApiClient;
pub use protocol::{Endpoint, Submitter};
#[cfg(feature = "websocket")]
pub use relay::{ConnectionState, EventRelay};
pub use relay::{InboundEvent, ReconnectionPolicy, SensorValueEvent, SubscriptionId};
pub use report::{ErrorReporter, report_outcome};
pub use request::{
    AddSensorValueRequest, CreateCommandRequest, CreateDeviceRequest, CreateRuleRequest,
    CreateSensorRequest,
};
pub use types::{CommandMethod, DataType, DeviceId, PollingStrategy, SensorId, SensorType};

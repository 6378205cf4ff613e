// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event relay: one WebSocket connection fanned out to observers.
//!
//! The server pushes JSON frames on `/ws` (for example every stored sensor
//! value). The relay decodes each frame into an [`InboundEvent`] and calls
//! every registered observer with it, synchronously and in registration
//! order. Malformed frames are logged and skipped.
//!
//! # Overview
//!
//! - [`EventRelay`] - Owns the connection and its [`ConnectionState`]
//! - [`ObserverList`] / [`SubscriptionId`] - Ordered observer registry
//! - [`InboundEvent`] / [`SensorValueEvent`] - Decoded frames
//! - [`ReconnectionPolicy`] - Optional reconnection with backoff
//!
//! # Examples
//!
//! ```no_run
//! use gohome_client::relay::{EventRelay, SensorValueEvent};
//!
//! # async fn example() -> gohome_client::Result<()> {
//! let relay = EventRelay::new("ws://192.168.1.10:8080/ws");
//!
//! let sub = relay.register(|event| {
//!     if let Ok(reading) = event.decode::<SensorValueEvent>() {
//!         println!("{}/{} = {}", reading.device_id, reading.sensor_id, reading.value);
//!     }
//! });
//!
//! relay.connect().await?;
//!
//! // Later
//! relay.unsubscribe(sub);
//! relay.close().await;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "websocket")]
mod connection;
mod event;
mod observer;
mod reconnect;

#[cfg(feature = "websocket")]
pub use connection::{ConnectionState, EventRelay};
pub use event::{InboundEvent, SensorValueEvent};
pub use observer::{ObserverList, SubscriptionId};
pub use reconnect::ReconnectionPolicy;

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection configuration for a go home server.

use std::time::Duration;

#[cfg(feature = "http")]
use crate::error::ProtocolError;
#[cfg(feature = "http")]
use crate::protocol::ApiClient;
#[cfg(feature = "websocket")]
use crate::relay::EventRelay;
use crate::relay::ReconnectionPolicy;

/// Configuration for one go home server.
///
/// Both facilities are built from the same configuration: the REST client
/// via [`ClientConfig::into_api_client`] and the event relay via
/// [`ClientConfig::event_relay`]. The WebSocket scheme follows the HTTP one
/// (`wss` when HTTPS is enabled).
///
/// # Examples
///
/// ```
/// use gohome_client::ClientConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = ClientConfig::new("192.168.1.10");
/// assert_eq!(config.base_url(), "http://192.168.1.10");
/// assert_eq!(config.ws_url(), "ws://192.168.1.10/ws");
///
/// // With all options
/// let config = ClientConfig::new("home.example")
///     .with_port(8443)
///     .with_https()
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.ws_url(), "wss://home.example:8443/ws");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
    ws_path: String,
    reconnection: ReconnectionPolicy,
}

impl ClientConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Path of the server's WebSocket endpoint.
    pub const DEFAULT_WS_PATH: &'static str = "/ws";

    /// Creates a configuration for the server at `host`.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
            ws_path: Self::DEFAULT_WS_PATH.to_string(),
            reconnection: ReconnectionPolicy::default(),
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS (and `wss` for the event relay).
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout of the REST client.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the path of the WebSocket endpoint.
    #[must_use]
    pub fn with_ws_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.ws_path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        self
    }

    /// Sets the reconnection policy of the event relay.
    #[must_use]
    pub fn with_reconnection(mut self, policy: ReconnectionPolicy) -> Self {
        self.reconnection = policy;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the WebSocket path.
    #[must_use]
    pub fn ws_path(&self) -> &str {
        &self.ws_path
    }

    /// Returns the reconnection policy.
    #[must_use]
    pub fn reconnection(&self) -> &ReconnectionPolicy {
        &self.reconnection
    }

    /// Builds the base URL of the REST API.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{scheme}://{}", self.authority())
    }

    /// Builds the URL of the WebSocket endpoint.
    #[must_use]
    pub fn ws_url(&self) -> String {
        let scheme = if self.use_https { "wss" } else { "ws" };
        format!("{scheme}://{}{}", self.authority(), self.ws_path)
    }

    /// Host plus port, omitting the port when it is the scheme default.
    fn authority(&self) -> String {
        let default_port = if self.use_https {
            Self::DEFAULT_HTTPS_PORT
        } else {
            Self::DEFAULT_PORT
        };
        if self.port == default_port {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`ApiClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    #[cfg(feature = "http")]
    pub fn into_api_client(self) -> Result<ApiClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        ApiClient::with_timeout(self.base_url(), self.timeout)
    }

    /// Creates an [`EventRelay`] from this configuration.
    ///
    /// The relay is not connected yet; call [`EventRelay::connect`].
    #[cfg(feature = "websocket")]
    #[must_use]
    pub fn event_relay(&self) -> EventRelay {
        EventRelay::with_reconnection(self.ws_url(), self.reconnection.clone())
    }
}

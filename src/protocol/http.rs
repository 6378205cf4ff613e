// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the command submitter.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{Outcome, ProtocolError, SubmitError};
use crate::protocol::{Endpoint, Submitter};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the server's REST API.
///
/// Each submission is a single independent request: no retries, no shared
/// mutable state. The client is cheap to clone (the underlying connection
/// pool is shared).
///
/// # Examples
///
/// ```no_run
/// use gohome_client::protocol::{ApiClient, Submitter};
/// use gohome_client::request::CreateDeviceRequest;
/// use gohome_client::types::DeviceId;
///
/// # async fn example() -> gohome_client::Result<()> {
/// let client = ApiClient::new("192.168.1.10:8080")?;
///
/// let body = CreateDeviceRequest::new(DeviceId::new("lamp")?, "Desk Lamp");
/// if let Err(e) = client.create_device(&body).await {
///     eprintln!("{}", e.message());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

/// Error body the server sends with a non-201 status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// `base_url` may omit the scheme, in which case `http://` is assumed.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProtocolError> {
        let base_url = normalize_base_url(&base_url.into())?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self { base_url, client })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full URL for an endpoint.
    fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Submitter for ApiClient {
    async fn submit<B>(&self, endpoint: &Endpoint, body: &B) -> Outcome
    where
        B: Serialize + Sync + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(SubmitError::Serialize)?;
        let url = self.url_for(endpoint);

        tracing::debug!(operation = endpoint.operation(), url = %url, "Submitting request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(operation = endpoint.operation(), error = %e, "Request failed");
                SubmitError::Transport(e)
            })?;

        let status = response.status();
        if status == StatusCode::CREATED {
            tracing::debug!(operation = endpoint.operation(), "Request accepted");
            return Ok(());
        }

        let message = match response.text().await {
            Ok(text) => rejection_message(&text),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read error body");
                None
            }
        };

        tracing::debug!(
            operation = endpoint.operation(),
            status = status.as_u16(),
            message = ?message,
            "Request rejected"
        );

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extracts the `error` field from a rejection body.
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error)
}

fn normalize_base_url(base_url: &str) -> Result<String, ProtocolError> {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ProtocolError::InvalidAddress(
            "server address is required".to_string(),
        ));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("http://{trimmed}"))
    }
}

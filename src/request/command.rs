// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command request body.

use serde::{Deserialize, Serialize};

use crate::types::CommandMethod;

/// Body of a create-command request.
///
/// A command is an HTTP call the server performs on behalf of a device. The
/// payload template is rendered by the server with the device and command
/// fields (`{{.device_id}}`, `{{.command_name}}`, ...) plus invocation
/// parameters. The server assigns the command identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommandRequest {
    /// Human readable name.
    pub name: String,
    /// Body template sent to `endpoint` when the command is invoked.
    pub payload_template: String,
    /// URL the server calls.
    pub endpoint: String,
    /// HTTP method the server uses.
    pub method: CommandMethod,
}

impl CreateCommandRequest {
    /// Creates a command body.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        method: CommandMethod,
        endpoint: impl Into<String>,
        payload_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            payload_template: payload_template.into(),
            endpoint: endpoint.into(),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_method_uppercase() {
        let body = CreateCommandRequest::new(
            "Turn on",
            CommandMethod::Post,
            "http://192.168.1.30/cm",
            "{\"power\": \"on\"}",
        );

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["payload_template"], "{\"power\": \"on\"}");
        assert_eq!(json["endpoint"], "http://192.168.1.30/cm");
    }
}

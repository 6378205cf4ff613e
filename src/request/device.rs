// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device request body.

use serde::{Deserialize, Serialize};

use crate::types::DeviceId;

/// Body of a create-device request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDeviceRequest {
    /// Identifier chosen by the caller; the server rejects duplicates.
    pub id: DeviceId,
    /// Human readable name.
    pub name: String,
}

impl CreateDeviceRequest {
    /// Creates a device body.
    #[must_use]
    pub fn new(id: DeviceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

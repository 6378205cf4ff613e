// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Automation rule request body.

use serde::{Deserialize, Serialize};

/// Body of a create-rule request.
///
/// Both expressions are parsed by the server; they are plain strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRuleRequest {
    /// Human readable name.
    pub name: String,
    /// Condition expression, e.g. `when ${thermo.temp.current} > 25`.
    pub when: String,
    /// Action expression, e.g. `then ${fan.turn_on}`.
    pub then: String,
}

impl CreateRuleRequest {
    /// Creates a rule body.
    #[must_use]
    pub fn new(name: impl Into<String>, when: impl Into<String>, then: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            when: when.into(),
            then: then.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_expressions_verbatim() {
        let rule = CreateRuleRequest::new(
            "Night light",
            "time.hour >= 22",
            "lamp.power = \"on\"",
        );

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Night light",
                "when": "time.hour >= 22",
                "then": "lamp.power = \"on\""
            })
        );
    }
}

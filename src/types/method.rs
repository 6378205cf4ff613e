// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP method a server-side command uses when it is invoked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// HTTP method accepted for a device command.
///
/// The server only stores commands using one of these four methods.
///
/// # Examples
///
/// ```
/// use gohome_client::types::CommandMethod;
///
/// let method: CommandMethod = "post".parse().unwrap();
/// assert_eq!(method, CommandMethod::Post);
/// assert_eq!(method.as_str(), "POST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandMethod {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl CommandMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for CommandMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandMethod {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ValueError::UnknownVariant {
                kind: "command method",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&CommandMethod::Delete).unwrap(),
            "\"DELETE\""
        );
    }

    #[test]
    fn patch_is_not_accepted() {
        assert_eq!(
            "PATCH".parse::<CommandMethod>(),
            Err(ValueError::UnknownVariant {
                kind: "command method",
                value: "PATCH".to_string(),
            })
        );
    }
}

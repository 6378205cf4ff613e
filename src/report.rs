// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge from submission outcomes to a user-facing error display.

use crate::error::Outcome;

/// A place where failure messages are shown to the user.
///
/// Messages are plain strings meant for direct display.
pub trait ErrorReporter {
    /// Shows `message`.
    fn show_error(&self, message: &str);

    /// Hides any message currently shown.
    fn hide_error(&self);
}

/// Shows the failure message of `outcome`, or hides the display on success.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use gohome_client::error::SubmitError;
/// use gohome_client::report::{ErrorReporter, report_outcome};
///
/// #[derive(Default)]
/// struct Banner(RefCell<Option<String>>);
///
/// impl ErrorReporter for Banner {
///     fn show_error(&self, message: &str) {
///         *self.0.borrow_mut() = Some(message.to_string());
///     }
///     fn hide_error(&self) {
///         *self.0.borrow_mut() = None;
///     }
/// }
///
/// let banner = Banner::default();
/// report_outcome(&Err(SubmitError::Rejected { status: 500, message: None }), &banner);
/// assert_eq!(banner.0.borrow().as_deref(), Some("Unknown error"));
///
/// report_outcome(&Ok(()), &banner);
/// assert!(banner.0.borrow().is_none());
/// ```
pub fn report_outcome<R: ErrorReporter + ?Sized>(outcome: &Outcome, reporter: &R) {
    match outcome {
        Ok(()) => reporter.hide_error(),
        Err(e) => {
            tracing::debug!(error = %e, "Reporting failed submission");
            reporter.show_error(e.message());
        }
    }
}

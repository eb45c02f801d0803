// ABOUTME: Collaborator interfaces the pipeline signals but does not own
// ABOUTME: Navigation to the login view and user-facing error notification
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use tracing::error;

/// Router hook invoked when the pipeline invalidates the session.
///
/// Navigating to an already-active login view must be idempotent: concurrent
/// 401 responses may each trigger a navigation.
pub trait Navigator: Send + Sync {
    /// Send the user to the login view, optionally remembering where they were
    fn navigate_to_login(&self, return_path: Option<&str>);
}

/// Surface for user-facing error messages.
///
/// The pipeline notifies exactly once per classified error, before the call
/// rejects; callers that catch and log the same error must not notify again.
pub trait Notifier: Send + Sync {
    /// Show a human-readable error message to the user
    fn notify_error(&self, message: &str);
}

/// Navigator that ignores navigation requests; suitable for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to_login(&self, _return_path: Option<&str>) {}
}

/// Notifier that forwards messages to the `tracing` error level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        error!(detail = %message, "api call failed");
    }
}

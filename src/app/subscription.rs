// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::snackbar;
use iced::Subscription;

/// Pointer and window events feeding the banner's click-away detection and
/// responsive layout.
pub fn create_event_subscription() -> Subscription<Message> {
    snackbar::subscription().map(Message::Snackbar)
}

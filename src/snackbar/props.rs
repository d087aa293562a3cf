// SPDX-License-Identifier: MPL-2.0
//! Owner-supplied configuration of a banner.
//!
//! [`BannerProps`] is what the state machine reconciles, visual overrides
//! included since they decide the hit-test rectangle. [`Props`] adds the
//! owner's message constructors used by the iced adapter, and is only
//! obtainable through [`PropsBuilder::build`], which rejects missing required
//! props up front.

use std::fmt;
use std::sync::Arc;

use crate::domain::banner::AutoHideDuration;
use crate::error::{PropsError, Result};
use crate::snackbar::style::StyleOverride;
use crate::snackbar::CloseReason;

/// What the banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    pub message: String,
    pub action: Option<String>,
}

impl Content {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Props the visibility controller reconciles.
///
/// `open == None` is uncontrolled mode: the banner keeps its own visibility
/// and self-applies close requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BannerProps {
    pub content: Content,
    pub open: Option<bool>,
    pub auto_hide: AutoHideDuration,
    /// Merged over the root style.
    pub style: StyleOverride,
    /// Merged over the body style; also resizes the click-away area.
    pub body_style: StyleOverride,
}

impl BannerProps {
    /// Controlled props.
    #[must_use]
    pub fn controlled(content: Content, open: bool) -> Self {
        Self {
            content,
            open: Some(open),
            ..Self::default()
        }
    }

    /// Uncontrolled props.
    #[must_use]
    pub fn uncontrolled(content: Content) -> Self {
        Self {
            content,
            open: None,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: AutoHideDuration) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    #[must_use]
    pub fn with_body_style(mut self, body_style: StyleOverride) -> Self {
        self.body_style = body_style;
        self
    }

    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.content.message = message.into();
        self
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.open.is_some()
    }
}

type CloseHandler<M> = Arc<dyn Fn(CloseReason) -> M + Send + Sync>;
type ActionHandler<M> = Arc<dyn Fn() -> M + Send + Sync>;

/// Complete, validated props of an iced [`Snackbar`](super::Snackbar).
pub struct Props<M> {
    pub banner: BannerProps,
    pub(crate) on_request_close: CloseHandler<M>,
    pub(crate) on_action: Option<ActionHandler<M>>,
    /// Free-form identifier, also used as the diagnostics source.
    pub class_name: Option<String>,
}

impl<M> Props<M> {
    #[must_use]
    pub fn builder() -> PropsBuilder<M> {
        PropsBuilder::default()
    }

    /// Owner message for a close request.
    pub fn request_close(&self, reason: CloseReason) -> M {
        (self.on_request_close)(reason)
    }

    /// Owner message for an action activation, if the owner listens.
    pub fn action_message(&self) -> Option<M> {
        self.on_action.as_ref().map(|on_action| on_action())
    }
}

impl<M> Clone for Props<M> {
    fn clone(&self) -> Self {
        Self {
            banner: self.banner.clone(),
            on_request_close: Arc::clone(&self.on_request_close),
            on_action: self.on_action.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

impl<M> fmt::Debug for Props<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("banner", &self.banner)
            .field("on_action", &self.on_action.is_some())
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Props`].
///
/// # Example
///
/// ```
/// use iced_snackbar::snackbar::{CloseReason, Props};
///
/// #[derive(Debug, Clone)]
/// enum Message {
///     CloseRequested(CloseReason),
///     Undo,
/// }
///
/// let props = Props::builder()
///     .message("Event deleted")
///     .action("Undo")
///     .open(true)
///     .auto_hide_ms(4_000)
///     .on_request_close(Message::CloseRequested)
///     .on_action(|| Message::Undo)
///     .build()
///     .expect("all required props set");
///
/// assert!(props.banner.is_controlled());
///
/// let missing = Props::<Message>::builder().message("Hi").build();
/// assert!(missing.is_err());
/// ```
pub struct PropsBuilder<M> {
    message: Option<String>,
    action: Option<String>,
    open: Option<Option<bool>>,
    auto_hide: AutoHideDuration,
    on_request_close: Option<CloseHandler<M>>,
    on_action: Option<ActionHandler<M>>,
    style: StyleOverride,
    body_style: StyleOverride,
    class_name: Option<String>,
}

impl<M> Default for PropsBuilder<M> {
    fn default() -> Self {
        Self {
            message: None,
            action: None,
            open: None,
            auto_hide: AutoHideDuration::DISABLED,
            on_request_close: None,
            on_action: None,
            style: StyleOverride::default(),
            body_style: StyleOverride::default(),
            class_name: None,
        }
    }
}

impl<M> PropsBuilder<M> {
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Controlled visibility.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(Some(open));
        self
    }

    /// Lets the banner manage its own visibility.
    #[must_use]
    pub fn uncontrolled(mut self) -> Self {
        self.open = Some(None);
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, auto_hide: AutoHideDuration) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Auto-hide delay in milliseconds; zero or negative disables it.
    #[must_use]
    pub fn auto_hide_ms(self, millis: i64) -> Self {
        self.auto_hide(AutoHideDuration::from_millis(millis))
    }

    #[must_use]
    pub fn on_request_close(mut self, f: impl Fn(CloseReason) -> M + Send + Sync + 'static) -> Self {
        self.on_request_close = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_action(mut self, f: impl Fn() -> M + Send + Sync + 'static) -> Self {
        self.on_action = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn body_style(mut self, style: StyleOverride) -> Self {
        self.body_style = style;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Validates and assembles the props.
    ///
    /// # Errors
    ///
    /// Returns `Error::Props` when `message`, `open` or `on_request_close`
    /// was never set. An empty message is accepted.
    pub fn build(self) -> Result<Props<M>> {
        let message = self.message.ok_or(PropsError::Missing("message"))?;
        let open = self.open.ok_or(PropsError::Missing("open"))?;
        let on_request_close = self
            .on_request_close
            .ok_or(PropsError::Missing("on_request_close"))?;

        Ok(Props {
            banner: BannerProps {
                content: Content {
                    message,
                    action: self.action,
                },
                open,
                auto_hide: self.auto_hide,
                style: self.style,
                body_style: self.body_style,
            },
            on_request_close,
            on_action: self.on_action,
            class_name: self.class_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Close(CloseReason),
        Act,
    }

    fn complete() -> PropsBuilder<Msg> {
        Props::builder()
            .message("Saved")
            .open(false)
            .on_request_close(Msg::Close)
    }

    fn missing_prop(result: Result<Props<Msg>>) -> &'static str {
        match result {
            Err(Error::Props(err)) => err.prop_name(),
            other => panic!("expected props error, got {other:?}"),
        }
    }

    #[test]
    fn build_requires_message_open_and_close_handler() {
        assert_eq!(
            missing_prop(Props::builder().open(true).on_request_close(Msg::Close).build()),
            "message"
        );
        assert_eq!(
            missing_prop(Props::builder().message("x").on_request_close(Msg::Close).build()),
            "open"
        );
        assert_eq!(
            missing_prop(Props::<Msg>::builder().message("x").open(true).build()),
            "on_request_close"
        );
    }

    #[test]
    fn empty_message_is_accepted() {
        let props = complete().message("").build().expect("message present");
        assert_eq!(props.banner.content.message, "");
    }

    #[test]
    fn style_overrides_travel_with_banner_props() {
        let body_style = StyleOverride {
            min_width: Some(560.0),
            ..StyleOverride::default()
        };
        let props = complete().body_style(body_style.clone()).build().expect("valid props");
        assert_eq!(props.banner.body_style, body_style);
        assert!(props.banner.style.is_empty());
    }

    #[test]
    fn uncontrolled_counts_as_provided_open() {
        let props = Props::builder()
            .message("Hello")
            .uncontrolled()
            .on_request_close(Msg::Close)
            .build()
            .expect("valid props");
        assert_eq!(props.banner.open, None);
        assert!(!props.banner.is_controlled());
    }

    #[test]
    fn handlers_produce_owner_messages() {
        let props = complete().on_action(|| Msg::Act).build().expect("valid props");

        assert_eq!(props.request_close(CloseReason::Timeout), Msg::Close(CloseReason::Timeout));
        assert_eq!(props.action_message(), Some(Msg::Act));
    }

    #[test]
    fn missing_action_handler_yields_no_message() {
        let props = complete().action("Undo").build().expect("valid props");
        assert_eq!(props.banner.content.action.as_deref(), Some("Undo"));
        assert_eq!(props.action_message(), None);
    }

    #[test]
    fn non_positive_auto_hide_is_disabled() {
        let props = complete().auto_hide_ms(0).build().expect("valid props");
        assert!(!props.banner.auto_hide.is_enabled());
    }
}

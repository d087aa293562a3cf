// SPDX-License-Identifier: MPL-2.0
//! Iced host for a [`Banner`].
//!
//! [`Snackbar`] executes the banner's commands on the iced runtime: timers
//! become abortable `tokio` sleeps whose handles are owned per timer kind,
//! and close requests become the owner's messages.

use iced::task::Handle;
use iced::{event, mouse, touch, window, Element, Event, Size, Subscription, Task};

use crate::snackbar::click_away::PointerEvent;
use crate::snackbar::controller::{Banner, BannerOptions};
use crate::snackbar::props::Props;
use crate::snackbar::timer::{Command, TimerKind, TimerToken};
use crate::snackbar::view;
use crate::ui::theming::AppTheme;

/// Internal messages of a [`Snackbar`].
#[derive(Debug, Clone)]
pub enum Message {
    TimerElapsed(TimerToken),
    Pointer(PointerEvent),
    Resized(Size),
    ActionPressed,
}

/// A banner wired to the iced runtime.
pub struct Snackbar<M> {
    banner: Banner,
    props: Props<M>,
    timers: [Option<(TimerToken, Handle)>; 3],
}

impl<M> Snackbar<M> {
    /// Mounts the banner. The returned task carries any timers armed by an
    /// initially open banner.
    pub fn new(props: Props<M>, theme: AppTheme, mut options: BannerOptions) -> (Self, Task<Message>) {
        if options.source.is_none() {
            options.source = props.class_name.clone();
        }
        let (banner, commands) = Banner::mount(props.banner.clone(), theme, options);
        let mut snackbar = Self {
            banner,
            props,
            timers: [None, None, None],
        };
        let (_, task) = snackbar.execute(commands);
        (snackbar, task)
    }

    /// Replaces the props, reconciling against the previous ones.
    pub fn set_props(&mut self, props: Props<M>) -> Task<Message> {
        let commands = self.banner.set_props(props.banner.clone());
        self.props = props;
        self.execute(commands).1
    }

    pub fn set_theme(&mut self, theme: AppTheme) {
        self.banner.set_theme(theme);
    }

    /// Opens an uncontrolled banner.
    pub fn show(&mut self) -> Task<Message> {
        let commands = self.banner.show();
        self.execute(commands).1
    }

    /// Closes an uncontrolled banner.
    pub fn dismiss(&mut self) -> Task<Message> {
        let commands = self.banner.dismiss();
        self.execute(commands).1
    }

    /// Handles an internal message, returning the owner message it produced.
    pub fn update(&mut self, message: Message) -> (Option<M>, Task<Message>) {
        let commands = match message {
            Message::TimerElapsed(token) => {
                let slot = &mut self.timers[token.kind.index()];
                if slot.as_ref().is_some_and(|(live, _)| *live == token) {
                    *slot = None;
                }
                self.banner.on_timer(token)
            }
            Message::Pointer(event) => self.banner.on_pointer(event),
            Message::Resized(size) => {
                self.banner.on_resize(size);
                Vec::new()
            }
            Message::ActionPressed => return (self.props.action_message(), Task::none()),
        };
        self.execute(commands)
    }

    /// Tears the banner down, aborting every pending timer.
    pub fn unmount(&mut self) {
        let commands = self.banner.unmount();
        let _ = self.execute(commands);
        for slot in &mut self.timers {
            if let Some((_, handle)) = slot.take() {
                handle.abort();
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::render(&self.banner)
    }

    #[must_use]
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    #[must_use]
    pub fn props(&self) -> &Props<M> {
        &self.props
    }

    /// Whether a runtime timer of `kind` is currently held.
    #[must_use]
    pub fn has_pending_timer(&self, kind: TimerKind) -> bool {
        self.timers[kind.index()].is_some()
    }

    fn execute(&mut self, commands: Vec<Command>) -> (Option<M>, Task<Message>) {
        let mut owner_message = None;
        let mut tasks = Vec::new();

        for command in commands {
            match command {
                Command::Schedule { token, after } => {
                    let (task, handle) = Task::perform(
                        async move { tokio::time::sleep(after).await },
                        move |()| Message::TimerElapsed(token),
                    )
                    .abortable();
                    // Replacing the slot drops, and so aborts, the previous handle.
                    self.timers[token.kind.index()] = Some((token, handle.abort_on_drop()));
                    tasks.push(task);
                }
                Command::Cancel(token) => {
                    let slot = &mut self.timers[token.kind.index()];
                    if slot.as_ref().is_some_and(|(live, _)| *live == token) {
                        if let Some((_, handle)) = slot.take() {
                            handle.abort();
                        }
                    }
                }
                Command::RequestClose(reason) => {
                    owner_message = Some(self.props.request_close(reason));
                }
            }
        }

        (owner_message, Task::batch(tasks))
    }
}

impl<M> Drop for Snackbar<M> {
    fn drop(&mut self) {
        let _ = self.banner.unmount();
    }
}

/// Window and pointer events every mounted snackbar needs.
///
/// Presses are forwarded even when another widget captured them: a click on
/// any other control is still a click away from the banner.
pub fn subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| runtime_event(event))
}

/// Maps a runtime event to the banner message it feeds, if any. The window's
/// initial size arrives with `Opened`, later ones with `Resized`.
fn runtime_event(event: Event) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Pointer(PointerEvent::Moved(position)))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::Pointer(PointerEvent::Left)),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            Some(Message::Pointer(PointerEvent::Pressed))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::Pointer(PointerEvent::Touched(position)))
        }
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::Resized(size))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::{CloseReason, Phase, StyleOverride};
    use iced::Point;

    #[derive(Debug, Clone, PartialEq)]
    enum Owner {
        Close(CloseReason),
        Undo,
    }

    fn props(open: bool) -> Props<Owner> {
        Props::builder()
            .message("Photo archived")
            .action("Undo")
            .open(open)
            .auto_hide_ms(3_000)
            .on_request_close(Owner::Close)
            .on_action(|| Owner::Undo)
            .class_name("archive")
            .build()
            .expect("valid props")
    }

    fn live(snackbar: &Snackbar<Owner>, kind: TimerKind) -> TimerToken {
        snackbar.banner().timers().live(kind).expect("timer live")
    }

    #[test]
    fn open_mount_holds_timer_handles() {
        let (snackbar, _task) = Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        assert!(snackbar.has_pending_timer(TimerKind::AutoHide));
        assert!(snackbar.has_pending_timer(TimerKind::TransitionGate));
        assert!(!snackbar.has_pending_timer(TimerKind::Replacement));
        assert_eq!(snackbar.banner().source(), Some("archive"));
    }

    #[test]
    fn auto_hide_expiry_yields_owner_close_message() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let token = live(&snackbar, TimerKind::AutoHide);

        let (owner, _task) = snackbar.update(Message::TimerElapsed(token));

        assert_eq!(owner, Some(Owner::Close(CloseReason::Timeout)));
        assert!(!snackbar.has_pending_timer(TimerKind::AutoHide));
    }

    #[test]
    fn stale_timer_yields_nothing() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let token = live(&snackbar, TimerKind::AutoHide);
        let _ = snackbar.set_props(props(false));

        let (owner, _task) = snackbar.update(Message::TimerElapsed(token));
        assert_eq!(owner, None);
        assert!(!snackbar.has_pending_timer(TimerKind::AutoHide));
    }

    #[test]
    fn click_away_after_gate_requests_close() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let _ = snackbar.update(Message::Resized(Size::new(1024.0, 768.0)));
        let gate = live(&snackbar, TimerKind::TransitionGate);
        let _ = snackbar.update(Message::TimerElapsed(gate));
        assert_eq!(snackbar.banner().phase(), Phase::Open);

        let _ = snackbar.update(Message::Pointer(PointerEvent::Moved(Point::new(5.0, 5.0))));
        let (owner, _task) = snackbar.update(Message::Pointer(PointerEvent::Pressed));
        assert_eq!(owner, Some(Owner::Close(CloseReason::Clickaway)));
    }

    #[test]
    fn action_button_yields_owner_action() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let (owner, _task) = snackbar.update(Message::ActionPressed);
        assert_eq!(owner, Some(Owner::Undo));
    }

    #[test]
    fn unmount_releases_every_handle() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        snackbar.unmount();
        for kind in TimerKind::ALL {
            assert!(!snackbar.has_pending_timer(kind));
        }
        assert!(!snackbar.banner().is_mounted());
    }

    #[test]
    fn view_builds_for_open_and_closed_banners() {
        let (open, _task) = Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let _element = open.view();

        let (closed, _task) = Snackbar::new(props(false), AppTheme::default(), BannerOptions::default());
        let _element = closed.view();
    }

    fn widened(min_width: f32) -> Props<Owner> {
        Props::builder()
            .message("Hi")
            .action("Undo")
            .open(true)
            .body_style(StyleOverride {
                min_width: Some(min_width),
                ..StyleOverride::default()
            })
            .on_request_close(Owner::Close)
            .on_action(|| Owner::Undo)
            .build()
            .expect("valid props")
    }

    fn settle(snackbar: &mut Snackbar<Owner>) {
        let gate = live(snackbar, TimerKind::TransitionGate);
        let _ = snackbar.update(Message::TimerElapsed(gate));
        assert_eq!(snackbar.banner().phase(), Phase::Open);
    }

    #[test]
    fn press_inside_widened_body_is_not_a_click_away() {
        let (mut snackbar, _task) =
            Snackbar::new(widened(560.0), AppTheme::default(), BannerOptions::default());
        let _ = snackbar.update(Message::Resized(Size::new(1200.0, 800.0)));
        settle(&mut snackbar);

        // Right end of the rendered body, where the action sits.
        let _ = snackbar.update(Message::Pointer(PointerEvent::Moved(Point::new(860.0, 776.0))));
        let (owner, _task) = snackbar.update(Message::Pointer(PointerEvent::Pressed));
        assert_eq!(owner, None);

        let _ = snackbar.update(Message::Pointer(PointerEvent::Moved(Point::new(100.0, 776.0))));
        let (owner, _task) = snackbar.update(Message::Pointer(PointerEvent::Pressed));
        assert_eq!(owner, Some(Owner::Close(CloseReason::Clickaway)));
    }

    #[test]
    fn body_override_updates_follow_set_props() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let _ = snackbar.update(Message::Resized(Size::new(1200.0, 800.0)));
        let before = snackbar.banner().bounds().expect("viewport known");

        let _ = snackbar.set_props(widened(560.0));
        let after = snackbar.banner().bounds().expect("viewport known");

        assert!(before.width < 560.0);
        assert_eq!(after.width, 560.0);
        assert_eq!(after.x, 320.0);
    }

    #[test]
    fn window_opened_reports_the_initial_size() {
        let size = Size::new(1200.0, 800.0);
        let message = runtime_event(Event::Window(window::Event::Opened {
            position: None,
            size,
        }));
        assert!(matches!(message, Some(Message::Resized(s)) if s == size));

        let resized = runtime_event(Event::Window(window::Event::Resized(size)));
        assert!(matches!(resized, Some(Message::Resized(s)) if s == size));
    }

    #[test]
    fn action_press_after_window_opened_is_not_a_click_away() {
        let (mut snackbar, _task) =
            Snackbar::new(props(true), AppTheme::default(), BannerOptions::default());
        let opened = runtime_event(Event::Window(window::Event::Opened {
            position: None,
            size: Size::new(1024.0, 768.0),
        }))
        .expect("opened maps to a message");
        let _ = snackbar.update(opened);
        settle(&mut snackbar);

        let bounds = snackbar.banner().bounds().expect("viewport known");
        let action = Point::new(bounds.x + bounds.width - 10.0, bounds.center_y());
        let _ = snackbar.update(Message::Pointer(PointerEvent::Moved(action)));
        let (owner, _task) = snackbar.update(Message::Pointer(PointerEvent::Pressed));
        assert_eq!(owner, None);

        let (owner, _task) = snackbar.update(Message::ActionPressed);
        assert_eq!(owner, Some(Owner::Undo));
    }
}

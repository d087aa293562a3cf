// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a controlled snackbar.
//!
//! The `App` owns the banner's `open` prop: it opens the banner with sample
//! messages and closes it whenever the banner requests so. Theme changes are
//! persisted to `settings.toml`; banner diagnostics can be exported as JSON.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::banner::AutoHideDuration;
use crate::error::Result;
use crate::snackbar::{BannerOptions, Props, Snackbar};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Sample notifications cycled by [`Message::Notify`].
const SAMPLES: &[(&str, Option<&str>)] = &[
    ("Event added to your calendar", Some("Undo")),
    ("Message archived", Some("Undo")),
    ("Connection restored", None),
    (
        "Your photo was uploaded and is now visible to everyone in the shared album",
        Some("View"),
    ),
];

const CLASS_NAME: &str = "demo-snackbar";
const DIAGNOSTICS_FILE: &str = "diagnostics.json";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    theme: AppTheme,
    config: Config,
    config_dir: Option<PathBuf>,
    snackbar: Snackbar<Message>,
    auto_hide: AutoHideDuration,
    next_sample: usize,
    favourite: bool,
    checked: bool,
    /// Last owner-visible outcome, shown under the controls.
    status: Option<String>,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field("phase", &self.snackbar.banner().phase())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Everything `App::new` needs, resolved before the event loop starts.
struct Boot {
    flags: Flags,
    config: Config,
    config_warning: Option<String>,
    props: Props<Message>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the initial banner props are invalid or the event
/// loop fails to start.
pub fn run(flags: Flags) -> std::result::Result<(), Box<dyn std::error::Error>> {
    use std::cell::RefCell;

    let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
    let auto_hide = flags
        .auto_hide_ms
        .map_or_else(|| config.snackbar.auto_hide(), AutoHideDuration::from_millis);
    let (message, action) = SAMPLES[0];
    let props = sample_props(message, action, false, auto_hide)?;

    // iced 0.14 requires Fn for boot; the state is consumed exactly once.
    let boot_state = RefCell::new(Some(Boot {
        flags,
        config,
        config_warning,
        props,
    }));
    let boot = move || {
        let boot = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(boot)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

fn sample_props(
    message: &str,
    action: Option<&str>,
    open: bool,
    auto_hide: AutoHideDuration,
) -> Result<Props<Message>> {
    let mut builder = Props::builder()
        .message(message)
        .open(open)
        .auto_hide(auto_hide)
        .on_request_close(Message::CloseRequested)
        .on_action(|| Message::Action)
        .class_name(CLASS_NAME);
    if let Some(label) = action {
        builder = builder.action(label);
    }
    builder.build()
}

impl App {
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            mut config,
            config_warning,
            props,
        } = boot;

        if let Some(mode) = flags.theme_mode {
            config.general.theme_mode = mode;
        }
        let theme = AppTheme::new(config.general.theme_mode);
        let auto_hide = props.banner.auto_hide;

        let capacity = config
            .snackbar
            .diagnostics_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new);
        let diagnostics = DiagnosticsCollector::new(capacity);
        let options = BannerOptions::default()
            .with_transition(config.snackbar.transition_delay())
            .with_diagnostics(diagnostics.handle());

        let (snackbar, task) = Snackbar::new(props, theme.clone(), options);

        let app = App {
            theme,
            config,
            config_dir: flags.config_dir,
            snackbar,
            auto_hide,
            next_sample: 0,
            favourite: false,
            checked: false,
            status: config_warning,
            diagnostics,
        };
        (app, task.map(Message::Snackbar))
    }

    fn title(&self) -> String {
        String::from("Snackbar demo")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Snackbar(inner) => {
                let (owner, task) = self.snackbar.update(inner);
                let task = task.map(Message::Snackbar);
                match owner {
                    Some(owner) => Task::batch([task, self.update(owner)]),
                    None => task,
                }
            }
            Message::Notify => {
                let (text, action) = SAMPLES[self.next_sample % SAMPLES.len()];
                self.next_sample += 1;
                self.present(text, action)
            }
            Message::Hide => self.set_open(false),
            Message::CloseRequested(reason) => {
                self.status = Some(format!("Banner closed ({reason})"));
                self.set_open(false)
            }
            Message::Action => {
                let label = self.snackbar.banner().displayed().action.clone();
                self.status = Some(format!(
                    "\"{}\" pressed",
                    label.as_deref().unwrap_or_default()
                ));
                self.set_open(false)
            }
            Message::ToggleFavourite => {
                self.favourite = !self.favourite;
                if self.favourite {
                    self.present("Added to favourites", None)
                } else {
                    self.present("Removed from favourites", None)
                }
            }
            Message::ToggleChecked => {
                self.checked = !self.checked;
                Task::none()
            }
            Message::ToggleTheme => {
                self.toggle_theme();
                Task::none()
            }
            Message::ExportDiagnostics => {
                self.diagnostics.process_pending();
                self.status = Some(match self.export_diagnostics() {
                    Ok(path) => format!("Diagnostics written to {}", path.display()),
                    Err(err) => err.to_string(),
                });
                Task::none()
            }
        };
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            theme: &self.theme,
            snackbar: &self.snackbar,
            favourite: self.favourite,
            checked: self.checked,
            status: self.status.as_deref(),
        })
    }

    /// Opens the banner with new content. A visible banner replaces its
    /// content through a close/reopen cycle.
    fn present(&mut self, message: &str, action: Option<&str>) -> Task<Message> {
        let props = sample_props(message, action, true, self.auto_hide);
        self.apply(props)
    }

    fn set_open(&mut self, open: bool) -> Task<Message> {
        let content = self.snackbar.banner().props().content.clone();
        let props = sample_props(
            &content.message,
            content.action.as_deref(),
            open,
            self.auto_hide,
        );
        self.apply(props)
    }

    fn apply(&mut self, props: Result<Props<Message>>) -> Task<Message> {
        match props {
            Ok(props) => self.snackbar.set_props(props).map(Message::Snackbar),
            Err(err) => {
                self.status = Some(err.to_string());
                Task::none()
            }
        }
    }

    fn toggle_theme(&mut self) {
        let mode = if self.theme.mode.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.theme = AppTheme::new(mode);
        self.snackbar.set_theme(self.theme.clone());

        self.config.general.theme_mode = mode;
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            self.status = Some(err.to_string());
        }
    }

    fn export_diagnostics(&self) -> Result<PathBuf> {
        let dir = self
            .config_dir
            .clone()
            .or_else(dirs::cache_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join("IcedSnackbar");
        std::fs::create_dir_all(&dir)?;
        self.diagnostics.export_to_file(dir.join(DIAGNOSTICS_FILE))
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewport size observation.

use iced::Size;
use serde::{Deserialize, Serialize};

use crate::config::{LARGE_BREAKPOINT_PX, MEDIUM_BREAKPOINT_PX};

/// Coarse viewport class driving the banner layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSize {
    Small,
    Medium,
    /// Assumed until the first resize is observed.
    #[default]
    Large,
}

impl DeviceSize {
    /// Classifies a window width in logical pixels.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width >= LARGE_BREAKPOINT_PX {
            DeviceSize::Large
        } else if width >= MEDIUM_BREAKPOINT_PX {
            DeviceSize::Medium
        } else {
            DeviceSize::Small
        }
    }

    #[must_use]
    pub fn is_small(self) -> bool {
        self == DeviceSize::Small
    }
}

/// Capability reporting the window size.
pub trait ViewportObserver: std::fmt::Debug + Send {
    /// Records a new window size.
    fn resized(&mut self, size: Size);

    /// Last known window size.
    fn size(&self) -> Option<Size>;

    /// Device class for the last known size.
    fn device(&self) -> DeviceSize {
        self.size()
            .map_or(DeviceSize::default(), |size| DeviceSize::from_width(size.width))
    }
}

/// Tracks the size reported by window resize events.
#[derive(Debug, Clone, Default)]
pub struct WindowViewport {
    size: Option<Size>,
}

impl WindowViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a known window size.
    #[must_use]
    pub fn with_size(size: Size) -> Self {
        Self { size: Some(size) }
    }
}

impl ViewportObserver for WindowViewport {
    fn resized(&mut self, size: Size) {
        self.size = Some(size);
    }

    fn size(&self) -> Option<Size> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_classify_widths() {
        assert_eq!(DeviceSize::from_width(320.0), DeviceSize::Small);
        assert_eq!(DeviceSize::from_width(767.9), DeviceSize::Small);
        assert_eq!(DeviceSize::from_width(768.0), DeviceSize::Medium);
        assert_eq!(DeviceSize::from_width(991.0), DeviceSize::Medium);
        assert_eq!(DeviceSize::from_width(992.0), DeviceSize::Large);
    }

    #[test]
    fn unknown_size_is_large() {
        let viewport = WindowViewport::new();
        assert_eq!(viewport.device(), DeviceSize::Large);
    }

    #[test]
    fn resize_updates_device() {
        let mut viewport = WindowViewport::with_size(Size::new(1280.0, 800.0));
        assert_eq!(viewport.device(), DeviceSize::Large);

        viewport.resized(Size::new(400.0, 700.0));
        assert_eq!(viewport.device(), DeviceSize::Small);
        assert_eq!(viewport.size(), Some(Size::new(400.0, 700.0)));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Outside-interaction detection.
//!
//! The banner owns a [`ClickAwayDetector`] but decides itself when it is
//! bound. While unbound, a detector still tracks the pointer so a press right
//! after binding is hit-tested against the current position.

use iced::{Point, Rectangle};

/// Pointer input relevant to click-away detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The cursor moved to a window position.
    Moved(Point),
    /// The cursor left the window.
    Left,
    /// A mouse button was pressed at the last known cursor position.
    Pressed,
    /// A finger touched the screen at a position.
    Touched(Point),
}

/// Capability reporting pointer interactions outside the banner.
pub trait ClickAwayDetector: std::fmt::Debug + Send {
    /// Starts reporting outside interactions.
    fn bind(&mut self);

    /// Stops reporting outside interactions.
    fn unbind(&mut self);

    fn is_bound(&self) -> bool;

    /// Updates the rectangle counted as inside the banner.
    fn set_bounds(&mut self, bounds: Option<Rectangle>);

    /// Feeds a pointer event. Returns true for an outside interaction
    /// observed while bound.
    fn observe(&mut self, event: PointerEvent) -> bool;
}

/// Hit-tests presses against the banner rectangle.
///
/// With no known rectangle nothing is rendered to be inside, so every press
/// counts as outside. A mouse press with no known cursor position is ignored.
#[derive(Debug, Clone, Default)]
pub struct BoundsDetector {
    bound: bool,
    bounds: Option<Rectangle>,
    cursor: Option<Point>,
}

impl BoundsDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn is_outside(&self, position: Point) -> bool {
        self.bounds.is_none_or(|bounds| !bounds.contains(position))
    }
}

impl ClickAwayDetector for BoundsDetector {
    fn bind(&mut self) {
        self.bound = true;
    }

    fn unbind(&mut self) {
        self.bound = false;
    }

    fn is_bound(&self) -> bool {
        self.bound
    }

    fn set_bounds(&mut self, bounds: Option<Rectangle>) {
        self.bounds = bounds;
    }

    fn observe(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Moved(position) => {
                self.cursor = Some(position);
                false
            }
            PointerEvent::Left => {
                self.cursor = None;
                false
            }
            PointerEvent::Pressed => {
                self.bound && self.cursor.is_some_and(|position| self.is_outside(position))
            }
            PointerEvent::Touched(position) => {
                self.cursor = Some(position);
                self.bound && self.is_outside(position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn banner_rect() -> Rectangle {
        Rectangle::new(Point::new(100.0, 552.0), Size::new(400.0, 48.0))
    }

    #[test]
    fn unbound_detector_never_reports() {
        let mut detector = BoundsDetector::new();
        detector.set_bounds(Some(banner_rect()));

        assert!(!detector.observe(PointerEvent::Touched(Point::new(0.0, 0.0))));
    }

    #[test]
    fn press_outside_is_reported_when_bound() {
        let mut detector = BoundsDetector::new();
        detector.set_bounds(Some(banner_rect()));
        detector.bind();

        detector.observe(PointerEvent::Moved(Point::new(10.0, 10.0)));
        assert!(detector.observe(PointerEvent::Pressed));
    }

    #[test]
    fn press_inside_is_not_reported() {
        let mut detector = BoundsDetector::new();
        detector.set_bounds(Some(banner_rect()));
        detector.bind();

        detector.observe(PointerEvent::Moved(Point::new(150.0, 570.0)));
        assert!(!detector.observe(PointerEvent::Pressed));
        assert!(!detector.observe(PointerEvent::Touched(Point::new(120.0, 560.0))));
    }

    #[test]
    fn cursor_is_tracked_while_unbound() {
        let mut detector = BoundsDetector::new();
        detector.set_bounds(Some(banner_rect()));
        detector.observe(PointerEvent::Moved(Point::new(5.0, 5.0)));

        detector.bind();
        assert!(detector.observe(PointerEvent::Pressed));
    }

    #[test]
    fn unknown_cursor_press_is_ignored() {
        let mut detector = BoundsDetector::new();
        detector.bind();
        detector.observe(PointerEvent::Moved(Point::new(5.0, 5.0)));
        detector.observe(PointerEvent::Left);

        assert!(!detector.observe(PointerEvent::Pressed));
    }

    #[test]
    fn missing_bounds_count_as_outside() {
        let mut detector = BoundsDetector::new();
        detector.bind();
        assert!(detector.observe(PointerEvent::Touched(Point::ORIGIN)));
    }

    #[test]
    fn unbind_stops_reporting() {
        let mut detector = BoundsDetector::new();
        detector.bind();
        detector.unbind();
        assert!(!detector.is_bound());
        assert!(!detector.observe(PointerEvent::Touched(Point::ORIGIN)));
    }
}

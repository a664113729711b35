//! Mapping raw host input to navigation steps.

use cslider_track::Axis;

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Anything else.
    Other,
}

/// Mouse button that started a click or drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left button, or any touch.
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the scroll axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// One step through the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Next,
    Prev,
}

/// Step for an arrow key: left/right when horizontal, up/down when vertical.
pub fn key_step(axis: Axis, key: Key) -> Option<Step> {
    match (axis, key) {
        (Axis::Horizontal, Key::ArrowLeft) | (Axis::Vertical, Key::ArrowUp) => Some(Step::Prev),
        (Axis::Horizontal, Key::ArrowRight) | (Axis::Vertical, Key::ArrowDown) => Some(Step::Next),
        _ => None,
    }
}

/// Step for a wheel event: negative delta along the axis goes back.
pub fn wheel_step(axis: Axis, delta_x: f64, delta_y: f64) -> Step {
    let delta = match axis {
        Axis::Horizontal => delta_x,
        Axis::Vertical => delta_y,
    };
    if delta < 0.0 {
        Step::Prev
    } else {
        Step::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_keys() {
        assert_eq!(key_step(Axis::Horizontal, Key::ArrowLeft), Some(Step::Prev));
        assert_eq!(key_step(Axis::Horizontal, Key::ArrowRight), Some(Step::Next));
        assert_eq!(key_step(Axis::Horizontal, Key::ArrowUp), None);
        assert_eq!(key_step(Axis::Horizontal, Key::Other), None);
    }

    #[test]
    fn vertical_keys() {
        assert_eq!(key_step(Axis::Vertical, Key::ArrowUp), Some(Step::Prev));
        assert_eq!(key_step(Axis::Vertical, Key::ArrowDown), Some(Step::Next));
        assert_eq!(key_step(Axis::Vertical, Key::ArrowLeft), None);
    }

    #[test]
    fn wheel_uses_axis_delta() {
        assert_eq!(wheel_step(Axis::Horizontal, -3.0, 50.0), Step::Prev);
        assert_eq!(wheel_step(Axis::Vertical, -3.0, 50.0), Step::Next);
        assert_eq!(wheel_step(Axis::Vertical, 0.0, 0.0), Step::Next);
    }

    #[test]
    fn pointer_along_axis() {
        let pos = PointerPos::new(10.0, 20.0);
        assert_eq!(pos.along(Axis::Horizontal), 10.0);
        assert_eq!(pos.along(Axis::Vertical), 20.0);
    }
}

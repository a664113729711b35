//! Drag tracking for swipe navigation.
//!
//! While the track is dragged every slide follows the pointer. On release the
//! drag either snaps back (short travel), steps once (the current slide is
//! still the centermost), or moves to whichever slide ended up centered.

/// Travel below which a release snaps back to the current slide.
pub const SWIPE_THRESHOLD_PX: f64 = 30.0;

/// A drag in progress, measured along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    origin: f64,
    last: f64,
    moved: bool,
}

/// How a finished drag resolves, before looking at slide geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeRelease {
    /// Not enough travel; return to the current slide.
    SnapBack,
    /// Far enough to navigate; pick the centermost slide.
    Navigate {
        /// Pointer moved toward the start of the track (left or up).
        toward_start: bool,
    },
}

impl SwipeGesture {
    /// Start a drag at `point`.
    pub fn begin(point: f64) -> Self {
        Self {
            origin: point,
            last: point,
            moved: false,
        }
    }

    /// Follow the pointer to `point`; returns the total drag distance so far.
    pub fn update(&mut self, point: f64) -> f64 {
        self.last = point;
        self.moved = true;
        self.delta()
    }

    /// Distance the track has been dragged, signed along the axis.
    pub fn delta(&self) -> f64 {
        self.last - self.origin
    }

    /// Whether the pointer moved since the drag started.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Resolve the drag released at `point`.
    pub fn release(&mut self, point: f64) -> SwipeRelease {
        self.last = point;
        let travel = self.origin - point;
        if travel.abs() < SWIPE_THRESHOLD_PX {
            SwipeRelease::SnapBack
        } else {
            SwipeRelease::Navigate {
                toward_start: travel > 0.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_accumulates_from_origin() {
        let mut gesture = SwipeGesture::begin(100.0);
        assert!(!gesture.has_moved());
        assert_eq!(gesture.update(90.0), -10.0);
        assert_eq!(gesture.update(40.0), -60.0);
        assert!(gesture.has_moved());
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut gesture = SwipeGesture::begin(100.0);
        assert_eq!(gesture.release(75.0), SwipeRelease::SnapBack);
        assert_eq!(gesture.release(129.0), SwipeRelease::SnapBack);
    }

    #[test]
    fn long_drag_navigates() {
        let mut gesture = SwipeGesture::begin(100.0);
        assert_eq!(
            gesture.release(40.0),
            SwipeRelease::Navigate { toward_start: true }
        );

        let mut back = SwipeGesture::begin(100.0);
        assert_eq!(
            back.release(130.0),
            SwipeRelease::Navigate { toward_start: false }
        );
    }

    #[test]
    fn release_updates_delta() {
        let mut gesture = SwipeGesture::begin(0.0);
        gesture.update(-20.0);
        gesture.release(-80.0);
        assert_eq!(gesture.delta(), -80.0);
    }
}

//! Single-slot timers driven by host timestamps.
//!
//! The carousel owns no clock. The host passes a monotonic millisecond
//! timestamp into every time-sensitive call; a [`Timer`] only remembers one
//! deadline, so arming it again replaces the previous one.

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// Quiet period after the last resize before the track is re-measured.
pub const RESIZE_DEBOUNCE_MS: Millis = 100;

/// Window after a wheel step in which further wheel events are ignored.
pub const WHEEL_DEBOUNCE_MS: Millis = 100;

/// A cancellable one-shot deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Millis>,
}

impl Timer {
    /// Fire `delay` ms after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Millis, delay: Millis) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Drop the pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Whether a deadline is set and has not been reached at `now`.
    pub fn is_pending(&self, now: Millis) -> bool {
        matches!(self.deadline, Some(deadline) if deadline > now)
    }

    /// Clear the deadline and report `true` if it has been reached at `now`.
    pub fn fire(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = Timer::default();
        assert!(!timer.is_pending(0));
        assert!(!timer.fire(u64::MAX));
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = Timer::default();
        timer.arm(1000, 600);

        assert!(timer.is_pending(1599));
        assert!(!timer.fire(1599));
        assert!(timer.fire(1600));
        assert!(!timer.fire(1700));
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn rearm_replaces_deadline() {
        let mut timer = Timer::default();
        timer.arm(0, 100);
        timer.arm(50, 100);
        assert!(!timer.fire(100));
        assert!(timer.fire(150));
    }

    #[test]
    fn cancel_clears() {
        let mut timer = Timer::default();
        timer.arm(0, 100);
        timer.cancel();
        assert!(!timer.fire(200));
    }

    #[test]
    fn arm_saturates() {
        let mut timer = Timer::default();
        timer.arm(u64::MAX - 1, 10);
        assert_eq!(timer.deadline(), Some(u64::MAX));
    }
}

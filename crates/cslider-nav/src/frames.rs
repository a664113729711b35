//! Post-layout work, handed to the host one animation frame at a time.
//!
//! A move computes its whole plan up front but nothing reaches the host until
//! the next frame, when layout has settled. Transition overrides for slides
//! that jumped are lifted one frame after that.

use std::collections::VecDeque;

use cslider_track::WrapPlan;
use serde::Serialize;

/// Something the host must do on a given frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FrameCommand {
    /// Turn transitions off for the whole frame.
    SuppressTransitions,
    /// Turn transitions back on for the whole frame.
    EnableTransitions,
    /// Write offsets and tags; slides flagged for an instant jump get a zero
    /// transition speed.
    Apply(WrapPlan),
    /// Remove the zero transition speed from these slides.
    RestoreTransitions {
        /// Display indices to restore.
        slides: Vec<usize>,
    },
}

/// Commands bucketed by how many frames from now they are due.
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    slots: VecDeque<Vec<FrameCommand>>,
}

impl FrameQueue {
    /// Run `command` on the `delay`-th upcoming frame (1 = the next one).
    pub fn schedule(&mut self, delay: usize, command: FrameCommand) {
        let slot = delay.max(1) - 1;
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, Vec::new);
        }
        self.slots[slot].push(command);
    }

    /// Commands due on this frame, in the order they were scheduled.
    pub fn next_frame(&mut self) -> Vec<FrameCommand> {
        self.slots.pop_front().unwrap_or_default()
    }

    /// Whether any frame still has work.
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Drop everything still scheduled.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_yields_nothing() {
        let mut queue = FrameQueue::default();
        assert!(queue.next_frame().is_empty());
        assert!(queue.is_idle());
    }

    #[test]
    fn commands_arrive_on_their_frame() {
        let mut queue = FrameQueue::default();
        queue.schedule(2, FrameCommand::RestoreTransitions { slides: vec![4] });
        queue.schedule(1, FrameCommand::SuppressTransitions);
        queue.schedule(2, FrameCommand::EnableTransitions);

        assert_eq!(queue.next_frame(), vec![FrameCommand::SuppressTransitions]);
        assert_eq!(
            queue.next_frame(),
            vec![
                FrameCommand::RestoreTransitions { slides: vec![4] },
                FrameCommand::EnableTransitions,
            ]
        );
        assert!(queue.is_idle());
    }

    #[test]
    fn zero_delay_means_next_frame() {
        let mut queue = FrameQueue::default();
        queue.schedule(0, FrameCommand::EnableTransitions);
        assert_eq!(queue.next_frame(), vec![FrameCommand::EnableTransitions]);
    }

    #[test]
    fn clear_drops_pending() {
        let mut queue = FrameQueue::default();
        queue.schedule(3, FrameCommand::EnableTransitions);
        queue.clear();
        assert!(queue.is_idle());
    }
}

//! Wrap planning: where every slide goes when the current slide changes.
//!
//! # Offsets
//!
//! All slides are translated by the same amount, `-c`, where `c` centers the
//! target slide in the frame. Slides too far from the target on one side are
//! translated a whole track length further so they reappear on the other
//! side. The window kept in place around the target `t` is
//!
//! ```text
//! overflow_left  = t + 1 - ceil(N / 2)
//! overflow_right = t + floor(N / 2)
//! ```
//!
//! and indices outside it get `-(c - track)` (below the window) or
//! `-(c + track)` (above it).
//!
//! # Instant jumps
//!
//! A slide that switches sides travels almost a full track. Comparing the
//! ring ranks of the old and new current slide gives the number of ring
//! positions crossed; that many slides from the front (moving forward) or
//! back (moving backward) of the old ring must jump without a transition.

use crate::index::{next_index, prev_index};
use crate::ring::OrderRing;
use crate::slides::SlideSet;
use crate::tags::SlideTags;

/// Where one slide goes after a move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Display index of the slide.
    pub display_index: usize,
    /// Signed translation along the scroll axis, in pixels.
    pub offset: f64,
    /// Classification after the move.
    pub tags: SlideTags,
    /// The slide changes sides and must not animate this frame.
    pub needs_instant_jump: bool,
}

/// Every slide's placement for one move.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrapPlan {
    /// Current slide before the move.
    pub from_index: usize,
    /// Current slide after the move.
    pub to_index: usize,
    /// Ring positions crossed; negative when moving forward.
    pub swap_amount: isize,
    /// Centering offset of the target slide.
    pub current_offset: f64,
    /// Lowest display index kept in place.
    pub overflow_left: isize,
    /// Highest display index kept in place.
    pub overflow_right: isize,
    placements: Vec<Placement>,
}

impl WrapPlan {
    /// Placements in display order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of `display_index`.
    pub fn get(&self, display_index: usize) -> Option<&Placement> {
        self.placements.get(display_index)
    }

    /// Display indices that must skip their transition.
    pub fn instant_jumps(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements
            .iter()
            .filter(|p| p.needs_instant_jump)
            .map(|p| p.display_index)
    }

    /// The slide whose center is nearest the frame center.
    ///
    /// `drag_delta` is added to every offset, as while the track is being
    /// dragged. Ties go to the lowest display index.
    pub fn centermost(&self, slides: &SlideSet, drag_delta: f64) -> Option<usize> {
        let frame_center = slides.frame_inner_size() / 2.0;
        let mut best: Option<(usize, f64)> = None;

        for placement in &self.placements {
            let Some(slide) = slides.get(placement.display_index) else {
                continue;
            };
            let center = slide.center() + placement.offset + drag_delta;
            let distance = (frame_center - center).abs();
            match best {
                Some((_, closest)) if closest <= distance => {}
                _ => best = Some((placement.display_index, distance)),
            }
        }

        best.map(|(index, _)| index)
    }
}

/// Computes [`WrapPlan`]s against a slide set and its current ring.
#[derive(Debug, Clone, Copy)]
pub struct WrapPlanner<'a> {
    slides: &'a SlideSet,
    ring: &'a OrderRing,
}

impl<'a> WrapPlanner<'a> {
    /// Planner over `slides`, with `ring` holding the order before the move.
    pub fn new(slides: &'a SlideSet, ring: &'a OrderRing) -> Self {
        debug_assert_eq!(slides.len(), ring.len(), "ring and slide set disagree");
        Self { slides, ring }
    }

    /// Plan a move from `from` to `to`.
    ///
    /// Returns `None` when `to` names no slide.
    pub fn plan(&self, from: usize, to: usize) -> Option<WrapPlan> {
        let current_offset = self.slides.centering_offset(to)?;
        let len = self.slides.len();
        let track_size = self.slides.track_size();

        let swap_amount = match (self.ring.rank(from), self.ring.rank(to)) {
            (Some(from_rank), Some(to_rank)) => from_rank as isize - to_rank as isize,
            _ => 0,
        };
        let jumping: Vec<usize> = if swap_amount < 0 {
            self.ring.front(swap_amount.unsigned_abs()).collect()
        } else {
            self.ring.back(swap_amount as usize).collect()
        };

        let target = to as isize;
        let overflow_right = target + (len / 2) as isize;
        let overflow_left = target + 1 - len.div_ceil(2) as isize;
        let next = next_index(to, len);
        let prev = prev_index(to, len);

        let placements = (0..len)
            .map(|display_index| {
                let index = display_index as isize;
                let mut tags = SlideTags::empty();

                let offset = if index < overflow_left {
                    tags |= SlideTags::SWAPPED_LTR;
                    -(current_offset - track_size)
                } else if index > overflow_right {
                    tags |= SlideTags::SWAPPED_RTL;
                    -(current_offset + track_size)
                } else {
                    -current_offset
                };

                if index == target {
                    tags |= SlideTags::CURRENT;
                } else if (index > target && index <= overflow_right) || index < overflow_left {
                    tags |= SlideTags::AFTER;
                } else if (index < target && index >= overflow_left) || index > overflow_right {
                    tags |= SlideTags::BEFORE;
                }

                if display_index == next {
                    tags |= SlideTags::NEXT | SlideTags::ADJACENT;
                }
                if display_index == prev {
                    tags |= SlideTags::PREV | SlideTags::ADJACENT;
                }

                Placement {
                    display_index,
                    offset,
                    tags,
                    needs_instant_jump: jumping.contains(&display_index),
                }
            })
            .collect();

        Some(WrapPlan {
            from_index: from,
            to_index: to,
            swap_amount,
            current_offset,
            overflow_left,
            overflow_right,
            placements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StaticTrack, TrackLayout};
    use proptest::prelude::*;

    /// `count` slides of 100px in a frame wide enough that nothing is duplicated.
    fn set_of(count: usize) -> SlideSet {
        let mut host = StaticTrack::uniform(count, (100.0, 100.0), (25.0 * count as f64, 100.0));
        SlideSet::build(&mut host, TrackLayout::default()).unwrap()
    }

    fn ring_at(len: usize, current: usize) -> OrderRing {
        let mut ring = OrderRing::identity(len);
        ring.recompute(current);
        ring
    }

    #[test]
    fn out_of_range_target_has_no_plan() {
        let slides = set_of(6);
        let ring = ring_at(6, 0);
        assert!(WrapPlanner::new(&slides, &ring).plan(0, 6).is_none());
        assert!(WrapPlanner::new(&slides, &ring).plan(0, 999).is_none());
    }

    #[test]
    fn thresholds_for_six_slides() {
        let slides = set_of(6);
        let ring = ring_at(6, 0);
        let plan = WrapPlanner::new(&slides, &ring).plan(0, 3).unwrap();

        assert_eq!(plan.overflow_right, 6);
        assert_eq!(plan.overflow_left, 1);
        // Slide 0 is below the window and wraps past the end.
        assert!(plan.get(0).unwrap().tags.contains(SlideTags::SWAPPED_LTR));
        assert!(plan.get(0).unwrap().tags.contains(SlideTags::AFTER));
    }

    #[test]
    fn offsets_center_target() {
        let slides = set_of(6);
        let ring = ring_at(6, 0);
        let plan = WrapPlanner::new(&slides, &ring).plan(0, 2).unwrap();

        // Slide 2 spans 200..300 in a 150px frame.
        let expected = 200.0 - 75.0 + 50.0;
        assert_eq!(plan.current_offset, expected);
        assert_eq!(plan.get(2).unwrap().offset, -expected);

        let centered = slides.get(2).unwrap().center() + plan.get(2).unwrap().offset;
        assert_eq!(centered, slides.frame_inner_size() / 2.0);
    }

    #[test]
    fn wrapped_slides_shift_by_track() {
        let slides = set_of(6);
        let ring = ring_at(6, 0);
        let plan = WrapPlanner::new(&slides, &ring).plan(0, 0).unwrap();

        // Window for target 0 is -2..=3: slides 4 and 5 go before the start.
        let c = plan.current_offset;
        let track = slides.track_size();
        for index in 0..=3 {
            assert_eq!(plan.get(index).unwrap().offset, -c);
        }
        for index in 4..=5 {
            let placement = plan.get(index).unwrap();
            assert_eq!(placement.offset, -(c + track));
            assert!(placement.tags.contains(SlideTags::SWAPPED_RTL | SlideTags::BEFORE));
        }
    }

    #[test]
    fn neighbors_are_adjacent() {
        let slides = set_of(6);
        let ring = ring_at(6, 5);
        let plan = WrapPlanner::new(&slides, &ring).plan(5, 5).unwrap();

        assert!(plan.get(0).unwrap().tags.contains(SlideTags::NEXT | SlideTags::ADJACENT));
        assert!(plan.get(4).unwrap().tags.contains(SlideTags::PREV | SlideTags::ADJACENT));
        assert!(!plan.get(2).unwrap().tags.contains(SlideTags::ADJACENT));
    }

    #[test]
    fn two_slides_share_neighbor() {
        let slides = set_of(2);
        let ring = ring_at(2, 0);
        let plan = WrapPlanner::new(&slides, &ring).plan(0, 1).unwrap();

        let other = plan.get(0).unwrap().tags;
        assert!(other.contains(SlideTags::NEXT | SlideTags::PREV | SlideTags::ADJACENT));
        assert!(plan.get(1).unwrap().tags.contains(SlideTags::CURRENT));
    }

    #[test]
    fn forward_move_jumps_front_of_ring() {
        let slides = set_of(6);
        let ring = ring_at(6, 0); // [4, 5, 0, 1, 2, 3]
        let plan = WrapPlanner::new(&slides, &ring).plan(0, 2).unwrap();

        assert_eq!(plan.swap_amount, -2);
        let jumps: Vec<_> = plan.instant_jumps().collect();
        assert_eq!(jumps, vec![4, 5]);
    }

    #[test]
    fn backward_move_jumps_back_of_ring() {
        let slides = set_of(6);
        let ring = ring_at(6, 0); // [4, 5, 0, 1, 2, 3]
        let plan = WrapPlanner::new(&slides, &ring).plan(0, 5).unwrap();

        assert_eq!(plan.swap_amount, 1);
        let jumps: Vec<_> = plan.instant_jumps().collect();
        assert_eq!(jumps, vec![3]);
    }

    #[test]
    fn staying_put_jumps_nothing() {
        let slides = set_of(6);
        let ring = ring_at(6, 3);
        let plan = WrapPlanner::new(&slides, &ring).plan(3, 3).unwrap();
        assert_eq!(plan.swap_amount, 0);
        assert_eq!(plan.instant_jumps().count(), 0);
    }

    #[test]
    fn centermost_follows_drag() {
        let slides = set_of(6);
        let ring = ring_at(6, 2);
        let plan = WrapPlanner::new(&slides, &ring).plan(2, 2).unwrap();

        assert_eq!(plan.centermost(&slides, 0.0), Some(2));
        assert_eq!(plan.centermost(&slides, -100.0), Some(3));
        assert_eq!(plan.centermost(&slides, 100.0), Some(1));
        assert_eq!(plan.centermost(&slides, -40.0), Some(2));
    }

    proptest! {
        #[test]
        fn every_slide_is_classified_once(len in 2usize..30, from in 0usize..30, to in 0usize..30) {
            let from = from % len;
            let to = to % len;
            let slides = set_of(len);
            let ring = ring_at(len, from);
            let plan = WrapPlanner::new(&slides, &ring).plan(from, to).unwrap();

            prop_assert_eq!(plan.placements().len(), len);

            let c = plan.current_offset;
            let track = slides.track_size();
            let mut current = 0;
            for placement in plan.placements() {
                let index = placement.display_index as isize;
                let tags = placement.tags;

                let expected = if index < plan.overflow_left {
                    -(c - track)
                } else if index > plan.overflow_right {
                    -(c + track)
                } else {
                    -c
                };
                prop_assert_eq!(placement.offset, expected);

                prop_assert!(!tags.contains(SlideTags::BEFORE | SlideTags::AFTER));
                prop_assert!(!tags.contains(SlideTags::SWAPPED_LTR | SlideTags::SWAPPED_RTL));

                if tags.contains(SlideTags::CURRENT) {
                    current += 1;
                    prop_assert_eq!(placement.display_index, to);
                    prop_assert!(!tags.intersects(SlideTags::BEFORE | SlideTags::AFTER));
                } else {
                    prop_assert!(tags.intersects(SlideTags::BEFORE | SlideTags::AFTER));
                }
            }
            prop_assert_eq!(current, 1);
            prop_assert_eq!(plan.instant_jumps().count(), plan.swap_amount.unsigned_abs());
        }
    }
}

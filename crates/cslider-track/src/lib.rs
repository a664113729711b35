//! cslider Track
//!
//! The index, order and offset engine behind an endlessly looping carousel.
//!
//! # Looping Without Clones At The Seam
//!
//! A carousel that loops has to show the last slides before the first one and
//! vice versa, without the track ever visibly running out. The track does it
//! in three steps:
//!
//! 1. **Duplication**: copies of the original slides are appended until the
//!    track is several frames long ([`SlideSet`]).
//! 2. **Ordering**: an [`OrderRing`] keeps every display index ranked by its
//!    distance from the current slide, rotated (never rebuilt) on every move.
//! 3. **Wrapping**: a [`WrapPlanner`] translates every slide so the target is
//!    centered, and moves slides that fall outside a window around the target
//!    by one track length to the other side.
//!
//! All display indices are taken modulo the slide count; see [`wrap_index`].

mod error;
mod host;
mod index;
mod planner;
mod ring;
mod slides;
mod tags;

pub use error::{Error, Result};
pub use host::{StaticTrack, TrackHost};
pub use index::{next_index, original_index, prev_index, wrap_index};
pub use planner::{Placement, WrapPlan, WrapPlanner};
pub use ring::{relative_rank_at, OrderRing};
pub use slides::{Axis, DuplicationReport, Slide, SlideSet, TrackLayout};
pub use tags::SlideTags;

/// Fewest original slides a looping track can be built from.
pub const MIN_SLIDES: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_slide_walkthrough() {
        // 6 × 100px in a 150px frame: no duplication needed.
        let mut host = StaticTrack::uniform(6, (100.0, 100.0), (150.0, 100.0));
        let slides = SlideSet::build(&mut host, TrackLayout::default()).unwrap();
        let mut ring = OrderRing::identity(slides.len());
        ring.recompute(0);

        let plan = WrapPlanner::new(&slides, &ring).plan(0, 3).unwrap();
        ring.recompute(3);

        assert_eq!(ring.at(0), Some(1));
        assert_eq!(ring.rank(3), Some(2));
        assert_eq!(original_index(plan.to_index, slides.original_count()), 3);

        let current: Vec<_> = plan
            .placements()
            .iter()
            .filter(|p| p.tags.contains(SlideTags::CURRENT))
            .map(|p| p.display_index)
            .collect();
        assert_eq!(current, vec![3]);
    }
}

//! The measurement seam between the track and whatever renders it.
//!
//! A host owns the real slide elements. The track only ever asks it for
//! sizes along the scroll axis, asks it to append another copy of the
//! original slides, and eventually asks it to put everything back.

use crate::slides::Axis;

/// Geometry and mutation the track needs from its host.
pub trait TrackHost {
    /// Whether the element the carousel mounts on exists.
    fn is_mounted(&self) -> bool {
        true
    }

    /// Number of slides the host started with, before any duplication.
    fn original_count(&self) -> usize;

    /// Number of slides currently in the track, duplicates included.
    fn slide_count(&self) -> usize;

    /// Inner size of the frame along `axis`, without padding and borders.
    fn frame_inner_size(&self, axis: Axis) -> f64;

    /// Size of every slide in the track along `axis`, in display order.
    fn slide_sizes(&self, axis: Axis) -> Vec<f64>;

    /// Length of the whole track along `axis`.
    fn track_size(&self, axis: Axis) -> f64;

    /// Force every slide to `size`, or release them to their natural size.
    fn force_slide_size(&mut self, size: Option<f64>);

    /// Append one copy of the original slides to the end of the track.
    fn append_original_set(&mut self);

    /// Undo every change made to the host's element tree.
    fn restore(&mut self);
}

/// In-memory host with fixed slide sizes.
///
/// Slides are laid out back to back, so the track size is the sum of the
/// slide sizes. Used by the simulator and by tests.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticTrack {
    original: Vec<(f64, f64)>,
    frame: (f64, f64),
    copies: usize,
    forced: Option<f64>,
    mounted: bool,
}

impl StaticTrack {
    /// Create a track from `(width, height)` pairs inside a frame of `frame` size.
    pub fn new(slides: Vec<(f64, f64)>, frame: (f64, f64)) -> Self {
        Self {
            original: slides,
            frame,
            copies: 1,
            forced: None,
            mounted: true,
        }
    }

    /// `count` identical slides of `size` inside a frame of `frame` size.
    pub fn uniform(count: usize, size: (f64, f64), frame: (f64, f64)) -> Self {
        Self::new(vec![size; count], frame)
    }

    /// A host whose mount target is missing.
    pub fn unmounted() -> Self {
        Self {
            mounted: false,
            ..Self::new(Vec::new(), (0.0, 0.0))
        }
    }

    /// Change the frame size, as a window resize would.
    pub fn set_frame(&mut self, frame: (f64, f64)) {
        self.frame = frame;
    }

    /// How many copies of the original set the track holds.
    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Size currently forced on every slide, if any.
    pub fn forced_size(&self) -> Option<f64> {
        self.forced
    }

    fn along(axis: Axis, (width, height): (f64, f64)) -> f64 {
        match axis {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }
}

impl TrackHost for StaticTrack {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn original_count(&self) -> usize {
        self.original.len()
    }

    fn slide_count(&self) -> usize {
        self.original.len() * self.copies
    }

    fn frame_inner_size(&self, axis: Axis) -> f64 {
        Self::along(axis, self.frame)
    }

    fn slide_sizes(&self, axis: Axis) -> Vec<f64> {
        let forced = self.forced;
        (0..self.copies)
            .flat_map(|_| self.original.iter())
            .map(|&slide| forced.unwrap_or_else(|| Self::along(axis, slide)))
            .collect()
    }

    fn track_size(&self, axis: Axis) -> f64 {
        self.slide_sizes(axis).iter().sum()
    }

    fn force_slide_size(&mut self, size: Option<f64>) {
        self.forced = size;
    }

    fn append_original_set(&mut self) {
        self.copies += 1;
    }

    fn restore(&mut self) {
        self.copies = 1;
        self.forced = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_follow_axis() {
        let track = StaticTrack::new(vec![(100.0, 50.0), (200.0, 60.0)], (300.0, 80.0));
        assert_eq!(track.slide_sizes(Axis::Horizontal), vec![100.0, 200.0]);
        assert_eq!(track.slide_sizes(Axis::Vertical), vec![50.0, 60.0]);
        assert_eq!(track.frame_inner_size(Axis::Vertical), 80.0);
        assert_eq!(track.track_size(Axis::Horizontal), 300.0);
    }

    #[test]
    fn append_duplicates_originals() {
        let mut track = StaticTrack::uniform(3, (100.0, 100.0), (400.0, 100.0));
        track.append_original_set();
        assert_eq!(track.slide_count(), 6);
        assert_eq!(track.original_count(), 3);
        assert_eq!(track.track_size(Axis::Horizontal), 600.0);
    }

    #[test]
    fn forced_size_overrides_natural() {
        let mut track = StaticTrack::new(vec![(100.0, 10.0), (250.0, 10.0)], (500.0, 10.0));
        track.force_slide_size(Some(500.0));
        assert_eq!(track.slide_sizes(Axis::Horizontal), vec![500.0, 500.0]);
        track.force_slide_size(None);
        assert_eq!(track.slide_sizes(Axis::Horizontal), vec![100.0, 250.0]);
    }

    #[test]
    fn restore_resets_copies() {
        let mut track = StaticTrack::uniform(2, (100.0, 100.0), (100.0, 100.0));
        let pristine = track.clone();
        track.append_original_set();
        track.force_slide_size(Some(42.0));
        track.restore();
        assert_eq!(track, pristine);
    }
}

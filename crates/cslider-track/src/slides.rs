//! Slide geometry and the duplication that makes looping seamless.
//!
//! A track has to be several frames long before wrapped slides can be moved
//! out of sight. Building a [`SlideSet`] keeps appending copies of the
//! original slides until the track reaches `frame × multiplier`, then lays
//! every slide out back to back.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::host::TrackHost;
use crate::index::original_index;
use crate::MIN_SLIDES;

/// Scroll direction of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Slides run left to right.
    #[default]
    Horizontal,
    /// Slides run top to bottom.
    Vertical,
}

impl Axis {
    /// How many frame lengths the track must cover to loop without gaps.
    pub const fn duplication_multiplier(self) -> f64 {
        match self {
            Axis::Horizontal => 4.0,
            Axis::Vertical => 5.0,
        }
    }

    /// Axis from a `vertical` flag.
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

/// How slides should be laid out along the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackLayout {
    /// Scroll axis.
    pub axis: Axis,
    /// Stretch every slide to the frame's inner size.
    pub single_mode: bool,
}

/// One slide in the (possibly duplicated) track.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// Position in the duplicated track.
    pub display_index: usize,
    /// Position in the host's original slide list.
    pub original_index: usize,
    /// Size along the scroll axis.
    pub size: f64,
    /// Distance from the start of the track to the slide's leading edge.
    pub leading_edge: f64,
}

impl Slide {
    /// Position of the slide's center along the track.
    pub fn center(&self) -> f64 {
        self.leading_edge + self.size / 2.0
    }
}

/// Outcome of growing the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuplicationReport {
    /// Copies of the original set appended during this build.
    pub rounds: usize,
    /// Track length the build aimed for.
    pub target_size: f64,
    /// Track length actually reached.
    pub reached_size: f64,
    /// An appended copy did not grow the track, so duplication stopped early.
    pub stalled: bool,
}

/// Ordered slides with their geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideSet {
    slides: Vec<Slide>,
    original_count: usize,
    frame_inner_size: f64,
    track_size: f64,
    axis: Axis,
    report: DuplicationReport,
}

impl SlideSet {
    /// Measure the host, grow its track and lay the slides out.
    ///
    /// Calling this again after a resize continues duplication from the
    /// host's current track, so the set never shrinks.
    pub fn build<H: TrackHost + ?Sized>(host: &mut H, layout: TrackLayout) -> Result<Self> {
        if !host.is_mounted() {
            return Err(Error::MissingMount);
        }

        let original_count = host.original_count();
        if original_count < MIN_SLIDES {
            return Err(Error::TooFewSlides {
                found: original_count,
                min: MIN_SLIDES,
            });
        }

        let axis = layout.axis;
        let frame_inner_size = host.frame_inner_size(axis);
        if !frame_inner_size.is_finite() || frame_inner_size < 0.0 {
            return Err(Error::InvalidFrameSize(frame_inner_size));
        }

        host.force_slide_size(layout.single_mode.then_some(frame_inner_size));
        let report = grow_track(host, axis, frame_inner_size);

        let expected = host.slide_count();
        let sizes = host.slide_sizes(axis);
        if sizes.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                reported: sizes.len(),
            });
        }

        let mut leading_edge = 0.0;
        let slides = sizes
            .into_iter()
            .enumerate()
            .map(|(display_index, natural)| {
                let size = if layout.single_mode {
                    frame_inner_size
                } else {
                    natural
                };
                let slide = Slide {
                    display_index,
                    original_index: original_index(display_index, original_count),
                    size,
                    leading_edge,
                };
                leading_edge += size;
                slide
            })
            .collect::<Vec<_>>();

        debug!(
            slides = slides.len(),
            original_count,
            frame_inner_size,
            track_size = report.reached_size,
            "slide set built"
        );

        Ok(Self {
            slides,
            original_count,
            frame_inner_size,
            track_size: report.reached_size,
            axis,
            report,
        })
    }

    /// Number of slides, duplicates included.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the set holds no slides. Never true for a built set.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of slides the host started with.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Inner size of the frame along the scroll axis.
    pub fn frame_inner_size(&self) -> f64 {
        self.frame_inner_size
    }

    /// Length of the track along the scroll axis.
    pub fn track_size(&self) -> f64 {
        self.track_size
    }

    /// Scroll axis the set was measured along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// What happened while growing the track.
    pub fn duplication(&self) -> &DuplicationReport {
        &self.report
    }

    /// Slide at `display_index`.
    pub fn get(&self, display_index: usize) -> Option<&Slide> {
        self.slides.get(display_index)
    }

    /// Whether `display_index` names a slide.
    pub fn contains(&self, display_index: usize) -> bool {
        display_index < self.slides.len()
    }

    /// All slides in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Offset that puts the center of `display_index` on the frame's center.
    pub fn centering_offset(&self, display_index: usize) -> Option<f64> {
        self.get(display_index)
            .map(|slide| slide.leading_edge - self.frame_inner_size / 2.0 + slide.size / 2.0)
    }
}

/// Append original sets until the track covers `frame × multiplier`.
///
/// An empty track is left as is. A copy that does not change the track length
/// means the host cannot grow it, so duplication stops there.
fn grow_track<H: TrackHost + ?Sized>(host: &mut H, axis: Axis, frame: f64) -> DuplicationReport {
    let target_size = frame * axis.duplication_multiplier();
    let mut report = DuplicationReport {
        rounds: 0,
        target_size,
        reached_size: host.track_size(axis),
        stalled: false,
    };

    if report.reached_size <= 0.0 {
        return report;
    }

    while report.reached_size < target_size {
        host.append_original_set();
        report.rounds += 1;

        let grown = host.track_size(axis);
        if grown <= report.reached_size {
            report.stalled = true;
            warn!(
                rounds = report.rounds,
                track_size = grown,
                target_size,
                "track size did not change after duplicating slides, duplication aborted"
            );
            break;
        }
        report.reached_size = grown;
    }

    report
}

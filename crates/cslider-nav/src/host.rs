//! What the carousel needs from its host beyond track measurement.

use cslider_track::{StaticTrack, TrackHost};

/// Which navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Prev,
    Next,
}

/// A [`TrackHost`] that can also mount navigation buttons.
pub trait CarouselHost: TrackHost {
    /// Create the button for `kind` inside its wrapper element.
    ///
    /// Returns `false` when the wrapper does not exist; the carousel then goes
    /// on without that button.
    fn mount_button(&mut self, kind: ButtonKind) -> bool;
}

impl CarouselHost for StaticTrack {
    fn mount_button(&mut self, _kind: ButtonKind) -> bool {
        true
    }
}

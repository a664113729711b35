//! Per-slide classification produced by a wrap plan.

bitflags::bitflags! {
    /// Classification of one slide after a move.
    ///
    /// Combine with bitwise OR: `SlideTags::NEXT | SlideTags::ADJACENT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SlideTags: u8 {
        /// The active, centered slide.
        const CURRENT = 1 << 0;
        /// Visually precedes the current slide.
        const BEFORE = 1 << 1;
        /// Visually follows the current slide.
        const AFTER = 1 << 2;
        /// Moved from the start of the strip to past its end.
        const SWAPPED_LTR = 1 << 3;
        /// Moved from the end of the strip to before its start.
        const SWAPPED_RTL = 1 << 4;
        /// Immediately follows the current slide in display order.
        const NEXT = 1 << 5;
        /// Immediately precedes the current slide in display order.
        const PREV = 1 << 6;
        /// Either neighbor of the current slide.
        const ADJACENT = 1 << 7;
    }
}

impl SlideTags {
    const CLASS_NAMES: [(SlideTags, &'static str); 8] = [
        (SlideTags::CURRENT, "csl-current"),
        (SlideTags::BEFORE, "csl-before"),
        (SlideTags::AFTER, "csl-after"),
        (SlideTags::SWAPPED_LTR, "csl-swapped-ltr"),
        (SlideTags::SWAPPED_RTL, "csl-swapped-rtl"),
        (SlideTags::NEXT, "csl-next"),
        (SlideTags::PREV, "csl-prev"),
        (SlideTags::ADJACENT, "csl-adjacent"),
    ];

    /// Stylesheet class names for the set tags, in a stable order.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        Self::CLASS_NAMES
            .into_iter()
            .filter(move |(tag, _)| self.contains(*tag))
            .map(|(_, name)| name)
    }

    /// Whether the slide was swapped to the other edge of the strip.
    pub fn is_swapped(self) -> bool {
        self.intersects(SlideTags::SWAPPED_LTR | SlideTags::SWAPPED_RTL)
    }
}

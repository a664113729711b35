//! Order ring: the visual ordering of slides around the current one.
//!
//! The ring is a cyclic permutation of all display indices. Position 0 holds
//! the slide that is furthest "behind" the current slide, the current slide
//! sits at position `floor((N - 1) / 2)`, and the rest follow it. For an even
//! slide count the center biases toward the earlier half.
//!
//! The ring is rotated in place rather than rebuilt, so the rank of every
//! index before a move can be compared with its rank after it. The wrap
//! planner relies on that to find the slides that change sides.

use std::collections::VecDeque;

use crate::index::wrap_index;

/// Rotating permutation of display indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderRing {
    order: VecDeque<usize>,
}

impl OrderRing {
    /// Ring in display order: `[0, 1, ..., len - 1]`.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    /// Replace the ring with the identity ordering for `len` slides.
    pub fn reset(&mut self, len: usize) {
        self.order.clear();
        self.order.extend(0..len);
    }

    /// Number of slides in the ring.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the ring holds no slides.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ring position of the current slide for a ring of `len` slides.
    pub const fn center_position(len: usize) -> usize {
        len.saturating_sub(1) / 2
    }

    /// The display index that must sit at position 0 when `current` is centered.
    pub fn first_index_for(current: usize, len: usize) -> usize {
        wrap_index(current as isize - Self::center_position(len) as isize, len)
    }

    /// Rotate the ring until `current` is centered.
    ///
    /// Single-step left rotations, bounded by the ring length. Rings of one or
    /// zero slides are left alone.
    pub fn recompute(&mut self, current: usize) {
        let len = self.order.len();
        if len <= 1 {
            return;
        }

        let first = Self::first_index_for(current, len);
        let mut steps = 0;
        while self.order.front() != Some(&first) {
            steps += 1;
            if steps > len {
                break;
            }
            self.order.rotate_left(1);
        }
    }

    /// Position of `index` in the ring.
    pub fn rank(&self, index: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == index)
    }

    /// Signed distance of `index` from the center position.
    ///
    /// Negative ranks are before the current slide, 0 is the current slide.
    pub fn relative_rank(&self, index: usize) -> Option<isize> {
        self.rank(index)
            .map(|position| relative_rank_at(position, self.order.len()))
    }

    /// Display index at ring position `position`.
    pub fn at(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    /// The first `count` entries of the ring.
    pub fn front(&self, count: usize) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied().take(count)
    }

    /// The last `count` entries of the ring, last first.
    pub fn back(&self, count: usize) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().rev().copied().take(count)
    }

    /// Iterate display indices in ring order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Ring contents as a vector.
    pub fn to_vec(&self) -> Vec<usize> {
        self.order.iter().copied().collect()
    }
}

/// Relative rank of ring position `position` in a ring of `len` slides.
///
/// `floor(-len / 2) + position + 1`.
pub fn relative_rank_at(position: usize, len: usize) -> isize {
    (-(len as isize)).div_euclid(2) + position as isize + 1
}

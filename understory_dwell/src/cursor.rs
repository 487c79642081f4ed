// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor identities and fixed per-cursor storage.
//!
//! Every tracked input source (a fingertip, a palm, the head gaze) has one
//! [`CursorType`]. Per-cursor records live in a [`PerCursor`] array indexed by
//! the cursor's ordinal, so every identity always has exactly one entry.

use core::ops::{Index, IndexMut};

/// A distinct input source that can highlight menu items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CursorType {
    /// Left palm center.
    LeftPalm,
    /// Left thumb tip.
    LeftThumb,
    /// Left index fingertip.
    LeftIndex,
    /// Left middle fingertip.
    LeftMiddle,
    /// Left ring fingertip.
    LeftRing,
    /// Left pinky fingertip.
    LeftPinky,
    /// Right palm center.
    RightPalm,
    /// Right thumb tip.
    RightThumb,
    /// Right index fingertip.
    RightIndex,
    /// Right middle fingertip.
    RightMiddle,
    /// Right ring fingertip.
    RightRing,
    /// Right pinky fingertip.
    RightPinky,
    /// Head gaze.
    Look,
}

impl CursorType {
    /// Number of cursor identities.
    pub const COUNT: usize = 13;

    /// Every cursor identity, in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::LeftPalm,
        Self::LeftThumb,
        Self::LeftIndex,
        Self::LeftMiddle,
        Self::LeftRing,
        Self::LeftPinky,
        Self::RightPalm,
        Self::RightThumb,
        Self::RightIndex,
        Self::RightMiddle,
        Self::RightRing,
        Self::RightPinky,
        Self::Look,
    ];

    /// Dense ordinal in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for cursors attached to the left hand.
    pub const fn is_left(self) -> bool {
        matches!(
            self,
            Self::LeftPalm
                | Self::LeftThumb
                | Self::LeftIndex
                | Self::LeftMiddle
                | Self::LeftRing
                | Self::LeftPinky
        )
    }

    /// True for cursors attached to the right hand.
    pub const fn is_right(self) -> bool {
        matches!(
            self,
            Self::RightPalm
                | Self::RightThumb
                | Self::RightIndex
                | Self::RightMiddle
                | Self::RightRing
                | Self::RightPinky
        )
    }
}

/// One value per [`CursorType`], stored inline.
///
/// Keys are never missing: the array is filled at construction and has a
/// constant size for its whole lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerCursor<T> {
    values: [T; CursorType::COUNT],
}

impl<T: Copy> PerCursor<T> {
    /// Create storage with every cursor set to `value`.
    pub const fn splat(value: T) -> Self {
        Self {
            values: [value; CursorType::COUNT],
        }
    }

    /// Reset every cursor to `value`.
    pub fn fill(&mut self, value: T) {
        self.values = [value; CursorType::COUNT];
    }
}

impl<T> PerCursor<T> {
    /// Iterate `(cursor, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (CursorType, &T)> + '_ {
        CursorType::ALL.into_iter().zip(self.values.iter())
    }

    /// Iterate values in ordinal order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }
}

impl<T: Default + Copy> Default for PerCursor<T> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T> Index<CursorType> for PerCursor<T> {
    type Output = T;

    #[inline]
    fn index(&self, cursor: CursorType) -> &T {
        &self.values[cursor.index()]
    }
}

impl<T> IndexMut<CursorType> for PerCursor<T> {
    #[inline]
    fn index_mut(&mut self, cursor: CursorType) -> &mut T {
        &mut self.values[cursor.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_all_order() {
        for (i, c) in CursorType::ALL.iter().enumerate() {
            assert_eq!(c.index(), i, "ordinal of {c:?}");
        }
        assert_eq!(CursorType::Look.index(), CursorType::COUNT - 1);
    }

    #[test]
    fn handedness() {
        assert!(CursorType::LeftIndex.is_left());
        assert!(!CursorType::LeftIndex.is_right());
        assert!(CursorType::RightPalm.is_right());
        assert!(!CursorType::Look.is_left() && !CursorType::Look.is_right());
    }

    #[test]
    fn per_cursor_index_and_fill() {
        let mut p = PerCursor::splat(0_u8);
        p[CursorType::RightIndex] = 7;
        assert_eq!(p[CursorType::RightIndex], 7);
        assert_eq!(p[CursorType::LeftIndex], 0);
        assert_eq!(p.values().count(), CursorType::COUNT);

        p.fill(3);
        assert!(p.iter().all(|(_, v)| *v == 3));
    }
}

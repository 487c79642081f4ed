// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-item nearest arbitration.
//!
//! [`ItemState`] never looks at its siblings. After every item of a menu has
//! run its highlight update for a frame, a comparator decides which item each
//! cursor favors and reports the outcome through
//! [`ItemState::set_as_nearest_button`]. This module is a reference comparator
//! over a slice of item states.
//!
//! Every item with a finite distance for the cursor is a candidate, including
//! items beyond highlight range, so a sticky selection keeps its release curve
//! until the cursor reaches the release distance. Lower distance is nearer.
//! Equal-distance ties are stable with respect to slice order and the last
//! candidate wins.

use crate::cursor::CursorType;
use crate::item::MenuItem;
use crate::state::ItemState;

/// Index of the item nearest to `cursor`, if any item has a finite distance.
pub fn nearest_item<I: MenuItem>(states: &[ItemState<I>], cursor: CursorType) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, state) in states.iter().enumerate() {
        let distance = state.highlight_distance(cursor);
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, d)) if distance > d => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Mark the nearest item for `cursor` and clear the flag on every other item.
///
/// Returns the index of the winner.
pub fn assign_nearest<I: MenuItem>(
    states: &mut [ItemState<I>],
    cursor: CursorType,
) -> Option<usize> {
    let winner = nearest_item(states, cursor);
    for (i, state) in states.iter_mut().enumerate() {
        state.set_as_nearest_button(cursor, Some(i) == winner);
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::InteractionSettings;
    use alloc::vec::Vec;
    use glam::Vec3;

    #[derive(Debug)]
    struct Plain;

    impl MenuItem for Plain {
        fn is_enabled(&self) -> bool {
            true
        }
        fn allow_selection(&self) -> bool {
            true
        }
        fn is_sticky_selected(&self) -> bool {
            false
        }
        fn select(&mut self) {}
        fn deselect_sticky_selections(&mut self) {}
    }

    const C: CursorType = CursorType::LeftIndex;

    // Items placed along x; distance is |x - position|.
    fn row(xs: &[f32]) -> Vec<ItemState<Plain>> {
        let settings = InteractionSettings {
            highlight_distance_min: 0.1,
            highlight_distance_max: 1.0,
            selection_milliseconds: 100,
            sticky_release_distance: 0.5,
        };
        xs.iter()
            .map(|&x| ItemState::with_distance_field(Plain, settings, move |p: Vec3| (p.x - x).abs()))
            .collect()
    }

    fn update_all(states: &mut [ItemState<Plain>], x: f32) {
        for s in states.iter_mut() {
            s.update_with_cursor(C, Some(Vec3::new(x, 0.0, 0.0))).unwrap();
        }
    }

    #[test]
    fn picks_lowest_distance() {
        let mut states = row(&[0.0, 0.5, 1.0]);
        update_all(&mut states, 0.6);
        assert_eq!(assign_nearest(&mut states, C), Some(1));
        assert!(states[1].is_nearest_highlight_for(C));
        assert!(!states[0].is_nearest_highlight_for(C));
        assert!(!states[2].is_nearest_highlight_for(C));
    }

    #[test]
    fn items_beyond_highlight_range_are_candidates() {
        let mut states = row(&[0.0, 5.0]);
        update_all(&mut states, 3.0);
        assert_eq!(states[1].highlight_progress(C), 0.0);
        assert_eq!(assign_nearest(&mut states, C), Some(1));
        assert!(!states[0].is_nearest_highlight());
    }

    #[test]
    fn animating_items_are_not_candidates() {
        let mut states = row(&[0.0]);
        states[0].set_is_animating(true);
        update_all(&mut states, 0.0);
        assert_eq!(assign_nearest(&mut states, C), None);
    }

    #[test]
    fn absent_cursor_clears_previous_winner() {
        let mut states = row(&[0.0, 0.5]);
        update_all(&mut states, 0.0);
        assert_eq!(assign_nearest(&mut states, C), Some(0));
        for s in states.iter_mut() {
            s.update_with_cursor(C, None).unwrap();
        }
        assert_eq!(assign_nearest(&mut states, C), None);
        assert!(!states[0].is_nearest_highlight_for(C));
    }

    #[test]
    fn ties_resolve_to_last() {
        let mut states = row(&[0.0, 0.4, 0.4]);
        update_all(&mut states, 0.4);
        assert_eq!(nearest_item(&states, C), Some(2));
    }

    #[test]
    fn cursors_are_arbitrated_independently() {
        let mut states = row(&[0.0, 0.5]);
        update_all(&mut states, 0.0);
        for s in states.iter_mut() {
            s.update_with_cursor(CursorType::RightIndex, Some(Vec3::new(0.5, 0.0, 0.0)))
                .unwrap();
        }
        assert_eq!(assign_nearest(&mut states, C), Some(0));
        assert_eq!(assign_nearest(&mut states, CursorType::RightIndex), Some(1));
        assert!(states[0].is_nearest_highlight());
        assert!(states[1].is_nearest_highlight());
        assert!(!states[0].is_nearest_highlight_for(CursorType::RightIndex));
    }
}

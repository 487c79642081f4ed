// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame driver: highlight, then nearest, then selection.
//!
//! The three passes over a menu's items must run in this order every frame.
//! Nearness compares every item's distance, so it can only be decided after
//! the whole highlight pass, and the selection committer reads the nearest
//! flags. [`run_frame`] performs the passes for a slice of items and reports
//! what happened.
//!
//! ```
//! use core::time::Duration;
//! use glam::Vec3;
//! use understory_dwell::frame::{CursorPositions, run_frame};
//! use understory_dwell::{CursorType, InteractionSettings, ItemState, MenuItem};
//!
//! struct Entry;
//! impl MenuItem for Entry {
//!     fn is_enabled(&self) -> bool { true }
//!     fn allow_selection(&self) -> bool { true }
//!     fn is_sticky_selected(&self) -> bool { false }
//!     fn select(&mut self) {}
//!     fn deselect_sticky_selections(&mut self) {}
//! }
//!
//! let settings = InteractionSettings::default();
//! let mut items = vec![
//!     ItemState::with_distance_field(Entry, settings, |p: Vec3| p.distance(Vec3::X)),
//!     ItemState::with_distance_field(Entry, settings, |p: Vec3| p.distance(-Vec3::X)),
//! ];
//! let mut cursors = CursorPositions::splat(None);
//! cursors[CursorType::LeftIndex] = Some(-Vec3::X);
//!
//! let report = run_frame(&mut items, &cursors, Duration::ZERO).unwrap();
//! assert_eq!(report.nearest[CursorType::LeftIndex], Some(1));
//! assert!(report.selected.is_empty());
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use glam::Vec3;

use crate::arbiter::assign_nearest;
use crate::cursor::{CursorType, PerCursor};
use crate::item::MenuItem;
use crate::state::{ItemState, StateError};

/// Cursor positions for one frame; `None` means the cursor is not tracking.
pub type CursorPositions = PerCursor<Option<Vec3>>;

/// Outcome of one [`run_frame`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Indices of items whose selection committed this frame, in slice order.
    pub selected: Vec<usize>,
    /// Winning item per cursor, if any item had a finite distance for it.
    pub nearest: PerCursor<Option<usize>>,
}

/// Run the highlight, nearest, and selection passes over `states`.
///
/// An error from the highlight pass aborts the frame before any nearest flag
/// or selection session is touched.
pub fn run_frame<I: MenuItem>(
    states: &mut [ItemState<I>],
    cursors: &CursorPositions,
    now: Duration,
) -> Result<FrameReport, StateError> {
    for (i, state) in states.iter_mut().enumerate() {
        for (cursor, position) in cursors.iter() {
            state.update_with_cursor(cursor, *position).inspect_err(|e| {
                log::warn!("frame aborted in highlight pass for item {i}: {e}");
            })?;
        }
    }

    let mut nearest = PerCursor::splat(None);
    for cursor in CursorType::ALL {
        nearest[cursor] = assign_nearest(states, cursor);
    }

    let selected = states
        .iter_mut()
        .enumerate()
        .filter_map(|(i, state)| state.update_selection_process(now).then_some(i))
        .collect();

    Ok(FrameReport { selected, nearest })
}

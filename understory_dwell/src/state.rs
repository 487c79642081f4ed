// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item highlight, nearest, and dwell-selection state.
//!
//! ## Frame protocol
//!
//! Each frame, for every item:
//! 1) [`ItemState::update_with_cursor`] once per cursor (any order among cursors).
//! 2) After *every* item has been updated, [`ItemState::set_as_nearest_button`]
//!    once per cursor. Nearness is a cross-item comparison; see
//!    [`arbiter`](crate::arbiter).
//! 3) [`ItemState::update_selection_process`] once. It returns `true` on the
//!    single frame a selection commits.
//!
//! [`run_frame`](crate::frame::run_frame) performs the three passes in order.
//!
//! ## Selection lifecycle
//!
//! Dwell starts on the first frame an item is nearest for some cursor and fully
//! highlighted. Once `selection_milliseconds` elapse with both conditions
//! holding, the item selects and the prevention latch engages. The latch only
//! releases after the item stops being nearest or drops below full highlight,
//! so a continued hover never re-fires.
//!
//! ```
//! use core::time::Duration;
//! use glam::Vec3;
//! use understory_dwell::{CursorType, InteractionSettings, ItemState, MenuItem};
//!
//! #[derive(Default)]
//! struct Button { clicks: u32 }
//! impl MenuItem for Button {
//!     fn is_enabled(&self) -> bool { true }
//!     fn allow_selection(&self) -> bool { true }
//!     fn is_sticky_selected(&self) -> bool { false }
//!     fn select(&mut self) { self.clicks += 1; }
//!     fn deselect_sticky_selections(&mut self) {}
//! }
//!
//! let mut state = ItemState::with_distance_field(
//!     Button::default(),
//!     InteractionSettings::default(),
//!     |p: Vec3| p.length(),
//! );
//! let cursor = CursorType::RightIndex;
//! let mut fired = false;
//! for frame in 0..30_u64 {
//!     state.update_with_cursor(cursor, Some(Vec3::ZERO)).unwrap();
//!     state.set_as_nearest_button(cursor, true);
//!     fired |= state.update_selection_process(Duration::from_millis(frame * 20));
//! }
//! assert!(fired);
//! assert_eq!(state.item().clicks, 1);
//! assert!(state.is_selection_prevented());
//! ```

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use glam::Vec3;
use thiserror::Error;

use crate::cursor::{CursorType, PerCursor};
use crate::item::{DistanceField, MenuItem};
use crate::settings::InteractionSettings;
use crate::util::inverse_lerp;

/// Distance recorded for a cursor that is not highlighting the item this frame.
pub const FAR_DISTANCE: f32 = f32::INFINITY;

/// Errors from [`ItemState`] updates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// A highlight update needed a distance field, but none was set.
    #[error("no cursor distance function has been set")]
    MissingDistanceFunction,
}

/// Conceptual phase of the selection committer.
///
/// Derived from the current state; see [`ItemState::selection_phase`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No dwell, no latch, no sticky selection.
    Idle,
    /// Dwell timer running since `start`.
    Dwelling {
        /// Host timestamp of the frame dwell began.
        start: Duration,
    },
    /// A selection fired and the hover has not yet disengaged.
    Prevented,
    /// The item is sticky-selected and progress follows the release curve.
    StickyReleasing,
}

/// Interaction state for a single menu item.
///
/// Holds per-cursor highlight records, the externally assigned nearest flags,
/// and the dwell selection session. Timestamps are host-supplied monotonic
/// durations since any fixed epoch (for example the app start).
pub struct ItemState<I> {
    item: I,
    settings: InteractionSettings,
    distance_field: Option<Box<dyn DistanceField>>,
    distances: PerCursor<f32>,
    progress: PerCursor<f32>,
    nearest: PerCursor<bool>,
    selection_start: Option<Duration>,
    is_selection_prevented: bool,
    is_animating: bool,
    distance_upon_selection: f32,
}

impl<I: fmt::Debug> fmt::Debug for ItemState<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemState")
            .field("item", &self.item)
            .field("settings", &self.settings)
            .field("has_distance_field", &self.distance_field.is_some())
            .field("distances", &self.distances)
            .field("progress", &self.progress)
            .field("nearest", &self.nearest)
            .field("selection_start", &self.selection_start)
            .field("is_selection_prevented", &self.is_selection_prevented)
            .field("is_animating", &self.is_animating)
            .field("distance_upon_selection", &self.distance_upon_selection)
            .finish()
    }
}

impl<I: MenuItem> ItemState<I> {
    /// Create state for `item` with no distance field yet.
    ///
    /// Call [`set_cursor_distance_function`](Self::set_cursor_distance_function)
    /// before the first highlight update that has a cursor position.
    pub fn new(item: I, settings: InteractionSettings) -> Self {
        Self {
            item,
            settings,
            distance_field: None,
            distances: PerCursor::splat(FAR_DISTANCE),
            progress: PerCursor::splat(0.0),
            nearest: PerCursor::splat(false),
            selection_start: None,
            is_selection_prevented: false,
            is_animating: false,
            distance_upon_selection: 0.0,
        }
    }

    /// Create state for `item` with its distance field already set.
    pub fn with_distance_field(
        item: I,
        settings: InteractionSettings,
        field: impl DistanceField + 'static,
    ) -> Self {
        let mut state = Self::new(item, settings);
        state.set_cursor_distance_function(field);
        state
    }

    /// The item this state belongs to.
    pub fn item(&self) -> &I {
        &self.item
    }

    /// Mutable access to the item (for toggling flags between frames).
    pub fn item_mut(&mut self) -> &mut I {
        &mut self.item
    }

    /// Consume the state and return the item.
    pub fn into_item(self) -> I {
        self.item
    }

    /// The settings this state was created with.
    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    /// Set the function measuring cursor distance to this item.
    pub fn set_cursor_distance_function(&mut self, field: impl DistanceField + 'static) {
        self.distance_field = Some(Box::new(field));
    }

    /// Mark the item as mid-transition. While animating it never highlights.
    pub fn set_is_animating(&mut self, is_animating: bool) {
        self.is_animating = is_animating;
    }

    /// Whether the item is flagged as mid-transition.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Last distance recorded for `cursor` ([`FAR_DISTANCE`] if not highlighting).
    pub fn highlight_distance(&self, cursor: CursorType) -> f32 {
        self.distances[cursor]
    }

    /// Last highlight progress recorded for `cursor`, in `[0, 1]`.
    pub fn highlight_progress(&self, cursor: CursorType) -> f32 {
        self.progress[cursor]
    }

    /// Whether the arbiter marked this item nearest for `cursor`.
    pub fn is_nearest_highlight_for(&self, cursor: CursorType) -> bool {
        self.nearest[cursor]
    }

    /// Smallest distance across all cursors.
    pub fn min_highlight_distance(&self) -> f32 {
        self.distances.values().copied().fold(FAR_DISTANCE, f32::min)
    }

    /// Largest highlight progress across all cursors.
    pub fn max_highlight_progress(&self) -> f32 {
        self.progress.values().copied().fold(0.0, f32::max)
    }

    /// Whether any cursor has this item as its nearest.
    pub fn is_nearest_highlight(&self) -> bool {
        self.nearest.values().any(|&n| n)
    }

    /// Whether the one-shot latch is blocking re-selection.
    pub fn is_selection_prevented(&self) -> bool {
        self.is_selection_prevented
    }

    /// Dwell fill ratio, or the sticky release curve when no dwell is running.
    ///
    /// While dwelling this is `elapsed / selection_milliseconds`, clamped to 1.
    /// Otherwise it is 0 unless the item is sticky-selected, in which case it
    /// falls from 1 at the distance captured on selection to 0 at
    /// `sticky_release_distance`.
    pub fn selection_progress(&self, now: Duration) -> f32 {
        let Some(start) = self.selection_start else {
            if !self.item.is_sticky_selected() {
                return 0.0;
            }
            return inverse_lerp(
                self.settings.sticky_release_distance,
                self.distance_upon_selection,
                self.min_highlight_distance(),
            );
        };

        let total = self.settings.selection_milliseconds;
        if total == 0 {
            return 1.0;
        }
        let elapsed_ms = now.saturating_sub(start).as_secs_f32() * 1000.0;
        (elapsed_ms / total as f32).min(1.0)
    }

    /// Current conceptual phase of the selection committer.
    pub fn selection_phase(&self) -> SelectionPhase {
        if let Some(start) = self.selection_start {
            SelectionPhase::Dwelling { start }
        } else if self.is_selection_prevented {
            SelectionPhase::Prevented
        } else if self.item.is_sticky_selected() {
            SelectionPhase::StickyReleasing
        } else {
            SelectionPhase::Idle
        }
    }

    /// Return all per-cursor records and the selection session to their
    /// post-construction defaults. The distance field and animating flag are kept.
    pub fn reset(&mut self) {
        self.distances.fill(FAR_DISTANCE);
        self.progress.fill(0.0);
        self.nearest.fill(false);
        self.selection_start = None;
        self.is_selection_prevented = false;
        self.distance_upon_selection = 0.0;
    }

    /// Update the highlight record for `cursor`.
    ///
    /// An absent position, an animating item, or a disabled item records
    /// [`FAR_DISTANCE`] and zero progress. Otherwise the distance field is
    /// evaluated and progress is remapped from
    /// `[highlight_distance_max, highlight_distance_min]` onto `[0, 1]`.
    ///
    /// Fails with [`StateError::MissingDistanceFunction`] if a distance is
    /// needed and no field was set; the record is left untouched.
    pub fn update_with_cursor(
        &mut self,
        cursor: CursorType,
        position: Option<Vec3>,
    ) -> Result<(), StateError> {
        let position = match position {
            Some(p) if !self.is_animating && self.item.is_enabled() => p,
            _ => {
                self.distances[cursor] = FAR_DISTANCE;
                self.progress[cursor] = 0.0;
                return Ok(());
            }
        };

        let field = self
            .distance_field
            .as_deref()
            .ok_or(StateError::MissingDistanceFunction)?;
        let distance = field.distance_to(position);

        self.distances[cursor] = distance;
        self.progress[cursor] = inverse_lerp(
            self.settings.highlight_distance_max,
            self.settings.highlight_distance_min,
            distance,
        );
        Ok(())
    }

    /// Record whether this item is the nearest candidate for `cursor`.
    pub fn set_as_nearest_button(&mut self, cursor: CursorType, is_nearest: bool) {
        self.nearest[cursor] = is_nearest;
    }

    /// Advance the selection committer by one frame.
    ///
    /// Returns `true` only on the frame the selection commits, after calling
    /// [`MenuItem::select`].
    pub fn update_selection_process(&mut self, now: Duration) -> bool {
        let is_nearest = self.is_nearest_highlight();

        if !is_nearest || self.selection_progress(now) <= 0.0 {
            if self.item.is_sticky_selected() {
                log::debug!("releasing sticky selection");
            }
            self.item.deselect_sticky_selections();
        }

        if !is_nearest || self.max_highlight_progress() < 1.0 {
            if self.is_selection_prevented {
                log::trace!("hover disengaged; selection latch cleared");
            }
            self.selection_start = None;
            self.is_selection_prevented = false;
            return false;
        }

        // The latch survives this branch; only disengaging above clears it.
        if self.is_selection_prevented || !self.item.allow_selection() {
            self.selection_start = None;
            return false;
        }

        if self.selection_start.is_none() {
            log::trace!("dwell started at {now:?}");
            self.selection_start = Some(now);
            return false;
        }

        if self.selection_progress(now) < 1.0 {
            return false;
        }

        self.selection_start = None;
        self.is_selection_prevented = true;
        self.distance_upon_selection = self.min_highlight_distance();
        log::debug!(
            "selection committed at distance {}",
            self.distance_upon_selection
        );
        self.item.select();
        true
    }
}

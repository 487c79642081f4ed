// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Dwell: per-item highlight and dwell-to-select state for spatial menus.
//!
//! ## Overview
//!
//! In a VR menu, items are selected by touching or pointing at them rather than clicking.
//! This crate holds the interaction state of a single menu item and decides, frame by frame:
//!
//! - how highlighted the item is for each tracked cursor (fingertip, palm, gaze), from a distance field;
//! - whether the item is the nearest candidate for each cursor (decided by a cross-item comparator);
//! - whether holding full highlight for long enough commits a selection.
//!
//! It does not own the menu tree, poll devices, lay out items, or render anything.
//! Those are collaborators reached through the [`MenuItem`] and [`DistanceField`] traits.
//!
//! ## Workflow
//!
//! 1) Highlight: call [`ItemState::update_with_cursor`] for every cursor on every item.
//! 2) Nearest: once all items are scored, decide the winner per cursor (for example with
//!    [`arbiter::assign_nearest`]) and report it via [`ItemState::set_as_nearest_button`].
//! 3) Select: call [`ItemState::update_selection_process`] once per item. It returns `true`
//!    on exactly the frame a selection commits.
//!
//! [`frame::run_frame`] runs all three passes over a slice of items in that order.
//!
//! ## Selection rules
//!
//! - A selection needs some cursor to be nearest *and* full highlight progress, held
//!   continuously for [`InteractionSettings::selection_milliseconds`].
//! - After a selection the prevention latch blocks re-triggering until the hover disengages
//!   (the item stops being nearest or drops below full highlight).
//! - A sticky-selected item reports a decaying [`ItemState::selection_progress`] as the cursor
//!   moves back out toward [`InteractionSettings::sticky_release_distance`].
//!
//! ## Time
//!
//! Timestamps are [`Duration`](core::time::Duration)s on a monotonic clock chosen by the host
//! (for example time since app start). Wall-clock adjustments never affect dwell timing.
//!
//! ## Errors and logging
//!
//! Updating a highlight before a distance field is set returns
//! [`StateError::MissingDistanceFunction`]. State transitions are reported through the
//! [`log`] facade; install any logger in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arbiter;
pub mod cursor;
pub mod frame;
pub mod item;
pub mod settings;
pub mod state;
mod util;

pub use cursor::{CursorType, PerCursor};
pub use item::{DistanceField, MenuItem};
pub use settings::{InteractionSettings, SettingsError};
pub use state::{FAR_DISTANCE, ItemState, SelectionPhase, StateError};

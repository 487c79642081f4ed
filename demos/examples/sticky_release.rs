// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky selection release curve.
//!
//! A sticky item stays selected after its dwell completes. As the cursor
//! backs away, `selection_progress` eases from 1 toward 0 until the cursor
//! reaches the release distance, at which point the sticky state clears.
//!
//! Run:
//! - `cargo run -p understory_demos --example sticky_release`

use core::time::Duration;

use glam::Vec3;
use understory_dwell::frame::{CursorPositions, run_frame};
use understory_dwell::{CursorType, InteractionSettings, ItemState, MenuItem, SelectionPhase};

#[derive(Debug, Default)]
struct Toggle {
    sticky: bool,
}

impl MenuItem for Toggle {
    fn is_enabled(&self) -> bool {
        true
    }
    fn allow_selection(&self) -> bool {
        true
    }
    fn is_sticky_selected(&self) -> bool {
        self.sticky
    }
    fn select(&mut self) {
        self.sticky = true;
    }
    fn deselect_sticky_selections(&mut self) {
        self.sticky = false;
    }
}

fn main() {
    env_logger::init();

    let settings = InteractionSettings {
        highlight_distance_min: 0.1,
        highlight_distance_max: 1.0,
        selection_milliseconds: 300,
        sticky_release_distance: 2.0,
    };
    let mut items = vec![ItemState::with_distance_field(
        Toggle::default(),
        settings,
        |p: Vec3| p.length(),
    )];
    let cursor = CursorType::Look;

    let step = |items: &mut [ItemState<Toggle>], z: f32, ms: u64| {
        let now = Duration::from_millis(ms);
        let mut cursors = CursorPositions::splat(None);
        cursors[cursor] = Some(Vec3::new(0.0, 0.0, z));
        let report = match run_frame(items, &cursors, now) {
            Ok(report) => report,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };
        let state = &items[0];
        println!(
            "t={ms:4}ms z={z:.2} progress={:.2} phase={:?}{}",
            state.selection_progress(now),
            state.selection_phase(),
            if report.selected.is_empty() { "" } else { "  <- selected" }
        );
    };

    for ms in (0..=300).step_by(100) {
        step(&mut items, 0.0, ms);
    }
    for (i, z) in [0.5, 1.0, 1.5, 2.0, 2.5].into_iter().enumerate() {
        step(&mut items, z, 400 + 100 * i as u64);
    }

    let state = &items[0];
    assert!(!state.item().sticky);
    assert_eq!(state.selection_phase(), SelectionPhase::Idle);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two hands hovering over a row of spherical buttons.
//!
//! The left index finger rests on the first button while the right index
//! finger glides across the row. Only the button the right hand settles on
//! long enough is selected.
//!
//! Run:
//! - `RUST_LOG=understory_dwell=trace cargo run -p understory_demos --example dwell_two_hands`

use core::time::Duration;

use glam::Vec3;
use understory_dwell::frame::{CursorPositions, run_frame};
use understory_dwell::{CursorType, InteractionSettings, ItemState, MenuItem};

#[derive(Debug)]
struct Button {
    label: &'static str,
    enabled: bool,
    presses: u32,
}

impl MenuItem for Button {
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn allow_selection(&self) -> bool {
        true
    }
    fn is_sticky_selected(&self) -> bool {
        false
    }
    fn select(&mut self) {
        self.presses += 1;
    }
    fn deselect_sticky_selections(&mut self) {}
}

const RADIUS: f32 = 0.02;
const SPACING: f32 = 0.1;

fn button(
    label: &'static str,
    enabled: bool,
    slot: usize,
    settings: InteractionSettings,
) -> ItemState<Button> {
    let center = Vec3::new(slot as f32 * SPACING, 1.2, -0.3);
    ItemState::with_distance_field(
        Button {
            label,
            enabled,
            presses: 0,
        },
        settings,
        move |p: Vec3| (p.distance(center) - RADIUS).max(0.0),
    )
}

fn main() {
    env_logger::init();

    let settings = InteractionSettings::default();
    if let Err(e) = settings.validate() {
        eprintln!("bad settings: {e}");
        return;
    }

    let mut items = vec![
        button("Back", false, 0, settings),
        button("Copy", true, 1, settings),
        button("Paste", true, 2, settings),
        button("Undo", true, 3, settings),
    ];

    let frame_ms = 11_u64;
    let mut now = Duration::ZERO;
    for frame in 0..120_u32 {
        let mut cursors = CursorPositions::splat(None);
        cursors[CursorType::LeftIndex] = Some(Vec3::new(0.0, 1.2, -0.3));
        // Slide from Copy to Paste over the first 20 frames, then hold.
        let t = (frame as f32 / 20.0).min(1.0);
        cursors[CursorType::RightIndex] = Some(Vec3::new(SPACING * (1.0 + t), 1.2, -0.3));

        let report = match run_frame(&mut items, &cursors, now) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("frame {frame}: {e}");
                return;
            }
        };
        for &i in &report.selected {
            println!("frame {frame:3} ({now:?}): selected {}", items[i].item().label);
        }
        now += Duration::from_millis(frame_ms);
    }

    println!("== Presses ==");
    for state in &items {
        let b = state.item();
        println!("  {:<6} {}", b.label, b.presses);
    }

    // The disabled button under the left hand never highlights.
    assert_eq!(items[0].item().presses, 0);
    assert_eq!(items[1].item().presses, 0);
    assert_eq!(items[2].item().presses, 1);
    assert_eq!(items[3].item().presses, 0);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction tuning constants shared by every item in a menu.

use thiserror::Error;

/// Distances and timings that shape highlighting and dwell selection.
///
/// Distances are in scene units (metres for typical VR rigs). The same
/// settings value is usually shared by every [`ItemState`](crate::ItemState)
/// of a menu.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractionSettings {
    /// At or within this distance, highlight progress is 1.
    pub highlight_distance_min: f32,
    /// At or beyond this distance, highlight progress is 0.
    pub highlight_distance_max: f32,
    /// How long an item must stay nearest and fully highlighted before it selects.
    pub selection_milliseconds: u32,
    /// Distance at which a sticky selection has fully released.
    pub sticky_release_distance: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            highlight_distance_min: 0.03,
            highlight_distance_max: 0.07,
            selection_milliseconds: 400,
            sticky_release_distance: 0.05,
        }
    }
}

/// Reasons an [`InteractionSettings`] value is rejected by [`InteractionSettings::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SettingsError {
    /// The highlight range is not finite or not strictly increasing.
    #[error("highlight distance range must satisfy min < max (got min {min}, max {max})")]
    InvalidHighlightRange {
        /// Configured `highlight_distance_min`.
        min: f32,
        /// Configured `highlight_distance_max`.
        max: f32,
    },
    /// The sticky release distance is negative or not finite.
    #[error("sticky release distance must be finite and non-negative (got {0})")]
    InvalidStickyReleaseDistance(f32),
}

impl InteractionSettings {
    /// Check that the settings describe a usable interaction.
    ///
    /// A zero `selection_milliseconds` is allowed and selects on the frame after
    /// dwell begins.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (min, max) = (self.highlight_distance_min, self.highlight_distance_max);
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(SettingsError::InvalidHighlightRange { min, max });
        }
        let release = self.sticky_release_distance;
        if !(release.is_finite() && release >= 0.0) {
            return Err(SettingsError::InvalidStickyReleaseDistance(release));
        }
        Ok(())
    }
}

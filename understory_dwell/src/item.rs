// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: the menu item surface and the per-item distance field.

use glam::Vec3;

/// The navigable menu entry an [`ItemState`](crate::ItemState) belongs to.
///
/// The navigation tree owns the entry. Implement this on whatever handle your
/// toolkit uses for it (an owned value, an id paired with a context, or a
/// shared cell). The state machine reads the flags every frame and only
/// mutates the entry through [`select`](Self::select) and
/// [`deselect_sticky_selections`](Self::deselect_sticky_selections).
pub trait MenuItem {
    /// Whether the entry currently accepts interaction.
    fn is_enabled(&self) -> bool;
    /// Whether a completed dwell may select the entry.
    fn allow_selection(&self) -> bool;
    /// Whether the entry is in its post-selection sticky state.
    fn is_sticky_selected(&self) -> bool;
    /// Commit a selection.
    fn select(&mut self);
    /// Clear any sticky-selected state.
    fn deselect_sticky_selections(&mut self);
}

impl<T: MenuItem + ?Sized> MenuItem for &mut T {
    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    #[inline]
    fn allow_selection(&self) -> bool {
        (**self).allow_selection()
    }
    #[inline]
    fn is_sticky_selected(&self) -> bool {
        (**self).is_sticky_selected()
    }
    #[inline]
    fn select(&mut self) {
        (**self).select();
    }
    #[inline]
    fn deselect_sticky_selections(&mut self) {
        (**self).deselect_sticky_selections();
    }
}

/// Distance from a world-space cursor position to an item's surface.
///
/// Implemented for any `Fn(Vec3) -> f32`, so a closure over the item's
/// geometry is usually enough.
pub trait DistanceField {
    /// Distance from `point` to the item; lower is nearer.
    fn distance_to(&self, point: Vec3) -> f32;
}

impl<F: Fn(Vec3) -> f32> DistanceField for F {
    #[inline]
    fn distance_to(&self, point: Vec3) -> f32 {
        self(point)
    }
}

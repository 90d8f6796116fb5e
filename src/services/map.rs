// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map display contract.

use crate::models::Coordinates;

/// The map surface the host renders.
///
/// The controller drives it with exactly three calls: `initialize` once
/// after a successful position fix, `add_marker` per workout, and `recenter`
/// when a list entry is activated.
pub trait MapDisplay {
    /// Bring the map up centered on `center` at `zoom`.
    fn initialize(&mut self, center: Coordinates, zoom: u8);

    /// Drop a marker with a popup label and a kind glyph.
    fn add_marker(&mut self, coords: Coordinates, label: &str, glyph: &str);

    /// Move the view to `coords`, optionally animated.
    fn recenter(&mut self, coords: Coordinates, zoom: u8, animate: bool);
}

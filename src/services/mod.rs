// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contracts for the host-provided collaborators.

pub mod geolocation;
pub mod map;

pub use geolocation::{GeolocationProvider, StaticLocation};
pub use map::MapDisplay;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot geolocation acquisition.

use crate::error::AppError;
use crate::models::Coordinates;

/// Provider of the device position.
///
/// Each call is a fresh one-shot request: no caching, no retry, no
/// cancellation. A failed or denied request surfaces as
/// [`AppError::LocationUnavailable`] with a message the host can show
/// directly.
pub trait GeolocationProvider {
    fn current_position(&self) -> Result<Coordinates, AppError>;
}

/// Fixed-position provider for tests and headless hosts.
pub struct StaticLocation(pub Coordinates);

impl GeolocationProvider for StaticLocation {
    fn current_position(&self) -> Result<Coordinates, AppError> {
        Ok(self.0)
    }
}

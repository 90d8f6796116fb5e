// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use waytrack::config::Config;
use waytrack::models::Coordinates;
use waytrack::services::{GeolocationProvider, MapDisplay};
use waytrack::store::{MemorySlot, Persistence, SessionStore};
use waytrack::{App, AppError};

/// Map double that records every call the controller makes.
#[derive(Default)]
pub struct RecordingMap {
    pub initializations: Vec<(Coordinates, u8)>,
    pub markers: Vec<(Coordinates, String, String)>,
    pub recenters: Vec<(Coordinates, u8, bool)>,
}

impl MapDisplay for RecordingMap {
    fn initialize(&mut self, center: Coordinates, zoom: u8) {
        self.initializations.push((center, zoom));
    }

    fn add_marker(&mut self, coords: Coordinates, label: &str, glyph: &str) {
        self.markers.push((coords, label.to_string(), glyph.to_string()));
    }

    fn recenter(&mut self, coords: Coordinates, zoom: u8, animate: bool) {
        self.recenters.push((coords, zoom, animate));
    }
}

/// Geolocation double for the permission-denied path.
pub struct DeniedLocation;

impl GeolocationProvider for DeniedLocation {
    fn current_position(&self) -> Result<Coordinates, AppError> {
        Err(AppError::LocationUnavailable(
            "User denied geolocation".to_string(),
        ))
    }
}

/// Session store over a memory slot; the returned slot handle shares state
/// with the store for assertions.
#[allow(dead_code)]
pub fn memory_store() -> (SessionStore, MemorySlot) {
    let slot = MemorySlot::new();
    let store = SessionStore::new(Persistence::new(Box::new(slot.clone())));
    (store, slot)
}

/// A started app over a memory slot and a recording map.
#[allow(dead_code)]
pub fn test_app() -> (App<RecordingMap>, MemorySlot) {
    let (store, slot) = memory_store();
    let app = App::start(Config::default(), RecordingMap::default(), store)
        .expect("app should start on an empty slot");
    (app, slot)
}

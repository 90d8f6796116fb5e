// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application controller.
//!
//! Owns the session store and the map handle and reacts to host events:
//! a map click stashes a pending location, a form submission turns the
//! pending location plus the draft into a stored workout and a marker,
//! list-entry activation recenters the map, reset wipes everything.
//!
//! All handlers are synchronous and complete before returning; the host's
//! single-threaded event dispatch is the only serialization needed.

use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Workout};
use crate::services::{GeolocationProvider, MapDisplay};
use crate::store::SessionStore;

/// Raw form input for one workout, as captured by the host's form surface.
#[derive(Debug, Clone, Copy)]
pub enum WorkoutDraft {
    Running {
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    },
    Cycling {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

impl WorkoutDraft {
    /// Check the numeric constraints before any record is constructed.
    ///
    /// Distance, duration and cadence must be finite and positive. Elevation
    /// gain must be finite and may be zero (a flat ride) but not negative.
    fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        let ok = match *self {
            WorkoutDraft::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => positive(distance_km) && positive(duration_min) && positive(cadence_spm),
            WorkoutDraft::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => {
                positive(distance_km)
                    && positive(duration_min)
                    && elevation_gain_m.is_finite()
                    && elevation_gain_m >= 0.0
            }
        };

        if ok {
            Ok(())
        } else {
            Err(AppError::InvalidInput(
                "Inputs have to be positive numbers".to_string(),
            ))
        }
    }
}

/// Host events the controller reacts to.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// User clicked the map at these coordinates.
    MapClicked(Coordinates),
    /// User submitted the workout form.
    FormSubmitted(WorkoutDraft),
    /// User activated a workout list entry.
    EntryActivated(Uuid),
    /// User asked for a full reset.
    ResetRequested,
}

/// Application state: one instance per running widget.
pub struct App<M: MapDisplay> {
    config: Config,
    store: SessionStore,
    map: M,
    map_ready: bool,
    pending_click: Option<Coordinates>,
}

impl<M: MapDisplay> App<M> {
    /// Construct the controller and rehydrate the session store.
    ///
    /// Fails if the persisted slot holds malformed data; an absent slot is a
    /// normal empty start.
    pub fn start(config: Config, map: M, mut store: SessionStore) -> Result<Self> {
        store.load_from_persistence()?;
        tracing::info!(
            workouts = store.len(),
            zoom = config.map_zoom,
            "Controller started"
        );

        Ok(Self {
            config,
            store,
            map,
            map_ready: false,
            pending_click: None,
        })
    }

    /// Acquire the device position and bring the map up centered on it,
    /// rendering one marker per already-stored workout.
    ///
    /// On failure the map stays down and logging a workout stays impossible
    /// until a later call succeeds; there is no automatic retry. The error
    /// message is meant for the user.
    pub fn locate(&mut self, geolocation: &dyn GeolocationProvider) -> Result<()> {
        let position = geolocation.current_position()?;

        self.map.initialize(position, self.config.map_zoom);
        for workout in self.store.all() {
            self.map
                .add_marker(workout.coords, &workout.description, workout.details.glyph());
        }
        self.map_ready = true;

        tracing::info!(lat = position.lat, lng = position.lng, "Map initialized");
        Ok(())
    }

    /// Dispatch one host event. Errors are user-visible rejections; state is
    /// unchanged when an error is returned.
    pub fn handle(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::MapClicked(coords) => self.on_map_clicked(coords),
            AppEvent::FormSubmitted(draft) => self.on_form_submitted(draft),
            AppEvent::EntryActivated(id) => self.on_entry_activated(id),
            AppEvent::ResetRequested => self.reset(),
        }
    }

    /// The session's workouts, insertion order preserved.
    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }

    /// The host-provided map surface.
    pub fn map(&self) -> &M {
        &self.map
    }

    fn on_map_clicked(&mut self, coords: Coordinates) -> Result<()> {
        if !self.map_ready {
            tracing::warn!("Map click before map initialization, ignoring");
            return Ok(());
        }

        self.pending_click = Some(coords);
        Ok(())
    }

    fn on_form_submitted(&mut self, draft: WorkoutDraft) -> Result<()> {
        let coords = self.pending_click.ok_or_else(|| {
            AppError::InvalidInput("No map location selected".to_string())
        })?;
        draft.validate()?;

        let now = Utc::now();
        let workout = match draft {
            WorkoutDraft::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::running(coords, distance_km, duration_min, cadence_spm, now),
            WorkoutDraft::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::cycling(coords, distance_km, duration_min, elevation_gain_m, now),
        };

        let id = workout.id;
        let kind = workout.details.label();
        let marker_coords = workout.coords;
        let label = workout.description.clone();
        let glyph = workout.details.glyph();

        // Persist first; the marker only appears for a stored workout.
        self.store.append(workout)?;
        self.map.add_marker(marker_coords, &label, glyph);
        self.pending_click = None;

        tracing::info!(%id, kind, "Workout recorded");
        Ok(())
    }

    fn on_entry_activated(&mut self, id: Uuid) -> Result<()> {
        match self.store.find_by_id(id) {
            Some(workout) => {
                self.map
                    .recenter(workout.coords, self.config.map_zoom, true);
                Ok(())
            }
            None => {
                // Stale entry in the host's list; nothing to do.
                tracing::warn!(%id, "Activated entry not in store");
                Ok(())
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.pending_click = None;
        tracing::info!("Session reset, persisted slot erased");
        Ok(())
    }
}

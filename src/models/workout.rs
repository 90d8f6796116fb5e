// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model: the two activity variants and their derived stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time_utils::format_month_day;

/// A `(latitude, longitude)` pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Variant payload, tagged with the `kind` discriminator on the wire.
///
/// The tag is what lets a persisted workout round-trip back into the right
/// variant: a stored element with a missing or unknown `kind` fails
/// deserialization instead of degrading into an untyped record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence_spm: f64,
        /// Derived at creation: duration / distance
        pace_min_per_km: f64,
    },
    Cycling {
        /// Total climb in meters
        elevation_gain_m: f64,
        /// Derived at creation: distance / (duration / 60)
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    /// Capitalized kind name used in descriptions ("Running" / "Cycling").
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutDetails::Running { .. } => "Running",
            WorkoutDetails::Cycling { .. } => "Cycling",
        }
    }

    /// Map marker glyph for this kind.
    pub fn glyph(&self) -> &'static str {
        match self {
            WorkoutDetails::Running { .. } => "🏃‍♂️",
            WorkoutDetails::Cycling { .. } => "🚴‍♀️",
        }
    }
}

/// One logged workout.
///
/// Every field is set at construction and never changes afterward. The
/// derived stats and the description are snapshots computed once; they are
/// persisted verbatim rather than recomputed on load, which keeps a stored
/// collection byte-for-byte stable across round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique record ID (also the list-entry handle on the host side)
    pub id: Uuid,
    /// When the workout was logged
    pub recorded_at: DateTime<Utc>,
    /// Where on the map it was logged
    pub coords: Coordinates,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Human-readable label, e.g. "Running August 7"
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    /// Build a running workout.
    ///
    /// Inputs must already be validated by the caller; constructors only
    /// derive, they never check.
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let details = WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::assemble(coords, distance_km, duration_min, recorded_at, details)
    }

    /// Build a cycling workout. Same contract as [`Workout::running`].
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Self::assemble(coords, distance_km, duration_min, recorded_at, details)
    }

    fn assemble(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        recorded_at: DateTime<Utc>,
        details: WorkoutDetails,
    ) -> Self {
        let description = format!("{} {}", details.label(), format_month_day(recorded_at));
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            coords,
            distance_km,
            duration_min,
            description,
            details,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waytrack: log workouts where they happened.
//!
//! This crate is the core of a map-based workout-logging widget. The host
//! shell owns the actual UI (map rendering, form, list) and feeds events in;
//! the crate records running and cycling workouts with their derived stats,
//! keeps the session's ordered list persistent across restarts through a
//! single storage slot, and drives the host's map surface through a narrow
//! trait.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod time_utils;

pub use app::{App, AppEvent, WorkoutDraft};
pub use error::{AppError, Result};
pub use models::{Coordinates, Workout, WorkoutDetails};

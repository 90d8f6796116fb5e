// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Nothing here is fatal to the process: every variant is either a
//! user-visible rejection the host displays or a startup failure the host
//! refuses to proceed past.

/// Application error type surfaced to the host shell.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected form submission; no record was created, no state changed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Geolocation request failed or was denied; the map stays down.
    #[error("Could not get position: {0}")]
    LocationUnavailable(String),

    /// Storage slot I/O failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data is present but malformed. Surfaced at load time
    /// instead of silently starting empty.
    #[error("Malformed persisted data: {0}")]
    Deserialization(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;

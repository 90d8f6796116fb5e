// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence adapter: serializes the workout collection into a storage slot.

use crate::error::AppError;
use crate::models::Workout;
use crate::store::slot::StorageSlot;

/// Serializes the full ordered collection to one slot, overwritten wholesale
/// on every save. There is no incremental or delta persistence.
pub struct Persistence {
    slot: Box<dyn StorageSlot>,
}

impl Persistence {
    pub fn new(slot: Box<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// Serialize and store the full collection, discriminators and derived
    /// fields included.
    pub fn save(&self, workouts: &[Workout]) -> Result<(), AppError> {
        let blob = serde_json::to_string(workouts)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize workouts: {e}")))?;
        self.slot.write(&blob)
    }

    /// Load the stored collection. `None` means the slot was never written.
    ///
    /// Malformed data is an error, not an empty collection: every element
    /// must carry a known `kind` tag and well-formed fields or the whole
    /// load fails.
    pub fn load(&self) -> Result<Option<Vec<Workout>>, AppError> {
        let Some(blob) = self.slot.read()? else {
            return Ok(None);
        };

        let workouts = serde_json::from_str(&blob)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        Ok(Some(workouts))
    }

    /// Remove the slot.
    pub fn erase(&self) -> Result<(), AppError> {
        self.slot.erase()
    }
}

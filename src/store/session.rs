// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory session store, mediating all reads and writes of the
//! persisted slot.

use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::models::Workout;
use crate::store::persist::Persistence;
use crate::store::slot::FileSlot;
use crate::store::keys;

/// Ordered collection of the session's workouts. Append-only: no in-place
/// edits, no per-record deletion, only a full [`SessionStore::clear`].
pub struct SessionStore {
    workouts: Vec<Workout>,
    persistence: Persistence,
}

impl SessionStore {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            workouts: Vec::new(),
            persistence,
        }
    }

    /// Store over the durable file slot under the configured data directory.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let slot = FileSlot::new(&config.data_dir, keys::WORKOUTS)?;
        Ok(Self::new(Persistence::new(Box::new(slot))))
    }

    /// Rehydrate from the persisted slot. Call once at startup.
    ///
    /// An absent slot leaves the store empty; malformed data fails the whole
    /// load rather than guessing at a partial collection.
    pub fn load_from_persistence(&mut self) -> Result<(), AppError> {
        match self.persistence.load()? {
            Some(workouts) => {
                tracing::info!(count = workouts.len(), "Loaded persisted workouts");
                self.workouts = workouts;
            }
            None => {
                tracing::debug!("No persisted workouts found");
            }
        }
        Ok(())
    }

    /// Append a workout and flush the full collection to the slot before
    /// returning.
    pub fn append(&mut self, workout: Workout) -> Result<(), AppError> {
        self.workouts.push(workout);

        if let Err(e) = self.persistence.save(&self.workouts) {
            // Keep the collection in step with the slot on a failed flush.
            self.workouts.pop();
            return Err(e);
        }
        Ok(())
    }

    /// All workouts, insertion order preserved.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    /// Linear scan by id; collections stay small enough that an index would
    /// be wasted.
    pub fn find_by_id(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Drop everything, in memory and in the slot.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.workouts.clear();
        self.persistence.erase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use crate::store::slot::{MemorySlot, StorageSlot};
    use chrono::{TimeZone, Utc};

    fn store_with_slot() -> (SessionStore, MemorySlot) {
        let slot = MemorySlot::new();
        let store = SessionStore::new(Persistence::new(Box::new(slot.clone())));
        (store, slot)
    }

    fn running(distance_km: f64) -> Workout {
        let now = Utc.with_ymd_and_hms(2024, 4, 14, 9, 30, 0).unwrap();
        Workout::running(Coordinates::new(40.0, -75.0), distance_km, 30.0, 170.0, now)
    }

    #[test]
    fn test_append_is_monotonic_in_insertion_order() {
        let (mut store, _slot) = store_with_slot();

        for i in 1..=5 {
            store.append(running(i as f64)).unwrap();
            assert_eq!(store.len(), i);
        }

        let distances: Vec<f64> = store.all().iter().map(|w| w.distance_km).collect();
        assert_eq!(distances, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        // Ids stay unique across the collection
        for (i, a) in store.all().iter().enumerate() {
            for b in &store.all()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_append_flushes_the_slot() {
        let (mut store, slot) = store_with_slot();

        store.append(running(1.0)).unwrap();
        let first = slot.blob().unwrap();

        store.append(running(2.0)).unwrap();
        let second = slot.blob().unwrap();

        assert_ne!(first, second);
        let parsed: Vec<Workout> = serde_json::from_str(&second).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_find_by_id() {
        let (mut store, _slot) = store_with_slot();

        let workout = running(3.0);
        let id = workout.id;
        store.append(workout).unwrap();

        assert_eq!(store.find_by_id(id).unwrap().distance_km, 3.0);
        assert!(store.find_by_id(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_load_from_empty_slot_leaves_store_empty() {
        let (mut store, _slot) = store_with_slot();

        store.load_from_persistence().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_from_malformed_slot_fails() {
        let (mut store, slot) = store_with_slot();

        slot.write("{not json").unwrap();
        assert!(matches!(
            store.load_from_persistence(),
            Err(AppError::Deserialization(_))
        ));
    }

    #[test]
    fn test_clear_empties_store_and_slot() {
        let (mut store, slot) = store_with_slot();

        store.append(running(1.0)).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert_eq!(slot.blob(), None);
    }
}

//! MemoryStore - In-process versioned pet storage

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{PetStore, StoreError};
use crate::pet::Pet;
use crate::types::{OwnerId, PetId};

/// Thread-safe in-memory store
///
/// Readers share the lock and always see whole pets; writers replace a pet
/// in a single map insert.
#[derive(Debug)]
pub struct MemoryStore {
    pets: RwLock<HashMap<PetId, Pet>>,
    next_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            pets: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored pets
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written pet behind,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<PetId, Pet>> {
        self.pets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<PetId, Pet>> {
        self.pets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sorted(mut pets: Vec<Pet>) -> Vec<Pet> {
    pets.sort_by_key(|p| p.id);
    pets
}

impl PetStore for MemoryStore {
    fn next_id(&self) -> PetId {
        PetId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn load(&self, id: PetId) -> Result<Pet, StoreError> {
        self.read().get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn save(&self, mut pet: Pet, expected_version: Option<u64>) -> Result<Pet, StoreError> {
        let mut pets = self.write();
        let current = pets.get(&pet.id).map(|p| p.version);

        match (expected_version, current) {
            (None, None) => pet.version = 1,
            (None, Some(_)) => return Err(StoreError::AlreadyExists(pet.id)),
            (Some(_), None) => return Err(StoreError::NotFound(pet.id)),
            (Some(expected), Some(found)) if expected != found => {
                return Err(StoreError::VersionConflict {
                    id: pet.id,
                    expected,
                    found,
                });
            }
            (Some(expected), Some(_)) => pet.version = expected + 1,
        }

        pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    fn delete(&self, id: PetId) -> Result<(), StoreError> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Pet>, StoreError> {
        let pets = self
            .read()
            .values()
            .filter(|p| p.is_owned_by(owner))
            .cloned()
            .collect();
        Ok(sorted(pets))
    }

    fn list_all(&self) -> Result<Vec<Pet>, StoreError> {
        Ok(sorted(self.read().values().cloned().collect()))
    }
}

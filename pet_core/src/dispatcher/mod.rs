//! Action Dispatcher - The single writer for stored pets
//!
//! Every mutation goes through [`ActionDispatcher`]. For a given pet it:
//!
//! 1. takes that pet's lock, so at most one mutation is in flight per pet
//! 2. loads the pet and checks ownership (unowned pets are reported as missing)
//! 3. folds in idle decay since the last interaction, then applies the change
//! 4. saves with the version it loaded, retrying the whole sequence if another
//!    writer sharing the store got there first
//!
//! Reads never take pet locks; the store only ever hands out whole pets.

mod locks;
mod request;

pub use request::NewPet;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::{Arc, PoisonError};

use crate::clock::{Clock, SystemClock};
use crate::config::PetConstants;
use crate::engine::StatEngine;
use crate::error::{PetError, Result};
use crate::pet::{validate_color, validate_name, Pet, StatLevel};
use crate::store::{PetStore, StoreError};
use crate::types::{CareAction, OwnerId, PetId, PetType};
use locks::LockTable;

/// Applies care actions, creation, renames and deletion to stored pets
pub struct ActionDispatcher {
    store: Arc<dyn PetStore>,
    clock: Arc<dyn Clock>,
    engine: StatEngine,
    locks: LockTable,
}

impl ActionDispatcher {
    /// Create a dispatcher using the system clock
    pub fn new(store: Arc<dyn PetStore>, constants: PetConstants) -> Self {
        ActionDispatcher {
            store,
            clock: Arc::new(SystemClock),
            engine: StatEngine::new(constants),
            locks: LockTable::new(),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn engine(&self) -> &StatEngine {
        &self.engine
    }

    pub fn constants(&self) -> &PetConstants {
        self.engine.constants()
    }

    // === Mutations ===

    /// Create a pet with default stats for `owner`
    pub fn create(&self, owner: &OwnerId, request: NewPet) -> Result<Pet> {
        let creation = &self.constants().creation;
        let name = validate_name(
            &request.name,
            creation.min_name_length,
            creation.max_name_length,
        )?;
        let pet_type: PetType = request.pet_type.parse()?;
        let color = validate_color(request.color.as_deref(), &creation.default_color)?;

        let pet = Pet::new(
            self.store.next_id(),
            owner.clone(),
            name,
            pet_type,
            color,
            StatLevel::clamped(creation.starting_level),
            self.clock.now(),
        );
        let saved = self.store.save(pet, None)?;
        info!(
            "Created pet '{}' ({}) with ID {} for owner {}",
            saved.name, saved.pet_type, saved.id, owner
        );
        Ok(saved)
    }

    /// Apply a care action to one of `owner`'s pets
    ///
    /// Idle decay since the last interaction is applied first, then the
    /// action, and the interaction time moves to now.
    pub fn dispatch(&self, owner: &OwnerId, pet_id: PetId, action: CareAction) -> Result<Pet> {
        let engine = &self.engine;
        let pet = self.update_with(owner, pet_id, |pet, now| {
            let mut next = engine.apply(&engine.decayed_at(pet, now), action);
            next.last_interaction_at = now;
            next
        })?;
        debug!(
            "Applied {} to pet {}: happiness={} energy={} hunger={}",
            action, pet_id, pet.happiness_level, pet.energy_level, pet.hunger_level
        );
        Ok(pet)
    }

    /// Rename one of `owner`'s pets; stats and interaction time are untouched
    pub fn rename(&self, owner: &OwnerId, pet_id: PetId, name: &str) -> Result<Pet> {
        let creation = &self.constants().creation;
        let name = validate_name(name, creation.min_name_length, creation.max_name_length)?;
        let pet = self.update_with(owner, pet_id, |pet, _| Pet {
            name: name.clone(),
            ..pet.clone()
        })?;
        info!("Renamed pet {} to '{}'", pet_id, pet.name);
        Ok(pet)
    }

    /// Permanently delete one of `owner`'s pets
    pub fn remove(&self, owner: &OwnerId, pet_id: PetId) -> Result<()> {
        let lock = self.locks.lock_for(pet_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let pet = self.load_owned(owner, pet_id)?;
        self.store.delete(pet_id)?;
        self.locks.forget(pet_id);
        info!("Deleted pet '{}' (ID {}) for owner {}", pet.name, pet_id, owner);
        Ok(())
    }

    // === Reads ===

    /// Current state of one of `owner`'s pets, with idle decay applied
    ///
    /// The decayed values are not written back.
    pub fn get(&self, owner: &OwnerId, pet_id: PetId) -> Result<Pet> {
        let pet = self.load_owned(owner, pet_id)?;
        Ok(self.engine.decayed_at(&pet, self.clock.now()))
    }

    /// All of `owner`'s pets ordered by id, with idle decay applied
    pub fn list(&self, owner: &OwnerId) -> Result<Vec<Pet>> {
        let now = self.clock.now();
        let pets = self.store.list_by_owner(owner)?;
        debug!("Found {} pets for owner {}", pets.len(), owner);
        Ok(self.decay_all(pets, now))
    }

    pub fn count(&self, owner: &OwnerId) -> Result<usize> {
        Ok(self.store.list_by_owner(owner)?.len())
    }

    /// Every pet across all owners, with idle decay applied
    pub fn all_pets(&self) -> Result<Vec<Pet>> {
        let now = self.clock.now();
        Ok(self.decay_all(self.store.list_all()?, now))
    }

    /// Pets idle for longer than the attention window
    pub fn pets_needing_attention(&self) -> Result<Vec<Pet>> {
        let now = self.clock.now();
        let pets = self
            .store
            .list_all()?
            .into_iter()
            .filter(|p| self.engine.needs_attention(p, now))
            .collect();
        Ok(self.decay_all(pets, now))
    }

    /// Pets whose current happiness is below `threshold`
    pub fn unhappy_pets(&self, threshold: u32) -> Result<Vec<Pet>> {
        Ok(self
            .all_pets()?
            .into_iter()
            .filter(|p| u32::from(p.happiness_level) < threshold)
            .collect())
    }

    /// Pets of one species across all owners, with idle decay applied
    pub fn pets_by_type(&self, pet_type: PetType) -> Result<Vec<Pet>> {
        Ok(self
            .all_pets()?
            .into_iter()
            .filter(|p| p.pet_type == pet_type)
            .collect())
    }

    // === Internals ===

    fn decay_all(&self, pets: Vec<Pet>, now: DateTime<Utc>) -> Vec<Pet> {
        pets.iter().map(|p| self.engine.decayed_at(p, now)).collect()
    }

    /// Load a pet, reporting pets of other owners as missing
    fn load_owned(&self, owner: &OwnerId, pet_id: PetId) -> Result<Pet> {
        let pet = self.store.load(pet_id).map_err(|err| {
            if let StoreError::NotFound(_) = err {
                debug!("Pet not found with ID: {}", pet_id);
                self.locks.forget(pet_id);
            }
            err
        })?;
        if !pet.is_owned_by(owner) {
            warn!(
                "Pet not owned by caller - Pet ID: {}, Owner ID: {}",
                pet_id, owner
            );
            return Err(PetError::NotFound(pet_id));
        }
        Ok(pet)
    }

    /// Serialized read-modify-write of a single pet
    fn update_with<F>(&self, owner: &OwnerId, pet_id: PetId, change: F) -> Result<Pet>
    where
        F: Fn(&Pet, DateTime<Utc>) -> Pet,
    {
        let lock = self.locks.lock_for(pet_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let attempts = self.constants().retry.max_attempts.max(1);
        for attempt in 1..=attempts {
            let current = self.load_owned(owner, pet_id)?;
            let next = change(&current, self.clock.now());
            match self.store.save(next, Some(current.version)) {
                Ok(saved) => return Ok(saved),
                Err(StoreError::VersionConflict { expected, found, .. }) => {
                    warn!(
                        "Version conflict on pet {} (attempt {}/{}): expected {}, found {}",
                        pet_id, attempt, attempts, expected, found
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
        Err(PetError::ConcurrencyConflict { pet_id, attempts })
    }
}

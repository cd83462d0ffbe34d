//! PetStore - Persistence collaborator used by the dispatcher

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::pet::Pet;
use crate::types::{OwnerId, PetId};

/// Store failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Pet not found: {0}")]
    NotFound(PetId),
    #[error("Pet {0} already exists")]
    AlreadyExists(PetId),
    /// The stored version moved on since the caller loaded the pet
    #[error("Version conflict on pet {id}: expected {expected}, found {found}")]
    VersionConflict { id: PetId, expected: u64, found: u64 },
    /// Failure inside a non-memory backend (database, network); `MemoryStore`
    /// never returns it
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Trait for anything that can hold pets for the dispatcher
///
/// Implementations must give read-your-writes consistency: a `load` after a
/// successful `save` returns the saved pet.
pub trait PetStore: Send + Sync {
    /// Reserve a fresh id. Ids are never handed out twice, even after delete.
    fn next_id(&self) -> PetId;

    fn load(&self, id: PetId) -> Result<Pet, StoreError>;

    /// Write a pet, returning it with its new version
    ///
    /// With `expected_version: None` the pet must not exist yet. Otherwise the
    /// stored version must equal `expected_version`, or the write is rejected
    /// with [`StoreError::VersionConflict`].
    fn save(&self, pet: Pet, expected_version: Option<u64>) -> Result<Pet, StoreError>;

    fn delete(&self, id: PetId) -> Result<(), StoreError>;

    /// Pets owned by `owner`, ordered by id
    fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Pet>, StoreError>;

    /// Every stored pet, ordered by id
    fn list_all(&self) -> Result<Vec<Pet>, StoreError>;
}

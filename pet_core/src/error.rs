//! Error taxonomy for pet operations

use thiserror::Error;

use crate::store::StoreError;
use crate::types::PetId;

/// Bad input when creating or renaming a pet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Pet name must be between {min} and {max} characters (got {len})")]
    NameLength { len: usize, min: usize, max: usize },
    #[error("Unknown pet type: {0}")]
    UnknownType(String),
    #[error("Color must be a valid hex code like #FF6B6B (got {0:?})")]
    InvalidColor(String),
}

/// Error returned by dispatcher operations
#[derive(Error, Debug)]
pub enum PetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Unknown pet, or a pet owned by someone else
    #[error("Pet not found: {0}")]
    NotFound(PetId),
    #[error("Pet {pet_id} was modified concurrently; gave up after {attempts} attempts")]
    ConcurrencyConflict { pet_id: PetId, attempts: u32 },
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for PetError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => PetError::NotFound(id),
            other => PetError::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PetError>;

//! Prelude module for convenient imports
//!
//! ```rust
//! use pet_core::prelude::*;
//! ```

// Core types
pub use crate::pet::{Pet, StatLevel};
pub use crate::types::{CareAction, OwnerId, PetId, PetType};

// Engine
pub use crate::engine::{classify_level, mood, LevelTier, Mood, StatEngine};

// Dispatcher and collaborators
pub use crate::clock::{Clock, SystemClock};
pub use crate::dispatcher::{ActionDispatcher, NewPet};
pub use crate::store::{MemoryStore, PetStore};

// Errors and config
pub use crate::config::PetConstants;
pub use crate::error::PetError;

//! Per-pet lock table

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::types::PetId;

/// Hands out one mutex per pet so mutations of the same pet are serialized
/// while different pets proceed in parallel
#[derive(Debug, Default)]
pub(crate) struct LockTable {
    locks: Mutex<HashMap<PetId, Arc<Mutex<()>>>>,
}

impl LockTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock for a pet
    pub(crate) fn lock_for(&self, id: PetId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(id).or_default())
    }

    /// Drop the lock entry of a deleted pet
    ///
    /// Anyone still holding the old lock will find the pet gone on load.
    pub(crate) fn forget(&self, id: PetId) {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pet_same_lock() {
        let table = LockTable::new();
        let a = table.lock_for(PetId(1));
        let b = table.lock_for(PetId(1));
        let c = table.lock_for(PetId(2));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_forget() {
        let table = LockTable::new();
        let a = table.lock_for(PetId(1));
        table.forget(PetId(1));
        assert_eq!(table.len(), 0);
        let b = table.lock_for(PetId(1));
        assert!(!Arc::ptr_eq(&a, &b));
    }
}

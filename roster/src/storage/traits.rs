//! # Storage Traits
//!
//! Abstractions that let the roster store run against browser local storage,
//! a file on disk or an in-memory fake without modification.

use anyhow::Result;
use shared::Family;

/// A durable slot holding one serialized record.
///
/// Implementations report failures as errors; the adapter decides what to do
/// with them.
pub trait RecordSlot {
    /// Read the stored record, `None` when nothing is stored
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the stored record
    fn write(&self, contents: &str) -> Result<()>;

    /// Remove the stored record entirely
    fn remove(&self) -> Result<()>;
}

/// Port the roster store persists through.
///
/// No operation reports an error to the caller: failures degrade to "no data"
/// on read and to a no-op on write.
pub trait FamilyStorage {
    /// Load the stored family, `None` when absent, unparseable or unavailable
    fn load(&self) -> Option<Family>;

    /// Overwrite the stored family (last writer wins)
    fn save(&self, family: &Family);

    /// Remove the stored family; a following `load` returns `None`
    fn clear(&self);
}

impl<T: FamilyStorage + ?Sized> FamilyStorage for &T {
    fn load(&self) -> Option<Family> {
        (**self).load()
    }

    fn save(&self, family: &Family) {
        (**self).save(family)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<T: FamilyStorage + ?Sized> FamilyStorage for Box<T> {
    fn load(&self) -> Option<Family> {
        (**self).load()
    }

    fn save(&self, family: &Family) {
        (**self).save(family)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

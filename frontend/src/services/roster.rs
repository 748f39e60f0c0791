use std::cell::RefCell;
use std::rc::Rc;

use family_roster::{RecordAdapter, RosterStore, STORAGE_KEY};

use super::local_storage::BrowserSlot;

pub type BrowserStore = RosterStore<RecordAdapter<BrowserSlot>>;

/// Base URL of the backend stub
pub const BACKEND_URL: &str = "http://localhost:4000";

/// Shared handle to the one roster store of the page
#[derive(Clone)]
pub struct RosterHandle(Rc<RefCell<BrowserStore>>);

impl RosterHandle {
    pub fn new() -> Self {
        let adapter = RecordAdapter::new(BrowserSlot::new(STORAGE_KEY));
        Self(Rc::new(RefCell::new(RosterStore::new(adapter))))
    }

    /// Run `f` with exclusive access to the store
    pub fn with<T>(&self, f: impl FnOnce(&mut BrowserStore) -> T) -> T {
        f(&mut self.0.borrow_mut())
    }
}

impl Default for RosterHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RosterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

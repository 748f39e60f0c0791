//! # Family Roster
//!
//! Client-side state for the family health tracker. The roster is the only
//! copy of family data: there is no server-side persistence, so this crate
//! keeps one family record consistent across screens and durable across
//! page reloads.
//!
//! ## Architecture
//!
//! ```text
//! Screens (yew components)
//!     ↓
//! Views (headless controllers, navigation routes)
//!     ↓
//! Domain (RosterStore, reconcile, nested resource helpers)
//!     ↓
//! Storage (FamilyStorage port, schema parse, record slots)
//! ```
//!
//! Every mutation goes through [`RosterStore`], which writes the whole family
//! to its [`FamilyStorage`] before the new snapshot becomes visible in memory.

pub mod domain;
pub mod error;
pub mod storage;
pub mod views;

pub use domain::{reconcile, RosterStore, SnapshotSource};
pub use error::RosterError;
pub use storage::{FamilyStorage, MemorySlot, RecordAdapter, RecordSlot, STORAGE_KEY};
pub use views::Route;

//! # Storage Module
//!
//! Durable storage of exactly one family record under one fixed key.
//!
//! The storage layer is split in two:
//!
//! - **Record slots** ([`RecordSlot`]) hold the raw serialized record. A slot
//!   knows nothing about families: it reads, writes and removes one string.
//!   Slots exist for memory (tests) and browser local storage (the frontend
//!   crate).
//! - **The adapter** ([`RecordAdapter`]) implements the [`FamilyStorage`] port
//!   on top of any slot. It owns the absorption policy: a missing, corrupt or
//!   unavailable record is reported as "no data" and write failures are logged
//!   and dropped, so nothing above this layer ever sees a storage error.
//!
//! Reads go through [`schema::parse_family`], which validates the stored shape
//! explicitly instead of trusting blind deserialization. Writes from the
//! roster store pass through [`schema::normalize_family`] first, so a record
//! always loads back as it was saved.

pub mod adapter;
pub mod memory;
pub mod schema;
pub mod traits;

pub use adapter::RecordAdapter;
pub use memory::MemorySlot;
pub use schema::{normalize_family, parse_family, ParsedFamily, RejectReason};
pub use traits::{FamilyStorage, RecordSlot};

/// Key of the single stored family record
pub const STORAGE_KEY: &str = "geetha-family";

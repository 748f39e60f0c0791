//! # Domain Module
//!
//! The roster store and the rules that keep a family record consistent.
//!
//! - [`roster_service`]: the single authoritative in-memory family with
//!   write-through persistence
//! - [`reconcile`]: choosing the starting snapshot from forwarded and durable
//!   state
//! - [`resources`]: by-id helpers for the nested condition, medication and
//!   appointment collections

pub mod reconcile;
pub mod resources;
pub mod roster_service;

pub use reconcile::{reconcile, reconcile_with_source, SnapshotSource};
pub use resources::{Resource, ResourceRequest};
pub use roster_service::RosterStore;

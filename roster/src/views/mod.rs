//! # Views Module
//!
//! Headless controllers for each screen. A controller holds what its screen
//! shows (the current snapshot plus form drafts and modal flags) and turns
//! each user action into exactly one roster store call.
//!
//! Controllers are loaded with whatever transient family the previous screen
//! forwarded through its [`Route`], reconcile it against storage via
//! [`RosterStore::initialize`](crate::RosterStore::initialize), and forward
//! the store's returned snapshot when they navigate on.
//!
//! Rendering lives in the frontend crate; everything here runs without a
//! browser.

pub mod create_family;
pub mod documents;
pub mod family_profile;
pub mod member_profile;
pub mod navigation;

pub use create_family::{CreateFamilyView, MemberForm};
pub use documents::DocumentsView;
pub use family_profile::FamilyProfileView;
pub use member_profile::{MemberProfileView, ResourceEditor};
pub use navigation::Route;

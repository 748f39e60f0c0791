use shared::ResourceKind;
use thiserror::Error;

/// Rejections and lookup misses reported by the roster store.
///
/// None of these is fatal: a rejected mutation leaves both memory and storage
/// untouched, so callers keep their form open or show a "not found" state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("First name is required")]
    BlankFirstName,

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("The {kind} {field} is required")]
    MissingField {
        kind: ResourceKind,
        field: &'static str,
    },

    #[error("No {kind} with id {id}")]
    ResourceNotFound { kind: ResourceKind, id: String },
}

impl RosterError {
    /// True for lookup misses, false for validation rejections
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RosterError::MemberNotFound(_) | RosterError::ResourceNotFound { .. }
        )
    }
}

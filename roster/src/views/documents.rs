use shared::Family;

use crate::domain::RosterStore;
use crate::storage::FamilyStorage;

/// State of the documents screen.
///
/// Uploading is not wired up yet: the modal only collects a name and the
/// member it belongs to, and submitting closes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentsView {
    pub family: Family,
    pub is_upload_modal_open: bool,
    pub document_name: String,
    pub selected_member_id: Option<String>,
}

impl DocumentsView {
    /// Documents are listed against the stored family only
    pub fn load<S: FamilyStorage>(store: &mut RosterStore<S>) -> Self {
        Self {
            family: store.initialize(None).clone(),
            ..Self::default()
        }
    }

    /// Options for the member select as `(id, first name)`
    pub fn member_options(&self) -> Vec<(String, String)> {
        self.family
            .members
            .iter()
            .map(|member| (member.id.clone(), member.first_name.clone()))
            .collect()
    }

    pub fn open_upload(&mut self) {
        self.is_upload_modal_open = true;
    }

    pub fn select_member(&mut self, member_id: &str) {
        self.selected_member_id = self
            .family
            .member(member_id)
            .map(|member| member.id.clone());
    }

    /// Close the modal and reset it
    pub fn submit_upload(&mut self) {
        self.is_upload_modal_open = false;
        self.document_name.clear();
        self.selected_member_id = None;
    }
}

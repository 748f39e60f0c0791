//! # Create Family Screen
//!
//! The creation flow: name the family, add members through a modal, confirm
//! the roster to move on to the family profile, or reset everything.

use log::info;
use shared::{CreateMemberRequest, Family, Member, UpdateMemberRequest};

use super::navigation::Route;
use crate::domain::RosterStore;
use crate::error::RosterError;
use crate::storage::FamilyStorage;

/// Draft of a member's basic info
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub first_name: String,
    pub age: String,
    pub role: String,
}

impl MemberForm {
    /// Prefill from an existing member
    pub fn from_member(member: &Member) -> Self {
        Self {
            first_name: member.first_name.clone(),
            age: member.age.clone(),
            role: member.role.clone(),
        }
    }

    pub fn to_create_request(&self) -> CreateMemberRequest {
        CreateMemberRequest {
            first_name: self.first_name.clone(),
            age: self.age.clone(),
            role: self.role.clone(),
        }
    }

    /// Basic info patch with every field trimmed
    pub fn to_update_request(&self) -> UpdateMemberRequest {
        UpdateMemberRequest::basics(self.first_name.trim(), self.age.trim(), self.role.trim())
    }

    pub fn clear(&mut self) {
        self.first_name.clear();
        self.age.clear();
        self.role.clear();
    }
}

/// State of the create family screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFamilyView {
    /// Snapshot being rendered
    pub family: Family,
    /// Family name exactly as typed
    pub family_name_input: String,
    pub member_form: MemberForm,
    pub is_member_modal_open: bool,
    pub is_roster_confirmed: bool,
    /// Validation message shown inside the add member modal
    pub form_error: Option<String>,
}

impl CreateFamilyView {
    pub fn load<S: FamilyStorage>(store: &mut RosterStore<S>, transient: Option<Family>) -> Self {
        let family = store.initialize(transient).clone();
        Self {
            family_name_input: family.family_name.clone(),
            family,
            ..Self::default()
        }
    }

    /// Store the (trimmed) family name together with the current members
    pub fn set_family_name<S: FamilyStorage>(&mut self, store: &mut RosterStore<S>, name: &str) {
        self.family_name_input = name.to_string();

        let mut next = self.family.clone();
        next.family_name = name.trim().to_string();
        self.family = store.replace_all(next).clone();
    }

    pub fn open_member_modal(&mut self) {
        self.is_member_modal_open = true;
    }

    /// Dismiss the modal, discarding whatever was typed
    pub fn close_member_modal(&mut self) {
        self.is_member_modal_open = false;
        self.member_form.clear();
        self.form_error = None;
    }

    /// Add the drafted member. On rejection the modal stays open with the
    /// draft intact.
    pub fn submit_member<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<Member, RosterError> {
        match store.add_member(self.member_form.to_create_request()) {
            Ok(member) => {
                self.family = store.snapshot();
                self.is_roster_confirmed = false;
                self.close_member_modal();
                Ok(member)
            }
            Err(e) => {
                self.form_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// The roster can be confirmed once it has a member
    pub fn can_confirm(&self) -> bool {
        !self.family.is_empty()
    }

    /// Persist the roster and hand it to the family profile
    pub fn confirm_roster<S: FamilyStorage>(&mut self, store: &mut RosterStore<S>) -> Option<Route> {
        if !self.can_confirm() {
            return None;
        }

        let mut next = self.family.clone();
        next.family_name = self.family_name_input.trim().to_string();
        let confirmed = store.replace_all(next).clone();

        info!("Confirmed roster with {} members", confirmed.members.len());
        self.family = confirmed.clone();
        self.is_roster_confirmed = true;
        Some(Route::family_profile(confirmed))
    }

    /// Forget the stored family and start over
    pub fn reset_roster<S: FamilyStorage>(&mut self, store: &mut RosterStore<S>) {
        store.clear_all();
        self.family = store.snapshot();
        self.family_name_input.clear();
        self.is_roster_confirmed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySlot, RecordAdapter};

    type MemoryStore = RosterStore<RecordAdapter<MemorySlot>>;

    fn setup_test() -> (MemoryStore, MemorySlot) {
        let slot = MemorySlot::new();
        (RosterStore::new(RecordAdapter::new(slot.clone())), slot)
    }

    fn fill(view: &mut CreateFamilyView, first_name: &str, age: &str, role: &str) {
        view.open_member_modal();
        view.member_form = MemberForm {
            first_name: first_name.to_string(),
            age: age.to_string(),
            role: role.to_string(),
        };
    }

    #[test]
    fn test_load_restores_stored_family() {
        let (mut store, slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);
        view.set_family_name(&mut store, "Gowda");
        fill(&mut view, "Rohan", "34", "Father");
        view.submit_member(&mut store).unwrap();

        let mut reloaded_store = RosterStore::new(RecordAdapter::new(slot));
        let reloaded = CreateFamilyView::load(&mut reloaded_store, None);

        assert_eq!(reloaded.family_name_input, "Gowda");
        assert_eq!(reloaded.family.members.len(), 1);
        assert_eq!(reloaded.family.members[0].first_name, "Rohan");
    }

    #[test]
    fn test_submit_member_closes_modal_and_clears_confirmation() {
        let (mut store, _slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);
        view.is_roster_confirmed = true;

        fill(&mut view, "Rohan", "34", "Father");
        let member = view.submit_member(&mut store).unwrap();

        assert!(!view.is_member_modal_open);
        assert!(!view.is_roster_confirmed);
        assert_eq!(view.member_form, MemberForm::default());
        assert_eq!(view.family.members, vec![member]);
    }

    #[test]
    fn test_blank_member_keeps_modal_open() {
        let (mut store, slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);

        fill(&mut view, "  ", "34", "Father");
        assert_eq!(view.submit_member(&mut store), Err(RosterError::BlankFirstName));

        assert!(view.is_member_modal_open);
        assert_eq!(view.member_form.age, "34");
        assert_eq!(view.form_error.as_deref(), Some("First name is required"));
        assert!(view.family.is_empty());
        assert!(slot.contents().is_none());
    }

    #[test]
    fn test_dismissing_modal_discards_input() {
        let (mut store, slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);

        fill(&mut view, "Rohan", "34", "Father");
        view.close_member_modal();

        assert!(!view.is_member_modal_open);
        assert_eq!(view.member_form, MemberForm::default());
        assert!(slot.contents().is_none());
    }

    #[test]
    fn test_family_name_is_persisted_trimmed() {
        let (mut store, _slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);

        view.set_family_name(&mut store, " Gowda ");

        assert_eq!(view.family_name_input, " Gowda ");
        assert_eq!(store.storage().load().unwrap().family_name, "Gowda");
    }

    #[test]
    fn test_confirm_requires_members() {
        let (mut store, _slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);

        assert!(!view.can_confirm());
        assert_eq!(view.confirm_roster(&mut store), None);
        assert!(!view.is_roster_confirmed);
    }

    #[test]
    fn test_confirm_forwards_persisted_snapshot() {
        let (mut store, _slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);
        view.set_family_name(&mut store, "Gowda");
        fill(&mut view, "Rohan", "34", "Father");
        view.submit_member(&mut store).unwrap();

        let route = view.confirm_roster(&mut store).expect("Roster should confirm");

        let persisted = store.storage().load().unwrap();
        assert_eq!(route, Route::family_profile(persisted));
        assert!(view.is_roster_confirmed);
    }

    #[test]
    fn test_reset_roster() {
        let (mut store, slot) = setup_test();
        let mut view = CreateFamilyView::load(&mut store, None);
        view.set_family_name(&mut store, "Gowda");
        fill(&mut view, "Rohan", "", "");
        view.submit_member(&mut store).unwrap();
        view.confirm_roster(&mut store);

        view.reset_roster(&mut store);

        assert!(view.family.is_empty());
        assert_eq!(view.family_name_input, "");
        assert!(!view.is_roster_confirmed);
        assert!(slot.contents().is_none());
    }
}

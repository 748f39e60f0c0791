//! # Member Profile Screen
//!
//! Detail page for one member: the basic info form plus one section per
//! nested resource kind. Each section has an add form and an inline editor
//! for a single row at a time.

use shared::{AppointmentRequest, ConditionRequest, Family, MedicationRequest, Member};

use super::create_family::MemberForm;
use super::navigation::Route;
use crate::domain::{Resource, ResourceRequest, RosterStore};
use crate::error::RosterError;
use crate::storage::FamilyStorage;

/// Add form and inline editor for one nested resource section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceEditor<R> {
    /// Draft for a new entry
    pub draft: R,
    /// Row currently edited inline
    pub editing_id: Option<String>,
    pub edit_draft: R,
    pub error: Option<String>,
}

impl<R: ResourceRequest> ResourceEditor<R> {
    /// Start editing `resource` inline, prefilled with its values
    pub fn begin_edit(&mut self, resource: &R::Resource) {
        self.editing_id = Some(resource.id().to_string());
        self.edit_draft = R::from_resource(resource);
        self.error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_draft = R::default();
        self.error = None;
    }

    pub fn is_editing(&self, resource_id: &str) -> bool {
        self.editing_id.as_deref() == Some(resource_id)
    }

    /// Add the drafted entry; the draft is reset on success
    pub fn submit_draft<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
        member_id: &str,
    ) -> Result<Family, RosterError> {
        let result = store.add_resource(member_id, &self.draft);
        if result.is_ok() {
            self.draft = R::default();
        }
        self.record(result)
    }

    /// Save the inline edit of the row being edited
    pub fn submit_edit<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
        member_id: &str,
    ) -> Result<Family, RosterError> {
        let Some(resource_id) = self.editing_id.clone() else {
            return Err(RosterError::ResourceNotFound {
                kind: <R::Resource as Resource>::KIND,
                id: String::new(),
            });
        };

        let result = store.update_resource(member_id, &resource_id, &self.edit_draft);
        if result.is_ok() {
            self.editing_id = None;
            self.edit_draft = R::default();
        }
        self.record(result)
    }

    pub fn remove<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
        member_id: &str,
        resource_id: &str,
    ) -> Result<Family, RosterError> {
        let result = store.remove_resource::<R::Resource>(member_id, resource_id);
        if result.is_ok() && self.is_editing(resource_id) {
            self.cancel_edit();
        }
        self.record(result)
    }

    fn record(&mut self, result: Result<Family, RosterError>) -> Result<Family, RosterError> {
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }
}

/// State of the member detail screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberProfileView {
    pub member_id: String,
    pub family: Family,
    pub basics: MemberForm,
    pub basics_error: Option<String>,
    pub conditions: ResourceEditor<ConditionRequest>,
    pub medications: ResourceEditor<MedicationRequest>,
    pub appointments: ResourceEditor<AppointmentRequest>,
}

impl MemberProfileView {
    pub fn load<S: FamilyStorage>(
        store: &mut RosterStore<S>,
        member_id: &str,
        transient: Option<Family>,
    ) -> Self {
        let family = store.initialize(transient).clone();
        let basics = family
            .member(member_id)
            .map(MemberForm::from_member)
            .unwrap_or_default();

        Self {
            member_id: member_id.to_string(),
            family,
            basics,
            ..Self::default()
        }
    }

    /// The member this screen shows, `None` renders the not found state
    pub fn member(&self) -> Option<&Member> {
        self.family.member(&self.member_id)
    }

    pub fn is_not_found(&self) -> bool {
        self.member().is_none()
    }

    /// Back to the family overview with the current snapshot
    pub fn back_to_family(&self) -> Route {
        Route::family_profile(self.family.clone())
    }

    /// Save the basic info form and continue to the family overview with the
    /// updated family
    pub fn save_basics<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<Route, RosterError> {
        match store.patch_member(&self.member_id, self.basics.to_update_request()) {
            Ok(updated) => {
                self.basics_error = None;
                self.family = updated.clone();
                Ok(Route::family_profile(updated))
            }
            Err(e) => {
                self.basics_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Adopt the snapshot returned by a nested resource operation
    pub fn adopt(&mut self, result: Result<Family, RosterError>) -> Result<(), RosterError> {
        self.family = result?;
        Ok(())
    }

    pub fn add_condition<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<(), RosterError> {
        let result = self.conditions.submit_draft(store, &self.member_id);
        self.adopt(result)
    }

    pub fn save_condition<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<(), RosterError> {
        let result = self.conditions.submit_edit(store, &self.member_id);
        self.adopt(result)
    }

    pub fn remove_condition<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
        condition_id: &str,
    ) -> Result<(), RosterError> {
        let result = self.conditions.remove(store, &self.member_id, condition_id);
        self.adopt(result)
    }

    pub fn add_medication<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<(), RosterError> {
        let result = self.medications.submit_draft(store, &self.member_id);
        self.adopt(result)
    }

    pub fn save_medication<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<(), RosterError> {
        let result = self.medications.submit_edit(store, &self.member_id);
        self.adopt(result)
    }

    pub fn remove_medication<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
        medication_id: &str,
    ) -> Result<(), RosterError> {
        let result = self.medications.remove(store, &self.member_id, medication_id);
        self.adopt(result)
    }

    pub fn add_appointment<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<(), RosterError> {
        let result = self.appointments.submit_draft(store, &self.member_id);
        self.adopt(result)
    }

    pub fn save_appointment<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<(), RosterError> {
        let result = self.appointments.submit_edit(store, &self.member_id);
        self.adopt(result)
    }

    pub fn remove_appointment<S: FamilyStorage>(
        &mut self,
        store: &mut RosterStore<S>,
        appointment_id: &str,
    ) -> Result<(), RosterError> {
        let result = self.appointments.remove(store, &self.member_id, appointment_id);
        self.adopt(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySlot, RecordAdapter};
    use shared::{CreateMemberRequest, ResourceKind};

    type MemoryStore = RosterStore<RecordAdapter<MemorySlot>>;

    fn setup_test() -> (MemoryStore, MemorySlot, String) {
        let slot = MemorySlot::new();
        let mut store = RosterStore::new(RecordAdapter::new(slot.clone()));
        let member = store
            .add_member(CreateMemberRequest {
                first_name: "Rohan".to_string(),
                age: "34".to_string(),
                role: "Father".to_string(),
            })
            .unwrap();
        (store, slot, member.id)
    }

    #[test]
    fn test_unknown_member_is_not_found() {
        let (mut store, _slot, _id) = setup_test();
        let snapshot = store.snapshot();

        let view = MemberProfileView::load(&mut store, "missing", Some(snapshot.clone()));

        assert!(view.is_not_found());
        assert_eq!(view.basics, MemberForm::default());
        assert_eq!(view.back_to_family(), Route::family_profile(snapshot));
    }

    #[test]
    fn test_load_resolves_member_after_reload() {
        let (_store, slot, member_id) = setup_test();
        let mut reloaded = RosterStore::new(RecordAdapter::new(slot));

        let view = MemberProfileView::load(&mut reloaded, &member_id, None);

        assert_eq!(view.member().map(|m| m.first_name.as_str()), Some("Rohan"));
        assert_eq!(view.basics.age, "34");
    }

    #[test]
    fn test_save_basics_forwards_updated_family() {
        let (mut store, _slot, member_id) = setup_test();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);

        view.basics.first_name = " Ro ".to_string();
        view.basics.age = "35".to_string();
        let route = view.save_basics(&mut store).unwrap();

        let persisted = store.storage().load().unwrap();
        assert_eq!(persisted.members[0].first_name, "Ro");
        assert_eq!(persisted.members[0].age, "35");
        assert_eq!(route, Route::family_profile(persisted));
    }

    #[test]
    fn test_save_basics_rejects_blank_name() {
        let (mut store, slot, member_id) = setup_test();
        let before = slot.contents();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);

        view.basics.first_name = "   ".to_string();

        assert_eq!(view.save_basics(&mut store), Err(RosterError::BlankFirstName));
        assert_eq!(view.basics_error.as_deref(), Some("First name is required"));
        assert_eq!(slot.contents(), before);
    }

    #[test]
    fn test_condition_section_add_edit_remove() {
        let (mut store, _slot, member_id) = setup_test();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);

        view.conditions.draft.name = "Asthma".to_string();
        view.add_condition(&mut store).unwrap();
        assert_eq!(view.conditions.draft, ConditionRequest::default());

        let condition = view.member().unwrap().conditions[0].clone();
        view.conditions.begin_edit(&condition);
        assert!(view.conditions.is_editing(&condition.id));
        assert_eq!(view.conditions.edit_draft.name, "Asthma");

        view.conditions.edit_draft.notes = "Mild".to_string();
        view.save_condition(&mut store).unwrap();
        assert!(view.conditions.editing_id.is_none());
        assert_eq!(
            view.member().unwrap().conditions[0].notes.as_deref(),
            Some("Mild")
        );

        view.remove_condition(&mut store, &condition.id).unwrap();
        assert!(view.member().unwrap().conditions.is_empty());
        assert_eq!(view.family, store.storage().load().unwrap());
    }

    #[test]
    fn test_invalid_draft_keeps_form() {
        let (mut store, slot, member_id) = setup_test();
        let before = slot.contents();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);

        view.appointments.draft.description = "Dentist".to_string();
        let result = view.add_appointment(&mut store);

        assert_eq!(
            result,
            Err(RosterError::MissingField {
                kind: ResourceKind::Appointment,
                field: "date"
            })
        );
        assert_eq!(view.appointments.draft.description, "Dentist");
        assert!(view.appointments.error.is_some());
        assert_eq!(slot.contents(), before);
    }

    #[test]
    fn test_medication_section() {
        let (mut store, _slot, member_id) = setup_test();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);

        view.medications.draft = MedicationRequest {
            name: "Inhaler".to_string(),
            dosage: "2 puffs".to_string(),
            ..MedicationRequest::default()
        };
        view.add_medication(&mut store).unwrap();

        let medication = view.member().unwrap().medications[0].clone();
        view.medications.begin_edit(&medication);
        view.medications.edit_draft.frequency = "Daily".to_string();
        view.save_medication(&mut store).unwrap();

        let saved = view.member().unwrap().medications[0].clone();
        assert_eq!(saved.id, medication.id);
        assert_eq!(saved.frequency.as_deref(), Some("Daily"));

        view.medications.begin_edit(&saved);
        view.remove_medication(&mut store, &medication.id).unwrap();
        assert!(view.medications.editing_id.is_none());
        assert!(view.member().unwrap().medications.is_empty());
    }

    #[test]
    fn test_save_edit_without_selection() {
        let (mut store, _slot, member_id) = setup_test();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);

        assert!(view.save_appointment(&mut store).is_err());
    }

    #[test]
    fn test_remove_unknown_condition_reports_error() {
        let (mut store, slot, member_id) = setup_test();
        let mut view = MemberProfileView::load(&mut store, &member_id, None);
        let before = slot.contents();

        let result = view.remove_condition(&mut store, "c-unknown");

        assert_eq!(
            result,
            Err(RosterError::ResourceNotFound {
                kind: ResourceKind::Condition,
                id: "c-unknown".to_string()
            })
        );
        assert!(view.conditions.error.is_some());
        assert_eq!(slot.contents(), before);
    }
}

use log::{debug, info, warn};
use shared::{
    Appointment, AppointmentRequest, Condition, ConditionRequest, CreateMemberRequest, Family,
    Medication, MedicationRequest, Member, UpdateMemberRequest,
};

use super::reconcile::reconcile_with_source;
use super::resources::{appended, removed, replaced, unique_id, Resource, ResourceRequest};
use crate::error::RosterError;
use crate::storage::{normalize_family, FamilyStorage};

/// The single authoritative in-memory family, written through to storage.
///
/// Every successful mutation saves the complete next family first and only
/// then makes it the in-memory snapshot, so memory and storage agree whenever
/// a call returns. Rejected mutations touch neither. Members or nested
/// entries that the stored record could not hold (blank required names,
/// repeated ids) are dropped before saving.
pub struct RosterStore<S: FamilyStorage> {
    storage: S,
    family: Family,
}

impl<S: FamilyStorage> RosterStore<S> {
    /// Create a store holding the canonical empty family
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            family: Family::default(),
        }
    }

    /// Choose the starting snapshot: `preferred` when it has members,
    /// otherwise the stored family, otherwise the empty family.
    ///
    /// This only reads; a preferred snapshot reaches storage with the next
    /// mutation.
    pub fn initialize(&mut self, preferred: Option<Family>) -> &Family {
        let use_preferred = preferred.as_ref().is_some_and(|family| !family.is_empty());
        let persisted = if use_preferred {
            None
        } else {
            self.storage.load()
        };

        let (family, source) = reconcile_with_source(preferred, persisted);
        debug!(
            "Initialized roster from {:?} with {} members",
            source,
            family.members.len()
        );
        self.family = family;
        &self.family
    }

    /// Current family
    pub fn family(&self) -> &Family {
        &self.family
    }

    /// Owned copy of the current family
    pub fn snapshot(&self) -> Family {
        self.family.clone()
    }

    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.family.member(member_id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the whole family
    pub fn replace_all(&mut self, family: Family) -> &Family {
        info!(
            "Replacing family '{}' with {} members",
            family.family_name,
            family.members.len()
        );
        self.commit(family)
    }

    /// Append a new member with a fresh id and empty nested collections
    pub fn add_member(&mut self, request: CreateMemberRequest) -> Result<Member, RosterError> {
        let first_name = request.first_name.trim();
        if first_name.is_empty() {
            warn!("Rejected member with blank first name");
            return Err(RosterError::BlankFirstName);
        }

        let id = unique_id(|candidate| self.family.member(candidate).is_some());
        let member = Member {
            id,
            first_name: first_name.to_string(),
            age: request.age.trim().to_string(),
            role: request.role.trim().to_string(),
            ..Member::default()
        };

        let mut next = self.family.clone();
        next.members.push(member.clone());
        self.commit(next);

        info!("Added member {} with ID: {}", member.first_name, member.id);
        Ok(member)
    }

    /// Merge `patch` into one member and return the updated family.
    ///
    /// Present fields replace the member's fields; nested arrays are replaced
    /// whole. Unknown ids and blank first names write nothing.
    pub fn patch_member(
        &mut self,
        member_id: &str,
        patch: UpdateMemberRequest,
    ) -> Result<Family, RosterError> {
        let Some(index) = self.family.members.iter().position(|m| m.id == member_id) else {
            warn!("Member not found: {}", member_id);
            return Err(RosterError::MemberNotFound(member_id.to_string()));
        };

        if patch
            .first_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            warn!("Rejected patch with blank first name for member {}", member_id);
            return Err(RosterError::BlankFirstName);
        }

        let mut next = self.family.clone();
        apply_patch(&mut next.members[index], patch);

        info!("Updated member {}", member_id);
        Ok(self.commit(next).clone())
    }

    /// Remove the stored family and reset to the empty family
    pub fn clear_all(&mut self) {
        info!("Clearing family roster");
        self.storage.clear();
        self.family = Family::default();
    }

    /// Append a nested resource built from `request`
    pub fn add_resource<R: ResourceRequest>(
        &mut self,
        member_id: &str,
        request: &R,
    ) -> Result<Family, RosterError> {
        let existing = self.resources::<R::Resource>(member_id)?;
        let id = unique_id(|candidate| existing.iter().any(|item| item.id() == candidate));
        let resource = request.build(id)?;

        debug!(
            "Adding {} {} to member {}",
            <R::Resource as Resource>::KIND,
            resource.id(),
            member_id
        );
        let patch = <R::Resource as Resource>::into_patch(appended(existing, resource));
        self.patch_member(member_id, patch)
    }

    /// Replace the nested resource `resource_id` with one built from `request`
    pub fn update_resource<R: ResourceRequest>(
        &mut self,
        member_id: &str,
        resource_id: &str,
        request: &R,
    ) -> Result<Family, RosterError> {
        let existing = self.resources::<R::Resource>(member_id)?;
        let resource = request.build(resource_id.to_string())?;
        let next = replaced(existing, resource).ok_or_else(|| RosterError::ResourceNotFound {
            kind: <R::Resource as Resource>::KIND,
            id: resource_id.to_string(),
        })?;

        self.patch_member(member_id, <R::Resource as Resource>::into_patch(next))
    }

    /// Remove the nested resource `resource_id`
    pub fn remove_resource<T: Resource>(
        &mut self,
        member_id: &str,
        resource_id: &str,
    ) -> Result<Family, RosterError> {
        let existing = self.resources::<T>(member_id)?;
        let next = removed(existing, resource_id).ok_or_else(|| RosterError::ResourceNotFound {
            kind: T::KIND,
            id: resource_id.to_string(),
        })?;

        self.patch_member(member_id, T::into_patch(next))
    }

    pub fn add_condition(
        &mut self,
        member_id: &str,
        request: &ConditionRequest,
    ) -> Result<Family, RosterError> {
        self.add_resource(member_id, request)
    }

    pub fn update_condition(
        &mut self,
        member_id: &str,
        condition_id: &str,
        request: &ConditionRequest,
    ) -> Result<Family, RosterError> {
        self.update_resource(member_id, condition_id, request)
    }

    pub fn remove_condition(
        &mut self,
        member_id: &str,
        condition_id: &str,
    ) -> Result<Family, RosterError> {
        self.remove_resource::<Condition>(member_id, condition_id)
    }

    pub fn add_medication(
        &mut self,
        member_id: &str,
        request: &MedicationRequest,
    ) -> Result<Family, RosterError> {
        self.add_resource(member_id, request)
    }

    pub fn update_medication(
        &mut self,
        member_id: &str,
        medication_id: &str,
        request: &MedicationRequest,
    ) -> Result<Family, RosterError> {
        self.update_resource(member_id, medication_id, request)
    }

    pub fn remove_medication(
        &mut self,
        member_id: &str,
        medication_id: &str,
    ) -> Result<Family, RosterError> {
        self.remove_resource::<Medication>(member_id, medication_id)
    }

    pub fn add_appointment(
        &mut self,
        member_id: &str,
        request: &AppointmentRequest,
    ) -> Result<Family, RosterError> {
        self.add_resource(member_id, request)
    }

    pub fn update_appointment(
        &mut self,
        member_id: &str,
        appointment_id: &str,
        request: &AppointmentRequest,
    ) -> Result<Family, RosterError> {
        self.update_resource(member_id, appointment_id, request)
    }

    pub fn remove_appointment(
        &mut self,
        member_id: &str,
        appointment_id: &str,
    ) -> Result<Family, RosterError> {
        self.remove_resource::<Appointment>(member_id, appointment_id)
    }

    fn resources<T: Resource>(&self, member_id: &str) -> Result<&[T], RosterError> {
        self.family
            .member(member_id)
            .map(T::collection)
            .ok_or_else(|| RosterError::MemberNotFound(member_id.to_string()))
    }

    /// Persist first, then adopt the persisted family in memory
    /// Save `next` as a reload would see it, then make it current
    fn commit(&mut self, next: Family) -> &Family {
        let normalized = normalize_family(&next);
        if normalized != next {
            warn!("Dropped invalid or duplicate entries from family '{}'", next.family_name);
        }

        self.storage.save(&normalized);
        self.family = normalized;
        &self.family
    }
}

fn apply_patch(member: &mut Member, patch: UpdateMemberRequest) {
    if let Some(first_name) = patch.first_name {
        member.first_name = first_name.trim().to_string();
    }
    if let Some(age) = patch.age {
        member.age = age;
    }
    if let Some(role) = patch.role {
        member.role = role;
    }
    if let Some(conditions) = patch.conditions {
        member.conditions = conditions;
    }
    if let Some(medications) = patch.medications {
        member.medications = medications;
    }
    if let Some(appointments) = patch.appointments {
        member.appointments = appointments;
    }
}

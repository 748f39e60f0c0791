//! # Nested Resources
//!
//! Conditions, medications and appointments live inside a member and are
//! edited by id. The store never mutates a nested collection in place: the
//! helpers here compute the next collection, which then replaces the old one
//! through a member patch.

use shared::{
    Appointment, AppointmentRequest, Condition, ConditionRequest, Medication, MedicationRequest,
    Member, ResourceKind, UpdateMemberRequest,
};
use uuid::Uuid;

use crate::error::RosterError;

/// A nested resource of a member, addressed by id
pub trait Resource: Clone {
    const KIND: ResourceKind;

    fn id(&self) -> &str;

    /// The member's collection of this kind
    fn collection(member: &Member) -> &[Self];

    /// A member patch replacing the whole collection of this kind
    fn into_patch(items: Vec<Self>) -> UpdateMemberRequest;
}

/// Form input that builds a validated resource
pub trait ResourceRequest: Clone + Default {
    type Resource: Resource;

    /// Validate the input and build a resource carrying `id`
    fn build(&self, id: String) -> Result<Self::Resource, RosterError>;

    /// Prefill form input from an existing resource
    fn from_resource(resource: &Self::Resource) -> Self;
}

/// Fresh random identifier
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Fresh identifier not accepted by `taken`
pub fn unique_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id();
        if !taken(&id) {
            return id;
        }
    }
}

/// Collection with `item` appended at the end
pub fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Collection with the entry sharing `item`'s id replaced in place, `None`
/// when no entry has that id
pub fn replaced<T: Resource>(items: &[T], item: T) -> Option<Vec<T>> {
    let index = items.iter().position(|existing| existing.id() == item.id())?;
    let mut next = items.to_vec();
    next[index] = item;
    Some(next)
}

/// Collection without the entry with `id`, `None` when no entry has that id
pub fn removed<T: Resource>(items: &[T], id: &str) -> Option<Vec<T>> {
    if !items.iter().any(|existing| existing.id() == id) {
        return None;
    }
    Some(items.iter().filter(|existing| existing.id() != id).cloned().collect())
}

fn required(value: &str, kind: ResourceKind, field: &'static str) -> Result<String, RosterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::MissingField { kind, field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Resource for Condition {
    const KIND: ResourceKind = ResourceKind::Condition;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(member: &Member) -> &[Self] {
        &member.conditions
    }

    fn into_patch(items: Vec<Self>) -> UpdateMemberRequest {
        UpdateMemberRequest {
            conditions: Some(items),
            ..UpdateMemberRequest::default()
        }
    }
}

impl Resource for Medication {
    const KIND: ResourceKind = ResourceKind::Medication;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(member: &Member) -> &[Self] {
        &member.medications
    }

    fn into_patch(items: Vec<Self>) -> UpdateMemberRequest {
        UpdateMemberRequest {
            medications: Some(items),
            ..UpdateMemberRequest::default()
        }
    }
}

impl Resource for Appointment {
    const KIND: ResourceKind = ResourceKind::Appointment;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(member: &Member) -> &[Self] {
        &member.appointments
    }

    fn into_patch(items: Vec<Self>) -> UpdateMemberRequest {
        UpdateMemberRequest {
            appointments: Some(items),
            ..UpdateMemberRequest::default()
        }
    }
}

impl ResourceRequest for ConditionRequest {
    type Resource = Condition;

    fn build(&self, id: String) -> Result<Condition, RosterError> {
        Ok(Condition {
            id,
            name: required(&self.name, ResourceKind::Condition, "name")?,
            notes: optional(&self.notes),
        })
    }

    fn from_resource(condition: &Condition) -> Self {
        Self {
            name: condition.name.clone(),
            notes: text(&condition.notes),
        }
    }
}

impl ResourceRequest for MedicationRequest {
    type Resource = Medication;

    fn build(&self, id: String) -> Result<Medication, RosterError> {
        Ok(Medication {
            id,
            name: required(&self.name, ResourceKind::Medication, "name")?,
            dosage: optional(&self.dosage),
            frequency: optional(&self.frequency),
            notes: optional(&self.notes),
        })
    }

    fn from_resource(medication: &Medication) -> Self {
        Self {
            name: medication.name.clone(),
            dosage: text(&medication.dosage),
            frequency: text(&medication.frequency),
            notes: text(&medication.notes),
        }
    }
}

impl ResourceRequest for AppointmentRequest {
    type Resource = Appointment;

    fn build(&self, id: String) -> Result<Appointment, RosterError> {
        Ok(Appointment {
            id,
            description: required(&self.description, ResourceKind::Appointment, "description")?,
            date: required(&self.date, ResourceKind::Appointment, "date")?,
            time: optional(&self.time),
            location: optional(&self.location),
            notes: optional(&self.notes),
        })
    }

    fn from_resource(appointment: &Appointment) -> Self {
        Self {
            description: appointment.description.clone(),
            date: appointment.date.clone(),
            time: text(&appointment.time),
            location: text(&appointment.location),
            notes: text(&appointment.notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(id: &str, name: &str) -> Condition {
        Condition {
            id: id.to_string(),
            name: name.to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_appended_preserves_order() {
        let items = vec![condition("c1", "Asthma")];
        let next = appended(&items, condition("c2", "Eczema"));

        let ids: Vec<&str> = next.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_replaced_keeps_position() {
        let items = vec![condition("c1", "Asthma"), condition("c2", "Eczema")];

        let next = replaced(&items, condition("c1", "Severe asthma")).unwrap();
        assert_eq!(next[0].name, "Severe asthma");
        assert_eq!(next[1].name, "Eczema");

        assert!(replaced(&items, condition("c9", "Unknown")).is_none());
    }

    #[test]
    fn test_removed() {
        let items = vec![condition("c1", "Asthma"), condition("c2", "Eczema")];

        let next = removed(&items, "c1").unwrap();
        assert_eq!(next, vec![condition("c2", "Eczema")]);

        assert!(removed(&items, "c9").is_none());
    }

    #[test]
    fn test_unique_id_skips_taken_ids() {
        let first = generate_id();
        let second = unique_id(|candidate| candidate == first);
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&second).is_ok());
    }

    #[test]
    fn test_condition_request_validation() {
        let request = ConditionRequest {
            name: "  Asthma ".to_string(),
            notes: "   ".to_string(),
        };
        let built = request.build("c1".to_string()).unwrap();
        assert_eq!(built.name, "Asthma");
        assert!(built.notes.is_none());

        let blank = ConditionRequest::default();
        assert_eq!(
            blank.build("c2".to_string()),
            Err(RosterError::MissingField {
                kind: ResourceKind::Condition,
                field: "name"
            })
        );
    }

    #[test]
    fn test_appointment_requires_description_and_date() {
        let missing_date = AppointmentRequest {
            description: "Dentist".to_string(),
            ..AppointmentRequest::default()
        };
        assert_eq!(
            missing_date.build("a1".to_string()),
            Err(RosterError::MissingField {
                kind: ResourceKind::Appointment,
                field: "date"
            })
        );

        let missing_description = AppointmentRequest {
            date: "2026-11-02".to_string(),
            ..AppointmentRequest::default()
        };
        assert!(missing_description.build("a1".to_string()).is_err());
    }

    #[test]
    fn test_medication_form_prefill_round_trip() {
        let medication = Medication {
            id: "x1".to_string(),
            name: "Inhaler".to_string(),
            dosage: Some("2 puffs".to_string()),
            frequency: None,
            notes: Some("Before exercise".to_string()),
        };

        let form = MedicationRequest::from_resource(&medication);
        assert_eq!(form.frequency, "");
        assert_eq!(form.build("x1".to_string()).unwrap(), medication);
    }

    #[test]
    fn test_into_patch_only_touches_one_collection() {
        let patch = Condition::into_patch(vec![condition("c1", "Asthma")]);
        assert!(patch.conditions.is_some());
        assert!(patch.medications.is_none());
        assert!(patch.appointments.is_none());
        assert!(patch.first_name.is_none());
    }
}

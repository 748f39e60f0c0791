use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level family record: a name plus an ordered roster of members.
///
/// `Family::default()` is the canonical empty family (`familyName: ""`, no members).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    /// Display name of the family, may be empty
    pub family_name: String,
    /// Members in insertion (display) order
    pub members: Vec<Member>,
}

/// One tracked person with basic fields and three nested resource collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Random identifier assigned once at creation
    pub id: String,
    /// Trimmed, never blank
    pub first_name: String,
    /// Free-form age, empty when unknown
    #[serde(default)]
    pub age: String,
    /// Free-form role within the family ("Father", "Daughter", ...)
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// A diagnosed or tracked health condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A medication taken by a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A scheduled appointment. An appointment without a date does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub description: String,
    /// Date as entered by the user (the date input yields YYYY-MM-DD)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Which nested collection of a member a resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Condition,
    Medication,
    Appointment,
}

impl ResourceKind {
    /// Human-readable singular name
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Condition => "condition",
            ResourceKind::Medication => "medication",
            ResourceKind::Appointment => "appointment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request to add a member to the roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub first_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub role: String,
}

/// Partial update of a single member.
///
/// Present fields replace the member's fields wholesale; a present
/// `conditions` array replaces the whole collection rather than merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<Medication>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<Appointment>>,
}

/// Form input for adding or editing a condition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRequest {
    pub name: String,
    pub notes: String,
}

/// Form input for adding or editing a medication
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRequest {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub notes: String,
}

/// Form input for adding or editing an appointment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub notes: String,
}

/// Response body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Response body of `GET /db`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbCheckResponse {
    pub ok: bool,
    /// Rows returned by the connectivity query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error message when the query failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DbCheckResponse {
    pub fn success(result: serde_json::Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

impl Family {
    /// Find a member by id
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id == member_id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// "Gowda Family" when a name is set, otherwise just "Family"
    pub fn display_label(&self) -> String {
        let name = self.family_name.trim();
        if name.is_empty() {
            "Family".to_string()
        } else {
            format!("{} Family", name)
        }
    }
}

impl Member {
    /// Collection length for the given resource kind
    pub fn resource_count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Condition => self.conditions.len(),
            ResourceKind::Medication => self.medications.len(),
            ResourceKind::Appointment => self.appointments.len(),
        }
    }
}

impl UpdateMemberRequest {
    /// Patch carrying only the basic info fields
    pub fn basics(first_name: &str, age: &str, role: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            age: Some(age.to_string()),
            role: Some(role.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

//! # Stored Record Schema
//!
//! Explicit validation of the stored family record. The stored bytes are
//! untrusted (older app versions, manual edits, other tabs), so they are
//! parsed into a `serde_json::Value` and checked field by field.
//!
//! The top-level shape must be intact or the whole record is rejected.
//! Below that, damage is contained: a broken member or nested entry is
//! dropped and the rest of the record survives.

use log::debug;
use serde_json::{Map, Value};
use shared::{Appointment, Condition, Family, Medication, Member};
use thiserror::Error;

/// Outcome of parsing a stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFamily {
    Valid(Family),
    Rejected(RejectReason),
}

/// Why a whole stored record was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("stored record is empty")]
    Empty,
    #[error("stored record is not valid JSON: {0}")]
    Malformed(String),
    #[error("stored record is not an object")]
    NotAnObject,
    #[error("familyName is missing or not a string")]
    InvalidFamilyName,
    #[error("members is missing or not an array")]
    InvalidMembers,
}

/// Parse raw stored text into a family
pub fn parse_family(raw: &str) -> ParsedFamily {
    if raw.trim().is_empty() {
        return ParsedFamily::Rejected(RejectReason::Empty);
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => parse_family_value(&value),
        Err(e) => ParsedFamily::Rejected(RejectReason::Malformed(e.to_string())),
    }
}

/// Validate an already-decoded JSON value as a family record
pub fn parse_family_value(value: &Value) -> ParsedFamily {
    let Some(record) = value.as_object() else {
        return ParsedFamily::Rejected(RejectReason::NotAnObject);
    };

    let Some(family_name) = record.get("familyName").and_then(Value::as_str) else {
        return ParsedFamily::Rejected(RejectReason::InvalidFamilyName);
    };

    let Some(entries) = record.get("members").and_then(Value::as_array) else {
        return ParsedFamily::Rejected(RejectReason::InvalidMembers);
    };

    let members = collect_unique(entries, "member", parse_member, |m| m.id.as_str());

    ParsedFamily::Valid(Family {
        family_name: family_name.to_string(),
        members,
    })
}

/// The family as a save followed by a load would return it: invalid members
/// and nested entries and later duplicates of an id are dropped.
pub fn normalize_family(family: &Family) -> Family {
    let value = match serde_json::to_value(family) {
        Ok(value) => value,
        Err(e) => {
            debug!("Family is not serializable, keeping it as is: {}", e);
            return family.clone();
        }
    };

    match parse_family_value(&value) {
        ParsedFamily::Valid(normalized) => normalized,
        ParsedFamily::Rejected(_) => family.clone(),
    }
}

/// Shape of one string-typed field
enum Text<'a> {
    Missing,
    Present(&'a str),
    WrongType,
}

fn text<'a>(record: &'a Map<String, Value>, key: &str) -> Text<'a> {
    match record.get(key) {
        None | Some(Value::Null) => Text::Missing,
        Some(Value::String(s)) => Text::Present(s),
        Some(_) => Text::WrongType,
    }
}

/// A string that must be present and not blank
fn required(record: &Map<String, Value>, key: &str) -> Option<String> {
    match text(record, key) {
        Text::Present(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}

/// A string that may be absent. The outer `None` means the field had the
/// wrong type.
fn optional(record: &Map<String, Value>, key: &str) -> Option<Option<String>> {
    match text(record, key) {
        Text::Missing => Some(None),
        Text::Present(s) => Some(Some(s.to_string())),
        Text::WrongType => None,
    }
}

/// A string that defaults to empty when absent
fn defaulted(record: &Map<String, Value>, key: &str) -> Option<String> {
    optional(record, key).map(Option::unwrap_or_default)
}

/// A nested collection; absent means empty, a non-array is invalid
fn collection<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a [Value]> {
    match record.get(key) {
        None | Some(Value::Null) => Some(&[]),
        Some(Value::Array(items)) => Some(items.as_slice()),
        Some(_) => None,
    }
}

/// Parse every entry, dropping invalid ones and later duplicates of an id
fn collect_unique<T>(
    entries: &[Value],
    label: &str,
    parse: fn(&Value) -> Option<T>,
    id: fn(&T) -> &str,
) -> Vec<T> {
    let mut items: Vec<T> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match parse(entry) {
            Some(item) if items.iter().any(|existing| id(existing) == id(&item)) => {
                debug!("Dropping {} at index {}: duplicate id {}", label, index, id(&item));
            }
            Some(item) => items.push(item),
            None => debug!("Dropping invalid {} at index {}", label, index),
        }
    }
    items
}

fn parse_member(value: &Value) -> Option<Member> {
    let record = value.as_object()?;

    Some(Member {
        id: required(record, "id")?,
        first_name: required(record, "firstName")?,
        age: defaulted(record, "age")?,
        role: defaulted(record, "role")?,
        conditions: collect_unique(
            collection(record, "conditions")?,
            "condition",
            parse_condition,
            |c| c.id.as_str(),
        ),
        medications: collect_unique(
            collection(record, "medications")?,
            "medication",
            parse_medication,
            |m| m.id.as_str(),
        ),
        appointments: collect_unique(
            collection(record, "appointments")?,
            "appointment",
            parse_appointment,
            |a| a.id.as_str(),
        ),
    })
}

fn parse_condition(value: &Value) -> Option<Condition> {
    let record = value.as_object()?;

    Some(Condition {
        id: required(record, "id")?,
        name: required(record, "name")?,
        notes: optional(record, "notes")?,
    })
}

fn parse_medication(value: &Value) -> Option<Medication> {
    let record = value.as_object()?;

    Some(Medication {
        id: required(record, "id")?,
        name: required(record, "name")?,
        dosage: optional(record, "dosage")?,
        frequency: optional(record, "frequency")?,
        notes: optional(record, "notes")?,
    })
}

fn parse_appointment(value: &Value) -> Option<Appointment> {
    let record = value.as_object()?;

    Some(Appointment {
        id: required(record, "id")?,
        description: required(record, "description")?,
        date: required(record, "date")?,
        time: optional(record, "time")?,
        location: optional(record, "location")?,
        notes: optional(record, "notes")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ParsedFamily {
        parse_family(&value.to_string())
    }

    fn valid(value: Value) -> Family {
        match parse(value) {
            ParsedFamily::Valid(family) => family,
            ParsedFamily::Rejected(reason) => panic!("unexpected rejection: {}", reason),
        }
    }

    #[test]
    fn test_rejects_blank_and_malformed_input() {
        assert_eq!(parse_family(""), ParsedFamily::Rejected(RejectReason::Empty));
        assert_eq!(parse_family("   \n"), ParsedFamily::Rejected(RejectReason::Empty));
        assert!(matches!(
            parse_family("{not json"),
            ParsedFamily::Rejected(RejectReason::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_top_level_shape() {
        assert_eq!(parse(json!([1, 2])), ParsedFamily::Rejected(RejectReason::NotAnObject));
        assert_eq!(parse(json!("family")), ParsedFamily::Rejected(RejectReason::NotAnObject));
        assert_eq!(
            parse(json!({ "members": [] })),
            ParsedFamily::Rejected(RejectReason::InvalidFamilyName)
        );
        assert_eq!(
            parse(json!({ "familyName": 7, "members": [] })),
            ParsedFamily::Rejected(RejectReason::InvalidFamilyName)
        );
        assert_eq!(
            parse(json!({ "familyName": "Gowda" })),
            ParsedFamily::Rejected(RejectReason::InvalidMembers)
        );
        assert_eq!(
            parse(json!({ "familyName": "Gowda", "members": {} })),
            ParsedFamily::Rejected(RejectReason::InvalidMembers)
        );
    }

    #[test]
    fn test_fills_missing_age_role_and_collections() {
        let family = valid(json!({
            "familyName": "Gowda",
            "members": [{ "id": "m1", "firstName": "Rohan" }]
        }));

        assert_eq!(family.family_name, "Gowda");
        assert_eq!(family.members.len(), 1);
        let member = &family.members[0];
        assert_eq!(member.age, "");
        assert_eq!(member.role, "");
        assert!(member.conditions.is_empty());
        assert!(member.medications.is_empty());
        assert!(member.appointments.is_empty());
    }

    #[test]
    fn test_drops_invalid_members_and_keeps_order() {
        let family = valid(json!({
            "familyName": "",
            "members": [
                { "id": "m1", "firstName": "Rohan", "age": "34" },
                { "firstName": "No id" },
                { "id": "m3" },
                { "id": 4, "firstName": "Numeric id" },
                { "id": "m5", "firstName": "   " },
                { "id": "m6", "firstName": "Bad age", "age": 12 },
                { "id": "m7", "firstName": "Bad list", "conditions": "asthma" },
                "not an object",
                { "id": "m1", "firstName": "Duplicate" },
                { "id": "m9", "firstName": "Asha", "role": null }
            ]
        }));

        let names: Vec<&str> = family.members.iter().map(|m| m.first_name.as_str()).collect();
        assert_eq!(names, vec!["Rohan", "Asha"]);
        assert_eq!(family.members[0].age, "34");
        assert_eq!(family.members[1].role, "");
    }

    #[test]
    fn test_drops_invalid_nested_entries() {
        let family = valid(json!({
            "familyName": "Gowda",
            "members": [{
                "id": "m1",
                "firstName": "Rohan",
                "conditions": [
                    { "id": "c1", "name": "Asthma", "notes": "Seasonal" },
                    { "id": "c2" },
                    { "id": "c1", "name": "Duplicate" },
                    { "id": "c4", "name": "Bad notes", "notes": ["x"] }
                ],
                "medications": [
                    { "id": "x1", "name": "Inhaler", "dosage": "2 puffs" },
                    { "name": "No id" }
                ],
                "appointments": [
                    { "id": "a1", "description": "Checkup", "date": "2026-11-02" },
                    { "id": "a2", "description": "No date" },
                    { "id": "a3", "description": "Blank date", "date": "" }
                ]
            }]
        }));

        let member = &family.members[0];
        assert_eq!(member.conditions.len(), 1);
        assert_eq!(member.conditions[0].notes.as_deref(), Some("Seasonal"));
        assert_eq!(member.medications.len(), 1);
        assert_eq!(member.medications[0].dosage.as_deref(), Some("2 puffs"));
        assert!(member.medications[0].frequency.is_none());
        assert_eq!(member.appointments.len(), 1);
        assert_eq!(member.appointments[0].id, "a1");
    }

    #[test]
    fn test_serialized_family_parses_back_unchanged() {
        let family = Family {
            family_name: "Gowda".to_string(),
            members: vec![Member {
                id: "m1".to_string(),
                first_name: "Rohan".to_string(),
                age: "34".to_string(),
                role: "Father".to_string(),
                conditions: vec![Condition {
                    id: "c1".to_string(),
                    name: "Asthma".to_string(),
                    notes: None,
                }],
                medications: vec![Medication {
                    id: "x1".to_string(),
                    name: "Inhaler".to_string(),
                    dosage: Some("2 puffs".to_string()),
                    frequency: Some("Daily".to_string()),
                    notes: None,
                }],
                appointments: vec![Appointment {
                    id: "a1".to_string(),
                    description: "Checkup".to_string(),
                    date: "2026-11-02".to_string(),
                    time: None,
                    location: Some("Clinic".to_string()),
                    notes: None,
                }],
            }],
        };

        let raw = serde_json::to_string(&family).unwrap();
        assert_eq!(parse_family(&raw), ParsedFamily::Valid(family));
    }

    #[test]
    fn test_normalize_drops_what_a_reload_would_drop() {
        let member = |id: &str, first_name: &str| Member {
            id: id.to_string(),
            first_name: first_name.to_string(),
            ..Member::default()
        };
        let mut rohan = member("m1", "Rohan");
        rohan.conditions = vec![
            Condition {
                id: "c1".to_string(),
                name: "Asthma".to_string(),
                notes: None,
            },
            Condition {
                id: "c1".to_string(),
                name: "Eczema".to_string(),
                notes: None,
            },
            Condition {
                id: "c3".to_string(),
                name: "  ".to_string(),
                notes: None,
            },
        ];
        let family = Family {
            family_name: "Gowda".to_string(),
            members: vec![rohan, member("m1", "Asha"), member("m3", " ")],
        };

        let normalized = normalize_family(&family);

        assert_eq!(normalized.members.len(), 1);
        assert_eq!(normalized.members[0].first_name, "Rohan");
        let names: Vec<&str> = normalized.members[0]
            .conditions
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Asthma"]);

        let raw = serde_json::to_string(&family).unwrap();
        assert_eq!(parse_family(&raw), ParsedFamily::Valid(normalized.clone()));
        assert_eq!(normalize_family(&normalized), normalized);
    }
}

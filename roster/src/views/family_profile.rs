use shared::{Family, ResourceKind};

use super::navigation::Route;
use crate::domain::RosterStore;
use crate::storage::FamilyStorage;

/// Summary line for one member card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCard {
    pub member_id: String,
    pub first_name: String,
    pub age: String,
    pub role: String,
    pub condition_count: usize,
    pub medication_count: usize,
    pub appointment_count: usize,
}

/// State of the family overview screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyProfileView {
    pub family: Family,
}

impl FamilyProfileView {
    pub fn load<S: FamilyStorage>(store: &mut RosterStore<S>, transient: Option<Family>) -> Self {
        Self {
            family: store.initialize(transient).clone(),
        }
    }

    /// Heading, e.g. "Gowda Family"
    pub fn label(&self) -> String {
        self.family.display_label()
    }

    pub fn member_count(&self) -> usize {
        self.family.member_count()
    }

    pub fn cards(&self) -> Vec<MemberCard> {
        self.family
            .members
            .iter()
            .map(|member| MemberCard {
                member_id: member.id.clone(),
                first_name: member.first_name.clone(),
                age: member.age.clone(),
                role: member.role.clone(),
                condition_count: member.resource_count(ResourceKind::Condition),
                medication_count: member.resource_count(ResourceKind::Medication),
                appointment_count: member.resource_count(ResourceKind::Appointment),
            })
            .collect()
    }

    pub fn open_member(&self, member_id: &str) -> Route {
        Route::member_profile(member_id, self.family.clone())
    }

    /// Back to the creation flow to edit the roster
    pub fn edit_roster(&self) -> Route {
        Route::CreateFamily {
            transient: Some(self.family.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySlot, RecordAdapter};
    use shared::{Condition, Member};

    fn sample_family() -> Family {
        Family {
            family_name: "Gowda".to_string(),
            members: vec![
                Member {
                    id: "m1".to_string(),
                    first_name: "Rohan".to_string(),
                    age: "34".to_string(),
                    role: "Father".to_string(),
                    conditions: vec![Condition {
                        id: "c1".to_string(),
                        name: "Asthma".to_string(),
                        notes: None,
                    }],
                    ..Member::default()
                },
                Member {
                    id: "m2".to_string(),
                    first_name: "Asha".to_string(),
                    ..Member::default()
                },
            ],
        }
    }

    #[test]
    fn test_load_prefers_forwarded_snapshot() {
        let slot = MemorySlot::with_contents(r#"{"familyName":"Old","members":[]}"#);
        let mut store = RosterStore::new(RecordAdapter::new(slot));

        let view = FamilyProfileView::load(&mut store, Some(sample_family()));

        assert_eq!(view.label(), "Gowda Family");
        assert_eq!(view.member_count(), 2);
    }

    #[test]
    fn test_load_after_reload_uses_storage() {
        let slot = MemorySlot::new();
        let mut store = RosterStore::new(RecordAdapter::new(slot.clone()));
        store.replace_all(sample_family());

        let mut reloaded = RosterStore::new(RecordAdapter::new(slot));
        let view = FamilyProfileView::load(&mut reloaded, None);

        assert_eq!(view.family, sample_family());
    }

    #[test]
    fn test_cards_and_navigation() {
        let view = FamilyProfileView {
            family: sample_family(),
        };

        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].first_name, "Rohan");
        assert_eq!(cards[0].condition_count, 1);
        assert_eq!(cards[1].medication_count, 0);

        assert_eq!(
            view.open_member("m2"),
            Route::member_profile("m2", sample_family())
        );
        assert_eq!(view.edit_roster().path(), "/create-family");
    }

    #[test]
    fn test_empty_family_label() {
        let view = FamilyProfileView::default();
        assert_eq!(view.label(), "Family");
        assert!(view.cards().is_empty());
    }
}

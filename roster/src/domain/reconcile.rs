use shared::Family;

/// Where a starting snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    /// State forwarded by the previous screen
    Transient,
    /// The durable stored record
    Persisted,
    /// Neither was usable; the canonical empty family
    Empty,
}

/// Pick the starting snapshot for a screen.
///
/// Forwarded state wins when it has at least one member, so a screen shows
/// in-flight edits right after navigation. Otherwise the stored record is
/// used, which is what survives a page reload. With neither, the canonical
/// empty family.
pub fn reconcile(transient: Option<Family>, persisted: Option<Family>) -> Family {
    reconcile_with_source(transient, persisted).0
}

/// Same as [`reconcile`], also reporting which input was chosen
pub fn reconcile_with_source(
    transient: Option<Family>,
    persisted: Option<Family>,
) -> (Family, SnapshotSource) {
    match (transient, persisted) {
        (Some(family), _) if !family.members.is_empty() => (family, SnapshotSource::Transient),
        (_, Some(family)) => (family, SnapshotSource::Persisted),
        (_, None) => (Family::default(), SnapshotSource::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Member;

    fn family(name: &str, member_names: &[&str]) -> Family {
        Family {
            family_name: name.to_string(),
            members: member_names
                .iter()
                .enumerate()
                .map(|(i, first_name)| Member {
                    id: format!("m{}", i + 1),
                    first_name: first_name.to_string(),
                    ..Member::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_non_empty_transient_wins_verbatim() {
        let transient = family("Gowda", &["Rohan", "Asha"]);
        let persisted = family("Other", &["Someone"]);

        let (result, source) = reconcile_with_source(Some(transient.clone()), Some(persisted));
        assert_eq!(result, transient);
        assert_eq!(source, SnapshotSource::Transient);
    }

    #[test]
    fn test_empty_transient_falls_back_to_persisted() {
        let transient = family("Named but empty", &[]);
        let persisted = family("Gowda", &["Rohan"]);

        let (result, source) = reconcile_with_source(Some(transient), Some(persisted.clone()));
        assert_eq!(result, persisted);
        assert_eq!(source, SnapshotSource::Persisted);
    }

    #[test]
    fn test_absent_transient_uses_persisted() {
        let persisted = family("Gowda", &[]);
        assert_eq!(reconcile(None, Some(persisted.clone())), persisted);
    }

    #[test]
    fn test_nothing_available_is_canonical_empty() {
        let (result, source) = reconcile_with_source(None, None);
        assert_eq!(result, Family::default());
        assert_eq!(source, SnapshotSource::Empty);

        assert_eq!(reconcile(Some(Family::default()), None), Family::default());
    }
}

use shared::Family;

/// Screens of the application.
///
/// Screens that show the roster carry the family forwarded by the previous
/// screen. That state is only valid for this navigation; a reload starts from
/// the path alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    CreateFamily { transient: Option<Family> },
    FamilyProfile { transient: Option<Family> },
    MemberProfile {
        member_id: String,
        transient: Option<Family>,
    },
    Documents,
    About,
}

impl Route {
    /// Family profile showing `snapshot`
    pub fn family_profile(snapshot: Family) -> Self {
        Route::FamilyProfile {
            transient: Some(snapshot),
        }
    }

    /// Member profile for `member_id` within `snapshot`
    pub fn member_profile(member_id: impl Into<String>, snapshot: Family) -> Self {
        Route::MemberProfile {
            member_id: member_id.into(),
            transient: Some(snapshot),
        }
    }

    /// Forwarded family, if any
    pub fn transient(&self) -> Option<&Family> {
        match self {
            Route::CreateFamily { transient }
            | Route::FamilyProfile { transient }
            | Route::MemberProfile { transient, .. } => transient.as_ref(),
            Route::Home | Route::Documents | Route::About => None,
        }
    }

    /// URL path of the screen
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::CreateFamily { .. } => "/create-family".to_string(),
            Route::FamilyProfile { .. } => "/family-profile".to_string(),
            Route::MemberProfile { member_id, .. } => format!("/member-profile/{}", member_id),
            Route::Documents => "/documents".to_string(),
            Route::About => "/about".to_string(),
        }
    }

    /// Route for a URL path, without forwarded state. Unknown paths are `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/create-family" => Route::CreateFamily { transient: None },
            "/family-profile" => Route::FamilyProfile { transient: None },
            "/documents" => Route::Documents,
            "/about" => Route::About,
            other => {
                let member_id = other.strip_prefix("/member-profile/")?;
                if member_id.is_empty() || member_id.contains('/') {
                    return None;
                }
                Route::MemberProfile {
                    member_id: member_id.to_string(),
                    transient: None,
                }
            }
        };
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Member;

    #[test]
    fn test_paths_round_trip_without_state() {
        let routes = vec![
            Route::Home,
            Route::CreateFamily { transient: None },
            Route::FamilyProfile { transient: None },
            Route::MemberProfile {
                member_id: "m1".to_string(),
                transient: None,
            },
            Route::Documents,
            Route::About,
        ];

        for route in routes {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_rejects_unknown() {
        assert_eq!(Route::from_path("/nowhere"), None);
        assert_eq!(Route::from_path("/member-profile/"), None);
        assert_eq!(Route::from_path("/member-profile/a/b"), None);
        assert_eq!(Route::from_path("/about/"), Some(Route::About));
    }

    #[test]
    fn test_default_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
        assert_eq!(Route::default().path(), "/");
    }

    #[test]
    fn test_transient_state_is_carried() {
        let family = Family {
            family_name: "Gowda".to_string(),
            members: vec![Member {
                id: "m1".to_string(),
                first_name: "Rohan".to_string(),
                ..Member::default()
            }],
        };

        let route = Route::member_profile("m1", family.clone());
        assert_eq!(route.transient(), Some(&family));
        assert_eq!(route.path(), "/member-profile/m1");
        assert_eq!(Route::About.transient(), None);
    }
}

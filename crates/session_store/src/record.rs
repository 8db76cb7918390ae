//! The persisted session record

use brainbuddy_core::{UserProfile, UserRole};

/// A loaded session: the raw role literal plus the profile record.
///
/// `user_type` is kept as the raw stored string rather than an eagerly
/// parsed enum: the chat loader must distinguish "no session" (redirect)
/// from "session with an unrecognized role" (empty roster).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub user_type: String,
    pub profile: UserProfile,
}

impl SessionRecord {
    pub fn new(role: UserRole, profile: UserProfile) -> Self {
        Self {
            user_type: role.as_str().to_string(),
            profile,
        }
    }

    /// The parsed role, when the stored literal is a known one.
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_known_literal() {
        let record = SessionRecord::new(UserRole::Teacher, UserProfile::new("A", "1"));
        assert_eq!(record.role(), Some(UserRole::Teacher));
    }

    #[test]
    fn test_role_is_none_for_unknown_literal() {
        let record = SessionRecord {
            user_type: "admin".to_string(),
            profile: UserProfile::new("A", "1"),
        };
        assert_eq!(record.role(), None);
    }
}

//! Chat summary - one conversation-partner entry in the list

use brainbuddy_core::UserRole;
use serde::{Deserialize, Serialize};

/// A conversation-partner record as shown in the chat list.
///
/// `subject` is set for teacher partners, `school` for student partners;
/// the rest is presentation metadata. `timestamp` is a display string,
/// not a parsed time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    pub avatar: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: u32,
    pub is_online: bool,
}

impl ChatSummary {
    /// The role-specific descriptor line: subject for teachers, school
    /// for students.
    pub fn descriptor(&self) -> Option<&str> {
        match self.role {
            UserRole::Teacher => self.subject.as_deref(),
            UserRole::Student => self.school.as_deref(),
        }
    }

    /// Case-insensitive substring match over name, subject and school.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .subject
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(&query))
            || self
                .school
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ChatSummary {
        ChatSummary {
            id: "teacher-prof-michael-chen".to_string(),
            name: "Prof. Michael Chen".to_string(),
            role: UserRole::Teacher,
            subject: Some("Chemistry".to_string()),
            school: None,
            avatar: "/teacher-man-professional.jpg".to_string(),
            last_message: "I've uploaded the organic chemistry notes you requested.".to_string(),
            timestamp: "Yesterday".to_string(),
            unread: 2,
            is_online: false,
        }
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(entry().matches(""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let entry = entry();
        assert!(entry.matches("CHEM"));
        assert!(entry.matches("michael"));
        assert!(!entry.matches("physics"));
    }

    #[test]
    fn test_descriptor_follows_role() {
        assert_eq!(entry().descriptor(), Some("Chemistry"));

        let student = ChatSummary {
            role: UserRole::Student,
            subject: None,
            school: Some("Delhi Public School".to_string()),
            ..entry()
        };
        assert_eq!(student.descriptor(), Some("Delhi Public School"));
    }

    #[test]
    fn test_serde_shape_is_camel_case() {
        let json = serde_json::to_string(&entry()).unwrap();
        assert!(json.contains("\"lastMessage\""));
        assert!(json.contains("\"isOnline\""));
        assert!(!json.contains("\"school\""));
    }
}

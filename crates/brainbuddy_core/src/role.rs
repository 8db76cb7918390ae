//! User roles - the two account kinds the platform knows about

use serde::{Deserialize, Serialize};

/// The role a logged-in user acts under.
///
/// The lowercase literals are part of the persisted session format
/// (`userType` key), so `as_str`/`parse` must stay in sync with serde.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    /// The exact literal stored under the `userType` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Parse a persisted role literal. Anything other than the two known
    /// literals yields `None`; callers decide how to treat an unknown role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

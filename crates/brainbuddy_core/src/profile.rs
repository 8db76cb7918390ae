//! User profile data and form-level required fields

use serde::{Deserialize, Serialize};

/// Whether the user is logging in or registering.
///
/// Registration additionally requires a bio; login only asks for
/// name and mobile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Login,
    Register,
}

/// Profile data collected by the auth form and persisted under the
/// `userData` session key.
///
/// `mobile` is phone-number-shaped text; its format is not constrained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            bio: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Names of required fields that are empty for the given mode.
    ///
    /// Mirrors the `required` markers on the form widgets: `name` and
    /// `mobile` are always required, `bio` only when registering.
    pub fn missing_fields(&self, mode: AuthMode) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.mobile.trim().is_empty() {
            missing.push("mobile");
        }
        if mode == AuthMode::Register
            && self.bio.as_deref().map_or(true, |b| b.trim().is_empty())
        {
            missing.push("bio");
        }
        missing
    }
}

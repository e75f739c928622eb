//! # Admin Session
//!
//! After the identity provider sign-in, the admin API hands back an access
//! token and the admin's user record. That pair is the session: it is loaded
//! before making requests, saved after login and cleared on logout.
//!
//! The session is owned by the caller and passed around explicitly. Storage is
//! abstracted behind [`SessionStore`]:
//!
//! - [`fs::FileSessionStore`]: `session.json` in the data directory
//! - [`memory::MemorySessionStore`]: no persistence, for tests and embedding
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "accessToken": "eyJhbGciOi...",
//!   "user": { "_id": "64b7...", "username": "ops", "isAdmin": true },
//!   "savedAt": "2026-10-18T09:12:44Z"
//! }
//! ```

use crate::error::{LumoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// The signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub access_token: String,
    pub user: SessionUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl AdminSession {
    pub fn new(access_token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            access_token: access_token.into(),
            user,
            saved_at: None,
        }
    }

    /// `Authorization` header value, if the token is usable.
    pub fn bearer(&self) -> Option<String> {
        if self.access_token.is_empty() {
            None
        } else {
            Some(format!("Bearer {}", self.access_token))
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin.unwrap_or(false)
    }

    /// Copy ready to be stored: token checked, `saved_at` set to now.
    ///
    /// Every [`SessionStore::save`] goes through this.
    pub fn stamped(&self) -> Result<AdminSession> {
        if self.access_token.trim().is_empty() {
            return Err(LumoreError::Session("access token cannot be empty".into()));
        }
        let mut stamped = self.clone();
        stamped.saved_at = Some(Utc::now());
        Ok(stamped)
    }
}

/// Where the session lives between runs.
pub trait SessionStore {
    /// The stored session, or `None` if there is none (or it is unreadable).
    fn load(&self) -> Result<Option<AdminSession>>;

    /// Replace the stored session.
    fn save(&mut self, session: &AdminSession) -> Result<()>;

    /// Forget the stored session. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "64b7f0c2e13a4d0012345678".into(),
            username: "ops".into(),
            email: None,
            is_admin: Some(true),
        }
    }

    #[test]
    fn bearer_requires_token() {
        assert_eq!(
            AdminSession::new("abc", user()).bearer().as_deref(),
            Some("Bearer abc")
        );
        assert_eq!(AdminSession::new("", user()).bearer(), None);
    }

    #[test]
    fn serializes_with_wire_names() {
        let session = AdminSession::new("tok", user());
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["accessToken"], "tok");
        assert_eq!(json["user"]["_id"], "64b7f0c2e13a4d0012345678");
        assert_eq!(json["user"]["isAdmin"], true);
        assert!(json["user"].get("email").is_none());
        assert!(json.get("savedAt").is_none());
    }

    #[test]
    fn stamping_rejects_blank_token() {
        assert!(matches!(
            AdminSession::new("  ", user()).stamped(),
            Err(LumoreError::Session(_))
        ));

        let stamped = AdminSession::new("tok", user()).stamped().unwrap();
        assert!(stamped.saved_at.is_some());
        assert_eq!(stamped.access_token, "tok");
    }

    #[test]
    fn reads_record_without_optional_fields() {
        let raw = r#"{"accessToken":"t","user":{"_id":"1","username":"u"}}"#;
        let session: AdminSession = serde_json::from_str(raw).unwrap();
        assert!(!session.is_admin());
        assert_eq!(session.saved_at, None);
    }
}

//! Campaign sender addresses ("from emails").
//!
//! The list lives in the admin options document under
//! [`FROM_EMAIL_OPTIONS_KEY`]. Saving validates and normalizes every row;
//! reading back only sanitizes what the server returns.

use crate::error::{LumoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Options document key holding the sender list.
pub const FROM_EMAIL_OPTIONS_KEY: &str = "campaignFromEmailOptions";

/// One selectable sender address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderOption {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

impl SenderOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Validate rows before saving.
///
/// Blank rows are skipped, emails are lowercased, later duplicates are dropped
/// and an empty label falls back to the email itself.
pub fn normalize_sender_emails(rows: &[SenderOption]) -> Result<Vec<SenderOption>> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(rows.len());

    for row in rows {
        let email = row.value.trim().to_lowercase();
        let label = row.label.trim();
        if email.is_empty() && label.is_empty() {
            continue;
        }
        if !is_valid_email(&email) {
            let shown = if email.is_empty() { "(empty)" } else { email.as_str() };
            return Err(LumoreError::InvalidEmail(shown.to_string()));
        }
        if !seen.insert(email.clone()) {
            continue;
        }
        let label = if label.is_empty() { email.clone() } else { label.to_string() };
        normalized.push(SenderOption::new(label, email));
    }

    Ok(normalized)
}

/// Lenient cleanup of rows returned by the server.
pub fn sanitize_sender_options(rows: &[SenderOption]) -> Vec<SenderOption> {
    rows.iter()
        .map(|row| SenderOption::new(row.label.trim(), row.value.trim().to_lowercase()))
        .filter(|row| !row.value.is_empty())
        .collect()
}

/// `local@domain.tld`: no whitespace, one `@`, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("team@lumore.app"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "team",
            "@lumore.app",
            "team@lumore",
            "team@.app",
            "team@lumore.",
            "te am@lumore.app",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn normalizes_case_labels_and_duplicates() {
        let rows = vec![
            SenderOption::new(" Support ", " Support@Lumore.App "),
            SenderOption::new("", "hello@lumore.app"),
            SenderOption::new("Dup", "support@lumore.app"),
            SenderOption::new("  ", "  "),
        ];
        let normalized = normalize_sender_emails(&rows).unwrap();

        assert_eq!(
            normalized,
            vec![
                SenderOption::new("Support", "support@lumore.app"),
                SenderOption::new("hello@lumore.app", "hello@lumore.app"),
            ]
        );
    }

    #[test]
    fn invalid_email_names_the_value() {
        let rows = vec![SenderOption::new("Team", "team-at-lumore")];
        let err = normalize_sender_emails(&rows).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email: team-at-lumore");
    }

    #[test]
    fn label_without_email_is_reported_as_empty() {
        let rows = vec![SenderOption::new("Orphan label", "")];
        let err = normalize_sender_emails(&rows).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email: (empty)");
    }

    #[test]
    fn sanitize_drops_rows_without_value() {
        let rows = vec![
            SenderOption::new(" News ", "NEWS@lumore.app"),
            SenderOption::new("Nothing", " "),
        ];
        assert_eq!(
            sanitize_sender_options(&rows),
            vec![SenderOption::new("News", "news@lumore.app")]
        );
    }
}

//! Recipient lists for groups and campaigns.
//!
//! Operators paste user ids and usernames separated by commas or newlines.
//! Unlike filter arrays, recipient lists are deduplicated: sending twice to the
//! same user is never intended.

use indexmap::IndexSet;
use serde::Serialize;

/// Split free text into unique, trimmed entries in first-seen order.
pub fn parse_recipient_list(input: &str) -> Vec<String> {
    let unique: IndexSet<&str> = input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    unique.into_iter().map(str::to_string).collect()
}

/// Whether `value` looks like a user id (24 hex digits).
pub fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Recipient entries split by how the API addresses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    pub user_ids: Vec<String>,
    pub usernames: Vec<String>,
}

impl Recipients {
    /// Anything that is not a user id is a username.
    pub fn partition<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (user_ids, usernames) = values
            .into_iter()
            .map(Into::into)
            .partition(|value: &String| is_object_id(value));
        Self {
            user_ids,
            usernames,
        }
    }

    /// Parse and partition a pasted recipient list.
    pub fn parse(input: &str) -> Self {
        Self::partition(parse_recipient_list(input))
    }

    /// Union of users picked from search results and typed entries.
    pub fn merge(selected: &[String], typed: &[String]) -> Self {
        let unique: IndexSet<&String> = selected.iter().chain(typed).collect();
        Self::partition(unique.into_iter().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty() && self.usernames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.user_ids.len() + self.usernames.len()
    }
}

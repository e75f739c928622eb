//! The filter set editor.
//!
//! A [`FilterSet`] holds at most one value per key. Edits are applied one at a
//! time; a rejected edit leaves the set exactly as it was.

use super::catalog;
use super::value::{parse_value, FilterValue, ParseError};
use indexmap::IndexMap;
use serde::Serialize;

/// Active filters for one query context, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: IndexMap<String, FilterValue>,
}

/// One row of the human readable filter summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value at `key`.
    ///
    /// An overwritten key keeps its position in the summary.
    pub fn upsert(&mut self, key: impl Into<String>, value: FilterValue) {
        self.entries.insert(key.into(), value);
    }

    /// Parse `raw` with the kind the catalog assigns to `key`, then upsert it.
    ///
    /// Keys missing from the catalog are treated as free text.
    pub fn apply(&mut self, key: &str, raw: &str) -> Result<&FilterValue, ParseError> {
        let value = parse_value(catalog::kind_for(key), raw)?;
        log::debug!("filter {} set to {:?}", key, value);
        let (index, _) = self.entries.insert_full(key.to_string(), value);
        Ok(&self.entries[index])
    }

    /// Remove the entry at `key`. Returns `false` if there was none.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Summary rows with catalog labels, in insertion order.
    pub fn to_display_list(&self) -> Vec<DisplayEntry> {
        self.iter()
            .map(|(key, value)| DisplayEntry {
                key: key.to_string(),
                label: catalog::label_for(key).to_string(),
                value: value.to_string(),
            })
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, FilterValue)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, FilterValue)>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for (key, value) in iter {
            set.upsert(key, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_existing_key() {
        let mut set = FilterSet::new();
        set.upsert("minAge", FilterValue::Number(18.0));
        set.upsert("minAge", FilterValue::Number(21.0));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("minAge"), Some(&FilterValue::Number(21.0)));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut set = FilterSet::new();
        set.upsert("minAge", FilterValue::Number(18.0));
        set.upsert("country", FilterValue::from("India"));
        set.upsert("minAge", FilterValue::Number(25.0));

        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["minAge", "country"]);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let mut set = FilterSet::new();
        set.upsert("gender", FilterValue::from("female"));

        assert!(!set.remove("religion"));
        assert_eq!(set.len(), 1);
        assert!(set.remove("gender"));
        assert!(set.is_empty());
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = FilterSet::new();
        set.upsert("isActive", FilterValue::Boolean(true));
        set.upsert("minCredits", FilterValue::Number(10.0));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn apply_uses_catalog_kind() {
        let mut set = FilterSet::new();
        set.apply("minAge", "18").unwrap();
        set.apply("isVerified", "true").unwrap();
        set.apply("languages", "english, hindi").unwrap();

        assert_eq!(set.get("minAge"), Some(&FilterValue::Number(18.0)));
        assert_eq!(set.get("isVerified"), Some(&FilterValue::Boolean(true)));
        assert_eq!(
            set.get("languages"),
            Some(&FilterValue::StringArray(vec![
                "english".into(),
                "hindi".into()
            ]))
        );
    }

    #[test]
    fn apply_treats_unknown_key_as_text() {
        let mut set = FilterSet::new();
        let value = set.apply("customTag", " 42 ").unwrap();
        assert_eq!(value, &FilterValue::String("42".into()));
    }

    #[test]
    fn rejected_edit_leaves_set_unchanged() {
        let mut set = FilterSet::new();
        set.apply("minAge", "18").unwrap();
        let before = set.clone();

        assert_eq!(
            set.apply("minAge", "eighteen"),
            Err(ParseError::InvalidNumber("eighteen".into()))
        );
        assert_eq!(
            set.apply("isActive", "yes").unwrap_err().to_string(),
            "Boolean value must be true or false, got 'yes'."
        );
        assert_eq!(set, before);
    }

    #[test]
    fn display_list_uses_labels_and_falls_back_to_key() {
        let mut set = FilterSet::new();
        set.upsert(
            "interests",
            FilterValue::StringArray(vec!["music".into(), "travel".into()]),
        );
        set.upsert("isVerified", FilterValue::Boolean(true));
        set.upsert("minAge", FilterValue::Number(18.0));
        set.upsert("legacyField", FilterValue::from("x"));

        let rows = set.to_display_list();
        let pairs: Vec<_> = rows
            .iter()
            .map(|r| (r.label.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Interests (Any)", "music, travel"),
                ("Is Verified", "true"),
                ("Min Age", "18"),
                ("legacyField", "x"),
            ]
        );
    }

    #[test]
    fn collects_from_pairs() {
        let set: FilterSet = vec![
            ("country", FilterValue::from("India")),
            ("country", FilterValue::from("Nepal")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("country").and_then(|v| v.as_str()), Some("Nepal"));
    }
}

//! Field catalog.
//!
//! The fixed list of user attributes an admin can filter on. Each entry names
//! the wire key, a display label and the kind of value the key accepts.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The kind of value a filter field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    /// Free text (e.g., `username`, `country`)
    String,

    /// `true` / `false` (e.g., `isVerified`)
    Boolean,

    /// Finite number (e.g., `minAge`)
    Number,

    /// Comma separated list, matched as "any of" (e.g., `interests`)
    StringArray,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::StringArray => "array",
        };
        f.write_str(name)
    }
}

/// Catalog entry for one filterable attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Wire key, sent unchanged as query parameter / JSON property name
    pub key: &'static str,

    /// Human readable name
    pub label: &'static str,

    /// Kind of value the field accepts
    pub kind: ValueKind,

    /// Example input shown to the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    const fn new(key: &'static str, label: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            label,
            kind,
            placeholder: None,
        }
    }

    const fn string(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ValueKind::String)
    }

    const fn boolean(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ValueKind::Boolean)
    }

    const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ValueKind::Number)
    }

    const fn array(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self::new(key, label, ValueKind::StringArray).placeholder(placeholder)
    }

    const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Placeholder text, falling back to a hint derived from the kind.
    pub fn hint(&self) -> &'static str {
        match (self.placeholder, self.kind) {
            (Some(text), _) => text,
            (None, ValueKind::StringArray) => "comma separated values",
            (None, ValueKind::Boolean) => "true",
            (None, _) => "value",
        }
    }
}

/// Every filterable user attribute, in display order.
///
/// Adding a filter means adding an entry here; keys must stay unique.
pub const FIELDS: &[FieldDescriptor] = &[
    // Profile
    FieldDescriptor::string("username", "Username"),
    FieldDescriptor::string("email", "Email"),
    FieldDescriptor::string("phoneNumber", "Phone Number"),
    FieldDescriptor::string("nickname", "Nickname"),
    FieldDescriptor::string("realName", "Real Name"),
    FieldDescriptor::string("gender", "Gender"),
    FieldDescriptor::string("diet", "Diet"),
    FieldDescriptor::string("zodiacSign", "Zodiac Sign"),
    FieldDescriptor::string("maritalStatus", "Marital Status"),
    FieldDescriptor::string("religion", "Religion"),
    FieldDescriptor::string("hometown", "Hometown"),
    FieldDescriptor::string("personalityType", "Personality Type"),
    FieldDescriptor::string("bloodGroup", "Blood Group"),
    FieldDescriptor::string("verificationStatus", "Verification Status"),
    FieldDescriptor::string("verificationMethod", "Verification Method"),
    FieldDescriptor::string("work", "Work"),
    FieldDescriptor::string("institution", "Institution"),
    FieldDescriptor::string("drinking", "Lifestyle Drinking"),
    FieldDescriptor::string("smoking", "Lifestyle Smoking"),
    FieldDescriptor::string("pets", "Lifestyle Pets"),
    FieldDescriptor::string("country", "Country"),
    FieldDescriptor::string("pincode", "Pincode"),
    // Account flags
    FieldDescriptor::boolean("isActive", "Is Active"),
    FieldDescriptor::boolean("isArchived", "Is Archived"),
    FieldDescriptor::boolean("isMatching", "Is Matching"),
    FieldDescriptor::boolean("isVerified", "Is Verified"),
    FieldDescriptor::boolean("emailVerified", "Email Verified"),
    FieldDescriptor::boolean("phoneVerified", "Phone Verified"),
    FieldDescriptor::boolean("isAdmin", "Is Admin"),
    // Ranges
    FieldDescriptor::number("minAge", "Min Age"),
    FieldDescriptor::number("maxAge", "Max Age"),
    FieldDescriptor::number("minHeight", "Min Height"),
    FieldDescriptor::number("maxHeight", "Max Height"),
    FieldDescriptor::number("minCredits", "Min Credits"),
    FieldDescriptor::number("maxCredits", "Max Credits"),
    // Any-of lists
    FieldDescriptor::array("interests", "Interests (Any)", "music, travel"),
    FieldDescriptor::array("languages", "Languages (Any)", "english, hindi"),
    FieldDescriptor::array("web3Wallet", "Web3 Wallet (Any)", "0xabc, 0xdef"),
    // Match preferences
    FieldDescriptor::string("prefInterestedIn", "Pref Interested In"),
    FieldDescriptor::string("prefRelationshipType", "Pref Relationship Type"),
    FieldDescriptor::string("prefGoalPrimary", "Pref Goal Primary"),
    FieldDescriptor::string("prefGoalSecondary", "Pref Goal Secondary"),
    FieldDescriptor::string("prefGoalTertiary", "Pref Goal Tertiary"),
    FieldDescriptor::number("prefMinDistance", "Pref Min Distance"),
    FieldDescriptor::number("prefMaxDistance", "Pref Max Distance"),
    FieldDescriptor::number("prefAgeMin", "Pref Age Min"),
    FieldDescriptor::number("prefAgeMax", "Pref Age Max"),
    FieldDescriptor::number("prefHeightMin", "Pref Height Min"),
    FieldDescriptor::number("prefHeightMax", "Pref Height Max"),
    FieldDescriptor::array("prefInterests", "Pref Interests (Any)", "travel, sports"),
    FieldDescriptor::array("prefLanguages", "Pref Languages (Any)", "english, spanish"),
    FieldDescriptor::array("prefZodiac", "Pref Zodiac (Any)", "aries, taurus"),
    FieldDescriptor::array("prefPersonality", "Pref Personality (Any)", "intj, enfp"),
    FieldDescriptor::array("prefDiet", "Pref Diet (Any)", "veg, non-veg"),
    FieldDescriptor::array("prefReligion", "Pref Religion (Any)", "hindu, christian"),
    FieldDescriptor::array("prefDrinking", "Pref Drinking (Any)", "never, socially"),
    FieldDescriptor::array("prefSmoking", "Pref Smoking (Any)", "never, occasionally"),
    FieldDescriptor::array("prefPets", "Pref Pets (Any)", "dog, cat"),
];

static BY_KEY: Lazy<HashMap<&'static str, &'static FieldDescriptor>> =
    Lazy::new(|| FIELDS.iter().map(|field| (field.key, field)).collect());

/// All catalog fields in display order.
pub fn list_fields() -> &'static [FieldDescriptor] {
    FIELDS
}

/// Look up a field by key. `None` means the key is free text.
pub fn resolve(key: &str) -> Option<&'static FieldDescriptor> {
    BY_KEY.get(key).copied()
}

/// Kind used to parse values for `key`; unknown keys are free text.
pub fn kind_for(key: &str) -> ValueKind {
    resolve(key).map_or(ValueKind::String, |field| field.kind)
}

/// Display label for `key`, or the key itself when it is not catalogued.
pub fn label_for(key: &str) -> &str {
    match resolve(key) {
        Some(field) => field.label,
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_not_empty() {
        assert!(!list_fields().is_empty());
        assert_eq!(list_fields()[0].key, "username");
    }

    #[test]
    fn catalog_keys_are_unique() {
        let keys: HashSet<_> = FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), FIELDS.len());
    }

    #[test]
    fn lookup_table_covers_every_field() {
        for field in FIELDS {
            assert_eq!(resolve(field.key), Some(field));
        }
    }

    #[test]
    fn resolve_known_fields() {
        let min_age = resolve("minAge").unwrap();
        assert_eq!(min_age.label, "Min Age");
        assert_eq!(min_age.kind, ValueKind::Number);

        let interests = resolve("interests").unwrap();
        assert_eq!(interests.kind, ValueKind::StringArray);
        assert_eq!(interests.placeholder, Some("music, travel"));

        assert_eq!(resolve("isVerified").unwrap().kind, ValueKind::Boolean);
    }

    #[test]
    fn unknown_key_is_not_an_error() {
        assert!(resolve("favouriteColour").is_none());
        assert_eq!(kind_for("favouriteColour"), ValueKind::String);
        assert_eq!(label_for("favouriteColour"), "favouriteColour");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(resolve("MinAge").is_none());
    }

    #[test]
    fn hint_prefers_placeholder() {
        assert_eq!(resolve("languages").unwrap().hint(), "english, hindi");
        assert_eq!(resolve("username").unwrap().hint(), "value");
        assert_eq!(resolve("isActive").unwrap().hint(), "true");
    }

    #[test]
    fn list_is_stable_across_calls() {
        assert_eq!(list_fields(), list_fields());
    }
}

//! Records returned by the admin API.
//!
//! Decoding is lenient: optional parts of a reply may be missing without
//! failing the call.

use crate::senders::SenderOption;
use crate::session::SessionUser;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Standard response envelope of the admin API.
///
/// `data` is absent on replies that only acknowledge (`{"success": true}`)
/// and on empty 2xx bodies.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> ApiEnvelope<T> {
    /// Total row count reported by the server, `0` when absent.
    pub fn total(&self) -> u64 {
        self.pagination.map_or(0, |p| p.total)
    }
}

impl<T: Default> ApiEnvelope<T> {
    pub fn data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub has_more: bool,
}

/// A user row as listed by the admin API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_archived: Option<bool>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub credits: Option<f64>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserGroup {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: Option<u64>,
    #[serde(default)]
    pub members: Vec<UserRef>,
}

/// Partial user record embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub is_archived: Option<bool>,
    pub is_active: Option<bool>,
}

/// A user-submitted "this or that" question awaiting moderation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub left_option: String,
    pub right_option: String,
    #[serde(default)]
    pub left_image_url: String,
    #[serde(default)]
    pub right_image_url: String,
    #[serde(default)]
    pub submitted_by: Option<UserRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Approved,
    Rejected,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Open,
    Reviewing,
    Closed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::Reviewing => "reviewing",
            ReportStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoomRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

/// A report filed by one user against another.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    pub status: ReportStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub reporter: Option<UserRef>,
    #[serde(default)]
    pub reported_user: Option<UserRef>,
    #[serde(default)]
    pub room_id: Option<RoomRef>,
}

/// One credit movement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditLedgerRow {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: f64,
    #[serde(default)]
    pub balance_after: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    Global,
    Country,
}

impl LocationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationMode::Global => "global",
            LocationMode::Country => "country",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationBucket {
    pub key: String,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationAnalytics {
    pub mode: Option<LocationMode>,
    pub selected_country: Option<String>,
    /// `country` or `state`
    pub level: Option<String>,
    pub distribution: Vec<LocationBucket>,
    pub available_countries: Vec<LocationBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditSummary {
    pub transactions: Option<u64>,
    pub total_awarded: Option<f64>,
    pub total_spent: Option<f64>,
}

/// Dashboard counters. Distributions map bucket name (`male`, `18-24`, ...)
/// to a count, in server order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub matching_users: u64,
    pub archived_users: u64,
    pub pending_questions: u64,
    pub online_now: Option<u64>,
    pub verified_users: Option<u64>,
    pub inactive_users: Option<u64>,
    pub gender_distribution: IndexMap<String, u64>,
    pub verification_breakdown: IndexMap<String, u64>,
    pub age_distribution: IndexMap<String, u64>,
    pub location_analytics: Option<LocationAnalytics>,
    pub credit: Option<CreditSummary>,
}

/// Option lists by name. Every item is a `{label, value}` pair.
pub type OptionsMap = IndexMap<String, Vec<SenderOption>>;

/// The admin options document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminOptions {
    pub key: Option<String>,
    pub options: OptionsMap,
    pub version: Option<String>,
    pub updated_at: Option<String>,
    pub last_updated_by: Option<String>,
}

/// Token and user, found either under `data` or at the top level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LoginGrant {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginReply {
    #[serde(default)]
    pub data: Option<LoginGrant>,
    #[serde(flatten)]
    pub top: LoginGrant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_tolerates_missing_parts() {
        let bare: ApiEnvelope<Vec<AdminUser>> =
            serde_json::from_value(json!({ "success": true, "message": "ok" })).unwrap();
        assert!(bare.data.is_none());
        assert_eq!(bare.total(), 0);
        assert!(bare.data_or_default().is_empty());

        let partial: ApiEnvelope<Vec<AdminUser>> =
            serde_json::from_value(json!({ "data": [], "pagination": { "total": 7 } })).unwrap();
        assert_eq!(partial.total(), 7);
        assert_eq!(partial.pagination.unwrap().page, 0);
    }

    #[test]
    fn stats_keep_bucket_order() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalUsers": 10,
            "ageDistribution": { "18-24": 4, "<18": 1, "55+": 0 },
            "locationAnalytics": {
                "mode": "country",
                "selectedCountry": "IN",
                "distribution": [{ "key": "KA", "label": "Karnataka", "count": 3 }]
            }
        }))
        .unwrap();

        assert_eq!(stats.total_users, 10);
        let buckets: Vec<_> = stats.age_distribution.keys().map(String::as_str).collect();
        assert_eq!(buckets, vec!["18-24", "<18", "55+"]);
        let location = stats.location_analytics.unwrap();
        assert_eq!(location.mode, Some(LocationMode::Country));
        assert_eq!(location.distribution[0].count, 3);
        assert_eq!(stats.online_now, None);
    }

    #[test]
    fn report_status_round_trips_lowercase() {
        let status: ReportStatus = serde_json::from_value(json!("reviewing")).unwrap();
        assert_eq!(status, ReportStatus::Reviewing);
        assert_eq!(json!(ReportStatus::Closed), json!("closed"));
        assert_eq!(ReportStatus::Open.as_str(), "open");
    }
}

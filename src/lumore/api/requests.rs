//! Typed inputs for the admin API, with their validation and wire shapes.

use super::responses::{LocationMode, ReportStatus};
use crate::error::{LumoreError, Result};
use crate::filters::{encode_json_object, encode_query_params, FilterSet};
use crate::recipients::Recipients;
use crate::transport::ApiRequest;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Page number and size. Zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Unset fields are left out of the query.
    pub(crate) fn apply(self, mut request: ApiRequest) -> ApiRequest {
        if self.page > 0 {
            request = request.with_query("page", self.page.to_string());
        }
        if self.limit > 0 {
            request = request.with_query("limit", self.limit.to_string());
        }
        request
    }

    pub(crate) fn or_limit(self, default_limit: u32) -> Self {
        if self.limit == 0 {
            Self {
                limit: default_limit,
                ..self
            }
        } else {
            self
        }
    }
}

/// Parameters of a user listing.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub filters: FilterSet,
}

impl UserQuery {
    /// Unset (zero / blank) paging and search fields are left out.
    pub fn to_request(&self) -> ApiRequest {
        let mut request = Page::new(self.page, self.limit).apply(ApiRequest::get("/admin/users"));
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            request = request.with_query("search", search);
        }
        request.query.extend(encode_query_params(&self.filters));
        request
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub page: Page,
    pub status: Option<ReportStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct LedgerQuery {
    pub page: Page,
    pub user_id: Option<String>,
    /// Ledger entry type, sent as `type`
    pub entry_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StatsQuery {
    pub location_mode: Option<LocationMode>,
    pub country: Option<String>,
    pub location_limit: u32,
}

impl StatsQuery {
    pub(crate) fn to_request(&self) -> ApiRequest {
        let mut request = ApiRequest::get("/admin/stats");
        if let Some(mode) = self.location_mode {
            request = request.with_query("locationMode", mode.as_str());
        }
        if let Some(country) = non_blank(self.country.as_deref()) {
            request = request.with_query("country", country);
        }
        if self.location_limit > 0 {
            request = request.with_query("locationLimit", self.location_limit.to_string());
        }
        request
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A group to create. Members come from recipients and/or filters.
#[derive(Debug, Clone, Default)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub recipients: Recipients,
    pub filters: FilterSet,
}

impl NewGroup {
    pub(crate) fn to_body(&self) -> Result<Value> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LumoreError::Validation("Group name is required.".into()));
        }
        let mut body = json!({
            "name": name,
            "description": self.description.trim(),
            "userIds": self.recipients.user_ids,
            "usernames": self.recipients.usernames,
        });
        attach_filters(&mut body, &self.filters);
        Ok(body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberAction {
    Add,
    Remove,
    Set,
}

/// A change to a group's members.
#[derive(Debug, Clone)]
pub struct MemberUpdate {
    pub action: MemberAction,
    pub recipients: Recipients,
    pub filters: FilterSet,
}

impl MemberUpdate {
    pub(crate) fn to_body(&self) -> Result<Value> {
        if self.recipients.is_empty() && self.filters.is_empty() {
            return Err(LumoreError::Validation(
                "Please select users, provide user ids/usernames, or set filters.".into(),
            ));
        }
        let mut body = json!({
            "action": self.action,
            "userIds": self.recipients.user_ids,
            "usernames": self.recipients.usernames,
        });
        attach_filters(&mut body, &self.filters);
        Ok(body)
    }
}

// Filters ride along only when there are any.
fn attach_filters(body: &mut Value, filters: &FilterSet) {
    if filters.is_empty() {
        return;
    }
    if let Value::Object(map) = body {
        map.insert(
            "filters".to_string(),
            Value::Object(encode_json_object(filters)),
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Push,
    Email,
}

/// How the server renders an email campaign: one shared message, or
/// per-recipient placeholders filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailCampaignType {
    Campaign,
    #[default]
    Personalized,
}

/// Who a campaign goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignTarget {
    All,
    Users(Recipients),
    Groups(Vec<String>),
}

/// Sender details, only used on the email channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailSender {
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub reply_to_email: Option<String>,
    pub reply_to_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub channel: Channel,
    pub target: CampaignTarget,
    pub email_campaign_type: EmailCampaignType,
    pub title: String,
    pub email_subject: String,
    pub body: String,
    pub sender: EmailSender,
}

impl Campaign {
    pub(crate) fn to_body(&self) -> Result<Value> {
        let body = self.body.trim();
        if body.is_empty() {
            return Err(LumoreError::Validation("Message body is required.".into()));
        }
        if self.channel == Channel::Push && self.title.trim().is_empty() {
            return Err(LumoreError::Validation("Push title is required.".into()));
        }

        let (target_type, recipients, group_ids) = match &self.target {
            CampaignTarget::All => ("all", Recipients::default(), Vec::new()),
            CampaignTarget::Users(r) if r.is_empty() => {
                return Err(LumoreError::Validation(
                    "Add at least one user id or username.".into(),
                ))
            }
            CampaignTarget::Users(r) => ("users", r.clone(), Vec::new()),
            CampaignTarget::Groups(ids) if ids.is_empty() => {
                return Err(LumoreError::Validation("Select at least one group.".into()))
            }
            CampaignTarget::Groups(ids) => ("groups", Recipients::default(), ids.clone()),
        };

        let mut payload = Map::new();
        payload.insert("channel".into(), json!(self.channel));
        payload.insert("targetType".into(), json!(target_type));
        if self.channel == Channel::Email {
            payload.insert("emailCampaignType".into(), json!(self.email_campaign_type));
        }
        insert_trimmed(&mut payload, "title", Some(self.title.as_str()));
        insert_trimmed(&mut payload, "emailSubject", Some(self.email_subject.as_str()));
        if self.channel == Channel::Email {
            insert_trimmed(&mut payload, "fromEmail", self.sender.from_email.as_deref());
            insert_trimmed(&mut payload, "fromName", self.sender.from_name.as_deref());
            insert_trimmed(&mut payload, "replyToEmail", self.sender.reply_to_email.as_deref());
            insert_trimmed(&mut payload, "replyToName", self.sender.reply_to_name.as_deref());
        }
        payload.insert("body".into(), json!(body));
        payload.insert("userIds".into(), json!(recipients.user_ids));
        payload.insert("usernames".into(), json!(recipients.usernames));
        payload.insert("groupIds".into(), json!(group_ids));
        Ok(Value::Object(payload))
    }
}

fn insert_trimmed(payload: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) {
        payload.insert(key.to_string(), json!(text));
    }
}

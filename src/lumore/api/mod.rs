//! # API Facade
//!
//! [`AdminApi`] is the single entry point for calls to the Lumore admin API.
//! It turns domain values (filter sets, recipient lists, sender rows) into
//! [`ApiRequest`]s, attaches the session token and maps non-2xx answers to
//! [`LumoreError::Api`].
//!
//! ## Generic Over Transport
//!
//! `AdminApi<T: Transport>` never touches the network itself:
//! - Production: an HTTP client implementing [`Transport`]
//! - Testing: [`CannedTransport`](crate::transport::canned::CannedTransport)
//!
//! ## Configuration
//!
//! The facade is built from an [`AdminConfig`]: every request carries the
//! configured `api_url` as its base, and listings without an explicit page
//! size use `page_limit`.
//!
//! ## Session Handling
//!
//! The session is passed in explicitly (see [`crate::session`]). Without one,
//! requests go out unauthenticated and the server decides.
//! [`AdminApi::login_with_google`] is how a session is obtained.
//!
//! ## Operations
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | `login_with_google` | `POST /admin/auth/google-signin-web` |
//! | `stats` | `GET /admin/stats` |
//! | `list_users`, `preview_match_count` | `GET /admin/users` |
//! | `set_user_archived` | `PATCH /admin/users/{id}/archive` |
//! | `pending_questions` | `GET /admin/games/this-or-that/pending` |
//! | `set_question_status` | `PATCH /games/this-or-that/questions/{id}/status` |
//! | `credit_ledger` | `GET /admin/credits/ledger` |
//! | `reported_users` | `GET /admin/reported-users` |
//! | `set_report_status` | `PATCH /admin/reported-users/{id}/status` |
//! | `admin_options`, `sender_emails` | `GET /admin/options` |
//! | `patch_admin_options`, `save_sender_emails` | `PATCH /admin/options` |
//! | `list_groups` | `GET /admin/user-groups` |
//! | `create_group` | `POST /admin/user-groups` |
//! | `update_group_members` | `PATCH /admin/user-groups/{id}/members` |
//! | `send_campaign` | `POST /admin/notifications/send` |

mod requests;
mod responses;

pub use requests::{
    Campaign, CampaignTarget, Channel, EmailCampaignType, EmailSender, LedgerQuery,
    MemberAction, MemberUpdate, NewGroup, Page, ReportQuery, StatsQuery, UserQuery,
};
pub use responses::{
    AdminOptions, AdminUser, AdminUserGroup, ApiEnvelope, CreditLedgerRow, CreditSummary,
    DashboardStats, LocationAnalytics, LocationBucket, LocationMode, OptionsMap, Pagination,
    Question, QuestionStatus, ReportStatus, ReportedUser, RoomRef, UserRef,
};

use crate::config::AdminConfig;
use crate::error::{LumoreError, Result};
use crate::filters::FilterSet;
use crate::senders::{
    normalize_sender_emails, sanitize_sender_options, SenderOption, FROM_EMAIL_OPTIONS_KEY,
};
use crate::session::AdminSession;
use crate::transport::{ApiRequest, RawResponse, Transport};
use requests::non_blank;
use responses::LoginReply;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

/// Error message of a failed call: `message`, then `error`, then a generic one.
pub fn error_message(response: &RawResponse) -> String {
    response
        .payload
        .as_ref()
        .and_then(|payload| {
            ["message", "error"].iter().find_map(|field| {
                payload
                    .get(*field)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("Request failed with status {}", response.status))
}

/// The admin API facade.
pub struct AdminApi<T: Transport> {
    transport: T,
    base_url: String,
    page_limit: u32,
    session: Option<AdminSession>,
}

impl<T: Transport> AdminApi<T> {
    pub fn new(transport: T, config: &AdminConfig) -> Self {
        Self {
            transport,
            base_url: config.api_url.clone(),
            page_limit: config.page_limit,
            session: None,
        }
    }

    pub fn with_session(mut self, session: Option<AdminSession>) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange a Google authorization code for an admin session.
    ///
    /// The reply must carry a token and a user flagged as admin.
    pub fn login_with_google(&mut self, code: &str) -> Result<AdminSession> {
        let reply: LoginReply = self.call(ApiRequest::post(
            "/admin/auth/google-signin-web",
            json!({ "code": code }),
        ))?;

        let nested = reply.data.unwrap_or_default();
        let user = nested.user.or(reply.top.user);
        let token = nested
            .access_token
            .or(reply.top.access_token)
            .filter(|t| !t.is_empty());

        match (user, token) {
            (Some(user), Some(token)) if user.is_admin == Some(true) => {
                log::info!("signed in as {}", user.username);
                Ok(AdminSession::new(token, user))
            }
            _ => Err(LumoreError::Validation("Admin access denied.".into())),
        }
    }

    pub fn stats(&mut self, query: &StatsQuery) -> Result<ApiEnvelope<DashboardStats>> {
        self.call(query.to_request())
    }

    /// A listing without a page size uses the configured `page_limit`.
    pub fn list_users(&mut self, query: &UserQuery) -> Result<ApiEnvelope<Vec<AdminUser>>> {
        let limit = if query.limit == 0 {
            self.page_limit
        } else {
            query.limit
        };
        let query = UserQuery {
            limit,
            ..query.clone()
        };
        self.call(query.to_request())
    }

    /// How many users the filters currently match.
    ///
    /// An empty set matches nothing and is answered without a request.
    pub fn preview_match_count(&mut self, filters: &FilterSet) -> Result<u64> {
        if filters.is_empty() {
            return Ok(0);
        }
        let query = UserQuery {
            page: 1,
            limit: 1,
            search: None,
            filters: filters.clone(),
        };
        Ok(self.list_users(&query)?.total())
    }

    pub fn set_user_archived(
        &mut self,
        user_id: &str,
        is_archived: bool,
    ) -> Result<ApiEnvelope<AdminUser>> {
        let path = format!("/admin/users/{}/archive", require_id(user_id, "user")?);
        self.call(ApiRequest::patch(path, json!({ "isArchived": is_archived })))
    }

    pub fn pending_questions(&mut self, page: Page) -> Result<ApiEnvelope<Vec<Question>>> {
        let request = ApiRequest::get("/admin/games/this-or-that/pending");
        self.call(page.or_limit(self.page_limit).apply(request))
    }

    pub fn set_question_status(
        &mut self,
        question_id: &str,
        status: QuestionStatus,
    ) -> Result<ApiEnvelope<Question>> {
        let path = format!(
            "/games/this-or-that/questions/{}/status",
            require_id(question_id, "question")?
        );
        self.call(ApiRequest::patch(path, json!({ "status": status })))
    }

    pub fn credit_ledger(
        &mut self,
        query: &LedgerQuery,
    ) -> Result<ApiEnvelope<Vec<CreditLedgerRow>>> {
        let mut request = query
            .page
            .or_limit(self.page_limit)
            .apply(ApiRequest::get("/admin/credits/ledger"));
        if let Some(user_id) = non_blank(query.user_id.as_deref()) {
            request = request.with_query("userId", user_id);
        }
        if let Some(entry_type) = non_blank(query.entry_type.as_deref()) {
            request = request.with_query("type", entry_type);
        }
        self.call(request)
    }

    pub fn reported_users(
        &mut self,
        query: &ReportQuery,
    ) -> Result<ApiEnvelope<Vec<ReportedUser>>> {
        let mut request = query
            .page
            .or_limit(self.page_limit)
            .apply(ApiRequest::get("/admin/reported-users"));
        if let Some(status) = query.status {
            request = request.with_query("status", status.as_str());
        }
        self.call(request)
    }

    pub fn set_report_status(
        &mut self,
        report_id: &str,
        status: ReportStatus,
    ) -> Result<ApiEnvelope<ReportedUser>> {
        let path = format!(
            "/admin/reported-users/{}/status",
            require_id(report_id, "report")?
        );
        self.call(ApiRequest::patch(path, json!({ "status": status })))
    }

    pub fn list_groups(&mut self) -> Result<ApiEnvelope<Vec<AdminUserGroup>>> {
        self.call(ApiRequest::get("/admin/user-groups"))
    }

    pub fn create_group(&mut self, group: &NewGroup) -> Result<ApiEnvelope<AdminUserGroup>> {
        let body = group.to_body()?;
        self.call(ApiRequest::post("/admin/user-groups", body))
    }

    pub fn update_group_members(
        &mut self,
        group_id: &str,
        update: &MemberUpdate,
    ) -> Result<ApiEnvelope<AdminUserGroup>> {
        if group_id.trim().is_empty() {
            return Err(LumoreError::Validation("Please select a group.".into()));
        }
        let body = update.to_body()?;
        let path = format!("/admin/user-groups/{}/members", group_id.trim());
        self.call(ApiRequest::patch(path, body))
    }

    /// Send a campaign; returns the recipient count when the server reports it.
    pub fn send_campaign(&mut self, campaign: &Campaign) -> Result<Option<u64>> {
        let body = campaign.to_body()?;
        let envelope: ApiEnvelope<Value> =
            self.call(ApiRequest::post("/admin/notifications/send", body))?;
        if let Some(message) = &envelope.message {
            log::info!("campaign sent: {}", message);
        }
        Ok(envelope
            .data
            .as_ref()
            .and_then(|data| data.get("recipientCount"))
            .and_then(Value::as_u64))
    }

    pub fn admin_options(&mut self) -> Result<AdminOptions> {
        let envelope: ApiEnvelope<AdminOptions> = self.call(ApiRequest::get("/admin/options"))?;
        Ok(envelope.data_or_default())
    }

    /// Replace the named option lists; lists not named are left alone.
    pub fn patch_admin_options(&mut self, options: &OptionsMap) -> Result<AdminOptions> {
        let body = json!({ "options": options });
        let envelope: ApiEnvelope<AdminOptions> =
            self.call(ApiRequest::patch("/admin/options", body))?;
        Ok(envelope.data_or_default())
    }

    /// Configured sender addresses, sanitized.
    pub fn sender_emails(&mut self) -> Result<Vec<SenderOption>> {
        let options = self.admin_options()?;
        Ok(sender_rows(&options))
    }

    /// Validate and store the sender list; returns what the server kept.
    pub fn save_sender_emails(&mut self, rows: &[SenderOption]) -> Result<Vec<SenderOption>> {
        let mut options = OptionsMap::new();
        options.insert(
            FROM_EMAIL_OPTIONS_KEY.to_string(),
            normalize_sender_emails(rows)?,
        );
        let saved = self.patch_admin_options(&options)?;
        Ok(sender_rows(&saved))
    }

    fn call<R: DeserializeOwned>(&mut self, request: ApiRequest) -> Result<R> {
        let request = request
            .with_base_url(self.base_url.as_str())
            .with_authorization(self.session.as_ref().and_then(AdminSession::bearer));
        log::debug!(
            "{} {} ({} query params)",
            request.method,
            request.url(),
            request.query.len()
        );

        let response = self.transport.send(&request)?;
        if !response.is_success() {
            let message = error_message(&response);
            log::info!("{} {} failed: {}", request.method, request.path, message);
            return Err(LumoreError::Api {
                status: response.status,
                message,
            });
        }

        // An empty 2xx body reads as an empty envelope
        let payload = match response.payload {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(payload) => payload,
        };
        Ok(serde_json::from_value(payload)?)
    }
}

fn require_id<'a>(id: &'a str, what: &str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(LumoreError::Validation(format!("A {} id is required.", what)));
    }
    Ok(id)
}

fn sender_rows(options: &AdminOptions) -> Vec<SenderOption> {
    options
        .options
        .get(FROM_EMAIL_OPTIONS_KEY)
        .map(|rows| sanitize_sender_options(rows))
        .unwrap_or_default()
}

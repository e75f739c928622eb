use lumore_admin::api::{AdminApi, NewGroup};
use lumore_admin::config::AdminConfig;
use lumore_admin::filters::{
    decode_query_params, encode_json_object, encode_query_params, FilterSet, FilterValue,
    ParseError,
};
use lumore_admin::recipients::Recipients;
use lumore_admin::session::memory::MemorySessionStore;
use lumore_admin::session::{AdminSession, SessionStore, SessionUser};
use lumore_admin::transport::canned::CannedTransport;
use lumore_admin::transport::RawResponse;
use serde_json::json;

#[test]
fn edits_then_encode() {
    let mut filters = FilterSet::new();
    filters.apply("minAge", "18").unwrap();
    filters.apply("interests", "music, travel,  , music").unwrap();
    filters.apply("isVerified", "true").unwrap();
    filters.apply("city", "").unwrap_err();
    filters.apply("gender", "female").unwrap();
    assert!(filters.remove("gender"));

    assert_eq!(
        filters.get("interests"),
        Some(&FilterValue::StringArray(vec![
            "music".into(),
            "travel".into(),
            "music".into()
        ]))
    );

    let params = encode_query_params(&filters);
    let pairs: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("minAge", "18"),
            ("interests", "music,travel,music"),
            ("isVerified", "true"),
        ]
    );

    // Query params read back into an equal set
    assert_eq!(decode_query_params(pairs).unwrap(), filters);

    filters.clear();
    assert!(encode_query_params(&filters).is_empty());
    assert!(encode_json_object(&filters).is_empty());
}

#[test]
fn rejected_edit_leaves_set_unchanged() {
    let mut filters = FilterSet::new();
    filters.apply("minAge", "21").unwrap();
    let before = filters.clone();

    assert_eq!(
        filters.apply("minAge", "NaN"),
        Err(ParseError::InvalidNumber("NaN".into()))
    );
    assert_eq!(filters, before);
}

#[test]
fn stored_session_authorizes_group_creation() {
    let mut store = MemorySessionStore::new();
    store
        .save(&AdminSession::new(
            "token-1",
            SessionUser {
                id: "650000000000000000000001".into(),
                username: "ops".into(),
                email: Some("ops@lumore.app".into()),
                is_admin: Some(true),
            },
        ))
        .unwrap();

    let transport = CannedTransport::new().respond(RawResponse::ok(json!({
        "success": true,
        "data": { "_id": "g1", "name": "Night owls" }
    })));
    let mut api =
        AdminApi::new(transport, &AdminConfig::default()).with_session(store.load().unwrap());

    let mut filters = FilterSet::new();
    filters.apply("isActive", "true").unwrap();
    let group = NewGroup {
        name: "Night owls".into(),
        description: "Active after midnight".into(),
        recipients: Recipients::parse("650000000000000000000002\nzoe"),
        filters,
    };
    let created = api.create_group(&group).unwrap();
    assert_eq!(created.data.unwrap().id, "g1");
    assert_eq!(created.success, Some(true));

    let request = api.transport().last_request().unwrap();
    assert_eq!(request.authorization.as_deref(), Some("Bearer token-1"));
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["userIds"], json!(["650000000000000000000002"]));
    assert_eq!(body["usernames"], json!(["zoe"]));
    assert_eq!(body["filters"], json!({ "isActive": true }));
}

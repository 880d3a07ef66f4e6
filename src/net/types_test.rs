use super::*;

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_defaults_token_type() {
    let json = r#"{"access_token":"tok","name":"Jo","role":"dealer","branch_id":"BR01"}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token_type, "Bearer");
}

#[test]
fn login_response_into_parts_keeps_fields() {
    let resp = LoginResponse {
        access_token: "abc123".to_owned(),
        token_type: "Bearer".to_owned(),
        name: "Jo".to_owned(),
        role: "sales".to_owned(),
        branch_id: "B1".to_owned(),
    };
    let (token, profile) = resp.into_parts();
    assert_eq!(token, "abc123");
    assert_eq!(profile, Profile { name: "Jo".to_owned(), role: "sales".to_owned(), branch_id: "B1".to_owned() });
}

// =============================================================
// Deals
// =============================================================

#[test]
fn deal_status_uses_snake_case() {
    let status: DealStatus = serde_json::from_str("\"follow_up\"").unwrap();
    assert_eq!(status, DealStatus::FollowUp);
    assert_eq!(serde_json::to_string(&DealStatus::New).unwrap(), "\"new\"");
}

#[test]
fn deal_parses_backend_listing() {
    let json = serde_json::json!({
        "id": 7,
        "customer_token": "cust-9f2",
        "status": "negotiating",
        "preference": {"body": "suv", "budget": 2000},
        "updated_at": "2025-02-01T09:30:00"
    });
    let deal: Deal = serde_json::from_value(json).unwrap();
    assert_eq!(deal.id, 7);
    assert_eq!(deal.status, DealStatus::Negotiating);
    assert_eq!(deal.preference["body"], "suv");
}

#[test]
fn deal_unknown_status_is_rejected() {
    let json = serde_json::json!({
        "id": 1,
        "customer_token": "c",
        "status": "archived",
        "updated_at": "2025-02-01T09:30:00"
    });
    assert!(serde_json::from_value::<Deal>(json).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn filter_search_default_top_k() {
    let req = FilterSearchRequest::default();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"filters": {}, "top_k": 50}));
}

#[test]
fn assist_request_omits_missing_deal() {
    let req = AssistRequest { deal_id: None, message: "쏘렌토 시세 요약해줘".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("deal_id").is_none());
    assert_eq!(json["message"], "쏘렌토 시세 요약해줘");
}

#[test]
fn assist_response_tolerates_missing_tools() {
    let json = r#"{"intent":"price_summary","result":{"avg":1850}}"#;
    let resp: AssistResponse = serde_json::from_str(json).unwrap();
    assert!(resp.used_tools.is_empty());
    assert_eq!(resp.result["avg"], 1850);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_status_accessor() {
    let err = ApiError::Status { status: 401, body: "{\"detail\":\"Invalid token\"}".to_owned() };
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "API response error: status 401");
    assert_eq!(ApiError::Timeout.status(), None);
}

mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_profile_read_requires_authentication() {
    let app = TestApp::new().await;
    let (user_id, _auth) = app.signup("lena", "customer").await;

    let response = app.get(&format!("/api/profile/{}/", user_id), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_any_authenticated_user_can_read_a_profile() {
    let app = TestApp::new().await;
    let (biz_id, _) = app.signup("studio", "business").await;
    let (_cust_id, cust_auth) = app.signup("viewer", "customer").await;

    let response = app.get(&format!("/api/profile/{}/", biz_id), Some(&cust_auth)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["user"], biz_id.as_str());
    assert_eq!(body["type"], "business");
    assert_eq!(body["file"], "");
}

#[tokio::test]
async fn test_owner_can_update_profile_fields() {
    let app = TestApp::new().await;
    let (user_id, auth) = app.signup("max", "business").await;

    let response = app.patch(&format!("/api/profile/{}/", user_id), json!({
        "first_name": "Max",
        "last_name": "Muster",
        "location": "Berlin",
        "tel": "030123456",
        "description": "Grafikdesign",
        "working_hours": "9-17"
    }), Some(&auth)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["first_name"], "Max");
    assert_eq!(body["location"], "Berlin");
    assert_eq!(body["working_hours"], "9-17");
    // role is untouched by profile updates
    assert_eq!(body["type"], "business");
}

#[tokio::test]
async fn test_non_owner_cannot_update_profile() {
    let app = TestApp::new().await;
    let (owner_id, _owner_auth) = app.signup("owner", "business").await;
    let (_other_id, other_auth) = app.signup("intruder", "business").await;

    let response = app.patch(&format!("/api/profile/{}/", owner_id), json!({
        "first_name": "Hacked"
    }), Some(&other_auth)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_profile_returns_404() {
    let app = TestApp::new().await;
    let (_user_id, auth) = app.signup("somebody", "customer").await;

    let response = app.get("/api/profile/does-not-exist/", Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_role_lists_are_disjoint() {
    let app = TestApp::new().await;
    let (_b1, auth) = app.signup("biz_one", "business").await;
    app.signup("biz_two", "business").await;
    app.signup("cust_one", "customer").await;

    let response = app.get("/api/profiles/business/", Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let business = parse_body(response).await;
    assert_eq!(business.as_array().unwrap().len(), 2);
    for profile in business.as_array().unwrap() {
        assert_eq!(profile["type"], "business");
    }

    let response = app.get("/api/profiles/customer/", Some(&auth)).await;
    let customers = parse_body(response).await;
    assert_eq!(customers.as_array().unwrap().len(), 1);
    assert_eq!(customers[0]["username"], "cust_one");
}

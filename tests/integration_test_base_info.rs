mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_base_info_is_public_and_empty_state_is_zero() {
    let app = TestApp::new().await;

    let response = app.get("/api/base-info/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["review_count"], 0);
    assert_eq!(body["average_rating"], 0.0);
    assert_eq!(body["business_profile_count"], 0);
    assert_eq!(body["offer_count"], 0);
}

#[tokio::test]
async fn test_base_info_aggregates_platform_stats() {
    let app = TestApp::new().await;
    let (biz_1, biz_auth_1) = app.signup("werkstatt", "business").await;
    let (biz_2, biz_auth_2) = app.signup("agentur", "business").await;
    let (_c1, cust_auth_1) = app.signup("kunde_eins", "customer").await;
    let (_c2, cust_auth_2) = app.signup("kunde_zwei", "customer").await;

    for (auth, title) in [(&biz_auth_1, "Angebot Eins"), (&biz_auth_2, "Angebot Zwei")] {
        let response = app.post("/api/offers/", json!({
            "title": title,
            "description": "",
            "details": [{
                "title": "Basic",
                "revisions": 1,
                "delivery_time_in_days": 3,
                "price": 50,
                "features": [],
                "offer_type": "basic"
            }]
        }), Some(auth)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    app.post("/api/reviews/", json!({ "business_user": biz_1, "rating": 5, "description": "Top" }), Some(&cust_auth_1)).await;
    app.post("/api/reviews/", json!({ "business_user": biz_2, "rating": 4, "description": "Gut" }), Some(&cust_auth_2)).await;

    let body = parse_body(app.get("/api/base-info/", None).await).await;

    assert_eq!(body["review_count"], 2);
    assert_eq!(body["average_rating"], 4.5);
    // customers do not count towards the business profile total
    assert_eq!(body["business_profile_count"], 2);
    assert_eq!(body["offer_count"], 2);
}

#[tokio::test]
async fn test_average_rating_is_rounded_to_one_decimal() {
    let app = TestApp::new().await;
    let (biz_id, _) = app.signup("gemischt", "business").await;
    let (_c1, a1) = app.signup("r1", "customer").await;
    let (_c2, a2) = app.signup("r2", "customer").await;
    let (_c3, a3) = app.signup("r3", "customer").await;

    // mean of 5, 4, 4 = 4.333... -> 4.3
    app.post("/api/reviews/", json!({ "business_user": biz_id, "rating": 5, "description": "" }), Some(&a1)).await;
    app.post("/api/reviews/", json!({ "business_user": biz_id, "rating": 4, "description": "" }), Some(&a2)).await;
    app.post("/api/reviews/", json!({ "business_user": biz_id, "rating": 4, "description": "" }), Some(&a3)).await;

    let body = parse_body(app.get("/api/base-info/", None).await).await;
    assert_eq!(body["average_rating"], 4.3);
}

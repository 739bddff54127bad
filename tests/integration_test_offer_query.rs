mod common;

use axum::http::StatusCode;
use common::{parse_body, AuthHeaders, TestApp};
use serde_json::{json, Value};

async fn create_offer(app: &TestApp, auth: &AuthHeaders, title: &str, description: &str, price: f64) -> Value {
    let response = app.post("/api/offers/", json!({
        "title": title,
        "description": description,
        "details": [{
            "title": "Basic",
            "revisions": 1,
            "delivery_time_in_days": 5,
            "price": price,
            "features": [],
            "offer_type": "basic"
        }]
    }), Some(auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_body(response).await
}

#[tokio::test]
async fn test_offer_list_is_public() {
    let app = TestApp::new().await;

    let response = app.get("/api/offers/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
    assert!(body["next"].is_null());
    assert!(body["previous"].is_null());
}

#[tokio::test]
async fn test_creator_id_filter() {
    let app = TestApp::new().await;
    let (alice_id, alice) = app.signup("alice_biz", "business").await;
    let (_bob_id, bob) = app.signup("bob_biz", "business").await;

    create_offer(&app, &alice, "Alice Angebot", "", 50.0).await;
    create_offer(&app, &bob, "Bob Angebot", "", 60.0).await;

    let response = app.get(&format!("/api/offers/?creator_id={}", alice_id), None).await;
    let body = parse_body(response).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["title"], "Alice Angebot");
}

#[tokio::test]
async fn test_search_matches_title_or_description_case_insensitively() {
    let app = TestApp::new().await;
    let (_biz_id, auth) = app.signup("searcher", "business").await;

    create_offer(&app, &auth, "Logo Design", "Vektorgrafik", 100.0).await;
    create_offer(&app, &auth, "Webseite", "Responsive LOGO Einbindung", 300.0).await;
    create_offer(&app, &auth, "SEO Audit", "Rankinganalyse", 150.0).await;

    let response = app.get("/api/offers/?search=logo", None).await;
    let body = parse_body(response).await;

    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_ordering_by_min_price() {
    let app = TestApp::new().await;
    let (_biz_id, auth) = app.signup("sorter", "business").await;

    create_offer(&app, &auth, "Teuer", "", 500.0).await;
    create_offer(&app, &auth, "Billig", "", 20.0).await;
    create_offer(&app, &auth, "Mittel", "", 100.0).await;

    let response = app.get("/api/offers/?ordering=min_price", None).await;
    let body = parse_body(response).await;
    let titles: Vec<_> = body["results"].as_array().unwrap().iter()
        .map(|o| o["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Billig", "Mittel", "Teuer"]);

    let response = app.get("/api/offers/?ordering=-min_price", None).await;
    let body = parse_body(response).await;
    assert_eq!(body["results"][0]["title"], "Teuer");
}

#[tokio::test]
async fn test_default_ordering_is_most_recently_updated_first() {
    let app = TestApp::new().await;
    let (_biz_id, auth) = app.signup("chrono", "business").await;

    create_offer(&app, &auth, "Älter", "", 10.0).await;
    let newer = create_offer(&app, &auth, "Neuer", "", 10.0).await;

    // patching bumps updated_at
    let older_list = app.get("/api/offers/", None).await;
    let body = parse_body(older_list).await;
    assert_eq!(body["results"][0]["title"], "Neuer");

    let older_id = body["results"][1]["id"].as_str().unwrap().to_string();
    app.patch(&format!("/api/offers/{}/", older_id), json!({"description": "frisch"}), Some(&auth)).await;

    let response = app.get("/api/offers/", None).await;
    let body = parse_body(response).await;
    assert_eq!(body["results"][0]["title"], "Älter");
    assert_eq!(body["results"][1]["id"], newer["id"]);
}

#[tokio::test]
async fn test_pagination_shape_and_navigation() {
    let app = TestApp::new().await;
    let (_biz_id, auth) = app.signup("paginator", "business").await;

    for i in 0..25 {
        create_offer(&app, &auth, &format!("Angebot {}", i), "", 10.0 + i as f64).await;
    }

    let response = app.get("/api/offers/?page=2&page_size=10", None).await;
    let body = parse_body(response).await;

    assert_eq!(body["count"], 25);
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
    assert!(body["next"].as_str().unwrap().contains("page=3"));
    assert!(body["previous"].as_str().unwrap().contains("page=1"));

    let response = app.get("/api/offers/?page=3&page_size=10", None).await;
    let body = parse_body(response).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
    assert!(body["next"].is_null());
}

#[tokio::test]
async fn test_page_size_is_capped() {
    let app = TestApp::new().await;
    let (_biz_id, auth) = app.signup("capper", "business").await;

    for i in 0..3 {
        create_offer(&app, &auth, &format!("O{}", i), "", 5.0).await;
    }

    // oversized page_size must not fail, it is clamped to the maximum
    let response = app.get("/api/offers/?page_size=5000", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_page_links_keep_filters() {
    let app = TestApp::new().await;
    let (creator_id, auth) = app.signup("linker", "business").await;

    for i in 0..12 {
        create_offer(&app, &auth, &format!("Link {}", i), "", 10.0).await;
    }

    let response = app.get(&format!("/api/offers/?creator_id={}&page_size=5", creator_id), None).await;
    let body = parse_body(response).await;

    let next = body["next"].as_str().unwrap();
    assert!(next.contains(&format!("creator_id={}", creator_id)));
    assert!(next.contains("page=2"));
}

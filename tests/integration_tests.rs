// Integration tests for the HTTP surface

use actix_web::{http::StatusCode, test, web, App};
use provider_recommender::core::Recommender;
use provider_recommender::models::{
    Client, ErrorResponse, MessageResponse, Provider, Rating, RecommendationsResponse,
};
use provider_recommender::routes::{self, AppState};
use provider_recommender::services::SqliteStore;
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

async fn build_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("api.db").display());
    let store = SqliteStore::new(&url, 2, 1, Duration::from_secs(5))
        .await
        .unwrap();

    let state = AppState {
        store,
        recommender: Recommender::default(),
    };
    (dir, state)
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_welcome() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: MessageResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.message, "Welcome to the SQLite-based recommender system API!");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_create_provider_twice_creates_two_records() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let payload = json!({
        "name": "Dr. Ada",
        "specialization": "Psychologist",
        "location": "Chicago"
    });

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/providers/")
            .set_json(&payload)
            .to_request();
        let provider: Provider = test::call_and_read_body_json(&app, req).await;
        assert_eq!(provider.name, "Dr. Ada");
        assert_eq!(provider.location, "Chicago");
        ids.push(provider.id);
    }
    assert_ne!(ids[0], ids[1]);

    let req = test::TestRequest::get().uri("/providers/").to_request();
    let providers: Vec<Provider> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(providers.len(), 2);
}

#[actix_web::test]
async fn test_create_provider_rejects_invalid_fields() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/providers/")
        .set_json(json!({"name": "", "specialization": "Therapist", "location": "Miami"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "validation_failed");
    assert_eq!(body.status_code, 400);

    let req = test::TestRequest::post()
        .uri("/providers/")
        .set_json(json!({
            "name": "Dr. Ada",
            "specialization": "Therapist",
            "location": "x".repeat(101)
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/providers/").to_request();
    let providers: Vec<Provider> = test::call_and_read_body_json(&app, req).await;
    assert!(providers.is_empty());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/clients/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_create_and_get_client() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/clients/")
        .set_json(json!({
            "name": "Ana",
            "need": "Stress",
            "location": "Houston",
            "preferred_gender": "Female"
        }))
        .to_request();
    let client: Client = test::call_and_read_body_json(&app, req).await;
    assert_eq!(client.need, "Stress");

    let req = test::TestRequest::get()
        .uri(&format!("/clients/{}", client.id))
        .to_request();
    let fetched: Client = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, client);

    let req = test::TestRequest::get().uri("/clients/404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/clients/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_mapping_with_unknown_client_is_not_found() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/providers/")
        .set_json(json!({"name": "Dr. Ada", "specialization": "Therapist", "location": "Miami"}))
        .to_request();
    let provider: Provider = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/client-provider-mapping/")
        .set_json(json!({"client_id": 99, "provider_id": provider.id, "rating": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "not_found");

    let req = test::TestRequest::get().uri("/client-provider-mapping/").to_request();
    let mappings: Vec<Rating> = test::call_and_read_body_json(&app, req).await;
    assert!(mappings.is_empty());
}

#[actix_web::test]
async fn test_mapping_validation() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    for payload in [
        json!({"client_id": 0, "provider_id": 1}),
        json!({"client_id": 1, "provider_id": 1, "rating": 6}),
        json!({"client_id": 1, "provider_id": 1, "rating": 0}),
    ] {
        let req = test::TestRequest::post()
            .uri("/client-provider-mapping/")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    }
}

#[actix_web::test]
async fn test_create_mapping_echoes_row() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/populate-dummy-data/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/client-provider-mapping/")
        .set_json(json!({"client_id": 3, "provider_id": 7}))
        .to_request();
    let mapping: Rating = test::call_and_read_body_json(&app, req).await;

    assert_eq!(mapping.client_id, 3);
    assert_eq!(mapping.provider_id, 7);
    assert!(mapping.rating.is_none());
    assert_eq!(mapping.id, 5);
}

#[actix_web::test]
async fn test_recommend_unknown_client_is_not_found() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/recommend/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Client 1 not found");
}

#[actix_web::test]
async fn test_integration_end_to_end_recommendation() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/populate-dummy-data/").to_request();
    let body: MessageResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "Dummy data added successfully.");

    let req = test::TestRequest::get().uri("/recommend/1").to_request();
    let body: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;
    let recs = body.recommendations;

    assert_eq!(recs.len(), 5);

    let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Dr. Alice", "Dr. Jane", "Dr. Fiona", "Dr. Diana", "Dr. Helen"]
    );
    assert!(!names.contains(&"Dr. Bob"));

    // John Doe's only overlap with Jane Smith is Dr. Bob, which carries no variance
    let scores: Vec<f64> = recs.iter().map(|r| r.score).collect();
    let expected = [60.0, 60.0, 48.0, 18.0, 18.0];
    for (score, want) in scores.iter().zip(expected) {
        assert!((score - want).abs() < 1e-9, "got {:?}", scores);
    }

    let alice = &recs[0];
    assert_eq!(alice.specialization, "Psychologist");
    assert_eq!(alice.gender.as_deref(), Some("Female"));
    assert_eq!(alice.language.as_deref(), Some("English"));
    assert_eq!(alice.cultural_background.as_deref(), Some("American"));
}

#[actix_web::test]
async fn test_recommendations_sorted_and_unique() {
    let (_dir, state) = build_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/populate-dummy-data/").to_request();
    test::call_service(&app, req).await;

    for client_id in 1..=10 {
        let req = test::TestRequest::get()
            .uri(&format!("/recommend/{}", client_id))
            .to_request();
        let body: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;
        let recs = body.recommendations;

        assert!(recs.len() <= 5);
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let mut ids: Vec<i64> = recs.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recs.len());
        assert!(recs.iter().all(|r| (0.0..=100.0).contains(&r.score)));
    }
}

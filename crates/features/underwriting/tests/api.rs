use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use qhub_database::Database;
use qhub_domain::config::ApiConfig;
use qhub_kernel::server::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;
use utoipa_axum::router::OpenApiRouter;

async fn test_app() -> Router {
    let cfg = ApiConfig::default();
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    let slice = qhub_underwriting::init(&cfg, &db).expect("slice init");
    let state = ApiState::builder()
        .config(cfg)
        .db(db)
        .register_slice(slice)
        .build()
        .expect("state build");

    let (router, _doc) =
        OpenApiRouter::new().merge(qhub_underwriting::router()).with_state(state).split_for_parts();
    router
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

fn post_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/requests")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn create_request_returns_success_envelope() {
    let app = test_app().await;

    let payload = json!({
        "title": "Health Coverage",
        "surgery": true,
        "surgeryBudget": 10000,
        "dentistry": true,
        "dentistryBudget": 5000,
        "hospitalization": true,
        "hospitalizationBudget": 3000
    });

    let response = app.oneshot(post_request(&payload)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(true));
    assert_eq!(body["message"], json!("Request has been saved successfully."));
    assert!(body.get("data").is_none(), "create carries no data payload");
}

#[tokio::test]
async fn invalid_budget_returns_failure_envelope() {
    let app = test_app().await;

    let payload = json!({
        "title": "Too cheap",
        "surgery": true,
        "surgeryBudget": 1000
    });

    let response = app.oneshot(post_request(&payload)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK, "failures still answer 200");

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(false));
    assert_eq!(body["message"], json!("You cant put less than 5000 budget for Surgery coverage."));
}

#[tokio::test]
async fn list_requests_round_trips_created_request() {
    let app = test_app().await;

    let payload = json!({
        "title": "Health Coverage",
        "surgery": true,
        "surgeryBudget": 10000,
        "dentistry": true,
        "dentistryBudget": 5000,
        "hospitalization": true,
        "hospitalizationBudget": 3000
    });
    let response = app.clone().oneshot(post_request(&payload)).await.expect("create response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/api/requests").body(Body::empty()).expect("request"))
        .await
        .expect("list response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(true));
    assert_eq!(body["message"], json!("Request list has been loaded successfully."));

    let rows = body["data"].as_array().expect("data is an array");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["title"], json!("Health Coverage"));
    assert_eq!(row["surgery"], json!(true));
    assert_eq!(row["surgeryBudget"], json!(10000.0));
    assert_eq!(row["dentistry"], json!(true));
    assert_eq!(row["dentistryBudget"], json!(5000.0));
    assert_eq!(row["hospitalization"], json!(true));
    assert_eq!(row["hospitalizationBudget"], json!(3000.0));

    let premium = row["totalNetPremium"].as_f64().expect("premium is numeric");
    let expected = 10_000.0 * 0.0052 + 5_000.0 * 0.0042 + 3_000.0 * 0.0050;
    assert!((premium - expected).abs() < 0.001);
}

#[tokio::test]
async fn empty_store_lists_an_empty_array() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/api/requests").body(Body::empty()).expect("request"))
        .await
        .expect("list response");

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(true));
    assert_eq!(body["data"], json!([]));
}

//! Integration tests for the ROPR server API endpoints.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use ropr_server::routes::create_router;
use ropr_server::{Server, ServerConfig};

/// Helper to make a GET request and get JSON response.
async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

/// Helper to make a POST request and get JSON response.
async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, serde_json::to_string(&body).unwrap()).await
}

async fn post_raw(app: axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

// =============================================================================
// HEALTH CHECK TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(create_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_versioned_health_through_server_layers() {
    let app = Server::new(ServerConfig::default()).router();
    let (status, json) = get_json(app, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

// =============================================================================
// CONTROLS TESTS
// =============================================================================

#[tokio::test]
async fn test_controls_catalogue() {
    let (status, json) = get_json(create_router(), "/api/v1/controls").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["header"], "Model Inputs");

    let controls = json["controls"].as_array().unwrap();
    assert_eq!(controls.len(), 5);
    assert_eq!(controls[0]["id"], "revenue_millions");
    assert_eq!(controls[0]["default"], 100);
    assert_eq!(controls[3]["max"], 100);

    assert_eq!(json["defaults"]["revenue_millions"], 100);
    assert_eq!(json["defaults"]["exposure_percent"], 40);
    assert_eq!(json["defaults"]["effectiveness_percent"], 75);
}

// =============================================================================
// COMPUTE TESTS
// =============================================================================

#[tokio::test]
async fn test_compute_default_scenario() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/compute",
        json!({
            "totalRevenue": 100000000.0,
            "cyberInvestment": 1000000.0,
            "bcdrInvestment": 500000.0,
            "riskExposurePercent": 40.0,
            "riskMitigationEffectiveness": 75.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalProtectiveInvestment"].as_f64(), Some(1_500_000.0));
    assert_eq!(json["revenueAtRisk"].as_f64(), Some(40_000_000.0));
    assert_eq!(json["avoidedLoss"].as_f64(), Some(30_000_000.0));
    assert_eq!(json["returnOnRiskPrevention"].as_f64(), Some(19.0));
}

#[tokio::test]
async fn test_compute_zero_investment() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/compute",
        json!({
            "totalRevenue": 50000000.0,
            "riskExposurePercent": 20.0,
            "riskMitigationEffectiveness": 50.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalProtectiveInvestment"].as_f64(), Some(0.0));
    assert_eq!(json["avoidedLoss"].as_f64(), Some(5_000_000.0));
    assert_eq!(json["returnOnRiskPrevention"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_compute_malformed_json() {
    let (status, _) = post_raw(
        create_router(),
        "/api/v1/compute",
        "{\"totalRevenue\": ".to_string(),
    )
    .await;

    assert!(status.is_client_error());
}

// =============================================================================
// DASHBOARD TESTS
// =============================================================================

#[tokio::test]
async fn test_dashboard_defaults() {
    let (status, json) = get_json(create_router(), "/api/v1/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Revenue-at-Risk Simulator");
    assert_eq!(json["results_header"], "Results Summary");
    assert_eq!(json["metrics"][0]["display"], "$40,000,000");
    assert_eq!(json["metrics"][1]["display"], "$30,000,000");
    assert_eq!(json["metrics"][2]["display"], "19.00x");
    assert_eq!(json["chart"]["series"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_dashboard_query_overrides() {
    let (status, json) = get_json(create_router(), "/api/v1/dashboard?exposure=50").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["controls"]["exposure_percent"], 50);
    assert_eq!(json["outputs"]["revenueAtRisk"].as_f64(), Some(50_000_000.0));
    assert_eq!(json["outputs"]["avoidedLoss"].as_f64(), Some(37_500_000.0));
}

#[tokio::test]
async fn test_dashboard_query_rejects_non_integer() {
    let (status, _) = get_json(create_router(), "/api/v1/dashboard?exposure=abc").await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_dashboard_post_clamps_controls() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/dashboard",
        json!({ "effectiveness_percent": 400, "revenue": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["controls"]["effectiveness_percent"], 100);
    assert_eq!(json["controls"]["revenue_millions"], 1);
    assert_eq!(json["inputs"]["totalRevenue"].as_f64(), Some(1_000_000.0));
    assert_eq!(json["metrics"][0]["display"], "$400,000");
}

// =============================================================================
// SENSITIVITY TESTS
// =============================================================================

#[tokio::test]
async fn test_sensitivity_default_inputs() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/sensitivity",
        json!({ "sweep": { "axis": "effectiveness" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 11);
    assert_eq!(points[0]["value"].as_f64(), Some(0.0));
    assert_eq!(points[10]["outputs"]["avoidedLoss"].as_f64(), Some(40_000_000.0));
    assert_eq!(json["breakEvenEffectiveness"].as_f64(), Some(3.75));
}

#[tokio::test]
async fn test_sensitivity_exposure_range() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/sensitivity",
        json!({
            "inputs": {
                "totalRevenue": 100000000.0,
                "cyberInvestment": 1000000.0,
                "bcdrInvestment": 500000.0,
                "riskExposurePercent": 40.0,
                "riskMitigationEffectiveness": 75.0
            },
            "sweep": { "axis": "exposure", "start": 0, "end": 25, "step": 10 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let values: Vec<f64> = json["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["value"].as_f64().unwrap())
        .collect();
    assert_eq!(values, vec![0.0, 10.0, 20.0, 25.0]);
}

#[tokio::test]
async fn test_sensitivity_invalid_step() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/sensitivity",
        json!({ "sweep": { "axis": "exposure", "step": 0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("step"));
}

#[tokio::test]
async fn test_sensitivity_unknown_axis() {
    let (status, _) = post_json(
        create_router(),
        "/api/v1/sensitivity",
        json!({ "sweep": { "axis": "revenue" } }),
    )
    .await;

    assert!(status.is_client_error());
}

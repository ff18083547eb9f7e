//! Tests for the reqwest-backed directory client, run against a local stub
//! upstream so the real request building and response shaping are exercised.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Extension, RawQuery},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use org_proxy_core::kernel::{
    DirectoryClient, DirectoryError, DirectoryQuery, OrganizationDirectory, SortBy, SortOrder,
};

/// One request as seen by the stub upstream.
#[derive(Debug, Clone)]
struct ReceivedRequest {
    api_key: Option<String>,
    query: String,
}

#[derive(Clone)]
struct UpstreamState {
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
    status: StatusCode,
    response: Arc<Value>,
}

async fn data_handler(
    Extension(state): Extension<UpstreamState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(ReceivedRequest {
        api_key: headers
            .get("api-key")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        query: query.unwrap_or_default(),
    });
    (state.status, Json(state.response.as_ref().clone()))
}

/// Bind a stub upstream on an ephemeral port serving `/data`.
///
/// Returns the base URL plus a handle on the requests it received.
async fn spawn_upstream(
    status: StatusCode,
    response: Value,
) -> (String, Arc<Mutex<Vec<ReceivedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        requests: requests.clone(),
        status,
        response: Arc::new(response),
    };

    let app = Router::new()
        .route("/data", get(data_handler))
        .layer(Extension(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), requests)
}

fn envelope(data: Value) -> Value {
    let total = data.as_array().map(|records| records.len()).unwrap_or(0);
    json!({ "data": data, "total_records": total })
}

fn record(name: &str, employee_count: u64, industry: &str) -> Value {
    json!({
        "name": name,
        "country": "USA",
        "employee_count": employee_count,
        "industry": industry,
        "founded": 2012,
    })
}

fn client(base_url: &str) -> DirectoryClient {
    DirectoryClient::new(base_url.to_string(), "test_key".to_string()).unwrap()
}

#[tokio::test]
async fn sends_api_key_and_pagination_to_the_data_endpoint() {
    let body = envelope(json!([
        record("Test Corp", 100, "Technology"),
        record("Big Corp", 300, "Finance"),
    ]));
    let (base_url, requests) = spawn_upstream(StatusCode::OK, body).await;

    let response = client(&base_url)
        .get_organizations(DirectoryQuery {
            size: 10,
            offset: 5,
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].api_key.as_deref(), Some("test_key"));
    assert_eq!(requests[0].query, "size=10&offset=5");

    assert_eq!(response.organizations.len(), 2);
    assert_eq!(response.organizations[0].name, "Test Corp");
    assert_eq!(response.average_employees, Some(200.0));
}

#[tokio::test]
async fn organizations_forwards_filters_upstream() {
    let (base_url, requests) = spawn_upstream(StatusCode::OK, envelope(json!([]))).await;

    let response = client(&base_url)
        .get_organizations(DirectoryQuery {
            size: 5,
            offset: 20,
            min_employees: 150,
            country: Some("France".to_string()),
            sort_by: Some(SortBy::Founded),
            sort_order: Some(SortOrder::Asc),
        })
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].query,
        "size=5&offset=20&min_employees=150&country=France&sort_by=founded&sort_order=asc"
    );
    assert_eq!(response.average_employees, None);
}

#[tokio::test]
async fn transformed_defaults_to_employee_count_descending() {
    let body = envelope(json!([
        record("Mega Corp", 4000, "Technology"),
        record("Small Corp", 400, "Technology"),
    ]));
    let (base_url, requests) = spawn_upstream(StatusCode::OK, body).await;

    let response = client(&base_url)
        .get_transformed_organizations(DirectoryQuery {
            size: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].query,
        "size=10&offset=0&sort_by=employee_count&sort_order=desc"
    );

    assert!(response.organizations[0].is_large);
    assert!(!response.organizations[1].is_large);
    assert_eq!(response.average_employees, Some(2200.0));
}

#[tokio::test]
async fn transformed_keeps_a_caller_supplied_sort() {
    let (base_url, requests) = spawn_upstream(StatusCode::OK, envelope(json!([]))).await;

    client(&base_url)
        .get_transformed_organizations(DirectoryQuery {
            size: 10,
            sort_by: Some(SortBy::Founded),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].query,
        "size=10&offset=0&sort_by=founded&sort_order=asc"
    );
}

#[tokio::test]
async fn large_tech_narrows_to_technology_and_recomputes_average() {
    let body = envelope(json!([
        record("Tech One", 2000, "Technology"),
        record("Money Corp", 3000, "Finance"),
        record("Tech Two", 4000, "Technology"),
    ]));
    let (base_url, requests) = spawn_upstream(StatusCode::OK, body).await;

    let response = client(&base_url)
        .get_large_tech_companies(10, 0)
        .await
        .unwrap();

    // The large-size filter rides along upstream; industry is narrowed locally.
    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].query, "size=10&offset=0&min_employees=1000");

    assert_eq!(response.organizations.len(), 2);
    assert!(response
        .organizations
        .iter()
        .all(|org| org.industry == "Technology"));
    assert_eq!(response.average_employees, Some(3000.0));
}

#[tokio::test]
async fn large_tech_with_no_tech_records_has_no_average() {
    let body = envelope(json!([record("Money Corp", 3000, "Finance")]));
    let (base_url, _requests) = spawn_upstream(StatusCode::OK, body).await;

    let response = client(&base_url)
        .get_large_tech_companies(10, 0)
        .await
        .unwrap();

    assert!(response.organizations.is_empty());
    assert_eq!(response.average_employees, None);
}

#[tokio::test]
async fn upstream_error_status_surfaces_as_status_error() {
    let (base_url, _requests) =
        spawn_upstream(StatusCode::BAD_GATEWAY, json!({ "error": "boom" })).await;

    let result = client(&base_url)
        .get_organizations(DirectoryQuery {
            size: 10,
            ..Default::default()
        })
        .await;

    match result {
        Err(DirectoryError::Status { status, .. }) => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn malformed_envelope_surfaces_as_transport_error() {
    let (base_url, _requests) =
        spawn_upstream(StatusCode::OK, json!({ "data": "not an array" })).await;

    let result = client(&base_url)
        .get_organizations(DirectoryQuery {
            size: 10,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DirectoryError::Transport(_))));
}

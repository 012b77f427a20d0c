use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use paymux_types::{ProviderError, TemplateParams, TemplateRenderer};
use serde_json::{Value, json};

use crate::{MandrillClient, MandrillConfig};

#[derive(Clone)]
struct VendorState {
    info_requests: Arc<Mutex<Vec<Value>>>,
    render_requests: Arc<Mutex<Vec<Value>>>,
    info_status: u16,
    info_response: Value,
    render_response: Value,
}

async fn template_info(
    State(state): State<VendorState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.info_requests.lock().unwrap().push(body);
    (
        StatusCode::from_u16(state.info_status).unwrap(),
        Json(state.info_response.clone()),
    )
}

async fn template_render(
    State(state): State<VendorState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.render_requests.lock().unwrap().push(body);
    (StatusCode::OK, Json(state.render_response.clone()))
}

/// Boot a fake template vendor on a random local port. Lookup and render
/// bodies are recorded per endpoint.
async fn start_vendor(
    info_status: u16,
    info_response: Value,
    render_response: Value,
) -> (
    MandrillClient,
    Arc<Mutex<Vec<Value>>>,
    Arc<Mutex<Vec<Value>>>,
) {
    let info_requests = Arc::new(Mutex::new(Vec::new()));
    let render_requests = Arc::new(Mutex::new(Vec::new()));
    let state = VendorState {
        info_requests: Arc::clone(&info_requests),
        render_requests: Arc::clone(&render_requests),
        info_status,
        info_response,
        render_response,
    };

    let app = Router::new()
        .route("/templates/info.json", post(template_info))
        .route("/templates/render.json", post(template_render))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = MandrillConfig::new("md-test-key").with_endpoint(format!("http://{addr}"));
    (MandrillClient::new(config), info_requests, render_requests)
}

#[tokio::test]
async fn renders_a_template_with_merge_vars() {
    let (client, info_requests, render_requests) = start_vendor(
        200,
        json!({"name": "welcome", "code": "<div>{{name}}</div>", "publish_name": "welcome"}),
        json!({"html": "<div>Ana</div>"}),
    )
    .await;

    let mut params = TemplateParams::new();
    params.insert("name".to_string(), json!("Ana"));

    let html = client.get_content("welcome", &params).await.unwrap();
    assert_eq!(html, "<div>Ana</div>");

    let info_requests = info_requests.lock().unwrap();
    assert_eq!(info_requests.len(), 1);
    assert_eq!(info_requests[0]["key"], "md-test-key");
    assert_eq!(info_requests[0]["name"], "welcome");

    let render_requests = render_requests.lock().unwrap();
    assert_eq!(render_requests.len(), 1);
    assert_eq!(render_requests[0]["template_name"], "welcome");
    assert_eq!(render_requests[0]["template_content"], "<div>{{name}}</div>");
    assert_eq!(
        render_requests[0]["merge_vars"],
        json!([{"name": "name", "content": "Ana"}])
    );
}

#[tokio::test]
async fn lookup_failure_short_circuits_the_render() {
    let lookup_error = json!({
        "status": "error",
        "code": -1,
        "name": "Unknown_Template",
        "message": "No template \"welcome\" exists"
    });
    let (client, info_requests, render_requests) =
        start_vendor(500, lookup_error.clone(), json!({"html": "unused"})).await;

    let err = client
        .get_content("welcome", &TemplateParams::new())
        .await
        .unwrap_err();
    match err {
        ProviderError::Vendor { status, payload } => {
            assert_eq!(status, 500);
            assert_eq!(payload, lookup_error);
        }
        other => panic!("expected vendor error, got {other:?}"),
    }

    assert_eq!(info_requests.lock().unwrap().len(), 1);
    assert_eq!(render_requests.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn merge_vars_follow_param_insertion_order() {
    let (client, _info_requests, render_requests) = start_vendor(
        200,
        json!({"code": "<p>{{z}}{{a}}{{m}}</p>"}),
        json!({"html": "<p>ok</p>"}),
    )
    .await;

    let mut params = TemplateParams::new();
    params.insert("z".to_string(), json!("last letter"));
    params.insert("a".to_string(), json!("first letter"));
    params.insert("m".to_string(), json!(13));

    client.get_content("letters", &params).await.unwrap();

    let render_requests = render_requests.lock().unwrap();
    assert_eq!(
        render_requests[0]["merge_vars"],
        json!([
            {"name": "z", "content": "last letter"},
            {"name": "a", "content": "first letter"},
            {"name": "m", "content": 13}
        ])
    );
}

#[tokio::test]
async fn render_resolves_with_the_html_only() {
    let (client, _info_requests, _render_requests) = start_vendor(
        200,
        json!({"code": "<div></div>"}),
        json!({"html": "<div>rendered</div>", "subject": "ignored", "text": "ignored"}),
    )
    .await;

    let html = client
        .get_content("welcome", &TemplateParams::new())
        .await
        .unwrap();
    assert_eq!(html, "<div>rendered</div>");
}

#[tokio::test]
async fn render_payload_without_html_is_a_parse_error() {
    let (client, _info_requests, _render_requests) = start_vendor(
        200,
        json!({"code": "<div></div>"}),
        json!({"subject": "no html here"}),
    )
    .await;

    let err = client
        .get_content("welcome", &TemplateParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}

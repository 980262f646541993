use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    routing::{get, post},
    Router,
};
use shared::{
    domain::{AnalysisRequest, SentimentLabel},
    error::RequestError,
};
use tokio::{net::TcpListener, sync::Mutex};

use super::{ClassificationService, HttpClassificationService, ServiceProbe};
use crate::{
    config::Endpoints,
    controller::{AnalysisController, Presenter, UiState},
    presentation::{FailureView, PanelClass, RenderSpec},
};

#[derive(Debug, Clone)]
struct CapturedRequest {
    content_type: Option<String>,
    authorization: Option<String>,
    query: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn handle_analyze(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    state.captured.lock().await.push(CapturedRequest {
        content_type: header_text(header::CONTENT_TYPE),
        authorization: header_text(header::AUTHORIZATION),
        query: uri.query().map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

async fn handle_probe(
    State(state): State<MockState>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

async fn spawn_service(
    status: StatusCode,
    body: &'static str,
) -> Result<(Endpoints, Arc<Mutex<Vec<CapturedRequest>>>)> {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body,
        captured: captured.clone(),
    };
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/api/sentiment", post(handle_analyze))
        .route("/api/health", get(handle_probe))
        .route("/api/stats", get(handle_probe))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((Endpoints::from_base(&format!("http://{addr}"))?, captured))
}

async fn unreachable_endpoints() -> Result<Endpoints> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(Endpoints::from_base(&format!("http://{addr}"))?)
}

fn request(text: &str) -> AnalysisRequest {
    AnalysisRequest {
        text: text.to_string(),
    }
}

#[tokio::test]
async fn posts_json_body_and_parses_result() {
    let (endpoints, captured) = spawn_service(
        StatusCode::OK,
        r#"{"prediction":"Positivo","probability":0.87}"#,
    )
    .await
    .expect("spawn mock service");
    let service = HttpClassificationService::new(endpoints.analyze);

    let result = service
        .classify(&request("  Excelente servicio "))
        .await
        .expect("classification");

    assert_eq!(result.prediction, SentimentLabel::Positive);
    assert_eq!(result.probability, 0.87);

    let captured = captured.lock().await;
    assert_eq!(captured.len(), 1);
    let sent = &captured[0];
    assert_eq!(sent.content_type.as_deref(), Some("application/json"));
    assert_eq!(sent.authorization, None);
    assert_eq!(sent.query, None);
    assert_eq!(
        sent.body,
        serde_json::json!({ "text": "  Excelente servicio " })
    );
}

#[tokio::test]
async fn non_success_status_is_a_request_error() {
    let (endpoints, captured) = spawn_service(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"Internal Server Error"}"#,
    )
    .await
    .expect("spawn mock service");
    let service = HttpClassificationService::new(endpoints.analyze);

    let err = service
        .classify(&request("hola"))
        .await
        .expect_err("500 must fail");
    assert_eq!(err, RequestError::Status(500));
    assert_eq!(captured.lock().await.len(), 1, "exactly one attempt, no retry");
}

#[tokio::test]
async fn malformed_body_is_a_request_error() {
    for body in [
        "not json at all",
        r#"{"prediction":"Positivo"}"#,
        r#"{"prevision":"Positivo","probabilidad":0.9}"#,
        r#"{"prediction":"Positivo","probability":"0.9"}"#,
    ] {
        let (endpoints, _) = spawn_service(StatusCode::OK, body)
            .await
            .expect("spawn mock service");
        let service = HttpClassificationService::new(endpoints.analyze);

        let err = service
            .classify(&request("hola"))
            .await
            .expect_err("malformed body must fail");
        assert!(
            matches!(err, RequestError::MalformedBody(_)),
            "body {body:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let endpoints = unreachable_endpoints().await.expect("free port");
    let service = HttpClassificationService::new(endpoints.analyze);

    let err = service
        .classify(&request("hola"))
        .await
        .expect_err("nothing is listening");
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[derive(Default)]
struct PanelPresenter {
    loading: bool,
    panel: Option<PanelClass>,
    message: Option<String>,
}

impl Presenter for PanelPresenter {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn clear_result(&mut self) {
        self.panel = None;
        self.message = None;
    }

    fn render_success(&mut self, view: &RenderSpec) {
        self.panel = Some(view.panel);
        self.message = Some(format!("{} {}", view.prediction, view.probability_text));
    }

    fn render_failure(&mut self, view: &FailureView) {
        self.panel = Some(view.panel);
        self.message = Some(view.message.to_string());
    }

    fn show_notice(&mut self, _message: &str) {}
}

#[tokio::test]
async fn controller_over_http_renders_failure_for_bad_gateway() {
    let (endpoints, _) = spawn_service(StatusCode::BAD_GATEWAY, "")
        .await
        .expect("spawn mock service");
    let service = HttpClassificationService::new(endpoints.analyze);
    let mut presenter = PanelPresenter::default();
    let mut controller = AnalysisController::new();

    let state = controller
        .analyze(&service, "hola", &mut presenter)
        .await
        .expect("trigger accepted");

    assert_eq!(state, &UiState::Failure);
    assert_eq!(presenter.panel, Some(PanelClass::Neutral));
    assert_eq!(
        presenter.message.as_deref(),
        Some(crate::presentation::FAILURE_MESSAGE)
    );
    assert!(!presenter.loading);
}

#[tokio::test]
async fn controller_over_http_renders_neutral_label() {
    let (endpoints, _) = spawn_service(
        StatusCode::OK,
        r#"{"prediction":"Neutral","probability":0.50}"#,
    )
    .await
    .expect("spawn mock service");
    let service = HttpClassificationService::new(endpoints.analyze);
    let mut presenter = PanelPresenter::default();
    let mut controller = AnalysisController::new();

    controller
        .analyze(&service, "meh", &mut presenter)
        .await
        .expect("trigger accepted");

    assert_eq!(presenter.panel, Some(PanelClass::Neutral));
    assert_eq!(presenter.message.as_deref(), Some("Neutral 50.00"));
    assert!(!presenter.loading);
}

#[tokio::test]
async fn health_probe_reads_healthy_report() {
    let (endpoints, _) = spawn_service(
        StatusCode::OK,
        r#"{"status":"UP","mlServiceStatus":"connected","uptime":"5m 3s","timestamp":"2024-05-01T10:00:00"}"#,
    )
    .await
    .expect("spawn mock service");

    let report = ServiceProbe::new(endpoints)
        .check_health()
        .await
        .expect("health");
    assert!(report.is_up());
    assert_eq!(report.ml_service_status.as_deref(), Some("connected"));
}

#[tokio::test]
async fn health_probe_reads_degraded_report_from_503() {
    let (endpoints, _) = spawn_service(
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"status":"DEGRADED","mlServiceStatus":"disconnected","uptime":"12s"}"#,
    )
    .await
    .expect("spawn mock service");

    let report = ServiceProbe::new(endpoints)
        .check_health()
        .await
        .expect("degraded health is still a report");
    assert!(!report.is_up());
    assert_eq!(report.ml_service_status.as_deref(), Some("disconnected"));
}

#[tokio::test]
async fn health_probe_rejects_other_statuses() {
    let (endpoints, _) = spawn_service(StatusCode::NOT_FOUND, "")
        .await
        .expect("spawn mock service");

    let err = ServiceProbe::new(endpoints)
        .check_health()
        .await
        .expect_err("404 is not a health report");
    assert_eq!(err, RequestError::Status(404));
}

#[tokio::test]
async fn stats_probe_reads_snapshot() {
    let (endpoints, _) = spawn_service(
        StatusCode::OK,
        r#"{"total":10,"positiveCount":6,"negativeCount":3,"neutralCount":1,
            "positivePercentage":60.0,"negativePercentage":30.0,"neutralPercentage":10.0,
            "averageProbabilityPositive":0.91,"averageProbabilityNegative":0.8,
            "averageProbabilityNeutral":0.55}"#,
    )
    .await
    .expect("spawn mock service");

    let stats = ServiceProbe::new(endpoints)
        .fetch_stats()
        .await
        .expect("stats");
    assert_eq!(stats.total, 10);
    assert_eq!(stats.positive_count, 6);
    assert_eq!(stats.negative_percentage, 30.0);
    assert_eq!(stats.average_probability_neutral, 0.55);
}

#[tokio::test]
async fn stats_probe_surfaces_transport_failure() {
    let endpoints = unreachable_endpoints().await.expect("free port");

    let err = ServiceProbe::new(endpoints)
        .fetch_stats()
        .await
        .expect_err("nothing is listening");
    assert!(err.is_transport());
}

//! Dashboard API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the dashboard API router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/calls", get(endpoints::calls::list))
        .route("/calls/regenerate", post(endpoints::calls::regenerate))
        .route("/calls/:id", get(endpoints::calls::detail))
        .route("/metrics", get(endpoints::metrics::summary))
        .route("/analysis", post(endpoints::analysis::generate))
        .route("/analysis/summary", post(endpoints::analysis::summary))
        .route("/session", get(endpoints::session::get))
        .route("/session/select/:id", post(endpoints::session::select))
        .route("/session/workflow", post(endpoints::session::workflow))
        .route("/session/reset", post(endpoints::session::reset))
        .with_state(ctx);

    // Browser dashboards are served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new().nest("/api", api).layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tower::ServiceExt;

    fn test_core_state() -> Arc<CoreState> {
        Arc::new(CoreState::with_rng(StdRng::seed_from_u64(2024), 12).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        post_raw_json(uri, &body.to_string())
    }

    fn post_raw_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, json_body(response).await)
    }

    #[tokio::test]
    async fn health_reports_batch_size() {
        let app = api_router(test_core_state());
        let (status, json) = send(&app, get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["batch_size"], 12);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = api_router(test_core_state());
        let response = app.oneshot(get_request("/api/nonexistent")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_calls_returns_whole_batch() {
        let app = api_router(test_core_state());
        let (status, json) = send(&app, get_request("/api/calls")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 12);
        assert_eq!(json["calls"].as_array().unwrap().len(), 12);
        assert!(!json["categories"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_calls_filters_by_status() {
        let app = api_router(test_core_state());
        let req = get_request("/api/calls?status=Urgent&sort=priority");
        let (status, json) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        for call in json["calls"].as_array().unwrap() {
            assert_eq!(call["status"], "Urgent");
        }
    }

    #[tokio::test]
    async fn list_calls_rejects_unknown_status() {
        let app = api_router(test_core_state());
        let (status, json) = send(&app, get_request("/api/calls?status=Closed")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn call_detail_and_missing_call() {
        let core = test_core_state();
        let id = core.calls().unwrap()[0].call_id.clone();
        let app = api_router(core);

        let (status, json) = send(&app, get_request(&format!("/api/calls/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["call_id"], id.as_str());
        assert!(json["voicemail_data"]["message"].is_string());

        let (status, json) = send(&app, get_request("/api/calls/CALL-00000000")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn regenerate_with_and_without_body() {
        let core = test_core_state();
        let app = api_router(core.clone());

        let req = post_json("/api/calls/regenerate", serde_json::json!({"count": 5}));
        let (status, json) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 5);
        assert_eq!(core.calls().unwrap().len(), 5);

        let (status, json) = send(&app, post_empty("/api/calls/regenerate")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 12);
    }

    #[tokio::test]
    async fn regenerate_rejects_oversized_batch() {
        let app = api_router(test_core_state());
        let req = post_json("/api/calls/regenerate", serde_json::json!({"count": 100_000}));
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn regenerate_with_malformed_body_keeps_session() {
        let core = test_core_state();
        let id = core.calls().unwrap()[0].call_id.clone();
        core.select_call(&id).unwrap();
        let before = core.calls().unwrap();
        let app = api_router(core.clone());

        for body in [r#"{"count": "five"}"#, r#"{"count": -3}"#, r#"{"count": 5"#, ""] {
            let (status, json) = send(&app, post_raw_json("/api/calls/regenerate", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"]["code"], "BAD_REQUEST");
        }

        assert!(Arc::ptr_eq(&before, &core.calls().unwrap()));
        assert_eq!(core.snapshot().unwrap().selected_call.as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn metrics_match_batch() {
        let core = test_core_state();
        let urgent = core.calls().unwrap().iter().filter(|c| c.is_urgent()).count();
        let app = api_router(core);

        let (status, json) = send(&app, get_request("/api/metrics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["summary"]["total"], 12);
        assert_eq!(json["summary"]["urgent_count"], urgent);
        assert!(json["statistics"]["urgent_percentage"].is_number());
    }

    #[tokio::test]
    async fn analysis_endpoints_generate_records() {
        let app = api_router(test_core_state());

        let (status, json) = send(&app, post_empty("/api/analysis")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["compliance_check"]["hipaa_compliant"], true);

        let (status, json) = send(&app, post_empty("/api/analysis/summary")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["call_summary"].is_string());
        let cases = json["similar_cases"].as_array().unwrap().len();
        assert!((2..=4).contains(&cases));
    }

    #[tokio::test]
    async fn workflow_through_http() {
        let core = test_core_state();
        let id = core.calls().unwrap()[2].call_id.clone();
        let app = api_router(core);

        let start = serde_json::json!({"event": "start_analysis"});
        let (status, json) = send(&app, post_json("/api/session/workflow", start)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["code"], "CONFLICT");

        let (status, json) = send(&app, post_empty(&format!("/api/session/select/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["selected_call"], id.as_str());
        assert_eq!(json["stage"], "initial");

        for (event, stage) in [
            ("start_analysis", "analyzing"),
            ("complete_analysis", "show_results"),
            ("generate_ticket", "ticket_generated"),
        ] {
            let req = post_json("/api/session/workflow", serde_json::json!({ "event": event }));
            let (status, json) = send(&app, req).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["stage"], stage);
        }

        let (_, json) = send(&app, get_request("/api/session")).await;
        assert!(json["ticket"]["ticket_id"].as_str().unwrap().starts_with("TKT-"));

        let again = serde_json::json!({"event": "complete_analysis"});
        let (status, _) = send(&app, post_json("/api/session/workflow", again)).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unknown_workflow_event_is_bad_request() {
        let core = test_core_state();
        let id = core.calls().unwrap()[1].call_id.clone();
        core.select_call(&id).unwrap();
        let app = api_router(core.clone());

        let bogus = serde_json::json!({"event": "bogus"});
        let (status, json) = send(&app, post_json("/api/session/workflow", bogus)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"].is_string());

        let req = post_empty("/api/session/workflow");
        let (status, json) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");

        assert_eq!(core.snapshot().unwrap().stage, crate::workflow::AnalysisStage::Initial);
    }

    #[tokio::test]
    async fn session_reset_clears_selection() {
        let core = test_core_state();
        let id = core.calls().unwrap()[0].call_id.clone();
        let app = api_router(core);

        send(&app, post_empty(&format!("/api/session/select/{id}"))).await;
        let (status, json) = send(&app, post_empty("/api/session/reset")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["selected_call"].is_null());
        assert_eq!(json["batch_size"], 12);
    }

    #[tokio::test]
    async fn cors_preflight_allowed() {
        let app = api_router(test_core_state());
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/calls")
            .header("Origin", "http://localhost:3000")
            .header("Access-Control-Request-Method", "GET")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}

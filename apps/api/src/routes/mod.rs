pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Single stages
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route("/api/v1/jobs/analyze", post(handlers::handle_analyze))
        .route("/api/v1/resumes/optimize", post(handlers::handle_optimize))
        .route("/api/v1/resumes/render", post(handlers::handle_render))
        // Whole pipeline
        .route("/api/v1/resumes/tailor", post(handlers::handle_tailor))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config {
            max_resume_chars: 500,
            max_jd_chars: 200,
            ..Config::default()
        }))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["vocabulary_version"], crate::vocabulary::VOCABULARY_VERSION);
    }

    #[tokio::test]
    async fn test_parse_route() {
        let text = "EXPERIENCE\nSenior Engineer — 2020 – Present\nACME CORP\n• Built APIs\n• Led team";
        let (status, body) = post_json("/api/v1/resumes/parse", json!({ "resume_text": text })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience"][0]["title"], "Senior Engineer");
        assert_eq!(body["experience"][0]["startDate"], "2020");
        assert_eq!(body["experience"][0]["bullets"], json!(["Built APIs", "Led team"]));
    }

    #[tokio::test]
    async fn test_parse_route_rejects_oversized_text() {
        let text = "x".repeat(501);
        let (status, body) = post_json("/api/v1/resumes/parse", json!({ "resume_text": text })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_route() {
        let jd = "We require experience with PostgreSQL and React. Must have AWS.";
        let (status, body) = post_json("/api/v1/jobs/analyze", json!({ "jd_text": jd })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywordsByCategory"]["databases"][0]["term"], "PostgreSQL");
        assert_eq!(body["keywordsByCategory"]["cloud"][0]["term"], "AWS");
    }

    #[tokio::test]
    async fn test_optimize_route_reorders_skills() {
        let jd = "We require experience with PostgreSQL and React. Must have AWS.";
        let (_, analysis) = post_json("/api/v1/jobs/analyze", json!({ "jd_text": jd })).await;
        let resume = json!({ "skills": { "databases": ["MySQL", "PostgreSQL"] } });
        let (status, body) = post_json(
            "/api/v1/resumes/optimize",
            json!({ "resume": resume, "analysis": analysis, "jd_text": jd }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"]["databases"], json!(["PostgreSQL", "MySQL"]));
    }

    #[tokio::test]
    async fn test_optimize_route_contract_violation() {
        let analysis = json!({
            "jobTitle": "",
            "keywordsByCategory": { "databases": [{ "term": "MySQL", "weight": -1.0 }] }
        });
        let (status, body) = post_json(
            "/api/v1/resumes/optimize",
            json!({ "resume": {}, "analysis": analysis }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "CONTRACT_VIOLATION");
    }

    #[tokio::test]
    async fn test_render_route() {
        let resume = json!({
            "name": "Jane Doe",
            "certifications": ["CKA"]
        });
        let (status, body) = post_json("/api/v1/resumes/render", json!({ "resume": resume })).await;
        assert_eq!(status, StatusCode::OK);
        let text = body["text"].as_str().unwrap();
        assert!(text.trim_start().starts_with("JANE DOE"));
        assert!(text.ends_with("CERTIFICATIONS\n  • CKA\n"));
    }

    #[tokio::test]
    async fn test_tailor_route() {
        let (status, body) = post_json(
            "/api/v1/resumes/tailor",
            json!({
                "resume_text": "SKILLS\nDatabases: MySQL, PostgreSQL",
                "jd_text": "Must have PostgreSQL."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimized"]["skills"]["databases"], json!(["PostgreSQL", "MySQL"]));
        assert_eq!(body["coverage"]["score"], 100);
        assert!(body["rendered"].as_str().unwrap().contains("Databases: PostgreSQL, MySQL"));
    }
}

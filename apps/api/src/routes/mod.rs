pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::resume::upload::MULTIPART_OVERHEAD_BYTES;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/resume/upload", post(resume::handle_upload))
        .route("/resume/optimize", post(resume::handle_optimize))
        // Jobs API
        .route("/jobs/from-resume", post(jobs::handle_jobs_from_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::jobs::provider::{JobProvider, JobSearchError};
    use crate::jobs::region::Region;
    use crate::jobs::search::JobSearch;
    use crate::matching::scoring::FixedJitter;
    use crate::models::job::{DisplayName, RawPosting};
    use crate::optimizer::HeuristicOptimizer;
    use crate::resume::extract::{ExtractError, TextExtractor};

    const BOUNDARY: &str = "gradhire-test-boundary";

    const RESUME_TEXT: &str = "Jane Doe, Software Engineer. Experience: three years as a \
        Python developer building backend services and REST APIs. Education: Bachelor of \
        Science in Computer Science, State University. Skills: Python, SQL, Docker, \
        Kubernetes, React. Projects: job matching platform with live ranking.";

    const IOS_RESUME_TEXT: &str = "John Roe, iOS Developer. Experience: four years shipping \
        Swift apps for consumer brands. Education: Bachelor of Science, Tech University. \
        Skills: Swift, SwiftUI, Core Data, XCTest, continuous integration. Projects: \
        offline-first note taking app with background sync.";

    struct FakeExtractor(String);

    impl TextExtractor for FakeExtractor {
        fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractError> {
            Ok(self.0.clone())
        }
    }

    /// Returns the same postings for every search and records each query.
    struct FakeProvider {
        postings: Vec<RawPosting>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl JobProvider for FakeProvider {
        async fn search(
            &self,
            _region: &Region,
            query: &str,
            _limit: u32,
        ) -> Result<Vec<RawPosting>, JobSearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.postings.clone())
        }
    }

    fn posting(title: &str, description: &str) -> RawPosting {
        RawPosting {
            title: Some(title.to_string()),
            company: Some(DisplayName {
                display_name: Some("Acme".to_string()),
            }),
            description: Some(description.to_string()),
            redirect_url: Some(format!("https://jobs.example/{title}")),
            ..Default::default()
        }
    }

    fn app_recording(
        text: &str,
        postings: Vec<RawPosting>,
        max_upload_bytes: usize,
    ) -> (Router, Arc<Mutex<Vec<String>>>) {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let provider = FakeProvider {
            postings,
            queries: queries.clone(),
        };
        let config = Config {
            max_upload_bytes,
            ..Config::default()
        };
        let state = AppState {
            config,
            extractor: Arc::new(FakeExtractor(text.to_string())),
            jobs: JobSearch::new(Arc::new(provider), Arc::new(FixedJitter(0))),
            optimizer: Arc::new(HeuristicOptimizer),
        };
        (build_router(state), queries)
    }

    fn app_with(text: &str, postings: Vec<RawPosting>, max_upload_bytes: usize) -> Router {
        app_recording(text, postings, max_upload_bytes).0
    }

    fn app() -> Router {
        app_with(RESUME_TEXT, Vec::new(), 1024)
    }

    fn upload(uri: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let (status, body) = send(app(), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "GradHire backend running");

        let (status, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "gradhire-api");
    }

    #[tokio::test]
    async fn test_upload_returns_extracted_text() {
        let request = upload("/resume/upload", "cv.pdf", "application/pdf", b"%PDF-1.7 stub");
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "cv.pdf");
        assert_eq!(body["size"], 13);
        assert_eq!(body["status"], "uploaded successfully");
        assert_eq!(body["text"], RESUME_TEXT);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let request = upload("/resume/upload", "cv.txt", "text/plain", b"hello");
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let request = upload("/resume/upload", "cv.pdf", "application/pdf", &[b'x'; 2048]);
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_resume_document() {
        let invoice = "Invoice 1042 for software consulting services. Payment due within \
            30 days. Line items: developer hours, engineer review, project management and \
            skills workshop. Thank you for your business. Total amount includes tax. \
            Please quote the invoice number on every remittance.";
        assert!(invoice.len() > 200);
        let app = app_with(invoice, Vec::new(), 1024);
        let request = upload("/resume/upload", "invoice.pdf", "application/pdf", b"%PDF-1.7");
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("invoice"), "{message}");
        assert!(!message.contains("too short"), "{message}");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhi\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_jobs_from_resume_returns_ranked_postings() {
        let postings = vec![
            posting("Accountant", "Ledger reconciliation and audits"),
            posting(
                "Backend Engineer",
                "Python backend services, REST APIs, Docker and Kubernetes experience",
            ),
        ];
        let app = app_with(RESUME_TEXT, postings, 1024);
        let request = upload("/jobs/from-resume?country=gb", "cv.pdf", "application/pdf", b"%PDF-1.7");
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0]["title"], "Backend Engineer");
        assert_eq!(jobs[0]["applyURL"], "https://jobs.example/Backend Engineer");
        assert_eq!(jobs[1]["location"], "Remote");
        assert!(jobs[0]["matchScore"].as_u64().unwrap() >= jobs[1]["matchScore"].as_u64().unwrap());
    }

    #[tokio::test]
    async fn test_jobs_from_resume_empty_on_no_results() {
        let request = upload("/jobs/from-resume", "cv.pdf", "application/pdf", b"%PDF-1.7");
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_jobs_query_comes_from_resume_keyword() {
        let (app, queries) = app_recording(IOS_RESUME_TEXT, Vec::new(), 1024);
        let request = upload("/jobs/from-resume?country=gb", "cv.pdf", "application/pdf", b"%PDF-1.7");
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
        assert_eq!(*queries.lock().unwrap(), vec!["ios"]);
    }

    #[tokio::test]
    async fn test_jobs_default_region_falls_back_to_broad_query() {
        let (app, queries) = app_recording(IOS_RESUME_TEXT, Vec::new(), 1024);
        let request = upload("/jobs/from-resume", "cv.pdf", "application/pdf", b"%PDF-1.7");
        let (status, _) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*queries.lock().unwrap(), vec!["ios", "software engineer"]);
    }

    #[tokio::test]
    async fn test_jobs_from_resume_rejects_unknown_region() {
        let request = upload("/jobs/from-resume?country=zz", "cv.pdf", "application/pdf", b"%PDF-1.7");
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("zz"));
    }

    #[tokio::test]
    async fn test_optimize_uses_configured_optimizer() {
        let request = Request::builder()
            .method("POST")
            .uri("/resume/optimize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"resume_text": "React developer", "job_description": "React and AWS"})
                    .to_string(),
            ))
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["missing_skills"], json!(["AWS"]));
        assert_eq!(body["backend"], "static");
    }

    #[tokio::test]
    async fn test_optimize_requires_both_texts() {
        let request = Request::builder()
            .method("POST")
            .uri("/resume/optimize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"resume_text": "React developer"}).to_string()))
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

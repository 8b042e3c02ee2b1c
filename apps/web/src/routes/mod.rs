pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dropdowns::handlers as dropdowns;
use crate::listing::handlers as listing;
use crate::registration::handlers as registration;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dropdown reference lists
        .route(
            "/api/v1/dropdowns/:kind",
            get(dropdowns::handle_get_dropdown).delete(dropdowns::handle_invalidate_dropdown),
        )
        // Registration wizard
        .route(
            "/api/v1/registration/validate",
            post(registration::handle_validate_step),
        )
        // Listing pages; `/:slug` covers SEO listings, jobs and companies
        .route("/referrals", get(listing::handle_referrals))
        .route("/:slug", get(listing::handle_slug))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use httpmock::prelude::*;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::backend_client::BackendClient;
    use crate::cache::MemoryCache;
    use crate::config::Config;

    fn test_state(server: &MockServer) -> AppState {
        AppState {
            backend: BackendClient::new(&server.base_url(), Duration::from_secs(5)).unwrap(),
            cache: Arc::new(MemoryCache::new()),
            config: Config {
                backend_api_url: server.base_url(),
                redis_url: None,
                dropdown_cache_ttl_hours: 24,
                backend_timeout_secs: 5,
                port: 0,
                rust_log: "debug".to_string(),
            },
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn empty_page() -> Value {
        json!({"jobs": [], "total": 0, "page": 1})
    }

    #[tokio::test]
    async fn test_seo_slug_resolves_city_and_searches() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dropdowns/locations");
                then.status(200).json_body(json!([
                    {"city": "Dubai", "country": "UAE"},
                    {"city": "", "country": "India"}
                ]));
            })
            .await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/jobs/search")
                    .query_param("keyword", "python")
                    .query_param("city", "Dubai")
                    .query_param("country", "UAE");
                then.status(200).json_body(json!({
                    "jobs": [{
                        "id": "12",
                        "title": "Python Developer",
                        "company_id": "5",
                        "company_name": "Globex",
                        "city": "Dubai",
                        "country": "UAE",
                        "posted_at": null
                    }],
                    "total": 1,
                    "page": 1
                }));
            })
            .await;

        let app = build_router(test_state(&server));
        let (status, body) = get_json(app, "/python-jobs-in-dubai").await;

        search.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canonical_path"], "/python-jobs-in-dubai");
        assert_eq!(body["jobs"][0]["slug"], "python-developer-jid-12");
        assert_eq!(body["jobs"][0]["company_slug"], "globex-cid-5");
    }

    #[tokio::test]
    async fn test_country_slug_canonicalises_to_country() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dropdowns/locations");
                then.status(200)
                    .json_body(json!([{"city": "", "country": "India"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/jobs/search")
                    .query_param("country", "India");
                then.status(200).json_body(empty_page());
            })
            .await;

        let (status, body) = get_json(build_router(test_state(&server)), "/jobs-in-india").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filters"]["country"], "India");
        assert_eq!(body["filters"]["city"], "");
        assert_eq!(body["canonical_path"], "/jobs-in-india");
    }

    #[tokio::test]
    async fn test_keyword_country_slug_keeps_its_canonical() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dropdowns/locations");
                then.status(200)
                    .json_body(json!([{"city": "", "country": "India"}]));
            })
            .await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/jobs/search")
                    .query_param("keyword", "python")
                    .query_param("country", "India");
                then.status(200).json_body(empty_page());
            })
            .await;

        let (status, body) =
            get_json(build_router(test_state(&server)), "/python-jobs-in-india").await;

        search.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filters"]["country"], "India");
        assert_eq!(body["canonical_path"], "/python-jobs-in-india");
    }

    #[tokio::test]
    async fn test_encoded_slug_is_decoded_once() {
        let server = MockServer::start_async().await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/jobs/search")
                    .query_param("keyword", "r%26d");
                then.status(200).json_body(empty_page());
            })
            .await;

        let (status, body) =
            get_json(build_router(test_state(&server)), "/r%2526d-jobs").await;

        search.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filters"]["keyword"], "r%26d");
    }

    #[tokio::test]
    async fn test_mixed_case_job_id_reaches_backend() {
        let server = MockServer::start_async().await;
        let detail = server
            .mock_async(|when, then| {
                when.method(GET).path("/jobs/AbC123");
                then.status(200).json_body(json!({
                    "id": "AbC123",
                    "title": "Rust Dev",
                    "company_id": "5",
                    "company_name": "Globex",
                    "posted_at": null,
                    "description": "",
                    "skills": []
                }));
            })
            .await;

        let (status, body) =
            get_json(build_router(test_state(&server)), "/rust-dev-jid-AbC123").await;

        detail.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canonical_path"], "/rust-dev-jid-AbC123");
    }

    #[tokio::test]
    async fn test_referrals_uses_query_filters() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/jobs/search")
                    .query_param("keyword", "Rust")
                    .query_param("page", "3");
                then.status(200).json_body(json!({"jobs": [], "total": 0, "page": 3}));
            })
            .await;

        let (status, body) =
            get_json(build_router(test_state(&server)), "/referrals?keyword=Rust&page=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canonical_path"], "/rust-jobs");
        assert_eq!(body["page"], 3);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let server = MockServer::start_async().await;
        let (status, body) = get_json(build_router(test_state(&server)), "/about-us").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_job_page_and_missing_job() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/jobs/12");
                then.status(200).json_body(json!({
                    "id": "12",
                    "title": "Python Developer",
                    "company_id": "5",
                    "company_name": "Globex",
                    "posted_at": null,
                    "description": "Build things",
                    "skills": ["python"]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/jobs/13");
                then.status(404);
            })
            .await;

        let app = build_router(test_state(&server));
        let (status, body) = get_json(app.clone(), "/old-title-jid-12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "job");
        assert_eq!(body["canonical_path"], "/python-developer-jid-12");

        let (status, _) = get_json(app, "/x-jid-13").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_dropdown_kind_is_bad_request() {
        let server = MockServer::start_async().await;
        let (status, body) =
            get_json(build_router(test_state(&server)), "/api/v1/dropdowns/salaries").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_registration_validate() {
        let server = MockServer::start_async().await;
        let app = build_router(test_state(&server));
        let payload = json!({
            "step": "account",
            "full_name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "9876543210",
            "password": "referme42"
        });

        let response = app
            .oneshot(
                Request::post("/api/v1/registration/validate")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["valid"], true);
        assert_eq!(body["next_step"], "professional");
        assert_eq!(body["progress_percent"], 33);
    }
}

// HTTP client for the upstream dashboard API
use crate::application::dashboard_source::DashboardSource;
use crate::domain::error::FetchError;
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

pub const DASHBOARD_PATH: &str = "/api/v1/dashboard";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}{}", self.base_url, DASHBOARD_PATH)
    }

    async fn execute(&self) -> Result<Bytes, FetchError> {
        let url = self.dashboard_url();
        tracing::debug!("Requesting dashboard data from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Dashboard request to {} failed: {}", url, e);
                FetchError::Transport(e.to_string())
            })?;

        tracing::debug!(headers = ?response.headers(), "Dashboard response received");

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or_else(|_| serde_json::json!({}));

            tracing::error!(
                status = status.as_u16(),
                status_text = %reason,
                error = %body,
                "Dashboard API error"
            );

            return Err(FetchError::Status {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, FetchError> {
        let body = self.execute().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn fetch_raw(&self) -> Result<Bytes, FetchError> {
        let body = self.execute().await?;
        // Relayed as application/json, so it has to be JSON
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> serde_json::Value {
        json!({
            "total_calls": 57,
            "total_calls_change": 5,
            "appointments_booked": 12,
            "appointments_change": -3,
            "avg_call_duration": "3m 20s",
            "avg_call_duration_change": 1.5,
            "avg_rating": 4.5,
            "avg_rating_change": 0,
            "daily_stats": [],
            "recent_calls": []
        })
    }

    #[test]
    fn test_dashboard_url_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.dashboard_url(), "http://localhost:8000/api/v1/dashboard");
    }

    #[tokio::test]
    async fn test_fetch_snapshot_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let snapshot = client.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot.total_calls, 57);
        assert_eq!(snapshot.avg_call_duration, "3m 20s");
    }

    #[tokio::test]
    async fn test_non_success_status_carries_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({ "detail": "maintenance" })),
            )
            .mount(&server)
            .await;

        let err = ApiClient::new(server.uri()).fetch_snapshot().await.unwrap_err();

        assert_eq!(err.to_string(), "API Error: 503 Service Unavailable");
        match err {
            FetchError::Status { status, body, .. } => {
                assert_eq!(status, 503);
                assert_eq!(body, json!({ "detail": "maintenance" }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_defaults_to_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = ApiClient::new(server.uri()).fetch_raw().await.unwrap_err();

        match err {
            FetchError::Status { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, json!({}));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_calls": "many" })))
            .mount(&server)
            .await;

        let err = ApiClient::new(server.uri()).fetch_snapshot().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_raw_returns_body_verbatim() {
        let server = MockServer::start().await;
        let body = r#"{"total_calls": 1, "extra": [1, 2, 3]}"#;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let raw = ApiClient::new(server.uri()).fetch_raw().await.unwrap();
        assert_eq!(raw, Bytes::from(body));
    }

    #[tokio::test]
    async fn test_fetch_raw_rejects_non_json_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = ApiClient::new(server.uri()).fetch_raw().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unregistered_status_has_no_trailing_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(599))
            .mount(&server)
            .await;

        let err = ApiClient::new(server.uri()).fetch_snapshot().await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: 599");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ApiClient::new(format!("http://{}", addr))
            .fetch_snapshot()
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}

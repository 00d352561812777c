//! HTTP delivery of inquiries to the email-sending endpoint.
//!
//! POSTs the JSON envelope once. A 2xx response is an accepted submission;
//! any other status or a transport error is reported back unchanged.
//! Auth: optional `Authorization: Bearer {key}` when a key is configured.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{Inquiry, InquirySender, SubmissionReceipt};
use crate::types::AuraError;

/// Body returned by the endpoint on success. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct SendAck {
    #[serde(default)]
    id: Option<String>,
}

/// reqwest-backed inquiry sender.
pub struct HttpInquiryClient {
    http: Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpInquiryClient {
    /// Create a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration, api_key: Option<SecretString>) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("AURA/0.1.0 (inquiry-relay)")
            .build()
            .context("Failed to build HTTP client for inquiry endpoint")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InquirySender for HttpInquiryClient {
    async fn send(&self, inquiry: &Inquiry) -> Result<SubmissionReceipt, AuraError> {
        debug!(endpoint = %self.endpoint, kind = inquiry.kind(), "Posting inquiry");

        let mut request = self.http.post(&self.endpoint).json(inquiry);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let resp = request.send().await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Inquiry endpoint unreachable");
            AuraError::SubmissionTransport(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(status = status.as_u16(), kind = inquiry.kind(), "Inquiry rejected");
            return Err(AuraError::SubmissionRejected {
                status: status.as_u16(),
                body,
            });
        }

        let ack: SendAck = serde_json::from_str(&body).unwrap_or_default();
        let receipt = SubmissionReceipt::new(ack.id, Utc::now());
        info!(
            kind = inquiry.kind(),
            reference = %receipt.reference(),
            submission_id = %receipt.submission_id,
            "Inquiry accepted"
        );
        Ok(receipt)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::ContactInquiry;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn contact() -> Inquiry {
        Inquiry::ContactForm(ContactInquiry {
            name: "Wayan".into(),
            email: "wayan@example.com".into(),
            phone: None,
            message: "Do you manage villas in Ubud?".into(),
        })
    }

    /// Serve `app` on an ephemeral port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(url: String, key: Option<&str>) -> HttpInquiryClient {
        HttpInquiryClient::new(
            url,
            Duration::from_secs(5),
            key.map(|k| SecretString::new(k.to_string())),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_accepted_submission_returns_remote_id() {
        let app = Router::new().route(
            "/api/send-email",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["type"], "contact-form");
                assert_eq!(body["data"]["name"], "Wayan");
                Json(json!({ "success": true, "id": "email_123" }))
            }),
        );
        let base = serve(app).await;
        let receipt = client(format!("{base}/api/send-email"), None)
            .send(&contact())
            .await
            .unwrap();
        assert_eq!(receipt.remote_id.as_deref(), Some("email_123"));
        assert!(receipt.reference().starts_with("AURA-"));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_accepted() {
        let app = Router::new().route("/", post(|| async { StatusCode::OK }));
        let base = serve(app).await;
        let receipt = client(format!("{base}/"), None).send(&contact()).await.unwrap();
        assert!(receipt.remote_id.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejection() {
        let app = Router::new().route(
            "/",
            post(|| async {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Failed to send email" })))
            }),
        );
        let base = serve(app).await;
        let err = client(format!("{base}/"), None).send(&contact()).await.unwrap_err();
        match err {
            AuraError::SubmissionRejected { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("Failed to send email"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bearer_key_is_sent() {
        let app = Router::new().route(
            "/",
            post(|headers: HeaderMap| async move {
                match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                    Some("Bearer secret-key") => StatusCode::OK,
                    _ => StatusCode::UNAUTHORIZED,
                }
            }),
        );
        let base = serve(app).await;
        assert!(client(format!("{base}/"), Some("secret-key")).send(&contact()).await.is_ok());
        let err = client(format!("{base}/"), None).send(&contact()).await.unwrap_err();
        assert!(matches!(err, AuraError::SubmissionRejected { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = client(format!("http://{addr}/"), None).send(&contact()).await.unwrap_err();
        assert!(matches!(err, AuraError::SubmissionTransport(_)));
    }
}

use std::env;
use std::future::Future;

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::domain::inquiry::InquiryPayload;
use crate::services::site_config_yaml::InquiryEndpoints;

pub const API_KEY_ENV: &str = "CABIN_RELAY_API_KEY";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("no inquiry endpoint configured")]
    MissingEndpoint,
    #[error("connection error: {0}")]
    Connection(String),
    #[error("relay rejected the inquiry with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers inquiries to the email relay.
pub trait InquirySender {
    fn send(&self, payload: &InquiryPayload) -> impl Future<Output = Result<(), RelayError>> + Send;

    fn notify_failure(
        &self,
        payload: &InquiryPayload,
        reason: &str,
    ) -> impl Future<Output = Result<(), RelayError>> + Send;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureNotice<'a> {
    #[serde(flatten)]
    payload: &'a InquiryPayload,
    error_reason: &'a str,
}

pub struct RelayClient {
    endpoints: InquiryEndpoints,
    api_key: Option<String>,
    client: Client,
}

impl RelayClient {
    pub fn new(endpoints: InquiryEndpoints, api_key: Option<String>) -> Result<Self, RelayError> {
        if endpoints.endpoint.trim().is_empty() {
            return Err(RelayError::MissingEndpoint);
        }

        Ok(Self {
            endpoints,
            api_key,
            client: Client::new(),
        })
    }

    pub fn from_env(endpoints: InquiryEndpoints) -> Result<Self, RelayError> {
        let api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        Self::new(endpoints, api_key)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<(), RelayError> {
        let mut request = self.client.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| RelayError::Connection(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl InquirySender for RelayClient {
    async fn send(&self, payload: &InquiryPayload) -> Result<(), RelayError> {
        self.post_json(&self.endpoints.endpoint, payload).await
    }

    async fn notify_failure(&self, payload: &InquiryPayload, reason: &str) -> Result<(), RelayError> {
        let Some(url) = &self.endpoints.failure_endpoint else {
            return Ok(());
        };
        let notice = FailureNotice {
            payload,
            error_reason: reason,
        };
        self.post_json(url, &notice).await
    }
}

/// Sends the inquiry. When delivery fails the failure endpoint is told about
/// it on a best-effort basis and the original error is returned.
pub async fn submit_inquiry<S: InquirySender + Sync>(
    sender: &S,
    payload: &InquiryPayload,
) -> Result<(), RelayError> {
    match sender.send(payload).await {
        Ok(()) => {
            tracing::info!(name = %payload.name, "inquiry delivered");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "inquiry delivery failed");
            if let Err(notify_err) = sender.notify_failure(payload, &err.to_string()).await {
                tracing::error!(error = %notify_err, "failure notification also failed");
            }
            Err(err)
        }
    }
}

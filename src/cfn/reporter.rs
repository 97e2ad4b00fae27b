//! Delivery of the response to the caller's callback URL.

use super::CfnResponse;
use crate::error::DeliveryError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Hands a finished response back to whoever sent the request.
#[async_trait]
pub trait ReportOutcome {
    async fn report(
        &self,
        response_url: &str,
        response: &CfnResponse,
    ) -> Result<(), DeliveryError>;
}

/// PUTs the JSON response to a (pre-signed) HTTP(S) URL.
pub struct HttpReporter {
    client: Client,
}

impl HttpReporter {
    pub fn new(timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpReporter { client })
    }
}

#[async_trait]
impl ReportOutcome for HttpReporter {
    async fn report(
        &self,
        response_url: &str,
        response: &CfnResponse,
    ) -> Result<(), DeliveryError> {
        let body = response.to_json()?;
        log::info!("ResponseURL: {response_url}");
        log::info!("ResponseBody: {body}");

        // Pre-signed S3 URLs are signed without a content type.
        let reply = self
            .client
            .put(response_url)
            .header(CONTENT_TYPE, "")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to send response to {response_url}: {e}");
                DeliveryError::Transport(e)
            })?;

        let status = reply.status();
        if !status.is_success() {
            let text = reply.text().await.unwrap_or_default();
            log::error!("Failed to send response. HTTP {status}: {text}");
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        log::info!("Status code: {status}");
        Ok(())
    }
}

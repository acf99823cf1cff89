//! Transport that POSTs envelopes to an HTTP endpoint.

use super::Transport;
use crate::error::{ChannelError, TransportError};
use crate::traits::Envelope;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Posts each envelope as JSON to a fixed URL.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: reqwest::Client,
    url: Url,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    channel: &'a str,
    recipient: &'a str,
    envelope: &'a Envelope,
}

impl WebhookTransport {
    /// Create a webhook transport with a request timeout.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| ChannelError::Config(format!("Invalid webhook URL '{}': {}", url, e)))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, url })
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    async fn transmit(
        &self,
        channel_name: &str,
        envelope: &Envelope,
        recipient: &str,
    ) -> std::result::Result<(), TransportError> {
        let payload = WebhookPayload {
            channel: channel_name,
            recipient,
            envelope,
        };

        let response = self
            .client
            .post(self.url.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {}>", e),
            };
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Webhook accepted {} envelope for {}", channel_name, recipient);
        Ok(())
    }
}

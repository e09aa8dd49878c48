use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use std::time::Duration;

/// Outbound HTTP used to reach subscriber callback URLs.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POSTs a JSON body and returns the response status.
    ///
    /// Only transport failures are errors; any HTTP status counts as delivered.
    async fn post(&self, url: &str, body: &[u8]) -> anyhow::Result<u16>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build webhook HTTP client: {}", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post(&self, url: &str, body: &[u8]) -> anyhow::Result<u16> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await?;
        Ok(response.status().as_u16())
    }
}

//! Output sink: one-way publish of agent results to a messaging topic.
//!
//! The broker is reached through its REST proxy. Publishes are one-shot: no
//! acknowledgment tracking, no retry; callers log failures and move on.

use async_trait::async_trait;
use serde_json::Value;

/// One-way publisher to a named topic.
#[async_trait]
pub trait Producer: Send + Sync {
    async fn produce(&self, topic: &str, message: &Value) -> anyhow::Result<()>;
}

/// Producer backed by a Kafka REST proxy.
pub struct RestProducer {
    base_url: String,
    client: reqwest::Client,
}

impl RestProducer {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Producer for RestProducer {
    async fn produce(&self, topic: &str, message: &Value) -> anyhow::Result<()> {
        let url = format!("{}/topics/{}", self.base_url, topic);
        let body = serde_json::json!({ "records": [ { "value": message } ] });

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/vnd.kafka.json.v2+json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Publish to topic '{}' failed ({}): {}", topic, status, text);
        }

        tracing::debug!(topic, "Published agent result");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let producer = RestProducer::new("http://localhost:8082/".to_string());
        assert_eq!(producer.base_url, "http://localhost:8082");
    }
}

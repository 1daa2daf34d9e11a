//! One pipeline run: reasoning, extraction, publish.

use serde_json::json;

use super::{extract_json, Agent};
use crate::sink::Producer;

/// Drive one work item through an agent and publish the extracted result.
///
/// A reply with no JSON-looking span ends the run without publishing and
/// without error. Model and publish failures propagate to the caller, which
/// is expected to log and drop them.
pub async fn run_pipeline(
    agent: &Agent,
    producer: &dyn Producer,
    topic: &str,
    instructions: String,
) -> anyhow::Result<()> {
    let reply = agent.run(&instructions).await?;

    let Some(context) = extract_json(&reply) else {
        tracing::info!(
            agent = agent.name(),
            "No JSON object in the agent reply; nothing published"
        );
        return Ok(());
    };

    tracing::info!(agent = agent.name(), "Response from agent: {}", context);

    producer.produce(topic, &json!({ "context": context })).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, ChatResponse, ContentBlock, LlmClient, LlmError, ToolSchema};
    use crate::tools::ToolRegistry;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    struct FixedLlm {
        reply: String,
    }

    #[async_trait]
    impl LlmClient for FixedLlm {
        async fn chat(
            &self,
            _model: &str,
            _system: Option<&str>,
            _messages: &[ChatMessage],
            _tools: &[ToolSchema],
        ) -> Result<ChatResponse, LlmError> {
            Ok(ChatResponse {
                content: vec![ContentBlock::Text {
                    text: self.reply.clone(),
                }],
                stop_reason: Some("end_turn".to_string()),
            })
        }
    }

    #[derive(Default)]
    struct CapturingProducer {
        messages: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl Producer for CapturingProducer {
        async fn produce(&self, topic: &str, message: &Value) -> anyhow::Result<()> {
            self.messages
                .lock()
                .unwrap()
                .push((topic.to_string(), message.clone()));
            Ok(())
        }
    }

    fn agent_replying(reply: &str) -> Agent {
        Agent::new(
            "Test Agent",
            Arc::new(FixedLlm {
                reply: reply.to_string(),
            }),
            ToolRegistry::new(),
            "You are a test agent.",
            "test-model",
            5,
        )
    }

    #[tokio::test]
    async fn publishes_extracted_json_verbatim() {
        let agent = agent_replying("Report follows: {\"guest_id\": \"123456\"} done.");
        let producer = CapturingProducer::default();

        run_pipeline(&agent, &producer, "agent-messages", "go".to_string())
            .await
            .unwrap();

        let messages = producer.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "agent-messages");
        assert_eq!(messages[0].1["context"], "{\"guest_id\": \"123456\"}");
    }

    #[tokio::test]
    async fn no_json_in_reply_publishes_nothing() {
        let agent = agent_replying("Sorry, I cannot help with that.");
        let producer = CapturingProducer::default();

        run_pipeline(&agent, &producer, "agent-messages", "go".to_string())
            .await
            .unwrap();

        assert!(producer.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn two_objects_publish_the_documented_overwide_span() {
        let agent = agent_replying(r#"{"a":1} {"b":2}"#);
        let producer = CapturingProducer::default();

        run_pipeline(&agent, &producer, "agent-messages", "go".to_string())
            .await
            .unwrap();

        let messages = producer.messages.lock().unwrap();
        assert_eq!(messages[0].1["context"], r#"{"a":1} {"b":2}"#);
    }

    #[tokio::test]
    async fn publish_failure_propagates() {
        struct FailingProducer;

        #[async_trait]
        impl Producer for FailingProducer {
            async fn produce(&self, _topic: &str, _message: &Value) -> anyhow::Result<()> {
                Err(anyhow::anyhow!("broker unreachable"))
            }
        }

        let agent = agent_replying("{\"ok\": true}");
        let err = run_pipeline(&agent, &FailingProducer, "agent-messages", "go".to_string())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("broker unreachable"));
    }
}

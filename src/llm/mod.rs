//! LLM client abstraction.
//!
//! Conversations are modeled on the Anthropic Messages API: each message is a
//! role plus a list of content blocks, and tool calls travel as `tool_use` /
//! `tool_result` blocks rather than a separate channel. The [`LlmClient`]
//! trait is the seam the agent loop and the data tools share; production code
//! uses [`AnthropicClient`], tests substitute scripted mocks.

mod anthropic;

pub use anthropic::AnthropicClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Request(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    Serialization(String),

    #[error("Model returned no content")]
    EmptyResponse,
}

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One content block of a conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text.
    Text { text: String },
    /// The model requests a tool invocation.
    ToolUse { id: String, name: String, input: Value },
    /// A tool invocation result fed back to the model.
    ToolResult { tool_use_id: String, content: String },
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl ChatMessage {
    /// A user message holding a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// An assistant message carrying the model's reply blocks verbatim.
    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }

    /// A user message carrying tool results back to the model.
    pub fn tool_results(results: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: results,
        }
    }
}

/// Declaration of a callable tool, as sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's arguments.
    pub input_schema: Value,
}

/// The model's reply to one request.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
}

impl ChatResponse {
    /// Concatenated text blocks of the reply.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether the model stopped to request tool invocations.
    pub fn wants_tools(&self) -> bool {
        self.content
            .iter()
            .any(|block| matches!(block, ContentBlock::ToolUse { .. }))
    }
}

/// A hosted reasoning model.
///
/// Two operations: a tool-capable conversation turn (used by the agent loop)
/// and a bare single-turn completion (used by the data tools). Implementations
/// are immutable after construction and shared across runs via `Arc`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One reasoning turn over the conversation so far.
    async fn chat(
        &self,
        model: &str,
        system: Option<&str>,
        messages: &[ChatMessage],
        tools: &[ToolSchema],
    ) -> Result<ChatResponse, LlmError>;

    /// Single-turn completion: one user message, no system prompt, no tools.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let messages = vec![ChatMessage::user(prompt)];
        let response = self.chat(model, None, &messages, &[]).await?;
        let text = response.text();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}

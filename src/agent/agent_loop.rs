//! Core reasoning loop implementation.

use std::sync::Arc;

use crate::llm::{ChatMessage, ContentBlock, LlmClient};
use crate::tools::ToolRegistry;

/// A fixed (system prompt, tool set, model) triple driving one reasoning run
/// per work item. Immutable after construction; shared by all concurrent runs.
pub struct Agent {
    name: String,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    system_prompt: String,
    model: String,
    max_tool_turns: usize,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        llm: Arc<dyn LlmClient>,
        tools: ToolRegistry,
        system_prompt: impl Into<String>,
        model: impl Into<String>,
        max_tool_turns: usize,
    ) -> Self {
        Self {
            name: name.into(),
            llm,
            tools,
            system_prompt: system_prompt.into(),
            model: model.into(),
            max_tool_turns,
        }
    }

    /// Display name, e.g. "Customer Insights Agent".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the instructions to completion and return the final reply text.
    ///
    /// The model may invoke the agent's tools across multiple turns; each
    /// invocation is synchronous request/response with no timeout or retry. A
    /// tool failure is reported back to the model as an `Error:` result
    /// rather than aborting the run.
    pub async fn run(&self, instructions: &str) -> anyhow::Result<String> {
        let mut messages = vec![ChatMessage::user(instructions)];
        let tool_schemas = self.tools.get_tool_schemas();

        for turn in 0..self.max_tool_turns {
            tracing::debug!(agent = %self.name, turn = turn + 1, "Reasoning turn");

            let response = self
                .llm
                .chat(&self.model, Some(&self.system_prompt), &messages, &tool_schemas)
                .await?;

            if response.wants_tools() {
                let mut results = Vec::new();
                for block in &response.content {
                    let ContentBlock::ToolUse { id, name, input } = block else {
                        continue;
                    };

                    tracing::debug!(agent = %self.name, tool = %name, "Calling tool");

                    let content = match self.tools.execute(name, input.clone()).await {
                        Ok(output) => output,
                        Err(e) => format!("Error: {}", e),
                    };

                    results.push(ContentBlock::ToolResult {
                        tool_use_id: id.clone(),
                        content,
                    });
                }

                messages.push(ChatMessage::assistant(response.content.clone()));
                messages.push(ChatMessage::tool_results(results));
                continue;
            }

            // No tool calls - this is the final reply
            let text = response.text();
            if text.is_empty() {
                return Err(anyhow::anyhow!("Model returned empty reply"));
            }
            return Ok(text);
        }

        Err(anyhow::anyhow!(
            "Tool turn limit ({}) reached without a final reply",
            self.max_tool_turns
        ))
    }
}

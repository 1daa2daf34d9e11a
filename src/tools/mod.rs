//! Tool capabilities the reasoning model may invoke mid-run.
//!
//! Each tool fabricates plausible demonstration data for a fixed JSON shape
//! by running its own single-turn model call. Content varies run to run; the
//! shape is pinned by the literal example embedded in the tool's prompt. Tool
//! output is returned to the agent loop as raw text, unvalidated.

mod customer;
mod hotel;

pub use customer::{AmenitiesAndRequests, RoomPreferences, TravelHistory};
pub use hotel::{AvailableOffers, HotelAmenities, HotelReviews};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolSchema;

/// A capability the model may call during a reasoning run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name, as exposed to the model.
    fn name(&self) -> &str;

    /// Human-readable description, as exposed to the model.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the model-supplied arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// The set of tools available to one agent.
///
/// Immutable after construction; shared read-only by all concurrent runs.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Add a tool to the registry (builder style).
    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.insert(tool.name().to_string(), tool);
        self
    }

    /// Tool declarations in the wire format the model expects.
    pub fn get_tool_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters_schema(),
            })
            .collect();
        // Deterministic declaration order regardless of map iteration
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(args).await,
            None => Err(anyhow::anyhow!("Unknown tool: {}", name)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Pull a required string argument out of a tool-call payload.
pub(crate) fn str_arg<'a>(args: &'a Value, key: &str) -> anyhow::Result<&'a str> {
    args[key]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' argument", key))
}

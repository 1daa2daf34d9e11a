//! Agent module - the prompt-orchestration pipeline core.
//!
//! Each agent follows a "tools in a loop" pattern:
//! 1. Send the rendered instructions with the agent's system prompt and tools
//! 2. If the model requests tool calls, execute them and feed results back
//! 3. Repeat until the model produces a final text reply
//! 4. Extract the first JSON-looking span from that reply and publish it

mod agent_loop;
mod extract;
mod pipeline;

pub use agent_loop::Agent;
pub use extract::extract_json;
pub use pipeline::run_pipeline;

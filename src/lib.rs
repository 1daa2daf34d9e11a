//! # River Agents
//!
//! A small HTTP service exposing three LLM-driven marketing agents for
//! River Hotels: customer insights, hotel insights, and content creation.
//!
//! This library provides:
//! - An HTTP API that accepts batches of work items per agent
//! - A tool-based reasoning loop over the Anthropic Messages API
//! - JSON extraction from the model's final reply and publication of the
//!   result to a downstream messaging topic
//!
//! ## Architecture
//!
//! Every endpoint follows the same pipeline:
//! 1. Receive a batch of `{ "context": ... }` items via POST
//! 2. For each item, spawn a detached task that renders the agent's
//!    instruction prompt around the raw context
//! 3. Run the prompt through the reasoning loop; the model may call the
//!    agent's tools mid-run
//! 4. Regex-extract the first JSON-looking span from the final reply and
//!    publish it to the output topic
//!
//! The POST handler acknowledges immediately; task outcomes are logged,
//! never reported back to the caller.

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod sink;
pub mod tools;

pub use config::Config;

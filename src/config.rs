//! Configuration management for River Agents.
//!
//! Configuration can be set via environment variables:
//! - `ANTHROPIC_API_KEY` - Required. Your Anthropic API key.
//! - `AGENT_MODEL` - Optional. The model used by agents and tools. Defaults to `claude-3-5-haiku-20241022`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `KAFKA_REST_URL` - Required. Base URL of the Kafka REST proxy the results are published through.
//! - `AGENT_OUTPUT_TOPIC` - Optional. Topic agent results are published to. Defaults to `agent-messages`.
//! - `MAX_TOOL_TURNS` - Optional. Maximum reasoning-loop turns per run. Defaults to `10`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Anthropic API key
    pub api_key: String,

    /// Model identifier used by all agents and tools
    pub model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Kafka REST proxy base URL
    pub kafka_rest_url: String,

    /// Topic agent results are published to
    pub output_topic: String,

    /// Maximum reasoning-loop turns before a run is abandoned
    pub max_tool_turns: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `ANTHROPIC_API_KEY` or
    /// `KAFKA_REST_URL` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()))?;

        let model = std::env::var("AGENT_MODEL")
            .unwrap_or_else(|_| "claude-3-5-haiku-20241022".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let kafka_rest_url = std::env::var("KAFKA_REST_URL")
            .map_err(|_| ConfigError::MissingEnvVar("KAFKA_REST_URL".to_string()))?;

        let output_topic = std::env::var("AGENT_OUTPUT_TOPIC")
            .unwrap_or_else(|_| "agent-messages".to_string());

        let max_tool_turns = std::env::var("MAX_TOOL_TURNS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_TOOL_TURNS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            api_key,
            model,
            host,
            port,
            kafka_rest_url,
            output_topic,
            max_tool_turns,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, model: String, kafka_rest_url: String) -> Self {
        Self {
            api_key,
            model,
            host: "127.0.0.1".to_string(),
            port: 3000,
            kafka_rest_url,
            output_topic: "agent-messages".to_string(),
            max_tool_turns: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so all scenarios run in one
    // sequential test.
    #[test]
    fn from_env_reads_required_and_defaulted_values() {
        std::env::set_var("ANTHROPIC_API_KEY", "sk-test");
        std::env::set_var("KAFKA_REST_URL", "http://localhost:8082");
        std::env::remove_var("AGENT_MODEL");
        std::env::remove_var("PORT");
        std::env::remove_var("AGENT_OUTPUT_TOPIC");
        std::env::remove_var("MAX_TOOL_TURNS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "claude-3-5-haiku-20241022");
        assert_eq!(config.port, 3000);
        assert_eq!(config.output_topic, "agent-messages");
        assert_eq!(config.max_tool_turns, 10);

        std::env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "PORT"));
        std::env::remove_var("PORT");

        std::env::set_var("MAX_TOOL_TURNS", "-3");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "MAX_TOOL_TURNS"));
        std::env::remove_var("MAX_TOOL_TURNS");

        std::env::remove_var("KAFKA_REST_URL");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref name) if name == "KAFKA_REST_URL"));

        std::env::remove_var("ANTHROPIC_API_KEY");
    }
}

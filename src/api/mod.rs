//! HTTP API: application state, router assembly, and serving.

pub mod content_creation;
pub mod customer_insights;
pub mod hotel_insights;
pub mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::agent::{run_pipeline, Agent};
use crate::config::Config;
use crate::llm::{AnthropicClient, LlmClient};
use crate::sink::{Producer, RestProducer};

/// Shared application state. Everything here is immutable after startup and
/// safely shared by all concurrently running pipelines.
pub struct AppState {
    pub config: Config,
    pub producer: Arc<dyn Producer>,
    pub customer_insights: Arc<Agent>,
    pub hotel_insights: Arc<Agent>,
    pub content_creation: Arc<Agent>,
}

impl AppState {
    /// Wire the three agents against the given collaborators.
    pub fn new(config: Config, llm: Arc<dyn LlmClient>, producer: Arc<dyn Producer>) -> Self {
        let customer_insights = Arc::new(customer_insights::build_agent(&config, llm.clone()));
        let hotel_insights = Arc::new(hotel_insights::build_agent(&config, llm.clone()));
        let content_creation = Arc::new(content_creation::build_agent(&config, llm));

        Self {
            config,
            producer,
            customer_insights,
            hotel_insights,
            content_creation,
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/api/customer-insights-agent",
            get(customer_insights::liveness).post(customer_insights::start),
        )
        .route(
            "/api/hotel-insights-agent",
            get(hotel_insights::liveness).post(hotel_insights::start),
        )
        .route(
            "/api/content-creation-agent",
            get(content_creation::liveness).post(content_creation::start),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the API!" }))
}

/// Run the HTTP server until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let llm: Arc<dyn LlmClient> = Arc::new(AnthropicClient::new(config.api_key.clone()));
    let producer: Arc<dyn Producer> = Arc::new(RestProducer::new(config.kafka_rest_url.clone()));

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config, llm, producer));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Spawn one detached pipeline run; the HTTP acknowledgment never waits on it.
///
/// A failed run is logged and dropped. There is no retry, no dead-letter path,
/// and no caller notification.
pub(crate) fn spawn_run(state: Arc<AppState>, agent: Arc<Agent>, instructions: String) {
    let run_id = Uuid::new_v4();
    tokio::spawn(async move {
        if let Err(e) = run_pipeline(
            &agent,
            state.producer.as_ref(),
            &state.config.output_topic,
            instructions,
        )
        .await
        {
            tracing::warn!(run_id = %run_id, agent = agent.name(), "Agent run failed: {:#}", e);
        }
    });
}

//! Content Creation Agent
//!
//! API Endpoint:
//! - `POST /api/content-creation-agent`: turns a combined research report
//!   into a personalized booking email.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use super::types::{render_context, WorkItem};
use super::{spawn_run, AppState};
use crate::agent::Agent;
use crate::config::Config;
use crate::llm::LlmClient;
use crate::tools::{AvailableOffers, ToolRegistry};

const AGENT_NAME: &str = "Content Creation Agent";

const SYSTEM_PROMPT: &str = r#"You're a Content Creation Specialist at River Hotels, a global hospitality brand
operating in over 40 countries. River Hotels is dedicated to crafting exceptional
guest experiences through smart marketing and real-time personalization.

Your role is to take the combined Customer and Hotel Research Report and generate a
compelling, personalized email designed to encourage the guest to book their next stay.
This email should be engaging, tailored, and action-driven, highlighting why the guest
should choose this specific River Hotels location based on their preferences and past stays."#;

/// Assemble the agent with its offers tool.
pub fn build_agent(config: &Config, llm: Arc<dyn LlmClient>) -> Agent {
    let tools = ToolRegistry::new().register(Arc::new(AvailableOffers::new(
        llm.clone(),
        config.model.clone(),
    )));

    Agent::new(
        AGENT_NAME,
        llm,
        tools,
        SYSTEM_PROMPT,
        config.model.clone(),
        config.max_tool_turns,
    )
}

fn example_output() -> Value {
    json!({
        "to": "Lead's Email Address",
        "subject": "Example Subject Line",
        "body": "Example Email Body"
    })
}

/// Render the single-turn instruction string around the raw caller context.
pub fn build_instructions(context: &Value) -> String {
    format!(
        r#"Using the combined Customer and Hotel Research Report, craft a personalized, engaging email
that encourages the guest to book their next stay at River Hotels. This email should highlight
how the hotel aligns with their preferences and showcase special offers or incentives to
drive conversion.

Key Responsibilities:
- Personalize the email using insights from the guest's past stays, preferred room types, and amenities usage.
- Highlight relevant hotel features that match the guest's preferences, such as room upgrades, exclusive services, or special experiences.
- Leverage available offers to create urgency and excitement around the booking opportunity.
- Ensure a warm and inviting tone that makes the guest feel valued and recognized.
- Include a strong call-to-action (CTA) that encourages immediate booking, making the process seamless.

Use dedicated tools to enhance personalization and optimize engagement:
- Get Available Offers - Retrieves current promotions, room upgrades, and special perks at the selected hotel.

Ensure a clear and actionable CTA, encouraging the lead to engage without high friction.

Input Data:
  {context}

Expected Output - Personalized Booking Email:
The email should be concise, compelling, and conversion-focused, containing:

- Personalized Greeting - Address the guest warmly by name.
- Tailored Introduction - Reference their past stays and highlight why this hotel is a great fit.
- Highlighted Perks - Showcase relevant room types, amenities, and special services based on the guest's preferences.
- Exclusive Offer or Incentive - Mention an available promotion or loyalty benefit.
- Strong Call-to-Action (CTA) - Encourage immediate booking with a clear next step (e.g., "Reserve Now" button).

This email will help River Hotels increase direct bookings, enhance guest engagement, and foster long-term loyalty.

Output Format
- The output must be strictly formatted as JSON, with no additional text, commentary, or explanation.
- The JSON should exactly match the following structure:
   {example}

Failure to strictly follow this format will result in incorrect output."#,
        context = render_context(context),
        example = example_output()
    )
}

/// Liveness acknowledgment; no body processing.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Accept a batch of work items and schedule one detached run per item.
pub async fn start(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<WorkItem>>,
) -> (StatusCode, &'static str) {
    for item in items {
        info!(agent = AGENT_NAME, "Here is the context: {}", render_context(&item.context));

        let instructions = build_instructions(&item.context);
        spawn_run(state.clone(), state.content_creation.clone(), instructions);
    }

    (StatusCode::OK, "Content Creation Agent Started")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_embed_context_and_email_shape() {
        let context = json!({"customer_research_report": {}, "hotel_id": "RH-TOKYO-001"});
        let instructions = build_instructions(&context);
        assert!(instructions.contains(r#""hotel_id":"RH-TOKYO-001""#));
        assert!(instructions.contains("Example Subject Line"));
        assert!(instructions.contains("Personalized Booking Email"));
    }

    #[test]
    fn example_output_is_the_three_field_email_shape() {
        let example = example_output();
        assert!(example.get("to").is_some());
        assert!(example.get("subject").is_some());
        assert!(example.get("body").is_some());
    }
}

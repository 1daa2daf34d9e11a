//! Customer Insights Agent
//!
//! API Endpoint:
//! - `POST /api/customer-insights-agent`: processes guest profile data and
//!   triggers research runs.

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
use crate::tools::{AmenitiesAndRequests, RoomPreferences, ToolRegistry, TravelHistory};

const AGENT_NAME: &str = "Customer Insights Agent";

// This describes the role of the agent
const SYSTEM_PROMPT: &str = r#"You're a Customer Insights Specialist at River Hotels, a global hospitality brand operating
in over 40 countries. River Hotels is dedicated to crafting exceptional guest experiences
through smart marketing and real-time personalization.

Your role is to analyze guest data and create Customer Research Reports that summarize
individual hotel preferences based on past stays, booking behaviors, and engagement with
River Hotels. Your insights will help marketing teams deliver tailored offers, personalized
promotions, and relevant recommendations to guests in real time, enhancing loyalty and
driving direct bookings.

Focus on identifying patterns in travel history, preferred locations, amenities used, and
special requests to build a comprehensive customer profile. Your analysis will empower River Hotels
to engage each guest with the right message, at the right time, in the right place."#;

/// Assemble the agent with its guest-profile tool set.
pub fn build_agent(config: &Config, llm: Arc<dyn LlmClient>) -> Agent {
    let tools = ToolRegistry::new()
        .register(Arc::new(TravelHistory::new(llm.clone(), config.model.clone())))
        .register(Arc::new(RoomPreferences::new(llm.clone(), config.model.clone())))
        .register(Arc::new(AmenitiesAndRequests::new(
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
        "guest_id": "123456",
        "customer_research_report": {
            "travel_patterns": {
                "frequent_destinations": ["Tokyo, Japan", "Miami, USA", "Zermatt, Switzerland"],
                "trip_frequency_per_year": 3,
                "average_length_of_stay": "5 nights"
            },
            "room_preferences": {
                "preferred_bedding": "One King Bed",
                "preferred_number_of_guests": 2,
                "preferred_view": "Sea View"
            },
            "amenities_and_special_requests": {
                "frequently_used_amenities": ["Spa", "Gym", "Executive Lounge"],
                "common_special_requests": ["Late check-out", "Extra pillows"],
                "unique_guest_needs": ["Allergy-friendly bedding"]
            },
            "engagement_insights": {
                "loyalty_program_participation": "true",
                "tier_level": "Gold",
                "past_offer_redemptions": [
                    {
                        "offer_title": "Complimentary Room Upgrade",
                        "redemption_date": "2023-08-05"
                    },
                    {
                        "offer_title": "20% Off Spa Services",
                        "redemption_date": "2022-12-22"
                    }
                ],
                "responsiveness_to_promotions": {
                    "opened_emails_percentage": "75",
                    "clicked_booking_links_percentage": "50"
                }
            },
            "personalized_offer_recommendations": [
                {
                    "offer_title": "Luxury Suite Upgrade for Your Next Stay",
                    "offer_description": "Enjoy a complimentary upgrade to a luxury suite when booking 3+ nights.",
                    "reason_for_recommendation": "Guest frequently redeems room upgrade offers and prefers premium accommodations."
                },
                {
                    "offer_title": "Exclusive Spa Package",
                    "offer_description": "Receive a free 30-minute massage with any spa booking.",
                    "reason_for_recommendation": "Guest frequently uses spa services and previously redeemed a spa discount."
                }
            ]
        }
    })
}

/// Render the single-turn instruction string around the raw caller context.
pub fn build_instructions(context: &Value) -> String {
    format!(
        r#"Using the guest's historical data, generate a Customer Research Report that summarizes their hotel preferences
and booking behavior. This report will help River Hotels craft personalized marketing campaigns and real-time
offers that align with the guest's preferences.

Key Responsibilities:
- Analyze past stays to identify patterns in the guest's travel habits, preferred locations, and frequency of visits.
- Determine room preferences, including bed configuration, number of guests, and preferred room view (e.g., seaside vs. garden side).
- Identify amenities usage, such as spa visits, gym access, dining choices, and any special requests made during past stays.
- Assess engagement history, noting whether the guest has participated in loyalty programs, redeemed offers, or interacted with River Hotels' promotions.
- Provide actionable insights to inform tailored marketing messages, ensuring offers are relevant and timely.

Use dedicated tools to enhance personalization and optimize engagement:
- Hotel History - Extracts relevant customer hotel history based on prior stays.
- Room Preferences - Retrieves the guest's preferred bed setup, number of guests, and preferred view.
- Amenities and Asks - Checks which amenities the guest has used previously and whether they've had special requests.

Ensure a clear and actionable CTA, encouraging the lead to engage without high friction.

Guest Profile Data:
  {context}

Expected Output - Customer Research Report:
The report should be concise and actionable, containing:

- Travel Patterns - Frequent destinations, trip frequency, and length of stays.
- Room Preferences - Bedding configuration, number of guests, view preferences.
- Amenities & Special Requests - Services used, common requests, and any unique guest needs.
- Engagement Insights - Loyalty program participation, past offer redemptions, and responsiveness to promotions.
- Personalized Offer Recommendations - Suggestions for future promotions, upgrades, or exclusive perks based on past behavior.

This report will enable River Hotels to deliver personalized, data-driven guest experiences that foster loyalty and maximize direct bookings.

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
        spawn_run(state.clone(), state.customer_insights.clone(), instructions);
    }

    (StatusCode::OK, "Customer Insights Agent Started")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_embed_context_verbatim() {
        let context = json!({"guest_email": "guest@example.com", "segment": "loyalty"});
        let instructions = build_instructions(&context);
        assert!(instructions.contains(r#""guest_email":"guest@example.com""#));
        assert!(instructions.contains("Customer Research Report"));
    }

    #[test]
    fn instructions_embed_the_example_structure() {
        let instructions = build_instructions(&Value::String("x".to_string()));
        assert!(instructions.contains("personalized_offer_recommendations"));
        assert!(instructions.contains("must be strictly formatted as JSON"));
    }

    #[test]
    fn empty_context_still_renders_a_complete_prompt() {
        let instructions = build_instructions(&Value::Null);
        assert!(instructions.contains("Guest Profile Data:"));
        assert!(instructions.contains("Failure to strictly follow this format"));
    }
}

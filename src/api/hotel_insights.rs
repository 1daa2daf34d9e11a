//! Hotel Insights Agent
//!
//! API Endpoint:
//! - `POST /api/hotel-insights-agent`: matches a guest's research report
//!   against the hotel's offerings.

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
use crate::tools::{HotelAmenities, HotelReviews, ToolRegistry};

const AGENT_NAME: &str = "Hotel Insights Agent";

// This describes the role of the agent
const SYSTEM_PROMPT: &str = r#"You're a Hotel Insights Specialist at River Hotels, a global hospitality brand operating
in over 40 countries. River Hotels is dedicated to delivering exceptional guest experiences
through smart marketing and real-time personalization.

Your role is to analyze the current hotel's offerings in relation to a guest's Customer
Research Report and generate a Hotel Research Report. This report will highlight how the
hotel's amenities, services, and experiences align with the guest's preferences, ensuring
tailored recommendations and a personalized stay."#;

/// Assemble the agent with its hotel-data tool set.
pub fn build_agent(config: &Config, llm: Arc<dyn LlmClient>) -> Agent {
    let tools = ToolRegistry::new()
        .register(Arc::new(HotelReviews::new(llm.clone(), config.model.clone())))
        .register(Arc::new(HotelAmenities::new(llm.clone(), config.model.clone())));

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
        "hotel_id": "RH-TOKYO-001",
        "hotel_name": "River Grand Tokyo",
        "location": "Tokyo, Japan",
        "hotel_and_guest_research_report": {
            "guest_preference_alignment": {
                "room_match_score": "90",
                "amenities_match_score": "85",
                "overall_alignment": "Strong match with the guest's past stay preferences."
            },
            "room_and_view_recommendation": {
                "recommended_room_type": "Executive Suite",
                "reason_for_recommendation": "Guest prefers King Bed and City View, and frequently stays in premium rooms.",
                "available_views": ["City View"],
                "bed_configuration": "One King Bed"
            },
            "amenities_and_services_match": {
                "matching_amenities": ["Spa", "Executive Lounge", "Gym"],
                "unavailable_amenities": ["Private Beach Access"],
                "recommended_alternatives": ["Rooftop Infinity Pool instead of Private Beach Access"]
            },
            "guest_experience_insights": {
                "potential_gaps": [
                    {
                        "issue": "Preferred amenity (Private Beach Access) is not available.",
                        "suggestion": "Offer complimentary spa treatment or priority poolside cabana reservation."
                    }
                ],
                "guest_sentiment_analysis": {
                    "recent_reviews_match_guest_preferences": "true",
                    "notable_review_highlights": [
                        "Guests love the service in the Executive Lounge.",
                        "High ratings for cleanliness and staff hospitality."
                    ],
                    "areas_for_improvement": [
                        "Some guests found room service to be slow during peak hours."
                    ]
                }
            },
            "personalized_stay_enhancements": [
                {
                    "enhancement": "Complimentary Room Upgrade",
                    "details": "Upgrade to a Suite with Lounge Access as a loyalty perk.",
                    "justification": "Guest has redeemed room upgrades in the past and prefers premium accommodations."
                },
                {
                    "enhancement": "Exclusive Spa Package",
                    "details": "Offer 20% off on spa services during the stay.",
                    "justification": "Guest frequently uses spa services and enjoys wellness amenities."
                }
            ]
        }
    })
}

/// Render the single-turn instruction string around the raw caller context.
pub fn build_instructions(context: &Value) -> String {
    format!(
        r#"Using the guest's Customer Research Report, generate a Hotel Research Report that evaluates how the current
hotel's offerings align with the guest's preferences and booking behavior. This report will help River Hotels
deliver personalized recommendations, room assignments, and service enhancements tailored to the guest's expectations.

Key Responsibilities:
- Analyze the guest's preferences based on their Customer Research Report, including travel patterns, room choices, and amenity usage.
- Evaluate the current hotel's offerings, identifying relevant room types, available services, and exclusive experiences.
- Compare hotel reviews to past guest preferences, ensuring the stay aligns with expectations.
- Highlight personalized recommendations, such as room upgrades, service add-ons, or special offers that enhance the guest experience.
- Identify potential gaps, such as unavailable preferred amenities, and suggest alternatives to maintain high satisfaction.

Use dedicated tools to enhance personalization and optimize engagement:
- Hotel Reviews - Analyzes feedback from past guests to assess strengths, weaknesses, and areas for improvement.
- Hotel Amenities - Retrieves information on available room types, dining options, spa services, fitness facilities, and other key offerings.

Ensure a clear and actionable CTA, encouraging the lead to engage without high friction.

Customer Research Report:
  {context}

Expected Output - Hotel Research Report:
The report should be concise, actionable, and aligned with the guest's needs, containing:

- Guest Preference Alignment - How well the current hotel matches the guest's past stay preferences.
- Room & View Recommendation - Best available options based on past room type, view, and bed configuration choices.
- Amenities & Services Match - Available hotel amenities that align with the guest's usage history.
- Guest Experience Insights - Any potential experience gaps and recommendations to improve satisfaction.
- Personalized Stay Enhancements - Suggested perks, promotions, or personalized touches to maximize guest comfort and loyalty.

This report will enable River Hotels to deliver a seamless, customized guest experience, increasing satisfaction and
direct bookings while reinforcing brand loyalty.

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
        spawn_run(state.clone(), state.hotel_insights.clone(), instructions);
    }

    (StatusCode::OK, "Hotel Insights Agent Started")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_embed_context_and_example() {
        let context = Value::String("guest prefers sea view".to_string());
        let instructions = build_instructions(&context);
        assert!(instructions.contains("guest prefers sea view"));
        assert!(instructions.contains("hotel_and_guest_research_report"));
        assert!(instructions.contains("Hotel Research Report"));
    }

    #[test]
    fn string_context_is_not_json_quoted() {
        let context = Value::String("plain text report".to_string());
        let instructions = build_instructions(&context);
        assert!(instructions.contains("\n  plain text report\n"));
        assert!(!instructions.contains("\"plain text report\""));
    }
}

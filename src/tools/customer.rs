//! Guest-profile data tools: travel history, room preferences, amenities.
//!
//! All three are keyed by the customer email and synthesize demonstration
//! data through an inner single-turn model call.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use super::{str_arg, Tool};
use crate::llm::LlmClient;

fn customer_email_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "customer_email": {
                "type": "string",
                "description": "The guest's email address"
            }
        },
        "required": ["customer_email"]
    })
}

/// Gets the customer travel history with the hotel chain.
pub struct TravelHistory {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl TravelHistory {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Tool for TravelHistory {
    fn name(&self) -> &str {
        "get_travel_history"
    }

    fn description(&self) -> &str {
        "Gets the customer travel history with the hotel chain."
    }

    fn parameters_schema(&self) -> Value {
        customer_email_schema()
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let customer_email = str_arg(&args, "customer_email")?;

        info!("Finds relevant hotel history {}", customer_email);

        let example_output = json!({
            "guest_email": "email@email.com",
            "travel_history": [
                {
                    "hotel_name": "River Grand Tokyo",
                    "location": "Tokyo, Japan",
                    "check_in": "2024-02-10",
                    "check_out": "2024-02-15",
                    "number_of_guests": 1,
                    "stay_purpose": "Business"
                },
                {
                    "hotel_name": "River Beach Resort",
                    "location": "Miami, USA",
                    "check_in": "2023-08-05",
                    "check_out": "2023-08-12",
                    "number_of_guests": 2,
                    "stay_purpose": "Vacation"
                },
                {
                    "hotel_name": "River Alpine Lodge",
                    "location": "Zermatt, Switzerland",
                    "check_in": "2022-12-20",
                    "check_out": "2022-12-27",
                    "number_of_guests": 4,
                    "stay_purpose": "Holiday"
                }
            ]
        });

        let prompt = format!(
            r#"Take the customer email and generate believable but fake hotel history with
River Hotels, a global hospitality brand operating in over 40 countries.

Customer
{customer_email}

The fake output should look like this:
{example_output}

Only include the fake output. No additional description is needed."#
        );

        let data = self.llm.complete(&self.model, &prompt).await?;
        Ok(data)
    }
}

/// Gets the customer hotel room preferences.
pub struct RoomPreferences {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl RoomPreferences {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Tool for RoomPreferences {
    fn name(&self) -> &str {
        "get_room_preferences"
    }

    fn description(&self) -> &str {
        "Gets the customer hotel room preferences."
    }

    fn parameters_schema(&self) -> Value {
        customer_email_schema()
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let customer_email = str_arg(&args, "customer_email")?;

        info!("Finds relevant hotel room preferences {}", customer_email);

        let example_output = json!({
            "guest_email": "email@email.com",
            "room_preferences": [
                {
                    "room_type": "Deluxe King",
                    "view_preference": "City View",
                    "bed_configuration": "One King Bed"
                },
                {
                    "room_type": "Oceanfront Suite",
                    "view_preference": "Sea View",
                    "bed_configuration": "Two Queen Beds"
                },
                {
                    "room_type": "Luxury Chalet",
                    "view_preference": "Mountain View",
                    "bed_configuration": "One King Bed with Sofa Bed"
                }
            ]
        });

        let prompt = format!(
            r#"Take the customer email and generate believable but fake hotel room preferences for
the guest's three most popular choices for River Hotels, a global hospitality brand
operating in over 40 countries.

Customer
{customer_email}

The fake output should look like this:
{example_output}

Only include the fake output. No additional description is needed."#
        );

        let data = self.llm.complete(&self.model, &prompt).await?;
        Ok(data)
    }
}

/// Gets the amenities and guest requests.
pub struct AmenitiesAndRequests {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl AmenitiesAndRequests {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Tool for AmenitiesAndRequests {
    fn name(&self) -> &str {
        "get_amenities_and_requests"
    }

    fn description(&self) -> &str {
        "Gets the amenities the guest has used and their special requests."
    }

    fn parameters_schema(&self) -> Value {
        customer_email_schema()
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let customer_email = str_arg(&args, "customer_email")?;

        info!("Finds amenities and requests for the guest {}", customer_email);

        let example_output = json!({
            "guest_email": "email@email.com",
            "amenities_and_requests": [
                {
                    "amenity": "Spa",
                    "frequency": "Frequent"
                },
                {
                    "amenity": "Executive Lounge Access",
                    "frequency": "Occasional"
                },
                {
                    "amenity": "Gym",
                    "frequency": "Frequent"
                }
            ],
            "special_requests": [
                {
                    "request": "Late check-out",
                    "frequency": "Frequent"
                },
                {
                    "request": "Extra pillows",
                    "frequency": "Occasional"
                },
                {
                    "request": "Room near elevator",
                    "frequency": "Rare"
                }
            ]
        });

        let prompt = format!(
            r#"Take the customer email and generate believable but fake amenities and requests
for River Hotels, a global hospitality brand operating in over 40 countries.

Customer
{customer_email}

The fake output should look like this:
{example_output}

Only include the fake output. No additional description is needed."#
        );

        let data = self.llm.complete(&self.model, &prompt).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, ChatResponse, ContentBlock, LlmError, ToolSchema};
    use std::sync::Mutex;

    /// Records the prompt it was called with and replies with canned text.
    struct RecordingLlm {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingLlm {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmClient for RecordingLlm {
        async fn chat(
            &self,
            _model: &str,
            _system: Option<&str>,
            messages: &[ChatMessage],
            _tools: &[ToolSchema],
        ) -> Result<ChatResponse, LlmError> {
            let prompt = messages
                .iter()
                .flat_map(|m| m.content.iter())
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.clone()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n");
            self.prompts.lock().unwrap().push(prompt);
            Ok(ChatResponse {
                content: vec![ContentBlock::Text {
                    text: self.reply.clone(),
                }],
                stop_reason: Some("end_turn".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn travel_history_prompt_embeds_email_and_example_shape() {
        let llm = Arc::new(RecordingLlm::new("{\"travel_history\": []}"));
        let tool = TravelHistory::new(llm.clone(), "test-model".to_string());

        let result = tool
            .execute(json!({"customer_email": "guest@example.com"}))
            .await
            .unwrap();

        // Raw model output is passed through unvalidated
        assert_eq!(result, "{\"travel_history\": []}");

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("guest@example.com"));
        assert!(prompts[0].contains("River Grand Tokyo"));
        assert!(prompts[0].contains("Only include the fake output"));
    }

    #[tokio::test]
    async fn missing_email_argument_is_an_error() {
        let llm = Arc::new(RecordingLlm::new("unused"));
        let tool = RoomPreferences::new(llm, "test-model".to_string());

        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(err.to_string().contains("customer_email"));
    }

    #[tokio::test]
    async fn amenities_output_is_not_required_to_be_json() {
        let llm = Arc::new(RecordingLlm::new("not json at all"));
        let tool = AmenitiesAndRequests::new(llm, "test-model".to_string());

        let result = tool
            .execute(json!({"customer_email": "guest@example.com"}))
            .await
            .unwrap();
        assert_eq!(result, "not json at all");
    }
}

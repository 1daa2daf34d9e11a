//! Hotel data tools: reviews, amenities, offers.
//!
//! All three are keyed by the hotel identifier and synthesize demonstration
//! data through an inner single-turn model call.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use super::{str_arg, Tool};
use crate::llm::LlmClient;

fn hotel_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "hotel_id": {
                "type": "string",
                "description": "The hotel identifier, e.g. RH-TOKYO-001"
            }
        },
        "required": ["hotel_id"]
    })
}

/// Gets a summary of the hotel's reviews.
pub struct HotelReviews {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl HotelReviews {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Tool for HotelReviews {
    fn name(&self) -> &str {
        "get_hotel_reviews"
    }

    fn description(&self) -> &str {
        "Gets a summary of the hotel's reviews."
    }

    fn parameters_schema(&self) -> Value {
        hotel_id_schema()
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let hotel_id = str_arg(&args, "hotel_id")?;

        info!("Finds the hotel reviews {}", hotel_id);

        let example_output = json!({
            "hotel_id": "RH-TOKYO-001",
            "hotel_name": "River Grand Tokyo",
            "location": "Tokyo, Japan",
            "average_rating": 4.3,
            "total_reviews": 256,
            "reviews": [
                {
                    "review_id": "REV12345",
                    "reviewer_type": "Business",
                    "rating": 5,
                    "review_text": "Fantastic stay! The executive lounge was excellent, and the staff was very accommodating.",
                    "review_date": "2024-02-15",
                    "common_themes": ["Service", "Lounge", "Business-friendly"],
                    "sentiment": "Positive"
                },
                {
                    "review_id": "REV67890",
                    "reviewer_type": "Leisure",
                    "rating": 3,
                    "review_text": "Great location, but the room was smaller than expected. Breakfast options were limited.",
                    "review_date": "2024-01-10",
                    "common_themes": ["Location", "Room Size", "Dining"],
                    "sentiment": "Neutral"
                },
                {
                    "review_id": "REV54321",
                    "reviewer_type": "Leisure",
                    "rating": 2,
                    "review_text": "The check-in process was slow, and my request for an early check-in was not honored.",
                    "review_date": "2023-12-20",
                    "common_themes": ["Check-in", "Service"],
                    "sentiment": "Negative"
                }
            ]
        });

        let prompt = format!(
            r#"Take the hotel and generate believable but a fake summary of hotel reviews
for River Hotels, a global hospitality brand operating in over 40 countries.

Hotel:
{hotel_id}

The fake output should look like this:
{example_output}

Only include the fake output. No additional description is needed."#
        );

        let data = self.llm.complete(&self.model, &prompt).await?;
        Ok(data)
    }
}

/// Gets a list of the hotel amenities.
pub struct HotelAmenities {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl HotelAmenities {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Tool for HotelAmenities {
    fn name(&self) -> &str {
        "get_hotel_amenities"
    }

    fn description(&self) -> &str {
        "Gets a list of the hotel amenities."
    }

    fn parameters_schema(&self) -> Value {
        hotel_id_schema()
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let hotel_id = str_arg(&args, "hotel_id")?;

        info!("Finds hotel amenities {}", hotel_id);

        let example_output = json!({
            "hotel_id": "RH-TOKYO-001",
            "hotel_name": "River Grand Tokyo",
            "location": "Tokyo, Japan",
            "room_types": [
                {
                    "room_type": "Deluxe King",
                    "bed_configuration": "One King Bed",
                    "view_options": ["City View", "Garden View"],
                    "features": ["Smart TV", "Work Desk", "Mini Bar", "Rain Shower"]
                },
                {
                    "room_type": "Executive Suite",
                    "bed_configuration": "One King Bed",
                    "view_options": ["City View"],
                    "features": ["Private Lounge Access", "Large Work Desk", "In-Room Dining", "Spacious Living Area"]
                },
                {
                    "room_type": "Oceanfront Suite",
                    "bed_configuration": "Two Queen Beds",
                    "view_options": ["Sea View"],
                    "features": ["Private Balcony", "Luxury Bedding", "Whirlpool Tub", "Complimentary Breakfast"]
                }
            ],
            "amenities": {
                "general": ["Free Wi-Fi", "24/7 Concierge", "Airport Shuttle", "Pet-Friendly"],
                "wellness": ["Spa", "Gym", "Indoor Pool", "Yoga Classes"],
                "dining": ["Fine Dining Restaurant", "Buffet Breakfast", "Lobby Bar", "Room Service"],
                "business": ["Meeting Rooms", "Conference Center", "Co-Working Space"],
                "leisure": ["Rooftop Lounge", "Private Beach Access", "City Tour Packages"]
            },
            "special_services": [
                "Early Check-in & Late Check-out",
                "Personalized Concierge Services",
                "Complimentary Welcome Drinks",
                "Private Airport Transfers"
            ]
        });

        let prompt = format!(
            r#"Take the hotel and generate believable but a fake list of hotel amenities
for River Hotels, a global hospitality brand operating in over 40 countries.

Hotel:
{hotel_id}

The fake output should look like this:
{example_output}

Only include the fake output. No additional description is needed."#
        );

        let data = self.llm.complete(&self.model, &prompt).await?;
        Ok(data)
    }
}

/// Gets a list of the hotel offers.
pub struct AvailableOffers {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl AvailableOffers {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Tool for AvailableOffers {
    fn name(&self) -> &str {
        "get_available_offers"
    }

    fn description(&self) -> &str {
        "Gets a list of the hotel's current offers, promotions, and perks."
    }

    fn parameters_schema(&self) -> Value {
        hotel_id_schema()
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let hotel_id = str_arg(&args, "hotel_id")?;

        info!("Finds hotel offers {}", hotel_id);

        let example_output = json!({
            "hotel_id": "RH-TOKYO-001",
            "hotel_name": "River Grand Tokyo",
            "location": "Tokyo, Japan",
            "available_offers": [
                {
                    "offer_id": "OFFER123",
                    "title": "Complimentary Room Upgrade",
                    "description": "Enjoy a free upgrade to the next room category when you book a minimum 3-night stay.",
                    "offer_type": "Room Upgrade",
                    "eligibility": ["Loyalty Members", "Bookings of 3+ nights"],
                    "validity_period": {
                        "start_date": "2024-03-01",
                        "end_date": "2024-06-30"
                    },
                    "discount_percentage": 0,
                    "benefits": ["Free upgrade", "Priority check-in"],
                    "terms_conditions": "Subject to availability. Cannot be combined with other promotions."
                },
                {
                    "offer_id": "OFFER456",
                    "title": "20% Off Spa Services",
                    "description": "Relax and rejuvenate with 20% off all spa treatments during your stay.",
                    "offer_type": "Wellness",
                    "eligibility": ["All Guests"],
                    "validity_period": {
                        "start_date": "2024-02-15",
                        "end_date": "2024-05-15"
                    },
                    "discount_percentage": 20,
                    "benefits": ["Discounted spa treatments", "Complimentary herbal tea"],
                    "terms_conditions": "Advance booking required. Not applicable to in-room massages."
                },
                {
                    "offer_id": "OFFER789",
                    "title": "Business Traveler Package",
                    "description": "Exclusive business traveler perks, including free high-speed Wi-Fi and meeting room access.",
                    "offer_type": "Business",
                    "eligibility": ["Business Travelers", "Corporate Bookings"],
                    "validity_period": {
                        "start_date": "2024-04-01",
                        "end_date": "2024-07-31"
                    },
                    "discount_percentage": 0,
                    "benefits": ["Complimentary meeting room access", "Free high-speed Wi-Fi", "Late check-out"],
                    "terms_conditions": "Valid for business travelers only. ID may be required at check-in."
                }
            ]
        });

        let prompt = format!(
            r#"Take the hotel and generate believable but a fake list of hotel on-going offers
for River Hotels, a global hospitality brand operating in over 40 countries.

Hotel:
{hotel_id}

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
    async fn reviews_prompt_embeds_hotel_id_and_example_shape() {
        let llm = Arc::new(RecordingLlm::new("{\"reviews\": []}"));
        let tool = HotelReviews::new(llm.clone(), "test-model".to_string());

        let result = tool
            .execute(json!({"hotel_id": "RH-MIAMI-002"}))
            .await
            .unwrap();
        assert_eq!(result, "{\"reviews\": []}");

        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].contains("RH-MIAMI-002"));
        assert!(prompts[0].contains("average_rating"));
    }

    #[tokio::test]
    async fn offers_requires_hotel_id() {
        let llm = Arc::new(RecordingLlm::new("unused"));
        let tool = AvailableOffers::new(llm, "test-model".to_string());

        let err = tool
            .execute(json!({"customer_email": "wrong@key.com"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("hotel_id"));
    }

    #[tokio::test]
    async fn same_id_twice_produces_independent_calls() {
        let llm = Arc::new(RecordingLlm::new("{\"amenities\": {}}"));
        let tool = HotelAmenities::new(llm.clone(), "test-model".to_string());

        tool.execute(json!({"hotel_id": "RH-TOKYO-001"})).await.unwrap();
        tool.execute(json!({"hotel_id": "RH-TOKYO-001"})).await.unwrap();

        // No caching contract: two invocations, two model calls
        assert_eq!(llm.prompts.lock().unwrap().len(), 2);
    }
}

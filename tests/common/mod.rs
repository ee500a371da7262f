#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use naturi_itinerary::llm::{GroundedModel, GroundingMetadata, ModelResponse, SamplingConfig};
use naturi_itinerary::TripRequest;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Canned model: answers every prompt with the same response or error.
pub struct StubModel {
    outcome: std::result::Result<ModelResponse, String>,
    pub prompts: Mutex<Vec<String>>,
    pub samplings: Mutex<Vec<SamplingConfig>>,
}

impl StubModel {
    pub fn answering(text: &str, grounding: Option<GroundingMetadata>) -> Self {
        Self::with_outcome(Ok(ModelResponse {
            text: text.to_string(),
            grounding,
            input_tokens: 100,
            output_tokens: 200,
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: std::result::Result<ModelResponse, String>) -> Self {
        Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
            samplings: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GroundedModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<ModelResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.samplings.lock().unwrap().push(sampling.clone());
        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

pub fn lima_request() -> TripRequest {
    TripRequest::new(
        "Lima, Peru",
        "Miami, USA",
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    )
}

pub fn lima_payload() -> Value {
    json!({
        "flights": [
            {
                "airline": "LATAM Airlines",
                "price": "$412",
                "duration": "5h 40m",
                "departureTime": "08:15",
                "arrivalTime": "13:55",
                "bookingUrl": "https://www.latamairlines.com",
                "source": "LATAM"
            },
            {
                "airline": "American Airlines",
                "price": "$489",
                "duration": "5h 50m",
                "departureTime": "16:30",
                "arrivalTime": "22:20",
                "bookingUrl": "https://www.kayak.com/flights/MIA-LIM",
                "source": "Kayak"
            }
        ],
        "accommodations": [
            {
                "name": "Casa Andina Premium Miraflores",
                "type": "hotel",
                "pricePerNight": "$140",
                "rating": 4.5,
                "amenities": ["WiFi", "Breakfast", "Pool"],
                "bookingUrl": "https://www.booking.com/casa-andina",
                "source": "Booking.com"
            }
        ],
        "activities": [
            {
                "name": "Museo Larco",
                "type": "attraction",
                "price": "$15",
                "rating": 4.8,
                "description": "Pre-Columbian art in a colonial mansion",
                "source": "TripAdvisor"
            }
        ],
        "localTransport": [
            {
                "type": "taxi",
                "provider": "Uber",
                "price": "$5-10",
                "bookingUrl": "https://www.uber.com",
                "source": "Uber"
            }
        ],
        "dailyPlan": [
            {"day": 1, "date": "2025-03-01", "activities": ["Arrive", "Miraflores boardwalk"]},
            {"day": 2, "date": "2025-03-02", "activities": ["Museo Larco"]},
            {"day": 3, "date": "2025-03-03", "activities": ["Barranco"]},
            {"day": 4, "date": "2025-03-04", "activities": ["Paracas day trip"]},
            {"day": 5, "date": "2025-03-05", "activities": ["Depart"]}
        ],
        "estimatedBudget": {
            "flights": "$900",
            "accommodation": "$560",
            "activities": "$150",
            "food": "$250",
            "transport": "$60",
            "total": "$1,920"
        },
        "travelTips": ["Drink bottled water", "Carry small bills"]
    })
}

pub fn fenced(payload: &Value) -> String {
    format!(
        "Here are your options:\n\n```json\n{}\n```\n\nHave a great trip!",
        serde_json::to_string_pretty(payload).unwrap()
    )
}

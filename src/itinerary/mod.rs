pub mod export;
pub mod model;
pub mod parse;
pub mod prompt;
pub mod sources;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Instant;

use crate::error::ItineraryError;
use crate::instrumentation::{GenerationLog, GenerationLogger};
use crate::llm::{GroundedModel, ModelResponse, SamplingConfig};
use crate::trip::TripRequest;

pub use model::{
    AccommodationOption, ActivityOption, DayPlan, EstimatedBudget, FlightOption,
    ItineraryResult, Source, TransportOption, NOT_AVAILABLE,
};
pub use parse::{parse_response, ParsedResponse};
pub use prompt::build_prompt;
pub use sources::{extract_search_queries, extract_sources};

/// Turns a trip request into an itinerary with one grounded model call.
///
/// Holds no per-call state, so one generator can serve concurrent requests.
pub struct ItineraryGenerator {
    model: Arc<dyn GroundedModel>,
    sampling: SamplingConfig,
    logger: Option<GenerationLogger>,
}

impl ItineraryGenerator {
    pub fn new(model: Arc<dyn GroundedModel>) -> Self {
        Self {
            model,
            sampling: SamplingConfig::default(),
            logger: None,
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_logger(mut self, logger: GenerationLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub async fn generate(&self, request: &TripRequest) -> Result<ItineraryResult, ItineraryError> {
        let (result, _) = self.generate_logged(request).await?;
        Ok(result)
    }

    /// Like [`generate`](Self::generate), but also hands back the run record
    /// that was appended to the log, whether or not a logger is configured.
    pub async fn generate_logged(
        &self,
        request: &TripRequest,
    ) -> Result<(ItineraryResult, GenerationLog), ItineraryError> {
        let start = Instant::now();
        let prompt = build_prompt(request);

        tracing::info!(
            destination = %request.destination,
            starting_point = %request.starting_point,
            days = request.days,
            model = self.model.name(),
            "generating itinerary"
        );

        let response = self
            .model
            .generate(&prompt, &self.sampling)
            .await
            .map_err(|e| {
                tracing::error!(error = %format!("{e:#}"), "itinerary generation failed");
                ItineraryError::Upstream(format!("{e:#}"))
            })?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let (result, structured) = shape_result(&response, elapsed_ms);

        tracing::info!(
            elapsed_ms,
            grounded = result.is_grounded,
            sources = result.sources.len(),
            search_queries = result.search_queries.len(),
            structured,
            "itinerary generated"
        );

        let log = generation_log(request, &result, &response, self.model.name(), structured);
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.write(&log) {
                tracing::warn!(error = %e, "failed to write generation log");
            }
        }

        Ok((result, log))
    }
}

/// Shapes a raw model answer into a result. The flag reports whether a JSON
/// object was recovered; when it was not, the raw text becomes the only tip.
pub fn shape_result(response: &ModelResponse, elapsed_ms: u64) -> (ItineraryResult, bool) {
    let grounding = response.grounding.as_ref();
    let sources = extract_sources(grounding);
    let search_queries = extract_search_queries(grounding);
    let is_grounded = grounding.is_some();

    match parse_response(&response.text) {
        ParsedResponse::Structured(parsed) => (
            ItineraryResult {
                flights: list_field(&parsed, "flights"),
                accommodations: list_field(&parsed, "accommodations"),
                activities: list_field(&parsed, "activities"),
                local_transport: list_field(&parsed, "localTransport"),
                daily_plan: list_field(&parsed, "dailyPlan"),
                estimated_budget: budget_field(&parsed),
                travel_tips: tips_field(&parsed),
                sources,
                is_grounded,
                search_queries,
                elapsed_ms,
            },
            true,
        ),
        ParsedResponse::Unstructured => (
            ItineraryResult {
                flights: Vec::new(),
                accommodations: Vec::new(),
                activities: Vec::new(),
                local_transport: Vec::new(),
                daily_plan: Vec::new(),
                estimated_budget: EstimatedBudget::not_available(),
                travel_tips: vec![response.text.clone()],
                sources,
                is_grounded,
                search_queries,
                elapsed_ms,
            },
            false,
        ),
    }
}

// Absent or non-array fields become empty; elements that are not records are skipped.
fn list_field<T: DeserializeOwned>(parsed: &Map<String, Value>, key: &str) -> Vec<T> {
    match parsed.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn budget_field(parsed: &Map<String, Value>) -> EstimatedBudget {
    match parsed.get("estimatedBudget") {
        Some(value) if value.is_object() => serde_json::from_value(value.clone())
            .unwrap_or_else(|_| EstimatedBudget::not_available()),
        _ => EstimatedBudget::not_available(),
    }
}

fn tips_field(parsed: &Map<String, Value>) -> Vec<String> {
    match parsed.get("travelTips") {
        Some(Value::Array(items)) => items.iter().filter_map(model::text_of).collect(),
        _ => Vec::new(),
    }
}

fn generation_log(
    request: &TripRequest,
    result: &ItineraryResult,
    response: &ModelResponse,
    model: &str,
    structured: bool,
) -> GenerationLog {
    GenerationLog {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        model: model.to_string(),
        destination: request.destination.clone(),
        starting_point: request.starting_point.clone(),
        days: request.days,
        elapsed_ms: result.elapsed_ms,
        is_grounded: result.is_grounded,
        num_sources: result.sources.len() as u32,
        num_search_queries: result.search_queries.len() as u32,
        num_flights: result.flights.len() as u32,
        num_accommodations: result.accommodations.len() as u32,
        num_activities: result.activities.len() as u32,
        num_transport: result.local_transport.len() as u32,
        num_days_planned: result.daily_plan.len() as u32,
        structured,
        input_tokens: response.input_tokens,
        output_tokens: response.output_tokens,
    }
}

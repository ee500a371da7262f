use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

// Option records are filled in by the model, so every field is read leniently:
// numbers become text, nulls become empty, wrong shapes fall back to defaults.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightOption {
    #[serde(deserialize_with = "text")]
    pub airline: String,
    #[serde(deserialize_with = "text")]
    pub price: String,
    #[serde(deserialize_with = "text")]
    pub duration: String,
    #[serde(deserialize_with = "text")]
    pub departure_time: String,
    #[serde(deserialize_with = "text")]
    pub arrival_time: String,
    #[serde(deserialize_with = "text")]
    pub booking_url: String,
    #[serde(deserialize_with = "text")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationOption {
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// hotel, hostel, apartment or resort, as reported.
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    #[serde(deserialize_with = "text")]
    pub price_per_night: String,
    #[serde(deserialize_with = "rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "text_list")]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "text")]
    pub booking_url: String,
    #[serde(deserialize_with = "text")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityOption {
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// attraction, tour, restaurant or entertainment, as reported.
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(deserialize_with = "text")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportOption {
    /// train, bus, car-rental or taxi, as reported.
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    #[serde(deserialize_with = "text")]
    pub provider: String,
    #[serde(deserialize_with = "text")]
    pub price: String,
    #[serde(deserialize_with = "text")]
    pub booking_url: String,
    #[serde(deserialize_with = "text")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    #[serde(deserialize_with = "day_number")]
    pub day: u32,
    #[serde(deserialize_with = "text")]
    pub date: String,
    #[serde(deserialize_with = "text_list")]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatedBudget {
    #[serde(deserialize_with = "budget_text")]
    pub flights: String,
    #[serde(deserialize_with = "budget_text")]
    pub accommodation: String,
    #[serde(deserialize_with = "budget_text")]
    pub activities: String,
    #[serde(deserialize_with = "budget_text")]
    pub food: String,
    #[serde(deserialize_with = "budget_text")]
    pub transport: String,
    #[serde(deserialize_with = "budget_text")]
    pub total: String,
}

impl EstimatedBudget {
    pub fn not_available() -> Self {
        Self {
            flights: NOT_AVAILABLE.to_string(),
            accommodation: NOT_AVAILABLE.to_string(),
            activities: NOT_AVAILABLE.to_string(),
            food: NOT_AVAILABLE.to_string(),
            transport: NOT_AVAILABLE.to_string(),
            total: NOT_AVAILABLE.to_string(),
        }
    }
}

impl Default for EstimatedBudget {
    fn default() -> Self {
        Self::not_available()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
}

/// Outcome of one generation call. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    pub flights: Vec<FlightOption>,
    pub accommodations: Vec<AccommodationOption>,
    pub activities: Vec<ActivityOption>,
    pub local_transport: Vec<TransportOption>,
    pub daily_plan: Vec<DayPlan>,
    pub estimated_budget: EstimatedBudget,
    pub travel_tips: Vec<String>,
    pub sources: Vec<Source>,
    pub is_grounded: bool,
    pub search_queries: Vec<String>,
    pub elapsed_ms: u64,
}

impl ItineraryResult {
    /// False when the model produced nothing bookable and no day plan, which the
    /// presentation layer reports as "we couldn't find detailed results".
    pub fn has_details(&self) -> bool {
        !(self.flights.is_empty()
            && self.accommodations.is_empty()
            && self.activities.is_empty()
            && self.local_transport.is_empty()
            && self.daily_plan.is_empty())
    }
}

pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text_of(&Value::deserialize(d)?).unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(text_of(&Value::deserialize(d)?).filter(|s| !s.trim().is_empty()))
}

fn budget_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text_of(&Value::deserialize(d)?)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string()))
}

fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

fn rating<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn day_number<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64().map_or(0, |v| v as u32),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flight_reads_numbers_as_text_and_fills_missing_fields() {
        let flight: FlightOption = serde_json::from_value(json!({
            "airline": "LATAM",
            "price": 412,
            "bookingUrl": null
        }))
        .unwrap();
        assert_eq!(flight.airline, "LATAM");
        assert_eq!(flight.price, "412");
        assert_eq!(flight.booking_url, "");
        assert_eq!(flight.duration, "");
    }

    #[test]
    fn accommodation_reads_type_rating_and_amenities() {
        let stay: AccommodationOption = serde_json::from_value(json!({
            "name": "Casa Andina",
            "type": "hotel",
            "pricePerNight": "$120",
            "rating": "4.5",
            "amenities": ["WiFi", "Breakfast", 24]
        }))
        .unwrap();
        assert_eq!(stay.kind, "hotel");
        assert_eq!(stay.rating, Some(4.5));
        assert_eq!(stay.amenities, vec!["WiFi", "Breakfast", "24"]);
    }

    #[test]
    fn activity_treats_blank_optionals_as_absent() {
        let activity: ActivityOption = serde_json::from_value(json!({
            "name": "Larco Museum",
            "price": "",
            "duration": "2 hours",
            "description": "Pre-Columbian art"
        }))
        .unwrap();
        assert_eq!(activity.price, None);
        assert_eq!(activity.duration.as_deref(), Some("2 hours"));
        assert_eq!(activity.booking_url, None);

        let out = serde_json::to_value(&activity).unwrap();
        assert!(out.get("price").is_none());
        assert_eq!(out["type"], "");
    }

    #[test]
    fn partial_budget_fills_missing_fields_with_not_available() {
        let budget: EstimatedBudget = serde_json::from_value(json!({
            "flights": "$900",
            "total": null
        }))
        .unwrap();
        assert_eq!(budget.flights, "$900");
        assert_eq!(budget.food, NOT_AVAILABLE);
        assert_eq!(budget.total, NOT_AVAILABLE);
    }

    #[test]
    fn day_plan_accepts_string_day() {
        let day: DayPlan = serde_json::from_value(json!({
            "day": "2",
            "date": "2025-03-02",
            "activities": ["Barranco walk"]
        }))
        .unwrap();
        assert_eq!(day.day, 2);
        assert_eq!(day.activities.len(), 1);
    }

    #[test]
    fn result_serializes_camel_case_with_search_queries() {
        let result = ItineraryResult {
            flights: vec![],
            accommodations: vec![],
            activities: vec![],
            local_transport: vec![],
            daily_plan: vec![],
            estimated_budget: EstimatedBudget::not_available(),
            travel_tips: vec![],
            sources: vec![],
            is_grounded: false,
            search_queries: vec![],
            elapsed_ms: 3,
        };
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out["localTransport"], json!([]));
        assert_eq!(out["searchQueries"], json!([]));
        assert_eq!(out["estimatedBudget"]["total"], "N/A");
        assert_eq!(out["isGrounded"], false);
        assert_eq!(out["elapsedMs"], 3);
        assert!(!result.has_details());
    }
}

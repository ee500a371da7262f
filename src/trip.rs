use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ItineraryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "mid-range" | "midrange" | "mid" => Ok(Self::MidRange),
            "luxury" => Ok(Self::Luxury),
            other => Err(format!(
                "unknown budget tier \"{other}\" (expected budget, mid-range or luxury)"
            )),
        }
    }
}

/// A validated trip request. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub destination: String,
    pub starting_point: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub budget: Option<BudgetTier>,
    pub travelers: Option<u32>,
    pub additional_preferences: Option<String>,
}

impl TripRequest {
    /// Builds a request whose `days` is derived from the date range.
    pub fn new(
        destination: impl Into<String>,
        starting_point: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let days = trip_days(start_date, end_date).max(1) as u32;
        Self {
            destination: destination.into(),
            starting_point: starting_point.into(),
            start_date,
            end_date,
            days,
            budget: None,
            travelers: None,
            additional_preferences: None,
        }
    }

    pub fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = Some(travelers);
        self
    }

    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.additional_preferences = Some(preferences.into());
        self
    }
}

/// Inclusive number of calendar days between two dates.
pub fn trip_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Loosely typed inbound record, as posted by a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequestPayload {
    pub destination: Option<String>,
    pub starting_point: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub days: Option<i64>,
    pub budget: Option<String>,
    pub travelers: Option<i64>,
    pub additional_preferences: Option<String>,
}

impl TripRequestPayload {
    pub fn validate(&self) -> Result<TripRequest, ItineraryError> {
        let mut missing = Vec::new();
        let mut problems = Vec::new();

        let destination = required(&self.destination, "destination", &mut missing);
        let starting_point = required(&self.starting_point, "startingPoint", &mut missing);
        let start_date = required(&self.start_date, "startDate", &mut missing)
            .and_then(|raw| parse_date(raw, "startDate", &mut problems));
        let end_date = required(&self.end_date, "endDate", &mut missing)
            .and_then(|raw| parse_date(raw, "endDate", &mut problems));

        let mut days = None;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            let span = trip_days(start, end);
            if span < 1 {
                problems.push("end date must not be before start date".to_string());
            } else {
                match self.days {
                    None => days = Some(span as u32),
                    Some(d) if d < 1 => problems.push("days must be at least 1".to_string()),
                    Some(d) if d != span => problems.push(format!(
                        "days ({d}) does not match the date range ({span} days)"
                    )),
                    Some(d) => days = Some(d as u32),
                }
            }
        }

        let budget = match self.budget.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<BudgetTier>() {
                Ok(tier) => Some(tier),
                Err(e) => {
                    problems.push(e);
                    None
                }
            },
        };

        let travelers = match self.travelers {
            None => None,
            Some(n) if n < 1 => {
                problems.push("travelers must be at least 1".to_string());
                None
            }
            Some(n) => match u32::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    problems.push(format!("travelers ({n}) is too large"));
                    None
                }
            },
        };

        let additional_preferences = self
            .additional_preferences
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        match (destination, starting_point, start_date, end_date, days) {
            (Some(destination), Some(starting_point), Some(start_date), Some(end_date), Some(days))
                if missing.is_empty() && problems.is_empty() =>
            {
                Ok(TripRequest {
                    destination: destination.to_string(),
                    starting_point: starting_point.to_string(),
                    start_date,
                    end_date,
                    days,
                    budget,
                    travelers,
                    additional_preferences,
                })
            }
            _ => Err(ItineraryError::InvalidRequest { missing, problems }),
        }
    }
}

fn required<'a>(
    value: &'a Option<String>,
    name: &str,
    missing: &mut Vec<String>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(name.to_string());
            None
        }
    }
}

fn parse_date(raw: &str, name: &str, problems: &mut Vec<String>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            problems.push(format!("{name} \"{raw}\" must be a YYYY-MM-DD date"));
            None
        }
    }
}

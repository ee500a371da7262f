pub mod config;
pub mod error;
pub mod instrumentation;
pub mod itinerary;
pub mod llm;
pub mod server;
pub mod trip;

pub use error::ItineraryError;
pub use itinerary::{ItineraryGenerator, ItineraryResult};
pub use trip::{BudgetTier, TripRequest, TripRequestPayload};

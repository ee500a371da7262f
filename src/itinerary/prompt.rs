use crate::trip::{BudgetTier, TripRequest};

const PREAMBLE: &str = "You are a travel aggregator assistant. Search for and compile ACTUAL, CURRENT options for flights, accommodations, and activities.";

const RESPONSE_SCHEMA: &str = r#"{
  "flights": [{"airline": "", "price": "", "duration": "", "departureTime": "", "arrivalTime": "", "bookingUrl": "", "source": ""}],
  "accommodations": [{"name": "", "type": "", "pricePerNight": "", "rating": 0, "amenities": [], "bookingUrl": "", "source": ""}],
  "activities": [{"name": "", "type": "", "price": "", "duration": "", "rating": 0, "description": "", "bookingUrl": "", "source": ""}],
  "localTransport": [{"type": "", "provider": "", "price": "", "bookingUrl": "", "source": ""}],
  "dailyPlan": [{"day": 1, "date": "", "activities": []}],
  "estimatedBudget": {"flights": "", "accommodation": "", "activities": "", "food": "", "transport": "", "total": ""},
  "travelTips": []
}"#;

const CRITICAL: &str = r#"CRITICAL:
- Search for REAL booking platforms and include ACTUAL URLs
- Use current prices and availability
- Prioritize popular, trusted booking platforms
- Include a variety of options at different price points"#;

/// Builds the aggregator instruction for a trip. Pure and deterministic.
pub fn build_prompt(request: &TripRequest) -> String {
    let budget = request.budget.unwrap_or(BudgetTier::MidRange);
    let travelers = request.travelers.unwrap_or(1);

    let mut prompt = format!(
        "{PREAMBLE}

**Trip Details:**
- Destination: {}
- Starting Point: {}
- Start Date: {}
- End Date: {}
- Duration: {} days
- Budget Level: {}
- Number of Travelers: {}

",
        request.destination,
        request.starting_point,
        request.start_date.format("%Y-%m-%d"),
        request.end_date.format("%Y-%m-%d"),
        request.days,
        budget,
        travelers,
    );

    if let Some(preferences) = &request.additional_preferences {
        prompt.push_str(&format!("**Preferences:**\n{preferences}\n\n"));
    }

    prompt.push_str(&format!(
        "**IMPORTANT: Provide REAL, BOOKABLE OPTIONS with ACTUAL URLs**

Please search for and provide:

1. **FLIGHT OPTIONS (3-5 options)**
   For each flight, provide:
   - Airline name
   - Price (in USD or local currency)
   - Flight duration
   - Departure and arrival times
   - Direct booking URL (Kayak, Skyscanner, airline website, Google Flights, etc.)
   - Source website name

2. **ACCOMMODATION OPTIONS (5-7 options)**
   For each accommodation, provide:
   - Hotel/Property name
   - Type (hotel, hostel, apartment, resort)
   - Price per night
   - Star rating or review score
   - Key amenities (WiFi, breakfast, pool, etc.)
   - Booking URL (Booking.com, Airbnb, Hotels.com, Agoda, etc.)
   - Source website name

3. **ACTIVITY OPTIONS (8-10 options)**
   Include attractions, tours, restaurants, and entertainment:
   - Activity/Place name
   - Type (attraction, tour, restaurant, entertainment)
   - Price (if applicable)
   - Duration (if applicable)
   - Rating/reviews
   - Brief description
   - Booking/website URL (GetYourGuide, Viator, TripAdvisor, official websites, etc.)
   - Source website name

4. **LOCAL TRANSPORT OPTIONS (3-4 options)**
   - Train/Bus/Car rental services
   - Provider name
   - Approximate price
   - Booking URL
   - Source website name

5. **DAILY ITINERARY SUGGESTIONS**
   For each of the {days} days, suggest activities from the list above.
   The dailyPlan must contain exactly {days} entries, one per day.

6. **BUDGET BREAKDOWN**
   Estimated costs for flights, accommodation, activities, food, and transport, plus a total

7. **TRAVEL TIPS**
   Current travel requirements, best times to visit, local customs, safety tips

**FORMAT YOUR RESPONSE AS JSON** with this structure:
{RESPONSE_SCHEMA}

{CRITICAL}",
        days = request.days,
    ));

    prompt
}

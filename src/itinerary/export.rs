use chrono::NaiveDate;

use super::model::ItineraryResult;

fn section(out: &mut String, heading: &str) {
    out.push_str(&format!("\n{heading}\n{}\n", "-".repeat(50)));
}

fn rating_line(out: &mut String, rating: Option<f64>) {
    if let Some(r) = rating.filter(|r| *r > 0.0) {
        out.push_str(&format!("   Rating: {r}⭐\n"));
    }
}

/// Plain-text rendering offered to the visitor as a download.
pub fn to_text(
    result: &ItineraryResult,
    title: Option<&str>,
    location: Option<&str>,
    generated: NaiveDate,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Itinerary\n", title.unwrap_or("Travel")));
    out.push_str(&format!("{}\n", location.unwrap_or("")));
    out.push_str(&format!("Generated: {}\n", generated.format("%Y-%m-%d")));
    out.push_str(&format!("{}\n\n", "=".repeat(50)));

    if !result.flights.is_empty() {
        section(&mut out, "FLIGHT OPTIONS");
        for (i, flight) in result.flights.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", i + 1, flight.airline));
            out.push_str(&format!("   Price: {}\n", flight.price));
            out.push_str(&format!("   Duration: {}\n", flight.duration));
            out.push_str(&format!("   Departure: {}\n", flight.departure_time));
            out.push_str(&format!("   Arrival: {}\n", flight.arrival_time));
            out.push_str(&format!("   Book: {}\n", flight.booking_url));
        }
        out.push('\n');
    }

    if !result.accommodations.is_empty() {
        section(&mut out, "ACCOMMODATIONS");
        for (i, stay) in result.accommodations.iter().enumerate() {
            out.push_str(&format!("\n{}. {} ({})\n", i + 1, stay.name, stay.kind));
            out.push_str(&format!("   Price: {}/night\n", stay.price_per_night));
            rating_line(&mut out, stay.rating);
            out.push_str(&format!("   Amenities: {}\n", stay.amenities.join(", ")));
            out.push_str(&format!("   Book: {}\n", stay.booking_url));
        }
        out.push('\n');
    }

    if !result.activities.is_empty() {
        section(&mut out, "ACTIVITIES & ATTRACTIONS");
        for (i, activity) in result.activities.iter().enumerate() {
            out.push_str(&format!("\n{}. {} ({})\n", i + 1, activity.name, activity.kind));
            out.push_str(&format!("   {}\n", activity.description));
            if let Some(price) = &activity.price {
                out.push_str(&format!("   Price: {price}\n"));
            }
            rating_line(&mut out, activity.rating);
            if let Some(url) = &activity.booking_url {
                out.push_str(&format!("   Info: {url}\n"));
            }
        }
        out.push('\n');
    }

    if !result.local_transport.is_empty() {
        section(&mut out, "LOCAL TRANSPORT OPTIONS");
        for (i, transport) in result.local_transport.iter().enumerate() {
            out.push_str(&format!("\n{}. {} ({})\n", i + 1, transport.provider, transport.kind));
            out.push_str(&format!("   Price: {}\n", transport.price));
            out.push_str(&format!("   Book: {}\n", transport.booking_url));
        }
        out.push('\n');
    }

    if !result.daily_plan.is_empty() {
        section(&mut out, "DAILY ITINERARY");
        for day in &result.daily_plan {
            out.push_str(&format!("\nDay {} - {}\n", day.day, day.date));
            for (i, activity) in day.activities.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, activity));
            }
        }
        out.push('\n');
    }

    let budget = &result.estimated_budget;
    section(&mut out, "ESTIMATED BUDGET");
    out.push_str(&format!("Flights: {}\n", budget.flights));
    out.push_str(&format!("Accommodation: {}\n", budget.accommodation));
    out.push_str(&format!("Activities: {}\n", budget.activities));
    out.push_str(&format!("Food: {}\n", budget.food));
    out.push_str(&format!("Transport: {}\n", budget.transport));
    out.push_str(&format!("TOTAL: {}\n\n", budget.total));

    if !result.travel_tips.is_empty() {
        section(&mut out, "TRAVEL TIPS");
        for (i, tip) in result.travel_tips.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, tip));
        }
    }

    if !result.sources.is_empty() {
        section(&mut out, "SOURCES");
        for source in &result.sources {
            match &source.title {
                Some(title) => out.push_str(&format!("- {title}: {}\n", source.url)),
                None => out.push_str(&format!("- {}\n", source.url)),
            }
        }
    }

    out
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;

use naturi_itinerary::config::Config;
use naturi_itinerary::instrumentation::GenerationLogger;
use naturi_itinerary::itinerary::export;
use naturi_itinerary::llm::GeminiClient;
use naturi_itinerary::{ItineraryGenerator, TripRequestPayload};

#[derive(Parser)]
#[command(name = "naturi", about = "Grounded travel itineraries from a hosted language model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an itinerary for one trip
    Plan {
        /// Where the trip goes
        #[arg(long)]
        destination: String,
        /// Where the trip starts
        #[arg(long = "from")]
        starting_point: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: String,
        /// budget, mid-range or luxury
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        travelers: Option<i64>,
        /// Free-text preferences passed to the model
        #[arg(long)]
        preferences: Option<String>,
        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write the text export to this file
        #[arg(long)]
        export: Option<String>,
    },
    /// Serve the itinerary API over HTTP
    Serve {
        /// Listen address, overrides NATURI_BIND
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = Config::from_env()?;
    let client = GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_base_url,
        &config.gemini_model,
        config.request_timeout,
    )?;
    let logger = GenerationLogger::new(&config.log_dir)?;
    let generator = ItineraryGenerator::new(Arc::new(client)).with_logger(logger);

    match cli.command {
        Commands::Plan {
            destination,
            starting_point,
            start,
            end,
            budget,
            travelers,
            preferences,
            json,
            export: export_path,
        } => {
            let payload = TripRequestPayload {
                destination: Some(destination),
                starting_point: Some(starting_point),
                start_date: Some(start),
                end_date: Some(end),
                days: None,
                budget,
                travelers,
                additional_preferences: preferences,
            };
            let request = payload.validate()?;
            let (result, log) = generator.generate_logged(&request).await?;

            let text = export::to_text(
                &result,
                None,
                Some(&request.destination),
                chrono::Utc::now().date_naive(),
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("\n{}", text);
            }

            if !result.has_details() {
                eprintln!(
                    "We couldn't find detailed results for this trip. \
                     The model's answer is shown under TRAVEL TIPS."
                );
            }

            if let Some(path) = export_path {
                std::fs::write(&path, &text)
                    .context(format!("Failed to write export file: {}", path))?;
                eprintln!("Saved itinerary to {}", path);
            }

            eprintln!("{}", log.summary());
        }
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            naturi_itinerary::server::serve(addr, generator).await?;
        }
    }

    Ok(())
}

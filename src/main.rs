use anyhow::{Context, Result};
use clap::Parser;
use daywise::{ItineraryPipeline, ItineraryPlan, ItineraryRequest, PlannerConfig, telemetry, web};
use std::path::PathBuf;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
        command,
    } = Cli::parse();

    let mut config = PlannerConfig::load_from_path(config_path.clone())
        .context("Failed to load configuration")?;
    if verbose {
        config.logging.level = "debug".to_string();
    }
    telemetry::init_tracing(&config.logging)?;

    match command {
        None => {
            print_overview(config_path, verbose, &config);
            Ok(())
        }
        Some(Command::Plan {
            origin,
            destination,
            budget,
            days,
            purpose,
            preferences,
            json,
        }) => {
            let request =
                ItineraryRequest::new(origin, destination, budget, days, purpose, preferences)
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let pipeline = ItineraryPipeline::from_config(&config)?;
            let plan = pipeline
                .plan(&request)
                .await
                .map_err(|e| anyhow::anyhow!("{} ({e})", e.user_message()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
            Ok(())
        }
        Some(Command::Serve { port }) => {
            let pipeline = ItineraryPipeline::from_config(&config)?;
            let port = port.unwrap_or(config.server.port);
            web::run(&config.server.host, port, pipeline).await
        }
    }
}

fn print_plan(plan: &ItineraryPlan) {
    println!("Full Itinerary");
    println!("{}", plan.itinerary_text.trim());
    println!();
    println!("Day-by-Day Visuals (map + current weather)");
    for day in &plan.days {
        println!();
        println!("[{}] {}", day.tab_label(), day);
    }
}

fn print_overview(config_path: Option<PathBuf>, verbose: bool, config: &PlannerConfig) {
    let credentials = config.credentials();
    let status = |key: &Option<String>| if key.is_some() { "configured" } else { "missing" };

    println!("Daywise {} - multi-day AI travel planner", daywise::VERSION);
    println!();
    println!("Run `daywise plan --origin <FROM> --destination <TO>` to plan a trip,");
    println!("or `daywise serve` to start the web page.");
    println!();
    println!("Gemini API key:      {}", status(&credentials.generation_api_key));
    println!(
        "Google Maps API key: {} (Open-Meteo geocoding is used without it)",
        status(&credentials.geocoding_api_key)
    );
    println!("OpenWeather API key: {}", status(&credentials.weather_api_key));

    if verbose {
        let path = config_path
            .or_else(PlannerConfig::get_config_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config.toml".to_string());
        println!();
        println!("Using config from: {path}");
        println!("Gemini model: {}", config.generation.model);
        println!("Geocoding provider: {:?}", config.geocoding.provider);
        println!("Log level: {}", config.logging.level);
    }
}

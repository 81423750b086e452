use crate::{
    services::{places::DEFAULT_RADIUS_METERS, PlacesLookup, WeatherLookup},
    Config, PlanRequest, PlanSource, Planner,
};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::time::Duration;
use tracing::{info, warn, Level};

fn coordinate_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("latitude")
                .help("Latitude in decimal degrees")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .index(1),
        )
        .arg(
            Arg::new("longitude")
                .help("Longitude in decimal degrees")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .index(2),
        )
}

fn build_command() -> Command {
    Command::new("daytrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find nearby attractions, check the forecast and plan a day around them")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            coordinate_args(Command::new("attractions").about("List tourist attractions nearby"))
                .arg(
                    Arg::new("radius")
                        .short('r')
                        .long("radius")
                        .value_name("METERS")
                        .help("Search radius in meters")
                        .value_parser(value_parser!(u32))
                        .default_value("5000"),
                ),
        )
        .subcommand(coordinate_args(
            Command::new("weather").about("Show the five-day forecast"),
        ))
        .subcommand(
            Command::new("plan")
                .about("Plan a day from a JSON request (attractions, preferences, latitude, longitude)")
                .arg(
                    Arg::new("request")
                        .help("Path to the request JSON, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .help("Skip text generation and weather, use the scheduler only")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .value_name("MODEL")
                        .help("Chat model to use (or set DAYTRIP_MODEL)"),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .value_name("SECONDS")
                        .help("Text generation timeout in seconds")
                        .value_parser(value_parser!(u64)),
                ),
        )
}

fn coordinates(matches: &ArgMatches) -> anyhow::Result<(f64, f64)> {
    let latitude = *matches
        .get_one::<f64>("latitude")
        .context("latitude is required")?;
    let longitude = *matches
        .get_one::<f64>("longitude")
        .context("longitude is required")?;
    Ok((latitude, longitude))
}

fn read_request(path: &str) -> anyhow::Result<PlanRequest> {
    let raw = if path == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read request from stdin")?
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
    };
    serde_json::from_str(&raw).with_context(|| format!("Invalid plan request in {path}"))
}

/// CLI entry point for the daytrip tool
pub async fn run() -> anyhow::Result<()> {
    let matches = build_command().get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let mut config = Config::from_env();

    match matches.subcommand() {
        Some(("attractions", sub)) => {
            let (latitude, longitude) = coordinates(sub)?;
            let radius = sub
                .get_one::<u32>("radius")
                .copied()
                .unwrap_or(DEFAULT_RADIUS_METERS);
            let attractions = config
                .places_client()?
                .nearby(latitude, longitude, radius)
                .await?;
            println!("{}", serde_json::to_string_pretty(&attractions)?);
        }
        Some(("weather", sub)) => {
            let (latitude, longitude) = coordinates(sub)?;
            let forecast = config.weather_client()?.forecast(latitude, longitude).await?;
            println!("{}", serde_json::to_string_pretty(&forecast)?);
        }
        Some(("plan", sub)) => {
            let path = sub
                .get_one::<String>("request")
                .context("request path is required")?;
            let request = read_request(path)?;

            if let Some(model) = sub.get_one::<String>("model") {
                config.model = model.clone();
            }
            if let Some(seconds) = sub.get_one::<u64>("timeout") {
                config.timeout = Duration::from_secs(*seconds);
            }

            let offline = sub.get_flag("offline");
            let planner = if offline {
                Planner::offline()
            } else {
                Planner::from_config(&config)
            };

            let forecast = match (offline, request.coordinates(), config.weather_client()) {
                (false, Some((latitude, longitude)), Ok(client)) => {
                    match client.forecast(latitude, longitude).await {
                        Ok(forecast) => Some(forecast),
                        Err(err) => {
                            warn!(target: "daytrip::weather", error = %err, "forecast unavailable");
                            None
                        }
                    }
                }
                _ => None,
            };

            info!(
                attractions = request.attractions.len(),
                generator = planner.has_generator(),
                "planning day"
            );
            let plan = planner.plan(&request, forecast.as_ref()).await;
            if plan.source == PlanSource::Scheduled {
                info!("itinerary built by the scheduler");
            }
            println!("{}", plan.text);
        }
        _ => unreachable!("subcommand_required is set"),
    }

    Ok(())
}

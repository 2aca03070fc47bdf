use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::error;

use agrisphere::api::ApiState;
use agrisphere::cli::{self, Cli, Commands};
use agrisphere::environment::{EnvironmentalDataService, PlaceholderVegetationIndex, PowerClient};
use agrisphere::notify::{ConsoleNotifier, Notifier};
use agrisphere::{
    AgriSphereConfig, AgriSphereError, CATALOG, CropAdvisor, PRESET_REGIONS, PresetRegion,
    RegionResolver, Session, geocoding, logging, web,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            match e.downcast_ref::<AgriSphereError>() {
                Some(app_error) => eprintln!("❌ {}", app_error.user_message()),
                None => eprintln!("❌ {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AgriSphereConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose);

    match cli.command {
        Commands::Presets => print_output(cli.json, &PRESET_REGIONS, || {
            cli::render_presets(&PRESET_REGIONS)
        }),
        Commands::Crops => print_output(cli.json, &CATALOG, || cli::render_crops(&CATALOG)),
        Commands::Recommend {
            temperature,
            precipitation,
            soil_moisture,
        } => {
            let recommendation = CropAdvisor::recommend(temperature, precipitation, soil_moisture);
            print_output(cli.json, &recommendation, || {
                cli::render_recommendation(&recommendation)
            })
        }
        Commands::Search { query } => {
            let mut session = build_session(&config)?;
            session.set_query(query.join(" "));
            session.search().await?;
            print_session(cli.json, &session)
        }
        Commands::Preset { name } => {
            let name = name.join(" ");
            let preset = PresetRegion::find(&name).ok_or_else(|| {
                AgriSphereError::validation(format!(
                    "Unknown preset region '{name}'. Run `agrisphere presets` to list them."
                ))
            })?;
            let mut session = build_session(&config)?;
            session.select_preset(preset).await?;
            print_session(cli.json, &session)
        }
        Commands::Serve { port } => {
            let state = build_api_state(&config)?;
            let port = port.unwrap_or(config.server.port);
            web::run(state, &config.server.host, port).await
        }
    }
}

fn build_environment(
    config: &AgriSphereConfig,
    notifier: Arc<dyn Notifier>,
) -> Result<Arc<EnvironmentalDataService>> {
    let power = PowerClient::new(&config.environment, &config.geocoding.user_agent)?;
    Ok(Arc::new(EnvironmentalDataService::new(
        Arc::new(power),
        Arc::new(PlaceholderVegetationIndex),
        notifier,
        config.environment.period(),
    )))
}

fn build_session(config: &AgriSphereConfig) -> Result<Session> {
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let geocoder = geocoding::from_config(&config.geocoding)?;
    let resolver = RegionResolver::new(geocoder, notifier.clone());
    Ok(Session::new(resolver, build_environment(config, notifier)?))
}

fn build_api_state(config: &AgriSphereConfig) -> Result<ApiState> {
    let notifier: Arc<dyn Notifier> = Arc::new(agrisphere::notify::TracingNotifier);
    Ok(ApiState {
        geocoder: geocoding::from_config(&config.geocoding)?,
        environment: build_environment(config, notifier.clone())?,
        notifier,
    })
}

fn print_session(json: bool, session: &Session) -> Result<()> {
    let state = session.state();
    print_output(json, state, || {
        cli::render_overview(state.environment.as_ref(), state.recommendation.as_ref())
    })
}

fn print_output<T, F>(json: bool, value: &T, render: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", render());
    }
    Ok(())
}

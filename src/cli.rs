//! Command line interface and text rendering

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::crops::Recommendation;
use crate::models::{CropRecord, EnvironmentalSummary};
use crate::region::PresetRegion;

#[derive(Debug, Parser)]
#[command(name = "agrisphere")]
#[command(
    author,
    version,
    about = "Climate-resilient crop recommendations from regional climate data"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to <config dir>/agrisphere/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON instead of text cards
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the preset regions
    Presets,

    /// Search a location, load its climate and recommend crops
    #[command(visible_alias = "s")]
    Search {
        /// Free-text location, e.g. "Nairobi, Kenya"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Use a preset region, load its climate and recommend crops
    Preset {
        /// Preset name, e.g. "Middle East"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Recommend crops for a given climate without any lookup
    Recommend {
        /// Average temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,

        /// Average precipitation in mm/day
        #[arg(short, long, allow_negative_numbers = true)]
        precipitation: f64,

        /// Average soil moisture in %
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        soil_moisture: f64,
    },

    /// Print the crop catalog
    Crops,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

pub fn render_presets(presets: &[PresetRegion]) -> String {
    let mut out = String::from("🌍 Preset regions:\n");
    for preset in presets {
        let _ = writeln!(
            out,
            "  • {} ({:.4}, {:.4})",
            preset.name, preset.latitude, preset.longitude
        );
    }
    out
}

pub fn render_crops(crops: &[&CropRecord]) -> String {
    crops
        .iter()
        .map(|crop| crop.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_recommendation(recommendation: &Recommendation) -> String {
    format!(
        "🌱 Recommended crops ({}):\n\n{}",
        recommendation.band,
        render_crops(&recommendation.crops)
    )
}

pub fn render_overview(
    environment: Option<&EnvironmentalSummary>,
    recommendation: Option<&Recommendation>,
) -> String {
    let mut out = String::new();
    if let Some(environment) = environment {
        let _ = writeln!(out, "{environment}");
    }
    match recommendation {
        Some(recommendation) => out.push_str(&render_recommendation(recommendation)),
        None => out.push_str("No recommendations available yet.\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crops::CropAdvisor;
    use crate::region::PRESET_REGIONS;

    #[test]
    fn test_parse_search_joins_words() {
        let cli = Cli::try_parse_from(["agrisphere", "search", "Nairobi,", "Kenya"]).unwrap();
        match cli.command {
            Commands::Search { query } => assert_eq!(query.join(" "), "Nairobi, Kenya"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_recommend_with_negative_temperature() {
        let cli = Cli::try_parse_from([
            "agrisphere",
            "--json",
            "recommend",
            "--temperature",
            "-4.5",
            "--precipitation",
            "1",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Recommend {
                temperature,
                precipitation,
                soil_moisture,
            } => {
                assert_eq!(temperature, -4.5);
                assert_eq!(precipitation, 1.0);
                assert_eq!(soil_moisture, 0.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_recommend_with_negative_values_everywhere() {
        let cli = Cli::try_parse_from([
            "agrisphere",
            "recommend",
            "-t",
            "-12",
            "-p",
            "-0.5",
            "--soil-moisture",
            "-3",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend {
                temperature,
                precipitation,
                soil_moisture,
            } => assert_eq!((temperature, precipitation, soil_moisture), (-12.0, -0.5, -3.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["agrisphere", "search"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["agrisphere", "serve", "--port", "9000", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve { port: Some(9000) }));
    }

    #[test]
    fn test_render_presets() {
        let text = render_presets(&PRESET_REGIONS);
        assert!(text.contains("  • Middle East (29.2985, 42.5510)"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_recommendation() {
        let text = render_recommendation(&CropAdvisor::recommend(32.0, 0.5, 10.0));
        assert!(text.starts_with("🌱 Recommended crops (Arid / desert):"));
        assert!(text.contains("Date Palm"));
        assert!(text.contains("Cactus Pear"));
    }

    #[test]
    fn test_render_overview_without_data() {
        assert_eq!(
            render_overview(None, None),
            "No recommendations available yet.\n"
        );
    }
}

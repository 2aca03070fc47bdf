//! Banded crop recommendation
//!
//! Maps an averaged (temperature, precipitation) pair onto one of a fixed set
//! of climate bands, each recommending a fixed subset of the catalog. Bands are
//! tried in priority order and the first match wins. Operators differ per band
//! and the bands do not tile the plane: inputs in the gaps, and any NaN
//! temperature, land on the fallback crop.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use super::catalog::{
    BARLEY, CACTUS_PEAR, CASSAVA, CHICKPEA, COWPEA, DATE_PALM, FABA_BEAN, KALE, LENTILS,
    PEARL_MILLET, PIGEON_PEA, POTATO, QUINOA, SORGHUM, SWEET_POTATO, TARO, TURNIP, YAM,
};
use crate::models::{CropRecord, EnvironmentalReading};

/// Upper bound on the number of cards shown
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Climate band a reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateBand {
    /// Above 30°C with under 1 mm/day
    Arid,
    /// 25-30°C with under 5 mm/day
    HotSemiArid,
    /// 20-25°C with 5-15 mm/day
    WarmHumid,
    /// 20-25°C with over 15 mm/day
    Tropical,
    /// 10-20°C with under 5 mm/day
    CoolDry,
    /// 10-20°C otherwise
    CoolTemperate,
    /// Below 10°C
    Cold,
    /// No band matched
    Unclassified,
}

impl ClimateBand {
    /// Classify a reading. Order matters: the first matching band wins.
    #[must_use]
    pub fn classify(temperature: f64, precipitation: f64) -> Self {
        if temperature > 30.0 && precipitation < 1.0 {
            Self::Arid
        } else if (25.0..=30.0).contains(&temperature) && precipitation < 5.0 {
            Self::HotSemiArid
        } else if (20.0..=25.0).contains(&temperature) && (5.0..=15.0).contains(&precipitation) {
            Self::WarmHumid
        } else if (20.0..=25.0).contains(&temperature) && precipitation > 15.0 {
            Self::Tropical
        } else if (10.0..20.0).contains(&temperature) {
            if precipitation < 5.0 {
                Self::CoolDry
            } else {
                Self::CoolTemperate
            }
        } else if temperature < 10.0 {
            Self::Cold
        } else {
            Self::Unclassified
        }
    }

    /// Crops recommended for this band, in display order
    #[must_use]
    pub fn crops(self) -> &'static [&'static CropRecord] {
        match self {
            Self::Arid => &[&DATE_PALM, &CACTUS_PEAR],
            Self::HotSemiArid => &[&SORGHUM, &PEARL_MILLET, &CHICKPEA],
            Self::WarmHumid => &[&COWPEA, &SWEET_POTATO, &PIGEON_PEA],
            Self::Tropical => &[&CASSAVA, &TARO, &YAM],
            Self::CoolDry => &[&BARLEY, &LENTILS],
            Self::CoolTemperate => &[&POTATO, &QUINOA, &FABA_BEAN],
            Self::Cold => &[&TURNIP, &KALE],
            Self::Unclassified => &[&SWEET_POTATO],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Arid => "Arid / desert",
            Self::HotSemiArid => "Hot semi-arid",
            Self::WarmHumid => "Warm, moderate rainfall",
            Self::Tropical => "Tropical, high rainfall",
            Self::CoolDry => "Cool & dry",
            Self::CoolTemperate => "Cool temperate",
            Self::Cold => "Cold",
            Self::Unclassified => "Unclassified (versatile fallback)",
        }
    }
}

impl Display for ClimateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub band: ClimateBand,
    pub crops: Vec<&'static CropRecord>,
}

impl Recommendation {
    #[must_use]
    pub fn crop_names(&self) -> Vec<&'static str> {
        self.crops.iter().map(|crop| crop.name).collect()
    }
}

/// Stateless crop recommender over the static catalog
pub struct CropAdvisor;

impl CropAdvisor {
    /// Recommend crops for a temperature (°C) and precipitation (mm/day).
    ///
    /// Soil moisture is accepted for interface parity with the reading but
    /// does not influence the result. Never fails and never returns an empty
    /// list.
    #[must_use]
    pub fn recommend(temperature: f64, precipitation: f64, soil_moisture: f64) -> Recommendation {
        let band = ClimateBand::classify(temperature, precipitation);
        debug!(
            temperature,
            precipitation, soil_moisture, %band, "Classified environmental reading"
        );

        let crops = band
            .crops()
            .iter()
            .copied()
            .take(MAX_RECOMMENDATIONS)
            .collect();

        Recommendation { band, crops }
    }

    #[must_use]
    pub fn recommend_for(reading: &EnvironmentalReading) -> Recommendation {
        Self::recommend(reading.temperature, reading.precipitation, reading.soil_moisture)
    }
}

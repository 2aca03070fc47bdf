//! Environmental reading model and display methods

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RegionSelection;

/// Averaged climate values for a region, the classifier's input
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnvironmentalReading {
    /// Mean air temperature at 2m in Celsius
    pub temperature: f64,
    /// Mean precipitation in mm/day
    pub precipitation: f64,
    /// Mean relative humidity in percent, used as a soil moisture proxy
    pub soil_moisture: f64,
}

impl EnvironmentalReading {
    #[must_use]
    pub fn new(temperature: f64, precipitation: f64, soil_moisture: f64) -> Self {
        Self {
            temperature,
            precipitation,
            soil_moisture,
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format_measure(self.temperature, |v| format!("{v:.1}°C"))
    }

    /// Format daily precipitation with unit
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        format_measure(self.precipitation, |v| format!("{v:.1} mm"))
    }

    /// Format soil moisture as a percentage
    #[must_use]
    pub fn format_soil_moisture(&self) -> String {
        format_measure(self.soil_moisture, |v| format!("{v:.1}%"))
    }
}

/// Non-finite values mean the series had no usable samples
fn format_measure(value: f64, format: impl Fn(f64) -> String) -> String {
    if value.is_finite() {
        format(value)
    } else {
        "--".to_string()
    }
}

/// Inclusive date range the daily series are requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ObservationPeriod {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Dates in the compact `YYYYMMDD` form used by NASA POWER
    #[must_use]
    pub fn compact_bounds(&self) -> (String, String) {
        (
            self.start.format("%Y%m%d").to_string(),
            self.end.format("%Y%m%d").to_string(),
        )
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl Default for ObservationPeriod {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid calendar date"),
        }
    }
}

/// Everything loaded for one region selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalSummary {
    pub region: RegionSelection,
    pub period: ObservationPeriod,
    pub reading: EnvironmentalReading,
    /// Placeholder NDVI estimate, not measured data
    pub vegetation_index: f64,
}

impl EnvironmentalSummary {
    #[must_use]
    pub fn format_vegetation_index(&self) -> String {
        format_measure(self.vegetation_index, |v| format!("{v:.2}"))
    }
}

impl Display for EnvironmentalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Environmental Analysis for {} ({})",
            self.region.display_name,
            self.region.format_coordinates()
        )?;
        writeln!(f, "   🌡️ Temperature:      {:>10}  Average temperature", self.reading.format_temperature())?;
        writeln!(f, "   ☁️ Precipitation:    {:>10}  Daily average", self.reading.format_precipitation())?;
        writeln!(f, "   💧 Soil Moisture:    {:>10}  Relative humidity", self.reading.format_soil_moisture())?;
        writeln!(f, "   🌱 Vegetation Index: {:>10}  NDVI estimate (placeholder)", self.format_vegetation_index())?;
        Ok(())
    }
}

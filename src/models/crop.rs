//! Crop record model and its card rendering

use std::fmt::Display;

use serde::Serialize;

/// A crop entry compiled into the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRecord {
    /// Common name, unique within the catalog
    pub name: &'static str,
    pub scientific_name: &'static str,
    /// Climate label shown as a badge
    pub climate: &'static str,
    pub water_requirement: &'static str,
    pub growing_season: &'static str,
    pub nutritional_value: &'static [&'static str],
    pub challenges: &'static [&'static str],
    /// Single glyph used as the card image
    pub image: &'static str,
}

impl Display for CropRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {} ({}) [{}]", self.image, self.name, self.scientific_name, self.climate)?;
        writeln!(f, "   💧 Water: {}", self.water_requirement)?;
        writeln!(f, "   ☀️ Season: {}", self.growing_season)?;
        writeln!(f, "   🌱 Nutritional Benefits: {}", self.nutritional_value.join(", "))?;
        writeln!(f, "   ⚠️ Common Challenges:")?;
        for challenge in self.challenges {
            writeln!(f, "      • {challenge}")?;
        }
        Ok(())
    }
}

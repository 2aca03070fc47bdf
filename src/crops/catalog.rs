//! Static crop catalog
//!
//! Every record a climate band can recommend, plus the fallback crop. The
//! catalog never changes at runtime.

use crate::models::CropRecord;

pub const DATE_PALM: CropRecord = CropRecord {
    name: "Date Palm",
    scientific_name: "Phoenix dactylifera",
    climate: "Hot desert",
    water_requirement: "Low, deep irrigation (1000-1500mm in oases)",
    growing_season: "4-7 years to first harvest, perennial",
    nutritional_value: &["Natural sugars", "Potassium", "Dietary fiber"],
    challenges: &["Red palm weevil", "Bayoud disease"],
    image: "🌴",
};

pub const CACTUS_PEAR: CropRecord = CropRecord {
    name: "Cactus Pear",
    scientific_name: "Opuntia ficus-indica",
    climate: "Arid",
    water_requirement: "Very Low (150-400mm)",
    growing_season: "2-3 years to fruiting, perennial",
    nutritional_value: &["Vitamin C", "Magnesium", "Antioxidants"],
    challenges: &["Cochineal insects", "Frost damage"],
    image: "🌵",
};

pub const SORGHUM: CropRecord = CropRecord {
    name: "Sorghum",
    scientific_name: "Sorghum bicolor",
    climate: "Hot & Dry",
    water_requirement: "Low (400-600mm annually)",
    growing_season: "3-4 months",
    nutritional_value: &["High in protein", "Rich in fiber", "Iron source"],
    challenges: &["Birds", "Stem borers"],
    image: "🌾",
};

pub const PEARL_MILLET: CropRecord = CropRecord {
    name: "Pearl Millet",
    scientific_name: "Pennisetum glaucum",
    climate: "Arid to Semi-arid",
    water_requirement: "Very Low (200-400mm)",
    growing_season: "2-3 months",
    nutritional_value: &["High iron", "Protein-rich", "Gluten-free"],
    challenges: &["Downy mildew", "Drought stress"],
    image: "🌿",
};

pub const CHICKPEA: CropRecord = CropRecord {
    name: "Chickpea",
    scientific_name: "Cicer arietinum",
    climate: "Semi-arid",
    water_requirement: "Low (300-500mm)",
    growing_season: "3-5 months",
    nutritional_value: &["Plant protein", "Folate", "Fiber"],
    challenges: &["Pod borer", "Fusarium wilt"],
    image: "🫛",
};

pub const COWPEA: CropRecord = CropRecord {
    name: "Cowpea",
    scientific_name: "Vigna unguiculata",
    climate: "Warm & Moderate rainfall",
    water_requirement: "Moderate (500-800mm)",
    growing_season: "2-3 months",
    nutritional_value: &["High protein", "Vitamins A & C", "Calcium"],
    challenges: &["Aphids", "Root rot"],
    image: "🫘",
};

pub const SWEET_POTATO: CropRecord = CropRecord {
    name: "Sweet Potato",
    scientific_name: "Ipomoea batatas",
    climate: "Warm, adaptable",
    water_requirement: "Moderate (500-1000mm)",
    growing_season: "3-4 months",
    nutritional_value: &["Vitamin A", "Fiber", "Antioxidants"],
    challenges: &["Weevils", "Viral diseases"],
    image: "🍠",
};

pub const PIGEON_PEA: CropRecord = CropRecord {
    name: "Pigeon Pea",
    scientific_name: "Cajanus cajan",
    climate: "Warm & Seasonal rainfall",
    water_requirement: "Moderate (600-1000mm)",
    growing_season: "4-6 months",
    nutritional_value: &["Protein", "B vitamins", "Potassium"],
    challenges: &["Pod fly", "Sterility mosaic"],
    image: "🌱",
};

pub const CASSAVA: CropRecord = CropRecord {
    name: "Cassava",
    scientific_name: "Manihot esculenta",
    climate: "Tropical to subtropical",
    water_requirement: "Moderate",
    growing_season: "8-12 months",
    nutritional_value: &["Carbohydrates", "Vitamin C", "Potassium"],
    challenges: &["Cassava mosaic disease", "Mealybugs"],
    image: "🥔",
};

pub const TARO: CropRecord = CropRecord {
    name: "Taro",
    scientific_name: "Colocasia esculenta",
    climate: "Humid tropical",
    water_requirement: "High (1500-2500mm)",
    growing_season: "7-12 months",
    nutritional_value: &["Complex carbohydrates", "Vitamin E", "Manganese"],
    challenges: &["Taro leaf blight", "Corm rot"],
    image: "🍃",
};

pub const YAM: CropRecord = CropRecord {
    name: "Yam",
    scientific_name: "Dioscorea rotundata",
    climate: "Wet tropical",
    water_requirement: "High (1000-1500mm)",
    growing_season: "8-11 months",
    nutritional_value: &["Carbohydrates", "Vitamin B6", "Potassium"],
    challenges: &["Yam nematodes", "Anthracnose"],
    image: "🍠",
};

pub const BARLEY: CropRecord = CropRecord {
    name: "Barley",
    scientific_name: "Hordeum vulgare",
    climate: "Cool & Dry",
    water_requirement: "Low (250-500mm)",
    growing_season: "3-4 months",
    nutritional_value: &["Beta-glucan fiber", "Selenium", "B vitamins"],
    challenges: &["Rust", "Aphids"],
    image: "🌾",
};

pub const LENTILS: CropRecord = CropRecord {
    name: "Lentils",
    scientific_name: "Lens culinaris",
    climate: "Cool semi-arid",
    water_requirement: "Low (300-450mm)",
    growing_season: "3-4 months",
    nutritional_value: &["Protein", "Iron", "Folate"],
    challenges: &["Ascochyta blight", "Weeds"],
    image: "🫘",
};

pub const POTATO: CropRecord = CropRecord {
    name: "Potato",
    scientific_name: "Solanum tuberosum",
    climate: "Cool & Moist",
    water_requirement: "Moderate (500-700mm)",
    growing_season: "3-5 months",
    nutritional_value: &["Vitamin C", "Potassium", "Vitamin B6"],
    challenges: &["Late blight", "Colorado potato beetle"],
    image: "🥔",
};

pub const QUINOA: CropRecord = CropRecord {
    name: "Quinoa",
    scientific_name: "Chenopodium quinoa",
    climate: "Cool highland",
    water_requirement: "Low to Moderate (300-700mm)",
    growing_season: "4-6 months",
    nutritional_value: &["Complete protein", "Magnesium", "Gluten-free"],
    challenges: &["Downy mildew", "Saponin processing"],
    image: "🌾",
};

pub const FABA_BEAN: CropRecord = CropRecord {
    name: "Faba Bean",
    scientific_name: "Vicia faba",
    climate: "Cool temperate",
    water_requirement: "Moderate (650-1000mm)",
    growing_season: "4-5 months",
    nutritional_value: &["Protein", "Folate", "Manganese"],
    challenges: &["Chocolate spot", "Black bean aphid"],
    image: "🫛",
};

pub const TURNIP: CropRecord = CropRecord {
    name: "Turnip",
    scientific_name: "Brassica rapa subsp. rapa",
    climate: "Cold tolerant",
    water_requirement: "Moderate (400-600mm)",
    growing_season: "2-3 months",
    nutritional_value: &["Vitamin C", "Fiber", "Calcium"],
    challenges: &["Flea beetles", "Clubroot"],
    image: "🥬",
};

pub const KALE: CropRecord = CropRecord {
    name: "Kale",
    scientific_name: "Brassica oleracea var. sabellica",
    climate: "Cold hardy",
    water_requirement: "Moderate (400-700mm)",
    growing_season: "2-3 months",
    nutritional_value: &["Vitamin K", "Vitamin A", "Calcium"],
    challenges: &["Cabbage worms", "Aphids"],
    image: "🥬",
};

/// All records, in band order with the fallback crop inside the warm band
pub static CATALOG: [&CropRecord; 18] = [
    &DATE_PALM,
    &CACTUS_PEAR,
    &SORGHUM,
    &PEARL_MILLET,
    &CHICKPEA,
    &COWPEA,
    &SWEET_POTATO,
    &PIGEON_PEA,
    &CASSAVA,
    &TARO,
    &YAM,
    &BARLEY,
    &LENTILS,
    &POTATO,
    &QUINOA,
    &FABA_BEAN,
    &TURNIP,
    &KALE,
];

/// Looks a record up by its common name, ignoring case and outer whitespace
#[must_use]
pub fn find(name: &str) -> Option<&'static CropRecord> {
    let name = name.trim();
    CATALOG
        .iter()
        .copied()
        .find(|crop| crop.name.eq_ignore_ascii_case(name))
}

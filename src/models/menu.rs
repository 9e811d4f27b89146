use serde::{Deserialize, Serialize};

use crate::models::{Situation, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieClass {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fullness {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookTime {
    Fast,
    Normal,
}

/// Weather conditions a dish is especially good for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAffinity {
    #[serde(default)]
    pub hot: bool,

    #[serde(default)]
    pub cold: bool,

    #[serde(default)]
    pub rainy: bool,
}

/// A catalog entry.
///
/// Read-only once the catalog is built; the engine only ever borrows these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier, unique within a catalog.
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub emoji: String,

    /// Cuisine type, e.g. "korean" or "western".
    pub category: String,

    pub calories: CalorieClass,

    pub fullness: Fullness,

    #[serde(default)]
    pub has_soup: bool,

    #[serde(default)]
    pub is_spicy: bool,

    #[serde(default)]
    pub is_cold: bool,

    #[serde(default)]
    pub weather: WeatherAffinity,

    /// Slots the dish may be served in. Never empty in a valid catalog.
    pub time_slots: Vec<TimeSlot>,

    #[serde(default)]
    pub situations: Vec<Situation>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub cook_time: CookTime,
}

impl MenuItem {
    #[inline]
    pub fn serves(&self, slot: TimeSlot) -> bool {
        self.time_slots.contains(&slot)
    }

    #[inline]
    pub fn suits(&self, situation: &Situation) -> bool {
        self.situations.contains(situation)
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Name with its emoji, for display.
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.emoji, self.name)
        }
    }
}

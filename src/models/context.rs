use std::fmt;
use std::str::FromStr;

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::models::WeatherReading;

/// Meal slot of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    Morning,
    Lunch,
    Evening,
    LateNight,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Lunch,
        TimeSlot::Evening,
        TimeSlot::LateNight,
    ];

    /// Slot for a wall-clock hour (0-23).
    ///
    /// [5,10) morning, [10,15) lunch, [15,21) evening, everything else late night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=9 => TimeSlot::Morning,
            10..=14 => TimeSlot::Lunch,
            15..=20 => TimeSlot::Evening,
            _ => TimeSlot::LateNight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Lunch => "lunch",
            TimeSlot::Evening => "evening",
            TimeSlot::LateNight => "late-night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "morning" | "breakfast" => Ok(TimeSlot::Morning),
            "lunch" => Ok(TimeSlot::Lunch),
            "evening" | "dinner" => Ok(TimeSlot::Evening),
            "late-night" | "latenight" | "night" => Ok(TimeSlot::LateNight),
            other => Err(MenuError::InvalidInput(format!("Unknown time slot: {}", other))),
        }
    }
}

/// Slot for the current local time.
pub fn current_time_slot() -> TimeSlot {
    TimeSlot::from_hour(Local::now().hour())
}

/// Self-reported dining situation.
///
/// Tags outside the known set are kept as `Other` so they can still match
/// catalog entries that list them, but they never earn situation bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Situation {
    Solo,
    Family,
    Gathering,
    Date,
    Diet,
    Hearty,
    Quick,
    Other(String),
}

impl Situation {
    pub const KNOWN: [Situation; 7] = [
        Situation::Solo,
        Situation::Family,
        Situation::Gathering,
        Situation::Date,
        Situation::Diet,
        Situation::Hearty,
        Situation::Quick,
    ];

    /// Parse a tag. Never fails: unknown tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "solo" => Situation::Solo,
            "family" => Situation::Family,
            "gathering" => Situation::Gathering,
            "date" => Situation::Date,
            "diet" => Situation::Diet,
            "hearty" => Situation::Hearty,
            "quick" => Situation::Quick,
            _ => Situation::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Situation::Solo => "solo",
            Situation::Family => "family",
            Situation::Gathering => "gathering",
            Situation::Date => "date",
            Situation::Diet => "diet",
            Situation::Hearty => "hearty",
            Situation::Quick => "quick",
            Situation::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Situation::Other(_))
    }
}

impl Default for Situation {
    fn default() -> Self {
        Situation::Solo
    }
}

impl From<String> for Situation {
    fn from(tag: String) -> Self {
        Situation::from_tag(&tag)
    }
}

impl From<Situation> for String {
    fn from(situation: Situation) -> Self {
        situation.as_str().to_string()
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a single ranking call looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationContext {
    pub weather: WeatherReading,
    pub time_slot: TimeSlot,
    pub situation: Situation,
}

impl RecommendationContext {
    pub fn new(weather: WeatherReading, time_slot: TimeSlot, situation: Situation) -> Self {
        Self {
            weather,
            time_slot,
            situation,
        }
    }

    /// At or above the hot threshold.
    pub fn is_hot(&self) -> bool {
        self.weather.temperature >= crate::engine::constants::HOT_THRESHOLD_C
    }

    /// At or below the cold threshold.
    pub fn is_cold(&self) -> bool {
        self.weather.temperature <= crate::engine::constants::COLD_THRESHOLD_C
    }

    /// Any precipitation at all.
    pub fn is_rainy(&self) -> bool {
        self.weather.precipitation.is_wet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Precipitation, Sky};

    #[test]
    fn test_time_slot_boundaries() {
        assert_eq!(TimeSlot::from_hour(4), TimeSlot::LateNight);
        assert_eq!(TimeSlot::from_hour(5), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_hour(9), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_hour(10), TimeSlot::Lunch);
        assert_eq!(TimeSlot::from_hour(14), TimeSlot::Lunch);
        assert_eq!(TimeSlot::from_hour(15), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_hour(20), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_hour(21), TimeSlot::LateNight);
        assert_eq!(TimeSlot::from_hour(0), TimeSlot::LateNight);
        assert_eq!(TimeSlot::from_hour(23), TimeSlot::LateNight);
    }

    #[test]
    fn test_time_slot_parse() {
        assert_eq!("late_night".parse::<TimeSlot>().unwrap(), TimeSlot::LateNight);
        assert_eq!("Lunch".parse::<TimeSlot>().unwrap(), TimeSlot::Lunch);
        assert!("brunch".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_time_slot_serde_kebab() {
        let json = serde_json::to_string(&TimeSlot::LateNight).unwrap();
        assert_eq!(json, "\"late-night\"");
    }

    #[test]
    fn test_situation_unknown_tag_is_kept() {
        let situation = Situation::from_tag("Brunch");
        assert_eq!(situation, Situation::Other("brunch".to_string()));
        assert!(!situation.is_known());
        assert_eq!(Situation::from_tag(" DIET "), Situation::Diet);
    }

    #[test]
    fn test_situation_serde_as_string() {
        let json = serde_json::to_string(&Situation::Gathering).unwrap();
        assert_eq!(json, "\"gathering\"");
        let parsed: Situation = serde_json::from_str("\"picnic\"").unwrap();
        assert_eq!(parsed, Situation::Other("picnic".to_string()));
    }

    #[test]
    fn test_context_thresholds() {
        let mut weather = WeatherReading::new(28.0, Sky::Clear, Precipitation::None, 40.0);
        let ctx = RecommendationContext::new(weather, TimeSlot::Lunch, Situation::Solo);
        assert!(ctx.is_hot());
        assert!(!ctx.is_cold());
        assert!(!ctx.is_rainy());

        weather.temperature = 10.0;
        weather.precipitation = Precipitation::Sleet;
        let ctx = RecommendationContext::new(weather, TimeSlot::Lunch, Situation::Solo);
        assert!(ctx.is_cold());
        assert!(ctx.is_rainy());
    }
}

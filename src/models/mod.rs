pub mod context;
pub mod menu;
pub mod scored;
pub mod weather;

pub use context::{current_time_slot, RecommendationContext, Situation, TimeSlot};
pub use menu::{CalorieClass, CookTime, Fullness, MenuItem, WeatherAffinity};
pub use scored::ScoredMenuItem;
pub use weather::{Precipitation, Sky, WeatherReading};

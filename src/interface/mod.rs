pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_csv, write_json};
pub use prompts::{
    collect_weather, prompt_precipitation, prompt_situation, prompt_temperature, prompt_yes_no,
    resolve_situation,
};
pub use render::{
    display_catalog, display_context, display_recommendations, time_slot_emoji,
    weather_description, weather_emoji,
};

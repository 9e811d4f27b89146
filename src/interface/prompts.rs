use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::{Precipitation, Situation, Sky, WeatherReading};
use crate::weather::{SeasonalWeather, WeatherProvider};

/// Minimum similarity for a typo to count as a known situation.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Resolve free text to a situation, tolerating typos.
///
/// Exact (case-insensitive) tags win; otherwise the closest known tag above
/// the similarity threshold is used. Anything else is kept verbatim.
pub fn resolve_situation(input: &str) -> Situation {
    let exact = Situation::from_tag(input);
    if exact.is_known() {
        return exact;
    }

    let needle = input.trim().to_lowercase();
    Situation::KNOWN
        .iter()
        .map(|s| (s, jaro_winkler(s.as_str(), &needle)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(s, _)| s.clone())
        .unwrap_or(exact)
}

/// Prompt for the dining situation.
pub fn prompt_situation(default: &Situation) -> Result<Situation> {
    let options: Vec<&str> = Situation::KNOWN.iter().map(|s| s.as_str()).collect();
    let default_idx = Situation::KNOWN
        .iter()
        .position(|s| s == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What's the situation?")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Situation::KNOWN[selection].clone())
}

/// Prompt for the current temperature.
pub fn prompt_temperature(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Temperature outside (°C)?")
        .default(default.to_string())
        .interact_text()?;

    let temperature: f64 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid temperature".to_string()))?;
    if !temperature.is_finite() {
        return Err(MenuError::InvalidInput("Invalid temperature".to_string()));
    }
    Ok(temperature)
}

/// Prompt for precipitation.
pub fn prompt_precipitation() -> Result<Precipitation> {
    let options = [
        Precipitation::None,
        Precipitation::Rain,
        Precipitation::Snow,
        Precipitation::Sleet,
    ];
    let labels: Vec<&str> = options.iter().map(|p| p.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Any precipitation?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask for the weather, or fall back to a seasonal estimate.
pub fn collect_weather(seasonal: &SeasonalWeather) -> Result<WeatherReading> {
    let estimate = seasonal.reading();

    let enter = prompt_yes_no(
        &format!(
            "Enter the weather yourself? (otherwise {}°C, clear)",
            estimate.temperature
        ),
        false,
    )?;
    if !enter {
        return Ok(estimate);
    }

    let temperature = prompt_temperature(estimate.temperature)?;
    let precipitation = prompt_precipitation()?;

    let humidity = match precipitation {
        Precipitation::None => estimate.humidity,
        _ => 85.0,
    };
    let sky = match precipitation {
        Precipitation::None => Sky::Clear,
        _ => Sky::from_humidity(humidity),
    };

    WeatherReading::new(temperature, sky, precipitation, humidity).validate()
}

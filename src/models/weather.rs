use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Sky condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sky {
    Clear,
    Cloudy,
    Overcast,
}

impl Sky {
    /// Estimate the sky from relative humidity.
    ///
    /// Current-conditions feeds often carry no sky field, so humidity stands in:
    /// above 80% is overcast, above 60% is cloudy, anything else is clear.
    pub fn from_humidity(humidity: f64) -> Self {
        if humidity > 80.0 {
            Sky::Overcast
        } else if humidity > 60.0 {
            Sky::Cloudy
        } else {
            Sky::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sky::Clear => "clear",
            Sky::Cloudy => "cloudy",
            Sky::Overcast => "overcast",
        }
    }
}

impl fmt::Display for Sky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sky {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clear" => Ok(Sky::Clear),
            "cloudy" => Ok(Sky::Cloudy),
            "overcast" => Ok(Sky::Overcast),
            other => Err(MenuError::InvalidInput(format!("Unknown sky condition: {}", other))),
        }
    }
}

/// Precipitation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precipitation {
    None,
    Rain,
    Snow,
    Sleet,
}

impl Precipitation {
    /// Decode a weather-service precipitation code.
    ///
    /// 1 rain, 2 rain/snow, 5 drizzle, 6 drizzle/flurries map to rain;
    /// 3 snow and 7 flurries map to snow; everything else is none.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 | 2 | 5 | 6 => Precipitation::Rain,
            3 | 7 => Precipitation::Snow,
            _ => Precipitation::None,
        }
    }

    pub fn is_wet(&self) -> bool {
        *self != Precipitation::None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Precipitation::None => "none",
            Precipitation::Rain => "rain",
            Precipitation::Snow => "snow",
            Precipitation::Sleet => "sleet",
        }
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precipitation {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "dry" => Ok(Precipitation::None),
            "rain" => Ok(Precipitation::Rain),
            "snow" => Ok(Precipitation::Snow),
            "sleet" => Ok(Precipitation::Sleet),
            other => Err(MenuError::InvalidInput(format!(
                "Unknown precipitation: {}",
                other
            ))),
        }
    }
}

/// A single weather observation as handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in °C.
    pub temperature: f64,

    pub sky: Sky,

    pub precipitation: Precipitation,

    /// Relative humidity, 0-100.
    pub humidity: f64,
}

impl WeatherReading {
    pub fn new(temperature: f64, sky: Sky, precipitation: Precipitation, humidity: f64) -> Self {
        Self {
            temperature,
            sky,
            precipitation,
            humidity,
        }
    }

    /// Build a reading from a raw current-conditions observation.
    pub fn from_observation(temperature: f64, precipitation_code: u8, humidity: f64) -> Self {
        Self {
            temperature,
            sky: Sky::from_humidity(humidity),
            precipitation: Precipitation::from_code(precipitation_code),
            humidity,
        }
    }

    /// Reject readings outside the model's ranges: the temperature must be
    /// finite and humidity within 0-100.
    pub fn validate(self) -> Result<Self, MenuError> {
        if !self.temperature.is_finite() {
            return Err(MenuError::InvalidInput(format!(
                "temperature must be a number, got {}",
                self.temperature
            )));
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(MenuError::InvalidInput(format!(
                "humidity must be between 0 and 100, got {}",
                self.humidity
            )));
        }
        Ok(self)
    }
}

impl Default for WeatherReading {
    /// Mild, dry, clear day.
    fn default() -> Self {
        Self {
            temperature: 20.0,
            sky: Sky::Clear,
            precipitation: Precipitation::None,
            humidity: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky_from_humidity() {
        assert_eq!(Sky::from_humidity(50.0), Sky::Clear);
        assert_eq!(Sky::from_humidity(60.0), Sky::Clear);
        assert_eq!(Sky::from_humidity(61.0), Sky::Cloudy);
        assert_eq!(Sky::from_humidity(80.0), Sky::Cloudy);
        assert_eq!(Sky::from_humidity(95.0), Sky::Overcast);
    }

    #[test]
    fn test_precipitation_from_code() {
        assert_eq!(Precipitation::from_code(0), Precipitation::None);
        for code in [1, 2, 5, 6] {
            assert_eq!(Precipitation::from_code(code), Precipitation::Rain);
        }
        assert_eq!(Precipitation::from_code(3), Precipitation::Snow);
        assert_eq!(Precipitation::from_code(7), Precipitation::Snow);
        assert_eq!(Precipitation::from_code(4), Precipitation::None);
    }

    #[test]
    fn test_from_observation() {
        let reading = WeatherReading::from_observation(3.5, 3, 85.0);
        assert_eq!(reading.sky, Sky::Overcast);
        assert_eq!(reading.precipitation, Precipitation::Snow);
        assert!(reading.precipitation.is_wet());
    }

    #[test]
    fn test_validate_ranges() {
        let ok = WeatherReading::new(-12.0, Sky::Clear, Precipitation::Snow, 100.0);
        assert_eq!(ok.validate().unwrap(), ok);
        assert!(WeatherReading::new(20.0, Sky::Clear, Precipitation::None, 0.0)
            .validate()
            .is_ok());

        for humidity in [-1.0, 100.5, f64::NAN] {
            let bad = WeatherReading::new(20.0, Sky::Clear, Precipitation::None, humidity);
            assert!(matches!(bad.validate(), Err(MenuError::InvalidInput(_))));
        }

        let bad = WeatherReading::new(f64::INFINITY, Sky::Clear, Precipitation::None, 50.0);
        assert!(matches!(bad.validate(), Err(MenuError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Rain".parse::<Precipitation>().unwrap(), Precipitation::Rain);
        assert_eq!(" CLOUDY ".parse::<Sky>().unwrap(), Sky::Cloudy);
        assert!("hail".parse::<Precipitation>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let reading = WeatherReading::default();
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"clear\""));
        assert!(json.contains("\"none\""));
    }
}

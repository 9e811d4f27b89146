use chrono::{Datelike, Local};
use tracing::debug;

use crate::models::{Precipitation, Sky, WeatherReading};

/// Anything that can hand the engine a weather reading.
///
/// Providers never fail outward: when their source is unavailable they
/// degrade to a fallback reading on their own.
pub trait WeatherProvider {
    fn reading(&self) -> WeatherReading;
}

/// Returns the same reading every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWeather(pub WeatherReading);

impl WeatherProvider for FixedWeather {
    fn reading(&self) -> WeatherReading {
        self.0
    }
}

/// Season-based estimate used when no live source is configured.
///
/// Spring and autumn are 15°C, summer 28°C, winter 0°C; always clear,
/// dry and 50% humidity.
#[derive(Debug, Clone, Copy)]
pub struct SeasonalWeather {
    /// Month of the year, 1-12.
    month: u32,
}

impl SeasonalWeather {
    pub fn new(month: u32) -> Self {
        Self { month }
    }

    /// Estimate for the current local month.
    pub fn now() -> Self {
        Self::new(Local::now().month())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Temperature estimate for the configured month.
    pub fn temperature(&self) -> f64 {
        match self.month {
            3..=5 => 15.0,
            6..=8 => 28.0,
            9..=11 => 15.0,
            _ => 0.0,
        }
    }
}

impl WeatherProvider for SeasonalWeather {
    fn reading(&self) -> WeatherReading {
        let reading = WeatherReading::new(self.temperature(), Sky::Clear, Precipitation::None, 50.0);
        debug!(month = self.month, temperature = reading.temperature, "using seasonal weather");
        reading
    }
}

/// Tries a primary provider and falls back when it has nothing.
pub struct FallbackWeather<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackWeather<P, F>
where
    P: Fn() -> Option<WeatherReading>,
    F: WeatherProvider,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> WeatherProvider for FallbackWeather<P, F>
where
    P: Fn() -> Option<WeatherReading>,
    F: WeatherProvider,
{
    fn reading(&self) -> WeatherReading {
        match (self.primary)() {
            Some(reading) => reading,
            None => {
                debug!("primary weather source unavailable, falling back");
                self.fallback.reading()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonal_temperatures() {
        assert_eq!(SeasonalWeather::new(1).temperature(), 0.0);
        assert_eq!(SeasonalWeather::new(3).temperature(), 15.0);
        assert_eq!(SeasonalWeather::new(5).temperature(), 15.0);
        assert_eq!(SeasonalWeather::new(6).temperature(), 28.0);
        assert_eq!(SeasonalWeather::new(8).temperature(), 28.0);
        assert_eq!(SeasonalWeather::new(9).temperature(), 15.0);
        assert_eq!(SeasonalWeather::new(11).temperature(), 15.0);
        assert_eq!(SeasonalWeather::new(12).temperature(), 0.0);
    }

    #[test]
    fn test_seasonal_reading_shape() {
        let reading = SeasonalWeather::new(7).reading();
        assert_eq!(reading.sky, Sky::Clear);
        assert_eq!(reading.precipitation, Precipitation::None);
        assert_eq!(reading.humidity, 50.0);
    }

    #[test]
    fn test_now_uses_valid_month() {
        let month = SeasonalWeather::now().month();
        assert!((1..=12).contains(&month));
    }

    #[test]
    fn test_fixed_weather() {
        let reading = WeatherReading::new(-4.0, Sky::Overcast, Precipitation::Snow, 90.0);
        assert_eq!(FixedWeather(reading).reading(), reading);
    }

    #[test]
    fn test_fallback_weather() {
        let live = WeatherReading::new(31.0, Sky::Clear, Precipitation::None, 40.0);
        let up = FallbackWeather::new(|| Some(live), SeasonalWeather::new(1));
        assert_eq!(up.reading(), live);

        let down = FallbackWeather::new(|| None::<WeatherReading>, SeasonalWeather::new(1));
        assert_eq!(down.reading().temperature, 0.0);
    }
}

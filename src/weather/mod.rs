mod providers;

pub use providers::{FallbackWeather, FixedWeather, SeasonalWeather, WeatherProvider};

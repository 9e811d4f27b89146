use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::DEFAULT_RECOMMEND_COUNT;
use crate::error::Result;
use crate::models::{Precipitation, Sky, TimeSlot, WeatherReading};
use crate::weather::{FallbackWeather, WeatherProvider};

/// WeatherMenu: picks what to eat from the weather, the time of day, and who you're with.
#[derive(Parser, Debug)]
#[command(name = "weather_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a menu catalog JSON file (defaults to the built-in menu).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend menu items for the given conditions.
    Recommend(RecommendArgs),

    /// Answer a few questions and get recommendations.
    Interactive,

    /// List catalog items.
    Catalog {
        /// Only show items served in this time slot.
        #[arg(long)]
        slot: Option<TimeSlot>,
    },
}

#[derive(clap::Args, Debug)]
pub struct RecommendArgs {
    /// Temperature in °C. Without it a seasonal estimate is used.
    #[arg(long, allow_negative_numbers = true)]
    pub temp: Option<f64>,

    /// Sky condition: clear, cloudy, overcast.
    #[arg(long)]
    pub sky: Option<Sky>,

    /// Precipitation: none, rain, snow, sleet.
    #[arg(long, default_value = "none")]
    pub precip: Precipitation,

    /// Relative humidity (0-100).
    #[arg(long, default_value = "50", allow_negative_numbers = true)]
    pub humidity: f64,

    /// Time slot: morning, lunch, evening, late-night. Defaults to the clock.
    #[arg(long)]
    pub slot: Option<TimeSlot>,

    /// Situation: solo, family, gathering, date, diet, hearty, quick.
    #[arg(long, default_value = "solo")]
    pub situation: String,

    /// Number of items to return.
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECOMMEND_COUNT)]
    pub count: usize,

    /// Seed the jitter for reproducible results.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable jitter entirely.
    #[arg(long, conflicts_with = "seed")]
    pub no_jitter: bool,

    /// Show the scoring rules behind each item.
    #[arg(long)]
    pub explain: bool,

    /// Also write results to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Also write results to this JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl RecommendArgs {
    /// Weather described by the flags.
    ///
    /// Only a missing `--temp` is taken from `fallback`; sky, precipitation
    /// and humidity always come from the flags. Sky defaults to an estimate
    /// from humidity.
    pub fn weather<F: WeatherProvider>(&self, fallback: F) -> Result<WeatherReading> {
        let temp = self.temp;
        let temperature = FallbackWeather::new(
            move || {
                temp.map(|temperature| WeatherReading {
                    temperature,
                    ..WeatherReading::default()
                })
            },
            fallback,
        )
        .reading()
        .temperature;

        let sky = self.sky.unwrap_or_else(|| Sky::from_humidity(self.humidity));
        WeatherReading::new(temperature, sky, self.precip, self.humidity).validate()
    }
}

impl Default for RecommendArgs {
    fn default() -> Self {
        Self {
            temp: None,
            sky: None,
            precip: Precipitation::None,
            humidity: 50.0,
            slot: None,
            situation: "solo".to_string(),
            count: DEFAULT_RECOMMEND_COUNT,
            seed: None,
            no_jitter: false,
            explain: false,
            csv: None,
            json: None,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend(RecommendArgs::default())
    }
}

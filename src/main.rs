use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use weather_menu_rs::catalog::{load_catalog, Catalog};
use weather_menu_rs::cli::{Cli, Command, RecommendArgs};
use weather_menu_rs::engine::{EngineConfig, NoJitter, RandomJitter, Recommender};
use weather_menu_rs::error::Result;
use weather_menu_rs::interface::{
    collect_weather, display_catalog, display_context, display_recommendations,
    prompt_situation, prompt_yes_no, resolve_situation, write_csv, write_json,
};
use weather_menu_rs::models::{current_time_slot, RecommendationContext, Situation, TimeSlot};
use weather_menu_rs::weather::SeasonalWeather;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin()?,
    };
    debug!(items = catalog.len(), "catalog ready");

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend(args) => cmd_recommend(catalog, &args),
        Command::Interactive => cmd_interactive(catalog),
        Command::Catalog { slot } => {
            display_catalog(&catalog, slot);
            Ok(())
        }
    }
}

/// Recommend once from command-line conditions.
fn cmd_recommend(catalog: Catalog, args: &RecommendArgs) -> Result<()> {
    let ctx = RecommendationContext::new(
        args.weather(SeasonalWeather::now())?,
        args.slot.unwrap_or_else(current_time_slot),
        resolve_situation(&args.situation),
    );

    let recommender = Recommender::with_config(catalog, EngineConfig::default());
    let results = match (args.seed, args.no_jitter) {
        (_, true) => recommender.recommend_with(&ctx, args.count, &mut NoJitter),
        (Some(seed), false) => {
            recommender.recommend_with(&ctx, args.count, &mut RandomJitter::seeded(seed))
        }
        (None, false) => recommender.recommend(&ctx, args.count),
    };

    display_context(&ctx);
    display_recommendations(&results, &ctx, args.explain);

    if let Some(path) = &args.csv {
        write_csv(&results, path)?;
        println!("Wrote results to {:?}", path);
    }

    if let Some(path) = &args.json {
        write_json(&results, path)?;
        println!("Wrote results to {:?}", path);
    }

    Ok(())
}

/// Ask for the situation and weather, then recommend until the user stops.
fn cmd_interactive(catalog: Catalog) -> Result<()> {
    let recommender = Recommender::new(catalog);
    let seasonal = SeasonalWeather::now();
    let slot: TimeSlot = current_time_slot();

    println!("Loaded {} menu items", recommender.catalog().len());

    let mut situation = Situation::default();
    loop {
        situation = prompt_situation(&situation)?;
        let weather = collect_weather(&seasonal)?;

        let ctx = RecommendationContext::new(weather, slot, situation.clone());
        let results = recommender.recommend_default(&ctx);

        display_context(&ctx);
        display_recommendations(&results, &ctx, false);

        if !prompt_yes_no("Recommend again?", true)? {
            break;
        }
    }

    Ok(())
}

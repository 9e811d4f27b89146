use crate::catalog::Catalog;
use crate::engine::score_breakdown;
use crate::models::{
    Precipitation, RecommendationContext, ScoredMenuItem, Sky, TimeSlot, WeatherReading,
};

/// Emoji for a time slot.
pub fn time_slot_emoji(slot: TimeSlot) -> &'static str {
    match slot {
        TimeSlot::Morning => "🌅",
        TimeSlot::Lunch => "☀️",
        TimeSlot::Evening => "🌆",
        TimeSlot::LateNight => "🌙",
    }
}

/// Emoji for a weather reading. Precipitation wins over sky.
pub fn weather_emoji(weather: &WeatherReading) -> &'static str {
    match weather.precipitation {
        Precipitation::Rain => return "🌧️",
        Precipitation::Snow => return "❄️",
        Precipitation::None | Precipitation::Sleet => {}
    }
    match weather.sky {
        Sky::Clear if weather.temperature > 25.0 => "☀️",
        Sky::Clear => "🌤️",
        Sky::Cloudy => "⛅",
        Sky::Overcast => "☁️",
    }
}

/// One-line weather summary, e.g. "30°C / clear".
pub fn weather_description(weather: &WeatherReading) -> String {
    let condition = match weather.precipitation {
        Precipitation::None => weather.sky.as_str(),
        other => other.as_str(),
    };
    format!("{}°C / {}", weather.temperature, condition)
}

/// Print the context header shown above a recommendation list.
pub fn display_context(ctx: &RecommendationContext) {
    println!();
    println!(
        "{} {}   {} {}   situation: {}",
        weather_emoji(&ctx.weather),
        weather_description(&ctx.weather),
        time_slot_emoji(ctx.time_slot),
        ctx.time_slot,
        ctx.situation
    );
}

/// Display ranked recommendations in a formatted table.
///
/// With `explain`, every scoring rule that fired is listed under its item.
pub fn display_recommendations(
    results: &[ScoredMenuItem],
    ctx: &RecommendationContext,
    explain: bool,
) {
    if results.is_empty() {
        println!("No menu items are served during {}.", ctx.time_slot);
        return;
    }

    println!();
    println!("=== Recommendations ===");
    println!();

    // Find max name length for alignment
    let max_name_len = results
        .iter()
        .map(|s| s.item.label().chars().count())
        .max()
        .unwrap_or(10);

    for (i, scored) in results.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>6.1}  {}",
            i + 1,
            scored.item.label(),
            scored.score,
            scored.reason,
            width = max_name_len
        );

        if explain {
            for term in score_breakdown(scored.item, ctx).terms {
                let sign = if term.points >= 0.0 { "+" } else { "" };
                println!("        {}{:.0}  {}", sign, term.points, term.rule);
            }
        }
    }

    println!();
}

/// Display catalog items, optionally only those served in `slot`.
pub fn display_catalog(catalog: &Catalog, slot: Option<TimeSlot>) {
    let items: Vec<_> = match slot {
        Some(slot) => catalog.eligible_for(slot).collect(),
        None => catalog.iter().collect(),
    };

    let title = match slot {
        Some(slot) => format!("Menu ({})", slot),
        None => "Menu".to_string(),
    };

    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        let slots: Vec<&str> = item.time_slots.iter().map(|s| s.as_str()).collect();
        println!(
            "  {} [{}] {} - {:?} cal, {:?}, {:?} cook, slots: {}",
            item.label(),
            item.id,
            item.category,
            item.calories,
            item.fullness,
            item.cook_time,
            slots.join("/")
        );
    }

    println!();
}

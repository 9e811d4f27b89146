use crate::engine::constants::{MAX_REASON_CLAUSES, REASON_DELIMITER};
use crate::models::{
    CalorieClass, CookTime, Fullness, MenuItem, RecommendationContext, Situation, TimeSlot,
};

// Clause texts never contain the delimiter.
const HOT_COLD_DISH: &str = "cool relief on a hot day";
const HOT_AFFINITY: &str = "made for the heat";
const COLD_SOUP: &str = "warms you up on a cold day";
const COLD_AFFINITY: &str = "chases the chill away";
const RAINY_SOUP: &str = "a bowl of broth for a rainy day";
const RAINY_AFFINITY: &str = "what rainy days are for";
const MORNING_FAST: &str = "a light start to the morning";
const LATE_NIGHT_LIGHT: &str = "an easy late-night bite";
const LUNCH_FAST: &str = "quick enough for a lunch break";
const SOLO: &str = "great for eating alone";
const DIET: &str = "no calorie guilt";
const HEARTY: &str = "a filling meal";
const QUICK: &str = "done in no time";
const FAMILY: &str = "the whole family loves it";
const GATHERING: &str = "a crowd-pleaser for groups";
const DATE: &str = "sets the mood";
const FALLBACK_SOUP: &str = "the broth says it all";
const FALLBACK_SPICY: &str = "a spicy kick for your appetite";
const FALLBACK_LIGHT: &str = "light and easy";
const FALLBACK_GENERIC: &str = "always a good choice";

fn temperature_clause(item: &MenuItem, ctx: &RecommendationContext) -> Option<&'static str> {
    if ctx.is_hot() && item.is_cold {
        Some(HOT_COLD_DISH)
    } else if ctx.is_hot() && item.weather.hot {
        Some(HOT_AFFINITY)
    } else if ctx.is_cold() && item.has_soup {
        Some(COLD_SOUP)
    } else if ctx.is_cold() && item.weather.cold {
        Some(COLD_AFFINITY)
    } else {
        None
    }
}

fn precipitation_clause(item: &MenuItem, ctx: &RecommendationContext) -> Option<&'static str> {
    if !ctx.is_rainy() {
        return None;
    }
    if item.has_soup {
        Some(RAINY_SOUP)
    } else if item.weather.rainy {
        Some(RAINY_AFFINITY)
    } else {
        None
    }
}

fn time_slot_clause(item: &MenuItem, ctx: &RecommendationContext) -> Option<&'static str> {
    match ctx.time_slot {
        TimeSlot::Morning if item.cook_time == CookTime::Fast => Some(MORNING_FAST),
        TimeSlot::LateNight if item.fullness != Fullness::Heavy => Some(LATE_NIGHT_LIGHT),
        TimeSlot::Lunch if item.cook_time == CookTime::Fast => Some(LUNCH_FAST),
        _ => None,
    }
}

fn situation_clause(item: &MenuItem, ctx: &RecommendationContext) -> Option<&'static str> {
    let listed = item.suits(&ctx.situation);
    match ctx.situation {
        Situation::Solo if listed => Some(SOLO),
        Situation::Diet if item.calories == CalorieClass::Low => Some(DIET),
        Situation::Hearty if item.fullness == Fullness::Heavy => Some(HEARTY),
        Situation::Quick if item.cook_time == CookTime::Fast => Some(QUICK),
        Situation::Family if listed => Some(FAMILY),
        Situation::Gathering if listed => Some(GATHERING),
        Situation::Date if listed => Some(DATE),
        _ => None,
    }
}

fn fallback_clause(item: &MenuItem) -> &'static str {
    if item.has_soup {
        FALLBACK_SOUP
    } else if item.is_spicy {
        FALLBACK_SPICY
    } else if item.calories == CalorieClass::Low {
        FALLBACK_LIGHT
    } else {
        FALLBACK_GENERIC
    }
}

/// Short justification for recommending `item` under `ctx`.
///
/// Walks the temperature, precipitation, time-slot and situation groups in
/// that order, keeping at most one clause per group and at most two overall.
/// Never empty.
pub fn reason(item: &MenuItem, ctx: &RecommendationContext) -> String {
    let clauses: Vec<&str> = [
        temperature_clause(item, ctx),
        precipitation_clause(item, ctx),
        time_slot_clause(item, ctx),
        situation_clause(item, ctx),
    ]
    .into_iter()
    .flatten()
    .take(MAX_REASON_CLAUSES)
    .collect();

    if clauses.is_empty() {
        return fallback_clause(item).to_string();
    }

    clauses.join(REASON_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Precipitation, Sky, WeatherAffinity, WeatherReading};

    fn plain_item() -> MenuItem {
        MenuItem {
            id: "plain".to_string(),
            name: "Plain".to_string(),
            emoji: String::new(),
            category: "korean".to_string(),
            calories: CalorieClass::Medium,
            fullness: Fullness::Medium,
            has_soup: false,
            is_spicy: false,
            is_cold: false,
            weather: WeatherAffinity::default(),
            time_slots: TimeSlot::ALL.to_vec(),
            situations: Vec::new(),
            tags: Vec::new(),
            cook_time: CookTime::Normal,
        }
    }

    fn ctx(temp: f64, precip: Precipitation, slot: TimeSlot, situation: Situation) -> RecommendationContext {
        RecommendationContext::new(
            WeatherReading::new(temp, Sky::Cloudy, precip, 60.0),
            slot,
            situation,
        )
    }

    #[test]
    fn test_fallback_priority() {
        let mild = ctx(20.0, Precipitation::None, TimeSlot::Evening, Situation::Other("x".into()));

        let mut item = plain_item();
        assert_eq!(reason(&item, &mild), FALLBACK_GENERIC);

        item.calories = CalorieClass::Low;
        assert_eq!(reason(&item, &mild), FALLBACK_LIGHT);

        item.is_spicy = true;
        assert_eq!(reason(&item, &mild), FALLBACK_SPICY);

        item.has_soup = true;
        assert_eq!(reason(&item, &mild), FALLBACK_SOUP);
    }

    #[test]
    fn test_keeps_first_two_groups() {
        let mut item = plain_item();
        item.has_soup = true;
        item.cook_time = CookTime::Fast;
        item.situations = vec![Situation::Solo];
        let c = ctx(0.0, Precipitation::Rain, TimeSlot::Lunch, Situation::Solo);

        assert_eq!(reason(&item, &c), format!("{}, {}", COLD_SOUP, RAINY_SOUP));
    }

    #[test]
    fn test_one_clause_per_group() {
        let mut item = plain_item();
        item.is_cold = true;
        item.weather.hot = true;
        let c = ctx(31.0, Precipitation::None, TimeSlot::Evening, Situation::Other("x".into()));

        assert_eq!(reason(&item, &c), HOT_COLD_DISH);
    }

    #[test]
    fn test_time_and_situation_clauses() {
        let mut item = plain_item();
        item.cook_time = CookTime::Fast;
        item.calories = CalorieClass::Low;
        let c = ctx(18.0, Precipitation::None, TimeSlot::Morning, Situation::Diet);
        assert_eq!(reason(&item, &c), format!("{}, {}", MORNING_FAST, DIET));

        let c = ctx(18.0, Precipitation::None, TimeSlot::LateNight, Situation::Quick);
        assert_eq!(reason(&item, &c), format!("{}, {}", LATE_NIGHT_LIGHT, QUICK));
    }

    #[test]
    fn test_listed_situation_required_for_company_clauses() {
        let item = plain_item();
        let c = ctx(18.0, Precipitation::None, TimeSlot::Evening, Situation::Family);
        assert_eq!(reason(&item, &c), FALLBACK_GENERIC);

        let mut listed = plain_item();
        listed.situations = vec![Situation::Family];
        assert_eq!(reason(&listed, &c), FAMILY);
    }

    #[test]
    fn test_weather_affinity_clauses() {
        let other = || Situation::Other("x".into());

        let mut heat = plain_item();
        heat.weather.hot = true;
        assert_eq!(reason(&heat, &ctx(30.0, Precipitation::None, TimeSlot::Evening, other())), HOT_AFFINITY);
        assert_eq!(reason(&heat, &ctx(5.0, Precipitation::None, TimeSlot::Evening, other())), FALLBACK_GENERIC);

        let mut chill = plain_item();
        chill.weather.cold = true;
        assert_eq!(reason(&chill, &ctx(5.0, Precipitation::None, TimeSlot::Evening, other())), COLD_AFFINITY);

        let mut rainy = plain_item();
        rainy.weather.rainy = true;
        let wet = ctx(20.0, Precipitation::Rain, TimeSlot::Evening, other());
        assert_eq!(reason(&rainy, &wet), RAINY_AFFINITY);

        // Soup outranks the rainy affinity within the group
        rainy.has_soup = true;
        assert_eq!(reason(&rainy, &wet), RAINY_SOUP);
    }

    #[test]
    fn test_lunch_fast_clause() {
        let mut item = plain_item();
        item.cook_time = CookTime::Fast;

        let lunch = ctx(20.0, Precipitation::None, TimeSlot::Lunch, Situation::Other("x".into()));
        assert_eq!(reason(&item, &lunch), LUNCH_FAST);

        let evening = ctx(20.0, Precipitation::None, TimeSlot::Evening, Situation::Other("x".into()));
        assert_eq!(reason(&item, &evening), FALLBACK_GENERIC);
    }

    #[test]
    fn test_late_night_keys_off_fullness() {
        let late = ctx(20.0, Precipitation::None, TimeSlot::LateNight, Situation::Other("x".into()));

        // Not heavy is enough late at night, even when slow to cook
        let item = plain_item();
        assert_eq!(reason(&item, &late), LATE_NIGHT_LIGHT);

        let mut heavy_fast = plain_item();
        heavy_fast.fullness = Fullness::Heavy;
        heavy_fast.cook_time = CookTime::Fast;
        assert_eq!(reason(&heavy_fast, &late), FALLBACK_GENERIC);

        // Morning wants a fast dish, not a light one
        let mut light_slow = plain_item();
        light_slow.fullness = Fullness::Light;
        let morning = ctx(20.0, Precipitation::None, TimeSlot::Morning, Situation::Other("x".into()));
        assert_eq!(reason(&light_slow, &morning), FALLBACK_GENERIC);
    }

    #[test]
    fn test_situation_clauses() {
        let at = |situation| ctx(20.0, Precipitation::None, TimeSlot::Evening, situation);

        let mut listed = plain_item();
        listed.situations = vec![Situation::Solo, Situation::Gathering, Situation::Date];
        assert_eq!(reason(&listed, &at(Situation::Solo)), SOLO);
        assert_eq!(reason(&listed, &at(Situation::Gathering)), GATHERING);
        assert_eq!(reason(&listed, &at(Situation::Date)), DATE);

        let unlisted = plain_item();
        assert_eq!(reason(&unlisted, &at(Situation::Solo)), FALLBACK_GENERIC);
        assert_eq!(reason(&unlisted, &at(Situation::Gathering)), FALLBACK_GENERIC);
        assert_eq!(reason(&unlisted, &at(Situation::Date)), FALLBACK_GENERIC);
        assert_eq!(reason(&unlisted, &at(Situation::Hearty)), FALLBACK_GENERIC);

        let mut heavy = plain_item();
        heavy.fullness = Fullness::Heavy;
        assert_eq!(reason(&heavy, &at(Situation::Hearty)), HEARTY);
    }

    #[test]
    fn test_situation_clause_dropped_after_two_groups() {
        let mut item = plain_item();
        item.weather.rainy = true;
        item.cook_time = CookTime::Fast;
        item.situations = vec![Situation::Solo];
        let c = ctx(20.0, Precipitation::Rain, TimeSlot::Lunch, Situation::Solo);

        let text = reason(&item, &c);
        assert_eq!(text, format!("{}, {}", RAINY_AFFINITY, LUNCH_FAST));
        assert!(!text.contains(SOLO));
    }

    #[test]
    fn test_clauses_never_contain_delimiter() {
        for clause in [
            HOT_COLD_DISH, HOT_AFFINITY, COLD_SOUP, COLD_AFFINITY, RAINY_SOUP, RAINY_AFFINITY,
            MORNING_FAST, LATE_NIGHT_LIGHT, LUNCH_FAST, SOLO, DIET, HEARTY, QUICK, FAMILY,
            GATHERING, DATE, FALLBACK_SOUP, FALLBACK_SPICY, FALLBACK_LIGHT, FALLBACK_GENERIC,
        ] {
            assert!(!clause.is_empty());
            assert!(!clause.contains(REASON_DELIMITER), "{clause}");
        }
    }
}

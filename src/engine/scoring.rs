use crate::engine::constants::*;
use crate::engine::jitter::JitterSource;
use crate::models::{
    CalorieClass, CookTime, Fullness, MenuItem, RecommendationContext, Situation, TimeSlot,
};

/// One scoring rule that fired, with its signed contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTerm {
    pub rule: &'static str,
    pub points: f64,
}

/// Every rule that fired for one item, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub terms: Vec<ScoreTerm>,
}

impl ScoreBreakdown {
    fn add(&mut self, rule: &'static str, points: f64) {
        self.terms.push(ScoreTerm { rule, points });
    }

    fn add_if(&mut self, condition: bool, rule: &'static str, points: f64) {
        if condition {
            self.add(rule, points);
        }
    }

    /// Sum of all contributions.
    pub fn total(&self) -> f64 {
        self.terms.iter().fold(0.0, |acc, t| acc + t.points)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.terms.iter().any(|t| t.rule == rule)
    }
}

/// Evaluate every heuristic rule for `item` under `ctx`.
///
/// Weather blocks are evaluated independently; the situation block is a
/// single match since a context carries exactly one situation.
pub fn score_breakdown(item: &MenuItem, ctx: &RecommendationContext) -> ScoreBreakdown {
    let mut b = ScoreBreakdown::default();

    b.add_if(item.suits(&ctx.situation), "situation match", SITUATION_MATCH_BONUS);

    if ctx.is_hot() {
        b.add_if(item.is_cold, "hot: cold dish", HOT_COLD_DISH_BONUS);
        b.add_if(item.weather.hot, "hot: hot-weather dish", HOT_AFFINITY_BONUS);
        b.add_if(item.has_soup && !item.is_cold, "hot: hot soup", HOT_SOUP_PENALTY);
        b.add_if(item.fullness == Fullness::Heavy, "hot: heavy", HOT_HEAVY_PENALTY);
    }

    if ctx.is_cold() {
        b.add_if(item.has_soup, "cold: soup", COLD_SOUP_BONUS);
        b.add_if(item.weather.cold, "cold: cold-weather dish", COLD_AFFINITY_BONUS);
        b.add_if(item.is_cold, "cold: cold dish", COLD_COLD_DISH_PENALTY);
    }

    if ctx.is_rainy() {
        b.add_if(item.has_soup, "rainy: soup", RAINY_SOUP_BONUS);
        b.add_if(item.weather.rainy, "rainy: rainy-day dish", RAINY_AFFINITY_BONUS);
        b.add_if(item.is_spicy, "rainy: spicy", RAINY_SPICY_BONUS);
    }

    match &ctx.situation {
        Situation::Diet => {
            b.add_if(
                item.calories == CalorieClass::Low,
                "diet: low calorie",
                DIET_LOW_CALORIE_BONUS,
            );
            b.add_if(
                item.calories == CalorieClass::High,
                "diet: high calorie",
                DIET_HIGH_CALORIE_PENALTY,
            );
            b.add_if(item.fullness == Fullness::Light, "diet: light", DIET_LIGHT_BONUS);
        }
        Situation::Hearty => {
            b.add_if(item.fullness == Fullness::Heavy, "hearty: heavy", HEARTY_HEAVY_BONUS);
            b.add_if(
                item.calories == CalorieClass::High,
                "hearty: high calorie",
                HEARTY_HIGH_CALORIE_BONUS,
            );
        }
        Situation::Quick => {
            b.add_if(item.cook_time == CookTime::Fast, "quick: fast", QUICK_FAST_BONUS);
            b.add_if(item.fullness == Fullness::Light, "quick: light", QUICK_LIGHT_BONUS);
        }
        Situation::Solo => {
            b.add_if(item.cook_time == CookTime::Fast, "solo: fast", SOLO_FAST_BONUS);
        }
        Situation::Family | Situation::Gathering => {
            b.add_if(item.fullness == Fullness::Heavy, "group: heavy", GROUP_HEAVY_BONUS);
        }
        Situation::Date => {
            b.add_if(
                DATE_CATEGORIES.contains(&item.category.as_str()),
                "date: category",
                DATE_CATEGORY_BONUS,
            );
        }
        Situation::Other(_) => {}
    }

    match ctx.time_slot {
        TimeSlot::Morning => {
            b.add_if(item.fullness == Fullness::Light, "morning: light", MORNING_LIGHT_BONUS);
            b.add_if(item.cook_time == CookTime::Fast, "morning: fast", MORNING_FAST_BONUS);
        }
        TimeSlot::LateNight => {
            b.add_if(
                item.fullness == Fullness::Heavy,
                "late-night: heavy",
                LATE_NIGHT_HEAVY_PENALTY,
            );
            b.add_if(
                item.has_tag(LATE_NIGHT_TAG),
                "late-night: favourite",
                LATE_NIGHT_TAG_BONUS,
            );
        }
        TimeSlot::Lunch | TimeSlot::Evening => {}
    }

    b
}

/// Deterministic part of the score.
pub fn base_score(item: &MenuItem, ctx: &RecommendationContext) -> f64 {
    score_breakdown(item, ctx).total()
}

/// Full score: deterministic part plus one jitter draw in `[0, jitter_span)`.
///
/// Unclamped and may be negative.
pub fn score<J: JitterSource + ?Sized>(
    item: &MenuItem,
    ctx: &RecommendationContext,
    jitter: &mut J,
    jitter_span: f64,
) -> f64 {
    base_score(item, ctx) + jitter.sample(jitter_span)
}

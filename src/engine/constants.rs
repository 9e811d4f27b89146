//! Scoring weights and thresholds.
//!
//! The point values are empirical. Larger magnitude means a stronger signal;
//! nothing deeper should be read into the exact numbers.

/// Temperature at or above which the day counts as hot (°C).
pub const HOT_THRESHOLD_C: f64 = 28.0;

/// Temperature at or below which the day counts as cold (°C).
pub const COLD_THRESHOLD_C: f64 = 10.0;

/// Item lists the requested situation.
pub const SITUATION_MATCH_BONUS: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Hot weather
// ─────────────────────────────────────────────────────────────────────────────

pub const HOT_COLD_DISH_BONUS: f64 = 40.0;
pub const HOT_AFFINITY_BONUS: f64 = 35.0;
pub const HOT_SOUP_PENALTY: f64 = -20.0;
pub const HOT_HEAVY_PENALTY: f64 = -10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Cold weather
// ─────────────────────────────────────────────────────────────────────────────

pub const COLD_SOUP_BONUS: f64 = 35.0;
pub const COLD_AFFINITY_BONUS: f64 = 30.0;
pub const COLD_COLD_DISH_PENALTY: f64 = -30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Rain, snow, sleet
// ─────────────────────────────────────────────────────────────────────────────

pub const RAINY_SOUP_BONUS: f64 = 25.0;
pub const RAINY_AFFINITY_BONUS: f64 = 30.0;
pub const RAINY_SPICY_BONUS: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Situations
// ─────────────────────────────────────────────────────────────────────────────

pub const DIET_LOW_CALORIE_BONUS: f64 = 40.0;
pub const DIET_HIGH_CALORIE_PENALTY: f64 = -30.0;
pub const DIET_LIGHT_BONUS: f64 = 20.0;

pub const HEARTY_HEAVY_BONUS: f64 = 30.0;
pub const HEARTY_HIGH_CALORIE_BONUS: f64 = 15.0;

pub const QUICK_FAST_BONUS: f64 = 30.0;
pub const QUICK_LIGHT_BONUS: f64 = 15.0;

pub const SOLO_FAST_BONUS: f64 = 15.0;

/// Shared by family and gathering.
pub const GROUP_HEAVY_BONUS: f64 = 15.0;

pub const DATE_CATEGORY_BONUS: f64 = 20.0;

/// Categories that earn the date bonus (exact match).
pub const DATE_CATEGORIES: [&str; 2] = ["western", "japanese"];

// ─────────────────────────────────────────────────────────────────────────────
// Time slots
// ─────────────────────────────────────────────────────────────────────────────

pub const MORNING_LIGHT_BONUS: f64 = 15.0;
pub const MORNING_FAST_BONUS: f64 = 10.0;

pub const LATE_NIGHT_HEAVY_PENALTY: f64 = -10.0;
pub const LATE_NIGHT_TAG_BONUS: f64 = 20.0;

/// Tag that marks a dish as a late-night favourite.
pub const LATE_NIGHT_TAG: &str = "late-night";

// ─────────────────────────────────────────────────────────────────────────────
// Ranking
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound (exclusive) of the random addend.
pub const JITTER_SPAN: f64 = 15.0;

/// Number of items returned when the caller does not ask for a count.
pub const DEFAULT_RECOMMEND_COUNT: usize = 7;

/// At most this many reason clauses are kept.
pub const MAX_REASON_CLAUSES: usize = 2;

/// Delimiter between reason clauses.
pub const REASON_DELIMITER: &str = ", ";

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::engine::constants::{DEFAULT_RECOMMEND_COUNT, JITTER_SPAN};
use crate::engine::eligibility::is_eligible;
use crate::engine::jitter::{JitterSource, RandomJitter};
use crate::engine::reason::reason;
use crate::engine::scoring::score;
use crate::models::{RecommendationContext, ScoredMenuItem};

/// Runtime knobs for ranking.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Items returned when the caller does not ask for a count.
    pub default_count: usize,

    /// Jitter is drawn from `[0, jitter_span)`. Zero disables it.
    pub jitter_span: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_RECOMMEND_COUNT,
            jitter_span: JITTER_SPAN,
        }
    }
}

/// Rank the catalog for one context.
///
/// 1. Drop items not served in the context's time slot
/// 2. Score and explain each survivor
/// 3. Sort by score, highest first, and keep the top `count`
///
/// Returns an empty list when nothing is eligible. The catalog is only read.
pub fn rank<'a, J: JitterSource + ?Sized>(
    ctx: &RecommendationContext,
    catalog: &'a Catalog,
    count: usize,
    jitter: &mut J,
    config: &EngineConfig,
) -> Vec<ScoredMenuItem<'a>> {
    let mut scored: Vec<ScoredMenuItem<'a>> = catalog
        .iter()
        .filter(|item| is_eligible(item, ctx.time_slot))
        .map(|item| {
            let points = score(item, ctx, &mut *jitter, config.jitter_span);
            trace!(id = %item.id, score = points, "scored menu item");
            ScoredMenuItem::new(item, points, reason(item, ctx))
        })
        .collect();

    let eligible = scored.len();

    // Higher is better, so reverse the comparison
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(count);

    debug!(
        slot = %ctx.time_slot,
        situation = %ctx.situation,
        temperature = ctx.weather.temperature,
        eligible,
        returned = scored.len(),
        "ranked catalog"
    );

    scored
}

/// Owns a catalog and ranks it with fresh entropy on every call.
pub struct Recommender {
    catalog: Catalog,
    config: EngineConfig,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Top `count` items for `ctx`, with random jitter.
    pub fn recommend(&self, ctx: &RecommendationContext, count: usize) -> Vec<ScoredMenuItem<'_>> {
        let mut jitter = RandomJitter::from_entropy();
        self.recommend_with(ctx, count, &mut jitter)
    }

    /// Top items using the configured default count.
    pub fn recommend_default(&self, ctx: &RecommendationContext) -> Vec<ScoredMenuItem<'_>> {
        self.recommend(ctx, self.config.default_count)
    }

    /// Same as `recommend`, with a caller-supplied jitter source.
    pub fn recommend_with<J: JitterSource + ?Sized>(
        &self,
        ctx: &RecommendationContext,
        count: usize,
        jitter: &mut J,
    ) -> Vec<ScoredMenuItem<'_>> {
        rank(ctx, &self.catalog, count, jitter, &self.config)
    }
}

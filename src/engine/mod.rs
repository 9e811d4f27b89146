pub mod constants;
pub mod eligibility;
pub mod jitter;
pub mod ranking;
pub mod reason;
pub mod scoring;

pub use constants::*;
pub use eligibility::is_eligible;
pub use jitter::{FixedJitter, JitterSource, NoJitter, RandomJitter};
pub use ranking::{rank, EngineConfig, Recommender};
pub use reason::reason;
pub use scoring::{base_score, score, score_breakdown, ScoreBreakdown, ScoreTerm};

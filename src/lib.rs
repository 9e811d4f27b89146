pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod weather;

pub use catalog::Catalog;
pub use engine::{rank, Recommender};
pub use error::{MenuError, Result};
pub use models::{MenuItem, RecommendationContext, ScoredMenuItem};

use crate::models::MenuItem;

/// A catalog entry annotated by one ranking call.
#[derive(Debug, Clone)]
pub struct ScoredMenuItem<'a> {
    pub item: &'a MenuItem,

    /// Signed point total including jitter.
    pub score: f64,

    /// One or two short clauses joined by ", ".
    pub reason: String,
}

impl<'a> ScoredMenuItem<'a> {
    pub fn new(item: &'a MenuItem, score: f64, reason: String) -> Self {
        Self {
            item,
            score,
            reason,
        }
    }
}

// Core algorithm exports
pub mod analytics;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use analytics::{aum_by_state, distinct_states, fee_model_split, firms_by_state, summarize};
pub use filters::{filter_firms, passes_filters};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};

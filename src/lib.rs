//! RIA Matchmaker - matches prospective clients with Registered Investment Advisers
//!
//! This library provides the filtering, scoring and reporting core used to rank
//! adviser firms from SEC disclosure data against a user's stated preferences.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, filter_firms, calculate_match_score, summarize};
pub use models::{FirmRecord, UserProfile, StatePreference, ClientType, ScoredMatch, ScoringWeights, FindMatchesRequest, FindMatchesResponse};

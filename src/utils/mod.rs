//! Utility modules

pub mod suggest;

pub use suggest::{
    closest_match, did_you_mean, levenshtein, Suggestion, SuggestionMatcher, DEFAULT_MAX_DISTANCE,
};

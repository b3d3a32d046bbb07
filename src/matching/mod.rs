//! Fuzzy matching utilities for contact names.
//!
//! Used to suggest close existing names when a lookup misses.

pub mod name_matcher;

pub use name_matcher::{NameMatcher, Suggestion};

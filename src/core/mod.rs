//! Core domain functions for word matching
//!
//! This module contains the scoring primitives and result type with zero I/O.
//! Everything here is pure and deterministic.

mod matches;
mod word;

pub use matches::MatchResult;
pub use word::{char_value, letter_value, lexical_compare, value_distance};

//! Word Analyzer
//!
//! A small word matching service. It keeps a growing word list and, for each
//! query, returns the closest word by letter value and the closest word at or
//! after the query in lexical order.
//!
//! # Quick Start
//!
//! ```rust
//! use word_analyzer::matcher::MatchEngine;
//!
//! let words = vec!["apple".to_string(), "banana".to_string(), "cherry".to_string()];
//! let result = MatchEngine::new(&words).analyze("banana");
//!
//! assert_eq!(result.value.as_deref(), Some("banana"));
//! assert_eq!(result.lexical, "banana");
//! ```

// Core scoring functions
pub mod core;

// Storage errors
pub mod error;

// Matching rules
pub mod matcher;

// Word list storage
pub mod wordlists;

// HTTP adapter
pub mod server;

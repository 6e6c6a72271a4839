//! Word list storage
//!
//! The word list lives in memory for matching and in a flat text file for
//! durability. It is loaded once at startup, grows by one word per query,
//! and is written back in full at shutdown.

pub mod loader;
mod store;

pub use store::WordStore;

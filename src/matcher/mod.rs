//! Word matching rules
//!
//! Two independent rules pick the closest word for a query:
//! - by character value (letter sum, nearest wins)
//! - by lexical order (smallest non-negative comparison wins)

mod engine;
mod lexical;
mod value;

pub use engine::MatchEngine;
pub use lexical::closest_lexical;
pub use value::closest_by_value;

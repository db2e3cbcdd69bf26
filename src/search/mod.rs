//! Keyword search over the section index: name search, content search, and
//! requirement extraction, with ranking and contextual snippets.

pub mod engine;
pub mod extract;
pub mod outputs;
pub mod tools;

pub use engine::{SearchEngine, SearchOptions};
pub use tools::SearchTools;

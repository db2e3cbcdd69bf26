//! Section model, Markdown parsing, and the in-memory section index.

pub mod index;
pub mod model;
pub mod outputs;
pub mod parser;
pub mod tools;

pub use index::SectionIndex;
pub use model::Section;
pub use tools::SectionTools;

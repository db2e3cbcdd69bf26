pub mod corpus;
pub mod error;
pub mod search;
pub mod sections;
pub mod service;

pub use service::DocsSearchService;

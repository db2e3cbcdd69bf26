//! The MCP service: the stable tool surface over the section index.

use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::corpus::{self, SourceDocument};
use crate::search::SearchTools;
use crate::search::tools::{
    FindImplementationRequirementsParams, SearchContentByTextParams, SearchSectionsByNameParams,
};
use crate::sections::tools::GetSectionParams;
use crate::sections::{SectionIndex, SectionTools};

/// MCP server handler. Holds no state beyond the shared, immutable index;
/// every tool call is a pure read, so calls may be served concurrently
/// without coordination.
#[derive(Debug, Clone)]
pub struct DocsSearchService {
    section_tools: SectionTools,
    search_tools: SearchTools,
    tool_router: ToolRouter<Self>,
}

impl DocsSearchService {
    /// Build the index from the given documents and wire up the tool surface.
    /// Fails (and the server does not start) if the index cannot be built.
    pub fn new(documents: Vec<SourceDocument>) -> Result<Self> {
        let index = Arc::new(SectionIndex::build(&documents)?);
        Ok(Self {
            section_tools: SectionTools::new(index.clone()),
            search_tools: SearchTools::new(index),
            tool_router: Self::tool_router(),
        })
    }

    /// Service over the built-in embedded corpus.
    pub fn with_builtin_corpus() -> Result<Self> {
        Self::new(corpus::builtin_corpus())
    }
}

#[tool_router]
impl DocsSearchService {
    #[tool(
        description = "List every documentation section with its name, source document, header level, and word count, in document order. Use this first to see what is available, then get_section to read one."
    )]
    pub async fn list_sections(&self) -> String {
        self.section_tools.list_sections().to_json()
    }

    #[tool(
        description = "Get the complete content and metadata of one documentation section by its exact name. Names come from list_sections or the search tools. Returns a typed not-found error if the name does not exist."
    )]
    pub async fn get_section(&self, params: Parameters<GetSectionParams>) -> String {
        self.section_tools.get_section(params.0).to_json()
    }

    #[tool(
        description = "Get a curated overview of the core MCP concepts: architecture, servers, resources, tools, and prompts. Static text, a good starting point before searching."
    )]
    pub async fn core_concepts(&self) -> String {
        self.section_tools.core_concepts().to_json()
    }

    #[tool(
        description = "Search documentation sections by keyword in the section name. Results are ranked by how early the keyword appears in the name and include a short content preview. Zero results is a valid outcome, not an error."
    )]
    pub async fn search_sections_by_name(
        &self,
        params: Parameters<SearchSectionsByNameParams>,
    ) -> String {
        match self.search_tools.search_sections_by_name(params.0) {
            Ok(output) => output.to_json(),
            Err(error) => error.to_json(),
        }
    }

    #[tool(
        description = "Search documentation content by keyword anywhere in a section's text. Results are ranked by occurrence count and include a bounded context snippet around every occurrence. The result cap applies to sections, not occurrences."
    )]
    pub async fn search_content_by_text(
        &self,
        params: Parameters<SearchContentByTextParams>,
    ) -> String {
        match self.search_tools.search_content_by_text(params.0) {
            Ok(output) => output.to_json(),
            Err(error) => error.to_json(),
        }
    }

    #[tool(
        description = "Find implementation requirements for a feature or concept: fenced code blocks plus import, dependency, and install lines from the sections that mention the keyword. Sections without extractable fragments are omitted."
    )]
    pub async fn find_implementation_requirements(
        &self,
        params: Parameters<FindImplementationRequirementsParams>,
    ) -> String {
        match self.search_tools.find_implementation_requirements(params.0) {
            Ok(output) => output.to_json(),
            Err(error) => error.to_json(),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DocsSearchService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "docs-search-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "MCP server for browsing and searching the Model Context Protocol \
                documentation and the Python SDK guide. Start with core_concepts for an \
                overview or list_sections to see everything that is indexed. Use \
                search_sections_by_name to find sections by title, search_content_by_text \
                to find sections by body text, and find_implementation_requirements to \
                pull imports, dependencies, and code samples for a feature. Read a full \
                section with get_section using its exact name."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

//! Tool layer for the search operations.

use std::sync::Arc;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::search::engine::{SearchEngine, SearchOptions};
use crate::search::outputs::{
    ContentMatch, FindRequirementsOutput, NameMatch, RequirementMatch, SearchContentByTextOutput,
    SearchErrorOutput, SearchSectionsByNameOutput,
};
use crate::sections::SectionIndex;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchSectionsByNameParams {
    #[schemars(description = "The keyword to search for in section names")]
    pub keyword: String,
    #[schemars(description = "Whether to perform case-sensitive search (default: false)")]
    pub case_sensitive: Option<bool>,
    #[schemars(description = "Maximum number of results to return (default: 10, must be >= 1)")]
    pub max_results: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchContentByTextParams {
    #[schemars(description = "The keyword to search for in section content")]
    pub keyword: String,
    #[schemars(description = "Whether to perform case-sensitive search (default: false)")]
    pub case_sensitive: Option<bool>,
    #[schemars(
        description = "Maximum number of matching sections to return (default: 10, must be >= 1)"
    )]
    pub max_results: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FindImplementationRequirementsParams {
    #[schemars(
        description = "The feature or concept to find requirements for (e.g., 'FastMCP', 'server', 'tools')"
    )]
    pub keyword: String,
}

/// Search tools over the immutable section index.
#[derive(Debug, Clone)]
pub struct SearchTools {
    index: Arc<SectionIndex>,
}

impl SearchTools {
    pub fn new(index: Arc<SectionIndex>) -> Self {
        Self { index }
    }

    pub fn search_sections_by_name(
        &self,
        params: SearchSectionsByNameParams,
    ) -> Result<SearchSectionsByNameOutput, SearchErrorOutput> {
        let options = SearchOptions::validated(params.case_sensitive, params.max_results)
            .map_err(|e| SearchErrorOutput::new(e.to_string()))?;
        let engine = SearchEngine::new(&self.index);
        let hits = engine
            .search_by_name(&params.keyword, &options)
            .map_err(|e| SearchErrorOutput::new(e.to_string()))?;
        Ok(SearchSectionsByNameOutput {
            keyword: params.keyword,
            results: hits.iter().map(NameMatch::from_hit).collect(),
        })
    }

    pub fn search_content_by_text(
        &self,
        params: SearchContentByTextParams,
    ) -> Result<SearchContentByTextOutput, SearchErrorOutput> {
        let options = SearchOptions::validated(params.case_sensitive, params.max_results)
            .map_err(|e| SearchErrorOutput::new(e.to_string()))?;
        let engine = SearchEngine::new(&self.index);
        let hits = engine
            .search_by_content(&params.keyword, &options)
            .map_err(|e| SearchErrorOutput::new(e.to_string()))?;
        Ok(SearchContentByTextOutput {
            keyword: params.keyword,
            results: hits.iter().map(ContentMatch::from_hit).collect(),
        })
    }

    pub fn find_implementation_requirements(
        &self,
        params: FindImplementationRequirementsParams,
    ) -> Result<FindRequirementsOutput, SearchErrorOutput> {
        let engine = SearchEngine::new(&self.index);
        let hits = engine
            .find_requirements(&params.keyword, &SearchOptions::default())
            .map_err(|e| SearchErrorOutput::new(e.to_string()))?;
        Ok(FindRequirementsOutput {
            keyword: params.keyword,
            results: hits.iter().map(RequirementMatch::from_hit).collect(),
        })
    }
}

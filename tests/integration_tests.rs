//! Integration tests for the docs-search MCP tool surface.
//!
//! These drive the service the way the transport does: call a tool, get a
//! JSON string back, and deserialize it into the typed output for
//! validation. Everything runs against the built-in embedded corpus.

use anyhow::Result;
use docs_search_mcp::DocsSearchService;
use docs_search_mcp::search::outputs::{
    FindRequirementsOutput, SearchContentByTextOutput, SearchErrorOutput,
    SearchSectionsByNameOutput,
};
use docs_search_mcp::search::tools::{
    FindImplementationRequirementsParams, SearchContentByTextParams, SearchSectionsByNameParams,
};
use docs_search_mcp::sections::outputs::{CoreConceptsOutput, GetSectionOutput, ListSectionsOutput};
use docs_search_mcp::sections::tools::GetSectionParams;
use rmcp::handler::server::tool::Parameters;

fn service() -> Result<DocsSearchService> {
    DocsSearchService::with_builtin_corpus()
}

#[tokio::test]
async fn lists_sections_in_document_order() -> Result<()> {
    let service = service()?;
    let response = service.list_sections().await;
    let output: ListSectionsOutput = serde_json::from_str(&response)?;

    assert_eq!(output.total, output.sections.len());
    assert!(!output.sections.is_empty());
    // First section of the first document.
    assert_eq!(output.sections[0].name, "Model Context Protocol");
    assert_eq!(output.sections[0].document_type, "MCP Documentation");
    assert_eq!(output.sections[0].level, 1);

    // All MCP Documentation sections come before all Python SDK sections.
    let first_sdk = output
        .sections
        .iter()
        .position(|s| s.document_type == "Python SDK")
        .expect("SDK sections present");
    assert!(
        output.sections[first_sdk..]
            .iter()
            .all(|s| s.document_type == "Python SDK")
    );
    Ok(())
}

#[tokio::test]
async fn colliding_names_across_documents_are_disambiguated() -> Result<()> {
    let service = service()?;
    let response = service.list_sections().await;
    let output: ListSectionsOutput = serde_json::from_str(&response)?;
    let names: Vec<_> = output.sections.iter().map(|s| s.name.as_str()).collect();

    // "Overview" and "Installation" exist in both documents; the SDK copies
    // carry the disambiguation suffix.
    assert!(names.contains(&"Overview"));
    assert!(names.contains(&"Overview (Python SDK)"));
    assert!(names.contains(&"Installation"));
    assert!(names.contains(&"Installation (Python SDK)"));
    Ok(())
}

#[tokio::test]
async fn gets_a_section_by_exact_name() -> Result<()> {
    let service = service()?;
    let response = service
        .get_section(Parameters(GetSectionParams {
            name: "Quickstart".to_string(),
        }))
        .await;

    match serde_json::from_str::<GetSectionOutput>(&response)? {
        GetSectionOutput::Success(details) => {
            assert_eq!(details.name, "Quickstart");
            assert_eq!(details.document_type, "Python SDK");
            assert!(details.content.contains("FastMCP"));
            assert_eq!(
                details.word_count,
                details.content.split_whitespace().count()
            );
        }
        GetSectionOutput::Error { error } => panic!("expected section, got error: {error}"),
    }
    Ok(())
}

#[tokio::test]
async fn missing_section_is_a_typed_not_found_error() -> Result<()> {
    let service = service()?;
    let response = service
        .get_section(Parameters(GetSectionParams {
            name: "Nonexistent".to_string(),
        }))
        .await;

    match serde_json::from_str::<GetSectionOutput>(&response)? {
        GetSectionOutput::Error { error } => {
            assert!(error.contains("no section named 'Nonexistent'"));
        }
        GetSectionOutput::Success(details) => panic!("unexpected section: {}", details.name),
    }
    Ok(())
}

#[tokio::test]
async fn core_concepts_returns_the_curated_overview() -> Result<()> {
    let service = service()?;
    let response = service.core_concepts().await;
    let output: CoreConceptsOutput = serde_json::from_str(&response)?;
    assert!(output.overview.contains("# Core MCP Concepts"));
    assert!(output.overview.contains("Resources"));
    Ok(())
}

#[tokio::test]
async fn name_search_returns_only_matching_names() -> Result<()> {
    let service = service()?;
    let response = service
        .search_sections_by_name(Parameters(SearchSectionsByNameParams {
            keyword: "writing".to_string(),
            case_sensitive: None,
            max_results: None,
        }))
        .await;
    let output: SearchSectionsByNameOutput = serde_json::from_str(&response)?;

    assert!(!output.results.is_empty());
    for result in &output.results {
        assert!(result.name.to_lowercase().contains("writing"));
        assert!(!result.preview.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn name_search_zero_matches_is_not_an_error() -> Result<()> {
    let service = service()?;
    let response = service
        .search_sections_by_name(Parameters(SearchSectionsByNameParams {
            keyword: "zzzzzz".to_string(),
            case_sensitive: None,
            max_results: None,
        }))
        .await;
    let output: SearchSectionsByNameOutput = serde_json::from_str(&response)?;
    assert!(output.results.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_positive_max_results_is_an_invalid_parameter() -> Result<()> {
    let service = service()?;
    let response = service
        .search_sections_by_name(Parameters(SearchSectionsByNameParams {
            keyword: String::new(),
            case_sensitive: None,
            max_results: Some(0),
        }))
        .await;
    let error: SearchErrorOutput = serde_json::from_str(&response)?;
    assert!(error.error.contains("max_results"));
    Ok(())
}

#[tokio::test]
async fn content_search_ranking_is_monotonic_in_occurrences() -> Result<()> {
    let service = service()?;
    let response = service
        .search_content_by_text(Parameters(SearchContentByTextParams {
            keyword: "server".to_string(),
            case_sensitive: None,
            max_results: Some(5),
        }))
        .await;
    let output: SearchContentByTextOutput = serde_json::from_str(&response)?;

    assert!(!output.results.is_empty());
    assert!(output.results.len() <= 5);
    for pair in output.results.windows(2) {
        assert!(pair[0].occurrences >= pair[1].occurrences);
    }
    for result in &output.results {
        assert!(result.occurrences >= 1);
        assert_eq!(result.snippets.len(), result.occurrences);
        for snippet in &result.snippets {
            assert!(snippet.to_lowercase().contains("server"));
        }
    }
    Ok(())
}

#[tokio::test]
async fn requirement_search_only_returns_sections_with_fragments() -> Result<()> {
    let service = service()?;
    let response = service
        .find_implementation_requirements(Parameters(FindImplementationRequirementsParams {
            keyword: "FastMCP".to_string(),
        }))
        .await;
    let output: FindRequirementsOutput = serde_json::from_str(&response)?;

    assert!(!output.results.is_empty());
    for result in &output.results {
        assert!(!result.fragments.is_empty());
    }
    // The SDK quickstart imports FastMCP inside a fenced python block.
    let quickstart = output
        .results
        .iter()
        .find(|r| r.name == "Quickstart")
        .expect("Quickstart section extracted");
    assert!(
        quickstart
            .fragments
            .iter()
            .any(|f| f.kind == "code_block" && f.text.contains("from mcp.server.fastmcp"))
    );
    Ok(())
}

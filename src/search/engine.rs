//! The search engine: ranked keyword search over the section index.
//!
//! Every operation is a pure read over the shared index. Occurrence counting
//! is non-overlapping, left-to-right.

use std::borrow::Cow;

use crate::error::EngineError;
use crate::search::extract::{self, Fragment};
use crate::sections::{Section, SectionIndex};

/// Characters of content shown in a name-search preview.
pub const PREVIEW_CHARS: usize = 200;

/// Characters of context kept on each side of a content match, clipped at
/// section boundaries.
pub const SNIPPET_RADIUS: usize = 50;

/// Validated search configuration.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_results: 10,
        }
    }
}

impl SearchOptions {
    /// Apply defaults and validate raw caller parameters.
    pub fn validated(
        case_sensitive: Option<bool>,
        max_results: Option<i64>,
    ) -> Result<Self, EngineError> {
        let defaults = Self::default();
        let max_results = match max_results {
            None => defaults.max_results,
            Some(n) if n >= 1 => n as usize,
            Some(n) => {
                return Err(EngineError::invalid_parameter(format!(
                    "max_results must be >= 1, got {n}"
                )));
            }
        };
        Ok(Self {
            case_sensitive: case_sensitive.unwrap_or(defaults.case_sensitive),
            max_results,
        })
    }
}

/// A section whose name matched the keyword.
#[derive(Debug)]
pub struct NameHit<'a> {
    pub section: &'a Section,
    /// Byte position of the match in the (folded) name; earlier ranks higher.
    pub match_position: usize,
    pub preview: String,
}

/// A section whose content matched the keyword.
#[derive(Debug)]
pub struct ContentHit<'a> {
    pub section: &'a Section,
    pub occurrences: usize,
    /// One bounded context window per occurrence.
    pub snippets: Vec<String>,
}

/// A content match narrowed to its code and requirement fragments.
#[derive(Debug)]
pub struct RequirementHit<'a> {
    pub section: &'a Section,
    pub occurrences: usize,
    pub snippets: Vec<String>,
    pub fragments: Vec<Fragment>,
}

/// Read-only query interface over a built [`SectionIndex`].
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    index: &'a SectionIndex,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a SectionIndex) -> Self {
        Self { index }
    }

    /// Sections whose name contains the keyword, ranked by match position
    /// then name.
    pub fn search_by_name(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<Vec<NameHit<'a>>, EngineError> {
        let needle = validated_needle(keyword, options)?;
        let mut hits: Vec<NameHit<'a>> = self
            .index
            .sections()
            .iter()
            .filter_map(|section| {
                let name = fold(section.name(), options.case_sensitive);
                name.find(needle.as_ref()).map(|match_position| NameHit {
                    section,
                    match_position,
                    preview: preview(section.content()),
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.match_position
                .cmp(&b.match_position)
                .then_with(|| a.section.name().cmp(b.section.name()))
        });
        hits.truncate(options.max_results);
        Ok(hits)
    }

    /// Sections whose content contains the keyword, ranked by occurrence
    /// count descending then name. Capped at `max_results` sections, not
    /// occurrences.
    pub fn search_by_content(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ContentHit<'a>>, EngineError> {
        let mut hits = self.ranked_content_hits(keyword, options)?;
        hits.truncate(options.max_results);
        Ok(hits)
    }

    /// Content search restricted to sections with extractable code or
    /// requirement fragments. Candidates come from an uncapped content
    /// search; the cap applies to the final list.
    pub fn find_requirements(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RequirementHit<'a>>, EngineError> {
        let hits = self.ranked_content_hits(keyword, options)?;
        let mut requirement_hits: Vec<RequirementHit<'a>> = hits
            .into_iter()
            .filter_map(|hit| {
                let fragments = extract::fragments(hit.section.content());
                if fragments.is_empty() {
                    return None;
                }
                Some(RequirementHit {
                    section: hit.section,
                    occurrences: hit.occurrences,
                    snippets: hit.snippets,
                    fragments,
                })
            })
            .collect();
        requirement_hits.truncate(options.max_results);
        Ok(requirement_hits)
    }

    fn ranked_content_hits(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ContentHit<'a>>, EngineError> {
        let needle = validated_needle(keyword, options)?;
        let mut hits: Vec<ContentHit<'a>> = self
            .index
            .sections()
            .iter()
            .filter_map(|section| {
                let content = fold(section.content(), options.case_sensitive);
                let offsets = occurrence_offsets(&content, needle.as_ref());
                if offsets.is_empty() {
                    return None;
                }
                let snippets = offsets
                    .iter()
                    .map(|&at| snippet(section.content(), at, at + needle.len()))
                    .collect();
                Some(ContentHit {
                    section,
                    occurrences: offsets.len(),
                    snippets,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.section.name().cmp(b.section.name()))
        });
        Ok(hits)
    }
}

fn validated_needle<'k>(
    keyword: &'k str,
    options: &SearchOptions,
) -> Result<Cow<'k, str>, EngineError> {
    if keyword.trim().is_empty() {
        return Err(EngineError::invalid_parameter("keyword must not be blank"));
    }
    Ok(fold(keyword, options.case_sensitive))
}

fn fold(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Byte offsets of non-overlapping, left-to-right occurrences.
fn occurrence_offsets(haystack: &str, needle: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(at) = haystack[from..].find(needle) {
        let at = from + at;
        offsets.push(at);
        from = at + needle.len();
    }
    offsets
}

/// First [`PREVIEW_CHARS`] characters of the content, with an ellipsis when
/// truncated.
fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((at, _)) => format!("{}...", &content[..at]),
        None => content.to_string(),
    }
}

/// Context window around a match. The byte range comes from the folded
/// haystack, so it is clamped to char boundaries of the original text;
/// case folds that change byte length merely shift the window.
fn snippet(content: &str, start: usize, end: usize) -> String {
    let start = clamp_to_boundary(content, start);
    let end = clamp_to_boundary(content, end.max(start));
    let from = step_chars_back(content, start, SNIPPET_RADIUS);
    let to = step_chars_forward(content, end, SNIPPET_RADIUS);
    content[from..to].to_string()
}

fn clamp_to_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fn step_chars_back(text: &str, mut at: usize, chars: usize) -> usize {
    for _ in 0..chars {
        if at == 0 {
            break;
        }
        at -= 1;
        while !text.is_char_boundary(at) {
            at -= 1;
        }
    }
    at
}

fn step_chars_forward(text: &str, mut at: usize, chars: usize) -> usize {
    for _ in 0..chars {
        if at == text.len() {
            break;
        }
        at += 1;
        while !text.is_char_boundary(at) {
            at += 1;
        }
    }
    at
}

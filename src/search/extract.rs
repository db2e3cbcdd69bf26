//! Heuristic extraction of code and requirement fragments from section text.
//!
//! A best-effort classifier over Markdown, not a code parser: fenced blocks
//! are taken verbatim, and loose lines are kept when they look like import,
//! dependency, or installation statements. Precision and recall are both
//! imperfect and that tradeoff is accepted.

/// What a fragment was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    CodeBlock,
    RequirementLine,
}

impl FragmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeBlock => "code_block",
            Self::RequirementLine => "requirement_line",
        }
    }
}

/// One extracted code block or requirement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    /// Fence info string, when the block declared one (e.g. `python`).
    pub language: Option<String>,
    pub text: String,
}

/// Extract fenced code blocks and requirement-looking lines, in document
/// order. An unterminated fence is clipped at the section boundary.
pub fn fragments(content: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut fence: Option<(Option<String>, Vec<&str>)> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        match fence.as_mut() {
            Some((language, lines)) => {
                if trimmed.starts_with("```") {
                    fragments.push(Fragment {
                        kind: FragmentKind::CodeBlock,
                        language: language.take(),
                        text: lines.join("\n"),
                    });
                    fence = None;
                } else {
                    lines.push(line);
                }
            }
            None => {
                if let Some(info) = trimmed.strip_prefix("```") {
                    let info = info.trim();
                    let language = (!info.is_empty()).then(|| info.to_string());
                    fence = Some((language, Vec::new()));
                } else if is_requirement_line(trimmed) {
                    fragments.push(Fragment {
                        kind: FragmentKind::RequirementLine,
                        language: None,
                        text: trimmed.to_string(),
                    });
                }
            }
        }
    }

    if let Some((language, lines)) = fence {
        if !lines.is_empty() {
            fragments.push(Fragment {
                kind: FragmentKind::CodeBlock,
                language,
                text: lines.join("\n"),
            });
        }
    }

    fragments
}

fn is_requirement_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("import ")
        || (lower.starts_with("from ") && lower.contains(" import"))
        || lower.contains("pip install")
        || lower.contains("uv add")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fenced_blocks_with_language() {
        let content = "intro\n```python\nfrom mcp import ClientSession\n```\ntail";
        let fragments = fragments(content);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].kind, FragmentKind::CodeBlock);
        assert_eq!(fragments[0].language.as_deref(), Some("python"));
        assert_eq!(fragments[0].text, "from mcp import ClientSession");
    }

    #[test]
    fn recognizes_loose_requirement_lines() {
        let content = "Run pip install mcp to start.\nimport os\nfrom mcp.server import Server\nnothing here";
        let kinds: Vec<_> = fragments(content).into_iter().map(|f| f.text).collect();
        assert_eq!(
            kinds,
            [
                "Run pip install mcp to start.",
                "import os",
                "from mcp.server import Server",
            ]
        );
    }

    #[test]
    fn requirement_lines_inside_fences_stay_in_the_block() {
        let content = "```\nimport json\n```";
        let fragments = fragments(content);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].kind, FragmentKind::CodeBlock);
        assert!(fragments[0].language.is_none());
    }

    #[test]
    fn unterminated_fence_is_clipped_at_section_end() {
        let fragments = fragments("```bash\nuv add mcp");
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "uv add mcp");
        assert_eq!(fragments[0].language.as_deref(), Some("bash"));
    }

    #[test]
    fn prose_yields_nothing() {
        assert!(fragments("Just a paragraph about tools.\nAnother line.").is_empty());
    }
}

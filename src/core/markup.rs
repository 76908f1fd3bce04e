//! Article body markup.
//!
//! Article content is plain text with three constructs:
//!
//! - fenced code blocks: three backticks, an optional language tag, a
//!   newline, the code, and three closing backticks
//! - heading lines starting with `## `
//! - paragraphs separated by blank lines
//!
//! Fences are recognised first. Headings and paragraphs are only looked for
//! in the text between fences, so code is never reinterpreted. A fence that
//! is never closed (or has no newline after the opening marker) stays as
//! literal paragraph text; [`parse`] accepts every input.

use askama::Template;
use regex::Regex;
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Code {
        language: Option<String>,
        code: String,
    },
    Heading(String),
    Paragraph(String),
}

pub fn parse(content: &str) -> Vec<Block> {
    let content = content.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for caps in FENCE.captures_iter(&content) {
        let Some(whole) = caps.get(0) else { continue };
        parse_text(&content[cursor..whole.start()], &mut blocks);

        let code = caps.get(2).map_or("", |m| m.as_str());
        blocks.push(Block::Code {
            language: caps.get(1).map(|m| m.as_str().to_string()),
            code: code.strip_suffix('\n').unwrap_or(code).to_string(),
        });
        cursor = whole.end();
    }

    parse_text(&content[cursor..], &mut blocks);
    blocks
}

fn parse_text(text: &str, blocks: &mut Vec<Block>) {
    for span in PARAGRAPH_BREAK.split(text) {
        let mut paragraph: Vec<&str> = Vec::new();

        for line in span.lines() {
            if let Some(heading) = line.strip_prefix("## ") {
                flush_paragraph(&mut paragraph, blocks);
                let heading = heading.trim();
                if !heading.is_empty() {
                    blocks.push(Block::Heading(heading.to_string()));
                }
            } else {
                paragraph.push(line);
            }
        }

        flush_paragraph(&mut paragraph, blocks);
    }
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    let text = lines.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        blocks.push(Block::Paragraph(text.to_string()));
    }
    lines.clear();
}

#[derive(Template)]
#[template(source = "<pre><code class=\"language-{{ language }}\">{{ code }}</code></pre>", ext = "html")]
struct CodeHtml<'a> {
    language: &'a str,
    code: &'a str,
}

#[derive(Template)]
#[template(source = "<pre><code>{{ code }}</code></pre>", ext = "html")]
struct PlainCodeHtml<'a> {
    code: &'a str,
}

#[derive(Template)]
#[template(source = "<h2>{{ text }}</h2>", ext = "html")]
struct HeadingHtml<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(source = "<p>{{ text }}</p>", ext = "html")]
struct ParagraphHtml<'a> {
    text: &'a str,
}

impl Block {
    /// HTML of this block; all text is escaped.
    pub fn to_html(&self) -> String {
        match self {
            Block::Code {
                language: Some(language),
                code,
            } => CodeHtml { language, code }.to_string(),
            Block::Code {
                language: None,
                code,
            } => PlainCodeHtml { code }.to_string(),
            Block::Heading(text) => HeadingHtml { text }.to_string(),
            Block::Paragraph(text) => ParagraphHtml { text }.to_string(),
        }
    }
}

/// Parses `content` and renders it as an HTML fragment.
pub fn render_content(content: &str) -> String {
    parse(content)
        .iter()
        .map(Block::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_with_language() {
        let blocks = parse("```ruby\nputs 1\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: Some("ruby".to_string()),
                code: "puts 1".to_string(),
            }]
        );
    }

    #[test]
    fn test_fenced_block_without_language() {
        let blocks = parse("```\nplain\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: None,
                code: "plain".to_string(),
            }]
        );
        assert_eq!(blocks[0].to_html(), "<pre><code>plain</code></pre>");
    }

    #[test]
    fn test_heading_and_paragraphs() {
        let blocks = parse("## Intro\n\nFirst paragraph.\n\nSecond\nline.");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Intro".to_string()),
                Block::Paragraph("First paragraph.".to_string()),
                Block::Paragraph("Second\nline.".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_directly_above_text() {
        let blocks = parse("## Title\nBody right below.");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Title".to_string()),
                Block::Paragraph("Body right below.".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_marker_inside_code_is_left_alone() {
        let blocks = parse("```md\n## not a heading\n\nstill code\n```");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Code { code, .. } => assert_eq!(code, "## not a heading\n\nstill code"),
            other => panic!("expected code block, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_marker_mid_line_is_text() {
        let blocks = parse("Use the ## marker at line start.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("Use the ## marker at line start.".to_string())]
        );
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let blocks = parse("Before\n\n```ruby\nputs 1");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("Before".to_string()),
                Block::Paragraph("```ruby\nputs 1".to_string()),
            ]
        );
    }

    #[test]
    fn test_fence_without_newline_is_literal() {
        let blocks = parse("```ruby puts 1```");
        assert_eq!(blocks, vec![Block::Paragraph("```ruby puts 1```".to_string())]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
        assert_eq!(render_content(""), "");
    }

    #[test]
    fn test_html_is_escaped() {
        let html = render_content("```tsx\n<div>{x && y}\n```\n\nA <b> tag & more");
        assert!(html.contains("<pre><code class=\"language-tsx\">&lt;div&gt;{x &amp;&amp; y}</code></pre>"));
        assert!(html.contains("<p>A &lt;b&gt; tag &amp; more</p>"));
    }

    #[test]
    fn test_crlf_input() {
        let blocks = parse("## Title\r\n\r\nBody\r\n");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Title".to_string()),
                Block::Paragraph("Body".to_string()),
            ]
        );
    }
}

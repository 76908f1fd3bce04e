use portfolio_site::core::catalog::builtin;
use portfolio_site::core::markup::{parse, render_content, Block};

#[test]
fn test_transform_is_total_on_awkward_input() {
    let inputs = [
        "",
        "no markup at all",
        "```",
        "``````",
        "```rust\n",
        "```rust\nfn main() {}",
        "## ",
        "##",
        "\n\n\n\n",
        "```\n```",
        "text ``` inline ``` fences",
        "## heading\n```sh\necho hi\n```\n## another",
        "multi-byte ✓ text ## with ünïcödé\n\n```日本\nコード\n```",
    ];

    for input in inputs {
        let html = render_content(input);
        assert!(!html.contains("<script"), "input {:?}", input);
    }
}

#[test]
fn test_empty_fence_produces_empty_code_block() {
    assert_eq!(
        parse("```\n```"),
        vec![Block::Code {
            language: None,
            code: String::new(),
        }]
    );
}

#[test]
fn test_heading_between_fences() {
    let blocks = parse("## heading\n```sh\necho hi\n```\n## another");
    assert_eq!(
        blocks,
        vec![
            Block::Heading("heading".to_string()),
            Block::Code {
                language: Some("sh".to_string()),
                code: "echo hi".to_string(),
            },
            Block::Heading("another".to_string()),
        ]
    );
}

#[test]
fn test_builtin_articles_render_cleanly() {
    for article in builtin().articles() {
        let blocks = parse(&article.content);
        assert!(matches!(blocks.first(), Some(Block::Heading(h)) if h == "Introduction"));
        assert!(matches!(blocks.last(), Some(Block::Paragraph(_))));

        let html = render_content(&article.content);
        assert!(!html.contains("```"), "article {} left a fence", article.id);
        assert!(!html.contains("## "), "article {} left a heading marker", article.id);
    }
}

#[test]
fn test_rails_article_code_blocks() {
    let article = builtin().find_by_id("1").unwrap();
    let code_blocks: Vec<_> = parse(&article.content)
        .into_iter()
        .filter_map(|block| match block {
            Block::Code { language, code } => Some((language, code)),
            _ => None,
        })
        .collect();

    assert_eq!(code_blocks.len(), 3);
    assert!(code_blocks.iter().all(|(lang, _)| lang.as_deref() == Some("ruby")));
    assert!(code_blocks[0].1.starts_with("# config/routes.rb"));
}

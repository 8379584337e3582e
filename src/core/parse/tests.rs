use super::parse;
use crate::core::node::RenderNode;

fn plain(s: &str) -> RenderNode {
    RenderNode::PlainText(s.to_string())
}

fn block_math(expression: &str, source: &str) -> RenderNode {
    RenderNode::BlockMath {
        expression: expression.to_string(),
        source: source.to_string(),
    }
}

fn inline_math(expression: &str, source: &str) -> RenderNode {
    RenderNode::InlineMath {
        expression: expression.to_string(),
        source: source.to_string(),
    }
}

/// Concatenated leaf text, with list labels, line breaks and math sources restored.
fn flatten(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderNode::LineBreak => out.push('\n'),
            RenderNode::BlockMath { source, .. } | RenderNode::InlineMath { source, .. } => {
                out.push_str(source)
            }
            RenderNode::ListItem { label, children } => {
                out.push_str(label);
                if label.chars().all(|c| c.is_ascii_digit()) {
                    out.push('.');
                }
                out.push(' ');
                out.push_str(&flatten(children));
            }
            other => out.push_str(other.text().unwrap_or_default()),
        }
    }
    out
}

#[test]
fn empty_input_gives_no_nodes() {
    assert!(parse("").is_empty());
}

#[test]
fn plain_single_line_is_one_node() {
    let input = "Nothing special here, just prose (and parentheses).";
    assert_eq!(parse(input), vec![plain(input)]);
}

#[test]
fn unterminated_block_math_stays_literal() {
    let nodes = parse("$$unterminated");
    assert!(!nodes.iter().any(|n| matches!(n, RenderNode::BlockMath { .. })));
    assert!(
        nodes
            .iter()
            .any(|n| matches!(n, RenderNode::PlainText(t) if t.contains("$$unterminated")))
    );
}

#[test]
fn table_only_message() {
    assert_eq!(
        parse("a | b\n---|---\n1 | 2\n"),
        vec![RenderNode::Table {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        }]
    );
}

#[test]
fn bold_is_not_composed_with_italic() {
    assert_eq!(
        parse("**bold *and* text**"),
        vec![RenderNode::Bold("bold *and* text".into())]
    );
}

#[test]
fn bullet_list() {
    let nodes = parse("- one\n- two");
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[1], RenderNode::LineBreak);
    for (node, expected) in [(&nodes[0], "one"), (&nodes[2], "two")] {
        match node {
            RenderNode::ListItem { label, children } => {
                assert_eq!(label, "-");
                assert_eq!(children, &vec![plain(expected)]);
            }
            other => panic!("expected ListItem, got {:?}", other),
        }
    }
}

#[test]
fn block_math_between_paragraphs() {
    assert_eq!(
        parse("Euler:\n$$ e^{i\\pi} + 1 = 0 $$\nNeat."),
        vec![
            plain("Euler:"),
            RenderNode::LineBreak,
            block_math("e^{i\\pi} + 1 = 0", "$$ e^{i\\pi} + 1 = 0 $$"),
            RenderNode::LineBreak,
            plain("Neat."),
        ]
    );
}

#[test]
fn inline_math_splits_prose() {
    assert_eq!(
        parse("We have $x^2$ and **more**"),
        vec![
            plain("We have "),
            inline_math("x^2", "$x^2$"),
            plain(" and "),
            RenderNode::Bold("more".into()),
        ]
    );
}

#[test]
fn block_math_is_not_inline_math() {
    assert_eq!(parse("$$x$$"), vec![block_math("x", "$$x$$")]);
}

#[test]
fn empty_block_math_is_legal() {
    assert_eq!(parse("$$$$"), vec![block_math("", "$$$$")]);
}

#[test]
fn pipes_inside_block_math_are_not_tables() {
    let nodes = parse("$$\n|x| \\\\\n---|---\n$$");
    assert_eq!(nodes.len(), 1);
    assert!(matches!(&nodes[0], RenderNode::BlockMath { .. }));
}

#[test]
fn numbered_list_keeps_source_numbers() {
    let nodes = parse("1. first\n1. second\n5. fifth");
    let labels: Vec<&str> = nodes
        .iter()
        .filter_map(|n| match n {
            RenderNode::ListItem { label, .. } => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["1", "1", "5"]);
    assert_eq!(nodes.iter().filter(|n| n.is_numbered_item()).count(), 3);
}

#[test]
fn list_children_are_inline_only() {
    let nodes = parse("- `cargo` **build**\n2. [site](http://x)");
    for node in &nodes {
        if let RenderNode::ListItem { children, .. } = node {
            assert!(children.iter().all(RenderNode::is_inline));
        }
    }
}

#[test]
fn prose_round_trips_outside_tables() {
    let input = "Intro with *style* and `code`\n- item [a](b)\n\nend";
    let nodes = parse(input);
    let rebuilt = flatten(&nodes);
    // Italic won the first line, so the code span stays literal.
    assert_eq!(rebuilt, "Intro with style and `code`\n- item a\n\nend");
}

#[test]
fn math_keeps_its_delimited_source() {
    let input = "bad $ \\nope $ x\n$$  \\frac{1}  $$";
    let nodes = parse(input);
    assert_eq!(nodes[1], inline_math("\\nope", "$ \\nope $"));
    assert_eq!(nodes[4], block_math("\\frac{1}", "$$  \\frac{1}  $$"));
    assert_eq!(flatten(&nodes), input);
}

#[test]
fn degraded_syntax_round_trips_exactly() {
    let input = "price is $5, **unclosed and `tick\n[no](link";
    assert_eq!(flatten(&parse(input)), input);
}

#[test]
fn mixed_message() {
    let input = "Results for $n = 3$:\n\n| n | f(n) |\n|---|---|\n| 3 | 6 |\n\nSo $$f(n) = n!$$ holds.";
    let nodes = parse(input);
    assert_eq!(
        nodes,
        vec![
            plain("Results for "),
            inline_math("n = 3", "$n = 3$"),
            plain(":"),
            RenderNode::LineBreak,
            RenderNode::LineBreak,
            RenderNode::Table {
                headers: vec!["n".into(), "f(n)".into()],
                rows: vec![vec!["3".into(), "6".into()]],
            },
            RenderNode::LineBreak,
            plain("So "),
            block_math("f(n) = n!", "$$f(n) = n!$$"),
            plain(" holds."),
        ]
    );
}

#[test]
fn parsing_is_repeatable() {
    let input = "**a** $b$ `c`\n- d\n| e | f |\n|---|---|";
    assert_eq!(parse(input), parse(input));
}

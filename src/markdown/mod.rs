//! Markdown-to-HTML transform for blog post bodies.
//!
//! This is a fixed, ordered chain of substitutions rather than a parser. The
//! order of the steps determines the output, so existing posts only render
//! the same way as long as the chain is kept exactly as is. Emphasis inside
//! headings, nested lists and ordered lists (which never get an `<ol>`) are
//! known rough edges.
//!
//! Output is injected into pages unescaped; only author-controlled content may
//! pass through here.

use once_cell::sync::Lazy;
use regex::Regex;

static H3: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^### (.*)$"));
static H2: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^## (.*)$"));
static H1: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^# (.*)$"));
static BOLD: Lazy<Regex> = Lazy::new(|| compile(r"\*\*(.*?)\*\*"));
static ITALIC: Lazy<Regex> = Lazy::new(|| compile(r"\*(.*?)\*"));
static FENCED_CODE: Lazy<Regex> = Lazy::new(|| compile(r"```(\w+)?\n([\s\S]*?)```"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| compile(r"`([^`]+)`"));
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^- (.*)$"));
static LIST_RUN: Lazy<Regex> = Lazy::new(|| compile(r"(<li>.*</li>)(?:\n|$)"));
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^[0-9]+\. (.*)$"));
static LINE: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^(.+)$"));
static P_AROUND_HEADING_OPEN: Lazy<Regex> = Lazy::new(|| compile(r"<p>(<h[1-3]>)"));
static P_AROUND_HEADING_CLOSE: Lazy<Regex> = Lazy::new(|| compile(r"(</h[1-3]>)</p>"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markdown regex is valid")
}

/// Render a post body to HTML. Never fails; unmatched markup passes through.
pub fn render(content: &str) -> String {
    // Headers
    let html = H3.replace_all(content, "<h3>${1}</h3>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    let html = H1.replace_all(&html, "<h1>${1}</h1>");

    // Bold, then italic
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");

    // Code blocks, then inline code
    let html = FENCED_CODE.replace_all(&html, r#"<pre><code class="language-${1}">${2}</code></pre>"#);
    let html = INLINE_CODE.replace_all(&html, "<code>${1}</code>");

    // Unordered lists
    let html = UNORDERED_ITEM.replace_all(&html, "<li>${1}</li>");
    let html = join_list_items(&html);
    let html = LIST_RUN.replace_all(&html, "<ul>${1}</ul>");

    // Ordered lists
    let html = ORDERED_ITEM.replace_all(&html, "<li>${1}</li>");

    // Paragraphs
    let html = break_paragraphs(&html);
    let html = LINE.replace_all(&html, |caps: &regex::Captures<'_>| {
        let line = &caps[1];
        if line.starts_with('<') {
            line.to_string()
        } else {
            format!("<p>{line}</p>")
        }
    });

    // Clean up
    let html = html.replace("<p></p>", "");
    let html = P_AROUND_HEADING_OPEN.replace_all(&html, "${1}");
    let html = P_AROUND_HEADING_CLOSE.replace_all(&html, "${1}");
    html.replace("<p><pre>", "<pre>")
        .replace("</pre></p>", "</pre>")
        .replace("<p><ul>", "<ul>")
        .replace("</ul></p>", "</ul>")
}

/// Drop the newline between a line that ends a list item and a following
/// line that opens one, so each run of items sits on a single line.
fn join_list_items(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        out.push_str(line);
        let Some(next) = lines.peek() else {
            break;
        };
        if !(closes_list_item(line) && next.starts_with("<li>")) {
            out.push('\n');
        }
    }

    out
}

/// True when the line holds an `<li>` and ends with the matching `</li>`.
fn closes_list_item(line: &str) -> bool {
    match (line.find("<li>"), line.rfind("</li>")) {
        (Some(open), Some(close)) => open + "<li>".len() <= close && line.ends_with("</li>"),
        _ => false,
    }
}

/// Turn each blank line that is not followed by markup into a paragraph break.
fn break_paragraphs(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'\n' && bytes[i + 1] == b'\n' && bytes.get(i + 2) != Some(&b'<') {
            out.push_str(&text[copied..i]);
            out.push_str("</p><p>");
            i += 2;
            copied = i;
        } else {
            i += 1;
        }
    }

    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render("Just some text."), "<p>Just some text.</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
        assert!(!render("\n\n\n").contains("<p></p>"));
    }

    #[test]
    fn test_headings_are_not_paragraph_wrapped() {
        assert_eq!(render("### Heading"), "<h3>Heading</h3>");
        assert_eq!(render("## Section"), "<h2>Section</h2>");
        assert_eq!(render("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_heading_then_paragraph() {
        let html = render("## Intro\n\nHello there.");
        // The paragraph break swallows the closing tag of the heading line.
        assert_eq!(html, "<h2>Intro</h2><p>Hello there.");
    }

    #[test]
    fn test_two_paragraphs() {
        let html = render("First one.\n\nSecond one.");
        assert_eq!(html, "<p>First one.</p><p>Second one.</p>");
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(
            render("a **strong** and *soft* word"),
            "<p>a <strong>strong</strong> and <em>soft</em> word</p>"
        );
    }

    #[test]
    fn test_fenced_code_block_not_wrapped() {
        let html = render("```rust\nfn main() {}\n```");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_without_language() {
        let html = render("```\n<tag>\n```");
        assert!(html.starts_with("<pre><code class=\"language-\">"));
        assert!(!html.starts_with("<p>"));
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            render("run `cargo` now"),
            "<p>run <code>cargo</code> now</p>"
        );
    }

    #[test]
    fn test_unordered_list_collapsed_into_one_ul() {
        let html = render("- one\n- two\n- three");
        assert_eq!(html, "<ul><li>one</li><li>two</li><li>three</li></ul>");
    }

    #[test]
    fn test_list_after_paragraph() {
        let html = render("Intro:\n- a\n- b\n\nAfter.");
        assert_eq!(
            html,
            "<p>Intro:</p>\n<ul><li>a</li><li>b</li></ul>\n<p>After.</p>"
        );
    }

    #[test]
    fn test_ordered_list_has_no_ol_wrapper() {
        let html = render("1. first\n2. second");
        assert_eq!(html, "<li>first</li>\n<li>second</li>");
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = "## A\n\n- **x**\n- `y`\n\n```sh\nls\n```\n\nend";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn test_join_list_items_keeps_unrelated_newlines() {
        assert_eq!(join_list_items("<li>a</li>\ntext"), "<li>a</li>\ntext");
        assert_eq!(join_list_items("<li>a</li>\n<li>b</li>"), "<li>a</li><li>b</li>");
        assert_eq!(join_list_items("x</li>\n<li>b</li>"), "x</li>\n<li>b</li>");
    }

    #[test]
    fn test_break_paragraphs_skips_markup() {
        assert_eq!(break_paragraphs("a\n\nb"), "a</p><p>b");
        assert_eq!(break_paragraphs("a\n\n<h2>"), "a\n\n<h2>");
        assert_eq!(break_paragraphs("a\n\n\nb"), "a</p><p>\nb");
    }
}

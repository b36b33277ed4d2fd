//! Building blocks shared by the dialects.

use super::FormatError;
use crate::lang::text::trim_url;
use crate::lang::{Location, Repo};
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Options, Parser, TagEnd};
use regex::Regex;
use std::path::{Component, Path};

/// Characters escaped with a backslash outside of URLs.
pub const METACHARACTERS: &str = "\\`*_{}[]()<>#+-.!~";

/// URLs with an explicit scheme. Matches are trimmed with [`trim_url`].
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:\b[A-Za-z][A-Za-z0-9+.\-]*://|\bmailto:)[^\s<>"`]+"#).unwrap()
});

pub fn bold(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("**{}**", escape(text))
}

/// Code block made of tab-indented lines. The language is not expressible.
pub fn indented_code_block(code: &str) -> String {
    let body = code
        .split('\n')
        .map(|line| format!("\t{}", line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n", body)
}

/// Fenced code block tagged with `language` (untagged when empty).
pub fn fenced_code_block(language: &str, code: &str) -> String {
    format!("```{}\n{}\n```\n\n", language, code.trim())
}

pub fn header(level: usize, text: &str) -> Result<String, FormatError> {
    if level < 1 {
        return Err(FormatError::InvalidHeaderLevel);
    }
    Ok(format!("{} {}\n\n", "#".repeat(level.min(6)), text))
}

pub fn link(text: &str, href: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if href.is_empty() {
        return text.to_string();
    }
    format!("[{}](<{}>)", text, href)
}

pub fn list_entry(depth: usize, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}- {}\n", "  ".repeat(depth), text)
}

pub fn html_anchor(anchor: &str) -> String {
    format!("<a name=\"{}\"></a>", anchor)
}

pub fn details_accordion(title: &str, body: &str) -> String {
    format!(
        "<details><summary>{}</summary>\n<p>\n\n{}</p>\n</details>\n\n",
        title,
        escape(body)
    )
}

pub fn details_accordion_header(title: &str) -> String {
    format!("<details><summary>{}</summary>\n<p>\n\n", title)
}

pub fn details_accordion_terminator() -> String {
    "</p>\n</details>\n\n".to_string()
}

pub fn paragraph(text: &str) -> String {
    format!("{}\n\n", escape(text))
}

/// Escape metacharacters, leaving URLs untouched so they stay clickable.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for found in URL_REGEX.find_iter(text) {
        let url = trim_url(found.as_str());
        if url.is_empty() {
            continue;
        }
        out.push_str(&escape_raw(&text[cursor..found.start()]));
        out.push_str(url);
        cursor = found.start() + url.len();
    }

    out.push_str(&escape_raw(&text[cursor..]));
    out
}

/// Escape every metacharacter, URLs included.
pub fn escape_raw(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if METACHARACTERS.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Inverse of [`escape_raw`]: drop the backslash in front of metacharacters.
pub fn unescape_markdown_literals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if METACHARACTERS.contains(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Text a reader sees once `markdown` is rendered, with block boundaries
/// turned into single spaces.
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();
    let mut block_ended = false;

    for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Text(text) => {
                if block_ended && !out.is_empty() {
                    out.push(' ');
                }
                block_ended = false;
                out.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock) => {
                block_ended = true;
            }
            _ => {}
        }
    }

    out
}

/// Path of the location's file relative to the repository root, with `/`
/// separators and no leading slash.
pub fn repo_path(location: &Location, repo: &Repo) -> Result<String, FormatError> {
    let file = Path::new(&location.filepath);
    let relative = if file.is_absolute() {
        pathdiff::diff_paths(file, &location.work_dir).ok_or_else(|| FormatError::CodeHref {
            path: location.filepath.clone(),
            reason: format!("not reachable from {}", location.work_dir),
        })?
    } else {
        file.to_path_buf()
    };

    let full = Path::new(&repo.path_from_root).join(relative);
    let mut parts: Vec<String> = Vec::new();
    for component in full.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(FormatError::CodeHref {
                        path: location.filepath.clone(),
                        reason: "outside of the repository".to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Position;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("a_b*c", "a\\_b\\*c")]
    #[case("markdown [link](https://foo.bar)", "markdown \\[link\\]\\(https://foo.bar\\)")]
    #[case(
        "see http://abc.def/sdfklj/sdf?key=value&special=%323%20sd now.",
        "see http://abc.def/sdfklj/sdf?key=value&special=%323%20sd now\\."
    )]
    #[case("1. not a list", "1\\. not a list")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape(input), expected);
    }

    #[rstest]
    #[case("[linked](https://foo.bar)", "linked")]
    #[case("**bold** text", "bold text")]
    #[case("~~strikethrough~~ text", "strikethrough text")]
    #[case("paragraph 1\n\nparagraph 2", "paragraph 1 paragraph 2")]
    #[case("# header\n\nparagraph", "header paragraph")]
    #[case("func \\(\\*Client\\) Do", "func (*Client) Do")]
    fn plain_texts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(plain_text(input), expected);
    }

    #[rstest]
    #[case(1, "# t\n\n")]
    #[case(6, "###### t\n\n")]
    #[case(10, "###### t\n\n")]
    fn headers_clamp(#[case] level: usize, #[case] expected: &str) {
        assert_eq!(header(level, "t").unwrap(), expected);
    }

    #[test]
    fn header_level_zero_is_rejected() {
        assert_eq!(header(0, "t"), Err(FormatError::InvalidHeaderLevel));
    }

    #[test]
    fn links() {
        assert_eq!(link("", "https://x"), "");
        assert_eq!(link("text", ""), "text");
        assert_eq!(link("text", "https://x"), "[text](<https://x>)");
    }

    #[test]
    fn list_entries_indent_by_depth() {
        assert_eq!(list_entry(0, "a"), "- a\n");
        assert_eq!(list_entry(2, "a"), "    - a\n");
        assert_eq!(list_entry(1, ""), "");
    }

    #[test]
    fn bold_escapes() {
        assert_eq!(bold("a*b"), "**a\\*b**");
        assert_eq!(bold(""), "");
    }

    #[test]
    fn fenced_code_trims() {
        assert_eq!(fenced_code_block("go", "\nx := 1\n"), "```go\nx := 1\n```\n\n");
        assert_eq!(indented_code_block("Line 1\nLine 2"), "\tLine 1\n\tLine 2\n\n");
    }

    fn location(filepath: &str) -> Location {
        Location::new(
            Position::new(1, 1),
            Position::new(1, 2),
            filepath,
            "/repo/wd",
            Some(Arc::new(Repo::new("https://example.com/r", "main", "/wd"))),
        )
    }

    #[rstest]
    #[case("/repo/wd/pkg/file.go", "wd/pkg/file.go")]
    #[case("pkg/file.go", "wd/pkg/file.go")]
    #[case("/repo/other/file.go", "other/file.go")]
    fn repo_paths(#[case] filepath: &str, #[case] expected: &str) {
        let loc = location(filepath);
        let repo = loc.repo.clone().unwrap();
        assert_eq!(repo_path(&loc, &repo).unwrap(), expected);
    }

    proptest! {
        #[test]
        fn escape_round_trips_without_urls(text in "[A-Za-z0-9 \\\\`*_{}\\[\\]()<>#+\\-.!~]{0,64}") {
            let escaped = escape(&text);
            prop_assert_eq!(unescape_markdown_literals(&escaped), text.clone());
            prop_assert_eq!(escape(&unescape_markdown_literals(&escaped)), escaped);
        }
    }
}

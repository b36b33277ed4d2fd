//! Line-based parser turning raw doc comment text into blocks.
//!
//! At each position the first rule that matches wins:
//!
//! 1. blank lines are skipped
//! 2. a header: either `# Text` or a single capitalised line without
//!    sentence punctuation, with a blank line and more text after it
//! 3. a run of indented lines (a tab or at least two spaces), blank lines
//!    allowed inside: a list when the first line starts with a list marker,
//!    a code block otherwise
//! 4. a paragraph, running to the next blank line or indented list
//!
//! Parsing never fails. Text that matches nothing more specific is a
//! paragraph.

use super::block::{Block, BlockKind};
use super::config::Config;
use super::list::List;
use super::span::{parse_spans, LinkDefs};
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+•]|(\d{1,9})[.)])(?:[ \t]+|$)").unwrap());

static LINK_DEF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\[\]]+)\]:[ \t]+(\S+)$").unwrap());

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Characters that rule a line out as an implicit header.
const NON_HEADER_CHARS: &[char] = &['!', ':', ';', ',', '{', '}', '[', ']', '<', '>', '.', '?'];

/// A list as found in the source, before item content is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawList {
    pub blank_between: bool,
    pub items: Vec<RawItem>,
}

/// Item marker number (ordered items only) and content lines with the
/// marker removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub number: Option<u32>,
    pub lines: Vec<String>,
}

/// Parse a whole doc comment.
pub fn parse(text: &str, cfg: &Config) -> Vec<Block> {
    let text = text.replace("\r\n", "\n");
    let lines: Vec<&str> = text.split('\n').collect();
    let (lines, defs) = extract_link_defs(&lines);
    parse_lines(&lines, cfg, &defs)
}

/// Parse already split lines into blocks at the configuration's level.
pub fn parse_lines(lines: &[&str], cfg: &Config, defs: &LinkDefs) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_blank(line) {
            i += 1;
            continue;
        }

        if let Some(text) = header_text(lines, i) {
            let spans = parse_spans(&collapse_whitespace(text), cfg, defs);
            blocks.push(Block::new(BlockKind::Header, spans, cfg.level));
            i += 1;
            continue;
        }

        if is_indented(line) {
            let end = indented_run_end(lines, i);
            let run = &lines[i..end];
            if list_marker(run[0].trim_start()).is_some() {
                let list = List::from_raw(raw_list(run), cfg, defs);
                if !list.items().is_empty() {
                    blocks.push(Block::new_list(list, cfg.level));
                }
            } else {
                blocks.push(Block::code(code_text(run), cfg.level));
            }
            i = end;
            continue;
        }

        let end = paragraph_end(lines, i);
        let text = fold_lines(&lines[i..end]);
        blocks.push(Block::new(
            BlockKind::Paragraph,
            parse_spans(&text, cfg, defs),
            cfg.level,
        ));
        i = end;
    }

    blocks
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_indented(line: &str) -> bool {
    line.starts_with('\t') || line.starts_with("  ")
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop up to `n` leading whitespace characters.
fn strip_indent(line: &str, n: usize) -> &str {
    let mut rest = line;
    for _ in 0..n {
        match rest.chars().next() {
            Some(c) if c.is_whitespace() => rest = &rest[c.len_utf8()..],
            _ => break,
        }
    }
    rest
}

/// Marker number (for ordered markers) and byte length of the marker plus the
/// whitespace after it.
fn list_marker(text: &str) -> Option<(Option<u32>, usize)> {
    let caps = LIST_MARKER_REGEX.captures(text)?;
    let len = caps.get(0)?.end();
    match caps.get(1) {
        Some(digits) => {
            let number: u32 = digits.as_str().parse().ok()?;
            (number > 0).then_some((Some(number), len))
        }
        None => Some((None, len)),
    }
}

/// Remove paragraphs made entirely of `[Text]: URL` lines and collect them.
fn extract_link_defs<'a>(lines: &[&'a str]) -> (Vec<&'a str>, LinkDefs) {
    let mut kept = Vec::with_capacity(lines.len());
    let mut defs = LinkDefs::new();
    let mut i = 0;

    while i < lines.len() {
        if is_blank(lines[i]) {
            kept.push(lines[i]);
            i += 1;
            continue;
        }

        let end = (i..lines.len())
            .find(|&j| is_blank(lines[j]))
            .unwrap_or(lines.len());
        let run = &lines[i..end];
        let all_defs = !is_indented(run[0]) && run.iter().all(|l| LINK_DEF_REGEX.is_match(l.trim()));

        if all_defs {
            for line in run {
                if let Some(caps) = LINK_DEF_REGEX.captures(line.trim()) {
                    defs.entry(caps[1].to_string())
                        .or_insert_with(|| caps[2].to_string());
                }
            }
        } else {
            kept.extend_from_slice(run);
        }
        i = end;
    }

    (kept, defs)
}

fn header_text<'a>(lines: &[&'a str], i: usize) -> Option<&'a str> {
    let line = lines[i];
    let preceded_by_blank = i == 0 || is_blank(lines[i - 1]);
    if !preceded_by_blank {
        return None;
    }

    if let Some(text) = line.strip_prefix("# ") {
        let followed_by_blank = lines.get(i + 1).map_or(true, |next| is_blank(next));
        let text = text.trim();
        return (followed_by_blank && !text.is_empty()).then_some(text);
    }

    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper || line.contains(NON_HEADER_CHARS) {
        return None;
    }

    let followed_by_blank = lines.get(i + 1).is_some_and(|next| is_blank(next));
    let more_text = lines.iter().skip(i + 2).any(|l| !is_blank(l));
    (followed_by_blank && more_text).then(|| line.trim())
}

/// End (exclusive) of the indented run starting at `start`, trailing blank
/// lines excluded.
fn indented_run_end(lines: &[&str], start: usize) -> usize {
    let mut last = start;
    for (j, line) in lines.iter().enumerate().skip(start) {
        if is_blank(line) {
            continue;
        }
        if !is_indented(line) {
            break;
        }
        last = j;
    }
    last + 1
}

fn paragraph_end(lines: &[&str], start: usize) -> usize {
    let mut end = start + 1;
    while let Some(line) = lines.get(end) {
        let starts_list = is_indented(line) && list_marker(line.trim_start()).is_some();
        if is_blank(line) || starts_list {
            break;
        }
        end += 1;
    }
    end
}

/// Join paragraph lines with single spaces.
fn fold_lines(lines: &[&str]) -> String {
    let joined = lines.iter().map(|l| l.trim()).collect::<Vec<_>>().join(" ");
    collapse_whitespace(&joined)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").into_owned()
}

/// Strip the run's common indentation. Blank lines become empty.
fn code_text(run: &[&str]) -> String {
    let indent = min_indent(run);
    run.iter()
        .map(|line| if is_blank(line) { "" } else { strip_indent(line, indent) })
        .collect::<Vec<_>>()
        .join("\n")
}

fn min_indent(run: &[&str]) -> usize {
    run.iter()
        .filter(|l| !is_blank(l))
        .map(|l| leading_whitespace(l))
        .min()
        .unwrap_or(0)
}

fn raw_list(run: &[&str]) -> RawList {
    let indent = min_indent(run);
    let lines: Vec<&str> = run
        .iter()
        .map(|line| if is_blank(line) { "" } else { strip_indent(line, indent) })
        .collect();
    let base = leading_whitespace(lines[0]);

    let mut items: Vec<RawItem> = Vec::new();
    let mut content_col = 0;
    let mut blank_between = false;
    let mut pending_blank = false;

    for line in lines {
        if line.is_empty() {
            pending_blank = true;
            if let Some(item) = items.last_mut() {
                item.lines.push(String::new());
            }
            continue;
        }

        let own_indent = leading_whitespace(line);
        let trimmed = line.trim_start();
        match list_marker(trimmed) {
            Some((number, len)) if own_indent <= base => {
                if pending_blank && !items.is_empty() {
                    blank_between = true;
                }
                content_col = own_indent + trimmed[..len].chars().count();
                items.push(RawItem {
                    number,
                    lines: vec![trimmed[len..].to_string()],
                });
            }
            _ => {
                if let Some(item) = items.last_mut() {
                    item.lines.push(strip_indent(line, content_col).to_string());
                }
            }
        }
        pending_blank = false;
    }

    for item in &mut items {
        while item.lines.last().is_some_and(|l| l.is_empty()) {
            item.lines.pop();
        }
    }

    RawList {
        blank_between,
        items,
    }
}

//! Small text utilities shared by the entity types.

use super::error::LangError;

/// Width of a tab stop when printing declarations.
const TAB_WIDTH: usize = 4;

/// First sentence of the first paragraph of a doc comment, ending in a period.
///
/// A period followed by a space ends the sentence unless it follows a single
/// capital letter, so initials such as `J. Doe` do not cut it short.
pub fn extract_summary(doc: &str) -> String {
    let doc = normalize_doc(doc);
    let first = doc.split("\n\n").next().unwrap_or_default();
    let paragraph = first.lines().map(str::trim).collect::<Vec<_>>().join(" ");

    let mut summary = String::new();
    let (mut back1, mut back2, mut back3) = ('\0', '\0', '\0');
    for c in paragraph.chars() {
        let ends_sentence = c == ' ' && back1 == '.';
        let is_initial = back2.is_uppercase() && !back3.is_alphanumeric();
        if ends_sentence && !is_initial {
            break;
        }

        summary.push(c);
        back3 = back2;
        back2 = back1;
        back1 = c;
    }

    if back1 != '.' && back1 != '\0' {
        summary.push('.');
    }
    summary
}

fn normalize_doc(doc: &str) -> String {
    doc.replace("\r\n", "\n").trim().to_string()
}

/// Split a CamelCase identifier into space separated words, capitalising the
/// first letter. Acronyms stay together: `HTTPServer` becomes `HTTP Server`.
pub fn split_camel(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return out;
    };

    let mut previous: char = first.to_uppercase().next().unwrap_or(first);
    let mut word_len = 0;
    for c in chars {
        let prev_upper = previous.is_ascii_uppercase();
        let cur_upper = c.is_ascii_uppercase();

        if prev_upper && !cur_upper && word_len > 0 {
            out.push(' ');
            out.push(previous);
            word_len = 1;
        } else if !prev_upper && cur_upper {
            out.push(previous);
            out.push(' ');
            word_len = 0;
        } else {
            out.push(previous);
            word_len += 1;
        }
        previous = c;
    }

    out.push(previous);
    out
}

/// Lay out declaration source for display: tabs become spaces at 4-column
/// stops, trailing whitespace and surrounding blank lines are dropped.
pub fn print_source(what: &'static str, source: &str) -> Result<String, LangError> {
    let source = source.replace("\r\n", "\n");
    let lines: Vec<String> = source
        .lines()
        .map(|line| expand_tabs(line).trim_end().to_string())
        .collect();

    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => Ok(lines[start..=end].join("\n")),
        _ => Err(LangError::EmptySource { what }),
    }
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(c);
            col += 1;
        }
    }
    out
}

/// Characters that end a sentence rather than a bare URL.
const URL_TRAILING: &[char] = &['.', ',', ':', ';', '!', '?', '\'', '"'];

/// Drop trailing punctuation and unbalanced closing brackets from a URL
/// candidate found in running text.
pub fn trim_url(candidate: &str) -> &str {
    let mut url = candidate;
    while let Some(last) = url.chars().last() {
        let unbalanced = match last {
            ')' => url.matches('(').count() < url.matches(')').count(),
            ']' => url.matches('[').count() < url.matches(']').count(),
            _ => false,
        };
        if !(URL_TRAILING.contains(&last) || unbalanced) {
            break;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
    url
}

/// Last path element of a directory, ignoring trailing separators.
pub fn dir_name(dir: &str) -> &str {
    dir.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
}

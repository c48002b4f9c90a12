//! Removal of Markdown code fences from model output.

const FENCE: &str = "```";

/// Strips every code fence, its language tag, and surrounding whitespace.
///
/// The result never contains a fence, so applying it twice is the same as once.
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.to_string();

    while let Some(start) = text.find(FENCE) {
        let after = start + FENCE.len();
        let tag_len = language_tag_len(&text[after..]);
        text.replace_range(start..after + tag_len, "");
    }

    text.trim().to_string()
}

/// Info strings models put after an opening fence for query code.
const LANGUAGE_TAGS: &[&str] = &[
    "sql", "sqlite", "sqlite3", "postgresql", "postgres", "psql", "mysql", "plsql", "tsql",
];

fn is_language_tag(token: &str) -> bool {
    LANGUAGE_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(token))
}

/// Length of the language tag right after a fence, if any.
///
/// Only known tags count. Anything else, a keyword like `SELECT` included,
/// is part of the query.
fn language_tag_len(rest: &str) -> usize {
    let word_end = rest
        .find(|c: char| c.is_whitespace() || c == '`')
        .unwrap_or(rest.len());

    if is_language_tag(&rest[..word_end]) {
        word_end
    } else {
        0
    }
}

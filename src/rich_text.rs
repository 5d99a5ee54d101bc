//! Bold markup in localized content strings.
//!
//! Content text marks emphasis with `**double asterisks**`. Nothing else is
//! recognised: unterminated markers stay literal.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.+?)\*\*").unwrap_or_else(|error| unreachable!("invalid bold pattern: {error}"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub bold: bool,
}

impl<'a> Span<'a> {
    pub const fn plain(text: &'a str) -> Self {
        Self { text, bold: false }
    }

    pub const fn bold(text: &'a str) -> Self {
        Self { text, bold: true }
    }
}

/// Splits `text` into plain and bold spans in reading order.
///
/// Empty plain runs between adjacent bold runs are omitted.
pub fn parse(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for capture in BOLD_PATTERN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (capture.get(0), capture.get(1)) else {
            continue;
        };

        if whole.start() > cursor {
            spans.push(Span::plain(&text[cursor..whole.start()]));
        }
        spans.push(Span::bold(inner.as_str()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }

    spans
}

/// Text with the markers removed.
pub fn strip(text: &str) -> String {
    parse(text).into_iter().map(|span| span.text).collect()
}

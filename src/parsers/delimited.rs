use crate::model::TranslationPair;

/// Separator that split a line, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Equals,
    Tab,
    TriplePipe,
    /// No separator; the whole line is an untranslated source.
    None,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Equals => "=",
            Delimiter::Tab => "\\t",
            Delimiter::TriplePipe => "|||",
            Delimiter::None => "none",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub messages: Vec<TranslationPair>,
    pub skipped: usize,
}

/// Classifies one raw line. Returns `None` for blank and `#` comment lines.
///
/// The first matching delimiter wins, checked in the order `=`, tab, `|||`,
/// and the split always happens at its first occurrence. There is no escape
/// syntax, so the target may contain the delimiter again.
pub fn parse_line_with_delimiter(line: &str) -> Option<(TranslationPair, Delimiter)> {
    let logical = trim_blank(line);

    if logical.is_empty() || logical.starts_with('#') {
        return None;
    }

    let split = [
        ("=", Delimiter::Equals),
        ("\t", Delimiter::Tab),
        ("|||", Delimiter::TriplePipe),
    ]
    .into_iter()
    .find_map(|(sep, kind)| logical.split_once(sep).map(|parts| (parts, kind)));

    match split {
        Some(((src, tgt), kind)) => {
            Some((TranslationPair::new(trim_blank(src), trim_blank(tgt)), kind))
        }
        None => Some((TranslationPair::new(logical, ""), Delimiter::None)),
    }
}

pub fn parse_line(line: &str) -> Option<TranslationPair> {
    parse_line_with_delimiter(line).map(|(pair, _)| pair)
}

/// Parses a whole input text, keeping retained lines in input order.
pub fn parse(text: &str) -> ParsedInput {
    let mut out = ParsedInput::default();

    for (i, line) in split_lines(text).enumerate() {
        let ln = i + 1;

        match parse_line_with_delimiter(line) {
            Some((pair, kind)) => {
                tracing::trace!(line = ln, delimiter = kind.as_str(), "parsed message");
                out.messages.push(pair);
            }
            None => {
                tracing::trace!(line = ln, "skipped blank or comment line");
                out.skipped += 1;
            }
        }
    }

    out
}

// Line boundaries: \n, \r\n, lone \r, VT, FF, FS/GS/RS, NEL, U+2028, U+2029.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{B}' | '\u{C}' | '\u{1C}'..='\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits into lines on every line break character, treating `\r\n` as one
/// break. A trailing break does not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((pos, c)) => {
                let line = &rest[..pos];
                let mut next = pos + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

// Unicode whitespace plus the FS/GS/RS/US separators (U+001C..U+001F).
fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c))
}

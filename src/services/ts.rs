//! Qt Linguist TS document construction and serialization.

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ConvertError;
use crate::model::TranslationPair;

pub const TS_VERSION: &str = "2.1";
pub const CONTEXT_NAME: &str = "SignalRGB";

const INDENT: usize = 2;

/// In-memory TS tree: one root, one context, messages in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsDocument {
    pub version: String,
    pub language: String,
    pub context: TsContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<TranslationPair>,
}

impl TsDocument {
    pub fn build(messages: Vec<TranslationPair>, language: impl Into<String>) -> Self {
        Self {
            version: TS_VERSION.to_string(),
            language: language.into(),
            context: TsContext {
                name: CONTEXT_NAME.to_string(),
                messages,
            },
        }
    }

    pub fn message_count(&self) -> usize {
        self.context.messages.len()
    }

    /// Serializes to indented UTF-8 bytes.
    ///
    /// Every text value is checked before anything is written, so a failure
    /// never yields a truncated buffer. Output is deterministic for a given tree.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConvertError> {
        self.check_representable()?;

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
        self.write_to(&mut writer).map_err(ConvertError::Serialize)?;

        let mut out = writer.into_inner();
        out.push(b'\n');
        Ok(out)
    }

    fn write_to(&self, w: &mut Writer<Vec<u8>>) -> std::io::Result<()> {
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        w.write_event(Event::DocType(BytesText::from_escaped("TS")))?;

        let version = escape_attr(&self.version);
        let language = escape_attr(&self.language);
        // (bytes, bytes) attributes are written as-is; values are escaped above.
        let root = BytesStart::new("TS").with_attributes([
            (b"version".as_slice(), version.as_bytes()),
            (b"language".as_slice(), language.as_bytes()),
        ]);
        w.write_event(Event::Start(root))?;
        w.write_event(Event::Start(BytesStart::new("context")))?;
        write_text_element(w, "name", &self.context.name)?;

        for m in &self.context.messages {
            w.write_event(Event::Start(BytesStart::new("message")))?;
            write_text_element(w, "source", &m.source)?;
            write_text_element(w, "translation", &m.target)?;
            w.write_event(Event::End(BytesEnd::new("message")))?;
        }

        w.write_event(Event::End(BytesEnd::new("context")))?;
        w.write_event(Event::End(BytesEnd::new("TS")))?;
        Ok(())
    }

    fn check_representable(&self) -> Result<(), ConvertError> {
        for (i, m) in self.context.messages.iter().enumerate() {
            for (field, text) in [("source", &m.source), ("translation", &m.target)] {
                if let Some(c) = text.chars().find(|&c| !is_xml_char(c)) {
                    return Err(ConvertError::Unrepresentable {
                        index: i + 1,
                        field,
                        code: c as u32,
                    });
                }
            }
        }
        Ok(())
    }
}

fn write_text_element(w: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> std::io::Result<()> {
    w.write_event(Event::Start(BytesStart::new(tag)))?;
    w.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    w.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

// Readers normalize a literal CR to LF, so it is written as a reference.
fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

// Attribute-value normalization also turns tab and LF into spaces.
fn escape_attr(value: &str) -> String {
    escape(value)
        .replace('\t', "&#9;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
}

// XML 1.0 `Char` production. Surrogates cannot occur in a Rust `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

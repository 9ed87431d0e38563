use std::path::PathBuf;

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::parsers::delimited;
use crate::services::{encoding, fingerprint, output, qa, ts::TsDocument};

pub const COMPILER_TOOL: &str = "lrelease";
pub const CATALOG_EXTENSION: &str = ".qm";

#[derive(Debug)]
pub struct Report {
    pub output: PathBuf,
    pub messages: usize,
    pub skipped: usize,
    pub bytes: usize,
    pub sha256: String,
    pub issues: Vec<qa::QaIssue>,
}

impl Report {
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} with {} messages. Compile with {} to get {}.",
            self.output.display(),
            self.messages,
            COMPILER_TOOL,
            CATALOG_EXTENSION
        )
    }
}

/// Runs the whole conversion: read, parse, check, serialize, write.
///
/// Nothing is written unless every earlier step succeeded.
pub fn run(cfg: &ConvertConfig) -> Result<Report, ConvertError> {
    let text = encoding::read_input(&cfg.input)?;

    let parsed = delimited::parse(&text);
    tracing::info!(
        messages = parsed.messages.len(),
        skipped = parsed.skipped,
        "parsed input"
    );

    let issues = qa::run(&parsed.messages);
    qa::log_issues(&issues);

    let doc = TsDocument::build(parsed.messages, cfg.language.as_str());
    let bytes = doc.to_bytes()?;
    let sha256 = fingerprint::sha256_hex(&bytes);

    output::write_atomic(&cfg.output, &bytes)?;
    tracing::info!(
        path = %cfg.output.display(),
        bytes = bytes.len(),
        sha256 = %sha256,
        language = %cfg.language,
        "wrote TS document"
    );

    Ok(Report {
        output: cfg.output.clone(),
        messages: doc.message_count(),
        skipped: parsed.skipped,
        bytes: bytes.len(),
        sha256,
        issues,
    })
}

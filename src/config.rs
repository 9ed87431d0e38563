use std::path::PathBuf;

pub const DEFAULT_LANGUAGE: &str = "zh_CN";

/// Settings for a single conversion run.
///
/// `language` is passed through verbatim; locale validation is left to the
/// tool that compiles the TS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub language: String,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

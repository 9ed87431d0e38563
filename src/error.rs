use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a conversion run.
///
/// Line parsing never fails, so there is no variant for malformed input lines.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read input file {}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file {} is not valid UTF-8 (first bad byte on line {line}, looks like {guess})", path.display())]
    InputDecode {
        path: PathBuf,
        line: usize,
        guess: String,
    },

    #[error("message {index} has a {field} containing U+{code:04X}, which XML 1.0 cannot represent")]
    Unrepresentable {
        index: usize,
        field: &'static str,
        code: u32,
    },

    #[error("failed to serialize TS document")]
    Serialize(#[source] io::Error),

    #[error("cannot write output file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

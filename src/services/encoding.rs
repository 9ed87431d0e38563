use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::UTF_8;

use crate::error::ConvertError;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Reads the whole input file and decodes it as strict UTF-8.
pub fn read_input(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "read input");

    decode_utf8(path, &bytes)
}

/// Decodes without replacement characters. A leading BOM is dropped.
pub fn decode_utf8(path: &Path, bytes: &[u8]) -> Result<String, ConvertError> {
    let body = match bytes.strip_prefix(&UTF8_BOM) {
        Some(rest) => {
            tracing::debug!("stripped UTF-8 byte order mark");
            rest
        }
        None => bytes,
    };

    match UTF_8.decode_without_bom_handling_and_without_replacement(body) {
        Some(text) => Ok(text.into_owned()),
        None => {
            let valid_up_to = std::str::from_utf8(body)
                .err()
                .map(|e| e.valid_up_to())
                .unwrap_or(body.len());
            let line = body[..valid_up_to].iter().filter(|&&b| b == b'\n').count() + 1;

            Err(ConvertError::InputDecode {
                path: path.to_path_buf(),
                line,
                guess: guess_encoding(bytes),
            })
        }
    }
}

/// Best-effort name of the encoding the bytes were actually written in.
pub fn guess_encoding(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true).name().to_lowercase()
}

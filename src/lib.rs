//! Converts line-oriented source/translation text files into Qt Linguist
//! TS documents.

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use config::ConvertConfig;
pub use error::ConvertError;
pub use model::TranslationPair;

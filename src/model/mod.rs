pub mod pair;

pub use pair::TranslationPair;

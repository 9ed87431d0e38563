/// One translatable string and its rendered translation.
///
/// An empty `target` means the message is untranslated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationPair {
    pub source: String,
    pub target: String,
}

impl TranslationPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn is_untranslated(&self) -> bool {
        self.target.is_empty()
    }
}

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::TranslationPair;

// Qt placeholders: %1..%99, %L1 (localized numbers), %n (plural count).
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%(?:L?[1-9][0-9]?|n)").expect("placeholder regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaIssue {
    /// 1-based position in the message list.
    pub index: usize,
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Non-fatal checks over the parsed messages. Issues never stop a run.
pub fn run(messages: &[TranslationPair]) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (i, m) in messages.iter().enumerate() {
        let index = i + 1;

        if let Some(&first) = first_seen.get(m.source.as_str()) {
            issues.push(QaIssue {
                index,
                code: "DUPLICATE_SOURCE",
                severity: Severity::Warning,
                message: format!("source already defined by message {first}"),
            });
        } else {
            first_seen.insert(m.source.as_str(), index);
        }

        if m.is_untranslated() {
            continue;
        }

        if m.target == m.source {
            issues.push(QaIssue {
                index,
                code: "SAME_AS_ORIGINAL",
                severity: Severity::Info,
                message: "translation is identical to the source".to_string(),
            });
        }

        let src_ph = placeholders(&m.source);
        let tgt_ph = placeholders(&m.target);
        if src_ph != tgt_ph {
            issues.push(QaIssue {
                index,
                code: "PLACEHOLDER_MISMATCH",
                severity: Severity::Warning,
                message: format!(
                    "placeholders differ: source {:?}, translation {:?}",
                    src_ph, tgt_ph
                ),
            });
        }
    }

    issues
}

pub fn log_issues(issues: &[QaIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Warning => {
                tracing::warn!(message_index = issue.index, code = issue.code, "{}", issue.message)
            }
            Severity::Info => {
                tracing::info!(message_index = issue.index, code = issue.code, "{}", issue.message)
            }
        }
    }
}

fn placeholders(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER_RE.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(issues: &[QaIssue]) -> Vec<(usize, &'static str)> {
        issues.iter().map(|i| (i.index, i.code)).collect()
    }

    #[test]
    fn clean_messages_have_no_issues() {
        let messages = vec![
            TranslationPair::new("Open %1", "打开 %1"),
            TranslationPair::new("Untranslated", ""),
        ];
        assert!(run(&messages).is_empty());
    }

    #[test]
    fn flags_duplicate_sources_after_the_first() {
        let messages = vec![
            TranslationPair::new("a", "1"),
            TranslationPair::new("b", "2"),
            TranslationPair::new("a", "3"),
        ];
        assert_eq!(codes(&run(&messages)), vec![(3, "DUPLICATE_SOURCE")]);
    }

    #[test]
    fn flags_translation_equal_to_source() {
        let messages = vec![TranslationPair::new("OK", "OK")];
        assert_eq!(codes(&run(&messages)), vec![(1, "SAME_AS_ORIGINAL")]);
    }

    #[test]
    fn flags_placeholder_mismatch() {
        let messages = vec![
            TranslationPair::new("%1 of %2", "%2 中的 %1"),
            TranslationPair::new("%n files", "文件"),
            TranslationPair::new("%L1 MB", "%1 MB"),
        ];
        assert_eq!(
            codes(&run(&messages)),
            vec![(2, "PLACEHOLDER_MISMATCH"), (3, "PLACEHOLDER_MISMATCH")]
        );
    }

    #[test]
    fn untranslated_messages_skip_translation_checks() {
        let messages = vec![TranslationPair::new("%1 items", "")];
        assert!(run(&messages).is_empty());
    }
}

//! Answer anonymization for the peer-review stage.
//!
//! Before a member reviews its peers, answers are stripped of identity and
//! labeled `Answer_{k}`. The label index comes from the position in the
//! *original* answer list — including the reviewer's own answer, which is
//! only dropped afterwards. Labels can therefore be non-contiguous
//! (Answer_1, Answer_3 when Answer_2 was the reviewer's own). That scheme
//! is load-bearing: rankings produced against those labels can only be
//! resolved back to members through the same indexing.

use crate::council::value_objects::Answer;

/// An answer with its identity replaced by a stable anonymous label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousAnswer {
    /// Label of the form `Answer_{k}`, k = 1-based position in the original list
    pub label: String,
    /// The answer text
    pub text: String,
}

/// Anonymize `answers` for review by `reviewer_id`.
///
/// Every answer gets the label `Answer_{idx+1}` from its position in the
/// original list; the reviewer's own answer is then excluded from the
/// returned set. Original ordering is preserved.
pub fn anonymize_answers(answers: &[Answer], reviewer_id: &str) -> Vec<AnonymousAnswer> {
    answers
        .iter()
        .enumerate()
        .filter(|(_, answer)| answer.member_id != reviewer_id)
        .map(|(idx, answer)| AnonymousAnswer {
            label: format!("Answer_{}", idx + 1),
            text: answer.answer.clone(),
        })
        .collect()
}

/// Resolve an anonymous label back to the member id that produced it.
///
/// `answers` must be the same original, ordered list the labels were
/// assigned against. Returns `None` for malformed or out-of-range labels.
pub fn resolve_label<'a>(label: &str, answers: &'a [Answer]) -> Option<&'a str> {
    let index: usize = label.strip_prefix("Answer_")?.parse().ok()?;
    let answer = answers.get(index.checked_sub(1)?)?;
    Some(&answer.member_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Vec<Answer> {
        vec![
            Answer::new("member1", "llama2:7b", "Answer from member1"),
            Answer::new("member2", "mistral:7b", "Answer from member2"),
            Answer::new("member3", "phi", "Answer from member3"),
        ]
    }

    #[test]
    fn test_reviewer_excluded() {
        let anonymous = anonymize_answers(&answers(), "member3");
        assert_eq!(anonymous.len(), 2);
        assert!(anonymous.iter().all(|a| a.text != "Answer from member3"));
    }

    #[test]
    fn test_labels_use_original_positions() {
        let anonymous = anonymize_answers(&answers(), "member3");
        let labels: Vec<_> = anonymous.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Answer_1", "Answer_2"]);
    }

    #[test]
    fn test_labels_non_contiguous_when_reviewer_mid_list() {
        // member2 sits at index 1, so Answer_2 is skipped - never renumbered
        let anonymous = anonymize_answers(&answers(), "member2");
        let labels: Vec<_> = anonymous.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Answer_1", "Answer_3"]);
    }

    #[test]
    fn test_unknown_reviewer_keeps_everything() {
        let anonymous = anonymize_answers(&answers(), "chairman");
        assert_eq!(anonymous.len(), 3);
    }

    #[test]
    fn test_resolve_label() {
        let answers = answers();
        assert_eq!(resolve_label("Answer_1", &answers), Some("member1"));
        assert_eq!(resolve_label("Answer_3", &answers), Some("member3"));
    }

    #[test]
    fn test_resolve_label_malformed() {
        let answers = answers();
        assert_eq!(resolve_label("Answer_0", &answers), None);
        assert_eq!(resolve_label("Answer_4", &answers), None);
        assert_eq!(resolve_label("Answer_x", &answers), None);
        assert_eq!(resolve_label("Response A", &answers), None);
    }
}

//! Label tallying.

use tracing::debug;

use crate::core::types::Poll;

/// Count how many times each label occurs.
///
/// Keys appear in order of first occurrence. The counts always sum to
/// `labels.len()`.
pub fn create_poll<S: AsRef<str>>(labels: &[S]) -> Poll {
    let mut poll = Poll::new();
    for label in labels {
        *poll.entry(label.as_ref().to_owned()).or_insert(0) += 1;
    }
    debug!(labels = labels.len(), distinct = poll.len(), "create_poll");
    poll
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_of(entries: &[(&str, usize)]) -> Poll {
        entries
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect()
    }

    #[test]
    fn empty_input_returns_empty_poll() {
        let labels: [&str; 0] = [];
        assert!(create_poll(&labels).is_empty());
    }

    #[test]
    fn single_label_counts_one() {
        assert_eq!(create_poll(&["cake"]), poll_of(&[("cake", 1)]));
    }

    #[test]
    fn repeated_label_accumulates() {
        assert_eq!(create_poll(&["cake", "cake"]), poll_of(&[("cake", 2)]));
    }

    #[test]
    fn mixed_labels_are_counted_independently() {
        let poll = create_poll(&[
            "chocolate",
            "crisps",
            "cake",
            "cake",
            "crisps",
            "cake",
            "fruit",
            "chocolate",
        ]);
        assert_eq!(
            poll,
            poll_of(&[("chocolate", 2), ("crisps", 2), ("cake", 3), ("fruit", 1)])
        );
    }

    #[test]
    fn keys_keep_first_occurrence_order() {
        let poll = create_poll(&["crisps", "cake", "cake", "cake"]);
        let keys: Vec<&str> = poll.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["crisps", "cake"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let labels = vec!["tea".to_string(), "tea".to_string()];
        assert_eq!(create_poll(&labels), poll_of(&[("tea", 2)]));
    }
}

//! Compound period labels.
//!
//! The chronology labels Eastern Zhou years as `东周（春秋）` or `东周（战国）`,
//! but the stored rows carry the era and the sub-period in separate places.
//! Searching such a label searches each part on its own.

/// Exact label → constituent terms, in the order they are searched.
const COMPOUND_LABELS: &[(&str, &[&str])] = &[
    ("東周（春秋）", &["東周", "春秋"]),
    ("东周（春秋）", &["东周", "春秋"]),
    ("東周（戰國）", &["東周", "戰國"]),
    ("东周（战国）", &["东周", "战国"]),
    ("東周(春秋)", &["東周", "春秋"]),
    ("东周(春秋)", &["东周", "春秋"]),
    ("東周(戰國)", &["東周", "戰國"]),
    ("东周(战国)", &["东周", "战国"]),
];

/// Split a known compound label into its parts; any other keyword is returned
/// as the only term.
pub fn split_keyword(keyword: &str) -> Vec<&str> {
    match COMPOUND_LABELS.iter().find(|(label, _)| *label == keyword) {
        Some((_, parts)) => parts.to_vec(),
        None => vec![keyword],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simplified_and_traditional_labels() {
        assert_eq!(split_keyword("东周（春秋）"), vec!["东周", "春秋"]);
        assert_eq!(split_keyword("東周（戰國）"), vec!["東周", "戰國"]);
        assert_eq!(split_keyword("东周(战国)"), vec!["东周", "战国"]);
    }

    #[test]
    fn other_keywords_pass_through() {
        assert_eq!(split_keyword("秦始皇"), vec!["秦始皇"]);
        assert_eq!(split_keyword("东周"), vec!["东周"]);
        // Exact match only.
        assert_eq!(split_keyword("东周（春秋） "), vec!["东周（春秋） "]);
    }

    #[test]
    fn every_label_has_at_least_two_parts() {
        for (label, parts) in COMPOUND_LABELS {
            assert!(parts.len() >= 2, "{label} must split");
        }
    }
}

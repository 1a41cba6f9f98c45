//! Form data and step-prefix partitioning.
//!
//! Form fields are keyed by a step-prefixed identifier such as `1-1` or `2-3`.
//! The step a field belongs to is encoded only in that prefix.

use std::collections::BTreeMap;

/// Free-text answers keyed by step-prefixed field id.
///
/// A `BTreeMap` keeps the serialised form stable regardless of the order the
/// caller sent the keys in.
pub type FormData = BTreeMap<String, String>;

/// Key prefix of the idea-definition step.
pub const STEP1_PREFIX: &str = "1-";

/// Key prefix of the market-definition step.
pub const STEP2_PREFIX: &str = "2-";

/// Collect every field whose key starts with `prefix` (literal match).
pub fn fields_with_prefix(form: &FormData, prefix: &str) -> FormData {
    form.iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Split a form into its step-1 and step-2 fields.
///
/// Fields belonging to neither step are dropped.
pub fn split_phase1(form: &FormData) -> (FormData, FormData) {
    (
        fields_with_prefix(form, STEP1_PREFIX),
        fields_with_prefix(form, STEP2_PREFIX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_split_idea_and_market() {
        let (step1, step2) = split_phase1(&form(&[("1-1", "idea"), ("2-1", "market")]));
        assert_eq!(step1, form(&[("1-1", "idea")]));
        assert_eq!(step2, form(&[("2-1", "market")]));
    }

    #[test]
    fn test_split_drops_other_steps() {
        let (step1, step2) = split_phase1(&form(&[
            ("1-1", "a"),
            ("1-3", "b"),
            ("3-1", "later"),
            ("notes", "free"),
        ]));
        assert_eq!(step1.len(), 2);
        assert!(step2.is_empty());
    }

    #[test]
    fn test_prefix_match_is_literal() {
        // "10-1" starts with "1" but not with "1-"
        let (step1, _) = split_phase1(&form(&[("10-1", "x"), ("1-10", "y")]));
        assert_eq!(step1, form(&[("1-10", "y")]));
    }

    #[test]
    fn test_split_is_order_independent() {
        let forward = form(&[("1-1", "a"), ("2-1", "b"), ("1-2", "c"), ("2-2", "d")]);
        let reversed = form(&[("2-2", "d"), ("1-2", "c"), ("2-1", "b"), ("1-1", "a")]);
        assert_eq!(split_phase1(&forward), split_phase1(&reversed));
    }

    #[test]
    fn test_split_empty_form() {
        let (step1, step2) = split_phase1(&FormData::new());
        assert!(step1.is_empty());
        assert!(step2.is_empty());
    }
}

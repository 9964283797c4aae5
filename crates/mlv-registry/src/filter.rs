//! Search filtering over model versions.
//!
//! Matching is a case-insensitive substring test on the field selected by the
//! criterion's [`SearchType`]. Empty search text lets everything through, and
//! results keep the input order.

use mlv_core::{ModelVersion, SearchCriterion, SearchType};

/// Whether `version` satisfies `criterion`.
#[must_use]
pub fn matches(version: &ModelVersion, criterion: &SearchCriterion) -> bool {
    if criterion.matches_all() {
        return true;
    }
    let haystack = match criterion.kind {
        SearchType::Keyword => &version.name,
        SearchType::Owner => &version.owner,
    };
    haystack
        .to_lowercase()
        .contains(&criterion.text.to_lowercase())
}

/// Borrowing filter: the matching versions, in input order.
#[must_use]
pub fn filter_refs<'a>(
    versions: &'a [ModelVersion],
    criterion: &SearchCriterion,
) -> Vec<&'a ModelVersion> {
    versions.iter().filter(|v| matches(v, criterion)).collect()
}

/// The matching versions, in input order.
#[must_use]
pub fn filter_model_versions(
    versions: &[ModelVersion],
    criterion: &SearchCriterion,
) -> Vec<ModelVersion> {
    if criterion.matches_all() {
        return versions.to_vec();
    }
    filter_refs(versions, criterion)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let version = ModelVersion::new("1", "Fraud-Detector v2", "Alice");
        assert!(matches(&version, &SearchCriterion::keyword("DETECTOR")));
        assert!(matches(&version, &SearchCriterion::owner("aLiCe")));
        assert!(!matches(&version, &SearchCriterion::owner("detector")));
    }

    #[test]
    fn matching_handles_non_ascii() {
        let version = ModelVersion::new("1", "Größe", "Élodie");
        assert!(matches(&version, &SearchCriterion::keyword("GRÖ")));
        assert!(matches(&version, &SearchCriterion::owner("ÉLODIE")));
    }
}

//! Concept aggregation and the concept list document.
//!
//! Concepts are deduplicated by label. The first occurrence of a label, scanning sections in
//! traversal order and concepts in authored order, is kept; later occurrences are dropped even
//! when they carry a different identifier.

use crate::constants::{CONCEPT_DISCLAIMER, CONCEPT_UNVERIFIED_MARKER, CONCEPT_VERIFY_WARNING};
use crate::mode::ConsultationMode;
use crate::section::{ConceptRef, Section};
use std::collections::HashSet;

/// Deduplicated concepts for `sections`, in first-seen order.
pub fn aggregate(sections: &[Section]) -> Vec<ConceptRef> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut concepts = Vec::new();

    for concept in sections.iter().flat_map(|s| s.snomed_concepts.iter()) {
        if seen.insert(concept.label.as_str()) {
            concepts.push(concept.clone());
        }
    }

    concepts
}

/// One line of the concept list: `label (id)` or `label [ID not verified]`.
pub fn concept_line(concept: &ConceptRef) -> String {
    match concept.concept_id.as_deref() {
        Some(id) => format!("{} ({})", concept.label, id),
        None => format!("{} {}", concept.label, CONCEPT_UNVERIFIED_MARKER),
    }
}

/// Render the concept list document for already-aggregated concepts.
///
/// Format:
/// ```text
/// SUGGESTED SNOMED CONCEPTS - Teen Health Talk <Quick|Full> Check
///
/// <verification warning>
///
/// <one line per concept>
///
/// ---
/// Note: ...
/// ```
pub fn render_concept_list(mode: ConsultationMode, concepts: &[ConceptRef]) -> String {
    let lines = concepts
        .iter()
        .map(concept_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "SUGGESTED SNOMED CONCEPTS - Teen Health Talk {} Check\n\n{}\n\n{}\n\n{}",
        mode.short_label(),
        CONCEPT_VERIFY_WARNING,
        lines,
        CONCEPT_DISCLAIMER
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::fixtures::{section, with_concepts};

    fn labels(concepts: &[ConceptRef]) -> Vec<&str> {
        concepts.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn first_seen_identifier_wins() {
        let sections = vec![
            with_concepts(section("one", Some(1)), &[("A", Some("1"))]),
            with_concepts(section("two", Some(2)), &[("A", Some("2"))]),
        ];

        let concepts = aggregate(&sections);
        assert_eq!(concepts, vec![ConceptRef::new("A", Some("1"))]);
    }

    #[test]
    fn keeps_first_seen_order() {
        let sections = vec![
            with_concepts(section("one", Some(1)), &[("B", None), ("A", Some("1"))]),
            with_concepts(section("two", Some(2)), &[("A", Some("1")), ("C", Some("3"))]),
        ];

        assert_eq!(labels(&aggregate(&sections)), vec!["B", "A", "C"]);
    }

    #[test]
    fn shared_identifier_with_different_labels_is_kept_twice() {
        let sections = vec![with_concepts(
            section("one", Some(1)),
            &[("Self-harm", Some("248062006")), ("Domestic violence", Some("248062006"))],
        )];

        assert_eq!(aggregate(&sections).len(), 2);
    }

    #[test]
    fn first_seen_without_identifier_is_not_upgraded() {
        let sections = vec![
            with_concepts(section("one", Some(1)), &[("A", None)]),
            with_concepts(section("two", Some(2)), &[("A", Some("9"))]),
        ];

        assert_eq!(aggregate(&sections), vec![ConceptRef::new("A", None)]);
    }

    #[test]
    fn empty_sections_aggregate_to_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn renders_exact_concept_list() {
        let concepts = vec![
            ConceptRef::new("Consent obtained", Some("401190002")),
            ConceptRef::new("Local code", None),
        ];

        let expected = "SUGGESTED SNOMED CONCEPTS - Teen Health Talk Quick Check

⚠️ IMPORTANT: Verify these codes in your local system before use.

Consent obtained (401190002)
Local code [ID not verified]

---
Note: SNOMED coding for youth health can be complex. Some concepts (ACEs, exploitation) may require local code mapping. Always verify codes match your clinical system's implementation.
";
        assert_eq!(render_concept_list(ConsultationMode::Quick, &concepts), expected);
    }

    #[test]
    fn renders_skeleton_for_no_concepts() {
        let rendered = render_concept_list(ConsultationMode::Full, &[]);
        assert!(rendered.starts_with("SUGGESTED SNOMED CONCEPTS - Teen Health Talk Full Check\n\n"));
        assert!(rendered.contains("before use.\n\n\n\n---\n"));
        assert!(rendered.ends_with("implementation.\n"));
    }

    #[test]
    fn builtin_full_concepts_have_no_repeated_labels() {
        let catalog = crate::SectionCatalog::builtin().expect("builtin catalog");
        let sections = crate::ModeResolver::new(&catalog).resolve(ConsultationMode::Full);
        let concepts = aggregate(&sections);

        let total: usize = sections.iter().map(|s| s.snomed_concepts.len()).sum();
        assert_eq!(concepts.len(), total);
        assert_eq!(concepts[0].label, "Health check consultation");
    }
}

//! Section content model.
//!
//! A [`Section`] is one thematic unit of the consultation. All text is opaque: it is displayed
//! and copied, never interpreted. Ordering inside every sequence is meaningful and preserved
//! exactly as authored.

use std::num::NonZeroU32;

/// A conversational prompt shown to the practitioner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    /// Core prompts are displayed by default; the rest are shown on request.
    pub is_core: bool,
}

/// A coded concept suggested for the clinical record.
///
/// `label` is the identity of the concept. `concept_id` is a SNOMED CT identifier when one is
/// known and may be shared between different labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptRef {
    pub label: String,
    pub concept_id: Option<String>,
}

impl ConceptRef {
    pub fn new(label: impl Into<String>, concept_id: Option<&str>) -> Self {
        Self {
            label: label.into(),
            concept_id: concept_id.map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Unique within a catalog; the key of the completion set.
    pub id: String,
    pub title: String,
    pub short_title: Option<String>,
    /// Never part of a quick consultation.
    pub full_mode_only: bool,
    /// Position in the quick consultation. `None` excludes the section from quick mode.
    pub quick_mode_order: Option<NonZeroU32>,
    pub prompts: Vec<Prompt>,
    pub optional_probes: Vec<String>,
    pub why_we_ask: String,
    pub red_flags: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub snomed_concepts: Vec<ConceptRef>,
}

impl Section {
    /// Short title when present, otherwise the full title.
    pub fn display_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }

    /// Prompts flagged for default display, in authored order.
    pub fn core_prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter().filter(|p| p.is_core)
    }

    pub fn is_quick_eligible(&self) -> bool {
        self.quick_mode_order.is_some()
    }
}

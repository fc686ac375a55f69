//! Section catalog: wire model and the immutable registry built from it.
//!
//! Responsibilities:
//! - Define a strict YAML wire model for authored section content
//! - Translate the wire model into [`Section`] values
//! - Validate catalog-wide invariants once, at construction
//!
//! Notes:
//! - A [`SectionCatalog`] is a plain value. Callers construct it at startup and pass it to
//!   whatever needs it; tests build their own catalogs from fixtures.
//! - There is no mutation API. Content changes ship as a new catalog file.

use crate::constants::BUILTIN_CATALOG_YAML;
use crate::section::{ConceptRef, Prompt, Section};
use crate::validation::validate_sections;
use crate::{ConsultError, ConsultResult};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::Path;

/// Immutable, validated registry of consultation sections in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    /// Build a catalog from sections, enforcing catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found by [`validate_sections`]: malformed or
    /// duplicate ids, blank titles, duplicate quick-mode orders, or a section that is both
    /// full-mode-only and quick-eligible.
    pub fn new(sections: Vec<Section>) -> ConsultResult<Self> {
        validate_sections(&sections)?;
        tracing::debug!(
            sections = sections.len(),
            quick = sections.iter().filter(|s| s.is_quick_eligible()).count(),
            "section catalog loaded"
        );
        Ok(Self { sections })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> ConsultResult<Self> {
        Self::parse(BUILTIN_CATALOG_YAML)
    }

    /// Parse a catalog from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface the path to the failing field (for example
    /// `sections[3].quickModeOrder`) when the YAML does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns `ConsultError::CatalogSchema` if:
    /// - the YAML is malformed,
    /// - any field has an unexpected type (including a `quickModeOrder` of zero),
    /// - any unknown keys are present (due to `#[serde(deny_unknown_fields)]`).
    ///
    /// Validation failures from [`SectionCatalog::new`] are returned unchanged.
    pub fn parse(yaml_text: &str) -> ConsultResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, CatalogWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>".to_owned()
                } else {
                    path
                };
                return Err(ConsultError::CatalogSchema {
                    path,
                    message: source.to_string(),
                });
            }
        };

        Self::new(wire.sections.into_iter().map(wire_to_domain).collect())
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> ConsultResult<Self> {
        let text = std::fs::read_to_string(path).map_err(ConsultError::CatalogRead)?;
        Self::parse(&text)
    }

    /// All sections in declaration order.
    pub fn all(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogWire {
    #[serde(default)]
    sections: Vec<SectionWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct SectionWire {
    id: String,
    title: String,
    #[serde(default)]
    short_title: Option<String>,
    #[serde(default)]
    full_mode_only: bool,
    #[serde(default)]
    quick_mode_order: Option<NonZeroU32>,
    #[serde(default)]
    prompts: Vec<PromptWire>,
    #[serde(default)]
    optional_probes: Vec<String>,
    #[serde(default)]
    why_we_ask: String,
    #[serde(default)]
    red_flags: Vec<String>,
    #[serde(default)]
    suggested_actions: Vec<String>,
    #[serde(default)]
    snomed_concepts: Vec<ConceptWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct PromptWire {
    text: String,
    is_core: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ConceptWire {
    label: String,
    #[serde(default)]
    concept_id: Option<String>,
}

fn wire_to_domain(wire: SectionWire) -> Section {
    Section {
        id: wire.id,
        title: wire.title,
        short_title: wire.short_title.filter(|t| !t.trim().is_empty()),
        full_mode_only: wire.full_mode_only,
        quick_mode_order: wire.quick_mode_order,
        prompts: wire
            .prompts
            .into_iter()
            .map(|p| Prompt {
                text: p.text,
                is_core: p.is_core,
            })
            .collect(),
        optional_probes: wire.optional_probes,
        why_we_ask: wire.why_we_ask,
        red_flags: wire.red_flags,
        suggested_actions: wire.suggested_actions,
        snomed_concepts: wire
            .snomed_concepts
            .into_iter()
            .map(|c| ConceptRef {
                label: c.label,
                concept_id: c.concept_id,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECTIONS: &str = r#"sections:
- id: "opening"
  title: "Opening"
  quickModeOrder: 1
  prompts:
  - text: "Welcome"
    isCore: true
  snomedConcepts:
  - label: "Consent obtained"
    conceptId: "401190002"
- id: "home"
  title: "Home & Relationships"
  shortTitle: "Home"
  fullModeOnly: true
  whyWeAsk: "Context"
  snomedConcepts:
  - label: "Family situation"
"#;

    #[test]
    fn parses_sections_in_declaration_order() {
        let catalog = SectionCatalog::parse(TWO_SECTIONS).expect("parse catalog");
        let ids: Vec<&str> = catalog.all().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["opening", "home"]);

        let home = catalog.get("home").expect("home present");
        assert!(home.full_mode_only);
        assert_eq!(home.quick_mode_order, None);
        assert_eq!(home.display_title(), "Home");
        assert_eq!(home.snomed_concepts[0].concept_id, None);

        let opening = catalog.get("opening").expect("opening present");
        assert_eq!(opening.quick_mode_order.map(NonZeroU32::get), Some(1));
        assert_eq!(
            opening.snomed_concepts[0].concept_id.as_deref(),
            Some("401190002")
        );
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = r#"sections:
- id: "opening"
  title: "Opening"
  colour: "blue"
"#;
        let err = SectionCatalog::parse(input).expect_err("should reject unknown key");
        match err {
            ConsultError::CatalogSchema { path, message } => {
                assert!(path.contains("sections[0]"), "path was {path}");
                assert!(message.contains("colour"));
            }
            other => panic!("expected CatalogSchema error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_quick_mode_order() {
        let input = r#"sections:
- id: "opening"
  title: "Opening"
  quickModeOrder: 0
"#;
        let err = SectionCatalog::parse(input).expect_err("should reject zero order");
        match err {
            ConsultError::CatalogSchema { path, .. } => {
                assert!(path.contains("quickModeOrder"), "path was {path}");
            }
            other => panic!("expected CatalogSchema error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_types() {
        let input = r#"sections:
- id: "opening"
  title: "Opening"
  prompts:
  - text: "Welcome"
    isCore: "sometimes"
"#;
        let err = SectionCatalog::parse(input).expect_err("should reject wrong type");
        match err {
            ConsultError::CatalogSchema { path, .. } => {
                assert!(path.contains("isCore"), "path was {path}");
            }
            other => panic!("expected CatalogSchema error, got {other:?}"),
        }
    }

    #[test]
    fn parse_applies_catalog_validation() {
        let input = r#"sections:
- id: "opening"
  title: "Opening"
- id: "opening"
  title: "Opening again"
"#;
        let err = SectionCatalog::parse(input).expect_err("should reject duplicate id");
        assert!(matches!(err, ConsultError::DuplicateSectionId(id) if id == "opening"));
    }

    #[test]
    fn parse_accepts_opaque_ids() {
        let input = "sections:\n- id: \"Mental_Health\"\n  title: \"Mental\"\n- id: \"S1\"\n  title: \"One\"\n";
        let catalog = SectionCatalog::parse(input).expect("parse catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Mental_Health").map(|s| s.title.as_str()), Some("Mental"));
        assert!(catalog.get("S1").is_some());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = SectionCatalog::parse("sections: []\n").expect("parse empty");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = SectionCatalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.all()[0].id, "opening");
        assert_eq!(catalog.all()[11].id, "closing");
        assert_eq!(
            catalog.all().iter().filter(|s| s.is_quick_eligible()).count(),
            7
        );
    }

    #[test]
    fn builtin_catalog_ids_and_orders_are_unique() {
        let catalog = SectionCatalog::builtin().expect("builtin catalog is valid");

        let mut ids: Vec<&str> = catalog.all().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());

        let mut orders: Vec<u32> = catalog
            .all()
            .iter()
            .filter_map(|s| s.quick_mode_order.map(NonZeroU32::get))
            .collect();
        let total = orders.len();
        orders.sort_unstable();
        orders.dedup();
        assert_eq!(orders.len(), total);
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sections.yaml");
        std::fs::write(&path, TWO_SECTIONS).expect("write catalog");

        let catalog = SectionCatalog::from_path(&path).expect("load from path");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = SectionCatalog::from_path(&dir.path().join("missing.yaml"))
            .expect_err("should fail to read");
        assert!(matches!(err, ConsultError::CatalogRead(_)));
    }
}

//! Derives the ordered active section list for a traversal mode.

use crate::catalog::SectionCatalog;
use crate::mode::ConsultationMode;
use crate::section::Section;

/// Resolves traversal modes against an injected catalog.
#[derive(Clone, Copy, Debug)]
pub struct ModeResolver<'a> {
    catalog: &'a SectionCatalog,
}

impl<'a> ModeResolver<'a> {
    pub fn new(catalog: &'a SectionCatalog) -> Self {
        Self { catalog }
    }

    /// Active sections for `mode`.
    ///
    /// - `Full`: every section in catalog order.
    /// - `Quick`: sections with a `quick_mode_order`, ascending by that order.
    ///
    /// Quick orders are unique by catalog construction, so the sort never has to break ties.
    /// An empty catalog resolves to an empty list in either mode.
    pub fn resolve(&self, mode: ConsultationMode) -> Vec<Section> {
        match mode {
            ConsultationMode::Full => self.catalog.all().to_vec(),
            ConsultationMode::Quick => {
                let mut quick: Vec<Section> = self
                    .catalog
                    .all()
                    .iter()
                    .filter(|s| s.is_quick_eligible())
                    .cloned()
                    .collect();
                quick.sort_by_key(|s| s.quick_mode_order);
                debug_assert!(
                    quick
                        .windows(2)
                        .all(|w| w[0].quick_mode_order < w[1].quick_mode_order),
                    "catalog admitted duplicate quick mode orders"
                );
                quick
            }
        }
    }

    /// Resolve a raw mode selector, normalising anything unrecognised to `Full`.
    pub fn resolve_selector(&self, selector: Option<&str>) -> (ConsultationMode, Vec<Section>) {
        let mode = ConsultationMode::from_selector(selector);
        (mode, self.resolve(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::fixtures::section;

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    fn scrambled_catalog() -> SectionCatalog {
        SectionCatalog::new(vec![
            section("a", Some(3)),
            section("b", None),
            section("c", Some(1)),
            section("d", Some(2)),
            section("e", None),
        ])
        .expect("valid catalog")
    }

    #[test]
    fn full_returns_catalog_order() {
        let catalog = scrambled_catalog();
        let resolved = ModeResolver::new(&catalog).resolve(ConsultationMode::Full);
        assert_eq!(ids(&resolved), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn quick_filters_and_sorts_by_order() {
        let catalog = scrambled_catalog();
        let resolved = ModeResolver::new(&catalog).resolve(ConsultationMode::Quick);
        assert_eq!(ids(&resolved), vec!["c", "d", "a"]);
    }

    #[test]
    fn unknown_selector_matches_full() {
        let catalog = scrambled_catalog();
        let resolver = ModeResolver::new(&catalog);
        let full = resolver.resolve(ConsultationMode::Full);

        for selector in [None, Some("detailed"), Some("")] {
            let (mode, resolved) = resolver.resolve_selector(selector);
            assert_eq!(mode, ConsultationMode::Full);
            assert_eq!(resolved, full);
        }
    }

    #[test]
    fn empty_catalog_resolves_to_empty() {
        let catalog = SectionCatalog::new(Vec::new()).expect("empty catalog");
        let resolver = ModeResolver::new(&catalog);
        assert!(resolver.resolve(ConsultationMode::Full).is_empty());
        assert!(resolver.resolve(ConsultationMode::Quick).is_empty());
    }

    #[test]
    fn builtin_quick_mode_order() {
        let catalog = SectionCatalog::builtin().expect("builtin catalog");
        let resolved = ModeResolver::new(&catalog).resolve(ConsultationMode::Quick);
        assert_eq!(
            ids(&resolved),
            vec![
                "opening",
                "background",
                "mental-health",
                "safety",
                "substances",
                "strengths",
                "closing"
            ]
        );
        assert!(resolved.iter().all(|s| !s.full_mode_only));
    }

    #[test]
    fn builtin_full_mode_has_every_section() {
        let catalog = SectionCatalog::builtin().expect("builtin catalog");
        let resolved = ModeResolver::new(&catalog).resolve(ConsultationMode::Full);
        assert_eq!(resolved.len(), 12);
        assert_eq!(resolved, catalog.all());
    }
}

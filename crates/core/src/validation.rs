//! Catalog validation rules.
//!
//! These checks run once when a catalog is constructed. A failure is a content-authoring
//! defect, so it is reported loudly at startup rather than worked around at runtime.

use crate::section::Section;
use crate::{ConsultError, ConsultResult};
use std::collections::{HashMap, HashSet};

/// Validates that a section id is a usable completion-set key.
///
/// Ids are opaque; the only per-id rule is that they are not blank. Uniqueness is checked
/// across the catalog by [`validate_sections`].
///
/// # Errors
///
/// Returns `ConsultError::InvalidSectionId` for an empty or whitespace-only id.
pub fn validate_section_id(id: &str) -> ConsultResult<()> {
    if id.trim().is_empty() {
        return Err(ConsultError::InvalidSectionId {
            id: id.to_owned(),
            reason: "id cannot be empty".into(),
        });
    }

    Ok(())
}

/// Validates a full set of sections as a catalog.
///
/// Rules:
/// - every id is non-blank and unique
/// - every title is non-blank
/// - `quickModeOrder` values are pairwise distinct
/// - no section is both `fullModeOnly` and quick-eligible
pub fn validate_sections(sections: &[Section]) -> ConsultResult<()> {
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(sections.len());
    let mut seen_orders: HashMap<u32, &str> = HashMap::new();

    for section in sections {
        validate_section_id(&section.id)?;

        if !seen_ids.insert(section.id.as_str()) {
            return Err(ConsultError::DuplicateSectionId(section.id.clone()));
        }

        if section.title.trim().is_empty() {
            return Err(ConsultError::EmptySectionTitle(section.id.clone()));
        }

        if let Some(order) = section.quick_mode_order {
            if section.full_mode_only {
                return Err(ConsultError::ConflictingModeFlags(section.id.clone()));
            }
            if let Some(first) = seen_orders.insert(order.get(), section.id.as_str()) {
                return Err(ConsultError::DuplicateQuickModeOrder {
                    order: order.get(),
                    first: first.to_owned(),
                    second: section.id.clone(),
                });
            }
        }
    }

    Ok(())
}

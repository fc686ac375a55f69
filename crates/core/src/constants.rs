//! Constants used throughout the consultation core.
//!
//! Fixed document text lives here so the rendered output stays byte-stable across releases.

/// Built-in section catalog, compiled into the binary.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../catalog/sections.yaml");

/// Accepted file extensions for a catalog override.
pub const CATALOG_FILE_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Date format embedded in the clinical summary (UK day-first order).
pub const SUMMARY_DATE_FORMAT: &str = "%d/%m/%Y";

/// First line of the clinical summary.
pub const SUMMARY_TITLE: &str = "TEEN HEALTH TALK - CLINICAL SUMMARY";

/// Closing note appended to every clinical summary.
pub const SUMMARY_CLOSING_NOTE: &str = "---
Note: This summary is a template. Complete with specific details within your clinical system.
All conversations conducted following Well Centre Teen Health Talk model.
Confidentiality and consent discussed and documented.
";

/// Warning line shown under the concept list title.
pub const CONCEPT_VERIFY_WARNING: &str =
    "⚠️ IMPORTANT: Verify these codes in your local system before use.";

/// Suffix used for a concept without an identifier.
pub const CONCEPT_UNVERIFIED_MARKER: &str = "[ID not verified]";

/// Disclaimer appended to every concept list.
pub const CONCEPT_DISCLAIMER: &str = "---
Note: SNOMED coding for youth health can be complex. Some concepts (ACEs, exploitation) may require local code mapping. Always verify codes match your clinical system's implementation.
";

/// Crisis and safeguarding guidance shown alongside every consultation.
pub const CRISIS_GUIDANCE: [(&str, &str); 4] = [
    ("Emergency", "Call 999"),
    (
        "Safeguarding concern",
        "Contact local MASH or safeguarding lead immediately",
    ),
    ("Mental health crisis", "Local crisis team or A&E"),
    ("Young person support", "Childline 0800 1111 (24/7)"),
];

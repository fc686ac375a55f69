//! Plain-text rendering of sections and session state for the terminal.

use tht_core::concepts::concept_line;
use tht_core::{ConsultationSession, Section, SectionCatalog};

/// What to include when showing a section.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionView {
    pub all_prompts: bool,
    pub snomed: bool,
}

pub fn section(section: &Section, view: SectionView) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", section.title));

    output.push_str("Core prompts:\n");
    for prompt in &section.prompts {
        if prompt.is_core {
            output.push_str(&format!("  - {}\n", prompt.text));
        } else if view.all_prompts {
            output.push_str(&format!("  - {} (optional)\n", prompt.text));
        }
    }

    output.push_str(&format!(
        "\nOptional probes ({}):\n",
        section.optional_probes.len()
    ));
    for probe in &section.optional_probes {
        output.push_str(&format!("  - {probe}\n"));
    }

    output.push_str("\nWhy we ask this:\n");
    output.push_str(&format!("  {}\n", section.why_we_ask));

    output.push_str(&format!(
        "\nRed flags & safeguarding cues ({}):\n",
        section.red_flags.len()
    ));
    for flag in &section.red_flags {
        output.push_str(&format!("  ! {flag}\n"));
    }

    output.push_str("\nSuggested actions / next steps:\n");
    for action in &section.suggested_actions {
        output.push_str(&format!("  - {action}\n"));
    }

    if view.snomed {
        output.push_str("\nSNOMED concepts (suggested - verify locally):\n");
        for concept in &section.snomed_concepts {
            output.push_str(&format!("  - {}\n", concept_line(concept)));
        }
    }

    output
}

/// Numbered list of sections with their quick-mode order, as used by `tht sections`.
pub fn catalog_listing(sections: &[Section]) -> String {
    let mut output = String::new();
    for (index, section) in sections.iter().enumerate() {
        let quick = section
            .quick_mode_order
            .map(|o| format!("  [quick #{o}]"))
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>2}. {:<18} {}{}\n",
            index + 1,
            section.id,
            section.display_title(),
            quick
        ));
    }
    output
}

/// Numbered list for an in-progress session with current and completed markers.
pub fn session_listing(session: &ConsultationSession) -> String {
    let mut output = String::new();
    let current = session.position();
    for (index, section) in session.sections().iter().enumerate() {
        let pointer = if current == Some(index) { '>' } else { ' ' };
        let done = if session.is_completed(&section.id) {
            " ✓"
        } else {
            ""
        };
        output.push_str(&format!(
            "{pointer} {:>2}. {}{done}\n",
            index + 1,
            section.display_title()
        ));
    }
    output
}

/// Header line for the current section: `[step/total] Title (NN%)`.
pub fn progress_header(session: &ConsultationSession) -> Option<String> {
    let (step, total) = session.progress()?;
    let section = session.current_section()?;
    let percent = step * 100 / total;
    Some(format!(
        "[{step}/{total}] {} ({percent}%)",
        section.display_title()
    ))
}

/// Section lookup that explains what ids exist when the id is unknown.
pub fn unknown_section_message(catalog: &SectionCatalog, id: &str) -> String {
    let ids: Vec<&str> = catalog.all().iter().map(|s| s.id.as_str()).collect();
    format!("Unknown section '{id}'. Known sections: {}", ids.join(", "))
}

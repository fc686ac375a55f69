//! Clinical summary document and the combined consultation output.
//!
//! The summary is a fixed template keyed by topic, not a transformation of section content:
//! each thematic area gets a named placeholder block for the practitioner to complete in their
//! clinical system. Only the mode label and the date vary.

use crate::clock::Clock;
use crate::concepts::{aggregate, render_concept_list};
use crate::constants::{SUMMARY_CLOSING_NOTE, SUMMARY_DATE_FORMAT, SUMMARY_TITLE};
use crate::mode::ConsultationMode;
use crate::section::{ConceptRef, Section};
use chrono::NaiveDate;

/// Topic blocks of the clinical summary, in document order.
///
/// Each entry is a heading followed by its placeholder lines.
const SUMMARY_BLOCKS: &[(&str, &[&str])] = &[
    (
        "REASON FOR VISIT / WHAT MATTERS TODAY:",
        &["[Document young person's presenting concerns and agenda]"],
    ),
    (
        "BACKGROUND & SOCIAL CONTEXT:",
        &["Home/Relationships: [Key points]", "Education/Work: [Key points]"],
    ),
    (
        "PHYSICAL HEALTH:",
        &[
            "General health: [Key points]",
            "Long-term conditions/medications: [Key points]",
            "Lifestyle (sleep/diet/exercise): [Key points]",
            "BMI: [If measured]",
        ],
    ),
    (
        "MENTAL HEALTH & WELLBEING:",
        &[
            "Mood: [Key points]",
            "Anxiety: [Key points]",
            "Self-harm/suicidal ideation: [Key points - include risk assessment]",
        ],
    ),
    (
        "SUBSTANCE USE:",
        &[
            "Smoking/vaping: [Key points]",
            "Alcohol: [Key points]",
            "Drugs: [Key points]",
        ],
    ),
    (
        "SEXUAL HEALTH:",
        &["[Key points - consent, contraception, STI screening if applicable]"],
    ),
    (
        "SAFETY & SAFEGUARDING:",
        &[
            "Safety concerns: [Key points]",
            "Risk factors identified: [Key points]",
            "Safeguarding action taken: [If applicable]",
        ],
    ),
    (
        "STRENGTHS & PROTECTIVE FACTORS:",
        &["[Document resilience factors, support networks, interests]"],
    ),
    (
        "AGREED PLAN:",
        &["1. [Action item]", "2. [Action item]", "3. [Action item]"],
    ),
    (
        "FOLLOW-UP:",
        &["[Appointment details, referrals, signposting]"],
    ),
    (
        "SAFEGUARDING ACTIONS:",
        &["[If applicable - document clearly]"],
    ),
];

/// Render the clinical summary for `mode` on `date`.
pub fn render_summary(mode: ConsultationMode, date: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(SUMMARY_TITLE);
    output.push('\n');
    output.push_str(&format!("Mode: {}\n", mode.summary_label()));
    output.push_str(&format!("Date: {}\n", date.format(SUMMARY_DATE_FORMAT)));

    for (heading, lines) in SUMMARY_BLOCKS {
        output.push('\n');
        output.push_str(heading);
        output.push('\n');
        for line in *lines {
            output.push_str(line);
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(SUMMARY_CLOSING_NOTE);
    output
}

/// The two documents produced at the end of a consultation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsultationDocuments {
    pub mode: ConsultationMode,
    pub date: NaiveDate,
    pub summary: String,
    pub concepts: Vec<ConceptRef>,
    pub concept_list: String,
}

/// Produces consultation documents, reading today's date from the injected clock.
#[derive(Clone, Debug)]
pub struct DocumentGenerator<C: Clock> {
    clock: C,
}

impl<C: Clock> DocumentGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Clinical summary for `mode`. Section content does not affect the template.
    pub fn summary(&self, mode: ConsultationMode) -> String {
        render_summary(mode, self.clock.today())
    }

    /// Concept list for the sections of a consultation.
    pub fn concept_list(&self, mode: ConsultationMode, sections: &[Section]) -> String {
        render_concept_list(mode, &aggregate(sections))
    }

    /// Both documents for `sections`.
    ///
    /// An empty section list is valid and yields the full summary skeleton with an empty
    /// concept list.
    pub fn documents(&self, mode: ConsultationMode, sections: &[Section]) -> ConsultationDocuments {
        let date = self.clock.today();
        let concepts = aggregate(sections);
        let concept_list = render_concept_list(mode, &concepts);

        ConsultationDocuments {
            mode,
            date,
            summary: render_summary(mode, date),
            concepts,
            concept_list,
        }
    }
}

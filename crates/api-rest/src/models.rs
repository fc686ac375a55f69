//! Request and response bodies for the REST API.
//!
//! These mirror the core types with JSON-friendly field names and OpenAPI schemas. They are
//! response carriers only; nothing here is ever parsed back into the core.

use serde::{Deserialize, Serialize};
use tht_core::{ConceptRef, ConsultationDocuments, Prompt, Section};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptRes {
    pub text: String,
    pub is_core: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConceptRes {
    pub label: String,
    /// SNOMED CT identifier, absent when not verified.
    pub concept_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionRes {
    pub id: String,
    pub title: String,
    pub short_title: Option<String>,
    pub full_mode_only: bool,
    pub quick_mode_order: Option<u32>,
    pub prompts: Vec<PromptRes>,
    pub optional_probes: Vec<String>,
    pub why_we_ask: String,
    pub red_flags: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub snomed_concepts: Vec<ConceptRes>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionsRes {
    /// Normalised mode (`full` or `quick`).
    pub mode: String,
    pub sections: Vec<SectionRes>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsRes {
    pub mode: String,
    /// Date embedded in the summary, as YYYY-MM-DD.
    pub date: String,
    pub summary: String,
    pub concepts: Vec<ConceptRes>,
    pub concept_list: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModeQuery {
    /// `full` or `quick`; anything else is treated as `full`.
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentsQuery {
    /// `full` or `quick`; anything else is treated as `full`.
    pub mode: Option<String>,
    /// Date for the summary (YYYY-MM-DD). Defaults to today.
    pub date: Option<String>,
}

impl From<&Prompt> for PromptRes {
    fn from(prompt: &Prompt) -> Self {
        Self {
            text: prompt.text.clone(),
            is_core: prompt.is_core,
        }
    }
}

impl From<&ConceptRef> for ConceptRes {
    fn from(concept: &ConceptRef) -> Self {
        Self {
            label: concept.label.clone(),
            concept_id: concept.concept_id.clone(),
        }
    }
}

impl From<&Section> for SectionRes {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            short_title: section.short_title.clone(),
            full_mode_only: section.full_mode_only,
            quick_mode_order: section.quick_mode_order.map(|o| o.get()),
            prompts: section.prompts.iter().map(PromptRes::from).collect(),
            optional_probes: section.optional_probes.clone(),
            why_we_ask: section.why_we_ask.clone(),
            red_flags: section.red_flags.clone(),
            suggested_actions: section.suggested_actions.clone(),
            snomed_concepts: section.snomed_concepts.iter().map(ConceptRes::from).collect(),
        }
    }
}

impl From<ConsultationDocuments> for DocumentsRes {
    fn from(documents: ConsultationDocuments) -> Self {
        Self {
            mode: documents.mode.as_str().to_owned(),
            date: documents.date.format("%Y-%m-%d").to_string(),
            summary: documents.summary,
            concepts: documents.concepts.iter().map(ConceptRes::from).collect(),
            concept_list: documents.concept_list,
        }
    }
}

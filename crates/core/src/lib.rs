//! # THT Core
//!
//! Core logic for the Teen Health Talk consultation guide.
//!
//! This crate contains the pure consultation model:
//! - The section catalog and its load-time validation
//! - Mode resolution into an ordered active section list
//! - The consultation session state machine
//! - Concept aggregation and document generation
//!
//! **No I/O concerns beyond loading a catalog file**: rendering, HTTP, terminals, clipboards and
//! printing belong in `tht-cli` or `api-rest`. Nothing is persisted between sessions.

pub mod catalog;
pub mod clock;
pub mod concepts;
pub mod config;
pub mod constants;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod section;
pub mod session;
pub mod summary;
pub mod validation;

pub use catalog::SectionCatalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use concepts::{aggregate, render_concept_list};
pub use config::CoreConfig;
pub use error::{ConsultError, ConsultResult};
pub use mode::ConsultationMode;
pub use resolver::ModeResolver;
pub use section::{ConceptRef, Prompt, Section};
pub use session::{ConsultationSession, SessionPhase};
pub use summary::{render_summary, ConsultationDocuments, DocumentGenerator};

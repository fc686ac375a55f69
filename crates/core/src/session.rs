//! Consultation session state machine.
//!
//! A session walks a fixed, ordered list of active sections. It is either `Active` at a
//! position or showing the `Summary`. Transitions:
//!
//! - `go_to(index)`: `Active(_)` to `Active(index)`
//! - `mark_complete()`: `Active(p)` to `Active(p + 1)`, or to `Summary` from the last section
//! - `review()`: `Summary` back to `Active(p)` where `p` is the position held before summary
//!
//! Every transition either succeeds completely or returns an error and leaves the session
//! untouched. The completion set only ever grows.

use crate::clock::Clock;
use crate::mode::ConsultationMode;
use crate::section::Section;
use crate::summary::{ConsultationDocuments, DocumentGenerator};
use crate::{ConsultError, ConsultResult};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Working through sections; `position` indexes the active list.
    Active { position: usize },
    /// All sections walked; `last_position` is restored by `review()`.
    Summary { last_position: usize },
}

impl SessionPhase {
    fn name(self) -> &'static str {
        match self {
            Self::Active { .. } => "active",
            Self::Summary { .. } => "in summary",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConsultationSession {
    mode: ConsultationMode,
    sections: Vec<Section>,
    completed: HashSet<String>,
    phase: SessionPhase,
}

impl ConsultationSession {
    /// Start a session at the first of `sections`.
    ///
    /// # Errors
    ///
    /// Returns `ConsultError::EmptySession` if `sections` is empty. Callers holding an empty
    /// list should go straight to [`DocumentGenerator::documents`] instead.
    pub fn new(mode: ConsultationMode, sections: Vec<Section>) -> ConsultResult<Self> {
        if sections.is_empty() {
            return Err(ConsultError::EmptySession);
        }

        tracing::debug!(mode = %mode, sections = sections.len(), "consultation started");

        Ok(Self {
            mode,
            sections,
            completed: HashSet::new(),
            phase: SessionPhase::Active { position: 0 },
        })
    }

    pub fn mode(&self) -> ConsultationMode {
        self.mode
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The active section list, fixed for the lifetime of the session.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Current position while active.
    pub fn position(&self) -> Option<usize> {
        match self.phase {
            SessionPhase::Active { position } => Some(position),
            SessionPhase::Summary { .. } => None,
        }
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.position().map(|p| &self.sections[p])
    }

    pub fn is_summary(&self) -> bool {
        matches!(self.phase, SessionPhase::Summary { .. })
    }

    pub fn completed(&self) -> &HashSet<String> {
        &self.completed
    }

    pub fn is_completed(&self, section_id: &str) -> bool {
        self.completed.contains(section_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// `(step, total)` with a 1-based step, or `None` once in summary.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.position().map(|p| (p + 1, self.sections.len()))
    }

    /// Whether `mark_complete` from here finishes the consultation.
    pub fn is_last_section(&self) -> bool {
        self.position() == Some(self.sections.len() - 1)
    }

    /// Move to `index` without changing completion.
    ///
    /// # Errors
    ///
    /// - `ConsultError::InvalidTransition` while in summary
    /// - `ConsultError::IndexOutOfRange` if `index` is not a valid position
    pub fn go_to(&mut self, index: usize) -> ConsultResult<()> {
        self.require_active("go_to")?;

        if index >= self.sections.len() {
            tracing::warn!(index, len = self.sections.len(), "rejected navigation");
            return Err(ConsultError::IndexOutOfRange {
                index,
                len: self.sections.len(),
            });
        }

        self.phase = SessionPhase::Active { position: index };
        tracing::debug!(position = index, "moved to section");
        Ok(())
    }

    /// Move to the previous section.
    pub fn previous(&mut self) -> ConsultResult<()> {
        let position = self.require_active("previous")?;
        match position.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => Err(ConsultError::IndexOutOfRange {
                index: 0,
                len: self.sections.len(),
            }),
        }
    }

    /// Mark the current section complete and advance.
    ///
    /// Returns the phase after the transition: the next section, or summary when the current
    /// section was the last one.
    pub fn mark_complete(&mut self) -> ConsultResult<SessionPhase> {
        let position = self.require_active("mark_complete")?;

        self.completed.insert(self.sections[position].id.clone());

        self.phase = if position + 1 < self.sections.len() {
            SessionPhase::Active {
                position: position + 1,
            }
        } else {
            SessionPhase::Summary {
                last_position: position,
            }
        };

        tracing::debug!(
            section = %self.sections[position].id,
            completed = self.completed.len(),
            "section completed"
        );
        Ok(self.phase)
    }

    /// Leave the summary and return to the position held before it.
    pub fn review(&mut self) -> ConsultResult<usize> {
        match self.phase {
            SessionPhase::Summary { last_position } => {
                self.phase = SessionPhase::Active {
                    position: last_position,
                };
                tracing::debug!(position = last_position, "returned to review");
                Ok(last_position)
            }
            phase => Err(self.rejected("review", phase)),
        }
    }

    /// Both consultation documents. Only available in summary.
    pub fn documents<C: Clock>(&self, clock: C) -> ConsultResult<ConsultationDocuments> {
        match self.phase {
            SessionPhase::Summary { .. } => {
                Ok(DocumentGenerator::new(clock).documents(self.mode, &self.sections))
            }
            phase => Err(self.rejected("documents", phase)),
        }
    }

    fn require_active(&self, operation: &'static str) -> ConsultResult<usize> {
        match self.phase {
            SessionPhase::Active { position } => Ok(position),
            phase => Err(self.rejected(operation, phase)),
        }
    }

    fn rejected(&self, operation: &'static str, phase: SessionPhase) -> ConsultError {
        tracing::warn!(operation, phase = phase.name(), "rejected session transition");
        ConsultError::InvalidTransition {
            operation,
            phase: phase.name(),
        }
    }
}

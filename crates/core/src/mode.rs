//! Traversal modes.
//!
//! A consultation runs in one of two modes. `full` walks every section in catalog order,
//! `quick` walks the designated subset in quick-mode order. Mode strings arrive from outside
//! (query strings, CLI flags) and are normalised rather than rejected: anything that is not
//! exactly `quick` means `full`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConsultationMode {
    #[default]
    Full,
    Quick,
}

impl ConsultationMode {
    /// Normalise an optional mode selector.
    ///
    /// Only the exact string `quick` selects [`ConsultationMode::Quick`]. Missing, empty and
    /// unrecognised values all select [`ConsultationMode::Full`].
    pub fn from_selector(value: Option<&str>) -> Self {
        match value {
            Some("quick") => Self::Quick,
            _ => Self::Full,
        }
    }

    /// Selector string for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quick => "quick",
        }
    }

    /// Short label used in document titles.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Quick => "Quick",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Full => "Full Health Check",
            Self::Quick => "Quick Health Check",
        }
    }

    /// Mode label embedded in the clinical summary, including the expected duration.
    pub fn summary_label(self) -> &'static str {
        match self {
            Self::Full => "Full Health Check (30-40 min)",
            Self::Quick => "Quick Health Check (10-15 min)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Full => "Comprehensive 30-40 minute consult",
            Self::Quick => "Focused 10-15 minute consult",
        }
    }
}

impl std::fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

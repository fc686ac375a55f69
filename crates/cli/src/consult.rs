//! Interactive consultation loop.
//!
//! Reads one command per line and drives a [`ConsultationSession`]. Input and output are
//! generic so the loop runs the same against a terminal or an in-memory script.

use crate::render::{self, SectionView};
use std::io::{self, BufRead, Write};
use tht_core::{Clock, ConsultationDocuments, ConsultationSession, SessionPhase};

const HELP: &str = "Commands:
  <enter> or n   mark section complete and continue
  p              previous section
  g <n>          go to section n
  l              list sections
  r              review sections (from the summary)
  h              show this help
  q              quit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    GoTo(usize),
    List,
    Review,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (None, _) | (Some("n"), None) => Command::Next,
        (Some("p"), None) => Command::Previous,
        (Some("g"), Some(n)) => match n.parse::<usize>() {
            Ok(step) if step > 0 => Command::GoTo(step - 1),
            _ => Command::Unknown(line.to_owned()),
        },
        (Some("l"), None) => Command::List,
        (Some("r"), None) => Command::Review,
        (Some("h"), None) => Command::Help,
        (Some("q"), None) => Command::Quit,
        _ => Command::Unknown(line.to_owned()),
    }
}

/// Options that shape what the practitioner sees.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsultOptions {
    pub view: SectionView,
}

/// Print both documents. The concept list is only shown when the SNOMED helper is on.
pub fn write_documents<W: Write>(
    out: &mut W,
    documents: &ConsultationDocuments,
    snomed: bool,
) -> io::Result<()> {
    writeln!(out, "{}", documents.summary)?;
    if snomed {
        writeln!(out, "{}", documents.concept_list)?;
    }
    Ok(())
}

/// Run the consultation until the practitioner quits or input ends.
pub fn run<C, R, W>(
    session: &mut ConsultationSession,
    options: ConsultOptions,
    clock: C,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    C: Clock + Copy,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "{} - {}",
        session.mode().display_name(),
        session.mode().description()
    )?;
    writeln!(out, "{HELP}")?;
    show_phase(session, options, clock, out)?;

    for line in input.lines() {
        let command = parse_command(&line?);

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::List => {
                write!(out, "{}", render::session_listing(session))?;
                continue;
            }
            Command::Unknown(text) => {
                writeln!(out, "Unrecognised command '{text}' (h for help)")?;
                continue;
            }
            Command::Next => session.mark_complete().map(|_| ()),
            Command::Previous => session.previous(),
            Command::GoTo(index) => session.go_to(index),
            Command::Review => session.review().map(|_| ()),
        };

        match result {
            Ok(()) => show_phase(session, options, clock, out)?,
            Err(e) => writeln!(out, "! {e}")?,
        }
    }

    Ok(())
}

fn show_phase<C, W>(
    session: &ConsultationSession,
    options: ConsultOptions,
    clock: C,
    out: &mut W,
) -> io::Result<()>
where
    C: Clock + Copy,
    W: Write,
{
    match session.phase() {
        SessionPhase::Active { .. } => {
            writeln!(out)?;
            if let Some(header) = render::progress_header(session) {
                writeln!(out, "{header}")?;
            }
            if let Some(section) = session.current_section() {
                write!(out, "{}", render::section(section, options.view))?;
            }
            let next = if session.is_last_section() {
                "Complete & generate summary"
            } else {
                "Mark complete & next"
            };
            writeln!(out, "[enter] {next}")?;
        }
        SessionPhase::Summary { .. } => {
            writeln!(out)?;
            writeln!(
                out,
                "Consultation complete ({} of {} sections marked complete)",
                session.completed_count(),
                session.sections().len()
            )?;
            writeln!(out)?;
            let documents = session.documents(clock).map_err(io::Error::other)?;
            write_documents(out, &documents, options.view.snomed)?;
            writeln!(out, "[r] Review sections  [q] Quit")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tht_core::{ConsultationMode, FixedClock, ModeResolver, SectionCatalog};

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).expect("date"))
    }

    fn quick_session() -> ConsultationSession {
        let catalog = SectionCatalog::builtin().expect("builtin catalog");
        let sections = ModeResolver::new(&catalog).resolve(ConsultationMode::Quick);
        ConsultationSession::new(ConsultationMode::Quick, sections).expect("session")
    }

    fn run_script(session: &mut ConsultationSession, script: &str, snomed: bool) -> String {
        let options = ConsultOptions {
            view: SectionView {
                all_prompts: false,
                snomed,
            },
        };
        let mut out = Vec::new();
        run(session, options, clock(), Cursor::new(script), &mut out).expect("run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(""), Command::Next);
        assert_eq!(parse_command("  n "), Command::Next);
        assert_eq!(parse_command("p"), Command::Previous);
        assert_eq!(parse_command("g 3"), Command::GoTo(2));
        assert_eq!(parse_command("g 0"), Command::Unknown("g 0".into()));
        assert_eq!(parse_command("g x"), Command::Unknown("g x".into()));
        assert_eq!(parse_command("r"), Command::Review);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("jump"), Command::Unknown("jump".into()));
    }

    #[test]
    fn walking_every_section_prints_documents() {
        let mut session = quick_session();
        let output = run_script(&mut session, "\n\n\n\n\n\n\nq\n", true);

        assert!(session.is_summary());
        assert_eq!(session.completed_count(), 7);
        assert!(output.contains("Consultation complete (7 of 7 sections marked complete)"));
        assert!(output.contains("Mode: Quick Health Check (10-15 min)\nDate: 19/10/2026\n"));
        assert!(output.contains("SUGGESTED SNOMED CONCEPTS - Teen Health Talk Quick Check"));
    }

    #[test]
    fn concept_list_hidden_without_snomed_helper() {
        let mut session = quick_session();
        let output = run_script(&mut session, "\n\n\n\n\n\n\n", false);

        assert!(output.contains("TEEN HEALTH TALK - CLINICAL SUMMARY"));
        assert!(!output.contains("SUGGESTED SNOMED CONCEPTS"));
    }

    #[test]
    fn invalid_commands_leave_session_unchanged() {
        let mut session = quick_session();
        let output = run_script(&mut session, "g 9\nr\np\n", false);

        assert!(output.contains("! section index 8 is out of range for 7 sections"));
        assert!(output.contains("! review is not allowed while the session is active"));
        assert_eq!(session.position(), Some(0));
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn review_returns_from_summary() {
        let mut session = quick_session();
        run_script(&mut session, "g 7\nn\nr\n", false);

        assert_eq!(session.position(), Some(6));
        assert_eq!(session.completed_count(), 1);
        assert!(session.is_completed("closing"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut session = quick_session();
        let output = run_script(&mut session, "n\n", false);
        assert_eq!(session.position(), Some(1));
        assert!(output.contains("[2/7] What Matters (28%)"));
    }
}

mod consult;
mod render;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tht_core::constants::CRISIS_GUIDANCE;
use tht_core::{
    aggregate, render_concept_list, Clock, ConsultationMode, ConsultationSession, CoreConfig,
    DocumentGenerator, FixedClock, ModeResolver, SectionCatalog, SystemClock,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use consult::ConsultOptions;
use render::SectionView;

#[derive(Parser)]
#[command(name = "tht")]
#[command(about = "Teen Health Talk consultation guide")]
struct Cli {
    /// Section catalog to use instead of the built-in one (YAML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sections of a consultation
    Sections {
        /// Traversal mode: full or quick (anything else means full)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Show one section in full
    Show {
        /// Section id (see `tht sections`)
        id: String,
        /// Include prompts that are not shown by default
        #[arg(long)]
        all_prompts: bool,
        /// Include suggested SNOMED concepts
        #[arg(long)]
        snomed: bool,
    },
    /// Print the clinical summary template
    Summary {
        #[arg(long)]
        mode: Option<String>,
        /// Date to print (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Print the suggested SNOMED concept list
    Concepts {
        #[arg(long)]
        mode: Option<String>,
    },
    /// Run an interactive consultation
    Consult {
        #[arg(long)]
        mode: Option<String>,
        /// Enable the SNOMED helper
        #[arg(long)]
        snomed: bool,
        /// Show prompts that are not shown by default
        #[arg(long)]
        all_prompts: bool,
        /// Date for the generated documents (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show crisis and safeguarding guidance
    Crisis,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}

fn clock_for(date: Option<NaiveDate>) -> FixedClock {
    FixedClock(date.unwrap_or_else(|| SystemClock.today()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cfg = CoreConfig::new(cli.catalog)?;
    let catalog = cfg.load_catalog()?;
    let resolver = ModeResolver::new(&catalog);

    match cli.command {
        Some(Commands::Sections { mode }) => {
            let (mode, sections) = resolver.resolve_selector(mode.as_deref());
            println!("{} ({} sections)", mode.display_name(), sections.len());
            print!("{}", render::catalog_listing(&sections));
        }
        Some(Commands::Show {
            id,
            all_prompts,
            snomed,
        }) => print!(
            "{}",
            show_section(
                &catalog,
                &id,
                SectionView {
                    all_prompts,
                    snomed
                }
            )?
        ),
        Some(Commands::Summary { mode, date }) => {
            let mode = ConsultationMode::from_selector(mode.as_deref());
            print!("{}", DocumentGenerator::new(clock_for(date)).summary(mode));
        }
        Some(Commands::Concepts { mode }) => {
            let (mode, sections) = resolver.resolve_selector(mode.as_deref());
            print!("{}", render_concept_list(mode, &aggregate(&sections)));
        }
        Some(Commands::Consult {
            mode,
            snomed,
            all_prompts,
            date,
        }) => {
            let options = ConsultOptions {
                view: SectionView {
                    all_prompts,
                    snomed,
                },
            };
            run_consult(
                &catalog,
                mode.as_deref(),
                options,
                clock_for(date),
                std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )?
        }
        Some(Commands::Crisis) => {
            println!("Immediate risk or crisis?");
            for (situation, action) in CRISIS_GUIDANCE {
                println!("  {situation}: {action}");
            }
        }
        None => {
            println!("Use 'tht --help' for commands");
        }
    }

    Ok(())
}

/// Render one section, or fail with the list of known ids.
fn show_section(
    catalog: &SectionCatalog,
    id: &str,
    view: SectionView,
) -> Result<String, Box<dyn std::error::Error>> {
    let section = catalog
        .get(id)
        .ok_or_else(|| render::unknown_section_message(catalog, id))?;
    Ok(render::section(section, view))
}

fn run_consult<R: BufRead, W: Write>(
    catalog: &SectionCatalog,
    mode: Option<&str>,
    options: ConsultOptions,
    clock: FixedClock,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mode, sections) = ModeResolver::new(catalog).resolve_selector(mode);

    if sections.is_empty() {
        // Nothing to walk; go straight to the documents.
        let documents = DocumentGenerator::new(clock).documents(mode, &sections);
        consult::write_documents(out, &documents, options.view.snomed)?;
        return Ok(());
    }

    let mut session = ConsultationSession::new(mode, sections)?;
    consult::run(&mut session, options, clock, input, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tht_core::constants::CONCEPT_DISCLAIMER;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).expect("date"))
    }

    fn snomed_options() -> ConsultOptions {
        ConsultOptions {
            view: SectionView {
                all_prompts: false,
                snomed: true,
            },
        }
    }

    #[test]
    fn show_unknown_section_is_an_error() {
        let catalog = SectionCatalog::builtin().expect("builtin catalog");
        let err = show_section(&catalog, "nope", SectionView::default())
            .expect_err("unknown id should fail");
        let message = err.to_string();
        assert!(message.starts_with("Unknown section 'nope'"));
        assert!(message.contains("opening"));

        let text = show_section(&catalog, "safety", SectionView::default()).expect("known id");
        assert!(text.starts_with("Safety"));
    }

    #[test]
    fn empty_catalog_prints_only_the_document_skeleton() {
        let catalog = SectionCatalog::new(vec![]).expect("empty catalog");
        let mut out = Vec::new();
        run_consult(
            &catalog,
            Some("quick"),
            snomed_options(),
            clock(),
            Cursor::new("n\nq\n"),
            &mut out,
        )
        .expect("run consult");
        let output = String::from_utf8(out).expect("utf8");

        assert!(output.starts_with("TEEN HEALTH TALK - CLINICAL SUMMARY"));
        assert!(output.contains("Mode: Quick Health Check (10-15 min)\nDate: 19/10/2026\n"));
        assert!(output.contains("SUGGESTED SNOMED CONCEPTS - Teen Health Talk Quick Check"));
        assert!(output.contains(CONCEPT_DISCLAIMER));
        assert!(!output.contains("[enter]"));
        assert!(!output.contains("Consultation complete"));
    }
}

//! `cardmaker`: command-line front end for scenario-cards.
//!
//! Each subcommand builds a [`CardConfig`] from flags (and an optional JSON
//! file), runs one library entry point and reports the result on stderr, or
//! as JSON on stdout with `--json`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use scenario_cards::{
    export_pages, inspect, make_cards, CardConfig, CardProgressCallback, DocumentMetadata,
    OverflowPolicy, PageSelection, ProgressCallback,
};
use serde::Serialize;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// ANSI styles used on stderr.
#[derive(Clone, Copy)]
enum Paint {
    Good,
    Bad,
    Faint,
    Strong,
    Accent,
}

impl Paint {
    fn on(self, text: impl Display) -> String {
        let code = match self {
            Paint::Good => "32",
            Paint::Bad => "31",
            Paint::Faint => "2",
            Paint::Strong => "1",
            Paint::Accent => "36",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

// ── Progress ─────────────────────────────────────────────────────────────────

/// Progress bar over the selected source pages.
///
/// Pages are extracted one at a time, so only the page in flight is timed.
struct PageBar {
    bar: ProgressBar,
    current: Mutex<Option<(usize, Instant)>>,
    failed: AtomicBool,
}

impl PageBar {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_message("opening PDF");
        bar.enable_steady_tick(Duration::from_millis(100));
        Arc::new(Self {
            bar,
            current: Mutex::new(None),
            failed: AtomicBool::new(false),
        })
    }

    /// Seconds spent on `page_num`, if it is the page in flight.
    fn finish_page(&self, page_num: usize) -> Option<f32> {
        let mut current = self.current.lock().ok()?;
        match current.take() {
            Some((page, started)) if page == page_num => Some(started.elapsed().as_secs_f32()),
            other => {
                *current = other;
                None
            }
        }
    }
}

impl CardProgressCallback for PageBar {
    fn on_run_start(&self, total_pages: usize) {
        let style = ProgressStyle::with_template(
            "{prefix:.bold} [{bar:36.cyan/blue}] {pos}/{len} {msg} {elapsed:.dim}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
        self.bar.set_style(style);
        self.bar.set_length(total_pages as u64);
        self.bar.set_prefix("pages");
    }

    fn on_page_start(&self, page_num: usize, _total_pages: usize) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some((page_num, Instant::now()));
        }
        self.bar.set_message(format!("p.{page_num}"));
    }

    fn on_page_complete(&self, page_num: usize, _total_pages: usize, text_len: usize) {
        let took = self
            .finish_page(page_num)
            .map(|s| format!("{s:.1}s"))
            .unwrap_or_default();
        self.bar.println(format!(
            "  {} p.{page_num:<3} {} {}",
            Paint::Good.on("ok"),
            Paint::Faint.on(format!("{text_len} chars of text")),
            Paint::Faint.on(took),
        ));
        self.bar.inc(1);
    }

    fn on_page_error(&self, page_num: usize, _total_pages: usize, error: &str) {
        self.finish_page(page_num);
        self.failed.store(true, Ordering::SeqCst);
        let first_line = error.lines().next().unwrap_or(error);
        self.bar.println(format!(
            "  {} p.{page_num:<3} {}",
            Paint::Bad.on("failed"),
            Paint::Bad.on(first_line),
        ));
        self.bar.abandon();
    }

    fn on_run_complete(&self, _cards: usize, _sheet_pages: usize) {
        if !self.failed.load(Ordering::SeqCst) {
            self.bar.finish_and_clear();
        }
    }
}

// ── Arguments ────────────────────────────────────────────────────────────────

const AFTER_HELP: &str = r#"EXAMPLES:
  cardmaker cards TLAOK_TOURNAMENT_SCENARIO_PACK.pdf
  cardmaker cards --pages 3-8 pack.pdf -o cards.pdf
  cardmaker cards --truncate-text pack.pdf
  cardmaker cards --config layout.json pack.pdf
  cardmaker export pack.pdf --image-dir snaps --text-dir text
  cardmaker inspect pack.pdf --json

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Directory containing libpdfium
  RUST_LOG          Overrides the log filter (e.g. scenario_cards=debug)
"#;

/// Turn tournament scenario pages into printable playing cards.
#[derive(Parser, Debug)]
#[command(
    name = "cardmaker",
    version,
    about,
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out image and text cards on letter sheets.
    Cards {
        /// Scenario pack PDF.
        input: PathBuf,

        /// Card sheet PDF to write.
        #[arg(short, long, env = "CARDMAKER_OUTPUT", default_value = "playing_cards.pdf")]
        output: PathBuf,

        /// Drop text lines that would run past the card's bottom edge.
        #[arg(long, env = "CARDMAKER_TRUNCATE_TEXT")]
        truncate_text: bool,
    },

    /// Write page snapshots and text files without building cards.
    Export {
        /// Scenario pack PDF.
        input: PathBuf,

        /// Directory for page_{n}_snapshot.png files.
        #[arg(long, env = "CARDMAKER_IMAGE_DIR", default_value = "snapshot_images_high_res")]
        image_dir: PathBuf,

        /// Directory for page_{n}_bottom.txt files.
        #[arg(long, env = "CARDMAKER_TEXT_DIR", default_value = "extracted_text")]
        text_dir: PathBuf,
    },

    /// Print PDF metadata only.
    Inspect {
        /// PDF to inspect.
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Source pages: all, 5, 7-18 or 1,3,5. Default: 7-18.
    #[arg(long, global = true, env = "CARDMAKER_PAGES")]
    pages: Option<PageSelection>,

    /// JSON file with a full or partial CardConfig.
    #[arg(long, global = true, env = "CARDMAKER_CONFIG")]
    config: Option<PathBuf>,

    /// Render zoom for the active subcommand (1.0 = 72 DPI).
    #[arg(long, global = true, env = "CARDMAKER_ZOOM")]
    zoom: Option<f32>,

    /// PDF user password for encrypted documents.
    #[arg(long, global = true, env = "CARDMAKER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Directory containing libpdfium.
    #[arg(long, global = true, env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// Print a JSON summary to stdout.
    #[arg(long, global = true, env = "CARDMAKER_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, global = true, env = "CARDMAKER_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "CARDMAKER_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "CARDMAKER_QUIET")]
    quiet: bool,
}

impl CommonArgs {
    fn log_filter(&self, progress_bar: bool) -> &'static str {
        match (self.verbose, self.quiet || progress_bar) {
            (true, _) => "debug",
            (false, true) => "error",
            (false, false) => "info",
        }
    }
}

/// Which extraction settings a `--zoom` flag applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Cards,
    Export,
}

// ── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = &cli.common;

    let progress_bar = !(common.quiet
        || common.no_progress
        || common.json
        || matches!(cli.command, Command::Inspect { .. }));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(common.log_filter(progress_bar))),
        )
        .with_writer(io::stderr)
        .init();

    let progress = progress_bar.then(|| PageBar::new() as ProgressCallback);

    match &cli.command {
        Command::Cards {
            input,
            output,
            truncate_text,
        } => {
            let mut config = build_config(common, Target::Cards, progress).await?;
            if *truncate_text {
                config.layout.overflow = OverflowPolicy::Truncate;
            }
            let result = make_cards(input, output, &config)
                .await
                .context("Card generation failed")?;

            if common.json {
                return print_json(&result);
            }
            if !common.quiet {
                let stats = &result.stats;
                eprintln!(
                    "{} {} cards on {} sheets in {}ms: {}",
                    Paint::Good.on("done"),
                    result.cards.len(),
                    stats.sheet_pages,
                    stats.total_duration_ms,
                    Paint::Strong.on(result.output_path.display()),
                );
                if stats.overflowing_text_cards > 0 {
                    eprintln!(
                        "     {} text cards run past their edge {}",
                        Paint::Accent.on(stats.overflowing_text_cards),
                        Paint::Faint.on("(--truncate-text cuts them)"),
                    );
                }
            }
        }

        Command::Export {
            input,
            image_dir,
            text_dir,
        } => {
            let config = build_config(common, Target::Export, progress).await?;
            let result = export_pages(input, image_dir, text_dir, &config)
                .await
                .context("Export failed")?;

            if common.json {
                return print_json(&result);
            }
            if !common.quiet {
                eprintln!(
                    "Processing complete. Images saved to {}, text saved to {}.",
                    Paint::Strong.on(result.image_dir.display()),
                    Paint::Strong.on(result.text_dir.display()),
                );
            }
        }

        Command::Inspect { input } => {
            let config = build_config(common, Target::Cards, None).await?;
            let meta = inspect(input, &config)
                .await
                .context("Failed to inspect PDF")?;

            if common.json {
                return print_json(&meta);
            }
            println!("{:<12} {}", "File:", input.display());
            for (label, value) in metadata_rows(&meta) {
                println!("{:<12} {}", format!("{label}:"), value);
            }
        }
    }

    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    println!("{json}");
    Ok(())
}

/// Label/value pairs for the `inspect` report; absent fields are skipped.
fn metadata_rows(meta: &DocumentMetadata) -> Vec<(&'static str, String)> {
    let optional = [
        ("Title", &meta.title),
        ("Author", &meta.author),
        ("Subject", &meta.subject),
        ("Producer", &meta.producer),
        ("Creator", &meta.creator),
    ];
    let mut rows: Vec<_> = optional
        .into_iter()
        .filter_map(|(label, value)| value.clone().map(|v| (label, v)))
        .collect();
    rows.push(("Pages", meta.page_count.to_string()));
    rows.push(("PDF version", meta.pdf_version.clone()));
    rows
}

/// Layer the CLI onto a `CardConfig`: defaults, then the `--config` file,
/// then explicit flags.
async fn build_config(
    common: &CommonArgs,
    target: Target,
    progress: Option<ProgressCallback>,
) -> Result<CardConfig> {
    let base = match &common.config {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            CardConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => CardConfig::default(),
    };
    apply_flags(base, common, target, progress)
}

fn apply_flags(
    mut config: CardConfig,
    common: &CommonArgs,
    target: Target,
    progress: Option<ProgressCallback>,
) -> Result<CardConfig> {
    if let Some(zoom) = common.zoom {
        match target {
            Target::Cards => config.extraction.zoom = zoom,
            Target::Export => config.export_extraction.zoom = zoom,
        }
    }

    let mut builder = config.into_builder();
    if let Some(pages) = &common.pages {
        builder = builder.pages(pages.clone());
    }
    if let Some(password) = &common.password {
        builder = builder.password(password.clone());
    }
    if let Some(dir) = &common.pdfium_lib {
        builder = builder.pdfium_lib_path(dir.clone());
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }
    builder.build().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use scenario_cards::{ExtractionSettings, SnapshotRotation};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cardmaker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = parse(&["cards", "pack.pdf", "--pages", "3-4", "--truncate-text", "--json"]);
        assert_eq!(cli.common.pages, Some(PageSelection::Range(3, 4)));
        assert!(cli.common.json);
        let Command::Cards {
            output,
            truncate_text,
            ..
        } = cli.command
        else {
            panic!("expected the cards subcommand");
        };
        assert_eq!(output, PathBuf::from("playing_cards.pdf"));
        assert!(truncate_text);
    }

    #[test]
    fn bad_page_selection_is_a_usage_error() {
        for bad in ["0", "18-7", "1,x", "99999"] {
            assert!(
                Cli::try_parse_from(["cardmaker", "cards", "pack.pdf", "--pages", bad]).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn zoom_flag_targets_the_active_subcommand() {
        let cli = parse(&["export", "pack.pdf", "--zoom", "3"]);
        let config = apply_flags(CardConfig::default(), &cli.common, Target::Export, None).unwrap();
        assert_eq!(config.export_extraction.zoom, 3.0);
        assert_eq!(config.export_extraction.rotation, SnapshotRotation::None);
        assert_eq!(config.extraction, ExtractionSettings::default());

        let cli = parse(&["cards", "pack.pdf", "--zoom", "3"]);
        let config = apply_flags(CardConfig::default(), &cli.common, Target::Cards, None).unwrap();
        assert_eq!(config.extraction.zoom, 3.0);
        assert_eq!(config.export_extraction, ExtractionSettings::snapshot_export());
    }

    #[test]
    fn flags_override_config_file_values() {
        let file = CardConfig::from_json(r#"{"pages": "All", "extraction": {"zoom": 2.5}}"#).unwrap();
        let cli = parse(&["cards", "pack.pdf", "--pages", "9"]);
        let config = apply_flags(file, &cli.common, Target::Cards, None).unwrap();
        assert_eq!(config.pages, PageSelection::Single(9));
        assert_eq!(config.extraction.zoom, 2.5);
    }

    #[test]
    fn out_of_range_zoom_is_rejected() {
        let cli = parse(&["export", "pack.pdf", "--zoom", "40"]);
        assert!(apply_flags(CardConfig::default(), &cli.common, Target::Export, None).is_err());
    }

    #[test]
    fn metadata_rows_skip_missing_fields() {
        let meta = DocumentMetadata {
            title: Some("Tournament Pack".into()),
            author: None,
            subject: None,
            creator: None,
            producer: Some("pdfium".into()),
            page_count: 24,
            pdf_version: "Pdf1_7".into(),
        };
        let labels: Vec<_> = metadata_rows(&meta).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Title", "Producer", "Pages", "PDF version"]);
    }
}

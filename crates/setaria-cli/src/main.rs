//! # setaria
//!
//! Command-line front end for the note engine.
//!
//! ```bash
//! # Render one note to HTML, or dump the whole document as JSON
//! setaria render ~/notes/2024-03-15-walk.note
//! setaria render ~/notes/2024-03-15-walk.note --json
//!
//! # Load a notes directory and list its notes, newest first
//! setaria index --notes ~/notes --templates ~/notes/templates
//! ```
//!
//! Without `--notes`, `index` falls back to `notes_path` from the config file
//! (`~/.config/setaria/config.toml` unless `--config` says otherwise).

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use setaria_config::Config;
use setaria_engine::{NoteIndex, ParseOptions, Templates, load_notes, parse_note};
use std::fmt::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "setaria", version, about = "Render plain-text notes to HTML")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse one note and print its HTML body
    Render {
        file: PathBuf,

        /// Directory of `<Element>.html` template overrides
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Print the whole document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a notes directory and list every note
    Index {
        /// Notes directory, defaults to `notes_path` from the config
        #[arg(long, value_name = "DIR")]
        notes: Option<PathBuf>,

        /// Directory of `<Element>.html` template overrides
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref())?;
    let options = parse_options(config.as_ref());

    let output = match cli.command {
        Commands::Render {
            file,
            templates,
            json,
        } => {
            let templates = load_templates(templates.as_deref(), config.as_ref())?;
            render_note(&file, &templates, &options, json)?
        }
        Commands::Index { notes, templates } => {
            let notes = match (notes, config.as_ref()) {
                (Some(notes), _) => notes,
                (None, Some(config)) => config.notes_path.clone(),
                (None, None) => bail!(
                    "No notes directory: pass --notes or set notes_path in {}",
                    Config::config_path().display()
                ),
            };
            let templates = load_templates(templates.as_deref(), config.as_ref())?;
            index_notes(&notes, &templates, &options)?
        }
    };
    print!("{output}");
    Ok(())
}

/// An explicit config path must exist; the default one may be absent.
fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("Config file not found: {}", path.display());
            }
            log::debug!("Using config {}", path.display());
            Ok(config)
        }
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config)
        }
    }
}

fn parse_options(config: Option<&Config>) -> ParseOptions {
    match config {
        Some(config) => ParseOptions {
            indent_width: config.indent_width,
            max_depth: config.max_depth,
        },
        None => ParseOptions::default(),
    }
}

/// The `--templates` flag wins over `templates_path` from the config.
fn load_templates(flag: Option<&Path>, config: Option<&Config>) -> Result<Templates> {
    let dir = flag.or_else(|| config.and_then(|c| c.templates_path.as_deref()));
    match dir {
        Some(dir) => Templates::from_dir(dir)
            .with_context(|| format!("Failed to load templates from {}", dir.display())),
        None => Ok(Templates::builtin()),
    }
}

fn render_note(
    file: &Path,
    templates: &Templates,
    options: &ParseOptions,
    json: bool,
) -> Result<String> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let doc = parse_note(&file.to_string_lossy(), &text, templates, options)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let mut out = if json {
        serde_json::to_string_pretty(&doc)?
    } else {
        doc.body
    };
    out.push('\n');
    Ok(out)
}

fn index_notes(notes: &Path, templates: &Templates, options: &ParseOptions) -> Result<String> {
    let report = load_notes(notes, templates, options)
        .with_context(|| format!("Failed to load notes from {}", notes.display()))?;
    let failures = report.failures.len();
    let index = NoteIndex::from_documents(report.notes);

    let mut out = String::new();
    for doc in index.documents() {
        writeln!(
            out,
            "{}  {}  {}  [{}]",
            doc.date,
            doc.slug,
            doc.title,
            doc.tags.join(", ")
        )?;
    }
    writeln!(out, "{} notes, {} failed", index.len(), failures)?;
    Ok(out)
}

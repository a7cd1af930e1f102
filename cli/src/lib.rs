//! Turnstile command line.
//!
//! ```text
//! turnstile lk              usage sheet and sandbox for Gentzen LK
//! turnstile la3             usage sheet and sandbox for Łukasiewicz A3
//! turnstile render FILE     render a JSON derivation
//! ```
//!
//! Everything except argument parsing and tracing setup lives here so the
//! integration tests can drive it without spawning a process.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use tracing::debug;
use turnstile_calculus::Calculus;
use turnstile_config::TurnstileConfig;
use turnstile_render::{Block, Renderer};
use turnstile_types::Derivation;

#[derive(Debug, Parser)]
#[command(
    name = "turnstile",
    version,
    about = "Render proof calculus derivations as text diagrams",
    rename_all = "kebab-case"
)]
pub struct Cli {
    /// Config file to use instead of $TURNSTILE_CONFIG or ~/.turnstile/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Symbol theme preset (basic or ascii), overriding the config file
    #[arg(long, global = true, value_name = "PRESET", env = "TURNSTILE_THEME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Gentzen's sequent calculus LK
    Lk(SheetArgs),
    /// Łukasiewicz's third axiom system
    La3(SheetArgs),
    /// Render a derivation tree stored as JSON
    Render {
        /// JSON file holding one derivation
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct SheetArgs {
    /// Print only the sandbox derivation
    #[arg(long)]
    pub sandbox_only: bool,
}

/// Resolve the renderer from an explicit config file, or the discovered one,
/// with an optional preset override.
///
/// An explicit file must load; a discovered file that fails to load is
/// ignored with a warning.
pub fn renderer(config: Option<&Path>, theme: Option<&str>) -> Result<Renderer> {
    let mut config = match config {
        Some(path) => TurnstileConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TurnstileConfig::load().unwrap_or_default(),
    };
    if let Some(theme) = theme {
        config.set_preset(theme);
    }
    Ok(config.resolve()?)
}

/// The usage sheet of `calculus` followed by its sandbox derivation.
pub fn sheet(renderer: &Renderer, calculus: Calculus, sandbox_only: bool) -> Result<Block> {
    let sandbox = calculus
        .sandbox()
        .with_context(|| format!("building the {calculus} sandbox"))?;

    let mut parts = Vec::new();
    if !sandbox_only {
        let catalog = calculus
            .catalog()
            .with_context(|| format!("building the {calculus} catalog"))?;
        parts.push(renderer.catalog(&catalog));
        parts.push(Block::empty());
    }
    parts.extend([
        Block::from("Sandbox"),
        Block::empty(),
        renderer.render(&sandbox),
        Block::empty(),
        Block::empty(),
    ]);
    Ok(Block::stack(&parts))
}

/// Render the derivation stored as JSON at `path`.
pub fn render_file(renderer: &Renderer, path: &Path) -> Result<Block> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let derivation = parse_derivation(&json)
        .with_context(|| format!("parsing derivation {}", path.display()))?;
    Ok(renderer.render(&derivation))
}

/// Parse a derivation of any depth.
///
/// Every tree level nests two JSON values, so serde_json's default recursion
/// limit would reject trees the renderer draws fine. The stack grows on
/// demand instead.
fn parse_derivation(json: &str) -> serde_json::Result<Derivation> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let stacked = serde_stacker::Deserializer::new(&mut deserializer);
    let derivation = Derivation::deserialize(stacked)?;
    deserializer.end()?;
    Ok(derivation)
}

/// Console framing: every line indented by two columns, trailing blanks
/// dropped.
#[must_use]
pub fn present(block: &Block) -> String {
    let mut out = String::new();
    for line in block.lines() {
        out.push_str("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let renderer = renderer(cli.config.as_deref(), cli.theme.as_deref())?;
    let block = match &cli.command {
        Command::Lk(args) => sheet(&renderer, Calculus::Lk, args.sandbox_only)?,
        Command::La3(args) => sheet(&renderer, Calculus::La3, args.sandbox_only)?,
        Command::Render { file } => render_file(&renderer, file)?,
    };
    debug!(lines = block.height(), "writing output");
    out.write_all(present(&block).as_bytes())
        .context("writing output")?;
    Ok(())
}

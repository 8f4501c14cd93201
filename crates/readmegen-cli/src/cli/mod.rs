//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! help text, and value enums.  No business logic lives here.
//!
//! readmegen has a single mode of operation — run the questionnaire and
//! write `README.md` — so there are no subcommands, only global flags.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "readmegen",
    bin_name = "readmegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4dd} Generate a professional README.md interactively",
    long_about = "readmegen walks you through a short questionnaire and \
                  renders the answers into a README.md in the current \
                  directory.",
    after_help = "EXAMPLES:\n\
        \x20 readmegen             # answer the prompts, get README.md\n\
        \x20 readmegen -v          # same, with progress logging\n\
        \x20 readmegen --no-color  # plain prompts for dumb terminals"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

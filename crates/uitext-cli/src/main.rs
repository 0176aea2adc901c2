//! UIText CLI entry point.
//!
//! Provides command-line tools for working with UIText string tables:
//! - `uitext check` - Validate table files and their format strings
//! - `uitext coverage` - Compare translations against a source table
//! - `uitext render` - Resolve a serialized `UIText` against a table

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_render, CheckArgs, CoverageArgs, RenderArgs};
use tracing_subscriber::{fmt, EnvFilter};

/// UIText string table tools.
#[derive(Debug, Parser)]
#[command(name = "uitext")]
#[command(about = "UIText string table tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check string table files
    Check(CheckArgs),
    /// Report translation coverage against a source table
    Coverage(CoverageArgs),
    /// Resolve a serialized UIText against a string table
    Render(RenderArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    let color = cli.color;
    miette::set_hook(Box::new(move |_| {
        let opts = miette::MietteHandlerOpts::new()
            .terminal_links(true)
            .unicode(true)
            .context_lines(2);
        let opts = match color {
            ColorWhen::Auto => opts,
            ColorWhen::Always => opts.color(true),
            ColorWhen::Never => opts.color(false),
        };
        Box::new(opts.build())
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Render(args) => run_render(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "uitext",
            "check",
            "en.json",
            "--color",
            "never",
            "--verbose",
        ])
        .unwrap();
        assert!(matches!(cli.color, ColorWhen::Never));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn check_requires_files() {
        assert!(Cli::try_parse_from(["uitext", "check"]).is_err());
    }

    #[test]
    fn render_output_modes_conflict() {
        let result = Cli::try_parse_from([
            "uitext", "render", "--table", "en.json", "--text", "t.json", "--markup", "--json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

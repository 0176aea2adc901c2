//! Implementation of the `uitext render` command.

use std::fs::read_to_string;
use std::io::{stdin, Read};
use std::path::{Path, PathBuf};

use futures::executor::block_on;
use miette::{miette, IntoDiagnostic};
use tracing::debug;
use uitext::{Catalog, UIText};

use super::{language_of, load_into};
use crate::output::{json_error_report, render_ansi};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// String table to resolve against (.json)
    #[arg(long)]
    pub table: PathBuf,

    /// Language code for plural rules. Defaults to the table's file stem.
    #[arg(long)]
    pub lang: Option<String>,

    /// File holding a serialized UIText, or `-` for stdin
    #[arg(long)]
    pub text: PathBuf,

    /// Print the resolved text as markup
    #[arg(long, conflicts_with = "json")]
    pub markup: bool,

    /// Print the resolved text as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let language = args.lang.clone().unwrap_or_else(|| language_of(&args.table));
    let mut catalog = Catalog::with_language(language.as_str());
    load_into(&mut catalog, &language, &args.table)?;

    let content = read_text(&args.text)?;
    let text: UIText = serde_json::from_str(&content)
        .map_err(|err| {
            json_error_report(
                &args.text,
                &content,
                &err,
                "invalid UIText",
                r#"expected a UIText such as { "res": { "id": "greeting", "args": ["Radu"] } }"#,
            )
        })?;
    debug!(%language, "resolving");

    match block_on(text.resolve(&catalog)) {
        Ok(resolved) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&resolved).into_diagnostic()?);
            } else if args.markup {
                println!("{}", resolved.to_markup());
            } else {
                println!("{}", render_ansi(&resolved));
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            eprintln!("Resolution error: {}", e);
            Ok(exitcode::DATAERR)
        }
    }
}

fn read_text(path: &Path) -> miette::Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .map_err(|e| miette!("Cannot read text from stdin: {}", e))?;
        Ok(content)
    } else {
        read_to_string(path).map_err(|e| miette!("Cannot read text file {}: {}", path.display(), e))
    }
}

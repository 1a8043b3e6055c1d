use clap::Parser;
use libelles_generator::cli;
use libelles_generator::error::LibellesResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "generate-libelles")]
#[command(about = "Merge the Widgets sheet of a survey spreadsheet into YAML locales")]
#[command(long_about = "Libellés generator - spreadsheet → YAML locales

Reads the \"Widgets\" sheet (columns D: section, E: path, F: French,
G: English, data from row 2) and merges each libellé into
<LOCALES>/<language>/<section>.yml.

  - Existing translations are kept unless --overwrite is given
  - **bold**, __oblique__, _green_…_green_ and _red_…_red_ become HTML
  - [nom] becomes {{nickname}}
  - Only files that received a translation are rewritten

EXAMPLES:
  generate-libelles survey.xlsx locales
  generate-libelles survey.xlsx locales --overwrite --verbose

Set RUST_LOG to control log output (default: libelles_generator=info).")]
#[command(version)]
struct Cli {
    /// Spreadsheet holding the Widgets sheet (.xlsx, .xls, .ods)
    input: PathBuf,

    /// Locales root directory (<language>/<section>.yml files)
    locales: PathBuf,

    /// Replace translations that already exist
    #[arg(long)]
    overwrite: bool,

    /// Section name (accepted, not applied: every section is generated)
    #[arg(short, long)]
    section: Option<String>,

    /// Show verbose progress and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> LibellesResult<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "libelles_generator=debug"
    } else {
        "libelles_generator=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::generate(cli.input, cli.locales, cli.overwrite, cli.section, cli.verbose)
}

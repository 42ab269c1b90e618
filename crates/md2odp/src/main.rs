//! md2odp CLI - markdown to OpenDocument presentation converter.
//!
//! Renders a markdown file into slides and inserts them into an existing
//! ODP template at a chosen position:
//!
//! ```text
//! md2odp talk.md template.odp talk.odp --page -1
//! ```

mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use md2odp_odf::OdpDocument;
use md2odp_renderer::{RenderContext, TemplateProfile};
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::Output;

/// Convert markdown text into OpenDocument presentations.
#[derive(Parser)]
#[command(name = "md2odp", version, about)]
struct Cli {
    /// Input markdown file.
    input_md: PathBuf,

    /// Presentation template the slides are inserted into.
    template_odp: PathBuf,

    /// Output presentation file.
    output_odp: PathBuf,

    /// Insert slides at this position; negative values count from the end
    /// of the slide stack (-1 appends after the last slide).
    #[arg(short = 'p', long = "page", default_value_t = -1, allow_negative_numbers = true)]
    page: i64,

    /// Template profile TOML naming the template's master pages, layouts,
    /// and styles.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(summary) => {
            output.success(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let input = std::fs::read_to_string(&cli.input_md)?;
    let profile = TemplateProfile::load(cli.config.as_deref())?;

    let mut document = OdpDocument::open(&cli.template_odp)?;
    let mut ctx = RenderContext::new(&mut document, profile)?;

    // Rendering fails before anything is written, so a rejected document
    // leaves no partial output behind
    let nodes = ctx.render(&input)?;
    let slides = nodes.iter().filter(|node| node.is_slide()).count();
    let index = ctx.insert(cli.page, nodes)?;

    document.save(&cli.output_odp)?;
    Ok(format!(
        "Inserted {slides} slide(s) at position {index} into {}",
        cli.output_odp.display()
    ))
}

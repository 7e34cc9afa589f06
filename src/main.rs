mod api;
mod error;
mod format;
mod note;
mod parser;
mod problem;
mod settings;
mod slug;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::error::PullError;
use crate::problem::{FormattedProblem, ProblemRecord};
use crate::settings::Settings;

const INPUT_PROMPT: &str = "Enter LeetCode problem title slug or URL:";

#[derive(Parser)]
#[command(name = "leetcode_puller", about = "Pull a LeetCode problem into an Obsidian note")]
struct Cli {
    /// Settings file (TOML). Defaults to ./leetcode_puller.toml if present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a problem and emit its note variables (or a rendered note)
    Fetch {
        /// Problem URL or title slug (prompted for when omitted)
        input: Option<String>,
        /// Print the note variables as JSON (the default without --out-dir)
        #[arg(long, conflicts_with = "out_dir")]
        json: bool,
        /// Write `<fileName>.md` into this directory instead of printing JSON
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Note template; `{{name}}` and `{{VALUE:name}}` placeholders are filled
        #[arg(short, long, requires = "out_dir")]
        template: Option<PathBuf>,
        /// Overwrite an existing note
        #[arg(short, long, requires = "out_dir")]
        force: bool,
        /// Override the tag prefix (default "leetcode/")
        #[arg(long)]
        tag_prefix: Option<String>,
        /// Override the API endpoint
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Convert a problem statement HTML file to Markdown
    Convert {
        /// HTML file, as found in the API's `question` field
        file: PathBuf,
    },
    /// Print the title slug extracted from a URL or slug
    Slug {
        input: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Pull errors carry a short notice; keep the cause chain in the log only.
            match err.downcast_ref::<PullError>() {
                Some(pull) => {
                    debug!(error = ?err, "Pull failed");
                    eprintln!("{}", pull);
                }
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch {
            input,
            json,
            out_dir,
            template,
            force,
            tag_prefix,
            api_url,
        } => {
            let settings = Settings::load(cli.config.as_deref())?.with_overrides(api_url, tag_prefix);
            let input = match input {
                Some(i) => i,
                None => prompt_for_input()?,
            };

            let problem = pull(&settings, &input).await?;

            match out_dir.filter(|_| !json) {
                Some(dir) => {
                    let template = load_template(template.as_deref())?;
                    let path = note::write_note(&dir, &problem, &template, force)?;
                    println!("{}", path.display());
                }
                None => {
                    println!("{}", serde_json::to_string_pretty(&problem.variables())?);
                }
            }
            Ok(())
        }
        Commands::Convert { file } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            println!("{}", parser::format_problem_statement(&html));
            Ok(())
        }
        Commands::Slug { input } => {
            println!("{}", slug::extract_title_slug(&input)?);
            Ok(())
        }
    }
}

/// input → slug → fetch → record → formatted problem. Stops at the first failure.
async fn pull(settings: &Settings, input: &str) -> Result<FormattedProblem, PullError> {
    let slug = slug::extract_title_slug(input)?;
    let client = reqwest::Client::new();
    let api = api::fetch_problem(&client, &settings.api_url, &slug).await?;
    let record = ProblemRecord::from_api(api, &slug);
    problem::assemble(&record, settings)
}

fn prompt_for_input() -> Result<String> {
    eprint!("{} ", INPUT_PROMPT);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read input")?;
    if line.trim().is_empty() {
        return Err(PullError::MissingInput.into());
    }
    Ok(line)
}

fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read template {}", p.display())),
        None => Ok(note::DEFAULT_TEMPLATE.to_string()),
    }
}

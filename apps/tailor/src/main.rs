mod config;
mod errors;
mod fetcher;
mod generation;
mod llm_client;
mod log_format;
mod models;
mod render;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::generator::{tailor_resume, TailorContext};
use crate::llm_client::LlmClient;
use crate::log_format::BracketedLevel;
use crate::models::resume::TailoredResume;
use crate::render::filename::output_filename;
use crate::render::{render_resume_html_to_pdf, PREVIEW_PDF, SNAPSHOT_JSON};
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "tailor", version)]
#[command(about = "Tailor a YAML resume to a job posting and render it to PDF")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Feature flags file
    #[arg(long, env = "TAILOR_SETTINGS", default_value = "data/settings.yaml")]
    settings: PathBuf,

    /// Resume profile; its skill list is rewritten at the end of the approval step
    #[arg(long, env = "TAILOR_RESUME", default_value = "data/resume.yaml")]
    resume: PathBuf,

    /// Directory holding template.html
    #[arg(long, env = "TAILOR_TEMPLATE_DIR", default_value = "templates/classic_resume")]
    template_dir: PathBuf,

    /// Where the HTML scratch file, JSON snapshot and PDF are written
    #[arg(long, env = "TAILOR_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Job posting URL (prompted for when omitted)
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-render a saved JSON snapshot to preview.pdf without calling the LLM
    Preview {
        /// Snapshot to render (default: <output-dir>/sample_resume.json)
        #[arg(long, value_name = "PATH")]
        snapshot: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration first so .env values are visible to clap's env fallbacks
    let config = Config::from_env();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("tailor={}", &config.rust_log))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(BracketedLevel::new())
                .with_writer(std::io::stderr),
        )
        .init();

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An unexpected error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, config: Config) -> Result<()> {
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory {}", args.output_dir.display())
    })?;

    match &args.cmd {
        Some(Command::Preview { snapshot }) => {
            let snapshot = snapshot
                .clone()
                .unwrap_or_else(|| args.output_dir.join(SNAPSHOT_JSON));
            preview(&args, &config, &snapshot).await
        }
        None => generate(&args, &config).await,
    }
}

async fn generate(args: &Args, config: &Config) -> Result<()> {
    let settings = Settings::load(&args.settings)?;
    info!(
        "Settings: prune_irrelevant={}, prioritize_relevance={}, include_projects={}",
        settings.prune_irrelevant, settings.prioritize_relevance, settings.include_projects
    );

    let llm = LlmClient::new(
        config.require_api_key()?.to_string(),
        config.openai_base_url.clone(),
    )?;
    let http = reqwest::Client::new();

    let ctx = TailorContext {
        llm: &llm,
        http: &http,
        settings,
        profile_path: &args.resume,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let resume = tailor_resume(&ctx, args.url.as_deref(), &mut input, &mut output).await?;

    resume.save_snapshot(&args.output_dir.join(SNAPSHOT_JSON))?;

    info!("Rendering resume to PDF...");
    let pdf_path = output_filename(&resume, &args.output_dir);
    render_resume_html_to_pdf(
        &resume,
        &args.template_dir,
        &args.output_dir,
        &pdf_path,
        !config.chrome_no_sandbox,
    )
    .await?;
    info!("Resume generated: {}", pdf_path.display());
    Ok(())
}

async fn preview(args: &Args, config: &Config, snapshot: &Path) -> Result<()> {
    info!("Rendering preview from {}", snapshot.display());
    let resume = TailoredResume::load_snapshot(snapshot)?;
    let pdf_path = args.output_dir.join(PREVIEW_PDF);
    render_resume_html_to_pdf(
        &resume,
        &args.template_dir,
        &args.output_dir,
        &pdf_path,
        !config.chrome_no_sandbox,
    )
    .await?;
    info!("Preview generated: {}", pdf_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["tailor"]).unwrap();
        assert!(args.cmd.is_none());
        assert!(args.url.is_none());
        assert_eq!(args.output_dir, PathBuf::from("output"));
        assert_eq!(args.template_dir, PathBuf::from("templates/classic_resume"));
    }

    #[test]
    fn test_args_url_and_paths() {
        let args = Args::try_parse_from([
            "tailor",
            "--url",
            "https://jobs.example.com/1",
            "--resume",
            "me.yaml",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("https://jobs.example.com/1"));
        assert_eq!(args.resume, PathBuf::from("me.yaml"));
    }

    #[test]
    fn test_preview_subcommand() {
        let args =
            Args::try_parse_from(["tailor", "preview", "--snapshot", "old.json"]).unwrap();
        match args.cmd {
            Some(Command::Preview { snapshot }) => {
                assert_eq!(snapshot, Some(PathBuf::from("old.json")))
            }
            other => panic!("expected preview, got {other:?}"),
        }
    }
}

//! Command-line interface for askterm
//!
//! Parses flags, sets up logging and configuration, then runs one interactive
//! session against the configured chat backend.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::model::ProxyChatClient;
use crate::prompt::DialoguerPrompter;
use crate::render::OutputRenderer;
use crate::session::Session;
use crate::templates::PromptTemplates;

/// Ask a language model about text, files, PDFs, web pages or your git diff
#[derive(Parser)]
#[command(name = "askterm")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (askterm.toml or .askterm.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Endpoint that issues the chat session token
    #[arg(long, value_name = "URL", env = "BACKEND_DB")]
    backend_url: Option<String>,

    /// Reverse-proxy endpoint for chat messages
    #[arg(long, value_name = "URL", env = "REVERSE_PROXY_URL")]
    proxy_url: Option<String>,
}

pub fn run() -> Result<()> {
    // Variables from .env back the env-aware flags below; a missing file is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let workdir = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&workdir, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides { backend_url: cli.backend_url, reverse_proxy_url: cli.proxy_url },
    );
    tracing::debug!(
        "backend: {:?}, proxy: {:?}",
        config.backend_url.as_deref(),
        config.reverse_proxy_url.as_deref()
    );

    let templates = PromptTemplates::with_overrides(&config.templates);
    let http = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let client = ProxyChatClient::new(http.clone(), config.backend_url, config.reverse_proxy_url);

    let session = Session::new(templates, client, http, workdir);
    let mut prompter = DialoguerPrompter::new();
    let mut renderer = OutputRenderer::new(std::io::stdout());
    session.run(&mut prompter, &mut renderer);

    Ok(())
}

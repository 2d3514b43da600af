//! nlcmd - Natural language to JSON command interface
//!
//! Usage:
//!     nlcmd [OPTIONS]
//!
//! Environment Variables:
//!     GROQ_API_KEY: API key for the completion service (required)
//!     GROQ_MODEL: Model name (default: llama3-8b-8192)
//!     GROQ_BASE_URL: OpenAI-compatible API base URL (default: https://api.groq.com/openai/v1)
//!     RUST_LOG: Log filter (default: warn)
//!
//! Variables may also be set in a `.env` file.

use anyhow::Result;
use clap::Parser;
use command_translator::{
    load_settings_file, require_api_key, run_interactive, CommandTranslator, LoopExit, ModelClient,
    ModelConfig,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Natural Language to Command Interface
#[derive(Parser, Debug)]
#[command(name = "nlcmd")]
#[command(about = "Translate natural-language requests into JSON commands with an LLM")]
#[command(after_help = r#"Examples:
    # Start the interactive prompt (reads GROQ_API_KEY from .env)
    nlcmd

    # Use another model
    nlcmd --model llama-3.1-8b-instant

    # Load settings from a specific file
    nlcmd --env-file ~/.config/nlcmd.env

    # Check the API before starting
    nlcmd --check-api
"#)]
struct Cli {
    /// Model name (default: $GROQ_MODEL or llama3-8b-8192)
    #[arg(long)]
    model: Option<String>,

    /// OpenAI-compatible API base URL (default: $GROQ_BASE_URL or Groq)
    #[arg(long)]
    base_url: Option<String>,

    /// Settings file to load instead of searching for .env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Send a test request before entering the prompt
    #[arg(long)]
    check_api: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Check if the model API is accessible
async fn check_model_api(client: &ModelClient) -> bool {
    print!(
        "Checking API connectivity ({})... ",
        client.config().base_url
    );
    io::stdout().flush().ok();

    match client.test_connection().await {
        Ok(_) => {
            println!("\u{2705} OK");
            true
        }
        Err(e) => {
            println!("\u{274C} FAILED");
            println!("   Error: {}", e);
            false
        }
    }
}

/// Load settings, require the credential and build the model client
///
/// Fails before any client exists when the settings file or API key is missing.
fn build_translator(args: &Cli) -> Result<CommandTranslator<ModelClient>> {
    // Settings file first so the credential can come from it
    load_settings_file(args.env_file.as_deref())?;

    let api_key = require_api_key()?;

    // Flags win over the environment, which is only complete after the settings file is loaded
    let mut model_config = ModelConfig::from_env().with_api_key(api_key);
    if let Some(model) = &args.model {
        model_config.model_name = model.clone();
    }
    if let Some(base_url) = &args.base_url {
        model_config.base_url = base_url.clone();
    }
    debug!(
        "Using model {} at {}",
        model_config.model_name, model_config.base_url
    );

    Ok(CommandTranslator::new(ModelClient::new(model_config)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_logging(args.verbose);

    let translator = match build_translator(&args) {
        Ok(translator) => translator,
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.check_api && !check_model_api(translator.backend()).await {
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = run_interactive(&translator, stdin.lock(), &mut stdout).await?;

    debug!(
        "Session ended ({}) after {} request(s)",
        match summary.exit {
            LoopExit::Sentinel => "exit",
            LoopExit::EndOfInput => "end of input",
        },
        summary.requests
    );

    Ok(())
}

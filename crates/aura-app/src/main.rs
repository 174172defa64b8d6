mod cli;
mod console;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use aura_ai::{
    AiError, GeminiSession, LogOnlyLauncher, Orchestrator, SessionConfig, SystemBrowser,
    ToolExecutor, ToolRegistry, TranscriptStore, TurnOutcome, UrlLauncher,
};
use aura_common::AuraError;
use aura_config::AuraConfig;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

/// Printed before the default panic report. Panics inside a turn are
/// recovered into the transcript after this runs, so it must not claim the
/// process is going down.
const PANIC_NOTICE: &str =
    "aura: internal panic (if Aura exits now, rerun with RUST_LOG=aura=debug and report it)";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("{PANIC_NOTICE}");
        default_hook(info);
    }));
}

/// `RUST_LOG` wins, then `--log-level`, then `[logging].level`.
fn init_logging(cli_directive: Option<&str>, config: &AuraConfig) {
    let fallback = format!("aura={}", config.logging.level.as_filter());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = cli_directive.unwrap_or(&fallback);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(&fallback))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_orchestrator(config: &AuraConfig, transcript: Arc<TranscriptStore>) -> Orchestrator {
    let launcher: Arc<dyn UrlLauncher> = if config.tools.open_in_browser {
        Arc::new(SystemBrowser)
    } else {
        Arc::new(LogOnlyLauncher)
    };
    let registry = ToolRegistry::builtin();
    let session_config = SessionConfig::new(&config.assistant.model)
        .with_system_instruction(&config.assistant.system_instruction)
        .with_tools(registry.declarations())
        .with_max_output_tokens(config.assistant.max_output_tokens)
        .with_temperature(config.assistant.temperature);
    let executor =
        ToolExecutor::new(registry, launcher).with_default_scheme(&config.tools.default_scheme);

    let created = match aura_config::resolve_api_key(&config.assistant) {
        Ok(key) => GeminiSession::create(session_config.with_api_key(Some(key))),
        Err(e) => Err(AiError::Configuration(e.to_string())),
    };

    Orchestrator::from_creation(created, executor, transcript)
        .with_max_tool_calls(config.tools.max_tool_calls_per_turn as usize)
}

async fn run() -> Result<ExitCode, AuraError> {
    let args = cli::parse();

    // An explicit --config that cannot be loaded is fatal; the default
    // location falls back to built-in defaults.
    let loaded = match &args.config {
        Some(path) => Ok(aura_config::load_config_from(path)?),
        None => aura_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AuraConfig::default(), Some(e)),
    };

    init_logging(args.log_level.as_deref(), &config);
    tracing::info!("Aura v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(model) = &args.model {
        config.assistant.model = model.clone();
    }

    let transcript = Arc::new(TranscriptStore::new());
    let renderer = console::spawn_renderer(transcript.subscribe());

    let orchestrator = build_orchestrator(&config, Arc::clone(&transcript));
    let indicator = console::spawn_thinking_indicator(orchestrator.watch_phase());

    let exit = match args.one_shot() {
        Some(message) => run_one_shot(&orchestrator, &message).await,
        None => {
            console::print_banner(&config.assistant.model, &config.assistant.greeting);
            let result = repl::run(&orchestrator).await;
            indicator.abort();
            shutdown(orchestrator, transcript, renderer).await;
            result?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    indicator.abort();
    shutdown(orchestrator, transcript, renderer).await;
    Ok(exit)
}

/// Submit one message. A rejection is reported on stderr and still returns
/// normally so the caller drains the renderer.
async fn run_one_shot(orchestrator: &Orchestrator, message: &str) -> ExitCode {
    match orchestrator.submit(message).await {
        Ok(report) if report.outcome == TurnOutcome::Completed => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(rejected) => {
            eprintln!("aura: {rejected}");
            ExitCode::FAILURE
        }
    }
}

/// Drop every transcript sender, then wait for the renderer to print what
/// is left.
async fn shutdown(orchestrator: Orchestrator, transcript: Arc<TranscriptStore>, renderer: JoinHandle<()>) {
    drop(orchestrator);
    drop(transcript);
    let _ = renderer.await;
    tracing::info!("Shutdown complete");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Variables already set in the environment take precedence.
    let _ = dotenvy::dotenv();

    install_panic_hook();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("aura: {e}");
            ExitCode::FAILURE
        }
    }
}

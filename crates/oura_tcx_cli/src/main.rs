use oura_client::config::Config;
use oura_client::http_client::ReqwestOuraClient;
use oura_tcx_cli::error::{ExportError, RunOutcome};
use oura_tcx_cli::prompt::{Prompter, StdinPrompter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Configure logging from env var `OURA_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("OURA_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    if let Err(err) = run_cli().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), ExportError> {
    let cfg = Config::from_env();
    let mut prompter = StdinPrompter::new();

    // Non-interactive credential source first; prompt only when unset.
    let token = match cfg.token {
        Some(token) => token,
        None => match prompter.read_token().await? {
            Some(token) => token,
            None => {
                println!("Prompt cancelled; nothing exported.");
                return Ok(());
            }
        },
    };

    let client = ReqwestOuraClient::new(&cfg.base_url, token);
    let output_dir = std::env::current_dir()?;

    match oura_tcx_cli::run(&client, &mut prompter, &output_dir).await? {
        RunOutcome::Exported { path, sample_count } => {
            println!(
                "Saved {} ({sample_count} heart rate samples).",
                path.display()
            );
        }
        RunOutcome::NothingToExport => {
            println!("No workouts found in your Oura account.");
        }
        RunOutcome::Cancelled => {
            println!("Selection cancelled; nothing exported.");
        }
    }

    Ok(())
}

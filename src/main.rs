// Standard library
use std::process;

// 3rd party crates
use clap::Parser;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

// Project imports
use vigil_ddns::logging;
use vigil_ddns::notify::EmailNotifier;
use vigil_ddns::providers::cloudflare::{CfConfig, Cloudflare};
use vigil_ddns::resolver::{HttpProbe, IpResolver};
use vigil_ddns::runner::Runner;
use vigil_ddns::settings::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "vigil-ddns",
    about = "Keeps Cloudflare A-records pointed at this host's public IP"
)]
struct Cli {
    /// Enable debug logging (takes precedence over the DEBUG variable).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    // Loads the .env file from the current directory or parents.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // The subscriber is not installed yet; stderr is all we have.
            eprintln!("configuration error: {e}");
            process::exit(1);
        }
    };

    if cli.debug {
        settings.debug = true;
    }

    logging::init(settings.debug, &settings.log_dir);

    info!("Starting vigil-ddns");
    debug!(
        zone = %settings.zone_id,
        sleep_minutes = settings.sleep_time,
        "Configuration loaded"
    );

    match settings.api_email() {
        Some(email) => info!(
            "Using Cloudflare legacy authentication: API key + email ({})",
            email
        ),
        None => info!("Using Cloudflare bearer-token authentication"),
    }

    let provider = match Cloudflare::new(CfConfig::from_settings(&settings)) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to initialize Cloudflare client: {}", e);
            process::exit(1);
        }
    };

    let notifier = match EmailNotifier::new(&settings) {
        Ok(notifier) => notifier,
        Err(e) => {
            error!("Failed to initialize email notifier: {}", e);
            process::exit(1);
        }
    };

    let runner = Runner::new(
        HttpProbe::new(),
        IpResolver::new(),
        provider,
        notifier,
        settings.record_names(),
        settings.sleep_duration(),
    );

    // Create a broadcast channel for the shutdown signal.
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_signals = shutdown_tx.clone();

    tokio::spawn(async move {
        wait_for_termination().await;
        info!("Received termination signal, initiating graceful shutdown...");
        let _ = shutdown_tx_signals.send(());
    });

    // The loop runs as its own task so this thread stays free to wait on
    // signals and task completion.
    let worker = tokio::spawn(runner.run(shutdown_tx.subscribe()));

    if let Err(e) = worker.await {
        error!("Reconciliation loop aborted: {}", e);
        process::exit(1);
    }

    info!("Shutdown complete.");
}

/// Resolves when SIGINT or SIGTERM arrives.
#[cfg(unix)]
async fn wait_for_termination() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            error!("Failed to install SIGTERM handler: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() {
    let _ = tokio::signal::ctrl_c().await;
}

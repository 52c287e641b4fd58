//! Portico CLI and REST API entry point.
//!
//! Binary name: `portico`
//!
//! Parses CLI arguments, loads configuration (config file plus `PORTICO_*`
//! environment overrides), then dispatches to the appropriate command
//! handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use console::style;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,portico=debug",
        _ => "trace",
    };
    let json_logs = matches!(cli.command, Commands::Serve { json_logs: true, .. });
    portico_observe::tracing_setup::init_tracing(Some(filter), json_logs)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "portico", &mut std::io::stdout());
        return Ok(());
    }

    let config = portico_infra::config::load_config().await;

    match cli.command {
        Commands::Serve { port, host, .. } => {
            let state = AppState::init(config);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Portico API listening on {}",
                style("*").bold(),
                style(format!("http://{addr}/api")).cyan()
            );
            println!("  {}", style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Ask { message, local } => {
            cli::chat::ask(&config, &message, local, cli.json).await?;
        }

        Commands::Chat { local } => {
            cli::chat::run_chat(&config, local).await?;
        }

        Commands::Submit {
            name,
            email,
            subject,
            message,
        } => {
            cli::submit::submit(&config, &name, &email, &subject, &message, cli.json).await?;
        }

        Commands::Kb => {
            cli::knowledge::show(cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

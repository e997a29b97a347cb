// ABOUTME: Entry point for the dockmate CLI application.
// ABOUTME: Parses arguments, loads config, and dispatches to command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use dockmate::api::{AnacondaPorts, ContainerApi};
use dockmate::commands::{self, CommandError};
use dockmate::config::{self, ClientConfig};
use dockmate::dispatch::HttpDispatcher;
use dockmate::error::Error;
use dockmate::output::{Output, OutputMode};
use dockmate::types::ContainerId;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut output = Output::new(mode);

    if let Err(e) = run(cli, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<(), CommandError> {
    let cwd = env::current_dir().map_err(Error::from)?;

    if let Commands::Init { force } = cli.command {
        let path = config::init_config(&cwd, cli.server.as_deref(), force)?;
        output.success(&format!("Created {}", path.display()));
        return Ok(());
    }

    let mut config = ClientConfig::discover_or_default(&cwd)?.with_env_overrides()?;
    if let Some(server) = cli.server.as_deref() {
        config = config.with_server(server)?;
    }
    tracing::debug!("using panel at {}", config.server);

    let api = ContainerApi::new(HttpDispatcher::from_config(&config)?);

    match cli.command {
        // Handled before any config is loaded.
        Commands::Init { .. } => Ok(()),
        Commands::Containers => commands::list_containers(&api, output).await,
        Commands::Images => commands::list_images(&api, output).await,
        Commands::Stats { ids } => {
            let ids: Vec<ContainerId> = ids.into_iter().map(ContainerId::new).collect();
            commands::container_stats(&api, &ids, output).await
        }
        Commands::Start { id } => {
            commands::start_container(&api, &ContainerId::new(id), output).await
        }
        Commands::Stop { id } => {
            commands::stop_container(&api, &ContainerId::new(id), output).await
        }
        Commands::Remove { id } => {
            commands::remove_container(&api, &ContainerId::new(id), output).await
        }
        Commands::CreateAnaconda {
            jupyter_port,
            ssh_port,
        } => {
            let ports = AnacondaPorts::new(jupyter_port, ssh_port);
            commands::create_anaconda_container(&api, ports, output).await
        }
    }
}

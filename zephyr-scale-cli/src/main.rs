use std::process;

mod cli;
mod completions;
mod doctor;
mod exit_codes;

use clap::CommandFactory;
use cli::{Cli, Commands};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

#[tokio::main]
async fn main() {
    let mut cli = Cli::parse_args();

    use is_terminal::IsTerminal;
    use tracing::Level;

    if cli.command.is_none() {
        if std::io::stdin().is_terminal() {
            // Fast path for help - avoid any initialization
            Cli::command().print_help().expect("Failed to print help");
            process::exit(EXIT_SUCCESS);
        }
        // Piped stdin means an MCP client launched us without arguments
        cli.command = Some(Commands::Serve);
    }

    // stdio is the MCP transport, so logs must never reach stdout or
    // stderr when a client drives us over a pipe
    let is_mcp_mode =
        matches!(cli.command, Some(Commands::Serve)) && !std::io::stdin().is_terminal();

    let log_level = if is_mcp_mode {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    if is_mcp_mode {
        use std::fs;
        use std::path::PathBuf;

        let log_dir = if let Some(home) = dirs::home_dir() {
            home.join(".zephyr-scale-mcp")
        } else {
            PathBuf::from(".zephyr-scale-mcp")
        };

        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create log directory: {e}");
        }

        let log_filename =
            std::env::var("ZEPHYR_SCALE_LOG_FILE").unwrap_or_else(|_| "mcp.log".to_string());
        let log_file = log_dir.join(log_filename);

        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_writer(file)
                    .with_max_level(log_level)
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to open log file, using stderr: {e}");
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_max_level(log_level)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();
    }

    let exit_code = match cli.command {
        Some(Commands::Serve) => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Some(Commands::Doctor) => {
            tracing::info!("Running diagnostics");
            run_doctor().await
        }
        Some(Commands::Completion { shell }) => {
            tracing::info!("Generating completion for {:?}", shell);
            run_completions(shell)
        }
        None => {
            // Handled early above
            unreachable!()
        }
    };

    process::exit(exit_code);
}

async fn run_server() -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;
    use zephyr_scale::mcp::ZephyrMcpServer;
    use zephyr_scale::{ZephyrClient, ZephyrConfig};

    // A missing token is not fatal: start degraded so the client can
    // at least list tools and read the configuration error
    let (client, default_project_key) = match ZephyrConfig::from_env() {
        Ok(config) => match ZephyrClient::new(&config) {
            Ok(client) => (Some(Arc::new(client)), config.project_key),
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {}", e);
                return EXIT_WARNING;
            }
        },
        Err(e) => {
            tracing::warn!("Starting without configuration: {}", e);
            (None, None)
        }
    };

    let server = ZephyrMcpServer::new(client, default_project_key);

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");

        tracing::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(_running_service) => {
            tracing::info!("MCP server started successfully");

            ct.cancelled().await;

            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_WARNING
        }
    }
}

async fn run_doctor() -> i32 {
    use doctor::Doctor;

    let mut doctor = Doctor::new();
    match doctor.run_diagnostics().await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!("Doctor error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_completions(shell: clap_complete::Shell) -> i32 {
    match completions::print_completion(shell) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Completion error: {}", e);
            EXIT_WARNING
        }
    }
}

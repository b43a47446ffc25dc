//! `mushroom`: run the scoring service or score a single payload.

mod logging;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use mushroom_core::score_body;
use mushroom_server::ServerConfig;

use crate::logging::{init_subscriber, Verbosity};

/// Exit status when the payload is rejected (the HTTP 400 case).
const EXIT_REJECTED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "mushroom", version, about = "Mushroom attribute scoring service")]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve `GET /` and `POST /score` over HTTP
    Serve(ServeArgs),

    /// Score one JSON payload and print 1 or 0
    Score {
        /// Payload file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    fn server_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_yaml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ServerConfig::default(),
        };
        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    match cli.command {
        Command::Serve(args) => run_serve(&args),
        Command::Score { file } => run_score(file.as_deref()),
    }
}

fn run_serve(args: &ServeArgs) -> Result<ExitCode> {
    let config = args.server_config()?;
    tracing::info!(addr = %config.bind_addr(), "Starting scoring service");

    let runtime = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    runtime
        .block_on(mushroom_server::serve(&config))
        .context("running server")?;

    Ok(ExitCode::SUCCESS)
}

fn run_score(file: Option<&Path>) -> Result<ExitCode> {
    let body = read_payload(file)?;
    match score_body(&body) {
        Ok(classification) => {
            println!("{classification}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprint!("{e}");
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}

fn read_payload(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .context("reading payload from stdin")?;
            Ok(body)
        }
    }
}

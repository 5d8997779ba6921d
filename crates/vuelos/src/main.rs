//! `vuelos` - CLI for the flight records service
//!
//! This binary runs the HTTP server and offers a few maintenance commands
//! over the JSON data file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use vuelos::cli::{Cli, Command, ConfigCommand, InitCommand, ListCommand, ServeCommand};
use vuelos::{init_logging, Config, FlightStore, JsonFileRepository, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(cmd) => handle_serve(config, &cmd).await,
        Command::Init(cmd) => handle_init(&config, &cmd),
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn data_file(config: &Config, over: Option<&PathBuf>) -> PathBuf {
    over.cloned().unwrap_or_else(|| config.data_file())
}

async fn handle_serve(mut config: Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    cmd.apply(&mut config);
    config.validate()?;

    let repo = JsonFileRepository::new(config.data_file());
    repo.init()
        .with_context(|| format!("initializing {}", repo.path().display()))?;

    let server = Server::new(config, FlightStore::new(repo));
    server.serve().await?;
    Ok(())
}

fn handle_init(config: &Config, cmd: &InitCommand) -> anyhow::Result<()> {
    let repo = JsonFileRepository::new(data_file(config, cmd.data_file.as_ref()));
    if repo.init()? {
        println!("Created {}", repo.path().display());
    } else {
        println!("{} already exists", repo.path().display());
    }
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = FlightStore::new(JsonFileRepository::new(data_file(
        config,
        cmd.data_file.as_ref(),
    )));
    let flights = store.list()?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&flights)?);
        return Ok(());
    }

    if flights.is_empty() {
        println!("No flights.");
        return Ok(());
    }

    println!("{:>5}  {:<30} {:>9} {:>9}", "ID", "DESTINO", "CAPACIDAD", "VENDIDOS");
    for f in &flights {
        println!(
            "{:>5}  {:<30} {:>9} {:>9}",
            f.id, f.destino, f.capacidad, f.vendidos
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind address:       {}", config.server.bind_addr);
                println!(
                    "  Request timeout:    {}s",
                    config.server.request_timeout_secs
                );
                println!();
                println!("[Storage]");
                println!("  Data file:          {}", config.data_file().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

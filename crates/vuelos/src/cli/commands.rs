//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::Config;

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides configuration)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Path to the JSON data file (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl ServeCommand {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(bind) = self.bind {
            config.server.bind_addr = bind;
        }
        if let Some(path) = &self.data_file {
            config.storage.data_file.clone_from(path);
        }
    }
}

/// Init command arguments.
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Path to the JSON data file (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Path to the JSON data file (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_apply_overrides() {
        let cmd = ServeCommand {
            bind: Some("0.0.0.0:8080".parse().unwrap()),
            data_file: Some(PathBuf::from("/srv/vuelos.json")),
        };
        let mut config = Config::default();
        cmd.apply(&mut config);

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.data_file(), PathBuf::from("/srv/vuelos.json"));
    }

    #[test]
    fn test_serve_apply_without_overrides() {
        let cmd = ServeCommand {
            bind: None,
            data_file: None,
        };
        let mut config = Config::default();
        cmd.apply(&mut config);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_list_command_debug() {
        let cmd = ListCommand {
            data_file: None,
            json: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }
}

//! Command-line front end for the kernel I/O gateway.
//!
//! Loads the alias table from `gateway.toml` (or `--config`), builds a
//! gateway over the host filesystem and answers one request per invocation.
//! Responses are printed to stdout as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gateway::exit_codes;
use gateway::io::config::{DEFAULT_CONFIG_FILE, GatewayConfig, load_config, write_config};
use gateway::{Gateway, Request, Response, logging};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "gateway",
    version,
    about = "Alias-aware file and directory gateway"
)]
struct Cli {
    /// Path to the TOML configuration holding the alias table.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Dispatch a JSON request read from a file or stdin.
    Dispatch {
        /// Request file; reads stdin when omitted or `-`.
        #[arg(short, long)]
        request: Option<PathBuf>,
    },
    /// Print the contents of a file.
    Read { path: String },
    /// Print the directory hierarchy under a directory.
    Tree {
        directory: String,
        /// Maximum nesting level to expand.
        #[arg(short = 'L', long)]
        depth: Option<usize>,
    },
    /// Print the physical path an aliased path resolves to.
    Resolve { path: String },
    /// Print the configured aliases as JSON.
    Aliases,
    /// Print host platform information as JSON.
    Host,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Dispatch { request } => {
            let gateway = open_gateway(&cli.config)?;
            let raw = read_request(request.as_deref())?;
            emit_response(&gateway.dispatch_json(&raw))
        }
        Command::Read { path } => {
            let gateway = open_gateway(&cli.config)?;
            emit_response(&gateway.dispatch(&Request::read(path)))
        }
        Command::Tree { directory, depth } => {
            let gateway = open_gateway(&cli.config)?;
            emit_response(&gateway.dispatch(&Request::tree(directory, depth)))
        }
        Command::Resolve { path } => match open_gateway(&cli.config)?.resolve(&path) {
            Ok(resolved) => {
                println!("{resolved}");
                Ok(exit_codes::OK)
            }
            Err(err) => {
                eprintln!("{err}");
                Ok(exit_codes::REQUEST_FAILED)
            }
        },
        Command::Aliases => {
            print_json(&open_gateway(&cli.config)?.aliases().list_aliases())?;
            Ok(exit_codes::OK)
        }
        Command::Host => {
            print_json(&open_gateway(&cli.config)?.host_info())?;
            Ok(exit_codes::OK)
        }
    }
}

/// Load the alias table once and compose a gateway over the host filesystem.
fn open_gateway(config_path: &Path) -> Result<Gateway> {
    let config = load_config(config_path).context("load gateway config")?;
    Ok(Gateway::local(config.alias_table()))
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    write_config(path, &GatewayConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(exit_codes::OK)
}

fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read request from stdin")?;
            Ok(buf)
        }
    }
}

fn emit_response(response: &Response) -> Result<i32> {
    print_json(response)?;
    if response.is_error() {
        Ok(exit_codes::REQUEST_FAILED)
    } else {
        Ok(exit_codes::OK)
    }
}

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{payload}");
    Ok(())
}

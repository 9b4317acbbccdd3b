//! # Pebble Host Daemon
//!
//! Main entry point for the Pebble host runtime.

use clap::Parser;
use pebbled::{read_script, HostRuntime, HostRuntimeConfig, HostRuntimeError, RenderMode};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "pebbled", version, about = "Run the Pebble shell on a host terminal")]
struct Cli {
    /// Key script to replay instead of reading stdin
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Maximum key events to process (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_steps: usize,

    /// When to print screen frames
    #[arg(long, value_enum, default_value_t = RenderMode::EachLine)]
    render: RenderMode,

    /// Print the blob store as JSON after the run
    #[arg(long)]
    dump_store: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), HostRuntimeError> {
    let script = cli.script.as_deref().map(read_script).transpose()?;

    let config = HostRuntimeConfig {
        script,
        max_steps: cli.max_steps,
        render: cli.render,
        ..HostRuntimeConfig::default()
    };

    let mut runtime = HostRuntime::new(config)?;
    runtime.run(&mut io::stdout().lock())?;

    if cli.dump_store {
        println!("{}", runtime.report().to_json()?);
    }

    Ok(())
}

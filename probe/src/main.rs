//! uidlock License Probe
//!
//! Runs the license engine once on the current device and prints the
//! outcome. Also prints the device identity, which is what an integrator
//! needs to request a license for a new board.
//!
//! Usage:
//!   uidlock-probe --identity-file /sys/bus/i2c/devices/1-0060/uid
//!   uidlock-probe --identity-hex <54 hex chars> --uid <hex> --license <base64>

use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf, process::ExitCode};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use uidlock_license::DeviceIdentity;
use uidlock_probe::{render_text, run_probe, IdentitySource, ProbeConfig};

#[derive(Parser, Debug)]
#[command(name = "uidlock-probe")]
#[command(about = "Checks the device license and reports the device identity")]
struct Args {
    /// Secure element identity export (27 raw bytes or 54 hex characters)
    #[arg(short = 'f', long, conflicts_with = "identity_hex")]
    identity_file: Option<PathBuf>,

    /// Fixed device identity as 54 hex characters
    #[arg(long)]
    identity_hex: Option<String>,

    /// Override the compiled-in device UID (54 hex characters)
    #[arg(long)]
    uid: Option<String>,

    /// Override the compiled-in license key (base64 DER signature)
    #[arg(long)]
    license: Option<String>,

    /// Override the compiled-in trust anchor with a PEM file
    #[arg(long)]
    anchor_file: Option<PathBuf>,

    /// Only read and print the device identity
    #[arg(long)]
    identity_only: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let identity = match (&args.identity_file, &args.identity_hex) {
        (Some(path), _) => IdentitySource::File(path.clone()),
        (None, Some(hex)) => IdentitySource::Fixed(
            DeviceIdentity::from_hex(hex).context("Invalid --identity-hex value")?,
        ),
        (None, None) => anyhow::bail!("one of --identity-file or --identity-hex is required"),
    };

    let anchor_pem = args
        .anchor_file
        .as_ref()
        .map(|path| {
            info!("Loading trust anchor from {:?}", path);
            fs::read_to_string(path).context("Failed to read trust anchor file")
        })
        .transpose()?;

    let config = ProbeConfig {
        identity,
        uid: args.uid,
        license: args.license,
        anchor_pem,
    };

    let engine = config.build_engine();
    let output = run_probe(&engine, args.identity_only);

    if output.anchor_placeholder {
        warn!("Trust anchor is a placeholder; licenses are not actually verified");
    }

    if args.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to encode output")?;
        println!("{json}");
    } else {
        println!("{}", render_text(&output));
    }

    Ok(if output.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

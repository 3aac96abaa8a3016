//! Command-line front end.
//!
//! Prompts for an encoding on standard input (or takes one as an argument),
//! and prints its digits. Diagnostics are logged to standard error, filtered
//! by `RUST_LOG` or `--log-level`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "lreq", version, about = "Decode an L/R/= encoding into digits")]
struct Cli {
    /// Encoding to decode, instead of prompting on standard input.
    encoding: Option<String>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let digits = match cli.encoding {
        Some(encoding) => lreq::decode(&encoding.to_ascii_uppercase())
            .with_context(|| format!("Failed to decode {encoding:?}."))?,
        None => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "input = ")?;
            stdout.flush()?;

            lreq::avec::decode_reader(&mut io::stdin().lock())
                .context("Failed to decode standard input.")?
        }
    };

    println!("output = {digits}");

    Ok(())
}

fn init_tracing(default: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Standard output carries the prompt and result only.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

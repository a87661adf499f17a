//! pond — runs the duck conformance script under both slot encodings.
//!
//! Usage: `pond [ROSTER_JSON]`
//!
//! stdout carries exactly what the ducks say; logs go to stderr and are
//! controlled by `RUST_LOG` (default `warn`).  If a roster file is given,
//! its presets are merged over the built-in Mallard/Model and every duck in
//! the resulting roster introduces itself.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use duck_entity::{FnDuck, StrategyDuck};
use duck_variant::{Roster, StdoutObserver, conformance_transcript, introduce};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let roster_path = std::env::args_os().nth(1).map(PathBuf::from);

    // 1. Conformance script, once per encoding.
    for (encoding, lines) in [
        ("trait objects", conformance_transcript::<StrategyDuck>()),
        ("bound functions", conformance_transcript::<FnDuck>()),
    ] {
        println!("=== conformance: {encoding} ===");
        for line in lines {
            println!("{line}");
        }
        println!();
    }

    // 2. Roster introductions.
    let mut roster = Roster::standard();
    if let Some(path) = roster_path {
        let added = roster
            .merge_json_file(&path)
            .with_context(|| format!("loading roster {}", path.display()))?;
        info!(added, path = %path.display(), "roster merged");
    }

    println!("=== roster ({} ducks) ===", roster.len());
    for config in roster.iter() {
        let duck: StrategyDuck = roster.build(&config.name)?;
        introduce(&duck, &mut StdoutObserver);
        println!();
    }

    Ok(())
}

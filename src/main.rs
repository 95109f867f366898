mod cli;

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use fdump::{dump, ByteSink, DumpError, StdoutSink};

use cli::Cli;

const TARGET_PATH: &str = "/test.c";
const CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(128).unwrap();

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!(
        "fdump v{} ({} argument(s))",
        env!("CARGO_PKG_VERSION"),
        cli.args.len()
    );
    if !cli.args.is_empty() {
        println!("arguments:");
        for (i, arg) in cli.args.iter().enumerate() {
            println!("  arg[{i}] = {arg:?}");
        }
    }

    println!("dumping {TARGET_PATH}:");
    let mut sink = StdoutSink::new();
    match dump(Path::new(TARGET_PATH), CHUNK_SIZE, &mut sink) {
        Ok(total) => {
            sink.flush()?;
            println!();
            println!("{}", format!("=== {total} bytes ===").dimmed());
        }
        Err(err @ DumpError::Open { .. }) => {
            // Reported, not fatal: the original tool kept going and exited
            // cleanly when the target was missing, and so do we.
            println!("{}", err.to_string().red());
        }
        Err(err) => {
            // Mid-stream failure: whatever was read has already reached
            // stdout, so flush it before the notice.
            sink.flush()?;
            println!();
            println!("{}", err.to_string().red().bold());
        }
    }

    Ok(())
}

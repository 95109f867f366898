use clap::Parser;

/// Arguments are captured verbatim and echoed back, never interpreted as
/// options. The target path and chunk size are fixed.
#[derive(Parser, Debug)]
#[command(name = "fdump", version)]
#[command(about = "Echo arguments, then dump /test.c to stdout in 128-byte chunks")]
pub struct Cli {
    /// Arbitrary strings to echo before the dump
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

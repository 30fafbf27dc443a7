use anyhow::Context;
use bigfib_core::{fibonacci, parse_index, to_hex, to_hex_padded};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "bigfib")]
/// Print the n-th Fibonacci number (F(0) = F(1) = 1) in hexadecimal.
struct Opts {
    /// Sequence index, a non-negative base-10 integer
    #[arg(value_name = "N", allow_negative_numbers = true)]
    n: Option<String>,

    /// Print the value as zero-padded 64-bit buckets
    #[arg(long)]
    padded: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    bigfib::init_tracing(opts.verbose);

    let n = parse_index(opts.n.as_deref()).context("usage: bigfib <n>")?;

    info!("computing term {}", n);
    let value = fibonacci(n);

    let out = if opts.padded {
        to_hex_padded(&value)
    } else {
        to_hex(&value)
    };
    println!("{}", out);

    Ok(())
}

use anyhow::Context;
use bigfib_core::HexInt;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "bighex")]
/// Read a hexadecimal big integer and print it as zero-padded 64-bit buckets.
struct Opts {
    /// Hex digits without a 0x prefix
    #[arg(value_name = "HEX")]
    hex: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    bigfib::init_tracing(opts.verbose);

    let value: HexInt = opts.hex.parse().context("usage: bighex <hex>")?;
    info!("read {} bucket(s)", value.buckets());

    println!("{}", value);
    Ok(())
}

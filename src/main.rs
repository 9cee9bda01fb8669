use clap::Parser;

use capgains::cmd::ProcessCommand;

/// Calculate capital gains tax for batches of buy/sell operations
#[derive(Parser, Debug)]
#[command(name = "capgains", version, about)]
struct Cli {
    #[command(flatten)]
    process: ProcessCommand,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    cli.process.exec()
}

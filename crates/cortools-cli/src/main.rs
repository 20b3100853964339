// crates/cortools-cli/src/main.rs

use clap::Parser;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "cortools-cli", version)]
#[command(about = "View galvo correction tables (.cor) and correction captures (.pcap)", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub view: cmd::view::ViewArgs,

    #[command(flatten)]
    pub write: cmd::write::WriteArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let wrote = cmd::write::run(&cli.write)?;
    cmd::view::run(&cli.view, wrote)
}

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = mini_xtask::cli::Cli::parse();
    mini_xtask::util::log::init(cli.verbose);
    mini_xtask::app::run(cli)
}

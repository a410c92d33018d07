// src/bin/cli.rs
use clap::Parser;
use presence_dash::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let _guard = log::init();

    let args = cli::Cli::parse();
    if let Err(e) = cli::run(args) {
        presence_dash::loge!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

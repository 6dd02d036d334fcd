use clap::Parser;
use std::error::Error;
use vlsm_planner::config::{init_logger, Cli};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logger(&cli.log_config)?;
    log::info!("#Start main()");

    vlsm_planner::run(&cli)
}

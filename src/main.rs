use std::error::Error;

use clap::Parser;
use fractal_animator::{Cli, run_cli};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_cli(Cli::parse())
}

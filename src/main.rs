mod app;
mod cli;
mod config;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("datasrc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // stdout carries command output; logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_default(),
        None => Config::load(),
    };
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

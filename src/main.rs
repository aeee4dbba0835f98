//! CLI entry point for `apportion`.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_apportion::cli::{self, Cli};

fn main() {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_level()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

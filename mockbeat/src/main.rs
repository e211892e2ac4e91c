//! Mockbeat binary entry point

use std::path::PathBuf;

use clap::Parser;

use mockbeat::{Config, Mockbeat, MockbeatResult};

#[derive(Parser)]
#[command(name = "mockbeat")]
#[command(about = "A periodic log-scanning daemon for exercising system tests")]
struct Args {
    /// Path to the JSON config file
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Log verbosity for the mockbeat target
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::new(format!("mockbeat={log_level}")))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() -> MockbeatResult<()> {
    let args = Args::parse();

    init_tracing(&args.log_level);

    let config = Config::load(&args.config)?;
    Mockbeat::new(config).run().await
}

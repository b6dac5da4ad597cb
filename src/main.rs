//! .

mod app;
mod cli;
mod e2e;
mod error;
mod http;
mod launch;
mod populate;
mod protocol;

use cli::Cli;

use clap::Parser;
use std::process;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    start_tracing();
    let cli = Cli::parse();

    if let Err(e) = app::run(cli).await {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn start_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

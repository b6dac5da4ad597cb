//! .

use crate::{
    cli::{Cli, Job, Report, render, resolve},
    error::AppResult as Result,
    http::{client, store::StoreClient, words::WordClient},
    populate::{data, servers},
};

use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    let http = client::build(cli.timeout.map(Duration::from_secs))?;
    let words = WordClient::new(http.clone(), cli.word_url.clone());

    let report = match resolve(&cli.command) {
        Job::Data { count, store_url } => {
            tracing::info!(count, %store_url, "populating data");
            let store = StoreClient::new(http, store_url);
            Report::Data(data::run(&words, &store, count).await?)
        }
        Job::Servers { opts, launcher } => {
            tracing::info!(count = opts.count, port = opts.base_port, join = %opts.join, "populating servers");
            let shutdown = if opts.wait {
                ctrl_c_token()
            } else {
                CancellationToken::new()
            };
            Report::Servers(servers::run(&words, &launcher, &opts, shutdown).await?)
        }
    };

    render(&report, cli.json)
}

/// Only installed when waiting on nodes, so Ctrl-C otherwise keeps its default behavior.
fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let token_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token_c.cancel();
        }
    });
    token
}

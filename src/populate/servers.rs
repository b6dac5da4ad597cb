//! Launches CAN nodes that join an existing node.

use crate::{
    error::{AppError as Error, AppResult as Result},
    http::words::WordClient,
    launch::{Launcher, NodeHandle},
    protocol::{NodeSpec, ServerReport},
};

use tokio::select;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub count: usize,
    pub base_port: u16,
    pub join: String,
    /// Block until every node exits instead of detaching.
    pub wait: bool,
}

/// Ports `base..base + count`, or an error if that leaves the u16 range.
pub fn ports(base: u16, count: usize) -> Result<impl Iterator<Item = u16>> {
    (base as usize)
        .checked_add(count)
        .filter(|end| count == 0 || end - 1 <= u16::MAX as usize)
        .ok_or(Error::PortOverflow { base, count })?;
    Ok((0..count).map(move |i| base + i as u16))
}

pub async fn run(
    words: &WordClient,
    launcher: &Launcher,
    opts: &ServerOptions,
    shutdown: CancellationToken,
) -> Result<ServerReport> {
    let ports = ports(opts.base_port, opts.count)?;
    let mut handles: Vec<NodeHandle> = Vec::with_capacity(opts.count);

    for port in ports {
        let launched = select! {
            biased;
            _ = shutdown.cancelled() => {
                tracing::info!(port, "interrupted, no further nodes launched");
                break;
            }
            launched = launch_one(words, launcher, port, &opts.join) => launched,
        };

        match launched {
            Ok(handle) => {
                tracing::info!(
                    port,
                    key = %handle.spec.key,
                    pid = ?handle.pid(),
                    "launched node"
                );
                handles.push(handle);
            }
            Err(e) => {
                for handle in &handles {
                    tracing::warn!(port = handle.spec.port, pid = ?handle.pid(), "node left running");
                }
                return Err(e);
            }
        }
    }

    if !opts.wait {
        let nodes = handles.into_iter().map(NodeHandle::detach).collect();
        return Ok(ServerReport {
            nodes,
            waited: false,
        });
    }

    wait_all(&mut handles, &shutdown).await?;
    Ok(ServerReport {
        nodes: handles.iter().map(NodeHandle::launched).collect(),
        waited: true,
    })
}

async fn launch_one(
    words: &WordClient,
    launcher: &Launcher,
    port: u16,
    join: &str,
) -> Result<NodeHandle> {
    let key = words.fetch_one().await?;
    let spec = NodeSpec {
        port,
        join: join.to_string(),
        key,
    };
    launcher.spawn(spec).await
}

/// Waits on nodes in launch order. Cancellation kills whatever is still running.
async fn wait_all(handles: &mut [NodeHandle], shutdown: &CancellationToken) -> Result<()> {
    let mut next = 0;
    while next < handles.len() {
        let handle = &mut handles[next];
        let status = select! {
            biased;
            _ = shutdown.cancelled() => None,
            status = handle.wait() => Some(status?),
        };

        match status {
            Some(status) => {
                tracing::info!(port = handle.spec.port, %status, "node exited");
                next += 1;
            }
            None => {
                tracing::info!("interrupted, stopping {} node(s)", handles.len() - next);
                for handle in &mut handles[next..] {
                    if let Err(e) = handle.kill().await {
                        tracing::warn!(port = handle.spec.port, "failed to stop node: {e}");
                    }
                }
                break;
            }
        }
    }
    Ok(())
}

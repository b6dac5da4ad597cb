//! Spawning CAN node processes.

use crate::{
    error::{AppError as Error, AppResult as Result},
    protocol::{LaunchedNode, NodeSpec},
};

use std::process::{ExitStatus, Stdio};
use tokio::{
    io::{self, AsyncWriteExt},
    process::{Child, Command},
};

pub const DEFAULT_PROGRAM: &str = "go";
pub const DEFAULT_PROGRAM_ARGS: [&str; 2] = ["run", "../can.go"];

#[derive(Debug, Clone)]
pub struct Launcher {
    program: String,
    prefix_args: Vec<String>,
    /// Also answer the node's join-key prompt on stdin.
    key_stdin: bool,
}

impl Launcher {
    pub fn new(program: impl Into<String>, prefix_args: Vec<String>, key_stdin: bool) -> Self {
        Self {
            program: program.into(),
            prefix_args,
            key_stdin,
        }
    }

    /// `<program> <prefix args..> -p <port> -join <join> -key <key>`
    pub fn command(&self, spec: &NodeSpec) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.prefix_args)
            .arg("-p")
            .arg(spec.port.to_string())
            .arg("-join")
            .arg(&spec.join)
            .arg("-key")
            .arg(&spec.key);
        if self.key_stdin {
            cmd.stdin(Stdio::piped());
        }
        cmd
    }

    pub async fn spawn(&self, spec: NodeSpec) -> Result<NodeHandle> {
        let mut child = self.command(&spec).spawn().map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The node may already be gone; it still counts as launched.
            if let Err(e) = stdin.write_all(format!("{}\n", spec.key).as_bytes()).await {
                tracing::warn!(port = spec.port, "could not write key to node stdin: {e}");
            }
        }

        Ok(NodeHandle { spec, child })
    }
}

/// A launched node. Dropping it detaches: the process keeps running.
#[derive(Debug)]
pub struct NodeHandle {
    pub spec: NodeSpec,
    child: Child,
}

impl NodeHandle {
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    pub fn launched(&self) -> LaunchedNode {
        LaunchedNode {
            port: self.spec.port,
            key: self.spec.key.clone(),
            pid: self.pid(),
        }
    }

    pub fn detach(self) -> LaunchedNode {
        self.launched()
    }

    pub async fn wait(&mut self) -> io::Result<ExitStatus> {
        self.child.wait().await
    }

    pub async fn kill(&mut self) -> io::Result<()> {
        self.child.kill().await
    }
}

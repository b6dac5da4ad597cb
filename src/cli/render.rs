//! .

use crate::{
    error::AppResult as Result,
    protocol::{DataReport, ServerReport},
};

use serde::Serialize;
use std::io::Write;

pub(crate) enum Report {
    Data(DataReport),
    Servers(ServerReport),
}

pub(crate) fn render(report: &Report, as_json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match report {
        Report::Data(report) if as_json => write_json(&mut out, report),
        Report::Servers(report) if as_json => write_json(&mut out, report),
        Report::Data(report) => {
            for pair in &report.stored {
                writeln!(out, "{}\t{}", pair.key, pair.data)?;
            }
            writeln!(
                out,
                "✔ stored {} of {} pairs",
                report.stored.len(),
                report.requested
            )?;
            Ok(())
        }
        Report::Servers(report) => {
            for node in &report.nodes {
                let pid = node.pid.map_or_else(|| "-".to_string(), |p| p.to_string());
                writeln!(out, "{}\t{}\t{}", node.port, pid, node.key)?;
            }
            let state = if report.waited { "exited" } else { "running" };
            writeln!(out, "✔ {} node(s) {state}", report.nodes.len())?;
            Ok(())
        }
    }
}

fn write_json<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

//! .

use crate::{
    cli::models::{Command, NodeProgram},
    launch::Launcher,
    populate::servers::ServerOptions,
};

#[derive(Debug)]
pub(crate) enum Job {
    Data {
        count: usize,
        store_url: String,
    },
    Servers {
        opts: ServerOptions,
        launcher: Launcher,
    },
}

pub(crate) fn resolve(cmd: &Command) -> Job {
    match cmd {
        Command::Data { count, store_url } => Job::Data {
            count: *count,
            store_url: store_url.clone(),
        },
        Command::Servers {
            count,
            port,
            join,
            node,
            wait,
        } => Job::Servers {
            opts: ServerOptions {
                count: *count,
                base_port: *port,
                join: join.clone(),
                wait: *wait,
            },
            launcher: launcher(node),
        },
    }
}

fn launcher(node: &NodeProgram) -> Launcher {
    Launcher::new(node.program.clone(), node.program_args.clone(), node.key_stdin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    use clap::Parser;

    fn parse(args: &[&str]) -> Job {
        let cli = Cli::try_parse_from(std::iter::once("populate").chain(args.iter().copied()))
            .unwrap();
        resolve(&cli.command)
    }

    #[test]
    fn data_defaults_to_100() {
        match parse(&["data"]) {
            Job::Data { count, store_url } => {
                assert_eq!(count, 100);
                assert_eq!(store_url, "http://localhost:3000/data");
            }
            other => panic!("Expected data job, got {other:?}"),
        }
    }

    #[test]
    fn data_count_is_positional() {
        assert!(matches!(parse(&["data", "3"]), Job::Data { count: 3, .. }));
    }

    #[test]
    fn data_count_must_be_integer() {
        assert!(Cli::try_parse_from(["populate", "data", "many"]).is_err());
    }

    #[test]
    fn servers_defaults() {
        match parse(&["servers"]) {
            Job::Servers { opts, launcher } => {
                assert_eq!(opts.count, 10);
                assert_eq!(opts.base_port, 3001);
                assert_eq!(opts.join, "localhost:3000");
                assert!(!opts.wait);
                let spec = crate::protocol::NodeSpec {
                    port: 3001,
                    join: opts.join.clone(),
                    key: "k".into(),
                };
                let cmd = launcher.command(&spec);
                assert_eq!(cmd.as_std().get_program(), std::ffi::OsStr::new("go"));
            }
            other => panic!("Expected servers job, got {other:?}"),
        }
    }

    #[test]
    fn servers_count_and_port_are_positional() {
        match parse(&["servers", "2", "4000"]) {
            Job::Servers { opts, .. } => {
                assert_eq!(opts.count, 2);
                assert_eq!(opts.base_port, 4000);
            }
            other => panic!("Expected servers job, got {other:?}"),
        }
    }

    #[test]
    fn program_args_accept_flags() {
        match parse(&[
            "servers",
            "1",
            "--program",
            "sh",
            "--program-arg",
            "-c",
            "--program-arg",
            "exit 0",
            "--key-stdin",
        ]) {
            Job::Servers { opts, launcher } => {
                let spec = crate::protocol::NodeSpec {
                    port: opts.base_port,
                    join: opts.join,
                    key: "k".into(),
                };
                let cmd = launcher.command(&spec);
                let args: Vec<_> = cmd.as_std().get_args().collect();
                assert_eq!(args[0], "-c");
                assert_eq!(args[1], "exit 0");
                assert_eq!(args[2], "-p");
            }
            other => panic!("Expected servers job, got {other:?}"),
        }
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["populate", "servers", "1", "70000"]).is_err());
    }
}

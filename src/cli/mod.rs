//! .

mod models;
mod render;
mod resolve;

pub(crate) use models::Cli;
pub(crate) use render::{Report, render};
pub(crate) use resolve::{Job, resolve};

//! .

pub mod client;
pub mod store;
pub mod words;

//! The two seeding jobs: store data and CAN nodes.

pub mod data;
pub mod servers;

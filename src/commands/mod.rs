//! CLI commands for spf

pub mod dispatch;
pub mod path;
pub mod routes;
pub mod topology;

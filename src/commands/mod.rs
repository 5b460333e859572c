//! Subcommand entry points

pub mod cache;
pub mod generate;
pub mod init;
pub mod interactive;
pub mod models;

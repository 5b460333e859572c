//! Common test utilities for Cardsmith integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - `FakeServer`: a scripted HTTP/1.1 server for the model and content APIs

#![allow(dead_code)]

pub mod env;
pub mod server;

pub use env::*;
pub use server::*;

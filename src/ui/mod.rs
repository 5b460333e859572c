//! Terminal output: design tokens, primitives, views and progress sinks

pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod progress;
pub mod terminal;
pub mod theme;
pub mod views;

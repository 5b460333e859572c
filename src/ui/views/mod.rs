pub mod cache;
pub mod generate;
pub mod models;

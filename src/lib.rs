pub mod api;
pub mod bootstrap;
pub mod common;
pub mod config;
pub mod digest;
pub mod enrich;
pub mod models;
pub mod providers;

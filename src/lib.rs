pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod introspect;
pub mod middleware;
pub mod models;
pub mod server;

//! Core server plumbing: configuration, shared state, serve loop

mod config;
mod error;
mod server;
mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::{Server, build_app};
pub use state::ServerState;

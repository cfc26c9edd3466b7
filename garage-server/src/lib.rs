//! Bro Motors Server - 정비소 운영/예약 관리 서버
//!
//! # Architecture Overview
//!
//! This crate is the main entry point of the shop server, providing:
//!
//! - **Booking engine** (`booking`): slot availability, appointment
//!   lifecycle, calendar projection backed by redb
//! - **Session store** (`session`): persisted login user and favorite shops
//! - **Shop catalog** (`catalog`): partner repair shop reference data
//! - **Data boundary** (`data`): business records behind an abstract
//!   repository interface
//! - **HTTP API** (`api`): RESTful API surface
//!
//! # Module Structure
//!
//! ```text
//! garage-server/src/
//! ├── core/          # Config, state, server, errors
//! ├── booking/       # Slot store, lifecycle manager, calendar grid
//! ├── session/       # Login user + favorites (redb)
//! ├── catalog/       # Partner shop catalog
//! ├── data/          # Business-data boundary + fixtures
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Response envelope, logger
//! ```

pub mod api;
pub mod booking;
pub mod catalog;
pub mod core;
pub mod data;
pub mod session;
pub mod utils;

// Re-export public types
pub use crate::booking::{BookingManager, BookingStorage};
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging before anything else runs
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __  ___      __
   / __ )_________  /  |/  /___  / /_____  __________
  / __  / ___/ __ \/ /|_/ / __ \/ __/ __ \/ ___/ ___/
 / /_/ / /  / /_/ / /  / / /_/ / /_/ /_/ / /  (__  )
/_____/_/   \____/_/  /_/\____/\__/\____/_/  /____/
    "#
    );
}

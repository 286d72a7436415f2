//! StayEase Hotel Server - hotel operations backend
//!
//! # Architecture Overview
//!
//! The server exposes booking, pricing and status workflows over a
//! RESTful HTTP API backed by an in-memory store:
//!
//! - **HTTP API** (`api`): per-resource routers and handlers
//! - **Store** (`db`): concurrent in-memory collections, repositories, seed data
//! - **Pricing** (`pricing`): nightly-rate booking totals
//! - **Recommendations** (`recommend`): pluggable room suggestion provider
//!
//! # Module Structure
//!
//! ```text
//! hotel-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # In-memory store, repositories, seed data
//! ├── pricing/       # Booking total calculation
//! ├── recommend/     # Recommendation provider
//! ├── services/      # HTTP service assembly
//! └── utils/         # Logger, time, validation helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod recommend;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use db::HotelDb;
pub use recommend::{RecommendationProvider, StaticRecommendationProvider};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Prepare the process environment: `.env` loading and logging.
///
/// Must run before [`Config::from_env`] so `.env` values are visible.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __              ______
  / ___// /_____ ___  __/ ____/___ _________
  \__ \/ __/ __ `/ / / / __/ / __ `/ ___/ _ \
 ___/ / /_/ /_/ / /_/ / /___/ /_/ (__  )  __/
/____/\__/\__,_/\__, /_____/\__,_/____/\___/
               /____/
    "#
    );
}

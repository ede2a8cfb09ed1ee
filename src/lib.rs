//! Core services for a small administration console: a mock session store,
//! a file-intake validator with image previews, and a user directory with
//! client-side search, filtering and pagination. Everything lives in memory;
//! nothing survives a restart.

use std::sync::LazyLock;

pub mod api;
pub mod configs;
pub mod constants;
pub mod modules;
pub mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::try_init().ok();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

//! Build-time Configuration
//!
//! A WASM bundle has no process environment, so backend settings are baked in
//! when the bundle is compiled.

use goal_store::{BackendConfig, DomainResult};
use log::LevelFilter;

/// Backend connection from `GOAL_LIST_BACKEND_URL` / `GOAL_LIST_BACKEND_ANON_KEY`
pub fn backend_config() -> DomainResult<BackendConfig> {
    BackendConfig::from_parts(
        option_env!("GOAL_LIST_BACKEND_URL"),
        option_env!("GOAL_LIST_BACKEND_ANON_KEY"),
    )
}

/// `GOAL_LIST_LOG` (error|warn|info|debug|trace), default info
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("GOAL_LIST_LOG"))
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.parse().ok()).unwrap_or(LevelFilter::Info)
}

//! 配置管理
//!
//! Configuration is resolved in three layers, later layers winning:
//!
//! 1. built-in defaults,
//! 2. a TOML file (`--config`, or the first of [`DEFAULT_CONFIG_PATHS`] that exists),
//! 3. environment variables prefixed with `EASYTV_`, nested keys separated by `__`
//!    (e.g. `EASYTV_API__BASE_URL`).

pub mod models;

#[cfg(test)]
mod tests;

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/easytv.toml", "easytv.toml"];
pub const ENV_PREFIX: &str = "EASYTV";

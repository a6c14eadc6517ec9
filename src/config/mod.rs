//! 配置管理
//!
//! 配置按 `config.toml` → `config.{APP_ENV}.toml` → `SCHOOLHUB__*` 环境变量的顺序叠加。

mod loader;
mod structs;

pub use structs::*;

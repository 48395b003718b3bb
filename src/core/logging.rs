//! 日志初始化
//!
//! 基于 `tracing_subscriber` 配置全局日志。`RUST_LOG` 环境变量优先，
//! 未设置时回退到 `LoggingConfig::level`。

use crate::config::{LogLevel, LoggingConfig};
use crate::core::error::GalaxyResult;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

impl LogLevel {
    /// 对应的 `EnvFilter` 指令
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()))
}

/// 初始化日志系统
///
/// 返回是否安装了新的全局订阅者。已有订阅者时（例如测试中重复调用）
/// 静默返回 `false`。
pub fn initialize_logging(config: &LoggingConfig) -> GalaxyResult<bool> {
    if config.log_to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file_path)?;
        let installed = tracing_subscriber::fmt()
            .with_env_filter(build_filter(config))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .is_ok();
        return Ok(installed);
    }

    if !config.log_to_console {
        return Ok(false);
    }

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(target: "galaxy", "Logging initialized at level {}", config.level.as_filter());
    }
    Ok(installed)
}

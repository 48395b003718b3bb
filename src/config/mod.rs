/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和启动时验证
use crate::render::galaxy::{ArmPartition, FadeSettings, GalaxyParameters};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod performance;

pub use performance::ParallelConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 星系主配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalaxyConfig {
    /// 不整除点数的处理策略
    #[serde(default)]
    pub arm_partition: ArmPartition,

    /// 帧参数初始值
    #[serde(default)]
    pub galaxy: GalaxyParameters,

    /// 淡出设置
    #[serde(default)]
    pub fade: FadeSettings,

    /// 并行求值配置
    #[serde(default)]
    pub parallel: ParallelConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GalaxyConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// 按键查找覆盖值；无法解析的值保持原配置
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(points) = lookup("GALAXY_TOTAL_POINTS").and_then(|v| v.parse().ok()) {
            self.galaxy.total_points = points;
        }
        if let Some(size) = lookup("GALAXY_POINT_SIZE").and_then(|v| v.parse().ok()) {
            self.galaxy.point_size = size;
        }
        if let Some(radius) = lookup("GALAXY_ATTRACTOR_RADIUS").and_then(|v| v.parse().ok()) {
            self.galaxy.attractor_radius = radius;
        }
        if let Some(height) = lookup("GALAXY_RESOLUTION_HEIGHT").and_then(|v| v.parse().ok()) {
            self.galaxy.resolution.y = height;
        }
        if let Some(threads) = lookup("GALAXY_MAX_THREADS").and_then(|v| v.parse().ok()) {
            self.parallel.max_threads = threads;
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.galaxy
            .validate(self.arm_partition)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        if !self.fade.is_finite() {
            return Err(ConfigError::ValidationError(
                "fade distances must be finite".to_string(),
            ));
        }
        self.parallel.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./galaxy.toml
    /// 2. ./galaxy.json
    /// 3. <用户配置目录>/spiral_galaxy/galaxy.toml
    /// 4. 使用默认配置
    ///
    /// 只有文件不存在时才继续查找；存在但无法读取或解析的文件直接报错。
    pub fn load_or_default() -> ConfigResult<Self> {
        let mut candidates = vec![PathBuf::from("galaxy.toml"), PathBuf::from("galaxy.json")];
        if let Some(config_path) = Self::user_config_path() {
            candidates.push(config_path);
        }
        Self::load_first(&candidates)
    }

    fn load_first(candidates: &[PathBuf]) -> ConfigResult<Self> {
        for path in candidates {
            let loaded = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_file(path),
                _ => Self::from_toml_file(path),
            };
            match loaded {
                Ok(config) => {
                    tracing::info!(target: "galaxy.config", "Loaded config from {:?}", path);
                    return Ok(config);
                }
                Err(ConfigError::FileError(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(ConfigError::ParseError(message)) => {
                    tracing::warn!(target: "galaxy.config", "Malformed config {:?}: {}", path, message);
                    return Err(ConfigError::ParseError(format!(
                        "{}: {}",
                        path.display(),
                        message
                    )));
                }
                Err(e) => {
                    tracing::warn!(target: "galaxy.config", "Cannot read config {:?}: {}", path, e);
                    return Err(e);
                }
            }
        }

        tracing::info!(target: "galaxy.config", "Using default configuration");
        Ok(Self::default())
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spiral_galaxy").join("galaxy.toml"))
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到文件
    pub log_to_file: bool,

    /// 日志文件路径
    pub log_file_path: String,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

use crate::impl_default;

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_file: false,
    log_file_path: "spiral_galaxy.log".to_string(),
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

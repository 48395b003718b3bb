//! 统一错误处理模块
//!
//! 提供星系内核范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **参数层错误** (`ParameterError`): 帧参数不满足内核前置条件（点数、分辨率等）
//! - **配置层错误** (`config::ConfigError`): 配置文件读取、解析与验证
//!
//! `GalaxyError` 可以同时承载两层错误。逐点/逐片元求值本身永不失败，
//! 所有错误都只会在初始化阶段出现。

use crate::config::ConfigError;
use thiserror::Error;

/// 星系内核错误类型
#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid galaxy parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 帧参数错误
///
/// 由 `GalaxyParameters::validate` 产生，在构建内核时暴露给宿主。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("total_points must be positive")]
    NoPoints,

    #[error("total_points {total_points} leaves every arm empty (need at least {arm_count})")]
    EmptyArm { total_points: u32, arm_count: u32 },

    #[error("total_points {total_points} is not divisible by {arm_count}: final arm is ragged by {remainder} points")]
    RaggedArm {
        total_points: u32,
        arm_count: u32,
        remainder: u32,
    },

    #[error("resolution height must be positive and finite, got {0}")]
    InvalidResolution(f32),

    #[error("point_size must be non-negative, got {0}")]
    NegativePointSize(f32),

    #[error("attractor_radius must be non-negative, got {0}")]
    NegativeAttractorRadius(f32),

    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// 内核结果类型别名
pub type GalaxyResult<T> = Result<T, GalaxyError>;
pub type ParameterResult<T> = Result<T, ParameterError>;

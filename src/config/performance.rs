use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 线程数上限，超过视为配置错误
const MAX_WORKER_THREADS: usize = 1024;

/// 并行求值配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// 工作线程数（0 = 由 rayon 按核心数决定）
    pub max_threads: usize,
}

impl_default!(ParallelConfig { max_threads: 0 });

impl ParallelConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_threads > MAX_WORKER_THREADS {
            return Err(ConfigError::ValidationError(format!(
                "max_threads {} exceeds {}",
                self.max_threads, MAX_WORKER_THREADS
            )));
        }
        Ok(())
    }
}

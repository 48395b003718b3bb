//! 整帧求值
//!
//! 用 rayon 的 parallel-for 对全部点索引并行调用内核。每个点只依赖
//! 自己的索引和冻结的帧参数，求值顺序不可观察。

use super::gpu::GpuGalaxyPoint;
use super::kernel::{GalaxyKernel, GalaxyPoint};
use crate::config::ParallelConfig;
use crate::core::error::{GalaxyError, GalaxyResult};
use glam::Mat4;
use rayon::prelude::*;
use std::time::Instant;

/// 帧统计
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GalaxyFrameStats {
    /// 求值点数
    pub evaluated: usize,
    /// 被吸引子推开的点数
    pub displaced: usize,
    /// 视点后方被剔除的点数，不计入大小统计
    pub behind_camera: usize,
    pub min_size: f32,
    pub max_size: f32,
    pub mean_size: f32,
    /// 求值耗时（ms）
    pub evaluation_time_ms: f32,
}

impl GalaxyFrameStats {
    fn from_points(points: &[GalaxyPoint], evaluation_time_ms: f32) -> Self {
        if points.is_empty() {
            return Self {
                evaluation_time_ms,
                ..Default::default()
            };
        }

        let mut min_size = f32::INFINITY;
        let mut max_size = 0.0f32;
        let mut total_size = 0.0f64;
        let mut displaced = 0;
        let mut behind_camera = 0;
        for point in points {
            if point.displaced {
                displaced += 1;
            }
            if point.is_behind_camera() {
                behind_camera += 1;
                continue;
            }
            min_size = min_size.min(point.size);
            max_size = max_size.max(point.size);
            total_size += point.size as f64;
        }

        let visible = points.len() - behind_camera;
        if visible == 0 {
            min_size = 0.0;
        }
        Self {
            evaluated: points.len(),
            displaced,
            behind_camera,
            min_size,
            max_size,
            mean_size: if visible == 0 {
                0.0
            } else {
                (total_size / visible as f64) as f32
            },
            evaluation_time_ms,
        }
    }
}

/// 一帧的求值结果，按索引升序
#[derive(Debug, Clone)]
pub struct GalaxyFrame {
    pub points: Vec<GalaxyPoint>,
    pub stats: GalaxyFrameStats,
}

impl GalaxyFrame {
    /// 顶点缓冲数据
    pub fn gpu_points(&self) -> Vec<GpuGalaxyPoint> {
        self.points.iter().map(GalaxyPoint::to_gpu).collect()
    }
}

impl GalaxyKernel {
    /// 并行求值任意顺序的索引，结果与输入顺序一一对应
    ///
    /// 索引必须小于 `total_points`，越界索引会落在不存在的旋臂上。
    pub fn evaluate_indices(&self, indices: &[u32], model_view: &Mat4) -> Vec<GalaxyPoint> {
        let total_points = self.parameters().total_points;
        debug_assert!(
            indices.iter().all(|&index| index < total_points),
            "point index out of range (total_points = {total_points})"
        );
        indices
            .par_iter()
            .map(|&index| self.evaluate_point(index, model_view))
            .collect()
    }

    /// 并行求值全部点
    pub fn evaluate_frame(&self, model_view: &Mat4) -> GalaxyFrame {
        let start = Instant::now();
        let points: Vec<GalaxyPoint> = (0..self.parameters().total_points)
            .into_par_iter()
            .map(|index| self.evaluate_point(index, model_view))
            .collect();
        let elapsed = start.elapsed().as_secs_f32() * 1000.0;

        let stats = GalaxyFrameStats::from_points(&points, elapsed);
        tracing::trace!(
            target: "galaxy",
            "Evaluated {} points ({} displaced) in {:.3}ms at t={}",
            stats.evaluated,
            stats.displaced,
            stats.evaluation_time_ms,
            self.parameters().time
        );
        GalaxyFrame { points, stats }
    }

    /// 顺序求值全部点，用于对照并行结果
    pub fn evaluate_frame_sequential(&self, model_view: &Mat4) -> Vec<GalaxyPoint> {
        (0..self.parameters().total_points)
            .map(|index| self.evaluate_point(index, model_view))
            .collect()
    }
}

/// 帧调度器
///
/// 持有独立的线程池，避免与宿主的全局 rayon 池争用。
pub struct FrameDispatcher {
    pool: rayon::ThreadPool,
}

impl FrameDispatcher {
    pub fn new(config: &ParallelConfig) -> GalaxyResult<Self> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("galaxy-worker-{i}"));
        if config.max_threads > 0 {
            builder = builder.num_threads(config.max_threads);
        }
        let pool = builder
            .build()
            .map_err(|e| GalaxyError::ThreadPool(e.to_string()))?;

        tracing::debug!(
            target: "galaxy",
            "Frame dispatcher started with {} threads",
            pool.current_num_threads()
        );
        Ok(Self { pool })
    }

    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// 在调度器线程池内求值一帧
    pub fn dispatch(&self, kernel: &GalaxyKernel, model_view: &Mat4) -> GalaxyFrame {
        self.pool.install(|| kernel.evaluate_frame(model_view))
    }
}

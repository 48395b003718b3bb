//! 帧参数
//!
//! 由宿主持有，每帧广播给所有逐点求值，内核只读。

use super::attractor::Attractor;
use super::spiral::{ArmPartition, SpiralLayout, ARM_COUNT};
use crate::core::error::{ParameterError, ParameterResult};
use crate::impl_default;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// 星系帧参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyParameters {
    /// 点总数
    pub total_points: u32,
    /// 基础点大小
    pub point_size: f32,
    /// 基础颜色（透传，布点不使用）
    pub color: Vec3,
    /// 视口尺寸（像素），`y` 用于大小归一化
    pub resolution: Vec2,
    /// 时间（秒）
    pub time: f32,
    /// 吸引子半径
    pub attractor_radius: f32,
    /// 吸引子位置
    pub attractor_position: Vec3,
}

impl_default!(GalaxyParameters {
    total_points: 30_000,
    point_size: 20.0,
    color: Vec3::ONE,
    resolution: Vec2::new(1920.0, 1080.0),
    time: 0.0,
    attractor_radius: 0.15,
    attractor_position: Vec3::ZERO,
});

impl GalaxyParameters {
    pub fn layout(&self) -> SpiralLayout {
        SpiralLayout::new(self.total_points)
    }

    pub fn attractor(&self) -> Attractor {
        Attractor::new(self.attractor_position, self.attractor_radius)
    }

    /// 设置前校验
    pub fn validate(&self, partition: ArmPartition) -> ParameterResult<()> {
        if self.total_points == 0 {
            return Err(ParameterError::NoPoints);
        }
        let layout = self.layout();
        if layout.points_per_arm == 0 {
            return Err(ParameterError::EmptyArm {
                total_points: self.total_points,
                arm_count: ARM_COUNT,
            });
        }
        if partition == ArmPartition::Strict && layout.is_ragged() {
            return Err(ParameterError::RaggedArm {
                total_points: self.total_points,
                arm_count: ARM_COUNT,
                remainder: layout.remainder(),
            });
        }

        if !self.time.is_finite() {
            return Err(ParameterError::NonFinite("time"));
        }
        if !self.color.is_finite() {
            return Err(ParameterError::NonFinite("color"));
        }
        if !self.attractor_position.is_finite() {
            return Err(ParameterError::NonFinite("attractor_position"));
        }
        if !self.resolution.y.is_finite() || self.resolution.y <= 0.0 {
            return Err(ParameterError::InvalidResolution(self.resolution.y));
        }
        if !self.point_size.is_finite() {
            return Err(ParameterError::NonFinite("point_size"));
        }
        if self.point_size < 0.0 {
            return Err(ParameterError::NegativePointSize(self.point_size));
        }
        if !self.attractor_radius.is_finite() {
            return Err(ParameterError::NonFinite("attractor_radius"));
        }
        if self.attractor_radius < 0.0 {
            return Err(ParameterError::NegativeAttractorRadius(self.attractor_radius));
        }
        Ok(())
    }
}

//! 螺旋臂布点
//!
//! 把点索引与时间映射到三条旋臂上的位置（归一化单位圆盘坐标系）。
//! 随时间推进，点沿旋臂向内滑动，每 1 个时间单位循环一次，
//! 视觉上等价于整条旋臂向外旋转。

use super::noise::noise_signed;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// 旋臂数量
pub const ARM_COUNT: u32 = 3;
/// 每条旋臂的圈数
pub const TURNS_PER_ARM: f32 = 1.0;

/// 粗抖动幅度（作用于 `noise_signed`）
const COARSE_JITTER: f32 = 0.4;
/// 角度抖动（度），乘以粗抖动后约 ±4°
const ANGLE_JITTER_DEGREES: f32 = 10.0;
/// 盘面倾斜（度）
const PLANE_TILT_DEGREES: f32 = 5.0;
/// 细抖动的种子偏移，与粗抖动去相关
const FINE_JITTER_SEED_OFFSET: f32 = 22.2;
/// 细抖动幅度
const FINE_JITTER: f32 = 0.02;

/// GLSL `mod`：`x - y * floor(x / y)`，对正的 `y` 结果非负
#[inline]
pub fn glsl_mod(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// 点数不能被旋臂数整除时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmPartition {
    /// 余下的点落在第 4 个“旋臂”上，角度偏移 2π，与 0 号旋臂重合
    #[default]
    Wrap,
    /// 拒绝不整除的点数
    Strict,
}

/// 旋臂划分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralLayout {
    pub total_points: u32,
    pub points_per_arm: u32,
}

impl SpiralLayout {
    pub fn new(total_points: u32) -> Self {
        Self {
            total_points,
            points_per_arm: total_points / ARM_COUNT,
        }
    }

    /// 不整除时多出的点数
    pub fn remainder(&self) -> u32 {
        self.total_points - self.points_per_arm * ARM_COUNT
    }

    pub fn is_ragged(&self) -> bool {
        self.remainder() != 0
    }

    /// 参与浮点运算的每臂点数
    ///
    /// 空旋臂在初始化阶段就会被拒绝；这里钳到 1 只为保证函数全域有定义。
    #[inline]
    fn points_per_arm_f32(&self) -> f32 {
        self.points_per_arm.max(1) as f32
    }

    /// `floor(index / points_per_arm)`
    #[inline]
    pub fn arm_index(&self, index: f32) -> f32 {
        (index / self.points_per_arm_f32()).floor()
    }
}

/// 抖动前的旋臂坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmCoordinate {
    /// 所在旋臂
    pub arm_index: f32,
    /// 随时间滚动后的臂内索引，`[0, points_per_arm]`
    pub local_index: f32,
    /// 半径比例，`[0, 1)`
    pub radius_fraction: f32,
    /// 极角（弧度），含旋臂偏移
    pub angle: f32,
}

/// 布点结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralSample {
    /// 抖动后的局部坐标
    pub position: Vec3,
    /// 粗抖动后的半径比例，供星系淡出使用
    pub radius: f32,
    /// 抖动前坐标
    pub arm: ArmCoordinate,
}

/// 计算抖动前的旋臂坐标
pub fn arm_coordinate(original_index: f32, time: f32, layout: &SpiralLayout) -> ArmCoordinate {
    let points_per_arm = layout.points_per_arm_f32();
    let arm_index = layout.arm_index(original_index);
    let angle_offset = arm_index / ARM_COUNT as f32 * TAU;

    // 时间滚动：减去的项同样以 1 为周期回绕，因此整数时刻处连续
    let time_offset = glsl_mod(time, 1.0);
    let local_index = glsl_mod(
        glsl_mod(original_index, points_per_arm) - time_offset * points_per_arm,
        points_per_arm,
    );

    let radius_fraction = local_index / points_per_arm;
    let angle = radius_fraction * TAU * TURNS_PER_ARM + angle_offset;

    ArmCoordinate {
        arm_index,
        local_index,
        radius_fraction,
        angle,
    }
}

/// 计算点在旋臂上的最终局部位置
pub fn place(original_index: f32, time: f32, layout: &SpiralLayout) -> SpiralSample {
    let arm = arm_coordinate(original_index, time, layout);

    let noise = noise_signed(original_index) * COARSE_JITTER;
    let radius = arm.radius_fraction * (1.0 + noise.x / 2.0);
    let angle = arm.angle + (noise.y * ANGLE_JITTER_DEGREES).to_radians();
    let plane_angle = (noise.z * PLANE_TILT_DEGREES).to_radians();

    let base = Vec3::new(
        angle.cos() * radius,
        angle.sin() * radius,
        plane_angle.sin() * radius,
    );
    let fine = noise_signed(original_index + FINE_JITTER_SEED_OFFSET) * FINE_JITTER;

    SpiralSample {
        position: base + fine,
        radius,
        arm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glsl_mod_negative() {
        assert_eq!(glsl_mod(-25.0, 100.0), 75.0);
        assert_eq!(glsl_mod(250.0, 100.0), 50.0);
        assert_eq!(glsl_mod(2.5, 1.0), 0.5);
    }

    #[test]
    fn test_layout_partition() {
        let layout = SpiralLayout::new(300);
        assert_eq!(layout.points_per_arm, 100);
        assert!(!layout.is_ragged());
        assert_eq!(layout.arm_index(0.0), 0.0);
        assert_eq!(layout.arm_index(99.0), 0.0);
        assert_eq!(layout.arm_index(100.0), 1.0);
        assert_eq!(layout.arm_index(299.0), 2.0);

        let ragged = SpiralLayout::new(302);
        assert_eq!(ragged.points_per_arm, 100);
        assert_eq!(ragged.remainder(), 2);
        assert_eq!(ragged.arm_index(301.0), 3.0);
    }

    #[test]
    fn test_arm_coordinate_at_time_zero() {
        let layout = SpiralLayout::new(300);
        let coord = arm_coordinate(50.0, 0.0, &layout);
        assert_eq!(coord.arm_index, 0.0);
        assert!((coord.radius_fraction - 0.5).abs() < 1e-6);
        assert!((coord.angle - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_arm_offsets() {
        let layout = SpiralLayout::new(300);
        let second = arm_coordinate(100.0, 0.0, &layout);
        assert_eq!(second.arm_index, 1.0);
        assert_eq!(second.radius_fraction, 0.0);
        assert!((second.angle - TAU / 3.0).abs() < 1e-5);

        let third = arm_coordinate(200.0, 0.0, &layout);
        assert!((third.angle - 2.0 * TAU / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_time_slides_points_backward() {
        let layout = SpiralLayout::new(300);
        // 四分之一周期后，臂内索引后退 25
        let coord = arm_coordinate(50.0, 0.25, &layout);
        assert!((coord.local_index - 25.0).abs() < 1e-4);

        // 越过 0 后回绕到臂末端
        let wrapped = arm_coordinate(10.0, 0.25, &layout);
        assert!((wrapped.local_index - 85.0).abs() < 1e-4);
    }

    #[test]
    fn test_time_period_is_one() {
        let layout = SpiralLayout::new(300);
        let a = arm_coordinate(73.0, 0.5, &layout);
        let b = arm_coordinate(73.0, 1.5, &layout);
        let c = arm_coordinate(73.0, 7.5, &layout);
        assert_eq!(a.radius_fraction, b.radius_fraction);
        assert_eq!(a.radius_fraction, c.radius_fraction);
    }

    #[test]
    fn test_place_stays_near_unit_disc() {
        let layout = SpiralLayout::new(3000);
        for i in 0..3000 {
            let sample = place(i as f32, 0.3, &layout);
            // 半径抖动至多 +20%，细抖动每分量至多 0.02
            assert!(sample.position.length() < 1.25, "index {i}: {:?}", sample.position);
            assert!(sample.radius >= 0.0);
        }
    }

    #[test]
    fn test_place_deterministic() {
        let layout = SpiralLayout::new(30_000);
        let a = place(12_345.0, 3.7, &layout);
        let b = place(12_345.0, 3.7, &layout);
        assert_eq!(a.position.to_array().map(f32::to_bits), b.position.to_array().map(f32::to_bits));
    }

    #[test]
    fn test_ragged_tail_overlaps_first_arm() {
        let layout = SpiralLayout::new(301);
        let tail = arm_coordinate(300.0, 0.0, &layout);
        assert_eq!(tail.arm_index, 3.0);
        // 偏移 2π，与 0 号旋臂同向
        assert!((tail.angle.sin()).abs() < 1e-5);
        assert!((tail.angle.cos() - 1.0).abs() < 1e-5);
    }
}

//! 点大小调制
//!
//! 两个独立的逐点随机因子相乘后三次方，得到右偏分布：
//! 多数点很小，少数点很大，近似星等差异。最终大小随视距透视衰减，
//! 并按 1200 像素参考视口高度归一化。

use super::noise::noise_unit;

/// 参考视口高度（像素）
pub const REFERENCE_VIEWPORT_HEIGHT: f32 = 1200.0;
/// 视距下限，防止点与视点重合时除以零
pub const MIN_CAMERA_DISTANCE: f32 = 1.0e-4;

const FIRST_SEED_OFFSET: f32 = 7.0;
const SECOND_SEED_OFFSET: f32 = 9.0;
const BRIGHTNESS_GAIN: f32 = 4.0;
const BRIGHTNESS_FLOOR: f32 = 0.1;

/// 逐点亮度系数，`(0, 4 * 1.1^6)`
#[inline]
pub fn brightness_scale(index: f32) -> f32 {
    let a = noise_unit(index + FIRST_SEED_OFFSET) + BRIGHTNESS_FLOOR;
    let b = noise_unit(index + SECOND_SEED_OFFSET) + BRIGHTNESS_FLOOR;
    BRIGHTNESS_GAIN * a.powi(3) * b.powi(3)
}

/// 钳制后的视距
///
/// `(-ε, ε)` 视为与视点重合，钳制到 `ε`；更靠后的点和 NaN 不可见，返回 `None`。
#[inline]
pub fn clamp_distance(distance: f32) -> Option<f32> {
    if distance > -MIN_CAMERA_DISTANCE {
        Some(distance.max(MIN_CAMERA_DISTANCE))
    } else {
        None
    }
}

/// 屏幕空间点大小，视点后方的点为 0
pub fn point_size(index: f32, base_size: f32, resolution_height: f32, camera_distance: f32) -> f32 {
    let Some(distance) = clamp_distance(camera_distance) else {
        return 0.0;
    };
    let scale = brightness_scale(index);
    base_size * scale * (resolution_height / REFERENCE_VIEWPORT_HEIGHT) / distance
}

//! 哈希噪声
//!
//! 经典的 `fract(sin(dot(seed, k)) * 43758.5453)` 着色器哈希。无内部状态，
//! 每个调用点显式传入带偏移的种子，以此保证不同用途之间去相关。

use glam::{Vec2, Vec3};

/// 哈希方向向量
pub const HASH_DIRECTION: Vec2 = Vec2::new(12.9898, 78.233);
/// 哈希放大系数
pub const HASH_SCALE: f32 = 43758.5453;
/// `noise_unit` 第二个种子分量的偏移
pub const UNIT_SEED_OFFSET: f32 = 5.0;

/// GLSL `fract`，结果严格落在 `[0, 1)`
///
/// `x - floor(x)` 对极小的负数会舍入成 `1.0`，此时按模 1 折回 `0.0`。
#[inline]
pub fn fract(x: f32) -> f32 {
    let f = x - x.floor();
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// 基础哈希，返回 `[0, 1)`
#[inline]
pub fn noise1(seed: Vec2) -> f32 {
    fract(seed.dot(HASH_DIRECTION).sin() * HASH_SCALE)
}

/// 居中到 `[-1, 1)` 的哈希
#[inline]
pub fn noise1_signed(seed: Vec2) -> f32 {
    noise1(seed) * 2.0 - 1.0
}

/// 三个独立的 `[-1, 1)` 分量，种子为 `index`、`index + 1`、`index + 2`
///
/// 用于位置抖动。
#[inline]
pub fn noise_signed(index: f32) -> Vec3 {
    Vec3::new(
        noise1_signed(Vec2::splat(index)),
        noise1_signed(Vec2::splat(index + 1.0)),
        noise1_signed(Vec2::splat(index + 2.0)),
    )
}

/// 单个 `[0, 1)` 值，种子为 `(index, index + 5)`
///
/// 用于点大小调制。
#[inline]
pub fn noise_unit(index: f32) -> f32 {
    noise1_signed(Vec2::new(index, index + UNIT_SEED_OFFSET)) * 0.5 + 0.5
}

//! 吸引子（“黑洞”）扭曲
//!
//! 落入吸引子半径内的点被沿径向推到半径球面上，形成中空效果。
//! 这是风格化近似，不是引力透镜。

use glam::Vec3;

/// 小于该距离视为与中心重合，保持原位以避免除以近零
pub const DEGENERATE_DISTANCE: f32 = 0.001;

/// 点状吸引子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: Vec3,
    pub radius: f32,
}

impl Attractor {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    /// 点是否会被推开
    pub fn influences(&self, point: Vec3) -> bool {
        let distance = point.distance(self.position);
        distance <= self.radius && distance >= DEGENERATE_DISTANCE
    }

    /// 受影响时返回球面上的新位置，否则返回 `None`
    pub fn displace(&self, point: Vec3) -> Option<Vec3> {
        let from_center = point - self.position;
        let distance = from_center.length();
        if distance > self.radius || distance < DEGENERATE_DISTANCE {
            return None;
        }
        Some(self.position + from_center * (self.radius / distance))
    }

    /// 扭曲后的位置
    #[inline]
    pub fn warp(&self, point: Vec3) -> Vec3 {
        self.displace(point).unwrap_or(point)
    }
}

/// 自由函数形式，`c` 为中心，`r` 为半径
#[inline]
pub fn warp(point: Vec3, center: Vec3, radius: f32) -> Vec3 {
    Attractor::new(center, radius).warp(point)
}

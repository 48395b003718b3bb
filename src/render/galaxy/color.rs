//! 颜色与淡出
//!
//! 逐片元：圆形遮罩 → 调色板取色 → 视距淡出（以及默认关闭的星系径向淡出）。
//! 颜色只取决于索引，与时间和位置无关，所以每个点的颜色逐帧稳定。

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// 四色调色板，按 `floor(index) mod 4` 选取
pub const PALETTE: [Vec3; 4] = [
    // 暖金
    Vec3::new(0.96, 0.87, 0.70),
    // 浅蓝
    Vec3::new(0.68, 0.85, 0.90),
    // 粉/品红
    Vec3::new(0.95, 0.75, 0.95),
    // 淡青/薄荷
    Vec3::new(0.70, 0.95, 0.85),
];

/// GLSL `smoothstep`
///
/// 允许 `edge0 > edge1`（反向过渡）。两端重合时退化为阶跃。
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span.abs() <= f32::EPSILON {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / span).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 调色板颜色
#[inline]
pub fn palette_color(index: f32) -> Vec3 {
    let slot = (index.floor() as i64).rem_euclid(PALETTE.len() as i64) as usize;
    PALETTE[slot]
}

/// 光栅化器点坐标 `[0,1]²` 转为精灵局部坐标 `[-1,1]²`
#[inline]
pub fn sprite_coord(point_coord: Vec2) -> Vec2 {
    point_coord * 2.0 - Vec2::ONE
}

/// 圆形遮罩：`|p|² <= 1` 的片元保留
#[inline]
pub fn inside_sprite(sprite_coord: Vec2) -> bool {
    sprite_coord.length_squared() <= 1.0
}

/// 视距淡出模式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CameraFade {
    /// `1 - smoothstep(near, far, distance)`
    Distance { near: f32, far: f32 },
    /// 恒为 1
    Disabled,
}

impl Default for CameraFade {
    fn default() -> Self {
        Self::Distance { near: 1.0, far: 5.0 }
    }
}

impl CameraFade {
    /// 非有限视距按远端处理，淡出为 0
    pub fn factor(&self, distance: f32) -> f32 {
        match *self {
            Self::Distance { .. } if !distance.is_finite() => 0.0,
            Self::Distance { near, far } => 1.0 - smoothstep(near, far, distance),
            Self::Disabled => 1.0,
        }
    }
}

/// 星系径向淡出模式
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GalaxyFade {
    /// 恒为 1
    #[default]
    Disabled,
    /// `smoothstep(outer, inner, radius)`：`inner` 以内不透明，`outer` 以外透明
    Radial { inner: f32, outer: f32 },
}

impl GalaxyFade {
    /// 径向淡出的常用取值
    pub const RADIAL: Self = Self::Radial {
        inner: 0.5,
        outer: 1.0,
    };

    pub fn factor(&self, radius: f32) -> f32 {
        match *self {
            Self::Disabled => 1.0,
            Self::Radial { inner, outer } => smoothstep(outer, inner, radius),
        }
    }
}

/// 淡出设置
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FadeSettings {
    #[serde(default)]
    pub camera: CameraFade,
    #[serde(default)]
    pub galaxy: GalaxyFade,
}

impl FadeSettings {
    /// 片元无关的透明度
    #[inline]
    pub fn alpha(&self, camera_distance: f32, radius: f32) -> f32 {
        self.camera.factor(camera_distance) * self.galaxy.factor(radius)
    }

    pub fn is_finite(&self) -> bool {
        let camera = match self.camera {
            CameraFade::Distance { near, far } => near.is_finite() && far.is_finite(),
            CameraFade::Disabled => true,
        };
        let galaxy = match self.galaxy {
            GalaxyFade::Radial { inner, outer } => inner.is_finite() && outer.is_finite(),
            GalaxyFade::Disabled => true,
        };
        camera && galaxy
    }
}

/// 片元输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentInput {
    /// 精灵局部坐标 `[-1,1]²`
    pub sprite_coord: Vec2,
    pub index: f32,
    pub camera_distance: f32,
    /// 粗抖动后的半径比例
    pub radius: f32,
}

/// 片元着色；被遮罩丢弃时返回 `None`
pub fn shade_fragment(input: &FragmentInput, fade: &FadeSettings) -> Option<Vec4> {
    if !inside_sprite(input.sprite_coord) {
        return None;
    }
    let color = palette_color(input.index);
    Some(color.extend(fade.alpha(input.camera_distance, input.radius)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(sprite_coord: Vec2, index: f32, camera_distance: f32) -> FragmentInput {
        FragmentInput {
            sprite_coord,
            index,
            camera_distance,
            radius: 0.5,
        }
    }

    #[test]
    fn test_smoothstep_shape() {
        assert_eq!(smoothstep(1.0, 5.0, 0.0), 0.0);
        assert_eq!(smoothstep(1.0, 5.0, 1.0), 0.0);
        assert_eq!(smoothstep(1.0, 5.0, 3.0), 0.5);
        assert_eq!(smoothstep(1.0, 5.0, 5.0), 1.0);
        assert_eq!(smoothstep(1.0, 5.0, 9.0), 1.0);
    }

    #[test]
    fn test_smoothstep_reversed_edges() {
        assert_eq!(smoothstep(1.0, 0.5, 0.25), 1.0);
        assert_eq!(smoothstep(1.0, 0.5, 1.5), 0.0);
        assert_eq!(smoothstep(1.0, 0.5, 0.75), 0.5);
    }

    #[test]
    fn test_smoothstep_degenerate_edges() {
        assert_eq!(smoothstep(2.0, 2.0, 1.0), 0.0);
        assert_eq!(smoothstep(2.0, 2.0, 2.0), 1.0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0.0), PALETTE[0]);
        assert_eq!(palette_color(1.0), PALETTE[1]);
        assert_eq!(palette_color(6.0), PALETTE[2]);
        assert_eq!(palette_color(7.9), PALETTE[3]);
        assert_eq!(palette_color(8.0), PALETTE[0]);
    }

    #[test]
    fn test_sprite_mask() {
        assert!(inside_sprite(Vec2::ZERO));
        assert!(inside_sprite(Vec2::new(1.0, 0.0)));
        assert!(!inside_sprite(Vec2::new(0.8, 0.8)));
        assert!(!inside_sprite(Vec2::new(-1.0, -1.0)));
        assert_eq!(sprite_coord(Vec2::new(0.5, 0.5)), Vec2::ZERO);
        assert_eq!(sprite_coord(Vec2::ZERO), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_camera_fade_bounds() {
        let fade = CameraFade::default();
        assert_eq!(fade.factor(0.2), 1.0);
        assert_eq!(fade.factor(1.0), 1.0);
        assert_eq!(fade.factor(3.0), 0.5);
        assert_eq!(fade.factor(5.0), 0.0);
        assert_eq!(fade.factor(50.0), 0.0);
        assert_eq!(CameraFade::Disabled.factor(50.0), 1.0);
    }

    #[test]
    fn test_camera_fade_non_finite_distance() {
        let fade = CameraFade::default();
        assert_eq!(fade.factor(f32::NAN), 0.0);
        assert_eq!(fade.factor(f32::INFINITY), 0.0);
        assert_eq!(FadeSettings::default().alpha(f32::NAN, 0.5), 0.0);
        assert_eq!(CameraFade::Disabled.factor(f32::NAN), 1.0);
    }

    #[test]
    fn test_galaxy_fade_toggle() {
        assert_eq!(GalaxyFade::Disabled.factor(0.9), 1.0);
        assert_eq!(GalaxyFade::RADIAL.factor(0.3), 1.0);
        assert_eq!(GalaxyFade::RADIAL.factor(1.1), 0.0);
    }

    #[test]
    fn test_shade_fragment() {
        let fade = FadeSettings::default();
        let rgba = shade_fragment(&fragment(Vec2::new(0.1, 0.2), 5.0, 3.0), &fade).unwrap();
        assert_eq!(rgba.truncate(), PALETTE[1]);
        assert_eq!(rgba.w, 0.5);

        assert!(shade_fragment(&fragment(Vec2::new(0.9, 0.9), 5.0, 3.0), &fade).is_none());
    }

    #[test]
    fn test_alpha_combines_factors() {
        let fade = FadeSettings {
            camera: CameraFade::default(),
            galaxy: GalaxyFade::RADIAL,
        };
        assert_eq!(fade.alpha(3.0, 0.75), 0.25);
    }
}

//! 星系内核属性测试
//!
//! 使用proptest验证布点、扭曲、大小和淡出的不变量

use super::attractor::Attractor;
use super::color::{palette_color, CameraFade, PALETTE};
use super::noise::{noise1, noise_unit};
use super::size::point_size;
use super::spiral::{arm_coordinate, place, SpiralLayout};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;
use proptest::prelude::*;

fn valid_vec3() -> impl Strategy<Value = Vec3> {
    (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn unit_direction() -> impl Strategy<Value = Vec3> {
    valid_vec3()
        .prop_filter("direction must not vanish", |v| v.length() > 0.01)
        .prop_map(|v| v.normalize())
}

/// 单位区间上的环形距离
fn circular_gap(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

// 噪声
proptest! {
    #[test]
    fn noise1_in_unit_range(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
        let v = noise1(Vec2::new(x, y));
        prop_assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn noise_unit_in_unit_range(index in 0u32..5_000_000) {
        let v = noise_unit(index as f32);
        prop_assert!((0.0..1.0).contains(&v));
    }
}

// 布点
proptest! {
    #[test]
    fn placement_is_deterministic(
        total in 3u32..1_000_000,
        raw_index in 0u32..1_000_000,
        time in 0.0f32..1000.0
    ) {
        let index = (raw_index % total) as f32;
        let layout = SpiralLayout::new(total);
        let a = place(index, time, &layout);
        let b = place(index, time, &layout);
        prop_assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        prop_assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        prop_assert_eq!(a.position.z.to_bits(), b.position.z.to_bits());
    }

    #[test]
    fn placement_has_period_one(
        total in 3u32..100_000,
        raw_index in 0u32..100_000,
        time in 0.0f32..100.0
    ) {
        let index = (raw_index % total) as f32;
        let layout = SpiralLayout::new(total);
        let a = arm_coordinate(index, time, &layout);
        let b = arm_coordinate(index, time + 1.0, &layout);
        prop_assert_eq!(a.arm_index, b.arm_index);
        // 回绕点附近两侧分别接近 0 和 1
        prop_assert!(circular_gap(a.radius_fraction, b.radius_fraction) < 1e-4);
        // 极角按整圈比较，回绕两侧相差 2π
        let turn_gap = circular_gap(a.angle / TAU, b.angle / TAU);
        prop_assert!(turn_gap < 1e-4, "angle {} vs {}", a.angle, b.angle);
    }

    #[test]
    fn radius_fraction_in_unit_range(
        total in 3u32..100_000,
        raw_index in 0u32..100_000,
        time in -100.0f32..100.0
    ) {
        let index = (raw_index % total) as f32;
        let coord = arm_coordinate(index, time, &SpiralLayout::new(total));
        prop_assert!(coord.radius_fraction >= 0.0 && coord.radius_fraction <= 1.0);
    }
}

// 吸引子
proptest! {
    #[test]
    fn warp_outside_radius_is_identity(
        center in valid_vec3(),
        direction in unit_direction(),
        radius in 0.0f32..2.0,
        extra in 0.01f32..5.0
    ) {
        let p = center + direction * (radius + extra);
        prop_assert_eq!(Attractor::new(center, radius).warp(p), p);
    }

    #[test]
    fn warp_inside_radius_lands_on_sphere(
        center in valid_vec3(),
        direction in unit_direction(),
        radius in 0.1f32..2.0,
        fraction in 0.05f32..1.0
    ) {
        let p = center + direction * (radius * fraction);
        let warped = Attractor::new(center, radius).warp(p);
        prop_assert!((warped.distance(center) - radius).abs() < 1e-3);
    }
}

// 大小与颜色
proptest! {
    #[test]
    fn size_is_non_negative(
        index in 0u32..1_000_000,
        base in 0.0f32..100.0,
        height in 0.0f32..4000.0,
        distance in 0.0f32..1000.0
    ) {
        let size = point_size(index as f32, base, height, distance);
        prop_assert!(size.is_finite());
        prop_assert!(size >= 0.0);
    }

    #[test]
    fn palette_depends_only_on_index(index in 0u32..1_000_000) {
        let color = palette_color(index as f32);
        prop_assert_eq!(color, PALETTE[(index % 4) as usize]);
    }

    #[test]
    fn camera_fade_clamped_outside_range(near in 0.0f32..1.0, far in 5.0f32..100.0) {
        let fade = CameraFade::default();
        prop_assert_eq!(fade.factor(near), 1.0);
        prop_assert_eq!(fade.factor(far), 0.0);
    }
}

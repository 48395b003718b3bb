//! 逐点内核
//!
//! 把一帧的只读参数冻结为 `GalaxyKernel`，对任意点索引求值：
//! 布点 → 吸引子扭曲 → 视距 → 大小，外加片元着色。
//! 每次求值都是输入的纯函数，不读写其他点的中间状态。

use super::attractor::Attractor;
use super::color::{palette_color, shade_fragment, FadeSettings, FragmentInput};
use super::gpu::{GalaxyUniforms, GpuGalaxyPoint};
use super::params::GalaxyParameters;
use super::size::{clamp_distance, point_size};
use super::spiral::{place, ArmPartition, SpiralLayout, SpiralSample};
use crate::config::GalaxyConfig;
use crate::core::error::{GalaxyResult, ParameterError, ParameterResult};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// 模型视图空间中的视距：`-(view * p).z`
#[inline]
pub fn camera_distance(model_view: &Mat4, position: Vec3) -> f32 {
    -model_view.transform_point3(position).z
}

/// 布点并扭曲后的点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPoint {
    pub spiral: SpiralSample,
    /// 扭曲后的位置
    pub position: Vec3,
    /// 是否被吸引子推开
    pub displaced: bool,
}

/// 单点求值结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyPoint {
    pub index: u32,
    /// 扭曲后的局部坐标
    pub position: Vec3,
    /// 粗抖动后的半径比例
    pub radius: f32,
    pub camera_distance: f32,
    /// 屏幕空间大小
    pub size: f32,
    pub color: Vec3,
    /// 片元无关透明度
    pub alpha: f32,
    pub displaced: bool,
}

impl GalaxyPoint {
    /// 该点精灵上某个片元的着色输入
    pub fn fragment(&self, sprite_coord: Vec2) -> FragmentInput {
        FragmentInput {
            sprite_coord,
            index: self.index as f32,
            camera_distance: self.camera_distance,
            radius: self.radius,
        }
    }

    /// 位于视点后方（大小为 0，不参与光栅化）
    #[inline]
    pub fn is_behind_camera(&self) -> bool {
        clamp_distance(self.camera_distance).is_none()
    }

    pub fn to_gpu(&self) -> GpuGalaxyPoint {
        GpuGalaxyPoint {
            position: self.position.to_array(),
            size: self.size,
            color: self.color.extend(self.alpha).to_array(),
        }
    }
}

/// 单帧星系内核
#[derive(Debug, Clone)]
pub struct GalaxyKernel {
    params: GalaxyParameters,
    layout: SpiralLayout,
    attractor: Attractor,
    fade: FadeSettings,
}

impl GalaxyKernel {
    /// 校验参数并创建内核
    pub fn new(
        params: GalaxyParameters,
        fade: FadeSettings,
        partition: ArmPartition,
    ) -> GalaxyResult<Self> {
        params.validate(partition)?;
        if !fade.is_finite() {
            return Err(ParameterError::NonFinite("fade").into());
        }

        let layout = params.layout();
        if layout.is_ragged() {
            tracing::warn!(
                target: "galaxy",
                "total_points {} leaves {} points past the last arm; they wrap onto arm 0",
                params.total_points,
                layout.remainder()
            );
        }
        tracing::debug!(
            target: "galaxy",
            "Galaxy kernel ready: {} points, {} per arm",
            params.total_points,
            layout.points_per_arm
        );

        Ok(Self {
            params,
            layout,
            attractor: params.attractor(),
            fade,
        })
    }

    /// 从配置创建
    pub fn from_config(config: &GalaxyConfig) -> GalaxyResult<Self> {
        Self::new(config.galaxy, config.fade, config.arm_partition)
    }

    pub fn parameters(&self) -> &GalaxyParameters {
        &self.params
    }

    pub fn layout(&self) -> &SpiralLayout {
        &self.layout
    }

    pub fn fade(&self) -> &FadeSettings {
        &self.fade
    }

    pub fn uniforms(&self) -> GalaxyUniforms {
        GalaxyUniforms::from(&self.params)
    }

    /// 宿主推进时间
    pub fn set_time(&mut self, time: f32) -> ParameterResult<()> {
        if !time.is_finite() {
            return Err(ParameterError::NonFinite("time"));
        }
        self.params.time = time;
        Ok(())
    }

    /// 宿主移动吸引子
    pub fn set_attractor(&mut self, position: Vec3, radius: f32) -> ParameterResult<()> {
        if !position.is_finite() {
            return Err(ParameterError::NonFinite("attractor_position"));
        }
        if !radius.is_finite() {
            return Err(ParameterError::NonFinite("attractor_radius"));
        }
        if radius < 0.0 {
            return Err(ParameterError::NegativeAttractorRadius(radius));
        }
        self.params.attractor_position = position;
        self.params.attractor_radius = radius;
        self.attractor = self.params.attractor();
        Ok(())
    }

    /// 布点 + 扭曲
    #[inline]
    pub fn place(&self, index: u32) -> PlacedPoint {
        let spiral = place(index as f32, self.params.time, &self.layout);
        match self.attractor.displace(spiral.position) {
            Some(position) => PlacedPoint {
                spiral,
                position,
                displaced: true,
            },
            None => PlacedPoint {
                spiral,
                position: spiral.position,
                displaced: false,
            },
        }
    }

    /// 给定视距的点大小
    #[inline]
    pub fn point_size(&self, index: u32, camera_distance: f32) -> f32 {
        point_size(
            index as f32,
            self.params.point_size,
            self.params.resolution.y,
            camera_distance,
        )
    }

    /// 完整的逐点求值
    pub fn evaluate_point(&self, index: u32, model_view: &Mat4) -> GalaxyPoint {
        let placed = self.place(index);
        let distance = camera_distance(model_view, placed.position);
        GalaxyPoint {
            index,
            position: placed.position,
            radius: placed.spiral.radius,
            camera_distance: distance,
            size: self.point_size(index, distance),
            color: palette_color(index as f32),
            alpha: self.fade.alpha(distance, placed.spiral.radius),
            displaced: placed.displaced,
        }
    }

    /// 片元着色；`sprite_coord` 为 `[-1,1]²` 局部坐标
    #[inline]
    pub fn shade(&self, point: &GalaxyPoint, sprite_coord: Vec2) -> Option<Vec4> {
        shade_fragment(&point.fragment(sprite_coord), &self.fade)
    }
}

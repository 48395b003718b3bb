//! GPU 交互数据结构
//!
//! 宿主上传缓冲区时使用的 `Pod` 布局，以及点精灵的混合状态描述。

use super::params::GalaxyParameters;

/// 星系 Uniform（对应 WGSL struct，16 字节对齐）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GalaxyUniforms {
    /// 视口尺寸
    pub resolution: [f32; 2],
    /// 基础点大小
    pub point_size: f32,
    /// 点总数（着色器里按浮点使用）
    pub total_points: f32,
    /// 基础颜色
    pub color: [f32; 3],
    /// 时间
    pub time: f32,
    /// 吸引子位置
    pub attractor_position: [f32; 3],
    /// 吸引子半径
    pub attractor_radius: f32,
}

impl From<&GalaxyParameters> for GalaxyUniforms {
    fn from(params: &GalaxyParameters) -> Self {
        Self {
            resolution: params.resolution.to_array(),
            point_size: params.point_size,
            total_points: params.total_points as f32,
            color: params.color.to_array(),
            time: params.time,
            attractor_position: params.attractor_position.to_array(),
            attractor_radius: params.attractor_radius,
        }
    }
}

/// 单个点的 CPU 求值结果（顶点缓冲布局）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuGalaxyPoint {
    /// 扭曲后的局部坐标
    pub position: [f32; 3],
    /// 屏幕空间大小
    pub size: f32,
    /// 调色板颜色 + 片元无关透明度
    pub color: [f32; 4],
}

/// 静态逐点索引属性（`a_index`）
pub fn index_attributes(total_points: u32) -> Vec<f32> {
    (0..total_points).map(|i| i as f32).collect()
}

/// 混合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// 颜色叠加，重叠处变亮
    Additive,
    Alpha,
}

/// 点精灵绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointBlendState {
    pub blend: BlendMode,
    pub depth_write: bool,
    pub transparent: bool,
}

/// 星系点：加法混合、不写深度，绘制顺序不影响结果
pub const GALAXY_BLEND_STATE: PointBlendState = PointBlendState {
    blend: BlendMode::Additive,
    depth_write: false,
    transparent: true,
};

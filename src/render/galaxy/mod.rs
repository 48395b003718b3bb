//! 螺旋星系点云内核
//!
//! 按索引确定性地生成动画螺旋星系：点的位置、大小和颜色每帧重新计算，
//! 只依赖点索引、时间和一组只读参数。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Galaxy Kernel                         │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Spiral Placement（逐点）                              │
//! │     - 索引 → 旋臂 / 臂内半径 / 极角                        │
//! │     - 时间滚动，每 1 秒循环                                │
//! │     - 哈希噪声抖动                                        │
//! │                                                          │
//! │  2. Attractor Warp（逐点）                                │
//! │     - 半径内的点推到球面                                   │
//! │                                                          │
//! │  3. Size Modulator（逐点，宿主给出视距）                    │
//! │     - 右偏随机亮度 × 透视衰减                              │
//! │                                                          │
//! │  4. Color / Fade（逐片元）                                │
//! │     - 圆形遮罩、四色调色板、视距淡出                        │
//! │     - 加法混合，不写深度                                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```ignore
//! let kernel = GalaxyKernel::new(params, FadeSettings::default(), ArmPartition::Wrap)?;
//! let frame = kernel.evaluate_frame(&model_view);
//! queue.write_buffer(&point_buffer, 0, bytemuck::cast_slice(&frame.gpu_points()));
//! ```

pub mod attractor;
pub mod color;
pub mod frame;
pub mod gpu;
pub mod kernel;
pub mod noise;
pub mod params;
pub mod size;
pub mod spiral;

#[cfg(test)]
mod property_tests;

pub use attractor::{warp as warp_point, Attractor};
pub use color::{
    palette_color, shade_fragment, smoothstep, CameraFade, FadeSettings, FragmentInput,
    GalaxyFade, PALETTE,
};
pub use frame::{FrameDispatcher, GalaxyFrame, GalaxyFrameStats};
pub use gpu::{
    index_attributes, BlendMode, GalaxyUniforms, GpuGalaxyPoint, PointBlendState,
    GALAXY_BLEND_STATE,
};
pub use kernel::{camera_distance, GalaxyKernel, GalaxyPoint, PlacedPoint};
pub use noise::{noise1, noise_signed, noise_unit};
pub use params::GalaxyParameters;
pub use size::{brightness_scale, point_size, MIN_CAMERA_DISTANCE};
pub use spiral::{arm_coordinate, place, ArmCoordinate, ArmPartition, SpiralLayout, SpiralSample};

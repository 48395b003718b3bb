//! 渲染模块
//!
//! - `galaxy` - 螺旋星系点云内核（布点、吸引子扭曲、点大小、颜色淡出）
//!
//! 投影矩阵、缓冲上传与绘制调用由宿主渲染引擎负责。

pub mod galaxy;

pub use galaxy::{FadeSettings, GalaxyFrame, GalaxyKernel, GalaxyParameters, GalaxyPoint};

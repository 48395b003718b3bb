//! # Spiral Galaxy
//!
//! A deterministic per-point kernel for an animated spiral galaxy point cloud.
//!
//! ## Features
//!
//! - **Spiral Placement**: three arms, one turn each, sliding along the arm with a period of 1s
//! - **Hash Noise**: stateless `fract(sin(dot(..)))` noise with explicit per-call-site seeds
//! - **Attractor Warp**: points inside the attractor radius are pushed onto its sphere
//! - **Size Modulation**: right-skewed per-point brightness with perspective falloff
//! - **Color / Fade**: four-color palette, circular sprite mask, camera-distance fade
//!
//! ## Architecture Design
//!
//! Every point is a pure function of its index and the frame parameters (纯函数内核):
//! - **Parameters**: host-owned, read-only per frame (`GalaxyParameters`)
//! - **Kernel**: validated, frozen frame state with per-point / per-fragment evaluation
//! - **Frame**: data-parallel dispatch over all indices with rayon
//!
//! ### Example
//!
//! ```ignore
//! use spiral_galaxy::config::GalaxyConfig;
//! use spiral_galaxy::render::galaxy::GalaxyKernel;
//!
//! let config = GalaxyConfig::load_or_default()?;
//! let mut kernel = GalaxyKernel::from_config(&config)?;
//! kernel.set_time(elapsed_seconds)?;
//! let frame = kernel.evaluate_frame(&model_view);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Errors, logging, macros
//! - [`config`]: Configuration loading and validation
//! - [`render`]: The galaxy kernel

/// Core infrastructure: errors, logging and shared macros
pub mod core;
/// Configuration system
pub mod config;
/// Galaxy point kernel
pub mod render;

pub use crate::core::error::{GalaxyError, GalaxyResult, ParameterError};

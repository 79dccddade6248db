//! hierdraw renders 2D scenes built by hierarchical modeling with affine transforms.
//!
//! A scene is drawn by ordinary procedures. Each one saves the current transform and paint
//! state, composes its own placement, draws primitives or calls child procedures, and restores
//! what it saved. The call graph is the hierarchy; no scene tree is kept between frames.
//!
//! # Pipeline overview
//!
//! 1. **Map**: [`CoordinateMapper`] turns a world [`ViewWindow`] and a pixel [`Viewport`] into a
//!    root transform and the world size of one pixel.
//! 2. **Draw**: a fresh [`RenderCx`] owns the [`TransformStack`] for the pass; [`SceneNode`]s
//!    push, compose, draw and pop against it.
//! 3. **Rasterize**: a [`DrawSurface`] receives resolved paths. [`CpuSurface`] rasterizes with
//!    `vello_cpu`; [`RecordingSurface`] keeps the calls for inspection.
//!
//! Animation state is a single [`FrameIndex`] advanced by an [`AnimationClock`]; every
//! time-varying parameter is a pure function of it, so any frame can be replayed exactly.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod config;
mod demos;
mod foundation;
mod render;
mod scene;
mod transform;
mod view;

pub use animation::clock::{AnimationClock, AnimationTimer, DEFAULT_TICK_PERIOD, angle_degrees};
pub use config::RenderConfig;
pub use demos::Scene;
pub use demos::hierarchy;
pub use demos::transforms2d::{self, SelectionSource};
pub use foundation::core::{
    Affine, BezPath, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2, Viewport,
};
pub use foundation::error::{HierError, HierResult};
pub use render::FrameRGBA;
pub use render::cpu::CpuSurface;
pub use render::output::{sequence_file_name, write_png};
pub use render::pipeline::{
    RenderOpts, RenderThreading, draw_frame, record_frame, render_frame, render_frames,
    render_frames_to,
};
pub use scene::node::{GraphicsState, RenderCx, SavedCx, SceneNode};
pub use scene::primitives;
pub use scene::surface::{DrawCommand, DrawKind, DrawSurface, RecordingSurface, replay_all};
pub use transform::ops::{TransformOp, compose_all};
pub use transform::stack::{StackGuard, TransformStack};
pub use view::mapper::{CoordinateMapper, ViewMapping, ViewWindow, map_window};

//! The two demo scenes and a single entry point to draw either one.

pub mod hierarchy;
pub mod transforms2d;

use crate::{
    foundation::core::{Affine, FrameIndex, Rgba8, Viewport},
    foundation::error::HierResult,
    scene::node::RenderCx,
    scene::surface::DrawSurface,
    view::mapper::CoordinateMapper,
};

/// A scene the pipeline can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum Scene {
    /// Decagon under preset transform `index`.
    #[serde(rename = "transforms2d")]
    Transforms2D {
        /// Preset, `0..transforms2d::PRESET_COUNT`.
        index: usize,
    },
    /// Animated subroutine hierarchy.
    Hierarchy,
}

impl Scene {
    /// Size the scene was designed for.
    pub fn default_viewport(&self) -> Viewport {
        match self {
            Self::Transforms2D { .. } => transforms2d::VIEWPORT,
            Self::Hierarchy => hierarchy::VIEWPORT,
        }
    }

    /// Background color.
    pub fn background(&self) -> Rgba8 {
        match self {
            Self::Transforms2D { .. } => transforms2d::BACKGROUND,
            Self::Hierarchy => hierarchy::BACKGROUND,
        }
    }

    /// `true` if the output depends on the frame number.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Hierarchy)
    }

    /// Run one render pass onto `surface`, which must already be cleared.
    ///
    /// The pass builds a fresh render context, so nothing carries over between frames; the
    /// transform stack must be balanced when the scene returns.
    #[tracing::instrument(skip(surface), fields(width = surface.viewport().width, height = surface.viewport().height))]
    pub fn draw(&self, surface: &mut dyn DrawSurface, frame: FrameIndex) -> HierResult<()> {
        let viewport = surface.viewport();
        match *self {
            Self::Transforms2D { index } => {
                let mut cx = RenderCx::new(surface, Affine::IDENTITY, 1.0, frame);
                transforms2d::draw(&mut cx, &index)?;
                cx.finish()?;
            }
            Self::Hierarchy => {
                let mapping = CoordinateMapper::new(hierarchy::WORLD)?.map(viewport)?;
                let mut cx = RenderCx::with_mapping(surface, &mapping, frame);
                hierarchy::draw_world(&mut cx)?;
                cx.finish()?;
            }
        }
        Ok(())
    }
}

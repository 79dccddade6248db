use crate::{
    foundation::core::{Affine, BezPath, Rgba8, Viewport},
    foundation::error::{HierError, HierResult},
};

/// Backend seam for drawing. A surface receives fully resolved primitives: the path in local
/// coordinates plus the transform and paint active when the node drew it.
pub trait DrawSurface {
    /// Pixel size of the surface.
    fn viewport(&self) -> Viewport;

    /// Fill the whole surface with `color`, ignoring any transform.
    fn clear(&mut self, color: Rgba8) -> HierResult<()>;

    /// Fill `path` (non-zero winding) under `transform`.
    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8) -> HierResult<()>;

    /// Stroke `path` under `transform`. `width` is in the path's local units.
    fn stroke_path(
        &mut self,
        path: &BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    ) -> HierResult<()>;
}

/// Kind of a recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawKind {
    /// Surface clear.
    Clear,
    /// Path fill.
    Fill,
    /// Path stroke with a local-unit width.
    Stroke {
        /// Stroke width in local units.
        width: f64,
    },
}

/// One draw call as seen by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawCommand {
    /// What was drawn.
    #[serde(flatten)]
    pub kind: DrawKind,
    /// Active transform coefficients `[a, b, c, d, e, f]`.
    pub transform: [f64; 6],
    /// Paint.
    pub color: Rgba8,
    /// Path in SVG syntax, local coordinates. Empty for clears.
    pub path: String,
}

impl DrawCommand {
    /// Transform as an [`Affine`].
    pub fn affine(&self) -> Affine {
        Affine::new(self.transform)
    }

    /// Issue this call again on `surface`.
    pub fn replay(&self, surface: &mut dyn DrawSurface) -> HierResult<()> {
        match self.kind {
            DrawKind::Clear => surface.clear(self.color),
            DrawKind::Fill => surface.fill_path(&self.bez_path()?, self.affine(), self.color),
            DrawKind::Stroke { width } => {
                surface.stroke_path(&self.bez_path()?, self.affine(), self.color, width)
            }
        }
    }

    fn bez_path(&self) -> HierResult<BezPath> {
        BezPath::from_svg(&self.path)
            .map_err(|e| HierError::serde(format!("recorded path '{}': {e}", self.path)))
    }
}

/// Replay `commands` in order onto `surface`.
pub fn replay_all(commands: &[DrawCommand], surface: &mut dyn DrawSurface) -> HierResult<()> {
    commands.iter().try_for_each(|c| c.replay(surface))
}

/// Surface that records every call instead of rasterizing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recording for a surface of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: Rgba8) -> HierResult<()> {
        self.commands.push(DrawCommand {
            kind: DrawKind::Clear,
            transform: Affine::IDENTITY.as_coeffs(),
            color,
            path: String::new(),
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8) -> HierResult<()> {
        self.commands.push(DrawCommand {
            kind: DrawKind::Fill,
            transform: transform.as_coeffs(),
            color,
            path: path.to_svg(),
        });
        Ok(())
    }

    fn stroke_path(
        &mut self,
        path: &BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    ) -> HierResult<()> {
        self.commands.push(DrawCommand {
            kind: DrawKind::Stroke { width },
            transform: transform.as_coeffs(),
            color,
            path: path.to_svg(),
        });
        Ok(())
    }
}

use crate::{
    foundation::core::{Affine, BezPath, FrameIndex, Point, Rgba8, Viewport},
    foundation::error::HierResult,
    scene::primitives,
    scene::surface::DrawSurface,
    transform::ops::TransformOp,
    transform::stack::TransformStack,
    view::mapper::ViewMapping,
};

/// Paint state saved and restored alongside the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsState {
    /// Paint for fills and strokes.
    pub color: Rgba8,
    /// Stroke width in the local units active when a stroke is issued.
    pub stroke_width: f64,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Working state of a single render pass.
///
/// A pass owns its transform stack and paint state; nothing is shared between passes. Nodes
/// save with [`RenderCx::save`], compose their placement, draw or call children, and let the
/// guard restore everything on the way out.
pub struct RenderCx<'s> {
    stack: TransformStack,
    surface: &'s mut dyn DrawSurface,
    frame: FrameIndex,
    pixel_size: f64,
    state: GraphicsState,
    saved_states: Vec<GraphicsState>,
}

impl<'s> RenderCx<'s> {
    /// Begin a pass with `root` as the outermost transform.
    pub fn new(
        surface: &'s mut dyn DrawSurface,
        root: Affine,
        pixel_size: f64,
        frame: FrameIndex,
    ) -> Self {
        Self {
            stack: TransformStack::new(root),
            surface,
            frame,
            pixel_size,
            state: GraphicsState::default(),
            saved_states: Vec::new(),
        }
    }

    /// Begin a pass under a world mapping; the default stroke is exactly one device pixel.
    pub fn with_mapping(
        surface: &'s mut dyn DrawSurface,
        mapping: &ViewMapping,
        frame: FrameIndex,
    ) -> Self {
        let mut cx = Self::new(surface, mapping.transform, mapping.pixel_size, frame);
        cx.state.stroke_width = mapping.pixel_size;
        cx
    }

    /// Frame being rendered.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// World size of one device pixel at the root of this pass.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Pixel size of the target surface.
    pub fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    /// Active transform.
    pub fn transform(&self) -> Affine {
        self.stack.current()
    }

    /// Saved snapshot count.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Active paint state.
    pub fn state(&self) -> GraphicsState {
        self.state
    }

    /// Active color.
    pub fn color(&self) -> Rgba8 {
        self.state.color
    }

    /// Set the color for subsequent draws.
    pub fn set_color(&mut self, color: Rgba8) {
        self.state.color = color;
    }

    /// Active stroke width, in local units.
    pub fn stroke_width(&self) -> f64 {
        self.state.stroke_width
    }

    /// Set the stroke width for subsequent strokes, in local units.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.state.stroke_width = width;
    }

    /// Compose an op onto the active transform.
    pub fn compose(&mut self, op: TransformOp) {
        self.stack.compose(op);
    }

    /// Compose a translation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.stack.translate(dx, dy);
    }

    /// Compose a scale.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.stack.scale(sx, sy);
    }

    /// Compose a rotation in radians.
    pub fn rotate(&mut self, radians: f64) {
        self.stack.rotate(radians);
    }

    /// Compose a shear.
    pub fn shear(&mut self, shx: f64, shy: f64) {
        self.stack.shear(shx, shy);
    }

    /// Save transform and paint state; both come back when the guard drops.
    pub fn save(&mut self) -> SavedCx<'_, 's> {
        let base = self.stack.depth();
        self.stack.push();
        self.saved_states.push(self.state);
        SavedCx { cx: self, base }
    }

    /// Render a child node under the current state.
    pub fn draw(&mut self, node: &dyn SceneNode) -> HierResult<()> {
        node.render(self)
    }

    /// Fill `path` with the active color and transform.
    pub fn fill(&mut self, path: &BezPath) -> HierResult<()> {
        self.surface
            .fill_path(path, self.stack.current(), self.state.color)
    }

    /// Stroke `path` with the active color, width and transform.
    pub fn stroke(&mut self, path: &BezPath) -> HierResult<()> {
        self.surface.stroke_path(
            path,
            self.stack.current(),
            self.state.color,
            self.state.stroke_width,
        )
    }

    /// Stroke a segment between two local points.
    pub fn stroke_line(&mut self, a: Point, b: Point) -> HierResult<()> {
        self.stroke(&primitives::segment(a, b))
    }

    /// Fill a closed polygon.
    pub fn fill_polygon(&mut self, points: &[Point]) -> HierResult<()> {
        self.fill(&primitives::polygon(points))
    }

    /// Stroke the outline of a closed polygon.
    pub fn stroke_polygon(&mut self, points: &[Point]) -> HierResult<()> {
        self.stroke(&primitives::polygon(points))
    }

    /// End the pass, checking every save was released.
    pub fn finish(self) -> HierResult<Affine> {
        self.stack.finish()
    }
}

/// Guard returned by [`RenderCx::save`].
pub struct SavedCx<'a, 's> {
    cx: &'a mut RenderCx<'s>,
    base: usize,
}

impl<'s> std::ops::Deref for SavedCx<'_, 's> {
    type Target = RenderCx<'s>;

    fn deref(&self) -> &Self::Target {
        self.cx
    }
}

impl<'s> std::ops::DerefMut for SavedCx<'_, 's> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cx
    }
}

impl Drop for SavedCx<'_, '_> {
    fn drop(&mut self) {
        self.cx.stack.unwind_to(self.base);
        self.cx.saved_states.truncate(self.base + 1);
        if let Some(state) = self.cx.saved_states.pop() {
            self.cx.state = state;
        }
    }
}

/// A drawable procedure.
///
/// There is no scene tree: a node's children are whatever nodes its `render` calls between
/// save and restore.
pub trait SceneNode {
    /// Draw into `cx`, leaving its transform and paint state as found.
    fn render(&self, cx: &mut RenderCx<'_>) -> HierResult<()>;
}

impl<F> SceneNode for F
where
    F: Fn(&mut RenderCx<'_>) -> HierResult<()>,
{
    fn render(&self, cx: &mut RenderCx<'_>) -> HierResult<()> {
        self(cx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;

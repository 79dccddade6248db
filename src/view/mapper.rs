use crate::{
    foundation::core::{Affine, Point, Vec2, Viewport},
    foundation::error::{HierError, HierResult},
};

/// Logical rectangle a scene wants visible.
///
/// `y_bottom < y_top` is allowed and flips the y axis so world y points up.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewWindow {
    /// World x at the left edge.
    pub x_left: f64,
    /// World x at the right edge.
    pub x_right: f64,
    /// World y at the top edge.
    pub y_top: f64,
    /// World y at the bottom edge.
    pub y_bottom: f64,
    /// Expand one axis so world units are square on screen.
    pub preserve_aspect: bool,
}

impl ViewWindow {
    /// Build a window from its four limits.
    pub fn new(x_left: f64, x_right: f64, y_top: f64, y_bottom: f64, preserve_aspect: bool) -> Self {
        Self {
            x_left,
            x_right,
            y_top,
            y_bottom,
            preserve_aspect,
        }
    }

    /// Signed world width (`x_right - x_left`).
    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }

    /// Signed world height (`y_bottom - y_top`); negative for a y-up window.
    pub fn height(&self) -> f64 {
        self.y_bottom - self.y_top
    }

    /// Limits must be finite and span a non-empty area.
    pub fn validate(&self) -> HierResult<()> {
        let limits = [self.x_left, self.x_right, self.y_top, self.y_bottom];
        if limits.iter().any(|v| !v.is_finite()) {
            return Err(HierError::validation(format!(
                "view window limits must be finite, got {limits:?}"
            )));
        }
        if self.x_left == self.x_right {
            return Err(HierError::validation(
                "view window x_left must differ from x_right",
            ));
        }
        if self.y_top == self.y_bottom {
            return Err(HierError::validation(
                "view window y_top must differ from y_bottom",
            ));
        }
        Ok(())
    }
}

/// Result of mapping a [`ViewWindow`] onto a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewMapping {
    /// World-to-pixel root transform.
    pub transform: Affine,
    /// Horizontal pixels per world unit.
    pub sx: f64,
    /// Vertical pixels per world unit; negative for a y-up window.
    pub sy: f64,
    /// World size of one device pixel; the default stroke width.
    pub pixel_size: f64,
    /// Limits after aspect adjustment.
    pub limits: ViewWindow,
}

impl ViewMapping {
    /// Pixel-to-world transform.
    pub fn inverse(&self) -> Affine {
        self.transform.inverse()
    }

    /// Map a world point to pixel coordinates.
    pub fn world_to_pixel(&self, p: Point) -> Point {
        self.transform * p
    }

    /// Map a pixel coordinate back into the world.
    pub fn pixel_to_world(&self, p: Point) -> Point {
        self.inverse() * p
    }
}

/// Produces the root transform for a fixed [`ViewWindow`] at whatever size the viewport is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    window: ViewWindow,
}

impl CoordinateMapper {
    /// Mapper for `window`; the window is validated up front.
    pub fn new(window: ViewWindow) -> HierResult<Self> {
        window.validate()?;
        Ok(Self { window })
    }

    /// The requested (unadjusted) window.
    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    /// Map onto `viewport`. Call once per pass, since the viewport may have been resized.
    pub fn map(&self, viewport: Viewport) -> HierResult<ViewMapping> {
        map_window(&self.window, viewport)
    }
}

/// Map `window` onto `viewport`.
///
/// With `preserve_aspect`, the narrower world axis grows evenly on both sides until the world
/// aspect equals the viewport aspect. The root transform is `Scale(sx, sy) * Translate(-x_left,
/// -y_top)`, so `(x_left, y_top)` lands on pixel `(0, 0)`.
pub fn map_window(window: &ViewWindow, viewport: Viewport) -> HierResult<ViewMapping> {
    window.validate()?;
    viewport.validate()?;

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let mut w = *window;

    if w.preserve_aspect {
        let display_aspect = (height / width).abs();
        let requested_aspect = (w.height() / w.width()).abs();
        if display_aspect > requested_aspect {
            let excess = w.height() * (display_aspect / requested_aspect - 1.0);
            w.y_bottom += excess / 2.0;
            w.y_top -= excess / 2.0;
        } else if display_aspect < requested_aspect {
            let excess = w.width() * (requested_aspect / display_aspect - 1.0);
            w.x_right += excess / 2.0;
            w.x_left -= excess / 2.0;
        }
    }

    let sx = width / w.width();
    let sy = height / w.height();
    let pixel_width = (w.width() / width).abs();
    let pixel_height = (w.height() / height).abs();
    let pixel_size = pixel_width.min(pixel_height);

    let transform =
        Affine::scale_non_uniform(sx, sy) * Affine::translate(Vec2::new(-w.x_left, -w.y_top));

    tracing::debug!(
        sx,
        sy,
        pixel_size,
        x_left = w.x_left,
        x_right = w.x_right,
        y_top = w.y_top,
        y_bottom = w.y_bottom,
        "mapped view window"
    );

    Ok(ViewMapping {
        transform,
        sx,
        sy,
        pixel_size,
        limits: w,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/view/mapper.rs"]
mod tests;

use crate::foundation::error::{HierError, HierResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Animation frame number. Frame 0 is the first frame drawn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open range of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> HierResult<Self> {
        if start.0 > end.0 {
            return Err(HierError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate the frames of the range in order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

impl std::str::FromStr for FrameRange {
    type Err = HierError;

    /// Parses `A..B` (exclusive end) or a single frame `A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<u64>()
                .map_err(|e| HierError::validation(format!("invalid frame number '{v}': {e}")))
        };
        match s.split_once("..") {
            Some((a, b)) => Self::new(FrameIndex(parse(a)?), FrameIndex(parse(b)?)),
            None => {
                let f = parse(s)?;
                Self::new(FrameIndex(f), FrameIndex(f.saturating_add(1)))
            }
        }
    }
}

/// Pixel dimensions of a drawing area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Largest side the CPU raster can allocate.
    pub const MAX_SIDE: u32 = u16::MAX as u32;

    /// Build a viewport, checking it is at least 1x1 and fits the raster.
    pub fn new(width: u32, height: u32) -> HierResult<Self> {
        let v = Self { width, height };
        v.validate()?;
        Ok(v)
    }

    /// Re-check the invariants of a viewport built by struct literal or deserialization.
    pub fn validate(&self) -> HierResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HierError::validation(format!(
                "viewport must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_SIDE || self.height > Self::MAX_SIDE {
            return Err(HierError::validation(format!(
                "viewport {}x{} exceeds {} pixels per side",
                self.width,
                self.height,
                Self::MAX_SIDE
            )));
        }
        Ok(())
    }

    /// Pixel-space center.
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Whole viewport as a pixel-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl std::str::FromStr for Viewport {
    type Err = HierError;

    /// Parses `WxH`, or a single `N` meaning `NxN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| HierError::validation(format!("invalid viewport side '{v}': {e}")))
        };
        match s.split_once(['x', 'X']) {
            Some((w, h)) => Self::new(parse(w)?, parse(h)?),
            None => {
                let n = parse(s)?;
                Self::new(n, n)
            }
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Thistle, the Transforms2D fill.
    pub const THISTLE: Self = Self::rgb(216, 191, 216);
    /// Deep magenta used for one hierarchy triangle.
    pub const MAGENTA: Self = Self::rgb(200, 21, 132);
    /// Half-intensity green.
    pub const GREEN: Self = Self::rgb(0, 128, 0);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply the color channels by alpha.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

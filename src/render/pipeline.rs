use rayon::prelude::*;

use crate::{
    config::RenderConfig,
    demos::Scene,
    foundation::core::{FrameIndex, FrameRange, Rgba8, Viewport},
    foundation::error::{HierError, HierResult},
    render::FrameRGBA,
    render::cpu::CpuSurface,
    scene::surface::{DrawCommand, DrawSurface, RecordingSurface},
};

/// Per-render surface settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOpts {
    /// Output size.
    pub viewport: Viewport,
    /// Clear color painted before the scene.
    pub background: Rgba8,
}

impl RenderOpts {
    /// The scene's own defaults.
    pub fn for_scene(scene: &Scene) -> Self {
        Self {
            viewport: scene.default_viewport(),
            background: scene.background(),
        }
    }

    /// Scene defaults with any overrides from `config` applied.
    pub fn from_config(scene: &Scene, config: &RenderConfig) -> Self {
        let defaults = Self::for_scene(scene);
        Self {
            viewport: config.viewport.unwrap_or(defaults.viewport),
            background: config.background.unwrap_or(defaults.background),
        }
    }
}

/// Threading controls for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render frames on a worker pool when `true`.
    pub parallel: bool,
    /// Frames rendered per batch before they are handed to the sink. `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Render a scene that does not depend on the frame number once and reuse the pixels.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Clear and draw one frame into any surface.
pub fn draw_frame(
    scene: &Scene,
    frame: FrameIndex,
    background: Rgba8,
    surface: &mut dyn DrawSurface,
) -> HierResult<()> {
    surface.clear(background)?;
    scene.draw(surface, frame)
}

/// Render one frame to pixels.
pub fn render_frame(scene: &Scene, frame: FrameIndex, opts: &RenderOpts) -> HierResult<FrameRGBA> {
    let mut surface = CpuSurface::new(opts.viewport)?;
    draw_frame(scene, frame, opts.background, &mut surface)?;
    Ok(surface.into_frame())
}

/// Record the draw calls of one frame instead of rasterizing it.
pub fn record_frame(
    scene: &Scene,
    frame: FrameIndex,
    opts: &RenderOpts,
) -> HierResult<Vec<DrawCommand>> {
    opts.viewport.validate()?;
    let mut surface = RecordingSurface::new(opts.viewport);
    draw_frame(scene, frame, opts.background, &mut surface)?;
    Ok(surface.into_commands())
}

/// Render every frame of `range`, returned in frame order.
///
/// Holds every frame in memory; use [`render_frames_to`] for long ranges.
pub fn render_frames(
    scene: &Scene,
    range: FrameRange,
    opts: &RenderOpts,
    threading: &RenderThreading,
) -> HierResult<Vec<FrameRGBA>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    render_frames_to(scene, range, opts, threading, |_, frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok(out)
}

/// Render `range` chunk by chunk, handing each frame to `sink` in frame order.
///
/// At most one chunk of frames is alive at a time. Each frame depends only on its index, so
/// the parallel path gives every worker its own surface and shares nothing between frames.
/// Returns the number of frames delivered.
#[tracing::instrument(
    skip(opts, threading, sink),
    fields(frames = range.len_frames(), parallel = threading.parallel, chunk_size = threading.chunk_size)
)]
pub fn render_frames_to<F>(
    scene: &Scene,
    range: FrameRange,
    opts: &RenderOpts,
    threading: &RenderThreading,
    mut sink: F,
) -> HierResult<u64>
where
    F: FnMut(FrameIndex, FrameRGBA) -> HierResult<()>,
{
    if range.is_empty() {
        return Ok(0);
    }

    if threading.static_frame_elision && !scene.is_animated() {
        let frame = render_frame(scene, range.start, opts)?;
        tracing::debug!(elided = range.len_frames() - 1, "static scene rendered once");
        for f in range.iter() {
            sink(f, frame.clone())?;
        }
        return Ok(range.len_frames());
    }

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let mut delivered = 0u64;
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))?;

        let frames = match &pool {
            Some(pool) => {
                let indices: Vec<FrameIndex> = chunk.iter().collect();
                pool.install(|| {
                    indices
                        .par_iter()
                        .map(|&f| render_frame(scene, f, opts))
                        .collect::<HierResult<Vec<_>>>()
                })?
            }
            None => chunk
                .iter()
                .map(|f| render_frame(scene, f, opts))
                .collect::<HierResult<Vec<_>>>()?,
        };

        for (f, frame) in chunk.iter().zip(frames) {
            sink(f, frame)?;
            delivered += 1;
        }
        tracing::trace!(start = chunk_start, end = chunk_end, "chunk delivered");
        chunk_start = chunk_end;
    }

    Ok(delivered)
}

fn build_thread_pool(threads: Option<usize>) -> HierResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(HierError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| HierError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

//! JSON render configuration.

use std::{path::Path, time::Duration};

use crate::{
    animation::clock::{AnimationTimer, DEFAULT_TICK_PERIOD},
    foundation::core::{Rgba8, Viewport},
    foundation::error::{HierError, HierResult},
    render::pipeline::RenderThreading,
};

/// Overrides applied on top of each scene's defaults.
///
/// Every field is optional in JSON; unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output size override.
    pub viewport: Option<Viewport>,
    /// Background color override.
    pub background: Option<Rgba8>,
    /// Animation tick period in milliseconds.
    pub timer_period_ms: u64,
    /// Render frame batches on a worker pool.
    pub parallel: bool,
    /// Worker count for batch rendering.
    pub threads: Option<usize>,
    /// Frames per batch; bounds how many frames are held in memory at once.
    pub chunk_size: usize,
    /// Render frame-independent scenes once per batch run.
    pub static_frame_elision: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: None,
            background: None,
            timer_period_ms: DEFAULT_TICK_PERIOD.as_millis() as u64,
            parallel: false,
            threads: None,
            chunk_size: RenderThreading::default().chunk_size,
            static_frame_elision: false,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> HierResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HierError::serde(format!("parse render config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> HierResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            HierError::validation(format!("read render config '{}': {e}", path.display()))
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> HierResult<()> {
        if let Some(v) = &self.viewport {
            v.validate()?;
        }
        if self.timer_period_ms == 0 {
            return Err(HierError::validation("timer_period_ms must be > 0"));
        }
        if self.chunk_size == 0 {
            return Err(HierError::validation("chunk_size must be >= 1"));
        }
        if self.threads == Some(0) {
            return Err(HierError::validation("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// Stopped timer with the configured period.
    pub fn timer(&self) -> HierResult<AnimationTimer> {
        AnimationTimer::new(Duration::from_millis(self.timer_period_ms))
    }

    /// Batch threading settings.
    pub fn threading(&self) -> RenderThreading {
        RenderThreading {
            parallel: self.parallel,
            chunk_size: self.chunk_size,
            threads: self.threads,
            static_frame_elision: self.static_frame_elision,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;

use std::time::Duration;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{HierError, HierResult},
};

/// Default tick period, about 60 frames per second.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(17);

/// Monotonic frame counter. Everything time-varying in a scene is a pure function of
/// [`AnimationClock::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationClock {
    frame: FrameIndex,
}

impl AnimationClock {
    /// Clock at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock positioned at `frame`, for replaying a specific frame.
    pub fn at(frame: FrameIndex) -> Self {
        Self { frame }
    }

    /// Current frame.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Advance by one frame and return the new frame.
    pub fn tick(&mut self) -> FrameIndex {
        self.tick_by(1)
    }

    /// Advance by `n` frames at once, saturating at `u64::MAX`.
    pub fn tick_by(&mut self, n: u64) -> FrameIndex {
        self.frame = FrameIndex(self.frame.0.saturating_add(n));
        tracing::trace!(frame = self.frame.0, ticks = n, "clock tick");
        self.frame
    }
}

/// Angle after `frame` frames at `degrees_per_frame`.
///
/// Computed from the frame number alone, so the same frame always yields the same angle.
pub fn angle_degrees(frame: FrameIndex, degrees_per_frame: f64) -> f64 {
    frame.0 as f64 * degrees_per_frame
}

/// The external periodic trigger, modelled without a wall clock.
///
/// Callers feed elapsed time in through [`AnimationTimer::advance`]; every full period that
/// elapses while running fires one tick on the owned clock. Time that passes while stopped is
/// dropped, matching a UI timer that is simply not scheduled.
#[derive(Clone, Debug)]
pub struct AnimationTimer {
    period: Duration,
    running: bool,
    pending: Duration,
    clock: AnimationClock,
}

impl Default for AnimationTimer {
    fn default() -> Self {
        Self {
            period: DEFAULT_TICK_PERIOD,
            running: false,
            pending: Duration::ZERO,
            clock: AnimationClock::new(),
        }
    }
}

impl AnimationTimer {
    /// Stopped timer with the given period.
    pub fn new(period: Duration) -> HierResult<Self> {
        if period.is_zero() {
            return Err(HierError::validation("timer period must be > 0"));
        }
        Ok(Self {
            period,
            ..Self::default()
        })
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether ticks are currently delivered.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or stop the timer. Stopping drops any partial period.
    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            tracing::debug!(running, frame = self.clock.frame().0, "animation toggled");
        }
        self.running = running;
        if !running {
            self.pending = Duration::ZERO;
        }
    }

    /// Feed `elapsed` time; returns how many ticks fired.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if !self.running {
            return 0;
        }
        let pending = self.pending.saturating_add(elapsed);
        let period = self.period.as_nanos();
        let fired = pending.as_nanos() / period;
        let rest = pending.as_nanos() % period;
        // rest < period, so both parts fit back into a Duration.
        self.pending = Duration::new(
            (rest / 1_000_000_000) as u64,
            (rest % 1_000_000_000) as u32,
        );

        let fired = u64::try_from(fired).unwrap_or(u64::MAX);
        if fired > 0 {
            self.clock.tick_by(fired);
        }
        fired
    }

    /// The clock this timer drives.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Current frame of the driven clock.
    pub fn frame(&self) -> FrameIndex {
        self.clock.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;

//! Spring-back animator
//!
//! Returns an overscroll offset to rest over a fixed duration. The animator is
//! a plain state transition function: [`SpringBack::tick`] maps an animated
//! fraction to an offset, and [`SpringBack::advance`] turns elapsed frame time
//! into that fraction. Nothing here sleeps or owns a timer, so any scheduler
//! (frame callback, timer, test loop) can drive it.

use crate::easing::Easing;

/// Default spring-back duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 500;

/// Animator FSM state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Running,
}

/// Fixed-duration, eased return of a scroll offset to zero
#[derive(Debug, Clone)]
pub struct SpringBack {
    duration_ms: u32,
    easing: Easing,
    state: AnimatorState,
    /// Offset captured when the animation started
    from_offset: i32,
    /// Offset produced by the most recent step
    offset: i32,
    elapsed_ms: f32,
}

impl SpringBack {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            easing,
            state: AnimatorState::Idle,
            from_offset: 0,
            offset: 0,
            elapsed_ms: 0.0,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    pub fn from_offset(&self) -> i32 {
        self.from_offset
    }

    /// Offset produced by the most recent step
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Linear progress through the duration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms / self.duration_ms as f32).min(1.0)
    }

    /// Change duration and easing for the next run.
    ///
    /// A running animation keeps its timing: the change is refused and
    /// `false` is returned.
    pub fn set_timing(&mut self, duration_ms: u32, easing: Easing) -> bool {
        if self.is_running() {
            return false;
        }
        self.duration_ms = duration_ms.max(1);
        self.easing = easing;
        true
    }

    /// Enter Running from `from_offset`.
    ///
    /// The animation cannot be interrupted: starting while already running is
    /// ignored and returns `false`.
    pub fn start(&mut self, from_offset: i32) -> bool {
        if self.is_running() {
            tracing::debug!("spring-back already running, ignoring start");
            return false;
        }

        self.state = AnimatorState::Running;
        self.from_offset = from_offset;
        self.offset = from_offset;
        self.elapsed_ms = 0.0;
        tracing::debug!(
            from_offset,
            duration_ms = self.duration_ms,
            "spring-back started"
        );
        true
    }

    /// Apply an animated fraction and return the new offset.
    ///
    /// `offset = from - round(from * fraction)`. A fraction of 1.0 or more is
    /// terminal: the offset is forced to exactly zero and the animator goes
    /// back to Idle. Ticking an idle animator returns the last offset.
    pub fn tick(&mut self, fraction: f32) -> i32 {
        if !self.is_running() {
            return self.offset;
        }

        if fraction >= 1.0 {
            self.offset = 0;
            self.state = AnimatorState::Idle;
            tracing::debug!(from_offset = self.from_offset, "spring-back finished");
            return self.offset;
        }

        let fraction = fraction.max(0.0);
        let from = self.from_offset;
        self.offset = from - (from as f32 * fraction).round() as i32;
        tracing::trace!(fraction, offset = self.offset, "spring-back tick");
        self.offset
    }

    /// Advance the animation clock by `dt_ms` and return the new offset.
    pub fn advance(&mut self, dt_ms: f32) -> i32 {
        if !self.is_running() {
            return self.offset;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let progress = self.progress();
        let fraction = if progress >= 1.0 {
            1.0
        } else {
            self.easing.apply(progress)
        };
        self.tick(fraction)
    }
}

impl Default for SpringBack {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::default())
    }
}

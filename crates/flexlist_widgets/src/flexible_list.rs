//! Elastic overscroll controller
//!
//! [`FlexibleList`] wraps a host list (any [`ListControl`]) and adds
//! pull-to-refresh / pull-to-load-more on top of its normal scrolling.
//!
//! # Flow
//!
//! ```text
//! touch event ──► TouchObserver ──consumed──► done
//!                      │
//!                      ▼
//!              animation running? ──yes──► consumed, ignored
//!                      │
//!         Down: open session, track if an edge item is on screen
//!         Move: compute delta, clamp at the overscroll cap
//!         Up/Cancel: evaluate threshold ─► PullListener
//!                    start spring-back (always)
//! ```
//!
//! The host calls [`FlexibleList::on_over_scrolled`] whenever its own scroll
//! reaches the end of its range; that is where the damped delta is applied.
//! Animation frames are delivered through [`FlexibleList::advance`] or
//! [`FlexibleList::tick`].
//!
//! Everything runs on the UI thread. The only exclusion between dragging and
//! the spring-back is the animator's running state, checked before acting.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut list = FlexibleList::new(host_list);
//! list.set_pull_listener(
//!     PullCallbacks::new()
//!         .on_pull_down(|| refresh())
//!         .on_pull_up(|| load_more()),
//! );
//!
//! // From the platform touch callback
//! let consumed = list.handle_event(&TouchEvent::down(y));
//!
//! // From the frame callback
//! list.advance(frame_dt_ms);
//! ```

use flexlist_animation::SpringBack;
use flexlist_core::{ListControl, TouchEvent, TouchPhase};

use crate::config::OverscrollConfig;
use crate::error::Result;
use crate::listener::{PullListener, TouchObserver};
use crate::session::GestureSession;
use crate::threshold::{self, PullEvent};

/// A scrollable list with elastic overscroll
pub struct FlexibleList<L: ListControl> {
    list: L,
    config: OverscrollConfig,
    /// Density-scaled cap, also the pull threshold
    max_overscroll_distance: i32,
    /// Current overscroll offset pushed to the host (0 = rest)
    scroll_offset: i32,
    session: GestureSession,
    animator: SpringBack,
    touch_observer: Option<Box<dyn TouchObserver>>,
    pull_listener: Option<Box<dyn PullListener>>,
    last_pull: PullEvent,
}

impl<L: ListControl> FlexibleList<L> {
    /// Wrap a host list with the default configuration
    pub fn new(list: L) -> Self {
        Self::build(list, OverscrollConfig::default())
    }

    /// Wrap a host list with a custom configuration
    pub fn with_config(list: L, config: OverscrollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(list, config))
    }

    fn build(list: L, config: OverscrollConfig) -> Self {
        let max_overscroll_distance = config.max_overscroll_distance(list.density());
        tracing::debug!(
            max_overscroll_distance,
            density = list.density(),
            "flexible list created"
        );
        Self {
            list,
            config,
            max_overscroll_distance,
            scroll_offset: 0,
            session: GestureSession::default(),
            animator: SpringBack::new(config.spring_back_duration_ms, config.easing),
            touch_observer: None,
            pull_listener: None,
            last_pull: PullEvent::None,
        }
    }

    /// Replace the configuration.
    ///
    /// The threshold changes immediately. Duration and easing take effect for
    /// the next spring-back; a running animation keeps its current timing.
    pub fn set_config(&mut self, config: OverscrollConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.max_overscroll_distance = config.max_overscroll_distance(self.list.density());
        self.animator
            .set_timing(config.spring_back_duration_ms, config.easing);
        Ok(())
    }

    /// Register the pass-through observer, replacing any previous one
    pub fn set_touch_observer<O: TouchObserver + 'static>(&mut self, observer: O) {
        self.touch_observer = Some(Box::new(observer));
    }

    pub fn clear_touch_observer(&mut self) {
        self.touch_observer = None;
    }

    /// Register the pull listener, replacing any previous one
    pub fn set_pull_listener<P: PullListener + 'static>(&mut self, listener: P) {
        self.pull_listener = Some(Box::new(listener));
    }

    pub fn clear_pull_listener(&mut self) {
        self.pull_listener = None;
    }

    // =========================================================================
    // Gesture tracking
    // =========================================================================

    /// Feed a touch event.
    ///
    /// Returns `true` when the event was consumed (by the observer, or because
    /// the spring-back is running); `false` lets the host keep scrolling
    /// normally.
    pub fn handle_event(&mut self, event: &TouchEvent) -> bool {
        if let Some(observer) = self.touch_observer.as_mut() {
            if observer.on_touch(event) {
                tracing::trace!(phase = ?event.phase, "touch consumed by observer");
                return true;
            }
        }

        // Input during spring-back would fight the animation
        if self.animator.is_running() {
            tracing::trace!(phase = ?event.phase, "touch ignored during spring-back");
            return true;
        }

        match event.phase {
            TouchPhase::Down => self.on_down(event.y),
            TouchPhase::Move => self.on_move(event.y),
            TouchPhase::Up | TouchPhase::Cancel => self.on_release(event.y),
        }

        false
    }

    fn on_down(&mut self, y: f32) {
        let at_edge = self.list.is_at_edge();
        self.session = GestureSession::begin(y, at_edge);
        tracing::debug!(y, tracking = at_edge, "gesture started");
    }

    fn on_move(&mut self, y: f32) {
        if !self.session.tracking_enabled && self.list.is_at_edge() {
            self.session.start_tracking_mid_gesture(y);
            tracing::debug!(y, "edge reached mid-gesture, tracking started");
        }

        let delta = self.session.record_motion(y);
        self.session.delta_y = self.clamp_delta(delta);
        tracing::trace!(
            delta,
            clamped = self.session.delta_y,
            scroll_offset = self.scroll_offset,
            "gesture move"
        );
    }

    fn on_release(&mut self, y: f32) {
        let distance = self.session.release(y);
        tracing::debug!(y, ?distance, "gesture released");

        self.last_pull = match distance {
            Some(distance) => threshold::evaluate(
                distance,
                &self.session,
                &self.list,
                self.max_overscroll_distance,
            ),
            None => PullEvent::None,
        };

        if !self.last_pull.is_none() {
            tracing::debug!(event = ?self.last_pull, "pull threshold crossed");
            if let Some(listener) = self.pull_listener.as_deref_mut() {
                self.last_pull.dispatch(listener);
            }
        }

        self.animator
            .set_timing(self.config.spring_back_duration_ms, self.config.easing);
        self.animator.start(self.scroll_offset);
    }

    /// Zero a delta that would push further past the overscroll cap
    fn clamp_delta(&self, delta: i32) -> i32 {
        let pushing_further = delta != 0 && delta.signum() == self.scroll_offset.signum();
        let at_cap =
            self.scroll_offset.unsigned_abs() >= self.max_overscroll_distance.max(0) as u32;
        if at_cap && pushing_further {
            0
        } else {
            delta
        }
    }

    /// The host's scroll hit the end of its range during a drag.
    ///
    /// Applies the damped delta of the current move to the overscroll offset.
    /// Returns whether the offset changed.
    pub fn on_over_scrolled(&mut self) -> bool {
        if self.session.released || self.animator.is_running() {
            return false;
        }

        let delta = self.clamp_delta(self.session.delta_y);
        if delta == 0 {
            return false;
        }

        let step = delta / self.config.damping_divisor;
        if step == 0 {
            return false;
        }

        self.apply_offset(self.scroll_offset.saturating_add(step));
        tracing::trace!(delta, step, scroll_offset = self.scroll_offset, "overscroll");
        true
    }

    // =========================================================================
    // Spring-back
    // =========================================================================

    /// Advance the spring-back by `dt_ms` of frame time.
    ///
    /// Returns `true` while the animation is still running.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        if !self.animator.is_running() {
            return false;
        }
        let offset = self.animator.advance(dt_ms);
        self.apply_offset(offset);
        self.animator.is_running()
    }

    /// Apply an already-interpolated animation fraction directly.
    ///
    /// For hosts whose animation engine produces fractions itself.
    pub fn tick(&mut self, fraction: f32) -> i32 {
        if self.animator.is_running() {
            let offset = self.animator.tick(fraction);
            self.apply_offset(offset);
        }
        self.scroll_offset
    }

    /// Reposition the list explicitly, keeping the tracked offset in sync
    pub fn scroll_to(&mut self, offset: i32) {
        self.apply_offset(offset);
    }

    fn apply_offset(&mut self, offset: i32) {
        self.scroll_offset = offset;
        self.list.scroll_to(offset);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    pub fn max_overscroll_distance(&self) -> i32 {
        self.max_overscroll_distance
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// The spring-back animator, for its timing and progress
    pub fn spring_back(&self) -> &SpringBack {
        &self.animator
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Event produced by the most recent release
    pub fn last_pull(&self) -> PullEvent {
        self.last_pull
    }

    pub fn config(&self) -> &OverscrollConfig {
        &self.config
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn into_inner(self) -> L {
        self.list
    }
}

impl<L: ListControl + std::fmt::Debug> std::fmt::Debug for FlexibleList<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexibleList")
            .field("list", &self.list)
            .field("scroll_offset", &self.scroll_offset)
            .field("max_overscroll_distance", &self.max_overscroll_distance)
            .field("session", &self.session)
            .field("animating", &self.animator.is_running())
            .finish_non_exhaustive()
    }
}

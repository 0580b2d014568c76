//! Headless host list
//!
//! [`SimulatedList`] is a minimal scrollable list with real content scrolling:
//! items of known height inside a fixed viewport. [`SimulatedHost`] plays the
//! part of the platform list view, routing touch events to a
//! [`FlexibleList`] first and scrolling its own content with whatever the
//! controller does not consume. Used for scenario replay and tests.

use flexlist_core::{ListControl, TouchEvent, TouchPhase};

use crate::config::OverscrollConfig;
use crate::error::Result;
use crate::flexible_list::FlexibleList;

/// In-memory list of fixed-height items
#[derive(Debug, Clone)]
pub struct SimulatedList {
    item_heights: Vec<f32>,
    viewport_height: f32,
    /// Content scroll position, 0 at the top
    content_scroll: f32,
    /// Last offset applied through `scroll_to`
    overscroll_offset: i32,
    density: f32,
    has_adapter: bool,
}

impl SimulatedList {
    pub fn new(item_count: usize, item_height: f32, viewport_height: f32) -> Self {
        Self::with_heights(vec![item_height; item_count], viewport_height)
    }

    pub fn with_heights(item_heights: Vec<f32>, viewport_height: f32) -> Self {
        Self {
            item_heights,
            viewport_height,
            content_scroll: 0.0,
            overscroll_offset: 0,
            density: 1.0,
            has_adapter: true,
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Simulate a list with no adapter attached
    pub fn without_adapter(mut self) -> Self {
        self.has_adapter = false;
        self.item_heights.clear();
        self
    }

    pub fn content_height(&self) -> f32 {
        self.item_heights.iter().sum()
    }

    pub fn max_content_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    pub fn content_scroll(&self) -> f32 {
        self.content_scroll
    }

    pub fn set_content_scroll(&mut self, scroll: f32) {
        self.content_scroll = scroll.clamp(0.0, self.max_content_scroll());
    }

    pub fn overscroll_offset(&self) -> i32 {
        self.overscroll_offset
    }

    /// Scroll content by `delta` pixels (positive moves content up).
    ///
    /// Returns `true` when the delta could not be absorbed by normal
    /// scrolling: the list is already overscrolled, or the content hit either
    /// end of its range.
    pub fn scroll_content(&mut self, delta: f32) -> bool {
        if self.overscroll_offset != 0 {
            return true;
        }
        let target = self.content_scroll + delta;
        let clamped = target.clamp(0.0, self.max_content_scroll());
        self.content_scroll = clamped;
        target != clamped
    }

    /// Adapter positions of the visible items
    fn visible_range(&self) -> Option<(usize, usize)> {
        if self.item_heights.is_empty() {
            return None;
        }

        let top = self.content_scroll;
        let bottom = self.content_scroll + self.viewport_height;
        let mut first = None;
        let mut last = 0;
        let mut item_top = 0.0;
        for (index, height) in self.item_heights.iter().enumerate() {
            let item_bottom = item_top + height;
            if item_bottom > top && first.is_none() {
                first = Some(index);
            }
            if item_top < bottom {
                last = index;
            }
            item_top = item_bottom;
        }
        first.map(|first| (first, last.max(first)))
    }
}

impl ListControl for SimulatedList {
    fn first_visible_position(&self) -> usize {
        self.visible_range().map_or(0, |(first, _)| first)
    }

    fn last_visible_position(&self) -> usize {
        self.visible_range().map_or(0, |(_, last)| last)
    }

    fn item_count(&self) -> Option<usize> {
        self.has_adapter.then_some(self.item_heights.len())
    }

    fn child_count(&self) -> usize {
        self.visible_range()
            .map_or(0, |(first, last)| last - first + 1)
    }

    fn child_height(&self, slot: usize) -> Option<f32> {
        let (first, last) = self.visible_range()?;
        let position = first + slot;
        if position > last {
            return None;
        }
        self.item_heights.get(position).copied()
    }

    fn scroll_to(&mut self, offset: i32) {
        self.overscroll_offset = offset;
    }

    fn density(&self) -> f32 {
        self.density
    }
}

/// Platform-side dispatch around a [`FlexibleList`]
#[derive(Debug)]
pub struct SimulatedHost {
    list: FlexibleList<SimulatedList>,
    last_y: Option<f32>,
}

impl SimulatedHost {
    pub fn new(list: SimulatedList) -> Self {
        Self {
            list: FlexibleList::new(list),
            last_y: None,
        }
    }

    pub fn with_config(list: SimulatedList, config: OverscrollConfig) -> Result<Self> {
        Ok(Self {
            list: FlexibleList::with_config(list, config)?,
            last_y: None,
        })
    }

    /// Deliver a touch event the way a platform list view would.
    ///
    /// Returns whether the overscroll controller consumed it.
    pub fn dispatch(&mut self, event: &TouchEvent) -> bool {
        let consumed = self.list.handle_event(event);

        match event.phase {
            TouchPhase::Down => self.last_y = Some(event.y),
            TouchPhase::Move => {
                if !consumed {
                    if let Some(last_y) = self.last_y {
                        if self.list.list_mut().scroll_content(last_y - event.y) {
                            self.list.on_over_scrolled();
                        }
                    }
                }
                self.last_y = Some(event.y);
            }
            TouchPhase::Up | TouchPhase::Cancel => self.last_y = None,
        }

        consumed
    }

    /// Deliver up to `count` animation frames of `dt_ms` each.
    ///
    /// Stops once the spring-back finishes and returns the number of frames
    /// actually delivered, the finishing frame included.
    pub fn frames(&mut self, count: u32, dt_ms: f32) -> u32 {
        let mut delivered = 0;
        while delivered < count && self.list.is_animating() {
            self.list.advance(dt_ms);
            delivered += 1;
        }
        delivered
    }

    /// Run animation frames until the spring-back settles.
    ///
    /// Returns the number of frames delivered. A frame step that is not a
    /// positive finite duration delivers nothing, and the run is capped at
    /// the frames the animator's duration needs.
    pub fn settle(&mut self, dt_ms: f32) -> u32 {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            tracing::warn!(dt_ms, "refusing to settle with a non-positive frame step");
            return 0;
        }
        let duration_ms = self.list.spring_back().duration_ms() as f32;
        let limit = (duration_ms / dt_ms).ceil() as u32 + 1;
        self.frames(limit, dt_ms)
    }

    pub fn list(&self) -> &FlexibleList<SimulatedList> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut FlexibleList<SimulatedList> {
        &mut self.list
    }
}

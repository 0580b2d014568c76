//! FlexList Widgets
//!
//! Elastic overscroll for scrollable lists. Dragging past the top or bottom of
//! a list makes it overshoot at half speed, springs it back on release, and
//! fires a pull-to-refresh or pull-to-load-more callback when the pull went
//! far enough.
//!
//! The host list stays in charge of rendering and normal scrolling; this crate
//! only sees it through [`ListControl`](flexlist_core::ListControl).
//!
//! # Example
//!
//! ```rust
//! use flexlist_core::{ListControl, TouchEvent};
//! use flexlist_widgets::prelude::*;
//!
//! struct HostList {
//!     offset: i32,
//! }
//!
//! impl ListControl for HostList {
//!     fn first_visible_position(&self) -> usize { 0 }
//!     fn last_visible_position(&self) -> usize { 9 }
//!     fn item_count(&self) -> Option<usize> { Some(50) }
//!     fn child_count(&self) -> usize { 10 }
//!     fn child_height(&self, _slot: usize) -> Option<f32> { Some(48.0) }
//!     fn scroll_to(&mut self, offset: i32) { self.offset = offset; }
//! }
//!
//! let mut list = FlexibleList::new(HostList { offset: 0 });
//! list.set_pull_listener(PullCallbacks::new().on_pull_down(|| println!("refresh")));
//!
//! list.handle_event(&TouchEvent::down(100.0));
//! list.handle_event(&TouchEvent::moved(180.0));
//! list.on_over_scrolled();
//! list.handle_event(&TouchEvent::up(240.0));
//!
//! assert_eq!(list.last_pull(), PullEvent::PullDown);
//! while list.advance(16.0) {}
//! assert_eq!(list.list().offset, 0);
//! ```

pub mod config;
pub mod error;
pub mod flexible_list;
pub mod listener;
pub mod session;
pub mod simulated;
pub mod threshold;

pub use config::OverscrollConfig;
pub use error::{ConfigError, Result};
pub use flexible_list::FlexibleList;
pub use listener::{PullCallbacks, PullListener, TouchObserver};
pub use session::GestureSession;
pub use threshold::PullEvent;

/// Commonly used items
pub mod prelude {
    pub use crate::config::OverscrollConfig;
    pub use crate::flexible_list::FlexibleList;
    pub use crate::listener::{PullCallbacks, PullListener, TouchObserver};
    pub use crate::threshold::PullEvent;
}

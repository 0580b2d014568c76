//! FlexList Core
//!
//! Toolkit-independent primitives shared by the FlexList crates:
//!
//! - **Touch Events**: A single-pointer touch event model (down, move, up, cancel)
//! - **List Control**: The capability a host scrollable list exposes so the
//!   overscroll logic can query visible items and reposition the list
//!
//! # Example
//!
//! ```rust
//! use flexlist_core::{TouchEvent, TouchPhase};
//!
//! let down = TouchEvent::down(120.0);
//! assert_eq!(down.phase, TouchPhase::Down);
//! assert!(down.phase.is_start());
//! assert!(TouchEvent::cancel(80.0).phase.is_end());
//! ```

pub mod events;
pub mod list;

pub use events::{TouchEvent, TouchPhase};
pub use list::ListControl;

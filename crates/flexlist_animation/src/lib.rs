//! FlexList Animation
//!
//! Frame-driven animation primitives for elastic lists.
//!
//! # Features
//!
//! - **Easing**: Interpolators applied to linear animation progress
//! - **Spring-back**: Fixed-duration return of an overscroll offset to rest,
//!   driven by whatever scheduler the host has (frame callback, timer or
//!   manual stepping)

pub mod easing;
pub mod spring_back;

pub use easing::Easing;
pub use spring_back::{AnimatorState, SpringBack, DEFAULT_DURATION_MS};

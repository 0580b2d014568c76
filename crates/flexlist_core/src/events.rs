//! Touch event model
//!
//! Platform layers convert their native motion events into [`TouchEvent`]
//! before handing them to the overscroll controller.

use serde::{Deserialize, Serialize};

/// Phase of a single-pointer touch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// A new touch started
    Down,
    /// Touch position changed
    Move,
    /// Touch ended
    Up,
    /// Touch cancelled (e.g., system gesture or parent interception)
    Cancel,
}

impl TouchPhase {
    /// Check if this phase starts a touch sequence
    pub fn is_start(&self) -> bool {
        matches!(self, TouchPhase::Down)
    }

    /// Check if this phase ends a touch sequence
    pub fn is_end(&self) -> bool {
        matches!(self, TouchPhase::Up | TouchPhase::Cancel)
    }
}

/// A touch event with the pointer position in list-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// X coordinate (unused by vertical overscroll, kept for observers)
    #[serde(default)]
    pub x: f32,
    /// Y coordinate in pixels
    pub y: f32,
    /// Event time in milliseconds
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            timestamp_ms: 0,
        }
    }

    pub fn down(y: f32) -> Self {
        Self::new(TouchPhase::Down, 0.0, y)
    }

    pub fn moved(y: f32) -> Self {
        Self::new(TouchPhase::Move, 0.0, y)
    }

    pub fn up(y: f32) -> Self {
        Self::new(TouchPhase::Up, 0.0, y)
    }

    pub fn cancel(y: f32) -> Self {
        Self::new(TouchPhase::Cancel, 0.0, y)
    }

    /// Set the event timestamp
    pub fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_classification() {
        assert!(TouchPhase::Down.is_start());
        assert!(!TouchPhase::Move.is_start());
        assert!(!TouchPhase::Move.is_end());
        assert!(TouchPhase::Up.is_end());
        assert!(TouchPhase::Cancel.is_end());
    }

    #[test]
    fn test_constructors() {
        let event = TouchEvent::moved(42.5).at(16);
        assert_eq!(event.phase, TouchPhase::Move);
        assert_eq!(event.y, 42.5);
        assert_eq!(event.x, 0.0);
        assert_eq!(event.timestamp_ms, 16);
    }
}

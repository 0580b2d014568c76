//! Per-gesture tracking state
//!
//! A [`GestureSession`] lives from touch-down to release. It records where the
//! pull started and whether the edge item was already on screen at that point.

/// Tracking state for one touch sequence
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    /// Y where pull measurement starts; `None` until an edge is reached
    pub start_y: Option<f32>,
    /// Most recent pointer Y in whole pixels
    pub last_motion_y: i32,
    /// Last frame delta (`last_motion_y - y`), positive when dragging up
    pub delta_y: i32,
    /// Whether an edge item was on screen at some point during the gesture
    pub tracking_enabled: bool,
    /// Edge item was already at rest on screen when the finger went down
    pub edge_item_was_fully_visible: bool,
    /// Finger lifted or gesture cancelled
    pub released: bool,
}

impl GestureSession {
    /// Start a session on touch-down.
    ///
    /// Tracking starts immediately only if an edge item is on screen.
    pub fn begin(y: f32, at_edge: bool) -> Self {
        Self {
            start_y: at_edge.then_some(y),
            last_motion_y: y as i32,
            delta_y: 0,
            tracking_enabled: at_edge,
            edge_item_was_fully_visible: at_edge,
            released: false,
        }
    }

    /// The list scrolled an edge item into view mid-gesture.
    ///
    /// The pull is measured from here, and the edge item's height does not
    /// count towards it.
    pub fn start_tracking_mid_gesture(&mut self, y: f32) {
        self.tracking_enabled = true;
        self.edge_item_was_fully_visible = false;
        self.start_y = Some(y);
    }

    /// Record a pointer move and return the frame delta
    pub fn record_motion(&mut self, y: f32) -> i32 {
        let y = y as i32;
        self.delta_y = self.last_motion_y.saturating_sub(y);
        self.last_motion_y = y;
        self.delta_y
    }

    /// End the gesture and return the pulled distance (`y - start_y`).
    ///
    /// Returns `None` when tracking never started. The start point is consumed,
    /// so releasing twice yields a distance at most once.
    pub fn release(&mut self, y: f32) -> Option<f32> {
        self.released = true;
        self.start_y.take().map(|start| y - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_at_edge() {
        let session = GestureSession::begin(120.7, true);
        assert_eq!(session.start_y, Some(120.7));
        assert_eq!(session.last_motion_y, 120);
        assert!(session.tracking_enabled);
        assert!(session.edge_item_was_fully_visible);
        assert!(!session.released);
    }

    #[test]
    fn test_begin_away_from_edge() {
        let session = GestureSession::begin(300.0, false);
        assert_eq!(session.start_y, None);
        assert!(!session.tracking_enabled);
        assert!(!session.edge_item_was_fully_visible);
        assert_eq!(session.last_motion_y, 300);
    }

    #[test]
    fn test_mid_gesture_tracking() {
        let mut session = GestureSession::begin(300.0, false);
        session.record_motion(320.0);
        session.start_tracking_mid_gesture(320.0);

        assert!(session.tracking_enabled);
        assert!(!session.edge_item_was_fully_visible);
        assert_eq!(session.start_y, Some(320.0));
    }

    #[test]
    fn test_motion_deltas() {
        let mut session = GestureSession::begin(100.0, true);

        // Dragging down yields negative deltas
        assert_eq!(session.record_motion(130.0), -30);
        assert_eq!(session.record_motion(125.5), 5);
        assert_eq!(session.last_motion_y, 125);
        assert_eq!(session.delta_y, 5);
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let mut session = GestureSession::begin(-1e10, true);
        assert_eq!(session.last_motion_y, i32::MIN);

        assert_eq!(session.record_motion(1e10), i32::MIN);
        assert_eq!(session.last_motion_y, i32::MAX);
        assert_eq!(session.record_motion(-1e10), i32::MAX);
    }

    #[test]
    fn test_release_distance() {
        let mut session = GestureSession::begin(100.0, true);
        session.record_motion(180.0);

        assert_eq!(session.release(201.0), Some(101.0));
        assert!(session.released);
        assert_eq!(session.release(201.0), None);
    }

    #[test]
    fn test_release_without_tracking() {
        let mut session = GestureSession::begin(100.0, false);
        assert_eq!(session.release(40.0), None);
        assert!(session.released);
    }
}

//! Pull threshold evaluation
//!
//! Decides on release whether a pull crossed the trigger distance. When the
//! edge item only scrolled into view during the gesture, its height is taken
//! off the pulled distance: the item had to come fully on screen before the
//! pull started to count.

use flexlist_core::ListControl;
use serde::{Deserialize, Serialize};

use crate::listener::PullListener;
use crate::session::GestureSession;

/// Outcome of a released gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullEvent {
    #[default]
    None,
    /// Pulled down past the threshold at the top of the list
    PullDown,
    /// Pulled up past the threshold at the bottom of the list
    PullUp,
}

impl PullEvent {
    pub fn is_none(&self) -> bool {
        matches!(self, PullEvent::None)
    }

    /// Deliver this event to a listener
    pub fn dispatch(self, listener: &mut dyn PullListener) {
        match self {
            PullEvent::None => {}
            PullEvent::PullDown => listener.on_pull_down(),
            PullEvent::PullUp => listener.on_pull_up(),
        }
    }
}

/// Evaluate a released gesture.
///
/// `distance` is `release_y - start_y`: positive for a downward pull at the
/// top, negative for an upward pull at the bottom. The comparison against
/// `max_distance` is strict. A missing edge child skips evaluation.
pub fn evaluate<L>(
    distance: f32,
    session: &GestureSession,
    list: &L,
    max_distance: i32,
) -> PullEvent
where
    L: ListControl + ?Sized,
{
    let (pulled, edge_height, event) = if distance > 0.0 && list.is_at_top() {
        (distance, list.first_child_height(), PullEvent::PullDown)
    } else if distance < 0.0 && list.is_at_bottom() {
        (-distance, list.last_child_height(), PullEvent::PullUp)
    } else {
        return PullEvent::None;
    };

    let Some(edge_height) = edge_height else {
        tracing::debug!(?event, "no edge child, skipping pull evaluation");
        return PullEvent::None;
    };

    let pulled = if session.edge_item_was_fully_visible {
        pulled
    } else {
        pulled - edge_height
    };

    tracing::trace!(
        distance,
        pulled,
        edge_height,
        max_distance,
        "evaluating pull threshold"
    );

    if pulled > max_distance as f32 {
        event
    } else {
        PullEvent::None
    }
}

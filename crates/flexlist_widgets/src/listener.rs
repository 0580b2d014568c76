//! Host-facing callbacks
//!
//! - [`TouchObserver`]: pass-through observer that sees every touch event
//!   first. Returning `true` consumes the event and skips overscroll handling.
//! - [`PullListener`]: notified when a release crosses the pull threshold.

use flexlist_core::TouchEvent;

/// Observer that runs before the overscroll state machine
pub trait TouchObserver {
    /// Return `true` to consume the event
    fn on_touch(&mut self, event: &TouchEvent) -> bool;
}

impl<F> TouchObserver for F
where
    F: FnMut(&TouchEvent) -> bool,
{
    fn on_touch(&mut self, event: &TouchEvent) -> bool {
        self(event)
    }
}

/// Receiver for pull-to-refresh and pull-to-load-more notifications
pub trait PullListener {
    /// The list was pulled down past the threshold at the top
    fn on_pull_down(&mut self);

    /// The list was pulled up past the threshold at the bottom
    fn on_pull_up(&mut self);
}

/// Closure-backed [`PullListener`]
#[derive(Default)]
pub struct PullCallbacks {
    on_pull_down: Option<Box<dyn FnMut()>>,
    on_pull_up: Option<Box<dyn FnMut()>>,
}

impl PullCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pull_down<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_pull_down = Some(Box::new(callback));
        self
    }

    pub fn on_pull_up<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_pull_up = Some(Box::new(callback));
        self
    }
}

impl PullListener for PullCallbacks {
    fn on_pull_down(&mut self) {
        if let Some(callback) = self.on_pull_down.as_mut() {
            callback();
        }
    }

    fn on_pull_up(&mut self) {
        if let Some(callback) = self.on_pull_up.as_mut() {
            callback();
        }
    }
}

impl std::fmt::Debug for PullCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullCallbacks")
            .field("on_pull_down", &self.on_pull_down.is_some())
            .field("on_pull_up", &self.on_pull_up.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_observer() {
        let mut seen = 0;
        let mut observer = |event: &TouchEvent| {
            seen += 1;
            event.y > 100.0
        };

        assert!(!observer.on_touch(&TouchEvent::down(50.0)));
        assert!(observer.on_touch(&TouchEvent::moved(150.0)));
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_pull_callbacks() {
        let downs = Rc::new(Cell::new(0));
        let ups = Rc::new(Cell::new(0));

        let mut listener = PullCallbacks::new()
            .on_pull_down({
                let downs = downs.clone();
                move || downs.set(downs.get() + 1)
            })
            .on_pull_up({
                let ups = ups.clone();
                move || ups.set(ups.get() + 1)
            });

        PullListener::on_pull_down(&mut listener);
        PullListener::on_pull_down(&mut listener);
        PullListener::on_pull_up(&mut listener);

        assert_eq!(downs.get(), 2);
        assert_eq!(ups.get(), 1);
    }

    #[test]
    fn test_missing_callback_is_noop() {
        let mut listener = PullCallbacks::new();
        PullListener::on_pull_down(&mut listener);
        PullListener::on_pull_up(&mut listener);
        assert_eq!(
            format!("{listener:?}"),
            "PullCallbacks { on_pull_down: false, on_pull_up: false }"
        );
    }
}

//! Scenario files for headless gesture replay
//!
//! ```toml
//! [list]
//! item_count = 20
//! item_height = 40.0
//! viewport_height = 200.0
//!
//! [[steps]]
//! type = "down"
//! y = 100.0
//!
//! [[steps]]
//! type = "drag"
//! to = 260.0
//! moves = 4
//!
//! [[steps]]
//! type = "up"
//! y = 260.0
//!
//! [[steps]]
//! type = "expect_pull"
//! event = "pull_down"
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use flexlist_core::TouchEvent;
use flexlist_widgets::simulated::{SimulatedHost, SimulatedList};
use flexlist_widgets::{OverscrollConfig, PullCallbacks, PullEvent};
use serde::Deserialize;

/// A scripted gesture run against a simulated list
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub list: ListSpec,
    /// Overscroll settings; defaults apply when absent
    #[serde(default)]
    pub overscroll: Option<OverscrollConfig>,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn from_toml(input: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(input)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reject steps that could never complete
    pub fn validate(&self) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            let dt_ms = match step {
                ScenarioStep::Frames { dt_ms, .. } | ScenarioStep::Settle { dt_ms } => *dt_ms,
                _ => continue,
            };
            if !(dt_ms.is_finite() && dt_ms > 0.0) {
                bail!("step {index}: dt_ms must be a positive number of milliseconds, got {dt_ms}");
            }
        }
        Ok(())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid scenario {}", path.display()))
    }
}

/// Shape of the simulated list
#[derive(Debug, Clone, Deserialize)]
pub struct ListSpec {
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    #[serde(default = "default_item_height")]
    pub item_height: f32,
    /// Per-item heights, overriding `item_count`/`item_height`
    #[serde(default)]
    pub heights: Option<Vec<f32>>,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    /// Initial content scroll position
    #[serde(default)]
    pub content_scroll: f32,
    #[serde(default = "default_density")]
    pub density: f32,
    /// Simulate a list with no adapter
    #[serde(default)]
    pub no_adapter: bool,
}

fn default_item_count() -> usize {
    20
}

fn default_item_height() -> f32 {
    40.0
}

fn default_viewport_height() -> f32 {
    200.0
}

fn default_density() -> f32 {
    1.0
}

impl Default for ListSpec {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            item_height: default_item_height(),
            heights: None,
            viewport_height: default_viewport_height(),
            content_scroll: 0.0,
            density: default_density(),
            no_adapter: false,
        }
    }
}

impl ListSpec {
    fn build(&self) -> SimulatedList {
        let mut list = match &self.heights {
            Some(heights) => SimulatedList::with_heights(heights.clone(), self.viewport_height),
            None => SimulatedList::new(self.item_count, self.item_height, self.viewport_height),
        }
        .with_density(self.density);
        list.set_content_scroll(self.content_scroll);
        if self.no_adapter {
            list = list.without_adapter();
        }
        list
    }
}

/// One scenario step
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Down { y: f32 },
    Move { y: f32 },
    Up { y: f32 },
    Cancel { y: f32 },
    /// Evenly spaced moves from the last pointer position to `to`
    Drag { to: f32, moves: u32 },
    /// Deliver animation frames
    Frames {
        count: u32,
        #[serde(default = "default_frame_ms")]
        dt_ms: f32,
    },
    /// Deliver frames until the spring-back settles
    Settle {
        #[serde(default = "default_frame_ms")]
        dt_ms: f32,
    },
    ExpectPull { event: PullEvent },
    ExpectOffset { value: i32 },
    ExpectAnimating { value: bool },
}

fn default_frame_ms() -> f32 {
    16.0
}

impl ScenarioStep {
    /// The touch event this step delivers, if any
    fn touch_event(&self) -> Option<TouchEvent> {
        match *self {
            ScenarioStep::Down { y } => Some(TouchEvent::down(y)),
            ScenarioStep::Move { y } => Some(TouchEvent::moved(y)),
            ScenarioStep::Up { y } => Some(TouchEvent::up(y)),
            ScenarioStep::Cancel { y } => Some(TouchEvent::cancel(y)),
            _ => None,
        }
    }
}

/// What happened during a run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Pull events with the index of the step that fired them
    pub pulls: Vec<(usize, PullEvent)>,
    pub final_offset: i32,
    pub max_abs_offset: i32,
    pub frames: u32,
    pub failures: Vec<String>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Replay a scenario.
///
/// `config` overrides the scenario's own `[overscroll]` table.
pub fn run(scenario: &Scenario, config: Option<OverscrollConfig>) -> Result<RunReport> {
    let config = config.or(scenario.overscroll).unwrap_or_default();
    let mut host = SimulatedHost::with_config(scenario.list.build(), config)?;

    let fired = Rc::new(RefCell::new(Vec::new()));
    host.list_mut().set_pull_listener(
        PullCallbacks::new()
            .on_pull_down({
                let fired = fired.clone();
                move || fired.borrow_mut().push(PullEvent::PullDown)
            })
            .on_pull_up({
                let fired = fired.clone();
                move || fired.borrow_mut().push(PullEvent::PullUp)
            }),
    );

    let mut report = RunReport::default();
    let mut pointer_y = 0.0;

    for (index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(index, ?step, "scenario step");
        match step {
            ScenarioStep::Down { .. }
            | ScenarioStep::Move { .. }
            | ScenarioStep::Up { .. }
            | ScenarioStep::Cancel { .. } => {
                if let Some(event) = step.touch_event() {
                    host.dispatch(&event);
                    pointer_y = event.y;
                }
            }
            ScenarioStep::Drag { to, moves } => {
                let from = pointer_y;
                let moves = (*moves).max(1);
                for i in 1..=moves {
                    let y = from + (to - from) * i as f32 / moves as f32;
                    host.dispatch(&TouchEvent::moved(y));
                    report.max_abs_offset =
                        report.max_abs_offset.max(host.list().scroll_offset().saturating_abs());
                }
                pointer_y = *to;
            }
            ScenarioStep::Frames { count, dt_ms } => {
                report.frames += host.frames(*count, *dt_ms);
            }
            ScenarioStep::Settle { dt_ms } => {
                report.frames += host.settle(*dt_ms);
            }
            ScenarioStep::ExpectPull { event } => {
                let actual = host.list().last_pull();
                if actual != *event {
                    report.failures.push(format!(
                        "step {index}: expected pull {event:?}, got {actual:?}"
                    ));
                }
            }
            ScenarioStep::ExpectOffset { value } => {
                let actual = host.list().scroll_offset();
                if actual != *value {
                    report.failures.push(format!(
                        "step {index}: expected offset {value}, got {actual}"
                    ));
                }
            }
            ScenarioStep::ExpectAnimating { value } => {
                let actual = host.list().is_animating();
                if actual != *value {
                    report.failures.push(format!(
                        "step {index}: expected animating={value}, got {actual}"
                    ));
                }
            }
        }

        report.max_abs_offset = report.max_abs_offset.max(host.list().scroll_offset().saturating_abs());
        for event in fired.borrow_mut().drain(..) {
            tracing::info!(index, ?event, "pull fired");
            report.pulls.push((index, event));
        }
    }

    report.final_offset = host.list().scroll_offset();
    Ok(report)
}

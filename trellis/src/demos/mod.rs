//! Demo modules.
//!
//! Each demo composes a widget tree and drives the shell's run loop. The
//! harness discovers demos by name through [`all`] and runs them
//! sequentially; a demo that returns an error or panics is a failure.

use crate::error::AppError;

mod anchors;
mod float_pack;

/// Options the harness passes into every demo.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Auto-exit after this many seconds; `None` waits for a key.
    pub demo_time_s: Option<u64>,
    /// Title line shown above the demo's content.
    pub title: String,
    /// Paint frames into an off-screen surface instead of a terminal.
    pub headless: bool,
}

/// A runnable demo module.
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&DemoOptions) -> Result<(), AppError>,
}

/// Every available demo, in a stable order.
pub fn all() -> &'static [Demo] {
    &[
        Demo {
            name: "float_pack",
            description: "three relative-width floats packing inside a pane",
            run: float_pack::run,
        },
        Demo {
            name: "anchors",
            description: "corner-anchored widgets and paint z-order",
            run: anchors::run,
        },
    ]
}

/// Look up a demo by name.
pub fn find(name: &str) -> Option<&'static Demo> {
    all().iter().find(|demo| demo.name == name)
}

use crate::canvas::Canvas;
use std::fmt;

/// Metadata for a registered application.
///
/// Only used for the window title and startup logging, never for behaviour.
/// `run` marks the entry the runtime should execute; exactly one registered
/// application may set it.
#[derive(Debug, Copy, Clone)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub run: bool,
}

/// Lifecycle hooks for a runnable application.
///
/// The runtime calls `on_init` once before the first frame, `on_update` once
/// per frame, and `on_end` exactly once on shutdown, on every exit path.
/// All hooks receive the drawing context; applications that need no setup or
/// teardown can rely on the empty default bodies.
pub trait Application {
    fn on_init(&mut self, _ctx: &mut Canvas) {}

    fn on_update(&mut self, ctx: &mut Canvas);

    fn on_end(&mut self, _ctx: &mut Canvas) {}
}

impl fmt::Debug for dyn Application {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("dyn Application")
    }
}

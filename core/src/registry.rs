use crate::application::{AppInfo, Application};
use log::error;
use std::error::Error;
use std::fmt;

/// Factory producing a fresh application instance. Plain function pointers so
/// the registry can be assembled from statics at compile time.
pub type AppFactory = fn() -> Box<dyn Application>;

pub struct AppEntry {
    pub info: AppInfo,
    pub factory: AppFactory,
}

/// Explicit listing of every application the frontend knows about.
///
/// Replaces attribute based discovery: entries are registered in code and the
/// active one is the single entry whose `run` flag is set.
#[derive(Default)]
pub struct Registry {
    entries: Vec<AppEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { entries: Vec::new() }
    }

    pub fn register(&mut self, info: AppInfo, factory: AppFactory) {
        self.entries.push(AppEntry { info, factory });
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Resolve the single application flagged to run and construct it.
    ///
    /// Zero or more than one flagged entry is a fatal startup condition for
    /// the runtime, which refuses to proceed.
    pub fn resolve_active(&self) -> Result<(AppInfo, Box<dyn Application>), SelectionError> {
        let mut flagged = self.entries.iter().filter(|entry| entry.info.run);

        let active = match flagged.next() {
            Some(entry) => entry,
            None => {
                error!("No registered application is flagged to run");
                return Err(SelectionError::NoneFlagged);
            }
        };

        if let Some(second) = flagged.next() {
            error!(
                "More than one application flagged to run: {} and {}",
                active.info.name, second.info.name
            );
            return Err(SelectionError::Ambiguous);
        }

        Ok((active.info, (active.factory)()))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NoneFlagged,
    Ambiguous,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::NoneFlagged => write!(f, "no application is flagged to run"),
            SelectionError::Ambiguous => write!(f, "more than one application is flagged to run"),
        }
    }
}

impl Error for SelectionError {}

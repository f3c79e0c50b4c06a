//! Logging support for solver runs.
//!
//! [`LogObserver`] forwards each solver event to the [`log`] facade, so a solve
//! can be traced with whatever logger the application installs.
//! [`StderrLogger`] is a minimal logger for command-line programs that do not
//! bring their own.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use tangent_core::Observer;

use crate::traits::{HasErrorEstimate, HasEstimate, HasIteration};

/// An observer that logs every event and never intervenes.
///
/// Works with any solver whose events implement [`HasIteration`],
/// [`HasEstimate`] and [`HasErrorEstimate`].
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    label: &'static str,
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Debug`] under `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            level: Level::Debug,
        }
    }

    /// Returns a copy of this observer that logs at `level`.
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasEstimate + HasErrorEstimate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        match event.error_estimate() {
            Some(error) => log::log!(
                self.level,
                "{} iter {}: x = {}, error = {:e}",
                self.label,
                event.iteration(),
                event.estimate(),
                error,
            ),
            None => log::log!(
                self.level,
                "{} iter {}: x = {}",
                self.label,
                event.iteration(),
                event.estimate(),
            ),
        }
        None
    }
}

/// A logger that writes `[LEVEL target] message` lines to standard error.
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Creates a logger that accepts records up to `level`.
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Installs a `StderrLogger` as the global logger.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger is already installed.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use lvlog_core::{CallSite, Level};

/// Logger shared through the registry.
pub type SharedLogger = Arc<dyn LevelLog + Send + Sync>;

/// The leveled logging interface the registry stores and hands out.
///
/// Implementors provide filtering ([`enabled`](LevelLog::enabled)) and output
/// ([`log_at`](LevelLog::log_at)); the twelve per-level entry points are
/// provided on top of them and attribute each line to their caller.
pub trait LevelLog {
    /// Whether a message of severity `level` would be written.
    fn enabled(&self, level: Level) -> bool;

    /// Writes one message attributed to `site`. Must not panic.
    fn log_at(&self, level: Level, site: CallSite<'_>, args: fmt::Arguments<'_>);

    /// Joins `values` with no separator and logs them at TRACE.
    #[track_caller]
    fn trace(&self, values: &[&dyn Display]) {
        log_values(self, Level::Trace, CallSite::caller(), values);
    }

    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Trace, CallSite::caller(), args);
    }

    #[track_caller]
    fn debug(&self, values: &[&dyn Display]) {
        log_values(self, Level::Debug, CallSite::caller(), values);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Debug, CallSite::caller(), args);
    }

    #[track_caller]
    fn info(&self, values: &[&dyn Display]) {
        log_values(self, Level::Info, CallSite::caller(), values);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Info, CallSite::caller(), args);
    }

    #[track_caller]
    fn warn(&self, values: &[&dyn Display]) {
        log_values(self, Level::Warn, CallSite::caller(), values);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Warn, CallSite::caller(), args);
    }

    #[track_caller]
    fn error(&self, values: &[&dyn Display]) {
        log_values(self, Level::Error, CallSite::caller(), values);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Error, CallSite::caller(), args);
    }

    #[track_caller]
    fn critical(&self, values: &[&dyn Display]) {
        log_values(self, Level::Critical, CallSite::caller(), values);
    }

    #[track_caller]
    fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Critical, CallSite::caller(), args);
    }
}

/// Renders values back to back. A value whose `Display` fails contributes
/// whatever it wrote before failing.
pub(crate) struct JoinedValues<'a>(pub &'a [&'a dyn Display]);

impl Display for JoinedValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            let _ = write!(f, "{value}");
        }
        Ok(())
    }
}

/// Plain-form logging with the join skipped when `level` is filtered out.
pub(crate) fn log_values<L: LevelLog + ?Sized>(
    logger: &L,
    level: Level,
    site: CallSite<'_>,
    values: &[&dyn Display],
) {
    if logger.enabled(level) {
        logger.log_at(level, site, format_args!("{}", JoinedValues(values)));
    }
}

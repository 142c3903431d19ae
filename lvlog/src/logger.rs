use std::{
    fmt::{self, Write as _},
    io::Write,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use lvlog_core::{CallSite, Level, format_line};

use crate::level_log::{LevelLog, SharedLogger};

/// A leveled logger bound to a byte sink.
///
/// Every entry point is a no-op when its severity is above the threshold.
/// Accepted lines are written whole while holding the sink lock, so
/// concurrent callers sharing one logger never interleave partial lines.
/// Sink failures are counted, never reported to the caller.
pub struct Logger {
    sink: Mutex<Box<dyn Write + Send>>,
    level: Level,
    depth: usize,
    color: bool,
    write_errors: AtomicU64,
}

impl Logger {
    /// Creates a logger writing to `sink`.
    ///
    /// `depth` is the number of frames between the logging primitive and the
    /// call site. Attribution itself relies on `#[track_caller]`, so the
    /// reported file and line are those of the user call expression whatever
    /// the depth; the value is kept for callers that inspect it.
    pub fn new<W: Write + Send + 'static>(sink: W, level: Level, depth: usize) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
            level,
            depth,
            color: false,
            write_errors: AtomicU64::new(0),
        }
    }

    /// Colours the level tag with ANSI escapes.
    pub fn with_color(self, yes: bool) -> Self {
        Self { color: yes, ..self }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of lines the sink failed to accept.
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    fn write_line(&self, level: Level, site: CallSite<'_>, message: &str) {
        let line = format_line(level, site, message, self.color);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if sink
            .write_all(line.as_bytes())
            .and_then(|()| sink.flush())
            .is_err()
        {
            self.write_errors.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl LevelLog for Logger {
    fn enabled(&self, level: Level) -> bool {
        self.level >= level
    }

    /// Logs with an explicit call site, for adapters that already know where
    /// the record came from. A failing `Display` truncates the message
    /// instead of unwinding.
    fn log_at(&self, level: Level, site: CallSite<'_>, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let message = match args.as_str() {
            Some(s) => s.to_string(),
            None => {
                let mut message = String::new();
                let _ = message.write_fmt(args);
                message
            }
        };
        self.write_line(level, site, &message);
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Arc::new(logger)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("depth", &self.depth)
            .field("color", &self.color)
            .field("write_errors", &self.write_errors())
            .finish_non_exhaustive()
    }
}

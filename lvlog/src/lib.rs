//! # lvlog
//! Leveled logging facade with a registry of named loggers.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! lvlog = "0.1.0"
//! ```
//!
//! ```rust
//! use lvlog::{infof, warn};
//!
//! // the root logger writes to stderr, threshold from LVLOG_LEVEL (default: all)
//! infof!("listening on port {}", 8080);
//! warn!("disk ", 93, "% full");
//! ```
//!
//! ## Named loggers
//! ```rust
//! use lvlog::{LevelLog, LogBuffer, Logger, parse_level};
//! use std::sync::Arc;
//!
//! let buffer = LogBuffer::new();
//! lvlog::register("db", Logger::new(buffer.clone(), parse_level("warn"), 3));
//!
//! let db = lvlog::get("db");
//! db.info(&[&"not written"]);
//! db.errorf(format_args!("query failed after {}ms", 250));
//! assert_eq!(buffer.lines().len(), 1);
//! assert!(buffer.contents().contains("[ERROR] query failed after 250ms"));
//!
//! // unknown names warn and hand back the fallback logger
//! let fallback = lvlog::get("cache");
//! assert!(Arc::ptr_eq(&fallback, &lvlog::registry().fallback()));
//! ```
//!
//! ## Replacing the root logger
//! ```rust
//! use lvlog::{Level, LogFile, Logger, ROOT, ROOT_DEPTH};
//!
//! let file = LogFile::new("/tmp/lvlog_doc_root.log").expect("Unable to create log file");
//! lvlog::register(ROOT, Logger::new(file, Level::Info, ROOT_DEPTH));
//! lvlog::info!("goes to the file");
//! lvlog::debug!("filtered out");
//! ```
//!
//! ## `log` crate records
//! ```rust
//! lvlog::init_log_bridge().expect("another logger is already installed");
//! log::info!("forwarded to the root logger");
//! ```

#[macro_use]
mod macros;
mod bridge;
mod level_log;
mod logger;
mod registry;

pub use bridge::init_log_bridge;
pub use level_log::{LevelLog, SharedLogger};
pub use logger::Logger;
pub use lvlog_core::{
    CallSite, LVLOG_CONFIG, Level, LogBuffer, LogFile, LogStderr, LogStdout, LvlogConfig,
    parse_level,
};
pub use registry::{FALLBACK_DEPTH, ROOT, ROOT_DEPTH, Registry};

use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use level_log::log_values;

/// Process-wide registry behind the package-level functions.
static GLOBAL_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let root = Logger::new(LogStderr, LVLOG_CONFIG.level(), ROOT_DEPTH)
        .with_color(LVLOG_CONFIG.color());
    let fallback = Logger::new(LogStderr, Level::All, FALLBACK_DEPTH);
    Registry::with_defaults(root, fallback)
});

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &GLOBAL_REGISTRY
}

/// Registers `logger` under `name` in the process-wide registry.
pub fn register(name: &str, logger: impl Into<SharedLogger>) {
    GLOBAL_REGISTRY.register(name, logger);
}

/// Looks up `name` in the process-wide registry, see [`Registry::get`].
#[track_caller]
pub fn get(name: &str) -> SharedLogger {
    GLOBAL_REGISTRY.get(name)
}

/// Current process-wide root logger.
pub fn root() -> SharedLogger {
    GLOBAL_REGISTRY.root()
}

// The call site is captured here and handed over explicitly, so attribution
// does not depend on how the root implementation is dispatched.
#[track_caller]
fn forward(level: Level, args: fmt::Arguments<'_>) {
    root().log_at(level, CallSite::caller(), args);
}

#[track_caller]
fn forward_values(level: Level, values: &[&dyn Display]) {
    log_values(&*root(), level, CallSite::caller(), values);
}

#[track_caller]
pub fn trace(values: &[&dyn Display]) {
    forward_values(Level::Trace, values);
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    forward(Level::Trace, args);
}

#[track_caller]
pub fn debug(values: &[&dyn Display]) {
    forward_values(Level::Debug, values);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    forward(Level::Debug, args);
}

#[track_caller]
pub fn info(values: &[&dyn Display]) {
    forward_values(Level::Info, values);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    forward(Level::Info, args);
}

#[track_caller]
pub fn warn(values: &[&dyn Display]) {
    forward_values(Level::Warn, values);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    forward(Level::Warn, args);
}

#[track_caller]
pub fn error(values: &[&dyn Display]) {
    forward_values(Level::Error, values);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    forward(Level::Error, args);
}

#[track_caller]
pub fn critical(values: &[&dyn Display]) {
    forward_values(Level::Critical, values);
}

#[track_caller]
pub fn criticalf(args: fmt::Arguments<'_>) {
    forward(Level::Critical, args);
}

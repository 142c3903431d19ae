use log::{LevelFilter, Log, SetLoggerError};
use lvlog_core::CallSite;

use crate::{level_log::LevelLog, registry};

/// Routes `log` records to the current root logger.
struct LvlogBridge;

impl Log for LvlogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        registry().root().enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let site = CallSite::new(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        );
        registry()
            .root()
            .log_at(record.level().into(), site, *record.args());
    }

    fn flush(&self) {}
}

/// Installs lvlog as the `log` crate backend.
///
/// Filtering stays with the root logger, so registering a new root later
/// also changes what `log::info!` and friends let through.
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LvlogBridge))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

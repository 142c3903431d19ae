//! # lvlog-core
//! Core utilities for lvlog - severity levels, line formatting and sinks.

mod config;
mod level;
mod log_writer;
mod utils;

pub use config::{LVLOG_CONFIG, LvlogConfig};
pub use level::{Level, parse_level};
pub use log_writer::{LogBuffer, LogFile, LogStderr, LogStdout};
pub use utils::{CallSite, format_line, format_line_at};

use std::panic::Location;

use chrono::{Local, NaiveDateTime};
use colored::Colorize;

use crate::level::Level;

/// Source location a line is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl CallSite<'static> {
    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// File name without its directories.
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

fn level_tag(level: Level, color: bool) -> String {
    let tag = level.tag();
    if !color {
        return tag.to_string();
    }
    match level {
        Level::Critical | Level::Error => tag.red().to_string(),
        Level::Warn => tag.yellow().to_string(),
        Level::Info => tag.green().to_string(),
        Level::Debug => tag.blue().to_string(),
        Level::Trace => tag.purple().to_string(),
        Level::Off | Level::All => tag.to_string(),
    }
}

/// Renders one sink line stamped with the current local time.
///
/// Layout: `2024/01/23 01:23:23.123123 main.rs:23: [INFO] message`, always
/// terminated by exactly one added newline unless `message` already ends
/// with one.
pub fn format_line(level: Level, site: CallSite<'_>, message: &str, color: bool) -> String {
    format_line_at(Local::now().naive_local(), level, site, message, color)
}

pub fn format_line_at(
    time: NaiveDateTime,
    level: Level,
    site: CallSite<'_>,
    message: &str,
    color: bool,
) -> String {
    let time = time.format("%Y/%m/%d %H:%M:%S%.6f");
    let tag = level_tag(level, color);
    let file = site.short_file();
    let line = site.line;
    let mut out = format!("{time} {file}:{line}: [{tag}] {message}");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 23)
            .unwrap()
            .and_hms_micro_opt(1, 23, 23, 123_123)
            .unwrap()
    }

    #[test]
    fn test_format_line_layout() {
        let site = CallSite::new("src/bin/main.rs", 23);
        let line = format_line_at(fixed_time(), Level::Info, site, "hello", false);
        assert_eq!(line, "2024/01/23 01:23:23.123123 main.rs:23: [INFO] hello\n");
    }

    #[test]
    fn test_format_line_keeps_single_newline() {
        let site = CallSite::new("lib.rs", 1);
        let line = format_line_at(fixed_time(), Level::Warn, site, "done\n", false);
        assert_eq!(line, "2024/01/23 01:23:23.123123 lib.rs:1: [WARN] done\n");
    }

    #[test]
    fn test_short_file_handles_windows_paths() {
        assert_eq!(CallSite::new(r"src\net\conn.rs", 9).short_file(), "conn.rs");
        assert_eq!(CallSite::new("plain.rs", 9).short_file(), "plain.rs");
    }

    #[test]
    fn test_caller_points_here() {
        let site = CallSite::caller();
        assert_eq!(site.short_file(), "utils.rs");
        assert_eq!(site.line, line!() - 2);
    }

    #[test]
    fn test_colored_line_still_carries_tag() {
        let site = CallSite::new("lib.rs", 1);
        let line = format_line(Level::Critical, site, "boom", true);
        assert!(line.contains("CRITICAL"));
        assert!(line.ends_with("] boom\n"));
    }
}

use std::{convert::Infallible, fmt, str::FromStr};

/// Severity of a log call, also used as a logger threshold.
///
/// Ordered from least to most permissive: a logger with threshold `t`
/// emits a message of severity `s` iff `t >= s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Suppresses everything.
    Off = 0,
    Critical,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    /// Permits everything.
    All,
}

impl Level {
    /// Uppercase tag written between brackets on each line.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::All => "ALL",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Off => "off",
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
            Level::All => "all",
        }
    }
}

/// Parses a level name, ignoring case.
///
/// Never fails: any name outside `off`, `critical`, `error`, `warn`, `info`,
/// `debug` and `trace` (including `all` and the empty string) yields
/// [`Level::All`].
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "off" => Level::Off,
        "critical" => Level::Critical,
        "error" => Level::Error,
        "warn" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => Level::All,
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Off => log::LevelFilter::Off,
            Level::Critical | Level::Error => log::LevelFilter::Error,
            Level::Warn => log::LevelFilter::Warn,
            Level::Info => log::LevelFilter::Info,
            Level::Debug => log::LevelFilter::Debug,
            Level::Trace | Level::All => log::LevelFilter::Trace,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

/// Logs the `Display` renderings of the arguments, joined with no separator, at TRACE.
///
/// A leading `logger: <expr>,` targets that logger instead of the root logger.
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.trace(&[])
    }};
    (logger: $logger:expr, $($value:expr),+ $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.trace(&[$(&$value as &dyn ::std::fmt::Display),+])
    }};
    ($($value:expr),* $(,)?) => {
        $crate::trace(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Logs a `format!`-style message at TRACE.
///
/// A leading `logger: <expr>,` targets that logger instead of the root logger.
#[macro_export]
macro_rules! tracef {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::LevelLog as _;
        $logger.tracef(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::tracef(::std::format_args!($($arg)+))
    };
}

/// Plain DEBUG call, see [`trace!`].
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.debug(&[])
    }};
    (logger: $logger:expr, $($value:expr),+ $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),+])
    }};
    ($($value:expr),* $(,)?) => {
        $crate::debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted DEBUG call, see [`tracef!`].
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::LevelLog as _;
        $logger.debugf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Plain INFO call, see [`trace!`].
#[macro_export]
macro_rules! info {
    (logger: $logger:expr $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.info(&[])
    }};
    (logger: $logger:expr, $($value:expr),+ $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),+])
    }};
    ($($value:expr),* $(,)?) => {
        $crate::info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted INFO call, see [`tracef!`].
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::LevelLog as _;
        $logger.infof(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Plain WARN call, see [`trace!`].
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.warn(&[])
    }};
    (logger: $logger:expr, $($value:expr),+ $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.warn(&[$(&$value as &dyn ::std::fmt::Display),+])
    }};
    ($($value:expr),* $(,)?) => {
        $crate::warn(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted WARN call, see [`tracef!`].
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::LevelLog as _;
        $logger.warnf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Plain ERROR call, see [`trace!`].
#[macro_export]
macro_rules! error {
    (logger: $logger:expr $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.error(&[])
    }};
    (logger: $logger:expr, $($value:expr),+ $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),+])
    }};
    ($($value:expr),* $(,)?) => {
        $crate::error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted ERROR call, see [`tracef!`].
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::LevelLog as _;
        $logger.errorf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Plain CRITICAL call, see [`trace!`].
#[macro_export]
macro_rules! critical {
    (logger: $logger:expr $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.critical(&[])
    }};
    (logger: $logger:expr, $($value:expr),+ $(,)?) => {{
        use $crate::LevelLog as _;
        $logger.critical(&[$(&$value as &dyn ::std::fmt::Display),+])
    }};
    ($($value:expr),* $(,)?) => {
        $crate::critical(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted CRITICAL call, see [`tracef!`].
#[macro_export]
macro_rules! criticalf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::LevelLog as _;
        $logger.criticalf(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::criticalf(::std::format_args!($($arg)+))
    };
}

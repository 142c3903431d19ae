use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use lvlog_core::{CallSite, Level, LogStderr};

use crate::{
    level_log::{LevelLog, SharedLogger},
    logger::Logger,
};

/// Reserved name that swaps the root logger instead of adding an entry.
pub const ROOT: &str = "root";
/// Caller depth of the root logger, reached through one forwarding function.
pub const ROOT_DEPTH: usize = 4;
/// Caller depth of the fallback logger returned to direct callers.
pub const FALLBACK_DEPTH: usize = 3;

/// Named loggers plus the root and fallback slots.
pub struct Registry {
    loggers: RwLock<HashMap<String, SharedLogger>>,
    root: RwLock<SharedLogger>,
    fallback: SharedLogger,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry whose root and fallback both write everything to stderr.
    pub fn new() -> Self {
        Self::with_defaults(
            Logger::new(LogStderr, Level::All, ROOT_DEPTH),
            Logger::new(LogStderr, Level::All, FALLBACK_DEPTH),
        )
    }

    pub fn with_defaults(root: impl Into<SharedLogger>, fallback: impl Into<SharedLogger>) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            root: RwLock::new(root.into()),
            fallback: fallback.into(),
        }
    }

    /// Stores `logger` under `name`, replacing any previous entry.
    /// [`ROOT`] replaces the root logger and is never added to the mapping.
    pub fn register(&self, name: &str, logger: impl Into<SharedLogger>) {
        let logger = logger.into();
        if name == ROOT {
            *self.root.write().unwrap_or_else(PoisonError::into_inner) = logger;
        } else {
            self.loggers
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(name.to_string(), logger);
        }
    }

    /// Looks up `name`. On a miss, warns through the fallback logger and
    /// returns it.
    #[track_caller]
    pub fn get(&self, name: &str) -> SharedLogger {
        let found = self
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned();
        match found {
            Some(logger) => logger,
            None => {
                self.fallback.log_at(
                    Level::Warn,
                    CallSite::caller(),
                    format_args!("can find {name}, return default"),
                );
                Arc::clone(&self.fallback)
            }
        }
    }

    pub fn root(&self) -> SharedLogger {
        Arc::clone(&self.root.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn fallback(&self) -> SharedLogger {
        Arc::clone(&self.fallback)
    }

    /// Registered names, sorted. The root slot is not included.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvlog_core::LogBuffer;
    use std::thread;

    fn test_registry() -> (Registry, LogBuffer, LogBuffer) {
        let root = LogBuffer::new();
        let fallback = LogBuffer::new();
        let registry = Registry::with_defaults(
            Logger::new(root.clone(), Level::All, ROOT_DEPTH),
            Logger::new(fallback.clone(), Level::All, FALLBACK_DEPTH),
        );
        (registry, root, fallback)
    }

    #[test]
    fn test_register_then_get_returns_same_logger() {
        let (registry, _, fallback) = test_registry();
        let svc: SharedLogger = Arc::new(Logger::new(LogBuffer::new(), Level::Info, 3));
        registry.register("svc", Arc::clone(&svc));
        assert!(Arc::ptr_eq(&registry.get("svc"), &svc));
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_last_registration_wins() {
        let (registry, _, _) = test_registry();
        let first: SharedLogger = Arc::new(Logger::new(LogBuffer::new(), Level::Info, 3));
        let second: SharedLogger = Arc::new(Logger::new(LogBuffer::new(), Level::Warn, 3));
        registry.register("svc", Arc::clone(&first));
        registry.register("svc", Arc::clone(&second));
        assert!(Arc::ptr_eq(&registry.get("svc"), &second));
        assert_eq!(registry.names(), vec!["svc"]);
    }

    #[test]
    fn test_unknown_name_warns_and_returns_fallback() {
        let (registry, root, fallback) = test_registry();
        let logger = registry.get("unknown-name");
        assert!(Arc::ptr_eq(&logger, &registry.fallback()));
        let lines = fallback.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN] "));
        assert!(lines[0].contains("can find unknown-name"));
        assert!(lines[0].contains(" registry.rs:"));
        assert!(root.is_empty());

        logger.info(&[&"still usable"]);
        assert_eq!(fallback.lines().len(), 2);
    }

    #[test]
    fn test_register_root_replaces_root_slot() {
        let (registry, root, _) = test_registry();
        let replacement = LogBuffer::new();
        let l2: SharedLogger = Arc::new(Logger::new(replacement.clone(), Level::All, ROOT_DEPTH));
        registry.register(ROOT, Arc::clone(&l2));
        assert!(Arc::ptr_eq(&registry.root(), &l2));
        assert!(registry.names().is_empty());

        registry.root().info(&[&"routed"]);
        assert!(root.is_empty());
        assert!(replacement.contents().contains("[INFO] routed"));
    }

    #[test]
    fn test_root_is_not_reachable_by_name() {
        let (registry, _, fallback) = test_registry();
        let logger = registry.get(ROOT);
        assert!(Arc::ptr_eq(&logger, &registry.fallback()));
        assert!(fallback.contents().contains("can find root"));
    }

    #[test]
    fn test_default_registry_uses_stderr_defaults() {
        let registry = Registry::default();
        assert!(registry.root().enabled(Level::All));
        assert!(registry.fallback().enabled(Level::All));
        assert!(!Arc::ptr_eq(&registry.root(), &registry.fallback()));
    }

    /// Counts accepted messages per level instead of writing lines.
    #[derive(Default)]
    struct Counter {
        warnings: std::sync::atomic::AtomicUsize,
        others: std::sync::atomic::AtomicUsize,
    }

    impl LevelLog for Counter {
        fn enabled(&self, level: Level) -> bool {
            level <= Level::Info
        }

        fn log_at(&self, level: Level, _: CallSite<'_>, _: std::fmt::Arguments<'_>) {
            use std::sync::atomic::Ordering::Relaxed;
            match level {
                Level::Warn => self.warnings.fetch_add(1, Relaxed),
                _ => self.others.fetch_add(1, Relaxed),
            };
        }
    }

    #[test]
    fn test_custom_implementation_as_named_root_and_fallback() {
        use std::sync::atomic::Ordering::Relaxed;

        let root = Arc::new(Counter::default());
        let fallback = Arc::new(Counter::default());
        let registry = Registry::with_defaults(
            Arc::clone(&root) as SharedLogger,
            Arc::clone(&fallback) as SharedLogger,
        );
        let named = Arc::new(Counter::default());
        registry.register("custom", Arc::clone(&named) as SharedLogger);

        registry.get("custom").warnf(format_args!("w"));
        registry.get("custom").error(&[&"e"]);
        assert_eq!(named.warnings.load(Relaxed), 1);
        assert_eq!(named.others.load(Relaxed), 1);

        registry.root().info(&[&"i"]);
        assert_eq!(root.others.load(Relaxed), 1);

        registry.get("missing");
        assert_eq!(fallback.warnings.load(Relaxed), 1);
    }

    #[test]
    fn test_concurrent_register_and_get() {
        let (registry, _, _) = test_registry();
        let registry = Arc::new(registry);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let name = format!("svc-{i}");
                    let logger: SharedLogger = Arc::new(Logger::new(LogBuffer::new(), Level::Info, 3));
                    registry.register(&name, Arc::clone(&logger));
                    assert!(Arc::ptr_eq(&registry.get(&name), &logger));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(registry.names().len(), 8);
    }
}

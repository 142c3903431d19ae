use std::sync::Arc;

use lvlog::{Level, LogFile, LogStderr, Logger, ROOT, ROOT_DEPTH, parse_level};

fn main() {
    // root logger: stderr, info and above
    lvlog::register(ROOT, Logger::new(LogStderr, Level::Info, ROOT_DEPTH).with_color(true));
    lvlog::infof!("starting with {} workers", 4);
    lvlog::debug!("not shown");

    // per-subsystem loggers, thresholds taken from configuration strings
    let db_file = "/tmp/lvlog_example_db.log";
    let _ = std::fs::remove_file(db_file);
    lvlog::register(
        "db",
        Logger::new(LogFile::new(db_file).unwrap(), parse_level("DEBUG"), 3),
    );
    lvlog::register("net", Logger::new(LogStderr, parse_level("warn"), 3));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let db = lvlog::get("db");
                let net = lvlog::get("net");
                lvlog::debugf!(logger: db, "worker {i} opened a connection");
                lvlog::info!(logger: net, "worker ", i, " connected");
                lvlog::warnf!(logger: net, "worker {i} saw a slow handshake");
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // unknown names fall back to the default logger
    let cache = lvlog::get("cache");
    assert!(Arc::ptr_eq(&cache, &lvlog::registry().fallback()));

    let written = std::fs::read_to_string(db_file).unwrap();
    lvlog::infof!("{} lines in {db_file}", written.lines().count());
}

use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::level::{Level, parse_level};

// Both fields are read as strings so that no value can fail the whole
// struct; each one is interpreted on its own.
#[derive(FromEnv)]
#[from_env(prefix = "LVLOG")]
#[allow(non_snake_case)]
pub struct LvlogConfig {
    #[from_env(default = "all")]
    pub LEVEL: String,
    #[from_env(default = "false")]
    pub COLOR: String,
}

impl Default for LvlogConfig {
    fn default() -> Self {
        Self {
            LEVEL: "all".into(),
            COLOR: "false".into(),
        }
    }
}

impl LvlogConfig {
    /// Threshold for the default root logger.
    pub fn level(&self) -> Level {
        parse_level(&self.LEVEL)
    }

    /// `1`, `true`, `yes` and `on` (any case) enable colour; anything else
    /// leaves it off.
    pub fn color(&self) -> bool {
        matches!(
            self.COLOR.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }
}

pub static LVLOG_CONFIG: LazyLock<LvlogConfig> =
    LazyLock::new(|| LvlogConfig::from_env().unwrap_or_default());

#[test]
fn test_default_config() {
    let config = LvlogConfig::default();
    assert_eq!(config.level(), Level::All);
    assert!(!config.color());
}

#[test]
fn test_color_values() {
    let with = |color: &str| LvlogConfig {
        COLOR: color.into(),
        ..LvlogConfig::default()
    };
    for on in ["1", "true", "TRUE", "yes", " on "] {
        assert!(with(on).color(), "{on:?}");
    }
    for off in ["0", "false", "", "nope"] {
        assert!(!with(off).color(), "{off:?}");
    }
}

// Only test in this crate that touches the process environment.
#[test]
fn test_level_read_independently_of_color() {
    unsafe {
        std::env::set_var("LVLOG_LEVEL", "error");
        std::env::set_var("LVLOG_COLOR", "1");
    }
    let config = LvlogConfig::from_env().unwrap_or_default();
    assert_eq!(config.level(), Level::Error);
    assert!(config.color());

    unsafe {
        std::env::set_var("LVLOG_COLOR", "maybe");
    }
    let config = LvlogConfig::from_env().unwrap_or_default();
    assert_eq!(config.level(), Level::Error);
    assert!(!config.color());

    unsafe {
        std::env::remove_var("LVLOG_LEVEL");
        std::env::remove_var("LVLOG_COLOR");
    }
}

//! XDG-style path utilities for the settings file and the response cache.

use std::path::PathBuf;

/// Returns the configuration directory for quicktr.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/quicktr` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/quicktr` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("quicktr"),
        |xdg| PathBuf::from(xdg).join("quicktr"),
    )
}

/// Returns the cache directory for quicktr.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/quicktr` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/quicktr` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join("quicktr"),
        |xdg| PathBuf::from(xdg).join("quicktr"),
    )
}

#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir();
        assert!(dir.ends_with(".config/quicktr"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/quicktr"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_cache_dir_default() {
        let original = std::env::var("XDG_CACHE_HOME").ok();
        unsafe { std::env::remove_var("XDG_CACHE_HOME") };

        let dir = cache_dir();
        assert!(dir.ends_with(".cache/quicktr"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CACHE_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_cache_dir_xdg_override() {
        let original = std::env::var("XDG_CACHE_HOME").ok();
        unsafe { std::env::set_var("XDG_CACHE_HOME", "/custom/cache") };

        let dir = cache_dir();
        assert_eq!(dir, PathBuf::from("/custom/cache/quicktr"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CACHE_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CACHE_HOME") };
        }
    }
}

//! Application helpers

use crate::core::{LoggerError, Result};
use std::env;
use std::path::PathBuf;

/// Directory holding the configuration files of `app_name`
///
/// - Windows: `%AppData%\<app_name>`
/// - elsewhere: `$XDG_CONFIG_HOME/<app_name>`, or `$HOME/.config/<app_name>`
///   when `XDG_CONFIG_HOME` is unset or empty
pub fn user_config_dir(app_name: &str) -> Result<PathBuf> {
    let base = if cfg!(windows) {
        PathBuf::from(env::var_os("AppData").unwrap_or_default())
    } else {
        match env::var_os("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
            Some(xdg) => PathBuf::from(xdg),
            None => home_dir()?.join(".config"),
        }
    };

    Ok(base.join(app_name))
}

fn home_dir() -> Result<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| LoggerError::config("user_config_dir", "$HOME is not defined"))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    // Environment variables are process-wide, so both cases share one test.
    #[test]
    fn test_user_config_dir() {
        let saved_xdg = env::var_os("XDG_CONFIG_HOME");
        let saved_home = env::var_os("HOME");

        env::set_var("XDG_CONFIG_HOME", "/tmp/xdg");
        assert_eq!(user_config_dir("demo").unwrap(), PathBuf::from("/tmp/xdg/demo"));

        env::set_var("XDG_CONFIG_HOME", "");
        env::set_var("HOME", "/home/someone");
        assert_eq!(
            user_config_dir("demo").unwrap(),
            PathBuf::from("/home/someone/.config/demo")
        );

        env::remove_var("XDG_CONFIG_HOME");
        env::remove_var("HOME");
        assert!(user_config_dir("demo").is_err());

        match saved_xdg {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        match saved_home {
            Some(v) => env::set_var("HOME", v),
            None => env::remove_var("HOME"),
        }
    }
}

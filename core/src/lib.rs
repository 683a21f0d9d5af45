use std::path::PathBuf;

use errors::DirectoryError;

pub mod config;
pub mod errors;
pub mod logger;
#[cfg(feature = "area_lookup")]
pub mod lookup;
pub mod operations;

pub use mbset_types as types;

/// Get the config directory for mbset.
///
/// | Platform | Value                                                                 | Example                                                     |
/// | -------- | --------------------------------------------------------------------- | ----------------------------------------------------------- |
/// | Linux    | `$XDG_CONFIG_HOME`/`_project_path_` or `$HOME`/.config/`_project_path_` | /home/alice/.config/mbset                                   |
/// | macOS    | `$HOME`/Library/Application Support/`_project_path_`                  | /Users/Alice/Library/Application Support/mbset              |
/// | Windows  | `{FOLDERID_RoamingAppData}`\\`_project_path_`\\config                 | C:\Users\Alice\AppData\Roaming\mbset\config                 |
///
/// # Errors
///
/// This function will return an error if the config directory could not be found.
#[inline]
pub fn get_config_dir() -> Result<PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "mbset")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

/// Format a duration as `seconds.milliseconds`, as used in log lines.
#[must_use]
#[inline]
pub fn format_duration(duration: &std::time::Duration) -> String {
    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}

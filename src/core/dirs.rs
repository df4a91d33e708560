use crate::core::error::PorcelainError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, PorcelainError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(PorcelainError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .map(|home| home.join("Library/Application Support"))
            .ok_or(PorcelainError::ConfigDirectoryNotFound)?,
        _ => dirs::config_dir().ok_or(PorcelainError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("porcelain"))
}

pub fn get_config_file() -> Result<PathBuf, PorcelainError> {
    Ok(get_config_directory()?.join("config.json"))
}

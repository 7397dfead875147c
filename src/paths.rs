use crate::error::{AppError, Result};
use std::path::PathBuf;

const CONF_FILE: &str = "netrepair.json";
const HOME_ENV: &str = "NETREPAIR_HOME";

pub fn install_root() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if home.trim().is_empty() {
            return Err(AppError::Config(
                "NETREPAIR_HOME is set but empty".to_string(),
            ));
        }
        return Ok(PathBuf::from(home));
    }

    let exe_path = std::env::current_exe()?;
    let exe_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Config("Failed to resolve executable directory".to_string()))?;
    Ok(exe_dir.to_path_buf())
}

pub fn conf_path() -> Result<PathBuf> {
    Ok(install_root()?.join(CONF_FILE))
}

use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typer").map(|pd| pd.config_dir().join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("typer");
            Some(state_dir.join("typer.log"))
        } else {
            ProjectDirs::from("", "", "typer")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("typer.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_use_expected_file_names() {
        if let Some(path) = AppDirs::config_path() {
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = AppDirs::log_path() {
            assert!(path.ends_with("typer.log"));
        }
    }
}

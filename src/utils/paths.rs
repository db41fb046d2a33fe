//! Project directories and version string

use std::path::PathBuf;

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "hawkshield", env!("CARGO_PKG_NAME"))
}

/// `$HAWKDECK_DATA`, else the platform data dir, else `./.data`
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = DATA_FOLDER.clone() {
        dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// `$HAWKDECK_CONFIG`, else the platform config dir, else `./.config`
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = CONFIG_FOLDER.clone() {
        dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

const VERSION_MESSAGE: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("CARGO_PKG_NAME"));

pub fn version() -> String {
    let author = clap::crate_authors!();
    let commit = option_env!("_GIT_INFO").unwrap_or("unknown");

    format!(
        "\
{VERSION_MESSAGE} ({commit})

Authors: {author}

Config directory: {}
Data directory: {}",
        get_config_dir().display(),
        get_data_dir().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_names() {
        assert_eq!(PROJECT_NAME.as_str(), "HAWKDECK");
        assert_eq!(LOG_ENV.as_str(), "HAWKDECK_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "hawkdeck.log");
    }

    #[test]
    fn test_version_mentions_directories() {
        let version = version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains("Config directory:"));
    }
}

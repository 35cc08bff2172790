use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base directory set through `MOVIESTATS_BASE_PATH`, if any. Empty values count as unset.
pub fn container_base_path() -> Option<PathBuf> {
    std::env::var_os("MOVIESTATS_BASE_PATH")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// An explicit base wins, then `<platform config dir>/moviestats`, then
/// `.moviestats` under the working directory.
fn select_base(explicit: Option<PathBuf>, platform_config_dir: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| platform_config_dir.map(|dir| dir.join("moviestats")))
        .unwrap_or_else(|| PathBuf::from(".moviestats"))
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    /// Config files at the base, data and logs in subdirectories
    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn default_reviews_file(&self) -> PathBuf {
        self.data_dir.join("ratings.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("moviestats.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // e.g. ~/.config/moviestats on Linux unless MOVIESTATS_BASE_PATH is set
        Self::from_base(select_base(container_base_path(), dirs::config_dir()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::from_base(PathBuf::from("/srv/moviestats"));

        assert_eq!(paths.config_file(), PathBuf::from("/srv/moviestats/config.toml"));
        assert_eq!(paths.default_reviews_file(), PathBuf::from("/srv/moviestats/data/ratings.json"));
        assert_eq!(paths.log_file(), PathBuf::from("/srv/moviestats/logs/moviestats.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path().join("base"));

        paths.ensure_directories().unwrap();

        assert!(paths.config_file().parent().unwrap().is_dir());
        assert!(paths.data_dir().is_dir());
        assert!(paths.log_file().parent().unwrap().is_dir());
    }

    #[test]
    fn test_select_base_prefers_explicit_path() {
        let base = select_base(Some(PathBuf::from("/srv/stats")), Some(PathBuf::from("/home/u/.config")));
        assert_eq!(base, PathBuf::from("/srv/stats"));
    }

    #[test]
    fn test_select_base_falls_back_to_platform_dir() {
        let base = select_base(None, Some(PathBuf::from("/home/u/.config")));
        assert_eq!(base, PathBuf::from("/home/u/.config/moviestats"));

        assert_eq!(select_base(None, None), PathBuf::from(".moviestats"));
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "Launch Dock";
pub const DEFAULT_TAGLINE: &str = "tagline here";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "launchdock-data";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockConfig {
    #[serde(default)]
    pub dock: DockSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub app_name: String,
    pub tagline: String,
    pub google_calendar_url: String,
    pub export_file_name: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            google_calendar_url: String::new(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl DockConfig {
    pub fn new(data_path: &Path) -> Self {
        Self {
            dock: DockSection {
                data_path: Some(data_path.to_string_lossy().to_string()),
            },
            ui: UiSection::default(),
        }
    }

    /// Base name for export files; blank values fall back to the default.
    pub fn export_base_name(&self) -> &str {
        let name = self.ui.export_file_name.trim();
        if name.is_empty() {
            DEFAULT_EXPORT_FILE_NAME
        } else {
            name
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("dock.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DockConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &DockConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("dock"));
        }
    }
    Ok(home_dir()?.join(".config").join("dock"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("dock"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("dock"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: DockConfig = toml::from_str("[ui]\ntagline = \"hello\"\n").unwrap();
        assert_eq!(config.ui.tagline, "hello");
        assert_eq!(config.ui.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.export_base_name(), DEFAULT_EXPORT_FILE_NAME);
        assert!(config.dock.data_path.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dock").join("config.toml");
        let mut config = DockConfig::new(Path::new("/tmp/dock.json"));
        config.ui.export_file_name = "backup".to_string();

        write_config(&path, &config).unwrap();
        let read = read_config(&path).unwrap();

        assert_eq!(read.dock.data_path.as_deref(), Some("/tmp/dock.json"));
        assert_eq!(read.export_base_name(), "backup");
    }

    #[test]
    fn test_blank_export_name_uses_default() {
        let mut config = DockConfig::default();
        config.ui.export_file_name = "  ".to_string();
        assert_eq!(config.export_base_name(), DEFAULT_EXPORT_FILE_NAME);
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ostdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OstdlConfig {
    /// Base directory for downloads; each album is written to
    /// `<download_dir>/<slug>`.
    pub download_dir: PathBuf,
    /// Accepted extensions, matched case-sensitively against the raw link.
    /// Empty means the automatic flac > mp3 > ogg cascade.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Directory for JSON progress snapshots; default is the XDG state dir.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

impl Default for OstdlConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("downloads"),
            extensions: Vec::new(),
            state_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ostdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Snapshot directory used when the config does not override it.
pub fn default_state_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ostdl")?;
    Ok(xdg_dirs.get_state_home())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OstdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OstdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OstdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

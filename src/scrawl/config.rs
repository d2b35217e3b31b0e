use crate::error::{Result, ScrawlError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const LOCAL_CONFIG_FILENAME: &str = "scrawl.json";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 << 20;

/// Server configuration, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrawlConfig {
    /// Address the web server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory holding one file per item
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Request body cap for `/submit_file`
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

impl Default for ScrawlConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            data_dir: default_data_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ScrawlConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(config_path)
    }

    /// Load config from an explicit file. The file must exist.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(ScrawlError::Io)?;
        let config: ScrawlConfig =
            serde_json::from_str(&content).map_err(ScrawlError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config the way the binary does: explicit file, then
    /// `./scrawl.json`, then the platform config dir, then defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let local = cwd.join(LOCAL_CONFIG_FILENAME);
        if local.exists() {
            return Self::load_file(local);
        }

        match global_config_dir() {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ScrawlError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ScrawlError::Serialization)?;
        fs::write(config_path, content).map_err(ScrawlError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(ScrawlError::Config(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Platform config directory, e.g. `~/.config/scrawl` on Linux.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "scrawl", "scrawl").map(|dirs| dirs.config_dir().to_path_buf())
}

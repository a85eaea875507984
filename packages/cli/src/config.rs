use reprgen_generator::Target;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "reprgen.config.json";

/// Reprgen configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory scanned for marked types
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory receiving generated fragments
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub target: Target,

    /// Declaration snapshot (JSON) to read instead of scanning `srcDir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "generated".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let config_path = root.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_src_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir)
    }

    pub fn get_snapshot(&self, root: &Path) -> Option<PathBuf> {
        self.snapshot.as_ref().map(|path| root.join(path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            target: Target::default(),
            snapshot: None,
        }
    }
}

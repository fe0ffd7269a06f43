use crate::analysis::AnalyzeOptions;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub sketch_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

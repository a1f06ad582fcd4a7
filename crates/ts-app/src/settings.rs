//! Loading operator presets from disk.

use std::path::Path;

use crate::controls::ControlSettings;
use crate::error::{AppError, AppResult};

/// Reads a YAML or JSON preset; omitted fields keep their defaults.
pub fn load_settings(path: &Path) -> AppResult<ControlSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let settings = match ext.as_deref() {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    tracing::debug!(path = %path.display(), "loaded settings preset");
    Ok(settings)
}

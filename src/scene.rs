use crate::config::LauncherConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Unable to read scene override file: {0}")]
    Io(#[from] std::io::Error),
}

/// Pick the scene file to open. The override file wins when it names one,
/// otherwise fall back to the default scene in the working directory.
///
/// A missing override file is the normal case. Any other read failure is not
/// ours to guess about and propagates instead.
pub fn resolve(config: &LauncherConfig) -> Result<PathBuf, SceneError> {
    let override_path = config.working_dir.join(&config.override_name);
    match fs::read_to_string(&override_path) {
        Ok(content) => match first_entry(&content) {
            Some(line) => {
                debug!("scene override: {}", line);
                Ok(PathBuf::from(line))
            }
            None => Ok(config.default_scene_path()),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(config.default_scene_path()),
        Err(e) => Err(SceneError::Io(e)),
    }
}

// first line that isn't blank and isn't a comment, trimmed.
fn first_entry(content: &str) -> Option<&str> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
}

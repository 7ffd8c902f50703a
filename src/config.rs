use crate::platform::PlatformTarget;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::Result;
use std::path::{Path, PathBuf};

const DEFAULT_SCENE_NAME: &str = "test_file.blend";
const OVERRIDE_NAME: &str = "test_file_path.txt";
const SCRIPT_NAME: &str = "custom_render_engine.py";

/// Window position and size handed to blender through -p.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPlacement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowPlacement {
    fn default() -> Self {
        WindowPlacement {
            x: 0,
            y: 0,
            width: 960,
            height: 960,
        }
    }
}

/// Everything the launcher reads from the outside world, gathered up front.
/// Resolution code only ever looks in here, so tests can point the whole
/// launcher at a scratch directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    pub platform: PlatformTarget,
    pub working_dir: PathBuf,
    /// 64-bit program files root (ProgramW6432). Only consulted on windows.
    pub program_files_dir: Option<PathBuf>,
    /// Scene to open when the override file doesn't name one.
    pub default_scene_name: String,
    /// Optional plain-text file in the working directory naming the scene.
    pub override_name: String,
    /// Render engine script passed to blender via --python.
    pub script_name: String,
    /// Prefer blender-launcher.exe over blender.exe on windows.
    pub prefer_launcher_binary: bool,
    pub placement: WindowPlacement,
    /// Skip the user's startup file and preferences.
    pub factory_startup: bool,
}

impl LauncherConfig {
    /// Fixed defaults rooted at the given working directory.
    pub fn new(platform: PlatformTarget, working_dir: impl AsRef<Path>) -> Self {
        LauncherConfig {
            platform,
            working_dir: working_dir.as_ref().to_path_buf(),
            program_files_dir: None,
            default_scene_name: DEFAULT_SCENE_NAME.to_owned(),
            override_name: OVERRIDE_NAME.to_owned(),
            script_name: SCRIPT_NAME.to_owned(),
            prefer_launcher_binary: false,
            placement: WindowPlacement::default(),
            factory_startup: true,
        }
    }

    /// Gather the launcher inputs from the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(PlatformTarget::from_host(), env::current_dir()?);
        config.program_files_dir = env::var_os("ProgramW6432").map(PathBuf::from);
        Ok(config)
    }

    pub fn default_scene_path(&self) -> PathBuf {
        self.working_dir.join(&self.default_scene_name)
    }

    pub fn script_path(&self) -> PathBuf {
        self.working_dir.join(&self.script_name)
    }
}

use crate::config::LauncherConfig;
use crate::platform::PlatformTarget;
use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const VENDOR_DIR: &str = "Blender Foundation";
const WINDOWS_EXEC: &str = "blender.exe";
const WINDOWS_LAUNCHER_EXEC: &str = "blender-launcher.exe";
const LINUX_EXEC: &str = "blender";

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Unsupported operating system!")]
    UnsupportedPlatform,
    #[error("ProgramW6432 is not set - unable to locate program files!")]
    MissingProgramFiles,
    #[error("No blender installation found under {0:?}")]
    NoInstallFound(PathBuf),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolved blender installation. Holds the path to the executable and, when
/// the install directory name told us one, the version installed there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blender {
    /// Path to blender executable on the system. On linux this is the bare
    /// program name, left for the OS to find through PATH.
    pub executable: PathBuf,
    pub version: Option<Version>,
}

impl Blender {
    /// Find the blender executable for the configured platform.
    ///
    /// # Examples
    /// ```
    /// use blender_launcher::blender::Blender;
    /// use blender_launcher::config::LauncherConfig;
    /// use blender_launcher::platform::PlatformTarget;
    /// let config = LauncherConfig::new(PlatformTarget::Linux, "/tmp");
    /// let blender = Blender::locate(&config).unwrap();
    /// ```
    pub fn locate(config: &LauncherConfig) -> Result<Self, LocateError> {
        match config.platform {
            PlatformTarget::Windows => Self::locate_windows(config),
            PlatformTarget::Linux => Ok(Blender {
                executable: PathBuf::from(LINUX_EXEC),
                version: None,
            }),
            PlatformTarget::Unsupported => Err(LocateError::UnsupportedPlatform),
        }
    }

    /// Walk the vendor directory under program files and take the newest
    /// install. Directory listing order is not reproducible, so sort by the
    /// version baked into the directory name instead of trusting it.
    fn locate_windows(config: &LauncherConfig) -> Result<Self, LocateError> {
        let root = config
            .program_files_dir
            .as_ref()
            .ok_or(LocateError::MissingProgramFiles)?;
        let vendor = root.join(VENDOR_DIR);

        // install directories are named "Blender 4.1" and the like - anything
        // else living under the vendor directory is ignored.
        let pattern = Regex::new(r"^Blender (\d+)\.(\d+)$").unwrap();

        let mut installs: Vec<(Version, PathBuf)> = fs::read_dir(&vendor)?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let name = entry.file_name().into_string().ok()?;
                let caps = pattern.captures(&name)?;
                let (_, [major, minor]) = caps.extract();
                let version = Version::new(major.parse().ok()?, minor.parse().ok()?, 0);
                Some((version, entry.path()))
            })
            .collect();

        installs.sort_by(|a, b| b.0.cmp(&a.0));
        let (version, dir) = installs
            .into_iter()
            .next()
            .ok_or_else(|| LocateError::NoInstallFound(vendor.clone()))?;

        let binary = match config.prefer_launcher_binary {
            true => WINDOWS_LAUNCHER_EXEC,
            false => WINDOWS_EXEC,
        };

        debug!("found blender {} under {:?}", version, dir);
        Ok(Blender {
            executable: dir.join(binary),
            version: Some(version),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn windows_config(root: &TempDir) -> LauncherConfig {
        let mut config = LauncherConfig::new(PlatformTarget::Windows, root.path());
        config.program_files_dir = Some(root.path().to_path_buf());
        config
    }

    fn install_version(root: &TempDir, name: &str) {
        fs::create_dir_all(root.path().join(VENDOR_DIR).join(name)).unwrap();
    }

    #[test]
    fn linux_resolves_to_the_bare_program_name() {
        let config = LauncherConfig::new(PlatformTarget::Linux, "/tmp");
        let blender = Blender::locate(&config).unwrap();
        assert_eq!(blender.executable, PathBuf::from("blender"));
        assert_eq!(blender.version, None);
    }

    #[test]
    fn unsupported_platform_refuses_to_resolve() {
        let config = LauncherConfig::new(PlatformTarget::Unsupported, "/tmp");
        let result = Blender::locate(&config);
        assert!(matches!(result, Err(LocateError::UnsupportedPlatform)));
    }

    #[test]
    fn windows_without_program_files_fails() {
        let mut config = LauncherConfig::new(PlatformTarget::Windows, "/tmp");
        config.program_files_dir = None;
        let result = Blender::locate(&config);
        assert!(matches!(result, Err(LocateError::MissingProgramFiles)));
    }

    #[test]
    fn newest_install_wins_over_directory_order() {
        let root = TempDir::new().unwrap();
        install_version(&root, "Blender 3.6");
        install_version(&root, "Blender 4.1");
        install_version(&root, "Blender 2.93");

        let blender = Blender::locate(&windows_config(&root)).unwrap();
        assert_eq!(blender.version, Some(Version::new(4, 1, 0)));
        assert_eq!(
            blender.executable,
            root.path()
                .join(VENDOR_DIR)
                .join("Blender 4.1")
                .join("blender.exe")
        );
    }

    #[test]
    fn stray_entries_in_the_vendor_directory_are_ignored() {
        let root = TempDir::new().unwrap();
        install_version(&root, "Blender 3.6");
        install_version(&root, "cache");
        install_version(&root, "Blender Launcher Shortcuts");

        let blender = Blender::locate(&windows_config(&root)).unwrap();
        assert_eq!(blender.version, Some(Version::new(3, 6, 0)));
    }

    #[test]
    fn vendor_directory_with_no_installs_fails() {
        let root = TempDir::new().unwrap();
        install_version(&root, "junk");

        let result = Blender::locate(&windows_config(&root));
        assert!(matches!(result, Err(LocateError::NoInstallFound(_))));
    }

    #[test]
    fn launcher_binary_preference_is_honored() {
        let root = TempDir::new().unwrap();
        install_version(&root, "Blender 4.1");

        let mut config = windows_config(&root);
        config.prefer_launcher_binary = true;
        let blender = Blender::locate(&config).unwrap();
        assert!(blender.executable.ends_with("blender-launcher.exe"));
    }
}

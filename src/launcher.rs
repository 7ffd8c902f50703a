use crate::args::Args;
use crate::blender::{Blender, LocateError};
use crate::config::LauncherConfig;
use crate::scene::{self, SceneError};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Unable to locate blender: {0}")]
    Locate(#[from] LocateError),
    #[error("Unable to resolve scene: {0}")]
    Scene(#[from] SceneError),
    #[error("Unable to start blender: {0}")]
    Spawn(std::io::Error),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

/// How the child process ended. On unix a signal death carries the signal
/// number instead of an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ProcessExit {
    /// Exit status the launcher should report as its own - the child's code,
    /// or 128 plus the signal number when the child was killed.
    pub fn status_code(&self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => 128 + signal,
            (None, None) => 1,
        }
    }
}

/// Resolve the executable and scene, build the argument vector, then spawn
/// blender exactly once and relay its output until it exits.
pub async fn launch(config: &LauncherConfig) -> Result<ProcessExit, LauncherError> {
    let blender = Blender::locate(config)?;
    let scene = scene::resolve(config)?;
    let args = Args::new(
        scene,
        config.script_path(),
        config.placement,
        config.factory_startup,
    );

    if let Ok(plan) = serde_json::to_string(&args) {
        debug!("launch plan: {plan}");
    }

    run(&blender, &args).await
}

/// Spawn the executable with the prepared argument vector and relay its
/// standard output line by line, prefixed with a running counter. The counter
/// is a diagnostic aid for reading interleaved logs, nothing more.
pub async fn run(blender: &Blender, args: &Args) -> Result<ProcessExit, LauncherError> {
    let col = args.create_arg_list();
    info!("launching {:?}", blender.executable);

    let mut child = Command::new(&blender.executable)
        .args(&col)
        .stdout(Stdio::piped())
        .spawn()
        .map_err(LauncherError::Spawn)?;

    // stdout is piped above, so the handle is always there to take
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout).lines();

    let mut line = 0;
    while let Some(data) = reader.next_line().await? {
        println!("{} {}", line, data);
        line += 1;
    }

    let status = child.wait().await?;

    #[cfg(unix)]
    let signal = status.signal();
    #[cfg(not(unix))]
    let signal = None;

    Ok(ProcessExit {
        code: status.code(),
        signal,
    })
}

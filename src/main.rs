use blender_launcher::config::LauncherConfig;
use blender_launcher::launcher;
use std::process::exit;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = LauncherConfig::from_env().expect("Unable to resolve working directory!");

    match launcher::launch(&config).await {
        // report the child's own status as ours
        Ok(result) => exit(result.status_code()),
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    }
}

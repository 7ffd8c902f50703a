use crate::config::WindowPlacement;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ref: https://docs.blender.org/manual/en/latest/advanced/command_line/arguments.html
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Args {
    scene: PathBuf,  // required
    script: PathBuf, // required - render engine script run via --python
    placement: WindowPlacement,
    factory_startup: bool,
}

impl Args {
    pub fn new(
        scene: impl AsRef<Path>,
        script: impl AsRef<Path>,
        placement: WindowPlacement,
        factory_startup: bool,
    ) -> Self {
        Args {
            scene: scene.as_ref().to_path_buf(),
            script: script.as_ref().to_path_buf(),
            placement,
            factory_startup,
        }
    }

    pub fn create_arg_list(&self) -> Vec<String> {
        // blender consumes arguments in order - window placement up front,
        // the scene file at the very end.
        let mut col = vec![
            "-p".to_owned(),
            self.placement.x.to_string(),
            self.placement.y.to_string(),
            self.placement.width.to_string(),
            self.placement.height.to_string(),
        ];

        if self.factory_startup {
            col.push("--factory-startup".to_owned());
        }

        col.push("--python".to_owned());
        col.push(self.script.to_str().unwrap().to_string());
        col.push(self.scene.to_str().unwrap().to_string());

        col
    }
}

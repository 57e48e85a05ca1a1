//! Shared fixtures: a scratch workspace with a fake converter and model.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use posekit_core::config::ConverterConfig;

/// A temporary directory holding a fake `tensorflowjs_converter`, a fake
/// Python interpreter, and a source model.
pub struct TestWorkspace {
    pub dir: tempfile::TempDir,
    pub source: PathBuf,
    pub output: PathBuf,
    pub converter: PathBuf,
}

impl TestWorkspace {
    /// Workspace whose converter writes `model.json` plus a weight shard
    /// and records its arguments, one per line, in `<output>/args.txt`.
    pub fn new() -> Self {
        Self::with_converter_body(
            "printf '%s\\n' \"$@\" > \"$5/args.txt\"\n\
             echo '{\"format\":\"graph-model\",\"modelTopology\":{}}' > \"$5/model.json\"\n\
             printf 'weights' > \"$5/group1-shard1of1.bin\"\n\
             echo 'Conversion finished'\n\
             exit 0",
        )
    }

    /// Workspace whose converter prints `stderr` and exits with `code`.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::with_converter_body(&format!("echo '{stderr}' >&2\nexit {code}"))
    }

    fn with_converter_body(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("pose_landmark_full.tflite");
        std::fs::write(&source, b"TFL3\0\0\0\0").expect("write model");
        let converter = write_script(dir.path(), "tensorflowjs_converter", body);
        let output = dir.path().join("pose_model_web");

        Self {
            dir,
            source,
            output,
            converter,
        }
    }

    /// Fake Python interpreter whose import probe always fails.
    pub fn python_without_package(&self) -> PathBuf {
        write_script(self.dir.path(), "python-missing", "exit 1")
    }

    /// Converter config pointing at this workspace, dependency check off.
    pub fn config(&self) -> ConverterConfig {
        ConverterConfig {
            source_path: self.source.clone(),
            output_dir: self.output.clone(),
            converter_command: self.converter.to_string_lossy().to_string(),
            check_dependencies: false,
            ..Default::default()
        }
    }

    /// Arguments the fake converter was last invoked with.
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.output.join("args.txt"))
            .expect("args.txt")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

//! Integration tests for the `posekit` binary: exit status and output.

#![cfg(unix)]

mod helpers;

use std::process::{Command, Output};

fn posekit(ws: &helpers::TestWorkspace, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_posekit"))
        .args(args)
        .current_dir(ws.dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run posekit")
}

fn convert_args(ws: &helpers::TestWorkspace) -> Vec<String> {
    vec![
        "convert".to_string(),
        "--source".to_string(),
        ws.source.to_string_lossy().to_string(),
        "--output-dir".to_string(),
        ws.output.to_string_lossy().to_string(),
        "--converter".to_string(),
        ws.converter.to_string_lossy().to_string(),
        "--skip-dependency-check".to_string(),
    ]
}

fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

#[test]
fn test_convert_success_text() {
    let ws = helpers::TestWorkspace::new();
    let args = convert_args(&ws);

    let out = posekit(&ws, &as_strs(&args));
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout.contains("Model conversion successful!"));
    assert!(stdout.contains("model.json"));
    assert!(stdout.contains("Next steps"));
}

#[test]
fn test_convert_success_json() {
    let ws = helpers::TestWorkspace::new();
    let mut args = vec!["--format".to_string(), "json".to_string()];
    args.extend(convert_args(&ws));

    let out = posekit(&ws, &as_strs(&args));
    assert!(out.status.success());

    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(body["ok"], true);
    let names: Vec<&str> = body["report"]["generated_files"]
        .as_array()
        .expect("files array")
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert!(names.contains(&"model.json"));
    assert_eq!(
        body["report"]["request"]["signature_name"],
        "serving_default"
    );
}

#[test]
fn test_missing_source_exits_nonzero() {
    let ws = helpers::TestWorkspace::new();
    let missing = ws.dir.path().join("missing.tflite");
    let mut args = convert_args(&ws);
    args[2] = missing.to_string_lossy().to_string();

    let out = posekit(&ws, &as_strs(&args));

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("TFLite file not found"));
    assert!(!ws.output.exists());
}

#[test]
fn test_tool_failure_json_reports_kind() {
    let ws = helpers::TestWorkspace::failing(1, "conversion exploded");
    let mut args = vec!["--format".to_string(), "json".to_string()];
    args.extend(convert_args(&ws));

    let out = posekit(&ws, &as_strs(&args));

    assert_eq!(out.status.code(), Some(1));
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(body["ok"], false);
    assert_eq!(body["kind"], "ToolFailure");
    assert!(
        body["error"]
            .as_str()
            .expect("error string")
            .contains("conversion exploded")
    );
}

#[test]
fn test_missing_package_without_install_flag() {
    let ws = helpers::TestWorkspace::new();
    let python = ws.python_without_package();
    let args = vec![
        "--format".to_string(),
        "json".to_string(),
        "convert".to_string(),
        "--source".to_string(),
        ws.source.to_string_lossy().to_string(),
        "--output-dir".to_string(),
        ws.output.to_string_lossy().to_string(),
        "--converter".to_string(),
        ws.converter.to_string_lossy().to_string(),
        "--python".to_string(),
        python.to_string_lossy().to_string(),
    ];

    let out = posekit(&ws, &as_strs(&args));

    assert_eq!(out.status.code(), Some(1));
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(body["kind"], "Dependency");
    assert!(!ws.output.join("args.txt").exists());
}

#[test]
fn test_config_show_json() {
    let ws = helpers::TestWorkspace::new();
    let toml_path = ws.dir.path().join("posekit.toml");
    std::fs::write(&toml_path, "[converter]\nsignature_name = \"pose_landmarks\"\n")
        .expect("write config");

    let out = posekit(
        &ws,
        &[
            "--config",
            toml_path.to_str().expect("utf-8 path"),
            "--format",
            "json",
            "config",
            "show",
        ],
    );

    assert!(out.status.success());
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(body["converter"]["signature_name"], "pose_landmarks");
    assert_eq!(body["converter"]["input_format"], "tf_lite");
}

#[test]
fn test_config_load_failure_json() {
    let ws = helpers::TestWorkspace::new();
    let missing = ws.dir.path().join("absent.toml");

    let out = posekit(
        &ws,
        &[
            "--config",
            missing.to_str().expect("utf-8 path"),
            "--format",
            "json",
            "config",
            "show",
        ],
    );

    assert_eq!(out.status.code(), Some(1));
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(body["ok"], false);
    assert_eq!(body["kind"], "Configuration");
}

#[test]
fn test_check_without_python_still_reports_converter() {
    let ws = helpers::TestWorkspace::new();

    let out = Command::new(env!("CARGO_BIN_EXE_posekit"))
        .args(["--format", "json", "check"])
        .current_dir(ws.dir.path())
        .env_remove("RUST_LOG")
        .env("POSEKIT__CONVERTER__PYTHON_COMMAND", "/nonexistent/python3")
        .env(
            "POSEKIT__CONVERTER__CONVERTER_COMMAND",
            ws.converter.to_string_lossy().to_string(),
        )
        .output()
        .expect("run posekit");

    assert_eq!(out.status.code(), Some(1));
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(body["ok"], false);
    assert_eq!(body["package_installed"], false);
    assert!(
        body["note"]
            .as_str()
            .expect("note string")
            .contains("Python interpreter not found")
    );
    assert_eq!(
        body["converter"]["executable"],
        ws.converter.to_string_lossy().as_ref()
    );
}

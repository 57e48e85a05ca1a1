//! Integration tests for the converter driver.

#![cfg(unix)]

mod helpers;

use posekit_converter::{ConversionError, ConverterDriver};
use posekit_core::ErrorKind;

#[tokio::test]
async fn test_converts_into_fresh_output_dir() {
    let ws = helpers::TestWorkspace::new();
    assert!(!ws.output.exists());

    let driver = ConverterDriver::new(ws.config()).expect("driver");
    let report = driver.run().await.expect("convert");

    assert!(ws.output.is_dir());
    assert!(!report.generated_files.is_empty());
    assert!(report.generated_files.iter().any(|f| f.name == "model.json"));
    assert!(report.outcome.success);
    assert_eq!(report.outcome.stdout.trim(), "Conversion finished");
    assert!(report.total_bytes() > 0);
}

#[tokio::test]
async fn test_converter_receives_fixed_arguments() {
    let ws = helpers::TestWorkspace::new();

    let driver = ConverterDriver::new(ws.config()).expect("driver");
    driver.run().await.expect("convert");

    assert_eq!(
        ws.recorded_args(),
        vec![
            "--input_format=tf_lite".to_string(),
            "--output_format=tfjs_graph_model".to_string(),
            "--signature_name=serving_default".to_string(),
            ws.source.to_string_lossy().to_string(),
            ws.output.to_string_lossy().to_string(),
        ]
    );
}

#[tokio::test]
async fn test_missing_source_spawns_nothing() {
    let ws = helpers::TestWorkspace::new();
    let missing = ws.dir.path().join("missing.tflite");

    let driver = ConverterDriver::new(ws.config()).expect("driver");
    let err = driver
        .convert(&missing, &ws.output)
        .await
        .expect_err("should fail");

    assert!(matches!(err, ConversionError::SourceNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!ws.output.exists());
}

#[tokio::test]
async fn test_tool_failure_reports_stderr() {
    let ws = helpers::TestWorkspace::failing(2, "Unsupported TFLite op: CUSTOM");

    let driver = ConverterDriver::new(ws.config()).expect("driver");
    let err = driver.run().await.expect_err("should fail");

    assert_eq!(err.kind(), ErrorKind::ToolFailure);
    match &err {
        ConversionError::ToolFailed { code, stderr, .. } => {
            assert_eq!(*code, 2);
            assert!(stderr.contains("Unsupported TFLite op: CUSTOM"));
        }
        other => panic!("expected ToolFailed, got {other:?}"),
    }
    assert!(err.to_string().contains("Unsupported TFLite op: CUSTOM"));
    // The directory is still created before the tool runs
    assert!(ws.output.is_dir());
}

#[tokio::test]
async fn test_repeated_conversion_is_idempotent() {
    let ws = helpers::TestWorkspace::new();
    let driver = ConverterDriver::new(ws.config()).expect("driver");

    let first = driver.run().await.expect("first run");
    let second = driver.run().await.expect("second run");

    assert!(ws.output.is_dir());
    assert_eq!(first.generated_files, second.generated_files);
}

#[tokio::test]
async fn test_missing_package_blocks_conversion() {
    let ws = helpers::TestWorkspace::new();
    let mut config = ws.config();
    config.check_dependencies = true;
    config.python_command = ws.python_without_package().to_string_lossy().to_string();

    let driver = ConverterDriver::new(config).expect("driver");
    let err = driver.run().await.expect_err("should fail");

    assert!(matches!(err, ConversionError::DependencyMissing { .. }));
    assert_eq!(err.kind(), ErrorKind::Dependency);
    assert!(!ws.output.join("args.txt").exists());
}

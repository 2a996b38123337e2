//! Integration tests for the bundle report
//!
//! Each test builds a throwaway dist/ directory and runs `generate` against it.

use bundle_report::{generate, AssetKind, ReportError, ReportMode, ReportOptions};
use std::fs;
use std::path::Path;

fn write(dir: &Path, rel: &str, bytes: usize) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; bytes]).unwrap();
}

fn sample_dist() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", 300);
    write(dir.path(), "ayayron-app_bg.wasm", 4096);
    write(dir.path(), "ayayron-app.js", 1200);
    write(dir.path(), "css/bootstrap.min.css", 2048);
    dir
}

#[test]
fn test_static_report_written_to_default_path() {
    let dist = sample_dist();
    let opts = ReportOptions::new(dist.path());

    let report = generate(&opts).expect("report should be generated");

    let out = dist.path().join("report.html");
    assert!(out.exists(), "report.html should exist");
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("ayayron-app_bg.wasm"));
    assert!(html.contains("css/bootstrap.min.css"));

    assert_eq!(report.assets.len(), 4);
    assert_eq!(report.total_size, 300 + 4096 + 1200 + 2048);
    assert_eq!(report.assets[0].kind, AssetKind::Wasm);
}

#[test]
fn test_rerun_does_not_count_previous_report() {
    let dist = sample_dist();
    let opts = ReportOptions::new(dist.path());

    let first = generate(&opts).unwrap();
    let second = generate(&opts).unwrap();

    assert_eq!(first.assets.len(), second.assets.len());
    assert_eq!(first.total_size, second.total_size);
    assert!(second.assets.iter().all(|a| a.path != "report.html"));
}

#[test]
fn test_switching_modes_does_not_count_other_report() {
    let dist = sample_dist();
    let mut opts = ReportOptions::new(dist.path());

    let first = generate(&opts).unwrap();
    opts.mode = ReportMode::Json;
    let json = generate(&opts).unwrap();
    opts.mode = ReportMode::Static;
    let again = generate(&opts).unwrap();

    assert_eq!(first.assets.len(), 4);
    assert_eq!(json.assets.len(), 4);
    assert_eq!(again.assets.len(), 4);
    assert!(json.assets.iter().all(|a| a.path != "report.html"));
    assert!(again.assets.iter().all(|a| a.path != "report.json"));
}

#[test]
fn test_rerun_with_roundabout_report_path() {
    let parent = tempfile::tempdir().unwrap();
    let dist = parent.path().join("dist");
    write(&dist, "app_bg.wasm", 4096);
    write(&dist, "app.js", 1200);

    let mut opts = ReportOptions::new(&dist);
    opts.report = Some(dist.join("..").join("dist").join("size.html"));

    let first = generate(&opts).unwrap();
    let second = generate(&opts).unwrap();

    assert!(dist.join("size.html").exists());
    assert_eq!(first.assets.len(), 2);
    assert_eq!(second.assets.len(), 2);
    assert_eq!(first.total_size, second.total_size);
}

#[test]
fn test_json_report() {
    let dist = sample_dist();
    let mut opts = ReportOptions::new(dist.path());
    opts.mode = ReportMode::Json;

    generate(&opts).unwrap();

    let out = dist.path().join("report.json");
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    let paths: Vec<&str> = json["assets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec!["ayayron-app_bg.wasm", "css/bootstrap.min.css", "ayayron-app.js", "index.html"]
    );
}

#[test]
fn test_custom_report_path_outside_dist() {
    let dist = sample_dist();
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("nested/size.html");

    let mut opts = ReportOptions::new(dist.path());
    opts.report = Some(out.clone());
    generate(&opts).unwrap();

    assert!(out.exists());
    assert!(!dist.path().join("report.html").exists());
}

#[test]
fn test_empty_dist_is_error() {
    let dist = tempfile::tempdir().unwrap();
    let result = generate(&ReportOptions::new(dist.path()));
    assert!(matches!(result, Err(ReportError::EmptyBundle(_))));
    assert!(!dist.path().join("report.html").exists());
}

#[test]
fn test_missing_dist_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(&ReportOptions::new(dir.path().join("dist")));
    assert!(matches!(result, Err(ReportError::MissingDist(_))));
}

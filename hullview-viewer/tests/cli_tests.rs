//! End-to-end runs of the `hullview` binary in headless mode

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn hullview(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hullview"))
        .args(args)
        .output()
        .expect("failed to run hullview")
}

fn file_with(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const TETRAHEDRON: &str = r#"{
    "Cloud": [[0,0,0],[1,0,0],[0,1,0],[0,0,1]],
    "Index": [[0,2,1],[0,1,3],[0,3,2],[1,2,3]]
}"#;

const ASCII_STL: &str = "solid tri
facet normal 0 0 1
  outer loop
    vertex 0 0 0
    vertex 1 0 0
    vertex 0 1 0
  endloop
endfacet
endsolid tri
";

#[test]
fn test_headless_hull_summary() {
    let hull = file_with(".json", TETRAHEDRON);
    let out = hullview(&["--headless", "--hull", hull.path().to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("points"));
    assert!(lines[1].starts_with("hull"));
    assert!(lines[1].contains("4 primitives"));
}

#[test]
fn test_headless_with_mesh_and_vertices() {
    let hull = file_with(".json", TETRAHEDRON);
    let mesh = file_with(".stl", ASCII_STL);
    let out = hullview(&[
        "--headless",
        "--hull",
        hull.path().to_str().unwrap(),
        "--mesh",
        mesh.path().to_str().unwrap(),
        "--mesh-vertices",
        "0.0001",
    ]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let labels: Vec<&str> = stdout
        .lines()
        .filter(|l| !l.starts_with("axis limits"))
        .map(|l| l.split("  ").next().unwrap_or("").trim())
        .collect();
    assert_eq!(labels, vec!["points", "hull", "mesh", "mesh vertices"]);
}

#[test]
fn test_no_sources_is_an_empty_view() {
    let out = hullview(&["--headless"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_malformed_hull_reports_error_kind() {
    let hull = file_with(".json", r#"{"Cloud":[[0,0,0],[1,0,0]],"Index":[[0,1,5]]}"#);
    let out = hullview(&["--headless", "--hull", hull.path().to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("MalformedInputError"), "stderr: {}", stderr);
}

#[test]
fn test_unreadable_mesh_reports_unsupported_format() {
    let mesh = file_with(".stl", "this is not a mesh");
    let out = hullview(&["--headless", "--mesh", mesh.path().to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("UnsupportedFormatError"), "stderr: {}", stderr);
}

#[test]
fn test_mesh_vertices_without_mesh_is_rejected() {
    let out = hullview(&["--headless", "--mesh-vertices", "0.001"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--mesh"), "stderr: {}", stderr);
}

//! Tests for the `linsys-solve` command-line front end
//!
//! Run the built binary on the systems in `data/` and check the text and
//! JSON reports and the exit status.

#![cfg(feature = "cli")]

use approx::assert_abs_diff_eq;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linsys-solve"))
        .args(args)
        .output()
        .expect("Failed to run linsys-solve")
}

fn run_json(path: &Path, extra: &[&str]) -> (Output, serde_json::Value) {
    let path = path.to_string_lossy().to_string();
    let mut args = vec![path.as_str(), "--json"];
    args.extend_from_slice(extra);
    let output = run(&args);
    let report = serde_json::from_slice(&output.stdout).expect("stdout is a JSON report");
    (output, report)
}

#[test]
fn test_json_report_when_methods_agree() {
    let (output, report) = run_json(&data_file("system_2x2.json"), &[]);
    assert!(output.status.success());

    assert_eq!(report["agree"], true);
    assert_eq!(report["consistency"], "agree");
    assert_eq!(report["inversion"]["status"], "solved");
    assert_eq!(report["elimination"]["status"], "solved");
    assert!(
        report["interpretation"]
            .as_str()
            .unwrap()
            .starts_with("methods agree")
    );

    let solution = report["solution"].as_array().unwrap();
    assert_eq!(solution.len(), 2);
    assert_abs_diff_eq!(solution[0].as_f64().unwrap(), 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(solution[1].as_f64().unwrap(), 1.4, epsilon = 1e-12);
    assert!(report["residual_max"].as_f64().unwrap() < 1e-12);
}

#[test]
fn test_json_report_when_both_singular() {
    let (output, report) = run_json(&data_file("system_singular.json"), &[]);
    assert!(output.status.success());

    assert_eq!(report["agree"], false);
    assert_eq!(report["consistency"], "both_singular");
    assert_eq!(report["inversion"]["status"], "singular");
    assert_eq!(report["elimination"]["status"], "singular");
    assert_eq!(report["interpretation"], "no unique solution found");
    assert!(report["solution"].is_null());
    assert!(report["residual_max"].is_null());
}

#[test]
fn test_solver_section_overrides_defaults() {
    // The file raises the singularity threshold above the diagonal entries
    let path = data_file("system_small_pivot.json");
    let (output, report) = run_json(&path, &[]);
    assert!(output.status.success());
    assert_eq!(report["consistency"], "both_singular");

    // The command line takes precedence over the file
    let (output, report) = run_json(&path, &["--singularity-threshold", "1e-12"]);
    assert!(output.status.success());
    assert_eq!(report["consistency"], "agree");
    let solution = report["solution"].as_array().unwrap();
    assert_abs_diff_eq!(solution[0].as_f64().unwrap(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution[1].as_f64().unwrap(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_disagreement_exits_with_status_two() {
    // Hilbert matrix: inversion and elimination round differently on it, so
    // zero tolerance makes them disagree
    let n = 8;
    let a: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| 1.0 / (i + j + 1) as f64).collect())
        .collect();
    let b: Vec<f64> = a.iter().map(|row| row.iter().sum()).collect();
    let system = serde_json::json!({ "a": a, "b": b });

    let path = std::env::temp_dir().join(format!("linsys_hilbert_{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string(&system).unwrap()).unwrap();

    let (output, report) = run_json(&path, &["--atol", "0", "--rtol", "0"]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(report["agree"], false);
    assert_eq!(report["consistency"], "disagree");
    assert!(
        report["interpretation"]
            .as_str()
            .unwrap()
            .contains("internal error")
    );
}

#[test]
fn test_text_report() {
    let path = data_file("system_2x2.json");
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("A^-1 ="));
    assert!(stdout.contains("Interpretation: methods agree; the solution is x1 = "));
    assert!(stdout.contains("Residual max |A x - b|"));

    let path = data_file("system_singular.json");
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("A is not invertible"));
    assert!(stdout.contains("Interpretation: no unique solution found"));
}

#[test]
fn test_non_finite_input_fails() {
    let path = std::env::temp_dir().join(format!("linsys_bad_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "a": [[1.0, 0.0], [0.0, 1.0]], "b": [1e400, 1.0] }"#).unwrap();

    let output = run(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
}

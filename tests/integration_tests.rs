use gradebook_analyzer::analyzers::grade::Grade;
use gradebook_analyzer::analyzers::partition::DEFAULT_PASS_MARK;
use gradebook_analyzer::parser::load_from_csv;
use gradebook_analyzer::shell::{Shell, ShellState};
use gradebook_analyzer::stats::AnalysisSummary;
use std::fs;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/students.csv");

#[test]
fn test_full_pipeline() {
    let store = load_from_csv(FIXTURE)
        .expect("Failed to read fixture")
        .expect("Fixture missing");

    let names: Vec<_> = store.names().collect();
    assert_eq!(names, vec!["Alice", "Bob", "Dina"]);

    let summary = AnalysisSummary::from_store(&store, DEFAULT_PASS_MARK);
    assert_eq!(summary.average, 74.0);
    assert_eq!(summary.median, 72.0);
    assert_eq!(summary.grades.get("Alice"), Some(Grade::A));
    assert_eq!(summary.grades.get("Bob"), Some(Grade::F));
    assert_eq!(summary.grades.get("Dina"), Some(Grade::C));
    assert_eq!(summary.passed, vec!["Alice", "Bob", "Dina"]);
    assert!(summary.failed.is_empty());
    assert_eq!(summary.distribution.total(), store.len());
}

#[test]
fn test_shell_load_analyze_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("graded.csv");
    let script = format!("2\n{}\nY\n{}\n3\n", FIXTURE, out_path.display());

    let mut shell = Shell::new(script.as_bytes(), Vec::new());
    shell.run().unwrap();
    assert_eq!(shell.state(), &ShellState::Terminated);

    let console = String::from_utf8(shell.into_output()).unwrap();
    assert!(console.contains("Students: 3\n"));
    assert!(console.contains("Max: Alice -> 95.0\n"));
    assert!(console.contains("Min: Bob -> 55.0\n"));
    assert!(console.contains(&format!("Saved to {}\n", out_path.display())));

    let saved = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<_> = saved.lines().collect();
    assert_eq!(
        lines,
        vec!["Name,Marks,Grade", "Alice,95.0,A", "Bob,55.0,F", "Dina,72.0,C"]
    );

    // Reloading the export gives back the same scores.
    let original = load_from_csv(FIXTURE).unwrap().unwrap();
    let reloaded = load_from_csv(&out_path).unwrap().unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_shell_manual_entry_then_decline_save() {
    let script = "1\nZed\n40\nAmy\n39.5\n\nno\n3\n";
    let mut shell = Shell::new(script.as_bytes(), Vec::new());
    shell.run().unwrap();

    let console = String::from_utf8(shell.into_output()).unwrap();
    assert!(console.contains("Passed (1): Zed\n"));
    assert!(console.contains("Failed (1): Amy\n"));
    assert!(!console.contains("Output filename"));
    assert!(console.ends_with("Bye!\n"));
}

#[test]
fn test_shell_header_only_csv_has_nothing_to_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Name,Marks\n,\n").unwrap();

    let script = format!("2\n{}\n3\n", path.display());
    let mut shell = Shell::new(script.as_bytes(), Vec::new());
    shell.run().unwrap();

    let console = String::from_utf8(shell.into_output()).unwrap();
    assert!(console.contains("No valid data loaded from CSV.\n"));
    assert!(!console.contains("CSV file not found"));
}

#[test]
fn test_shell_survives_invalid_utf8_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messy.csv");
    fs::write(&path, b"Alice,95\nBo\xffb,60\nDina,72\n").unwrap();

    let script = format!("2\n{}\nn\n3\n", path.display());
    let mut shell = Shell::new(script.as_bytes(), Vec::new());
    shell.run().unwrap();

    let console = String::from_utf8(shell.into_output()).unwrap();
    assert!(console.contains("Students: 2\n"));
    assert!(console.contains("Passed (2): Alice, Dina\n"));
    assert!(console.ends_with("Bye!\n"));
}

#[test]
fn test_nan_score_flows_through_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nan.csv");
    fs::write(&path, "A,50\nB,nan\nC,90\n").unwrap();

    let store = load_from_csv(&path).unwrap().unwrap();
    let summary = AnalysisSummary::from_store(&store, DEFAULT_PASS_MARK);

    assert!(summary.average.is_nan());
    assert!(summary.median.is_nan());
    assert_eq!(summary.max.name, "B");
    assert_eq!(summary.min.name, "B");
}

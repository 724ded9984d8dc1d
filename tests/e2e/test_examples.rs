//! Golden-file tests: every `demos/NAME.plot` renders to `demos/NAME.expect.txt`.

use std::fs;
use std::path::PathBuf;

use pen_plot::{PlotConfig, PlotError, render_script, run_script};

const WIDTH: usize = 10;
const HEIGHT: usize = 6;

fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Find all (name, plot_file, expect_file) triples in the demos directory.
fn find_demo_pairs() -> Vec<(String, PathBuf, PathBuf)> {
    let dir = demos_dir();
    let mut pairs = Vec::new();
    for entry in fs::read_dir(&dir).expect("demos directory").flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("plot") {
            continue;
        }
        let name = path.file_stem().unwrap().to_string_lossy().to_string();
        let expect_path = dir.join(format!("{}.expect.txt", name));
        if expect_path.exists() {
            pairs.push((name, path, expect_path));
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

#[test]
fn test_demo_pairs_found() {
    let names: Vec<String> = find_demo_pairs().into_iter().map(|p| p.0).collect();
    assert!(names.contains(&"square".to_string()), "found {:?}", names);
    assert!(names.len() >= 4);
}

#[test]
fn test_all_demos_match_golden() {
    for (name, plot, expect) in find_demo_pairs() {
        let src = fs::read_to_string(&plot).unwrap();
        let expected = fs::read_to_string(&expect).unwrap();
        let actual = render_script(&src, WIDTH, HEIGHT)
            .unwrap_or_else(|e| panic!("{name}: run failed: {e}"));
        assert_eq!(actual, expected, "{name}: output mismatch");
    }
}

#[test]
fn test_bad_lines_reports_each_failure() {
    let src = fs::read_to_string(demos_dir().join("bad_lines.plot")).unwrap();
    let report = run_script(&src, &PlotConfig::new(WIDTH, HEIGHT)).unwrap();
    let lines: Vec<usize> = report.diagnostics.iter().map(|d| d.line_no).collect();
    assert_eq!(lines, vec![2, 5]);
    assert_eq!(
        report.diagnostics[0].to_string(),
        "Error decoding line: wiggle 1 2 - Unknown command: wiggle 1 2"
    );
}

#[test]
fn test_out_of_bounds_demo_fails() {
    let src = fs::read_to_string(demos_dir().join("out_of_bounds.plot")).unwrap();
    let err = render_script(&src, WIDTH, HEIGHT).unwrap_err();
    assert!(matches!(err, PlotError::OutOfBounds { line_no: 2, col: 2, row: 6, .. }));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn write_graph(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

/// Every [from, to] pair in `edges` must place from before to in `order`
fn assert_constraints(order: &[String], edges: &[(&str, &str)]) {
    let positions: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();
    for (u, v) in edges {
        assert!(positions[u] < positions[v], "{u} must come before {v}");
    }
}

#[test]
fn test_sort_chain_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_graph(&temp_dir, "chain.json", r#"[["a","b"],["b","c"],["a","c"]]"#);

    // Only one valid order exists for this graph
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort").arg(&path);
    cmd.assert().success().stdout("a\nb\nc\n");
}

#[test]
fn test_sort_from_stdin() {
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort").write_stdin(r#"[["a","b"]]"#);
    cmd.assert().success().stdout("a\nb\n");
}

#[test]
fn test_sort_empty_graph() {
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort").write_stdin("[]");
    cmd.assert().success().stdout("");
}

#[test]
fn test_sort_json_output() {
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.args(["sort", "--json"]).write_stdin(r#"[["a","b"]]"#);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"order":["a","b"]}"#));
}

#[test]
fn test_cycle_fails_with_message() {
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort").write_stdin(r#"[["a","b"],["b","a"]]"#);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cycle detected"));
}

#[test]
fn test_self_loop_fails() {
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort").write_stdin(r#"[["x","x"]]"#);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cycle detected"));
}

#[test]
fn test_malformed_input_fails() {
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort").write_stdin(r#"{"not": "an edge list"}"#);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid edge list"));
}

#[test]
fn test_disconnected_components_all_present() {
    let edges = [("a", "b"), ("a", "c"), ("d", "e")];
    let mut cmd = Command::cargo_bin("toposort").unwrap();
    cmd.arg("sort")
        .write_stdin(r#"[["a","b"],["a","c"],["d","e"]]"#);
    let output = cmd.assert().success().get_output().stdout.clone();

    let order: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(order.len(), 5);
    assert_constraints(&order, &edges);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_graph(
        &temp_dir,
        "diamond.json",
        r#"[["a","b"],["a","c"],["b","d"],["c","d"],["x","y"]]"#,
    );

    let mut first = Command::cargo_bin("toposort").unwrap();
    first.arg("sort").arg(&path).args(["--seed", "7"]);
    let first_out = first.assert().success().get_output().stdout.clone();

    let mut second = Command::cargo_bin("toposort").unwrap();
    second.arg("sort").arg(&path).args(["--seed", "7"]);
    let second_out = second.assert().success().get_output().stdout.clone();

    assert_eq!(first_out, second_out);
}

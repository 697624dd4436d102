use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("nbgist-render")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn render_notebook_fixture_to_stdout() {
    let fixture = fixture_path("two-cells.ipynb");
    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg("render").arg(&fixture);

    let output_pred = predicate::str::contains("<!DOCTYPE html>")
        .and(predicate::str::contains(
            "<pre data-executable=\"true\">print(1)</pre>",
        ))
        .and(predicate::str::contains("<h1>Hi</h1>"))
        .and(predicate::str::contains("\"kernel_name\":\"python3\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_rmarkdown_fixture_selects_r_kernel() {
    let fixture = fixture_path("report.rmd");
    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg("render").arg(&fixture);

    let output_pred = predicate::str::contains("<title>T - A</title>")
        .and(predicate::str::contains("<h1 class=\"title\">T</h1>"))
        .and(predicate::str::contains("\"kernel_name\":\"R\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_injects_default_subcommand() {
    let fixture = fixture_path("fenced.md");
    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg(&fixture);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("data-executable=\"true\""));
}

#[test]
fn kernel_override_wins() {
    let fixture = fixture_path("two-cells.ipynb");
    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg("render").arg(&fixture).arg("--kernel").arg("julia-1.9");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kernel_name\":\"julia-1.9\""));
}

#[test]
fn output_flag_writes_a_file() {
    let fixture = fixture_path("fenced.md");
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("page.html");

    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg("render").arg(&fixture).arg("-o").arg(&out);
    cmd.assert().success();

    let html = std::fs::read_to_string(&out).expect("output file");
    assert!(html.contains("data-executable=\"true\""));
}

#[test]
fn unknown_extension_is_an_error_for_explicit_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "plain text").expect("fixture write");

    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg("render").arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not detect a document format"));
}

#[test]
fn list_formats_names_all_strategies() {
    let mut cmd = cargo_bin_cmd!("nbgist");
    cmd.arg("--list-formats");

    let output_pred = predicate::str::contains("notebook")
        .and(predicate::str::contains("markdown"))
        .and(predicate::str::contains("rmarkdown"))
        .and(predicate::str::contains(".ipynb"));

    cmd.assert().success().stdout(output_pred);
}

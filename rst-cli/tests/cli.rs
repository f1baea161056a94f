use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn rst_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".rst")
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write input");
    file
}

#[test]
fn dumps_document_by_default() {
    let input = rst_file("Title\n=====\n\n- *one*\n");
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(input.path());

    cmd.assert().success().stdout(
        predicate::str::contains("(Heading 1")
            .and(predicate::str::contains("(List '-'"))
            .and(predicate::str::contains("(Highlighted em \"one\")")),
    );
}

#[test]
fn json_format_from_flag() {
    let input = rst_file(".. note::\n\n   Careful.\n");
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(input.path()).arg("--format").arg("json");

    cmd.assert().success().stdout(
        predicate::str::contains("\"node_type\": \"Admonition\"")
            .and(predicate::str::contains("\"node_type\": \"Document\"")),
    );
}

#[test]
fn treeviz_without_inlines() {
    let input = rst_file("Some *text*.\n");
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(input.path())
        .args(["-f", "treeviz", "--no-inlines"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("¶ Some text.").and(predicate::str::contains("◦").not()));
}

#[test]
fn reads_stdin() {
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg("-").write_stdin(">>> print(1)\n1\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(Code \"python\""));
}

#[test]
fn config_file_sets_format_and_syntax() {
    let input = rst_file(">>> x\n");
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[parser]\ndoctest_syntax = \"pycon\"\n\n[output]\nformat = \"yaml\"")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(input.path()).arg("--config").arg(config.path());

    cmd.assert().success().stdout(
        predicate::str::contains("node_type: Code").and(predicate::str::contains("pycon")),
    );
}

#[test]
fn diagnostics_go_to_stderr() {
    let input = rst_file("See `nowhere`_.\n");
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(input.path()).arg("--diagnostics");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("unresolved link `nowhere`"));
}

#[test]
fn unknown_format_fails() {
    let input = rst_file("text\n");
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(input.path()).args(["--format", "html"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'html'"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg(dir.path().join("absent.rst"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("rst");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("dump")
            .and(predicate::str::contains("treeviz"))
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}

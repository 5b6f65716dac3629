use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn converts_inline_expression() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("3 + 4 * 2");

    cmd.assert().success().stdout("3 4 2 * +\n");
}

#[test]
fn converts_with_json_format() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("(1 + 2) * 3").arg("--format").arg("postfix-json");

    cmd.assert()
        .success()
        .stdout("[\"1\",\"2\",\"+\",\"3\",\"*\"]\n");
}

#[test]
fn reads_expression_from_stdin() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.write_stdin("8 / ( 4 - 2 )\n");

    cmd.assert().success().stdout("8 4 2 - /\n");
}

#[test]
fn reads_expression_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "1 - 2 - 3").expect("write expression");

    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("--file").arg(file.path());

    cmd.assert().success().stdout("1 2 3 - -\n");
}

#[test]
fn pre_tokenized_input_passes_names_through() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("--tokens").arg("a * ( b + c )");

    cmd.assert().success().stdout("a b c + *\n");
}

#[test]
fn separator_flag_overrides_default() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("1 + 2").arg("-s").arg(",");

    cmd.assert().success().stdout("1,2,+\n");
}

#[test]
fn config_file_sets_format() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[output]\nformat = \"postfix-lines\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("2 * 3").arg("--config").arg(file.path());

    cmd.assert().success().stdout("2\n3\n*\n");
}

#[test]
fn bracket_mismatch_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("( 1 + 2");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("brackets mismatch"));
}

#[test]
fn unknown_character_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("2 ^ 3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected character '^' at offset 2"));
}

#[test]
fn unknown_format_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("1").arg("-f").arg("postfix-xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("shunt");
    cmd.arg("--list-formats");

    let output_pred = predicate::str::contains("postfix-simple")
        .and(predicate::str::contains("token-json"))
        .and(predicate::str::contains("One token per line"));

    cmd.assert().success().stdout(output_pred);
}

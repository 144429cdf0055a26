use super::*;

#[test]
fn convert_without_prefix_list_prints_usage() {
    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn convert_rejects_positional_input_together_with_filename() {
    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-f")
        .arg(fixture("fixtures/edge-in.acl"))
        .arg("-p")
        .arg("PL")
        .arg("--stdout")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn convert_rejects_non_contiguous_wildcard_without_writing() {
    let dir = tempdir().expect("tempdir");

    bin()
        .current_dir(dir.path())
        .arg("convert")
        .arg(fixture("fixtures/bad-wildcard.txt"))
        .arg("-p")
        .arg("PL-BAD")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("non-contiguous wildcard mask 0.0.1.254"))
        .stderr(predicate::str::contains("deny 172.16.0.0 0.0.1.254"));

    assert!(!dir.path().join("PL-BAD").exists());
}

#[test]
fn convert_strict_rejects_unknown_action() {
    let dir = tempdir().expect("tempdir");

    bin()
        .current_dir(dir.path())
        .arg("convert")
        .arg(fixture("fixtures/unknown-action.txt"))
        .arg("-p")
        .arg("PL-LEGACY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("unknown action 'allow'"));

    assert!(!dir.path().join("PL-LEGACY").exists());
}

#[test]
fn convert_missing_input_fails() {
    let dir = tempdir().expect("tempdir");

    bin()
        .current_dir(dir.path())
        .arg("convert")
        .arg(path_as_str(&dir.path().join("absent.acl")))
        .arg("-p")
        .arg("PL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));

    assert!(!dir.path().join("PL").exists());
}

#[test]
fn convert_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("acl.txt");
    fs::copy(fixture("fixtures/standard-acl.txt"), &input).expect("copy fixture");

    bin()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("-p")
        .arg("PL-TEST")
        .arg("--output")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite source file"));

    let untouched = fs::read_to_string(&input).expect("input");
    assert!(untouched.starts_with("standard-acl-name"));
}

#[test]
fn convert_rejects_prefix_list_name_with_whitespace() {
    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-p")
        .arg("PL TEST")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid prefix-list name"));
}

#[test]
fn convert_requires_output_for_name_with_separator() {
    let dir = tempdir().expect("tempdir");

    bin()
        .current_dir(dir.path())
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-p")
        .arg("lists/PL-TEST")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --output explicitly"));
}

#[test]
fn convert_empty_file_reports_missing_header() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("empty.acl");
    fs::write(&input, "").expect("write empty");

    bin()
        .current_dir(dir.path())
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("-p")
        .arg("PL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a name line"));
}

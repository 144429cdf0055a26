use super::*;

#[test]
fn convert_applies_settings_file() {
    let dir = tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "start_seq = 100\nseq_step = 10\n").expect("write settings");

    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-p")
        .arg("PL-TEST")
        .arg("--stdout")
        .arg("--settings")
        .arg(path_as_str(&settings))
        .assert()
        .success()
        .stdout(
            "ip prefix-list PL-TEST seq 100 permit 10.0.0.0/8 le 32\n\
             ip prefix-list PL-TEST seq 110 deny 172.16.0.0/20 le 32\n\
             ip prefix-list PL-TEST seq 120 permit 0.0.0.0/0 le 32\n\
             remark allow internal\n",
        );
}

#[test]
fn cli_flags_override_settings_file() {
    let dir = tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "start_seq = 100\nseq_step = 10\n").expect("write settings");

    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-p")
        .arg("PL-TEST")
        .arg("--stdout")
        .arg("--quiet")
        .arg("--settings")
        .arg(path_as_str(&settings))
        .arg("--start")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ip prefix-list PL-TEST seq 5 permit 10.0.0.0/8 le 32\n\
             ip prefix-list PL-TEST seq 15 deny",
        ));
}

#[test]
fn settings_file_can_select_lenient_policy() {
    let dir = tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "action_policy = \"lenient\"\n").expect("write settings");

    bin()
        .arg("convert")
        .arg(fixture("fixtures/unknown-action.txt"))
        .arg("-p")
        .arg("PL")
        .arg("--stdout")
        .arg("--settings")
        .arg(path_as_str(&settings))
        .assert()
        .success()
        .stdout(predicate::str::contains("seq 10 allow 10.0.0.0/8"));
}

#[test]
fn invalid_settings_file_fails() {
    let dir = tempdir().expect("tempdir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "seq_step = 0\n").expect("write settings");

    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-p")
        .arg("PL")
        .arg("--stdout")
        .arg("--settings")
        .arg(path_as_str(&settings))
        .assert()
        .failure()
        .stderr(predicate::str::contains("seq_step must be at least 1"));
}

#[test]
fn zero_step_flag_fails() {
    bin()
        .arg("convert")
        .arg(fixture("fixtures/standard-acl.txt"))
        .arg("-p")
        .arg("PL")
        .arg("--stdout")
        .arg("--step")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--step must be at least 1"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn throttle() -> Command {
    Command::cargo_bin("throttle").unwrap()
}

#[test]
fn copies_stdin_to_stdout() {
    throttle()
        .arg("1000000")
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("hello world")
        .stderr(predicate::str::contains(
            "\x1b[0GTotal bytes: 11 Total time: ",
        ))
        .stderr(predicate::str::contains(" Average speed: "))
        .stderr(predicate::str::ends_with("\x1b[K\n"));
}

#[test]
fn empty_input_prints_only_newline() {
    throttle()
        .arg("9600")
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr("\n");
}

#[test]
fn quiet_suppresses_status_line() {
    throttle()
        .args(["-q", "1000000"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("abc")
        .stderr("");
}

#[test]
fn non_positive_rate_still_copies() {
    throttle()
        .args(["--", "-100"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("x");
}

#[test]
fn copies_between_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.bin");
    let data: Vec<u8> = (0..=255u8).cycle().take(20_000).collect();
    std::fs::write(&input, &data).unwrap();

    throttle()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("400000")
        .assert()
        .success()
        .stderr(predicate::str::contains("Total bytes: 20000 "));

    assert_eq!(std::fs::read(&output).unwrap(), data);
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();

    throttle()
        .arg("-i")
        .arg(dir.path().join("missing.bin"))
        .arg("1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open input"));
}

#[test]
fn rate_argument_is_required() {
    throttle().assert().failure();
    throttle().arg("fast").assert().failure();
}

#[test]
fn log_file_records_run() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("throttle.log");

    throttle()
        .arg("--log-file")
        .arg(&log)
        .arg("1000000")
        .write_stdin("logged")
        .assert()
        .success()
        .stdout("logged");

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("throttle started: limit 1000000 B/s, chunk 250000 bytes"));
    assert!(contents.contains("throttle finished: 6 bytes in "));
}

#[test]
fn same_file_with_different_spelling_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.bin"), "important data").unwrap();

    throttle()
        .current_dir(dir.path())
        .args(["-q", "-i", "./a.bin", "-o", "a.bin", "1000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same file"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("a.bin")).unwrap(),
        "important data"
    );
}

#[test]
fn unopenable_log_file_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.bin");
    std::fs::write(&output, "previous contents").unwrap();

    throttle()
        .arg("--log-file")
        .arg(dir.path().join("missing").join("throttle.log"))
        .arg("-o")
        .arg(&output)
        .arg("100")
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open log file"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous contents");
}

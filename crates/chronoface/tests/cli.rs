use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A command with `HOME` pointed at an empty per-test directory so the
/// user's own config never leaks in.
fn chronoface(home: &str) -> (Command, PathBuf) {
    let dir = std::env::temp_dir().join(format!("chronoface-cli-{home}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create temp home");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chronoface"));
    cmd.env("HOME", &dir);
    (cmd, dir)
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let (mut cmd, _) = chronoface("help");
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dual time zone watchface"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let (mut cmd, _) = chronoface("version");
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("chronoface"));
}

#[test]
fn show_at_fixed_instant_prints_face() {
    // Arrange
    let (mut cmd, _) = chronoface("show-face");
    cmd.args(["show", "--at", "2024-04-03T16:30:00Z"]);

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("|       WED       |"));
    assert!(stdout.contains("|      16:30      |"));
    assert!(stdout.contains("|      04/03      |"));
    assert!(stdout.contains("|    - 00:30 -    |"));
}

#[test]
fn show_json_uses_local_zone_of_at_and_negative_offset() {
    // Arrange: 23:45 Wednesday at UTC-5 is 04:45 UTC on Thursday.
    let (mut cmd, _) = chronoface("show-json");
    cmd.args([
        "show",
        "--at",
        "2024-04-03T23:45:00-05:00",
        "--offset",
        "-5",
        "--json",
    ]);

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["weekday"], "WED");
    assert_eq!(value["local_time"], "23:45");
    assert_eq!(value["local_date"], "04/03");
    assert_eq!(value["foreign_time"], "- 23:45 -");
}

#[test]
fn show_reads_offset_from_config() {
    // Arrange
    let (mut cmd, home) = chronoface("show-config");
    let dir = home.join(".config").join("chronoface");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[clock]\noffset_hours = -5\n").unwrap();
    cmd.args(["show", "--at", "2024-04-03T10:00:00Z", "--json"]);

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- 05:00 -"));
}

#[test]
fn show_rejects_bad_timestamp() {
    // Arrange
    let (mut cmd, _) = chronoface("show-bad");
    cmd.args(["show", "--at", "yesterday"]);

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid --at timestamp"));
}

#[test]
fn watch_with_zero_ticks_draws_once() {
    // Arrange
    let (mut cmd, _) = chronoface("watch-zero");
    cmd.args(["watch", "--ticks", "0"]);

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("+-----------------+").count(), 2);
}

#[test]
fn watch_redraws_on_second_ticks() {
    // Arrange
    let (mut cmd, _) = chronoface("watch-second");
    cmd.args(["watch", "--granularity", "second", "--ticks", "2"]);

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert: initial draw plus two timed redraws, two borders each
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("+-----------------+").count(), 6);
    assert!(!stdout.contains("\x1b[2J"));
}

#[test]
fn watch_rejects_unknown_granularity() {
    let (mut cmd, _) = chronoface("watch-bad");
    cmd.args(["watch", "--granularity", "fortnight"]);

    let output = cmd.output().expect("failed to execute chronoface");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown granularity \"fortnight\""));
}

#[test]
fn watch_stops_when_stdout_is_closed() {
    // Arrange
    let (mut cmd, _) = chronoface("watch-closed");
    cmd.args(["watch", "--granularity", "second"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    let mut child = cmd.spawn().expect("failed to execute chronoface");

    // Act
    drop(child.stdout.take());
    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().expect("failed to poll chronoface") {
            break Some(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            break None;
        }
        std::thread::sleep(Duration::from_millis(50));
    };

    // Assert
    let status = status.expect("watch still running 5s after stdout was closed");
    assert!(status.success());
}

#[test]
fn init_creates_config_then_doctor_accepts_it() {
    // Arrange
    let (mut init, home) = chronoface("init");
    init.arg("init");

    // Act
    let output = init.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let path = home.join(".config").join("chronoface").join("config.toml");
    let content = std::fs::read_to_string(&path).expect("config.toml not created");
    assert!(content.contains("offset_hours = 8"));

    let doctor = Command::new(env!("CARGO_BIN_EXE_chronoface"))
        .env("HOME", &home)
        .arg("doctor")
        .output()
        .expect("failed to execute chronoface");
    assert!(doctor.status.success());
    let stdout = String::from_utf8_lossy(&doctor.stdout);
    assert!(stdout.contains("config.toml is valid"));
    assert!(stdout.contains("UTC+8"));
}

#[test]
fn init_does_not_overwrite_existing_config() {
    // Arrange
    let (mut cmd, home) = chronoface("init-twice");
    let dir = home.join(".config").join("chronoface");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[clock]\noffset_hours = 3\n").unwrap();
    cmd.arg("init");

    // Act
    let output = cmd.output().expect("failed to execute chronoface");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Already exists"));
    let content = std::fs::read_to_string(dir.join("config.toml")).unwrap();
    assert_eq!(content, "[clock]\noffset_hours = 3\n");
}

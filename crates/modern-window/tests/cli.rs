use std::process::Command;

/// Creates an empty directory to stand in for the home directory.
#[cfg(unix)]
fn scratch_home(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("modern-window-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create scratch home");
    dir
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modern-window"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute modern-window");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("custom title bar"));
    assert!(stdout.contains("doctor"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modern-window"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute modern-window");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("modern-window"));
}

#[test]
fn run_help_lists_title_option() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modern-window"));
    cmd.args(["run", "--help"]);

    // Act
    let output = cmd.output().expect("failed to execute modern-window");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--title"));
}

#[test]
fn unknown_subcommand_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_modern-window"))
        .arg("tile")
        .output()
        .expect("failed to execute modern-window");

    assert!(!output.status.success());
}

#[cfg(unix)]
#[test]
fn init_writes_config_once() {
    // Arrange
    let home = scratch_home("init");
    let config = home.join(".config/modern-window/config.toml");

    // Act
    let first = Command::new(env!("CARGO_BIN_EXE_modern-window"))
        .arg("init")
        .env("HOME", &home)
        .output()
        .expect("failed to execute modern-window");
    let second = Command::new(env!("CARGO_BIN_EXE_modern-window"))
        .arg("init")
        .env("HOME", &home)
        .output()
        .expect("failed to execute modern-window");

    // Assert
    assert!(first.status.success());
    assert!(String::from_utf8_lossy(&first.stdout).contains("Created"));
    let written = std::fs::read_to_string(&config).expect("config.toml not written");
    assert!(written.contains("[title_bar]"));
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("Already exists"));

    let _ = std::fs::remove_dir_all(&home);
}

#[cfg(all(unix, not(windows)))]
#[test]
fn run_requires_windows_host() {
    // Arrange
    let home = scratch_home("run");

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_modern-window"))
        .args(["run", "--title", "Test"])
        .env("HOME", &home)
        .output()
        .expect("failed to execute modern-window");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("requires a Windows host"));

    let _ = std::fs::remove_dir_all(&home);
}

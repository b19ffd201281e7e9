use modern_window_core::config;

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

pub fn execute() {
    println!();
    let config = check_config_file();
    check_host(&config);
    println!();
}

/// Validates `config.toml` and returns the configuration the window
/// would run with.
fn check_config_file() -> config::Config {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return config::Config::default();
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults)");
        return config::Config::default();
    }
    match config::try_load() {
        Ok(config) => {
            println!("  {OK} config.toml is valid ({})", path.display());
            config
        }
        Err(e) => {
            println!("  {FAIL} config.toml: {e}");
            config::Config::default()
        }
    }
}

#[cfg(windows)]
fn check_host(config: &config::Config) {
    use modern_window_windows::{build_number, monitor};

    let build = build_number::build_number();
    let version = build_number::windows_version();
    if build == 0 {
        println!("  {WARN} Could not read the Windows build number");
    } else {
        println!("  {OK} Windows build {build} ({version})");
    }

    if version.has_snap_layouts() {
        println!("  {OK} Snap layouts flyout available");
    } else {
        println!("  {WARN} Snap layouts flyout needs Windows 11; snap area acts as maximize");
    }

    let policy = config.resize_border.policy.resolve(version);
    println!(
        "  {OK} Resize hit testing: {policy:?} (configured {:?})",
        config.resize_border.policy
    );

    match monitor::primary_work_area() {
        Ok(wa) => println!(
            "  {OK} Primary work area {}x{} at ({}, {})",
            wa.width, wa.height, wa.x, wa.y
        ),
        Err(e) => println!("  {FAIL} Could not query primary monitor: {e}"),
    }
}

#[cfg(not(windows))]
fn check_host(_config: &config::Config) {
    println!("  {FAIL} Windows host required");
    eprintln!("{}", super::REQUIRES_WINDOWS);
    std::process::exit(1);
}

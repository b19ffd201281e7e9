pub mod doctor;
pub mod init;
pub mod run;

/// Message printed by commands that need the Win32 API.
#[cfg(not(windows))]
pub const REQUIRES_WINDOWS: &str = "Error: modern-window requires a Windows host.";

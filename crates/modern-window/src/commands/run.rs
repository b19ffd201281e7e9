use clap::Args;
use modern_window_core::{Config, config, log};

#[derive(Args, Default)]
pub struct RunArgs {
    /// Window title (overrides the config file)
    #[arg(long)]
    pub title: Option<String>,
}

/// Shows the window and pumps messages until it is closed.
///
/// Exits with the code carried by `WM_QUIT`, or 1 if the window could
/// not be created.
pub fn execute(args: &RunArgs) {
    let config = config::load();
    log::init(&config.logging);

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| config.window.title.clone());
    std::process::exit(run_window(&title, &config));
}

#[cfg(windows)]
fn run_window(title: &str, config: &Config) -> i32 {
    use modern_window_core::{log_error, log_info};
    use modern_window_windows::{ModernWindow, event_loop};

    let window = match ModernWindow::create(None, title, config) {
        Ok(window) => window,
        Err(e) => {
            log_error!("Window creation failed: {e}");
            eprintln!("Error: could not create window: {e}");
            return 1;
        }
    };
    window.show();
    log_info!("Showing \"{title}\" with {:?} hit testing", window.policy());

    let code = event_loop::run();
    log_info!("Message loop exited with code {code}");
    drop(window);
    code
}

#[cfg(not(windows))]
fn run_window(_title: &str, _config: &Config) -> i32 {
    eprintln!("{}", super::REQUIRES_WINDOWS);
    1
}

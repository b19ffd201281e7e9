pub mod chrome;
pub mod color;
pub mod config;
pub mod input;
pub mod log;
pub mod paint;
pub mod rect;
pub mod registry;
pub mod sizing;
pub mod version;
pub mod window;

pub use chrome::{ChromeMetrics, ChromeState, HotZones, ResizeBorder};
pub use color::Color;
pub use config::Config;
pub use hit_test::{HitZone, ResizePolicy};
pub use input::{ButtonAction, SyntheticClick};
pub use paint::{ChromeStyle, Surface};
pub use rect::{Point, Rect};
pub use registry::HandleRegistry;
pub use version::WindowsVersion;
pub use window::WindowResult;

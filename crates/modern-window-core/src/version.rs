//! Windows release detection from the OS build number.
//!
//! The build number itself is read once by the platform crate
//! (`modern-window-windows::build_number`); everything here is a pure
//! classification of that integer.

use std::fmt;

use crate::hit_test::ResizePolicy;

/// Windows releases the chrome corrections care about, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindowsVersion {
    Unknown,
    Windows7,
    Windows8,
    Windows8_1,
    Windows10,
    Windows11,
}

/// First build of each release, newest first.
const THRESHOLDS: &[(u32, WindowsVersion)] = &[
    (22000, WindowsVersion::Windows11),
    (10240, WindowsVersion::Windows10),
    (9600, WindowsVersion::Windows8_1),
    (9200, WindowsVersion::Windows8),
    (7600, WindowsVersion::Windows7),
];

impl WindowsVersion {
    /// Classifies a `CurrentBuildNumber` value. Zero (unreadable) and
    /// anything older than Windows 7 map to `Unknown`.
    pub fn from_build(build: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| build >= *min)
            .map_or(Self::Unknown, |(_, version)| *version)
    }

    /// Whether the shell shows the snap layouts flyout on maximize hover.
    pub fn has_snap_layouts(self) -> bool {
        self >= Self::Windows11
    }

    /// The resize-border strategy that behaves best on this release.
    ///
    /// Windows 10 and later return sane defaults from `DefWindowProc`
    /// for a captionless thick-frame window, so only the top corners
    /// need correcting. Older or unknown releases get the fully
    /// self-contained classification.
    pub fn preferred_policy(self) -> ResizePolicy {
        if self >= Self::Windows10 {
            ResizePolicy::CornerFix
        } else {
            ResizePolicy::Direct
        }
    }
}

impl fmt::Display for WindowsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Windows7 => "Windows 7",
            Self::Windows8 => "Windows 8",
            Self::Windows8_1 => "Windows 8.1",
            Self::Windows10 => "Windows 10",
            Self::Windows11 => "Windows 11",
        };
        f.write_str(name)
    }
}

/// Parses the registry's string form of the build number.
///
/// Accepts surrounding whitespace and trailing NULs; anything else that
/// is not a plain decimal yields 0.
pub fn parse_build_number(raw: &str) -> u32 {
    raw.trim_end_matches('\0').trim().parse().unwrap_or(0)
}

use std::fmt;

use crate::network::target::AddressFamily;

/// Identifiers whose `ping` takes `-c` for the echo count.
const POSIX_IDENTIFIERS: &[&str] = &[
    "linux",
    "macos",
    "darwin",
    "freebsd",
    "openbsd",
    "netbsd",
    "dragonfly",
    "android",
    "ios",
    "solaris",
    "illumos",
];

/// Flag dialect of the platform `ping` utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Maps an OS identifier to a dialect. Unknown identifiers fall back to [`Platform::Windows`].
    pub fn from_identifier(id: &str) -> Self {
        let id = id.trim().to_ascii_lowercase();
        if POSIX_IDENTIFIERS.contains(&id.as_str()) {
            Platform::Posix
        } else {
            Platform::Windows
        }
    }

    /// Dialect of the OS this binary was built for.
    pub fn host() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    pub fn count_flag(self) -> &'static str {
        match self {
            Platform::Posix => "-c",
            Platform::Windows => "-n",
        }
    }

    /// Both dialects spell the family flag the same way.
    pub fn family_flag(family: AddressFamily) -> &'static str {
        match family {
            AddressFamily::V4 => "-4",
            AddressFamily::V6 => "-6",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => f.write_str("posix"),
            Platform::Windows => f.write_str("windows"),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! Target operating system and platform.

use super::Arch;

/// Operating system the release is built for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TargetOs {
    Linux,
    MacOs,
    Windows,
    FreeBsd,
    /// Any other OS; built natively without an explicit target triple.
    Other(String),
}

impl TargetOs {
    /// Maps a Rust OS name (`std::env::consts::OS`) to a [`TargetOs`].
    pub fn from_rust_os(os: &str) -> Self {
        match os {
            "linux" => TargetOs::Linux,
            "macos" => TargetOs::MacOs,
            "windows" => TargetOs::Windows,
            "freebsd" => TargetOs::FreeBsd,
            other => TargetOs::Other(other.to_string()),
        }
    }

    /// Returns `true` for Linux, the only OS that gets .deb and .rpm packages.
    pub fn is_linux(&self) -> bool {
        matches!(self, TargetOs::Linux)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TargetOs::Linux => "linux",
            TargetOs::MacOs => "macos",
            TargetOs::Windows => "windows",
            TargetOs::FreeBsd => "freebsd",
            TargetOs::Other(name) => name,
        }
    }
}

impl std::fmt::Display for TargetOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system and architecture pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Platform {
    pub os: TargetOs,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: TargetOs, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Rust target triple handed to cargo, when one is known for this pair.
    ///
    /// `None` means cargo builds for its own host.
    pub fn rust_triple(&self) -> Option<String> {
        let arch = self.arch.triple_arch();
        match (&self.os, self.arch) {
            (TargetOs::Linux, Arch::Armhf) => Some(format!("{arch}-unknown-linux-gnueabihf")),
            (TargetOs::Linux, Arch::Armel) => Some(format!("{arch}-unknown-linux-gnueabi")),
            (TargetOs::Linux, _) => Some(format!("{arch}-unknown-linux-gnu")),
            (TargetOs::MacOs, Arch::X86_64 | Arch::AArch64) => Some(format!("{arch}-apple-darwin")),
            (TargetOs::Windows, Arch::X86_64 | Arch::X86 | Arch::AArch64) => {
                Some(format!("{arch}-pc-windows-msvc"))
            }
            (TargetOs::FreeBsd, Arch::X86_64 | Arch::X86 | Arch::AArch64) => {
                Some(format!("{arch}-unknown-freebsd"))
            }
            _ => None,
        }
    }

    /// File name of a compiled binary on this platform.
    pub fn executable_name(&self, name: &str) -> String {
        match self.os {
            TargetOs::Windows => format!("{name}.exe"),
            _ => name.to_string(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

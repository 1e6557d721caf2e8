//! CPU architecture types and utilities.

/// CPU architecture of the release binaries.
///
/// Each packaging format names architectures differently, so the type carries
/// one accessor per consumer instead of a single display form.
///
/// # Examples
///
/// ```
/// use build_release::release::Arch;
///
/// assert_eq!(Arch::X86_64.release_name(), "amd64");
/// assert_eq!(Arch::X86_64.rpm_name(), "x86_64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit)
    AArch64,
    /// ARM with hard-float (32-bit)
    Armhf,
    /// ARM with soft-float (32-bit)
    Armel,
    /// RISC-V (64-bit)
    Riscv64,
}

impl Arch {
    /// Maps a Rust architecture name (`std::env::consts::ARCH`) to an [`Arch`].
    pub fn from_rust_arch(arch: &str) -> Option<Self> {
        match arch {
            "x86_64" => Some(Arch::X86_64),
            "x86" | "i686" | "i586" => Some(Arch::X86),
            "aarch64" => Some(Arch::AArch64),
            "arm" | "armv7" => Some(Arch::Armhf),
            "armv5te" => Some(Arch::Armel),
            "riscv64" | "riscv64gc" => Some(Arch::Riscv64),
            _ => None,
        }
    }

    /// Name used in tarball file names and Debian control files.
    pub fn release_name(self) -> &'static str {
        match self {
            Arch::X86_64 => "amd64",
            Arch::X86 => "i386",
            Arch::AArch64 => "arm64",
            Arch::Armhf => "armhf",
            Arch::Armel => "armel",
            Arch::Riscv64 => "riscv64",
        }
    }

    /// Name used by rpmbuild (`--target`, `BuildArch`).
    pub fn rpm_name(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "i686",
            Arch::AArch64 => "aarch64",
            Arch::Armhf => "armv7hl",
            Arch::Armel => "armv5tel",
            Arch::Riscv64 => "riscv64",
        }
    }

    /// Architecture component of the Rust target triple.
    pub(crate) fn triple_arch(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "i686",
            Arch::AArch64 => "aarch64",
            Arch::Armhf => "armv7",
            Arch::Armel => "arm",
            Arch::Riscv64 => "riscv64gc",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.release_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rust_arch_names() {
        assert_eq!(Arch::from_rust_arch("x86_64"), Some(Arch::X86_64));
        assert_eq!(Arch::from_rust_arch("aarch64"), Some(Arch::AArch64));
        assert_eq!(Arch::from_rust_arch("arm"), Some(Arch::Armhf));
        assert_eq!(Arch::from_rust_arch("mips"), None);
    }

    #[test]
    fn package_names_follow_each_tool() {
        assert_eq!(Arch::AArch64.release_name(), "arm64");
        assert_eq!(Arch::AArch64.rpm_name(), "aarch64");
        assert_eq!(Arch::X86.release_name(), "i386");
        assert_eq!(Arch::X86.rpm_name(), "i686");
        assert_eq!(Arch::Armhf.to_string(), "armhf");
    }
}

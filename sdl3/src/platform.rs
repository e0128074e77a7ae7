// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Compile targets the bindings are built and tested for.
//!
//! The set mirrors the native targets the SDL3 bindings are published for:
//! desktop Linux, Windows and macOS, iOS and tvOS devices and simulators, and
//! Android. [`Target::current`] resolves the target being compiled with
//! `cfg!`, so no detection happens at run time.

use std::fmt;

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Windows,
    MacOs,
    Ios,
    TvOs,
    Android,
}

impl Os {
    /// File name of the SDL3 shared library on this OS, as found by the
    /// system loader.
    pub fn library_file_name(self) -> &'static str {
        match self {
            Os::Linux => "libSDL3.so.0",
            Os::Android => "libSDL3.so",
            Os::Windows => "SDL3.dll",
            Os::MacOs => "libSDL3.0.dylib",
            Os::Ios | Os::TvOs => "SDL3.framework/SDL3",
        }
    }

    /// Returns `true` for Linux, Windows and macOS.
    pub fn is_desktop(self) -> bool {
        matches!(self, Os::Linux | Os::Windows | Os::MacOs)
    }
}

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    Aarch64,
}

/// A compile target: OS, architecture and whether it is a simulator build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub os: Os,
    pub arch: Arch,
    pub simulator: bool,
}

impl Target {
    const fn new(os: Os, arch: Arch) -> Self {
        Target {
            os,
            arch,
            simulator: false,
        }
    }

    const fn simulator(os: Os, arch: Arch) -> Self {
        Target {
            os,
            arch,
            simulator: true,
        }
    }

    /// The target this crate is being compiled for, or `None` for an OS or
    /// architecture outside [`Os`] and [`Arch`].
    pub fn current() -> Option<Target> {
        let os = if cfg!(target_os = "android") {
            Os::Android
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "ios") {
            Os::Ios
        } else if cfg!(target_os = "tvos") {
            Os::TvOs
        } else {
            return None;
        };

        let arch = if cfg!(target_arch = "x86") {
            Arch::X86
        } else if cfg!(target_arch = "x86_64") {
            Arch::X86_64
        } else if cfg!(target_arch = "arm") {
            Arch::Arm
        } else if cfg!(target_arch = "aarch64") {
            Arch::Aarch64
        } else {
            return None;
        };

        // x86_64 Apple mobile targets only exist as simulators.
        let simulator = matches!(os, Os::Ios | Os::TvOs)
            && (cfg!(target_abi = "sim") || arch == Arch::X86_64);

        Some(Target {
            os,
            arch,
            simulator,
        })
    }

    /// Returns `true` if this target is in [`SUPPORTED_TARGETS`].
    pub fn is_supported(&self) -> bool {
        SUPPORTED_TARGETS.contains(self)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.os, self.arch)?;
        if self.simulator {
            write!(f, "-simulator")?;
        }
        Ok(())
    }
}

/// Every target the bindings are built for.
pub const SUPPORTED_TARGETS: &[Target] = &[
    Target::new(Os::Android, Arch::X86),
    Target::new(Os::Android, Arch::X86_64),
    Target::new(Os::Android, Arch::Arm),
    Target::new(Os::Android, Arch::Aarch64),
    Target::new(Os::Windows, Arch::X86_64),
    Target::new(Os::MacOs, Arch::X86_64),
    Target::new(Os::MacOs, Arch::Aarch64),
    Target::simulator(Os::Ios, Arch::X86_64),
    Target::new(Os::Ios, Arch::Aarch64),
    Target::simulator(Os::Ios, Arch::Aarch64),
    Target::simulator(Os::TvOs, Arch::X86_64),
    Target::new(Os::TvOs, Arch::Aarch64),
    Target::simulator(Os::TvOs, Arch::Aarch64),
    Target::new(Os::Linux, Arch::X86_64),
    Target::new(Os::Linux, Arch::Aarch64),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_is_x86_64_only() {
        assert!(Target::new(Os::Windows, Arch::X86_64).is_supported());
        assert!(!Target::new(Os::Windows, Arch::Aarch64).is_supported());
    }

    #[test]
    fn apple_x86_64_mobile_targets_are_simulators() {
        assert!(Target::simulator(Os::Ios, Arch::X86_64).is_supported());
        assert!(!Target::new(Os::Ios, Arch::X86_64).is_supported());
    }

    #[test]
    fn targets_are_unique() {
        for (i, target) in SUPPORTED_TARGETS.iter().enumerate() {
            assert!(!SUPPORTED_TARGETS[i + 1..].contains(target), "{target}");
        }
    }

    #[test]
    fn only_mobile_targets_are_simulators() {
        assert!(Os::Linux.is_desktop() && Os::Windows.is_desktop() && Os::MacOs.is_desktop());
        assert!(!Os::Ios.is_desktop() && !Os::TvOs.is_desktop() && !Os::Android.is_desktop());
        for target in SUPPORTED_TARGETS.iter().filter(|target| target.simulator) {
            assert!(!target.os.is_desktop(), "{target}");
        }
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[test]
    fn current_target_on_linux_x86_64() {
        let target = Target::current().unwrap();
        assert_eq!(target, Target::new(Os::Linux, Arch::X86_64));
        assert!(target.is_supported());
        assert_eq!(target.os.library_file_name(), "libSDL3.so.0");
    }

    #[test]
    fn display_marks_simulators() {
        assert_eq!(
            Target::simulator(Os::Ios, Arch::Aarch64).to_string(),
            "Ios-Aarch64-simulator"
        );
        assert_eq!(Target::new(Os::Linux, Arch::X86_64).to_string(), "Linux-X86_64");
    }
}

// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Location of the SDL3 shared library.
//!
//! The path handed to [`crate::load_api`] is resolved in this order:
//!
//! 1. the `SDL3_LIBRARY_PATH` environment variable at run time
//! 2. `SDL3_LIB_DIR` as set when this crate was built, joined with the
//!    platform's library file name
//! 3. the bare library file name, left to the system loader's search path

use std::{ffi::OsString, path::PathBuf};

use crate::platform::{Os, Target};

// Build script generates constants.rs with SDL3_LIB_DIR
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Environment variable overriding the library path at run time.
pub const LIBRARY_PATH_ENV: &str = "SDL3_LIBRARY_PATH";

/// Returns the path of the SDL3 shared library for the current target.
///
/// # Examples
///
/// ```no_run
/// use sdl3::config::get_sdl3_library_path;
/// use sdl3::load_api;
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl3_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn get_sdl3_library_path() -> PathBuf {
    let os = Target::current().map_or(Os::Linux, |target| target.os);
    resolve_library_path(std::env::var_os(LIBRARY_PATH_ENV), SDL3_LIB_DIR, os)
}

/// Applies the resolution order described in the module documentation.
///
/// Empty values count as unset.
pub fn resolve_library_path(
    env_override: Option<OsString>,
    lib_dir: Option<&str>,
    os: Os,
) -> PathBuf {
    if let Some(path) = env_override.filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }

    match lib_dir.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir).join(os.library_file_name()),
        None => PathBuf::from(os.library_file_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_override_wins() {
        let path = resolve_library_path(
            Some(OsString::from("/opt/sdl/libSDL3.so")),
            Some("/usr/local/lib"),
            Os::Linux,
        );
        assert_eq!(path, PathBuf::from("/opt/sdl/libSDL3.so"));
    }

    #[test]
    fn build_time_directory_is_joined_with_the_file_name() {
        let path = resolve_library_path(None, Some("/usr/local/lib"), Os::Windows);
        assert_eq!(path, PathBuf::from("/usr/local/lib").join("SDL3.dll"));
    }

    #[test]
    fn falls_back_to_the_loader_search_path() {
        let path = resolve_library_path(Some(OsString::new()), Some(""), Os::MacOs);
        assert_eq!(path, PathBuf::from("libSDL3.0.dylib"));
    }
}

// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Build script for the `sdl3` crate.
//!
//! This script generates `constants.rs` containing the SDL3 library directory
//! given through `SDL3_LIB_DIR` at build time, if any. The configuration
//! module uses it as a fallback when locating the shared library at run time.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SDL3_LIB_DIR");

    let lib_dir = env::var("SDL3_LIB_DIR").ok().filter(|dir| !dir.is_empty());

    // Generate constants.rs in the build output directory
    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"))
        .join("constants.rs");

    let data = match lib_dir {
        Some(dir) => format!("pub const SDL3_LIB_DIR: Option<&str> = Some({dir:?});\n"),
        None => "pub const SDL3_LIB_DIR: Option<&str> = None;\n".to_string(),
    };
    std::fs::write(out_path, data).expect("Unable to write file");
}

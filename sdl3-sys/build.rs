// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Build script for `sdl3-sys` FFI crate.
//!
//! This script:
//! 1. Generates Rust FFI bindings from the vendored `wrapper.h` using `bindgen`
//! 2. Configures dynamic library loading via `libloading`
//!
//! No SDL3 library is needed at build time; symbols are resolved when the
//! library is opened at run time.

use bindgen::callbacks::ParseCallbacks;
use std::env;
use std::path::PathBuf;

/// Header describing the subset of the SDL3 API exposed by this crate.
const HEADER: &str = "wrapper.h";

/// Main build entry point.
fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("failed to get current directory"));
    let header = manifest_dir.join(HEADER);
    println!("cargo:rerun-if-changed={}", header.display());

    // Generate Rust FFI bindings from the C header
    let bindings = bindgen::builder()
        .header(header.to_string_lossy())
        .allowlist_item("SDL_.*")
        .derive_default(true)
        .derive_debug(true)
        .prepend_enum_name(false)
        .dynamic_library_name("libsdl3")
        .dynamic_link_require_all(true)
        .parse_callbacks(Box::new(CB))
        .generate()
        .expect("Unable to generate SDL3 bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"));
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Could not write bindings");
}

/// Custom bindgen callback for name transformations.
#[derive(Debug)]
struct CB;

impl ParseCallbacks for CB {
    /// Transforms C names to idiomatic Rust names.
    ///
    /// - Functions: `SDL_CreateWindow` → `create_window`
    /// - Types: `SDL_Window` → `Window`
    fn item_name(&self, item_info: bindgen::callbacks::ItemInfo) -> Option<String> {
        let stripped = item_info.name.strip_prefix("SDL_")?;
        match item_info.kind {
            bindgen::callbacks::ItemKind::Function => Some(to_snake_case(stripped)),

            bindgen::callbacks::ItemKind::Type => Some(stripped.to_string()),

            _ => None,
        }
    }
}

/// Converts CamelCase to snake_case for function names.
///
/// Runs of capitals are kept together, so `GetWindowID` → `get_window_id`
/// and `InitSubSystem` → `init_sub_system`.
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! # sdl3-sys: Raw FFI bindings to the SDL3 C library
//!
//! This crate provides low-level, unsafe Rust bindings to SDL3. They are
//! generated by `bindgen` from the vendored `wrapper.h` and resolved at run
//! time through `libloading`.
//!
//! ## Overview
//!
//! `sdl3-sys` exposes:
//! - Raw C types (`Window`, `InitFlags`, `WindowFlags`, ...)
//! - The [`libsdl3`] loader, whose methods are the C functions with the `SDL_`
//!   prefix removed and converted to snake_case (`SDL_CreateWindow` →
//!   `create_window`)
//! - Constants for init flags, window flags and hint names, under their C names
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the safe [`sdl3`]
//! wrapper crate instead, which provides:
//! - RAII ownership of windows and of the library lifecycle
//! - Rust-idiomatic error handling with `Result`
//! - Typed flag sets
//!
//! ## Safety
//!
//! All functions in this crate are `unsafe` and require the caller to uphold
//! SDL's invariants:
//! - `SDL_Init` must succeed before any window is created
//! - Video functions must be called from the thread that initialised SDL
//! - Null checks are the caller's responsibility
//!
//! [`sdl3`]: https://docs.rs/sdl3

// Suppress expected warnings from bindgen-generated code.
// See https://github.com/rust-lang/rust-bindgen/issues/1651.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(missing_docs)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(rustdoc::invalid_html_tags)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(deref_nullptr)]
#![allow(clippy::missing_safety_doc)]

extern crate libloading;

// Include bindgen-generated FFI bindings
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

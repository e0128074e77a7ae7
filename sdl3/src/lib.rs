// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! # SDL3
//!
//! Safe, idiomatic Rust bindings for the SDL3 C library.
//!
//! ## Overview
//!
//! This crate wraps the raw FFI of [`sdl3_sys`] with owned types. The SDL3
//! shared library is opened at run time ([`load_api`]), so nothing links
//! against SDL when the crate is built.
//!
//! ### Key Concepts
//!
//! - **API**: the loaded SDL3 library ([`SdlApiHandle`]), shareable across threads
//! - **Context**: an initialised library ([`Sdl`]); one per process, shut down
//!   when the last owner is dropped
//! - **Window**: an owned `SDL_Window` ([`Window`]), destroyed when dropped
//!
//! ## Architecture
//!
//! ```text
//! load_api ──► SdlApiHandle ──► Sdl::init ──► Sdl
//!                                              │
//!                                              └─► Window (keeps Sdl alive)
//! ```
//!
//! ## Examples
//!
//! ```no_run
//! use sdl3::{InitFlags, Sdl, WindowFlags, config::get_sdl3_library_path, load_api};
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! // Load the SDL3 dynamic library
//! let api = load_api(get_sdl3_library_path())?;
//!
//! // Initialise the video subsystem
//! let sdl = Sdl::init(api, InitFlags::VIDEO)?;
//!
//! // Create a window; it is destroyed when `window` goes out of scope
//! let window = sdl.create_window("Test Window", 800, 600, WindowFlags::RESIZABLE)?;
//! println!("Window {} is {:?}", window.id(), window.size()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! - [`SdlApiHandle`] is `Send + Sync`
//! - [`Sdl`] and [`Window`] are neither `Send` nor `Sync`: SDL requires video
//!   calls on the thread that initialised it
//!
//! ## Errors
//!
//! A failed `SDL_CreateWindow` is reported as [`Error::WindowCreation`],
//! whose message is always "Failed to create SDL Window"; SDL's own
//! diagnostic is kept in its `reason` field.

mod api;
mod context;
mod error;
mod flags;
mod window;

pub mod config;
pub mod platform;

pub use api::{
    HINT_APP_NAME, HINT_VIDEO_DRIVER, SdlApi, SdlApiHandle, Version, clear_error, last_error,
    load_api, revision, set_hint, version,
};
pub use context::Sdl;
pub use error::{Error, Result};
pub use flags::{InitFlags, WindowFlags};
pub use sdl3_sys as sys;
pub use window::Window;

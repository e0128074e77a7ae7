// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Error types for SDL operations.
//!
//! This module defines the error types returned by the safe wrappers, mapping
//! SDL's `bool` + `SDL_GetError()` reporting to idiomatic Rust error enums.

use crate::api::{SdlApi, error_message};

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when using the SDL API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `SDL_CreateWindow` returned no window, or the arguments could not be
    /// passed to it.
    ///
    /// The message is fixed. `reason` holds what SDL reported through
    /// `SDL_GetError()`, when it reported anything.
    #[error("Failed to create SDL Window")]
    WindowCreation {
        /// Diagnostic reported by SDL, if any.
        reason: Option<String>,
    },

    /// `SDL_Init` or `SDL_InitSubSystem` failed.
    #[error("Failed to initialize SDL: {0}")]
    Init(String),

    /// Another [`crate::Sdl`] context is alive in this process.
    #[error("SDL is already initialized in this process")]
    AlreadyInitialized,

    /// An SDL call reported failure.
    #[error("SDL error: {0}")]
    Sdl(String),

    /// A generic error for Rust-level failures not reported by SDL itself
    /// (e.g., UTF-8 conversion failures, contexts still in use).
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to convert a Rust string to a C-compatible null-terminated string.
    #[error("Null string: {0}")]
    NulString(#[from] std::ffi::NulError),

    /// Failed to load or interact with the SDL3 dynamic library.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

impl Error {
    /// Converts the `bool` returned by most SDL3 functions to a [`Result`].
    ///
    /// On failure the message is taken from `SDL_GetError()`.
    ///
    /// ```ignore
    /// let ok = unsafe { api.show_window(window) };
    /// Error::from_sdl_result(api, ok)?;
    /// ```
    pub(crate) fn from_sdl_result(api: &dyn SdlApi, ok: bool) -> Result<()> {
        if ok {
            Ok(())
        } else {
            Err(Error::Sdl(
                error_message(api).unwrap_or_else(|| "unknown SDL error".to_string()),
            ))
        }
    }
}

// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Process-wide SDL library lifecycle.
//!
//! This module provides [`Sdl`], the handle returned by a successful
//! `SDL_Init`. At most one context is alive per process; dropping the last
//! owner calls `SDL_Quit`.

use std::{
    rc::Rc,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    Error, InitFlags, Result, Window, WindowFlags,
    api::{self, SdlApi, SdlApiHandle, Version},
};

/// Set while an [`SdlContext`] exists.
static SDL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Internal shared state of an initialised SDL library.
///
/// Shared between [`Sdl`] and every [`Window`] created from it, so SDL is
/// only shut down once the last window is gone.
pub(crate) struct SdlContext {
    pub(crate) api: SdlApiHandle,
}

impl Drop for SdlContext {
    /// Shuts SDL down and releases the process guard.
    fn drop(&mut self) {
        unsafe { self.api.quit() };
        SDL_ACTIVE.store(false, Ordering::Release);
        tracing::debug!("SDL shut down");
    }
}

/// An initialised SDL library.
///
/// Created by [`Sdl::init`]; SDL stays initialised while this value, one of
/// its clones, or any [`Window`] created from it is alive.
///
/// # Thread Safety
///
/// `Sdl` is neither `Send` nor `Sync`. SDL's video functions must run on the
/// thread that initialised the library, and the types of this crate keep
/// every window operation on that thread.
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<sdl3::Sdl>();
/// ```
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<sdl3::Sdl>();
/// ```
///
/// # Examples
///
/// ```no_run
/// use sdl3::{InitFlags, Sdl, WindowFlags, config::get_sdl3_library_path, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl3_library_path())?;
/// let sdl = Sdl::init(api, InitFlags::VIDEO)?;
/// let window = sdl.create_window("Hello", 800, 600, WindowFlags::RESIZABLE)?;
/// window.show()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Sdl {
    context: Rc<SdlContext>,
}

impl Sdl {
    /// Initialises SDL with the given subsystems (`SDL_Init`).
    ///
    /// # Arguments
    ///
    /// * `api` - The loaded SDL3 library, see [`crate::load_api`]
    /// * `flags` - The subsystems to start, for example [`InitFlags::VIDEO`]
    ///
    /// # Returns
    ///
    /// The process-wide SDL context. SDL stays initialised until it and every
    /// window created from it are dropped.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::AlreadyInitialized`] if another `Sdl` is alive in this
    ///   process; SDL is not called in that case
    /// - [`Error::Init`] if `SDL_Init` fails
    pub fn init(api: SdlApiHandle, flags: InitFlags) -> Result<Self> {
        if SDL_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::AlreadyInitialized);
        }

        if !unsafe { api.init(flags.bits()) } {
            let reason = api::error_message(api.as_ref())
                .unwrap_or_else(|| "SDL_Init failed.".to_string());
            SDL_ACTIVE.store(false, Ordering::Release);
            return Err(Error::Init(reason));
        }

        tracing::debug!("SDL initialized with {:?}", flags);
        Ok(Self {
            context: Rc::new(SdlContext { api }),
        })
    }

    /// Returns `true` while an `Sdl` context exists in this process.
    pub fn is_initialized() -> bool {
        SDL_ACTIVE.load(Ordering::Acquire)
    }

    pub(crate) fn context(&self) -> &Rc<SdlContext> {
        &self.context
    }

    /// Returns the API this context was initialised with.
    pub fn api(&self) -> &SdlApiHandle {
        &self.context.api
    }

    /// Returns the version of the loaded SDL library.
    pub fn version(&self) -> Version {
        api::version(&self.context.api)
    }

    /// Returns the last SDL error message on this thread, if any.
    pub fn last_error(&self) -> Option<String> {
        api::last_error(&self.context.api)
    }

    /// Initialises additional subsystems (`SDL_InitSubSystem`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if SDL fails to start any of them.
    pub fn init_subsystem(&self, flags: InitFlags) -> Result<()> {
        let api = self.context.api.as_ref();
        if unsafe { api.init_sub_system(flags.bits()) } {
            Ok(())
        } else {
            Err(Error::Init(
                api::error_message(api).unwrap_or_else(|| "SDL_InitSubSystem failed.".to_string()),
            ))
        }
    }

    /// Shuts down individual subsystems (`SDL_QuitSubSystem`).
    pub fn quit_subsystem(&self, flags: InitFlags) {
        unsafe { self.context.api.quit_sub_system(flags.bits()) }
    }

    /// Returns which of `flags` are currently initialised (`SDL_WasInit`).
    ///
    /// Passing an empty set returns every initialised subsystem.
    pub fn was_init(&self, flags: InitFlags) -> InitFlags {
        InitFlags::from_bits_retain(unsafe { self.context.api.was_init(flags.bits()) })
    }

    /// Gathers pending input and window-system events (`SDL_PumpEvents`).
    ///
    /// Some window systems only map a window once events are processed.
    pub fn pump_events(&self) {
        unsafe { self.context.api.pump_events() }
    }

    /// Creates a window. Same as [`Window::new`].
    pub fn create_window(
        &self,
        title: &str,
        width: i32,
        height: i32,
        flags: WindowFlags,
    ) -> Result<Window> {
        Window::new(self, title, width, height, flags)
    }

    /// Shuts SDL down now (`SDL_Quit`), consuming `self`.
    ///
    /// Normally SDL is shut down when the last owner is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if clones of this context or windows created from it
    /// are still alive. SDL then stays initialised until they are dropped.
    pub fn quit(self) -> Result<()> {
        let context = Rc::into_inner(self.context)
            .ok_or_else(|| Error::Other("SDL is still in use.".to_string()))?;
        drop(context);
        Ok(())
    }
}

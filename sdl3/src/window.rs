// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Window ownership.

use std::{ffi::CString, os::raw::c_int, rc::Rc};

use crate::{
    Error, Result, Sdl, WindowFlags,
    api::{self, SdlApi},
    context::SdlContext,
};

/// An SDL window.
///
/// A `Window` exclusively owns one `SDL_Window` handle. The handle is valid
/// for as long as the `Window` exists and is released with
/// `SDL_DestroyWindow` when it is dropped or [`destroyed`](Self::destroy).
///
/// The accessors [`title`](Self::title), [`width`](Self::width),
/// [`height`](Self::height) and [`flags`](Self::flags) return the values the
/// window was created with. Current state is queried from SDL through
/// [`native_title`](Self::native_title), [`size`](Self::size) and
/// [`native_flags`](Self::native_flags).
///
/// # Thread Safety
///
/// `Window` is neither `Send` nor `Sync`; it can only be used on the thread
/// that initialised SDL.
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<sdl3::Window>();
/// ```
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<sdl3::Window>();
/// ```
pub struct Window {
    context: Rc<SdlContext>,
    window: *mut sdl3_sys::Window,
    title: String,
    width: i32,
    height: i32,
    flags: WindowFlags,
}

impl Window {
    /// Creates a window (`SDL_CreateWindow`).
    ///
    /// Arguments are passed to SDL unchanged; sizes and flags are not checked
    /// here.
    ///
    /// # Arguments
    ///
    /// * `sdl` - The initialised SDL context; the window keeps it alive
    /// * `title` - The window title, UTF-8 without nul bytes
    /// * `width` - The requested client-area width
    /// * `height` - The requested client-area height
    /// * `flags` - The window flags, unknown bits included
    ///
    /// # Returns
    ///
    /// A window owning the new `SDL_Window` handle, whose accessors echo the
    /// arguments above.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowCreation`] if SDL returns no window, or if the
    /// title contains a nul byte (SDL is not called then). The error's
    /// `reason` holds SDL's diagnostic when it gave one.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sdl3::{Sdl, Window, WindowFlags};
    /// # fn example(sdl: &Sdl) -> Result<(), sdl3::Error> {
    /// let window = Window::new(sdl, "Test Window", 800, 600, WindowFlags::empty())?;
    /// assert_eq!(window.width(), 800);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(sdl: &Sdl, title: &str, width: i32, height: i32, flags: WindowFlags) -> Result<Self> {
        let context = sdl.context();
        let c_title = CString::new(title).map_err(|err| Error::WindowCreation {
            reason: Some(err.to_string()),
        })?;

        let window = unsafe {
            context
                .api
                .create_window(c_title.as_ptr(), width, height, flags.bits())
        };
        if window.is_null() {
            let reason = api::error_message(context.api.as_ref());
            tracing::warn!(
                "Failed to create window \"{}\" ({}x{}, {:?}): {}",
                title,
                width,
                height,
                flags,
                reason.as_deref().unwrap_or("no reason given")
            );
            return Err(Error::WindowCreation { reason });
        }

        tracing::debug!("Created window \"{}\" ({}x{})", title, width, height);
        Ok(Self {
            context: context.clone(),
            window,
            title: title.to_string(),
            width,
            height,
            flags,
        })
    }

    /// Title the window was created with.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Width the window was created with.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height the window was created with.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Flags the window was created with.
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Returns the raw `SDL_Window` handle.
    ///
    /// The pointer is owned by this `Window` and must not be destroyed by the
    /// caller.
    pub fn as_raw(&self) -> *mut sdl3_sys::Window {
        self.window
    }

    fn api(&self) -> &dyn SdlApi {
        self.context.api.as_ref()
    }

    /// Returns the numeric ID of the window (`SDL_GetWindowID`).
    pub fn id(&self) -> u32 {
        unsafe { self.api().get_window_id(self.window) }
    }

    /// Returns the flags SDL currently reports for the window.
    pub fn native_flags(&self) -> WindowFlags {
        WindowFlags::from_bits_retain(unsafe { self.api().get_window_flags(self.window) })
    }

    /// Returns the title SDL currently reports for the window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] if SDL returns no title or one that is not
    /// valid UTF-8.
    pub fn native_title(&self) -> Result<String> {
        let title = unsafe { api::string_from_ptr(self.api().get_window_title(self.window)) }?;
        title.ok_or_else(|| Error::Other("SDL returned no window title.".to_string()))
    }

    /// Changes the window title (`SDL_SetWindowTitle`).
    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = CString::new(title)?;
        let ok = unsafe { self.api().set_window_title(self.window, title.as_ptr()) };
        Error::from_sdl_result(self.api(), ok)
    }

    /// Returns the current size of the window's client area.
    pub fn size(&self) -> Result<(i32, i32)> {
        let mut width: c_int = 0;
        let mut height: c_int = 0;
        let ok = unsafe {
            self.api()
                .get_window_size(self.window, &mut width, &mut height)
        };
        Error::from_sdl_result(self.api(), ok)?;
        Ok((width, height))
    }

    /// Requests a new client-area size (`SDL_SetWindowSize`).
    ///
    /// The values are passed to SDL unchanged.
    pub fn set_size(&self, width: i32, height: i32) -> Result<()> {
        let ok = unsafe { self.api().set_window_size(self.window, width, height) };
        Error::from_sdl_result(self.api(), ok)
    }

    /// Shows the window (`SDL_ShowWindow`).
    pub fn show(&self) -> Result<()> {
        let ok = unsafe { self.api().show_window(self.window) };
        Error::from_sdl_result(self.api(), ok)
    }

    /// Hides the window (`SDL_HideWindow`).
    pub fn hide(&self) -> Result<()> {
        let ok = unsafe { self.api().hide_window(self.window) };
        Error::from_sdl_result(self.api(), ok)
    }

    /// Explicitly destroys this window, releasing the handle immediately.
    ///
    /// Normally the window is destroyed automatically when dropped.
    pub fn destroy(mut self) {
        self.destroy_inner();
    }

    /// Internal helper to release the window handle.
    fn destroy_inner(&mut self) {
        let mut window = std::ptr::null_mut();
        std::mem::swap(&mut self.window, &mut window);

        unsafe { self.context.api.destroy_window(window) };
        tracing::debug!("Destroyed window \"{}\"", self.title);
    }
}

impl Drop for Window {
    /// Automatically destroys the window when dropped.
    fn drop(&mut self) {
        if !self.window.is_null() {
            self.destroy_inner();
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("window", &self.window)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("flags", &self.flags)
            .finish()
    }
}

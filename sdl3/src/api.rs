// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Loading of the SDL3 shared library and the foreign-call seam used by the
//! safe wrappers.
//!
//! Every foreign routine the crate calls goes through [`SdlApi`]. The trait is
//! implemented for the loader generated by `sdl3-sys`; [`load_api`] opens the
//! library and returns it as a shared [`SdlApiHandle`].

use std::{
    ffi::{CStr, CString, OsStr},
    fmt,
    os::raw::{c_char, c_int},
    sync::Arc,
};

use sdl3_sys::libsdl3;

use crate::{Error, Result};

/// Shared handle to a loaded SDL3 API.
pub type SdlApiHandle = Arc<dyn SdlApi>;

/// The SDL3 functions called by this crate.
///
/// Method names and signatures are those of the C functions, without the
/// `SDL_` prefix. An implementation must behave like the C function it stands
/// in for; in particular `create_window` returns null on failure and records
/// a message retrievable through `get_error`.
///
/// # Safety
///
/// The methods are `unsafe` for the same reasons as the C functions: pointer
/// arguments must be valid (C strings nul-terminated, window handles live) and
/// video functions must be called on the thread that initialised SDL.
#[allow(clippy::missing_safety_doc)]
pub trait SdlApi: Send + Sync {
    unsafe fn init(&self, flags: sdl3_sys::InitFlags) -> bool;
    unsafe fn init_sub_system(&self, flags: sdl3_sys::InitFlags) -> bool;
    unsafe fn quit_sub_system(&self, flags: sdl3_sys::InitFlags);
    unsafe fn was_init(&self, flags: sdl3_sys::InitFlags) -> sdl3_sys::InitFlags;
    unsafe fn quit(&self);
    unsafe fn pump_events(&self);

    unsafe fn get_error(&self) -> *const c_char;
    unsafe fn clear_error(&self) -> bool;
    unsafe fn set_hint(&self, name: *const c_char, value: *const c_char) -> bool;
    unsafe fn get_version(&self) -> c_int;
    unsafe fn get_revision(&self) -> *const c_char;

    unsafe fn create_window(
        &self,
        title: *const c_char,
        w: c_int,
        h: c_int,
        flags: sdl3_sys::WindowFlags,
    ) -> *mut sdl3_sys::Window;
    unsafe fn destroy_window(&self, window: *mut sdl3_sys::Window);
    unsafe fn get_window_id(&self, window: *mut sdl3_sys::Window) -> sdl3_sys::WindowID;
    unsafe fn get_window_flags(&self, window: *mut sdl3_sys::Window) -> sdl3_sys::WindowFlags;
    unsafe fn set_window_title(&self, window: *mut sdl3_sys::Window, title: *const c_char)
    -> bool;
    unsafe fn get_window_title(&self, window: *mut sdl3_sys::Window) -> *const c_char;
    unsafe fn set_window_size(&self, window: *mut sdl3_sys::Window, w: c_int, h: c_int) -> bool;
    unsafe fn get_window_size(
        &self,
        window: *mut sdl3_sys::Window,
        w: *mut c_int,
        h: *mut c_int,
    ) -> bool;
    unsafe fn show_window(&self, window: *mut sdl3_sys::Window) -> bool;
    unsafe fn hide_window(&self, window: *mut sdl3_sys::Window) -> bool;
}

impl SdlApi for libsdl3 {
    unsafe fn init(&self, flags: sdl3_sys::InitFlags) -> bool {
        unsafe { libsdl3::init(self, flags) }
    }

    unsafe fn init_sub_system(&self, flags: sdl3_sys::InitFlags) -> bool {
        unsafe { libsdl3::init_sub_system(self, flags) }
    }

    unsafe fn quit_sub_system(&self, flags: sdl3_sys::InitFlags) {
        unsafe { libsdl3::quit_sub_system(self, flags) }
    }

    unsafe fn was_init(&self, flags: sdl3_sys::InitFlags) -> sdl3_sys::InitFlags {
        unsafe { libsdl3::was_init(self, flags) }
    }

    unsafe fn quit(&self) {
        unsafe { libsdl3::quit(self) }
    }

    unsafe fn pump_events(&self) {
        unsafe { libsdl3::pump_events(self) }
    }

    unsafe fn get_error(&self) -> *const c_char {
        unsafe { libsdl3::get_error(self) }
    }

    unsafe fn clear_error(&self) -> bool {
        unsafe { libsdl3::clear_error(self) }
    }

    unsafe fn set_hint(&self, name: *const c_char, value: *const c_char) -> bool {
        unsafe { libsdl3::set_hint(self, name, value) }
    }

    unsafe fn get_version(&self) -> c_int {
        unsafe { libsdl3::get_version(self) }
    }

    unsafe fn get_revision(&self) -> *const c_char {
        unsafe { libsdl3::get_revision(self) }
    }

    unsafe fn create_window(
        &self,
        title: *const c_char,
        w: c_int,
        h: c_int,
        flags: sdl3_sys::WindowFlags,
    ) -> *mut sdl3_sys::Window {
        unsafe { libsdl3::create_window(self, title, w, h, flags) }
    }

    unsafe fn destroy_window(&self, window: *mut sdl3_sys::Window) {
        unsafe { libsdl3::destroy_window(self, window) }
    }

    unsafe fn get_window_id(&self, window: *mut sdl3_sys::Window) -> sdl3_sys::WindowID {
        unsafe { libsdl3::get_window_id(self, window) }
    }

    unsafe fn get_window_flags(&self, window: *mut sdl3_sys::Window) -> sdl3_sys::WindowFlags {
        unsafe { libsdl3::get_window_flags(self, window) }
    }

    unsafe fn set_window_title(
        &self,
        window: *mut sdl3_sys::Window,
        title: *const c_char,
    ) -> bool {
        unsafe { libsdl3::set_window_title(self, window, title) }
    }

    unsafe fn get_window_title(&self, window: *mut sdl3_sys::Window) -> *const c_char {
        unsafe { libsdl3::get_window_title(self, window) }
    }

    unsafe fn set_window_size(&self, window: *mut sdl3_sys::Window, w: c_int, h: c_int) -> bool {
        unsafe { libsdl3::set_window_size(self, window, w, h) }
    }

    unsafe fn get_window_size(
        &self,
        window: *mut sdl3_sys::Window,
        w: *mut c_int,
        h: *mut c_int,
    ) -> bool {
        unsafe { libsdl3::get_window_size(self, window, w, h) }
    }

    unsafe fn show_window(&self, window: *mut sdl3_sys::Window) -> bool {
        unsafe { libsdl3::show_window(self, window) }
    }

    unsafe fn hide_window(&self, window: *mut sdl3_sys::Window) -> bool {
        unsafe { libsdl3::hide_window(self, window) }
    }
}

/// Opens the SDL3 shared library and resolves every symbol this crate uses.
///
/// # Errors
///
/// Returns [`Error::LibLoading`] if the library cannot be opened or lacks one
/// of the required symbols.
///
/// # Examples
///
/// ```no_run
/// use sdl3::{config::get_sdl3_library_path, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl3_library_path())?;
/// println!("SDL {}", sdl3::version(&api));
/// # Ok(())
/// # }
/// ```
pub fn load_api(path: impl AsRef<OsStr>) -> Result<SdlApiHandle> {
    let path = path.as_ref();
    let api = unsafe { libsdl3::new(path)? };
    tracing::debug!("Loaded SDL3 from {}", path.to_string_lossy());
    Ok(Arc::new(api))
}

/// Name of the hint selecting the video driver (`SDL_HINT_VIDEO_DRIVER`).
///
/// `"dummy"` runs without a display.
pub const HINT_VIDEO_DRIVER: &CStr = hint_name(sdl3_sys::SDL_HINT_VIDEO_DRIVER);

/// Name of the hint carrying the application name (`SDL_HINT_APP_NAME`).
pub const HINT_APP_NAME: &CStr = hint_name(sdl3_sys::SDL_HINT_APP_NAME);

const fn hint_name(bytes: &'static [u8]) -> &'static CStr {
    match CStr::from_bytes_with_nul(bytes) {
        Ok(name) => name,
        Err(_) => panic!("SDL hint names are nul-terminated"),
    }
}

/// Sets an SDL hint (`SDL_SetHint`).
///
/// Most hints only take effect when set before [`crate::Sdl::init`], for
/// example [`HINT_VIDEO_DRIVER`].
///
/// # Errors
///
/// Returns an error if `value` contains a nul byte or SDL rejects the hint.
///
/// # Examples
///
/// ```no_run
/// use sdl3::{HINT_VIDEO_DRIVER, config::get_sdl3_library_path, load_api, set_hint};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl3_library_path())?;
/// set_hint(&api, HINT_VIDEO_DRIVER, "dummy")?;
/// # Ok(())
/// # }
/// ```
pub fn set_hint(api: &SdlApiHandle, name: &CStr, value: &str) -> Result<()> {
    let value = CString::new(value)?;
    let ok = unsafe { api.set_hint(name.as_ptr(), value.as_ptr()) };
    Error::from_sdl_result(api.as_ref(), ok)
}

/// Returns the message of the last SDL error on this thread, if any.
pub fn last_error(api: &SdlApiHandle) -> Option<String> {
    error_message(api.as_ref())
}

/// Clears the last SDL error on this thread.
pub fn clear_error(api: &SdlApiHandle) {
    unsafe { api.clear_error() };
}

/// Returns the version of the loaded SDL3 library.
pub fn version(api: &SdlApiHandle) -> Version {
    Version::from(unsafe { api.get_version() })
}

/// Returns the source revision the loaded SDL3 library was built from.
///
/// # Errors
///
/// Returns [`Error::Other`] if SDL returns no revision string or one that is
/// not valid UTF-8.
pub fn revision(api: &SdlApiHandle) -> Result<String> {
    let revision = unsafe { string_from_ptr(api.get_revision()) }?;
    revision.ok_or_else(|| Error::Other("SDL returned no revision.".to_string()))
}

/// SDL's diagnostic for the last error. Invalid UTF-8 is replaced, since the
/// message is only ever reported.
pub(crate) fn error_message(api: &dyn SdlApi) -> Option<String> {
    let ptr = unsafe { api.get_error() };
    if ptr.is_null() {
        return None;
    }
    let message = unsafe { CStr::from_ptr(ptr) }.to_string_lossy();
    (!message.is_empty()).then(|| message.into_owned())
}

/// Copies a C string owned by SDL into a Rust `String`.
///
/// # Safety
///
/// `ptr` must be null or point to a nul-terminated string valid for the
/// duration of the call.
///
/// # Errors
///
/// Returns [`Error::Other`] if the string is not valid UTF-8.
pub(crate) unsafe fn string_from_ptr(ptr: *const c_char) -> Result<Option<String>> {
    if ptr.is_null() {
        return Ok(None);
    }
    let text = unsafe { CStr::from_ptr(ptr) };
    text.to_str()
        .map(|text| Some(text.to_string()))
        .map_err(|err| Error::Other(format!("SDL returned a string that is not UTF-8: {err}")))
}

/// SDL library version, decoded from `SDL_GetVersion()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl From<c_int> for Version {
    /// Decodes the `major * 1000000 + minor * 1000 + micro` encoding.
    fn from(value: c_int) -> Self {
        let value = value.max(0) as u32;
        Version {
            major: value / 1_000_000,
            minor: (value / 1000) % 1000,
            micro: value % 1000,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Typed flag sets for library initialisation and window creation.
//!
//! Both types keep bits they do not name: the meaning of every bit is owned
//! by SDL, and values are forwarded to it unchanged.

bitflags::bitflags! {
    /// Subsystems passed to `SDL_Init` and friends (`SDL_InitFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InitFlags: u32 {
        const AUDIO = sdl3_sys::SDL_INIT_AUDIO;
        /// Implies [`InitFlags::EVENTS`].
        const VIDEO = sdl3_sys::SDL_INIT_VIDEO;
        const JOYSTICK = sdl3_sys::SDL_INIT_JOYSTICK;
        const HAPTIC = sdl3_sys::SDL_INIT_HAPTIC;
        const GAMEPAD = sdl3_sys::SDL_INIT_GAMEPAD;
        const EVENTS = sdl3_sys::SDL_INIT_EVENTS;
        const SENSOR = sdl3_sys::SDL_INIT_SENSOR;
        const CAMERA = sdl3_sys::SDL_INIT_CAMERA;
    }
}

bitflags::bitflags! {
    /// Window creation and state flags (`SDL_WindowFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u64 {
        const FULLSCREEN = sdl3_sys::SDL_WINDOW_FULLSCREEN as u64;
        const OPENGL = sdl3_sys::SDL_WINDOW_OPENGL as u64;
        const OCCLUDED = sdl3_sys::SDL_WINDOW_OCCLUDED as u64;
        const HIDDEN = sdl3_sys::SDL_WINDOW_HIDDEN as u64;
        const BORDERLESS = sdl3_sys::SDL_WINDOW_BORDERLESS as u64;
        const RESIZABLE = sdl3_sys::SDL_WINDOW_RESIZABLE as u64;
        const MINIMIZED = sdl3_sys::SDL_WINDOW_MINIMIZED as u64;
        const MAXIMIZED = sdl3_sys::SDL_WINDOW_MAXIMIZED as u64;
        const MOUSE_GRABBED = sdl3_sys::SDL_WINDOW_MOUSE_GRABBED as u64;
        const INPUT_FOCUS = sdl3_sys::SDL_WINDOW_INPUT_FOCUS as u64;
        const MOUSE_FOCUS = sdl3_sys::SDL_WINDOW_MOUSE_FOCUS as u64;
        const EXTERNAL = sdl3_sys::SDL_WINDOW_EXTERNAL as u64;
        const MODAL = sdl3_sys::SDL_WINDOW_MODAL as u64;
        const HIGH_PIXEL_DENSITY = sdl3_sys::SDL_WINDOW_HIGH_PIXEL_DENSITY as u64;
        const MOUSE_CAPTURE = sdl3_sys::SDL_WINDOW_MOUSE_CAPTURE as u64;
        const MOUSE_RELATIVE_MODE = sdl3_sys::SDL_WINDOW_MOUSE_RELATIVE_MODE as u64;
        const ALWAYS_ON_TOP = sdl3_sys::SDL_WINDOW_ALWAYS_ON_TOP as u64;
        const UTILITY = sdl3_sys::SDL_WINDOW_UTILITY as u64;
        const TOOLTIP = sdl3_sys::SDL_WINDOW_TOOLTIP as u64;
        const POPUP_MENU = sdl3_sys::SDL_WINDOW_POPUP_MENU as u64;
        const KEYBOARD_GRABBED = sdl3_sys::SDL_WINDOW_KEYBOARD_GRABBED as u64;
        const VULKAN = sdl3_sys::SDL_WINDOW_VULKAN as u64;
        const METAL = sdl3_sys::SDL_WINDOW_METAL as u64;
        const TRANSPARENT = sdl3_sys::SDL_WINDOW_TRANSPARENT as u64;
        const NOT_FOCUSABLE = sdl3_sys::SDL_WINDOW_NOT_FOCUSABLE as u64;
    }
}

impl From<u32> for InitFlags {
    fn from(bits: u32) -> Self {
        InitFlags::from_bits_retain(bits)
    }
}

impl From<InitFlags> for u32 {
    fn from(flags: InitFlags) -> Self {
        flags.bits()
    }
}

impl From<u64> for WindowFlags {
    fn from(bits: u64) -> Self {
        WindowFlags::from_bits_retain(bits)
    }
}

impl From<WindowFlags> for u64 {
    fn from(flags: WindowFlags) -> Self {
        flags.bits()
    }
}

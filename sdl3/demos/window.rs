// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 Rust bindings project.
// SPDX-License-Identifier: MIT

//! Opens a single SDL window for a few seconds.
//!
//! ```text
//! cargo run --example window -- --title "Hello" --width 1280 --height 720 --resizable
//! ```

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use sdl3::{
    HINT_APP_NAME, HINT_VIDEO_DRIVER, InitFlags, Sdl, WindowFlags, config::get_sdl3_library_path,
    load_api, set_hint,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Window title.
    #[arg(long, default_value = "SDL3 window")]
    title: String,

    /// Window width in pixels.
    #[arg(long, default_value_t = 800, allow_negative_numbers = true)]
    width: i32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 600, allow_negative_numbers = true)]
    height: i32,

    /// Make the window resizable.
    #[arg(long)]
    resizable: bool,

    /// Create the window without decorations.
    #[arg(long)]
    borderless: bool,

    /// Raw `SDL_WindowFlags` bits, combined with the switches above.
    #[arg(long, default_value_t = 0)]
    flags: u64,

    /// Path to the SDL3 shared library.
    #[arg(long, env = "SDL3_LIBRARY_PATH")]
    library: Option<PathBuf>,

    /// SDL video driver to use (e.g. `dummy`, `x11`, `wayland`).
    #[arg(long)]
    video_driver: Option<String>,

    /// How long to keep the window open, in seconds.
    #[arg(long, default_value_t = 3)]
    seconds: u64,
}

/// Logs to stdout at `info` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), sdl3::Error> {
    init_tracing();
    let opts = Opts::parse();

    let api = load_api(opts.library.unwrap_or_else(get_sdl3_library_path))?;
    set_hint(&api, HINT_APP_NAME, env!("CARGO_PKG_NAME"))?;
    if let Some(driver) = opts.video_driver.as_deref() {
        set_hint(&api, HINT_VIDEO_DRIVER, driver)?;
    }
    info!("Loaded SDL {}", sdl3::version(&api));

    let sdl = Sdl::init(api, InitFlags::VIDEO)?;

    let mut flags = WindowFlags::from(opts.flags);
    if opts.resizable {
        flags |= WindowFlags::RESIZABLE;
    }
    if opts.borderless {
        flags |= WindowFlags::BORDERLESS;
    }

    let window = sdl.create_window(&opts.title, opts.width, opts.height, flags)?;
    info!(
        "Window {} created: \"{}\" {:?}",
        window.id(),
        window.title(),
        window.size()?
    );

    let deadline = std::time::Instant::now() + Duration::from_secs(opts.seconds);
    while std::time::Instant::now() < deadline {
        sdl.pump_events();
        std::thread::sleep(Duration::from_millis(16));
    }

    window.destroy();
    sdl.quit()
}

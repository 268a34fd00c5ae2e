use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{bail, Error};
use gumdrop::Options;
use log::*;
use simplelog::{CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use pixelgrid_core::canvas::Canvas;
use pixelgrid_core::input::MouseState;
use pixelgrid_core::palette;
use pixelgrid_core::RuntimeOptionsBuilder;

use crate::options::{AppOptions, USAGE};
use crate::renderer::SdlSurface;

mod apps;
mod options;
mod renderer;

const LOG_FILENAME: &str = "pixelgrid.log";
const FPS: u64 = 60;
const FRAME_DELAY: Duration = Duration::from_nanos(1_000_000_000u64 / FPS);

fn main() -> anyhow::Result<()> {
    CombinedLogger::init(vec![
        TermLogger::new(LevelFilter::Debug, Config::default(), TerminalMode::Mixed),
        WriteLogger::new(LevelFilter::Debug, Config::default(), File::create(LOG_FILENAME)?),
    ])?;

    let cli_options: AppOptions = AppOptions::parse_args_default_or_exit();
    let (width, height, scale) = match (cli_options.width, cli_options.height, cli_options.scale) {
        (Some(width), Some(height), Some(scale)) => (width, height, scale),
        _ => bail!("Not enough arguments provided\n{}", USAGE),
    };

    let sdl_context = sdl2::init().map_err(Error::msg)?;
    let video_subsystem = sdl_context.video().map_err(Error::msg)?;
    let desktop = video_subsystem.current_display_mode(0).map_err(Error::msg)?;

    let options = RuntimeOptionsBuilder::new()
        .window_size(width, height)
        .pixel_scale(scale)
        .desktop_bounds(desktop.w as u32, desktop.h as u32)
        .build();
    debug!(
        "Window {}x{} at scale {}, logical screen {}x{}",
        options.window_width,
        options.window_height,
        options.pixel_scale,
        options.screen_width(),
        options.screen_height()
    );

    let registry = apps::registry();
    let (app_info, mut application) = registry.resolve_active()?;
    info!(
        "Running application {} {} by {}: {}",
        app_info.name, app_info.version, app_info.author, app_info.description
    );

    let mut surface = SdlSurface::new(&video_subsystem, &format!("Pixelgrid - {}", app_info.name), options)?;
    let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;

    let mut background = palette::get_colour(0);
    let mut mouse = MouseState::default();

    {
        let mut ctx = Canvas::new(
            &mut surface,
            &mut background,
            options.pixel_scale,
            options.screen_width(),
            options.screen_height(),
            mouse,
        );
        application.on_init(&mut ctx);
    }

    'mainloop: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'mainloop,
                _ => {}
            }
        }

        let device_mouse = event_pump.mouse_state();
        mouse = MouseState::advance(
            mouse,
            device_mouse.x() / options.pixel_scale as i32,
            device_mouse.y() / options.pixel_scale as i32,
            device_mouse.left(),
            device_mouse.right(),
        );

        // The background set by the application during the previous frame is
        // what this frame clears to.
        surface.clear(background);
        {
            let mut ctx = Canvas::new(
                &mut surface,
                &mut background,
                options.pixel_scale,
                options.screen_width(),
                options.screen_height(),
                mouse,
            );
            application.on_update(&mut ctx);
        }
        surface.present();

        // Sleep off whatever is left of the 16.667ms frame budget. Frames that
        // run over start the next iteration immediately, there is no catch-up.
        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_DELAY {
            std::thread::sleep(FRAME_DELAY - frame_time);
        }
    }

    {
        let mut ctx = Canvas::new(
            &mut surface,
            &mut background,
            options.pixel_scale,
            options.screen_width(),
            options.screen_height(),
            mouse,
        );
        application.on_end(&mut ctx);
    }
    debug!("Application ended, shutting down");

    Ok(())
}

//! Window setup and the frame loop

use crate::clock::FrameClock;
use crate::config::Config;
use crate::gui::style::BACKGROUND_COLOR;
use crate::input::poll_frame;
use crate::save::SaveStore;
use crate::scene::{SceneGraph, Viewport};
use tracing::info;

/// Open the window and run scenes until one of them exits
pub fn run(config: &Config) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // Deliver typed characters as TextInput events
    video_subsystem.text_input().start();

    let store = SaveStore::new(&config.save_dir, &config.save_extension)
        .map_err(|e| format!("Failed to open save directory: {}", e))?;
    info!("Saves in {}", store.directory().display());

    let (width, height) = canvas.output_size()?;
    let mut scenes = SceneGraph::new(store, Viewport::new(width, height));
    let mut clock = FrameClock::new(config.target_fps);
    let mut dt = 0.0;

    loop {
        let frame = poll_frame(&mut event_pump, dt, clock.fps());

        if !scenes.step(&frame)? {
            break;
        }

        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();
        scenes.render(&mut canvas, &frame)?;
        canvas.present();

        dt = clock.tick();
    }

    info!("Shutting down");
    Ok(())
}

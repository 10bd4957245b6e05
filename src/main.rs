use log::{error, info};

mod animation;
mod assets;
mod base;
mod bird;
mod collision;
mod game;
mod input_system;
mod mask;
mod pipe;
mod render;
mod text;

use assets::{AssetManifest, DEFAULT_MANIFEST_PATH};
use game::{FrameClock, GameState, Session, Termination};
use input_system::InputSystem;
use render::{Renderer, WIN_HEIGHT, WIN_WIDTH};

fn main() -> Result<(), String> {
    env_logger::init();

    run().map_err(|e| {
        error!("{}", e);
        e
    })
}

fn run() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Jumpy Bird", WIN_WIDTH, WIN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let manifest = AssetManifest::load_or_default(DEFAULT_MANIFEST_PATH);
    let textures = assets::load_textures(&texture_creator, &manifest)?;
    let masks = assets::load_masks(&manifest)?;
    info!("Assets loaded ({}x scale)", manifest.scale);

    let renderer = Renderer::new(&textures);
    let input = InputSystem::new();
    let mut session = Session::new(&masks);
    let mut clock = FrameClock::default();

    info!("Controls: SPACE - Jump, Q - Quit");

    'running: loop {
        let actions = input.poll_events(&mut event_pump);

        match session.step(&actions) {
            GameState::Running => {}
            GameState::Terminated(Termination::Restart(_)) => session.restart(),
            GameState::Terminated(Termination::Quit) => break 'running,
        }

        renderer.render(&mut canvas, session.world())?;
        canvas.present();

        clock.wait();
    }

    info!(
        "Quit after {} run(s), best score {}",
        session.runs(),
        session.best_score()
    );

    Ok(())
}

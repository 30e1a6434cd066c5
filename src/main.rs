use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use pixels::{Pixels, SurfaceTexture};
use tracing_subscriber::EnvFilter;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use gridcaster::{
    GameState, Input, clock::FrameClock, config::Config, consts::WINDOW_TITLE, flags::Cli,
    renderer::Renderer, screenshot, text::Hud,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    let fallback_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let source = cli.map_source(&config, fallback_seed);
    let world = source
        .load()
        .with_context(|| format!("loading map from {source:?}"))?;
    tracing::info!(
        ?source,
        width = world.width(),
        height = world.height(),
        "map ready"
    );

    let hud = config.font.as_ref().and_then(|path| match Hud::load(path) {
        Ok(hud) => Some(hud),
        Err(e) => {
            tracing::warn!("HUD disabled: {e}");
            None
        }
    });

    let viewport = config.viewport();
    let mut renderer = Renderer::new(viewport, config.render_options(), hud);
    let mut game_state = GameState::new(world);

    let event_loop = EventLoop::new()?;
    let mut input = WinitInputHelper::new();
    let window = Arc::new({
        let size = LogicalSize::new(viewport.width as f64, viewport.height as f64);
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    });

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &*window);
        Pixels::new(viewport.width as u32, viewport.height as u32, surface_texture)?
    };

    let mut clock = FrameClock::new(config.target_fps, Instant::now());
    let mut pending = Input::default();
    let window_clone = window.clone();
    tracing::info!(target_fps = config.target_fps, "starting frame loop");

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = &event
        {
            renderer.render(&game_state, clock.fps());
            renderer.draw_to_buffer(pixels.frame_mut());
            if let Err(err) = pixels.render() {
                tracing::error!("pixels.render() failed: {err}");
                elwt.exit();
                return;
            }
            if let Some(fps) = clock.frame_presented(Instant::now()) {
                window_clone.set_title(&format!("{WINDOW_TITLE} - {fps} FPS"));
            }
        }

        if input.update(&event) {
            if input.close_requested() || input.key_pressed(KeyCode::Escape) {
                elwt.exit();
                return;
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    tracing::error!("pixels.resize_surface() failed: {err}");
                    elwt.exit();
                    return;
                }
            }

            if input.key_pressed(KeyCode::KeyM) {
                renderer.options.show_minimap = !renderer.options.show_minimap;
            }
            if input.key_pressed(KeyCode::F1) && renderer.has_hud() {
                renderer.options.show_hud = !renderer.options.show_hud;
            }
            if input.key_pressed(KeyCode::F12) {
                if let Err(err) = screenshot::save_png(
                    &renderer.buffer,
                    renderer.width(),
                    renderer.height(),
                    &config.screenshot_dir,
                    game_state.frame,
                ) {
                    tracing::error!("screenshot failed: {err}");
                }
            }

            pending.latch_edges(
                input.key_pressed(KeyCode::KeyQ),
                input.key_pressed(KeyCode::KeyE),
            );

            if clock.tick(Instant::now()) {
                let frame_input = Input {
                    forth: input.key_held(KeyCode::KeyW),
                    back: input.key_held(KeyCode::KeyS),
                    left: input.key_held(KeyCode::KeyA),
                    right: input.key_held(KeyCode::KeyD),
                    ..std::mem::take(&mut pending)
                };
                game_state.update(&frame_input);
                window_clone.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(clock.next_deadline()));
        }
    })?;

    Ok(())
}

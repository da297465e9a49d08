use fake3d::prelude::*;
use tracing::{debug, error, info};

fn init_logging() {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();
}

fn run(config: &Config) -> Result<()> {
    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut engine = Engine::new(config);
    let mut limiter = FrameLimiter::new(&window, config.fps_limit);
    let mut fps_counter = FpsCounter::new();

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::SetRenderMode(mode) => engine.set_render_mode(mode),
            WindowEvent::ToggleRenderMode => engine.toggle_render_mode(),
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        if let Some(fps) = fps_counter.tick(delta_ms) {
            debug!(fps, "frame rate");
            window.show_fps(fps)?;
        }

        engine.update(delta_ms as f32 / 1000.0);
        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

fn main() {
    init_logging();

    let config = Config::from_env();
    info!(
        width = config.width,
        height = config.height,
        fps_limit = ?config.fps_limit,
        mode = %config.render_mode,
        axis = %config.spin.axis,
        space = %config.spin.space,
        "starting"
    );

    if let Err(err) = run(&config) {
        error!(%err, "aborting");
        std::process::exit(-1);
    }

    info!("window closed");
}

// What you SEE:
// • A green square bouncing around a dark 800x600 window.
// • Hold the arrow keys to steer it yourself; let go and it bounces again.
// • Top-left: a frame-time graph with a red 60fps reference line.
// • ESC or closing the window quits.

mod clock;
mod config;
mod draw;
mod error;
mod game;
mod motion;
mod overlay;
mod types;
mod window;

use config::DemoConfig;
use error::Error;
use game::GameLoop;
use std::process::ExitCode;
use window::Drawer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    exit_code(run())
}

/// Normal quit is success; any fatal error is logged and turns into a failure status.
fn exit_code(result: Result<(), Error>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let config = DemoConfig::default();

    // The window lives until the end of this function, whichever way it ends.
    let mut drawer = Drawer::new(&config.title, config.window_width, config.window_height)?;
    let mut game = GameLoop::new(config);

    let report = game.run(&mut drawer)?;
    log::info!(
        "stopped after {} frames, square at ({:.0}, {:.0})",
        report.frames_rendered,
        report.final_rect.x,
        report.final_rect.y
    );
    Ok(())
}

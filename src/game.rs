// The main loop: poll -> update -> render -> pace, until a quit arrives.
//
// The window is reached only through `Platform`, so the loop can be driven by
// a scripted platform in tests just like by the real minifb window.

use crate::clock::FrameClock;
use crate::config::DemoConfig;
use crate::draw::Canvas;
use crate::error::Error;
use crate::motion::{DirectionFlags, MotionController, RectState};
use crate::overlay::OverlayMetrics;
use crate::types::{BlendMode, FrameBuffer, RectF};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Quit,
}

/// Everything the loop needs from the windowing side.
pub trait Platform {
    /// Drain every event that arrived since the last call.
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
    /// Arrow keys currently held.
    fn direction_flags(&self) -> DirectionFlags;
    /// Monotonic milliseconds since some fixed start point.
    fn ticks_ms(&self) -> u64;
    fn sleep_ms(&mut self, ms: u64);
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

pub struct LoopState {
    pub running: bool,
    pub last_tick_ms: u64,
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopReport {
    pub frames_rendered: u64,
    pub final_rect: RectState,
}

pub struct GameLoop {
    config: DemoConfig,
    motion: MotionController,
    overlay: OverlayMetrics,
    screen: FrameBuffer,
}

impl GameLoop {
    pub fn new(config: DemoConfig) -> Self {
        let motion = MotionController::new(&config);
        let overlay = OverlayMetrics::new(config.overlay.clone());
        let screen = FrameBuffer::new(config.window_width, config.window_height);
        Self { config, motion, overlay, screen }
    }

    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<LoopReport, Error> {
        let mut clock = FrameClock::new(platform.ticks_ms());
        let mut state = LoopState { running: true, last_tick_ms: clock.last_tick_ms() };
        let mut frames_rendered = 0u64;
        let target = self.config.target_frame_ms;

        while state.running {
            // The iteration is timed from here, so polling counts against the budget.
            let frame_start = platform.ticks_ms();

            // 1) Events. A quit still lets this frame finish.
            for event in platform.poll_events() {
                match event {
                    PlatformEvent::Quit => {
                        if state.running {
                            log::debug!("quit requested after {frames_rendered} frames");
                        }
                        state.running = false;
                    }
                }
            }

            // 2) Time since the previous iteration.
            let delta_ms = clock.tick(frame_start);
            state.last_tick_ms = clock.last_tick_ms();

            // 3) + 4) Motion and frame history.
            let flags = platform.direction_flags();
            self.motion.step(flags, delta_ms);
            self.overlay.record(delta_ms);

            // 5) Render and present.
            self.render();
            platform.present(&self.screen)?;
            frames_rendered += 1;

            // 6) Pace to the target frame time.
            let spent = platform.ticks_ms().saturating_sub(frame_start);
            let sleep = target.saturating_sub(spent);
            log::trace!(
                "frame {frames_rendered} at {}ms: delta {delta_ms}ms, sleeping {sleep}ms",
                state.last_tick_ms
            );
            if spent > target * 2 {
                log::warn!("frame took {spent}ms, budget is {target}ms");
            }
            if sleep > 0 {
                platform.sleep_ms(sleep);
            }
        }

        Ok(LoopReport { frames_rendered, final_rect: self.motion.state() })
    }

    fn render(&mut self) {
        let rect = self.motion.state();
        let mut canvas = Canvas::new(&mut self.screen);

        canvas.set_blend_mode(BlendMode::None);
        canvas.set_draw_color(self.config.background);
        canvas.clear();

        canvas.set_draw_color(self.config.rect_color);
        canvas.fill_rect(RectF::new(rect.x, rect.y, rect.width, rect.height));

        self.overlay.render_graph(&mut canvas);
    }
}

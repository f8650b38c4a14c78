// Moves the square: arrow keys push it around, otherwise it bounces on its own.
// Either way the result is clamped so the square never leaves the window.

use crate::config::DemoConfig;

/// Which arrow keys are held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionFlags {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Position (top-left) and velocity of the square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectState {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

pub struct MotionController {
    state: RectState,
    /// Manual step size per tick; independent from the bounce velocity.
    speed_x: f32,
    speed_y: f32,
    /// Upper limits for the top-left corner; the lower limit is 0 on both axes.
    max_x: f32,
    max_y: f32,
}

impl MotionController {
    pub fn new(config: &DemoConfig) -> Self {
        let (max_x, max_y) = config.bounds();
        let state = RectState {
            x: config.start.0,
            y: config.start.1,
            width: config.rect_width,
            height: config.rect_height,
            velocity_x: config.speed.0,
            velocity_y: config.speed.1,
        };
        Self {
            state,
            speed_x: config.speed.0.abs(),
            speed_y: config.speed.1.abs(),
            max_x,
            max_y,
        }
    }

    pub fn state(&self) -> RectState {
        self.state
    }

    /// Advance one tick. `_delta_ms` is accepted for symmetry with the loop;
    /// motion is per tick, not per millisecond.
    pub fn step(&mut self, flags: DirectionFlags, _delta_ms: f32) -> RectState {
        let s = &mut self.state;

        if flags.any() {
            if flags.up {
                s.y -= self.speed_y;
            }
            if flags.down {
                s.y += self.speed_y;
            }
            if flags.left {
                s.x -= self.speed_x;
            }
            if flags.right {
                s.x += self.speed_x;
            }
        } else {
            // Reflect after the move: the overshooting frame is clamped below,
            // the direction change shows up on the next tick.
            s.x += s.velocity_x;
            if s.x > self.max_x || s.x < 0.0 {
                s.velocity_x = -s.velocity_x;
                log::debug!("bounce on x at {:.1}, velocity now {}", s.x, s.velocity_x);
            }
            s.y += s.velocity_y;
            if s.y > self.max_y || s.y < 0.0 {
                s.velocity_y = -s.velocity_y;
                log::debug!("bounce on y at {:.1}, velocity now {}", s.y, s.velocity_y);
            }
        }

        s.x = s.x.clamp(0.0, self.max_x);
        s.y = s.y.clamp(0.0, self.max_y);

        self.state
    }
}

// The real window, backed by minifb.
// Owns the OS window for the whole run; dropping the Drawer closes it, on
// every exit path.

use crate::error::Error;
use crate::game::{Platform, PlatformEvent};
use crate::motion::DirectionFlags;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

pub struct Drawer {
    window: Window, // the on-screen window you see
    started: Instant,
}

impl Drawer {
    /// Create the window. Failing here is fatal for the demo.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        log::info!("opened {width}x{height} window \"{title}\"");
        Ok(Self { window, started: Instant::now() })
    }
}

impl Platform for Drawer {
    /// minifb pumps OS events while presenting, so this only inspects the
    /// resulting state. Closing the window or pressing ESC both mean quit.
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            vec![PlatformEvent::Quit]
        } else {
            Vec::new()
        }
    }

    fn direction_flags(&self) -> DirectionFlags {
        DirectionFlags {
            up: self.window.is_key_down(Key::Up),
            down: self.window.is_key_down(Key::Down),
            left: self.window.is_key_down(Key::Left),
            right: self.window.is_key_down(Key::Right),
        }
    }

    fn ticks_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

// Every tunable number of the demo lives here, so tests can swap any of them.

use crate::types::Rgba;

pub const WINDOW_TITLE: &str = "Bounce Square";
pub const WINDOW_WIDTH: usize = 800;
pub const WINDOW_HEIGHT: usize = 600;

pub const RECT_SIZE: f32 = 50.0;
pub const RECT_START: (f32, f32) = (100.0, 100.0);
pub const RECT_SPEED: (f32, f32) = (5.0, 5.0);

/// Minimum duration of one loop iteration.
pub const TARGET_FRAME_MS: u64 = 16;

pub const HISTORY_CAPACITY: usize = 100;
/// 60fps budget, drawn as the reference line.
pub const REFERENCE_FRAME_MS: f32 = 16.6;
/// 30fps budget; the graph never zooms in tighter than this.
pub const MIN_GRAPH_SCALE_MS: f32 = 33.3;

pub const BACKGROUND_COLOR: Rgba = Rgba::new(20, 20, 20, 255);
pub const RECT_COLOR: Rgba = Rgba::new(0, 255, 127, 255);

/// Geometry and colors of the frame-time panel.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub capacity: usize,
    pub margin: f32,
    pub panel_width: f32,
    pub panel_height: f32,
    pub reference_ms: f32,
    pub min_scale_ms: f32,
    pub background: Rgba,
    pub graph: Rgba,
    pub reference: Rgba,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            capacity: HISTORY_CAPACITY,
            margin: 10.0,
            panel_width: 200.0,
            panel_height: 100.0,
            reference_ms: REFERENCE_FRAME_MS,
            min_scale_ms: MIN_GRAPH_SCALE_MS,
            background: Rgba::new(0, 0, 0, 180),
            graph: Rgba::new(0, 255, 0, 255),
            reference: Rgba::new(255, 0, 0, 100),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub window_width: usize,
    pub window_height: usize,
    pub rect_width: f32,
    pub rect_height: f32,
    pub start: (f32, f32),
    pub speed: (f32, f32),
    pub target_frame_ms: u64,
    pub background: Rgba,
    pub rect_color: Rgba,
    pub overlay: OverlayConfig,
}

impl DemoConfig {
    /// Largest top-left position that keeps the rectangle inside the window.
    pub fn bounds(&self) -> (f32, f32) {
        (
            self.window_width as f32 - self.rect_width,
            self.window_height as f32 - self.rect_height,
        )
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            rect_width: RECT_SIZE,
            rect_height: RECT_SIZE,
            start: RECT_START,
            speed: RECT_SPEED,
            target_frame_ms: TARGET_FRAME_MS,
            background: BACKGROUND_COLOR,
            rect_color: RECT_COLOR,
            overlay: OverlayConfig::default(),
        }
    }
}

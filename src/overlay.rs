// Frame-time graph in the top-left corner.
// Keeps the last N frame deltas in a ring buffer and draws them oldest to
// newest, left to right, with a red line marking the 60fps budget.

use crate::config::OverlayConfig;
use crate::draw::Canvas;
use crate::types::{BlendMode, RectF};

pub struct OverlayMetrics {
    config: OverlayConfig,
    frame_times: Vec<f32>, // always `capacity` long, zero-filled at start
    cursor: usize,         // next slot to overwrite, i.e. the oldest sample
}

impl OverlayMetrics {
    pub fn new(config: OverlayConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self { config, frame_times: vec![0.0; capacity], cursor: 0 }
    }

    /// Overwrite the oldest sample with `delta_ms`.
    pub fn record(&mut self, delta_ms: f32) {
        self.frame_times[self.cursor] = delta_ms;
        self.cursor = (self.cursor + 1) % self.frame_times.len();
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.frame_times.len()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Samples in age order, oldest first.
    #[cfg(test)]
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        let (newer, older) = self.frame_times.split_at(self.cursor);
        older.iter().chain(newer.iter()).copied()
    }

    /// Vertical scale of the graph: the worst buffered frame, but never below
    /// the configured floor.
    pub fn scale_max(&self) -> f32 {
        self.frame_times
            .iter()
            .copied()
            .fold(self.config.min_scale_ms, f32::max)
    }

    pub fn render_graph(&self, canvas: &mut Canvas<'_>) {
        let c = &self.config;
        let n = self.frame_times.len();
        let max_time = self.scale_max();
        let step_x = c.panel_width / n as f32;
        let y_for = |ms: f32| c.margin + c.panel_height - (ms / max_time) * c.panel_height;

        // 1) Translucent backing so the graph reads over any scene.
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(c.background);
        canvas.fill_rect(RectF::new(c.margin, c.margin, c.panel_width, c.panel_height));

        // 2) N-1 segments walking the ring from the cursor.
        canvas.set_draw_color(c.graph);
        for i in 0..n - 1 {
            let curr = (self.cursor + i) % n;
            let next = (self.cursor + i + 1) % n;

            let x1 = c.margin + i as f32 * step_x;
            let x2 = c.margin + (i + 1) as f32 * step_x;
            canvas.draw_line(x1, y_for(self.frame_times[curr]), x2, y_for(self.frame_times[next]));
        }

        // 3) 60fps reference.
        canvas.set_draw_color(c.reference);
        let target_y = y_for(c.reference_ms);
        canvas.draw_line(c.margin, target_y, c.margin + c.panel_width, target_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FrameBuffer, Rgba};

    fn metrics() -> OverlayMetrics {
        OverlayMetrics::new(OverlayConfig::default())
    }

    #[test]
    fn starts_full_of_zeros() {
        let m = metrics();
        assert_eq!(m.capacity(), 100);
        assert_eq!(m.cursor(), 0);
        assert!(m.samples().all(|s| s == 0.0));
    }

    #[test]
    fn record_keeps_length_and_evicts_oldest() {
        let mut m = metrics();
        for k in 0..250 {
            m.record(k as f32);
            assert_eq!(m.capacity(), 100);
            assert!(m.cursor() < 100);
        }
        let kept: Vec<f32> = m.samples().collect();
        let expected: Vec<f32> = (150..250).map(|k| k as f32).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn samples_are_oldest_first_before_wrapping() {
        let mut m = metrics();
        m.record(7.0);
        m.record(9.0);
        let tail: Vec<f32> = m.samples().skip(98).collect();
        assert_eq!(tail, vec![7.0, 9.0]);
        assert_eq!(m.samples().next(), Some(0.0));
    }

    #[test]
    fn scale_never_below_floor() {
        let mut m = metrics();
        assert_eq!(m.scale_max(), 33.3);
        m.record(12.0);
        assert_eq!(m.scale_max(), 33.3);
        m.record(50.0);
        assert_eq!(m.scale_max(), 50.0);
    }

    #[test]
    fn render_darkens_panel_and_draws_reference_line() {
        let mut fb = FrameBuffer::new(300, 200);
        let mut canvas = Canvas::new(&mut fb);
        canvas.set_draw_color(Rgba::new(255, 255, 255, 255));
        canvas.clear();

        let m = metrics();
        m.render_graph(&mut canvas);

        // Outside the panel nothing changes.
        assert_eq!(fb.pixel(250, 150), Some(0x00_FF_FF_FF));

        // Inside the panel, away from any line, white is darkened by the backing.
        let backed = blend(0x00_FF_FF_FF, Rgba::new(0, 0, 0, 180));
        assert_eq!(fb.pixel(100, 30), Some(backed));

        // All samples are zero, so the graph is the bottom edge of the panel.
        assert_eq!(fb.pixel(50, 110), Some(0x00_00_FF_00));

        // Reference at 16.6 / 33.3 of the panel height, red blended over backing.
        let target_y = (10.0_f32 + 100.0 - (16.6 / 33.3) * 100.0).round() as usize;
        let reference = blend(backed, Rgba::new(255, 0, 0, 100));
        assert_eq!(fb.pixel(100, target_y), Some(reference));
    }

    #[test]
    fn newest_sample_is_drawn_at_the_right_edge() {
        let mut fb = FrameBuffer::new(300, 200);
        let mut canvas = Canvas::new(&mut fb);
        canvas.set_draw_color(Rgba::new(0, 0, 0, 255));
        canvas.clear();

        let mut m = metrics();
        // Push the cursor around the ring so the physical slot differs from
        // the drawn position.
        for _ in 0..137 {
            m.record(0.0);
        }
        m.record(40.0);
        m.render_graph(&mut canvas);

        // Newest sample sits at i = 99: x = 10 + 99 * 2 = 208, y = top margin.
        assert_eq!(fb.pixel(208, 10), Some(0x00_00_FF_00));
    }

    fn blend(dst: u32, src: Rgba) -> u32 {
        crate::draw::blend_over(dst, src)
    }
}

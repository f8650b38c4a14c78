// Software drawing onto a FrameBuffer.
// Works like a tiny immediate-mode renderer: pick a color and a blend mode,
// then clear / fill rectangles / draw lines. Nothing is shown until the
// framebuffer is presented by the window.

use crate::types::{BlendMode, FrameBuffer, RectF, Rgba};

pub struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    color: Rgba,
    blend: BlendMode,
}

impl<'a> Canvas<'a> {
    /// Starts with opaque white and no blending.
    pub fn new(fb: &'a mut FrameBuffer) -> Self {
        Self { fb, color: Rgba::new(255, 255, 255, 255), blend: BlendMode::None }
    }

    pub fn set_draw_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn set_blend_mode(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    /// Fill the whole frame with the draw color. Blending does not apply.
    pub fn clear(&mut self) {
        let packed = self.color.to_packed();
        self.fb.pixels.fill(packed);
    }

    /// Fill every pixel covered by `rect`, clipped to the frame.
    pub fn fill_rect(&mut self, rect: RectF) {
        let x0 = rect.x.round().max(0.0) as usize;
        let y0 = rect.y.round().max(0.0) as usize;
        let x1 = ((rect.x + rect.w).round().max(0.0) as usize).min(self.fb.width);
        let y1 = ((rect.y + rect.h).round().max(0.0) as usize).min(self.fb.height);

        for y in y0..y1 {
            for x in x0..x1 {
                self.plot(x, y);
            }
        }
    }

    /// Draw a 1-pixel line between two points using Bresenham.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (mut x, mut y) = (x1.round() as i32, y1.round() as i32);
        let (end_x, end_y) = (x2.round() as i32, y2.round() as i32);
        let span_x = (end_x - x).abs();
        let span_y = (end_y - y).abs();
        let step_x = (end_x - x).signum();
        let step_y = (end_y - y).signum();

        // Error term of the all-integer walk; it decides which axis advances.
        let mut err = span_x - span_y;
        while (x, y) != (end_x, end_y) {
            self.put_pixel(x, y);
            let doubled = 2 * err;
            if doubled > -span_y {
                err -= span_y;
                x += step_x;
            }
            if doubled < span_x {
                err += span_x;
                y += step_y;
            }
        }
        self.put_pixel(end_x, end_y);
    }

    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.fb.width || y >= self.fb.height {
            return;
        }
        self.plot(x, y);
    }

    /// Write the draw color at an in-bounds pixel, honoring the blend mode.
    #[inline]
    fn plot(&mut self, x: usize, y: usize) {
        let idx = y * self.fb.width + x;
        self.fb.pixels[idx] = match self.blend {
            BlendMode::None => self.color.to_packed(),
            BlendMode::Blend => blend_over(self.fb.pixels[idx], self.color),
        };
    }
}

/// Alpha-blend `src` over a packed 0x00RRGGBB pixel.
#[inline]
pub fn blend_over(dst: u32, src: Rgba) -> u32 {
    let a = src.a as u32;
    let inv = 255 - a;
    let mix = |s: u8, d: u32| (s as u32 * a + d * inv + 127) / 255;

    let r = mix(src.r, (dst >> 16) & 0xFF);
    let g = mix(src.g, (dst >> 8) & 0xFF);
    let b = mix(src.b, dst & 0xFF);
    (r << 16) | (g << 8) | b
}

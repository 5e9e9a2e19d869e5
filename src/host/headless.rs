//! Headless software backend
//!
//! Rasterizes into an in-memory framebuffer and advances a fixed-interval
//! clock, so runs are reproducible and need no display.

use super::{Backend, Host, HostError};
use crate::render::CircleCommand;

/// Default frame interval (60 Hz)
pub const DEFAULT_FRAME_INTERVAL: f32 = 1.0 / 60.0;

/// Largest framebuffer edge the backend will allocate
pub const MAX_DIMENSION: i32 = 16_384;

/// One-bit framebuffer backend with a frame budget
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
    title: String,
    initialized: bool,
    frame_interval: f32,
    frame_limit: u64,
    frames_presented: u64,
    draw_calls: u64,
    last_draw: Option<CircleCommand>,
}

impl HeadlessBackend {
    /// Backend that stops after `frame_limit` frames (at least one frame always runs)
    pub fn new(frame_limit: u64) -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            title: String::new(),
            initialized: false,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            frame_limit,
            frames_presented: 0,
            draw_calls: 0,
            last_draw: None,
        }
    }

    /// Override the simulated time between frames
    pub fn with_frame_interval(mut self, seconds: f32) -> Self {
        self.frame_interval = seconds;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    pub fn last_draw(&self) -> Option<CircleCommand> {
        self.last_draw
    }

    /// Whether the pixel is lit. Out-of-range coordinates are never lit.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Light `[x0, x1]` on row `y`, clipped to the framebuffer
    fn fill_span(&mut self, y: i64, x0: i64, x1: i64) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(i64::from(self.width) - 1);
        if start > end {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + start as usize..=row + end as usize].fill(true);
    }

    /// Filled disk via the midpoint circle walk.
    ///
    /// Works in `i64` so any `i32` centre and radius is safe to pass.
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) {
        let (x, y, radius) = (i64::from(x), i64::from(y), i64::from(radius));
        if radius <= 0
            || x + radius < 0
            || y + radius < 0
            || x - radius >= i64::from(self.width)
            || y - radius >= i64::from(self.height)
        {
            return;
        }

        let mut px = radius - 1;
        let mut py = 0;
        let mut tx = 1;
        let mut ty = 1;
        let mut err = tx - (radius << 1);

        while px >= py {
            self.fill_span(y - py, x - px, x + px);
            self.fill_span(y + py, x - px, x + px);
            self.fill_span(y - px, x - py, x + py);
            self.fill_span(y + px, x - py, x + py);

            if err <= 0 {
                py += 1;
                err += ty;
                ty += 2;
            } else {
                px -= 1;
                tx += 2;
                err += tx - (radius << 1);
            }
        }
    }
}

impl Host for HeadlessBackend {
    fn screen_width(&self) -> i32 {
        self.width
    }

    fn screen_height(&self) -> i32 {
        self.height
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32) {
        self.draw_calls += 1;
        self.last_draw = Some(CircleCommand { x, y, radius });
        self.fill_circle(x, y, radius);
    }
}

impl Backend for HeadlessBackend {
    fn init(&mut self) -> Result<(), HostError> {
        if !(self.frame_interval.is_finite() && self.frame_interval > 0.0) {
            return Err(HostError::Init(format!(
                "frame interval must be positive, got {}",
                self.frame_interval
            )));
        }
        self.initialized = true;
        log::debug!("Headless backend initialized ({:.4}s per frame)", self.frame_interval);
        Ok(())
    }

    fn create_window(
        &mut self,
        width: i32,
        height: i32,
        fullscreen: bool,
        title: &str,
    ) -> Result<(), HostError> {
        let window_err = |reason: &str| HostError::Window {
            width,
            height,
            reason: reason.to_string(),
        };
        if !self.initialized {
            return Err(window_err("backend not initialized"));
        }
        if width <= 0 || height <= 0 {
            return Err(window_err("dimensions must be positive"));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(window_err("exceeds framebuffer limit"));
        }
        if fullscreen {
            log::debug!("Fullscreen requested; headless backend ignores it");
        }

        self.width = width;
        self.height = height;
        self.pixels = vec![false; width as usize * height as usize];
        self.title = title.to_string();
        Ok(())
    }

    fn timestamp(&self) -> f64 {
        self.frames_presented as f64 * f64::from(self.frame_interval)
    }

    fn process_events(&mut self) -> bool {
        self.frames_presented < self.frame_limit
    }

    fn shutdown(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
        self.initialized = false;
        log::debug!(
            "Headless backend shut down after {} frames",
            self.frames_presented
        );
    }

    fn pre_frame_render(&mut self) {
        self.clear();
    }

    fn post_frame_render(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(w: i32, h: i32) -> HeadlessBackend {
        let mut backend = HeadlessBackend::new(1);
        backend.init().unwrap();
        backend.create_window(w, h, false, "test").unwrap();
        backend
    }

    #[test]
    fn test_window_size_reported() {
        let backend = HeadlessBackend::new(1);
        assert_eq!((backend.screen_width(), backend.screen_height()), (0, 0));

        let backend = window(960, 540);
        assert_eq!((backend.screen_width(), backend.screen_height()), (960, 540));
        assert_eq!(backend.title(), "test");
    }

    #[test]
    fn test_window_requires_init() {
        let mut backend = HeadlessBackend::new(1);
        let err = backend.create_window(10, 10, false, "x").unwrap_err();
        assert!(matches!(err, HostError::Window { .. }));
    }

    #[test]
    fn test_window_rejects_bad_sizes() {
        let mut backend = HeadlessBackend::new(1);
        backend.init().unwrap();
        assert!(backend.create_window(0, 10, false, "x").is_err());
        assert!(backend.create_window(10, -1, false, "x").is_err());
        assert!(backend.create_window(MAX_DIMENSION + 1, 10, false, "x").is_err());
    }

    #[test]
    fn test_init_rejects_bad_interval() {
        let mut backend = HeadlessBackend::new(1).with_frame_interval(0.0);
        assert!(matches!(backend.init(), Err(HostError::Init(_))));
    }

    #[test]
    fn test_circle_fills_disk() {
        let mut backend = window(100, 100);
        backend.draw_circle(50, 50, 16);
        assert!(backend.pixel(50, 50));
        assert!(backend.pixel(60, 50));
        assert!(backend.pixel(50, 40));
        assert!(!backend.pixel(67, 50));
        assert!(!backend.pixel(50, 67));
        assert!(!backend.pixel(62, 62));
        assert_eq!(backend.draw_calls(), 1);
        assert_eq!(
            backend.last_draw(),
            Some(CircleCommand {
                x: 50,
                y: 50,
                radius: 16
            })
        );
    }

    #[test]
    fn test_circle_clips_at_edges() {
        let mut backend = window(20, 20);
        backend.draw_circle(0, 0, 10);
        backend.draw_circle(25, 25, 10);
        assert!(backend.pixel(0, 0));
        assert!(backend.pixel(19, 19));
        assert!(!backend.pixel(-1, 0));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let mut backend = window(20, 20);
        backend.draw_circle(i32::MAX, i32::MAX, 16);
        backend.draw_circle(i32::MIN, i32::MIN, 16);
        backend.draw_circle(i32::MAX, 10, 1_000);
        backend.draw_circle(10, 10, i32::MIN);
        assert_eq!(backend.lit_pixels(), 0);
        assert_eq!(backend.draw_calls(), 4);
        assert_eq!(
            backend.last_draw(),
            Some(CircleCommand {
                x: 10,
                y: 10,
                radius: i32::MIN
            })
        );
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut backend = window(20, 20);
        backend.draw_circle(10, 10, 0);
        assert_eq!(backend.lit_pixels(), 0);
        backend.draw_circle(10, 10, 1);
        assert_eq!(backend.lit_pixels(), 1);
    }

    #[test]
    fn test_clock_and_frame_budget() {
        let mut backend = HeadlessBackend::new(2).with_frame_interval(0.5);
        assert_eq!(backend.timestamp(), 0.0);
        backend.post_frame_render();
        assert_eq!(backend.timestamp(), 0.5);
        assert!(backend.process_events());
        backend.post_frame_render();
        assert!(!backend.process_events());
    }

    #[test]
    fn test_clock_holds_interval_on_long_runs() {
        let mut backend = HeadlessBackend::new(u64::MAX);
        backend.frames_presented = 20_000_000;
        let before = backend.timestamp();
        backend.post_frame_render();
        let gap = (backend.timestamp() - before) as f32;
        assert!((gap - DEFAULT_FRAME_INTERVAL).abs() < 1e-6, "gap was {gap}");
    }

    #[test]
    fn test_pre_render_clears() {
        let mut backend = window(20, 20);
        backend.draw_circle(10, 10, 5);
        assert!(backend.lit_pixels() > 0);
        backend.pre_frame_render();
        assert_eq!(backend.lit_pixels(), 0);
    }
}

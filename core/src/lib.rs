pub mod application;
pub mod canvas;
pub mod input;
pub mod palette;
pub mod registry;

pub const MIN_WINDOW_WIDTH: u32 = 100;
pub const MIN_WINDOW_HEIGHT: u32 = 50;

/// Struct wrapping the validated window configuration for the runtime.
///
/// Only obtainable through [`RuntimeOptionsBuilder`], which clamps the raw
/// values into a usable range.
#[derive(Debug, Copy, Clone)]
pub struct RuntimeOptions {
    pub window_width: u32,
    pub window_height: u32,
    pub pixel_scale: u32,
}

impl RuntimeOptions {
    /// Width of the logical screen, in logical pixels.
    #[inline]
    pub fn screen_width(&self) -> u32 {
        self.window_width / self.pixel_scale
    }

    /// Height of the logical screen, in logical pixels.
    #[inline]
    pub fn screen_height(&self) -> u32 {
        self.window_height / self.pixel_scale
    }
}

#[derive(Debug)]
pub struct RuntimeOptionsBuilder {
    window_width: u32,
    window_height: u32,
    pixel_scale: u32,
    desktop_width: u32,
    desktop_height: u32,
}

impl RuntimeOptionsBuilder {
    pub fn new() -> Self {
        RuntimeOptionsBuilder {
            window_width: MIN_WINDOW_WIDTH,
            window_height: MIN_WINDOW_HEIGHT,
            pixel_scale: 1,
            desktop_width: u32::max_value(),
            desktop_height: u32::max_value(),
        }
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn pixel_scale(mut self, scale: u32) -> Self {
        self.pixel_scale = scale;
        self
    }

    /// Upper bound for the window dimensions, normally the desktop resolution
    /// reported by the video backend.
    pub fn desktop_bounds(mut self, width: u32, height: u32) -> Self {
        self.desktop_width = width;
        self.desktop_height = height;
        self
    }

    /// Clamp width into `[100, desktop]`, height into `[50, desktop]` and the
    /// pixel scale to at least 1.
    pub fn build(self) -> RuntimeOptions {
        RuntimeOptions {
            window_width: self.window_width.max(MIN_WINDOW_WIDTH).min(self.desktop_width),
            window_height: self.window_height.max(MIN_WINDOW_HEIGHT).min(self.desktop_height),
            pixel_scale: self.pixel_scale.max(1),
        }
    }
}

impl Default for RuntimeOptionsBuilder {
    fn default() -> Self {
        RuntimeOptionsBuilder::new()
    }
}

use pixelgrid_core::canvas::Blitter;
use pixelgrid_core::palette::RGB;
use pixelgrid_core::RuntimeOptions;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use sdl2::VideoSubsystem;

/// Render surface for the runtime, wrapping the SDL window canvas.
///
/// Every drawing primitive funnels through [`Blitter::fill_rect`]; SDL clips
/// rectangles that fall outside the surface.
pub struct SdlSurface {
    canvas: WindowCanvas,
}

impl SdlSurface {
    pub fn new(video_subsystem: &VideoSubsystem, title: &str, options: RuntimeOptions) -> anyhow::Result<Self> {
        let canvas = video_subsystem
            .window(title, options.window_width, options.window_height)
            .position_centered()
            .build()?
            .into_canvas()
            .accelerated()
            .build()?;

        Ok(SdlSurface { canvas })
    }

    pub fn clear(&mut self, colour: RGB) {
        self.canvas.set_draw_color(to_sdl_colour(colour));
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

impl Blitter for SdlSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: RGB) {
        self.canvas.set_draw_color(to_sdl_colour(colour));
        // Drawing primitives never fail, off-surface rectangles are clipped.
        let _ = self.canvas.fill_rect(Rect::new(x, y, width, height));
    }
}

fn to_sdl_colour(colour: RGB) -> Color {
    Color::RGB(colour.0, colour.1, colour.2)
}

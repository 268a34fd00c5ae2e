use log::info;
use pixelgrid_core::application::Application;
use pixelgrid_core::canvas::Canvas;
use pixelgrid_core::palette;

/// Cycles the palette across the whole screen, one colour per logical pixel,
/// with a running offset so the bands shift per column.
#[derive(Default)]
pub struct ColourTest;

impl Application for ColourTest {
    fn on_init(&mut self, _ctx: &mut Canvas) {
        info!("Colour test initialised");
    }

    fn on_update(&mut self, ctx: &mut Canvas) {
        let mut offset: u8 = 0;
        for x in 0..ctx.screen_width() {
            for y in 0..ctx.screen_height() {
                ctx.draw_pixel(x as i32, y as i32, palette::get_colour((x as u8).wrapping_add(offset)));
                offset = offset.wrapping_add(1);
            }

            if offset > 58 {
                offset = 0;
            }
        }
    }

    fn on_end(&mut self, _ctx: &mut Canvas) {
        info!("Colour test ended");
    }
}

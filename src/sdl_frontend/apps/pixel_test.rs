use log::{debug, info};
use pixelgrid_core::application::Application;
use pixelgrid_core::canvas::Canvas;
use pixelgrid_core::palette;

/// Smoke test exercising every drawing primitive plus the mouse snapshot:
/// two circles, a pixel, a diagonal, and a palette flood while the left
/// mouse button is held.
#[derive(Default)]
pub struct PixelTest {
    trigger: bool,
}

impl Application for PixelTest {
    fn on_init(&mut self, _ctx: &mut Canvas) {
        info!("Pixel test initialised");
    }

    fn on_update(&mut self, ctx: &mut Canvas) {
        let width = ctx.screen_width() as i32;
        let height = ctx.screen_height() as i32;

        ctx.draw_circle(width / 2, height / 2, 10, palette::get_colour(6), 1, false);
        ctx.draw_circle(width / 2, height / 2, 5, palette::get_colour(8), 1, true);
        ctx.draw_pixel(0, 0, palette::get_colour(0));
        ctx.draw_line(0, 0, width, height, palette::get_colour(5), 1);

        let mouse = ctx.input();
        debug!("Mouse position: {}, {}", mouse.x, mouse.y);

        if mouse.left_pressed() {
            self.trigger = true;
        } else if mouse.left_released() {
            self.trigger = false;
        }

        if self.trigger {
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
    }

    fn on_end(&mut self, _ctx: &mut Canvas) {
        info!("Pixel test ended");
    }
}

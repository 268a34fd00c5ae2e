use crate::input::MouseState;
use crate::palette::RGB;

/// Destination for scaled rectangle blits.
///
/// Implemented by the frontend over the actual render surface. [`Canvas`]
/// reaches the surface exclusively through this trait, so all higher level
/// primitives stay backend independent (and testable without a window).
pub trait Blitter {
    /// Fill a rectangle given in device pixels. Rectangles partially or fully
    /// outside the surface are clipped by the surface, never rejected.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: RGB);
}

/// Per-frame drawing context handed to the active application.
///
/// All coordinates are logical pixels; one logical pixel is rendered as a
/// `pixel_scale × pixel_scale` square of device pixels. The context borrows
/// the render surface and the runtime's background colour, so changes to the
/// background stick around for the next frame's clear.
pub struct Canvas<'a> {
    surface: &'a mut dyn Blitter,
    background: &'a mut RGB,
    input: MouseState,
    pixel_scale: u32,
    screen_width: u32,
    screen_height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(
        surface: &'a mut dyn Blitter,
        background: &'a mut RGB,
        pixel_scale: u32,
        screen_width: u32,
        screen_height: u32,
        input: MouseState,
    ) -> Self {
        Canvas {
            surface,
            background,
            input,
            pixel_scale,
            screen_width,
            screen_height,
        }
    }

    #[inline]
    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    #[inline]
    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    #[inline]
    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    /// Mouse state sampled at the start of the current frame.
    #[inline]
    pub fn input(&self) -> MouseState {
        self.input
    }

    pub fn background(&self) -> RGB {
        *self.background
    }

    /// Set the colour the backbuffer is cleared to. Takes effect on the next
    /// frame's clear.
    pub fn set_background(&mut self, colour: RGB) {
        *self.background = colour;
    }

    /// Draw a single logical pixel.
    pub fn draw_pixel(&mut self, x: i32, y: i32, colour: RGB) {
        self.draw_pixel_sized(x, y, colour, 1, 1);
    }

    /// Draw a filled block of `width × height` logical pixels with its top
    /// left corner at `(x, y)`.
    ///
    /// This is the sole operation that reaches the render surface; every other
    /// primitive is expressed in terms of it. Coordinates are not bounds
    /// checked, anything off the surface is simply not visible.
    pub fn draw_pixel_sized(&mut self, x: i32, y: i32, colour: RGB, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let scale = self.pixel_scale as i32;
        self.surface.fill_rect(
            x * scale,
            y * scale,
            (width * scale) as u32,
            (height * scale) as u32,
            colour,
        );
    }

    /// Draw a line from `(x1, y1)` to `(x2, y2)`, both endpoints inclusive.
    ///
    /// DDA stepping: `max(|dx|, |dy|)` steps with float increments truncated
    /// per step. `thickness` is passed through as the blit size of every step,
    /// it does not widen the line perpendicular to its direction.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, colour: RGB, thickness: i32) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());

        // Zero-length line, a single point.
        if steps == 0 {
            self.draw_pixel_sized(x1, y1, colour, thickness, thickness);
            return;
        }

        let x_increment = dx as f32 / steps as f32;
        let y_increment = dy as f32 / steps as f32;
        let mut x = x1 as f32;
        let mut y = y1 as f32;
        for _ in 0..=steps {
            self.draw_pixel_sized(x as i32, y as i32, colour, thickness, thickness);
            x += x_increment;
            y += y_increment;
        }
    }

    /// Draw a circle outline as 360 one-degree samples, regardless of radius.
    /// Small circles oversample, large ones may show gaps.
    ///
    /// With `filled` each sample additionally walks the radius outward from
    /// the centre, giving a radial spoke fill (which can leave gaps between
    /// spokes on large radii).
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32, colour: RGB, thickness: i32, filled: bool) {
        for i in 0..360 {
            let angle = f64::from(i) * std::f64::consts::PI / 180.0;
            let edge_x = (f64::from(x) + f64::from(radius) * angle.cos()) as i32;
            let edge_y = (f64::from(y) + f64::from(radius) * angle.sin()) as i32;
            self.draw_pixel_sized(edge_x, edge_y, colour, thickness, thickness);

            if filled {
                for j in 0..radius {
                    let spoke_x = (f64::from(x) + f64::from(j) * angle.cos()) as i32;
                    let spoke_y = (f64::from(y) + f64::from(j) * angle.sin()) as i32;
                    self.draw_pixel_sized(spoke_x, spoke_y, colour, thickness, thickness);
                }
            }
        }
    }

    /// Draw a rectangle with its top left corner at `(x, y)`.
    ///
    /// The base loop blits every cell of the `width × height` extent, so the
    /// result always looks filled. `filled` does not switch to an outline
    /// mode: it adds border passes on top, one unit past the base extent at
    /// `x + width` / `y + height`. See DESIGN.md for why this is kept.
    pub fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        colour: RGB,
        thickness: i32,
        filled: bool,
    ) {
        for i in 0..width {
            for j in 0..height {
                self.draw_pixel_sized(x + i, y + j, colour, thickness, thickness);
            }
        }

        if filled {
            for i in 0..width {
                self.draw_pixel_sized(x + i, y, colour, thickness, thickness);
                self.draw_pixel_sized(x + i, y + height, colour, thickness, thickness);
            }
            for j in 0..height {
                self.draw_pixel_sized(x, y + j, colour, thickness, thickness);
                self.draw_pixel_sized(x + width, y + j, colour, thickness, thickness);
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::palette;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingBlitter {
        blits: Vec<(i32, i32, u32, u32, RGB)>,
    }

    impl Blitter for RecordingBlitter {
        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: RGB) {
            self.blits.push((x, y, width, height, colour));
        }
    }

    fn draw<F: FnOnce(&mut Canvas)>(pixel_scale: u32, draw_calls: F) -> Vec<(i32, i32, u32, u32, RGB)> {
        let mut surface = RecordingBlitter::default();
        let mut background = palette::get_colour(0);
        let mut canvas = Canvas::new(&mut surface, &mut background, pixel_scale, 64, 48, MouseState::default());
        draw_calls(&mut canvas);
        surface.blits
    }

    #[test]
    fn test_pixel_is_scaled_to_device_coordinates() {
        let blits = draw(4, |canvas| canvas.draw_pixel(2, 3, RGB(1, 2, 3)));

        assert_eq!(blits, vec![(8, 12, 4, 4, RGB(1, 2, 3))]);
    }

    #[test]
    fn test_sized_pixel_scales_both_dimensions() {
        let blits = draw(3, |canvas| canvas.draw_pixel_sized(1, 1, RGB(9, 9, 9), 2, 4));

        assert_eq!(blits, vec![(3, 3, 6, 12, RGB(9, 9, 9))]);
    }

    #[test]
    fn test_degenerate_pixel_size_draws_nothing() {
        let blits = draw(1, |canvas| {
            canvas.draw_pixel_sized(5, 5, RGB(1, 1, 1), 0, 1);
            canvas.draw_pixel_sized(5, 5, RGB(1, 1, 1), 1, -3);
        });

        assert_eq!(blits.len(), 0);
    }

    #[test]
    fn test_negative_coordinates_are_passed_through() {
        let blits = draw(2, |canvas| canvas.draw_pixel(-3, -1, RGB(0, 0, 0)));

        assert_eq!(blits, vec![(-6, -2, 2, 2, RGB(0, 0, 0))]);
    }

    #[test]
    fn test_zero_length_line_draws_single_point() {
        let blits = draw(1, |canvas| canvas.draw_line(7, 9, 7, 9, RGB(5, 5, 5), 1));

        assert_eq!(blits, vec![(7, 9, 1, 1, RGB(5, 5, 5))]);
    }

    #[test]
    fn test_horizontal_line_is_endpoint_inclusive() {
        let blits = draw(1, |canvas| canvas.draw_line(0, 0, 10, 0, RGB(5, 5, 5), 1));

        assert_eq!(blits.len(), 11);
        for (i, blit) in blits.iter().enumerate() {
            assert_eq!((blit.0, blit.1), (i as i32, 0));
        }
    }

    #[test]
    fn test_diagonal_line_steps_on_longest_axis() {
        let blits = draw(1, |canvas| canvas.draw_line(0, 0, 6, 3, RGB(5, 5, 5), 1));

        // max(|dx|, |dy|) + 1 points, endpoints included.
        assert_eq!(blits.len(), 7);
        assert_eq!((blits[0].0, blits[0].1), (0, 0));
        assert_eq!((blits[6].0, blits[6].1), (6, 3));
    }

    #[test]
    fn test_line_thickness_only_grows_the_blit() {
        let blits = draw(1, |canvas| canvas.draw_line(0, 0, 4, 0, RGB(5, 5, 5), 3));

        assert_eq!(blits.len(), 5);
        for blit in &blits {
            assert_eq!((blit.2, blit.3), (3, 3));
        }
    }

    #[test]
    fn test_circle_outline_is_360_samples_regardless_of_radius() {
        for radius in &[1, 3, 40, 500] {
            let blits = draw(1, |canvas| canvas.draw_circle(10, 10, *radius, RGB(5, 5, 5), 1, false));
            assert_eq!(blits.len(), 360);
        }
    }

    #[test]
    fn test_filled_circle_adds_radius_spoke_samples_per_degree() {
        let radius = 5;
        let blits = draw(1, |canvas| canvas.draw_circle(10, 10, radius, RGB(5, 5, 5), 1, true));

        assert_eq!(blits.len(), 360 * (1 + radius as usize));
    }

    #[test]
    fn test_circle_samples_lie_on_the_radius() {
        let blits = draw(1, |canvas| canvas.draw_circle(0, 0, 10, RGB(5, 5, 5), 1, false));

        // Truncation keeps every sample within the circumscribing square.
        for blit in &blits {
            assert!(blit.0 >= -10 && blit.0 <= 10);
            assert!(blit.1 >= -10 && blit.1 <= 10);
        }
        // Degree 0 is exactly (radius, 0).
        assert_eq!((blits[0].0, blits[0].1), (10, 0));
    }

    #[test]
    fn test_rectangle_base_loop_covers_full_extent() {
        let blits = draw(1, |canvas| canvas.draw_rectangle(2, 3, 4, 5, RGB(5, 5, 5), 1, false));

        assert_eq!(blits.len(), 4 * 5);
        for i in 0..4 {
            for j in 0..5 {
                assert!(blits.contains(&(2 + i, 3 + j, 1, 1, RGB(5, 5, 5))));
            }
        }
    }

    #[test]
    fn test_filled_rectangle_adds_border_reinforcement() {
        let (width, height) = (4, 5);
        let blits = draw(1, |canvas| {
            canvas.draw_rectangle(0, 0, width, height, RGB(5, 5, 5), 1, true)
        });

        // Base extent plus two horizontal and two vertical border passes.
        assert_eq!(blits.len(), (width * height + 2 * width + 2 * height) as usize);
        // The border passes reach one unit past the base extent.
        assert!(blits.contains(&(0, height, 1, 1, RGB(5, 5, 5))));
        assert!(blits.contains(&(width, 0, 1, 1, RGB(5, 5, 5))));
    }

    #[test]
    fn test_background_changes_stick_to_the_runtime() {
        let mut surface = RecordingBlitter::default();
        let mut background = palette::get_colour(0);
        {
            let mut canvas = Canvas::new(&mut surface, &mut background, 1, 64, 48, MouseState::default());
            assert_eq!(canvas.background(), palette::get_colour(0));
            canvas.set_background(palette::get_colour(7));
        }

        assert_eq!(background, palette::get_colour(7));
    }
}

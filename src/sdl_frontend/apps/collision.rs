use log::info;
use pixelgrid_core::application::Application;
use pixelgrid_core::canvas::Canvas;
use pixelgrid_core::palette::{self, RGB};

#[derive(Debug, Copy, Clone)]
struct Square {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    colour: RGB,
}

impl Square {
    fn overlaps(&self, other: &Square) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Two axis-aligned squares, with their overlap logged every frame.
#[derive(Default)]
pub struct CollisionTest {
    objects: Vec<Square>,
}

impl Application for CollisionTest {
    fn on_init(&mut self, _ctx: &mut Canvas) {
        self.objects = vec![
            Square {
                x: 10.0,
                y: 10.0,
                width: 2.0,
                height: 2.0,
                colour: palette::get_colour(5),
            },
            Square {
                x: 10.0,
                y: 11.0,
                width: 2.0,
                height: 2.0,
                colour: palette::get_colour(6),
            },
        ];
    }

    fn on_update(&mut self, ctx: &mut Canvas) {
        for object in &self.objects {
            ctx.draw_pixel_sized(
                object.x as i32,
                object.y as i32,
                object.colour,
                object.width as i32,
                object.height as i32,
            );
        }

        info!("Overlapping: {}", self.objects[0].overlaps(&self.objects[1]));
    }
}

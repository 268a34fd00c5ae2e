use pixelgrid_core::application::AppInfo;
use pixelgrid_core::registry::Registry;

mod collision;
mod colour_test;
mod game_of_life;
mod pixel_test;

/// Every demo application the frontend ships with. Exactly one entry has its
/// `run` flag set; flip the flags to run a different demo.
pub fn registry() -> Registry {
    let mut registry = Registry::new();

    registry.register(
        AppInfo {
            name: "Colour Test",
            version: "1.0.0",
            author: "pixelgrid demos",
            description: "Display all the colours",
            run: true,
        },
        || Box::new(colour_test::ColourTest::default()),
    );
    registry.register(
        AppInfo {
            name: "Conway's Game of Life",
            version: "1.0.0",
            author: "pixelgrid demos",
            description: "Implementation of Game of Life",
            run: false,
        },
        || Box::new(game_of_life::GameOfLife::default()),
    );
    registry.register(
        AppInfo {
            name: "Collision Test",
            version: "1.0.0",
            author: "pixelgrid demos",
            description: "2D collision testing",
            run: false,
        },
        || Box::new(collision::CollisionTest::default()),
    );
    registry.register(
        AppInfo {
            name: "Pixel Test",
            version: "1.0.0",
            author: "pixelgrid demos",
            description: "Example application exercising the drawing primitives",
            run: false,
        },
        || Box::new(pixel_test::PixelTest::default()),
    );

    registry
}

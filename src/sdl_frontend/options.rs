use gumdrop::Options;

pub const USAGE: &str = "Usage: pixelgrid_sdl <width> <height> <scale>";

#[derive(Options, Debug, Default)]
pub struct AppOptions {
    /// Print this help message
    #[options()]
    help: bool,
    /// Window width in device pixels
    #[options(free)]
    pub width: Option<u32>,
    /// Window height in device pixels
    #[options(free)]
    pub height: Option<u32>,
    /// Integer magnification applied to both axes, minimum 1
    #[options(free)]
    pub scale: Option<u32>,
}

/// Colour triple as handed to the render surface. Fully opaque, no alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RGB(pub u8, pub u8, pub u8);

impl From<(u8, u8, u8)> for RGB {
    fn from(rgb_tuple: (u8, u8, u8)) -> Self {
        RGB(rgb_tuple.0, rgb_tuple.1, rgb_tuple.2)
    }
}

impl From<RGB> for (u8, u8, u8) {
    fn from(colour: RGB) -> Self {
        (colour.0, colour.1, colour.2)
    }
}

pub const PALETTE_SIZE: usize = 54;

/// Retrieve a colour from the palette, wrapping out of range indices back
/// around the table.
#[inline]
pub fn get_colour(index: u8) -> RGB {
    PALETTE[index as usize % PALETTE_SIZE]
}

// Colour palette is https://lospec.com/palette-list/nes-advanced
pub const PALETTE: [RGB; PALETTE_SIZE] = [
    RGB(0x26, 0x23, 0x2f),
    RGB(0x31, 0x40, 0x47),
    RGB(0x59, 0x6d, 0x62),
    RGB(0x92, 0x9c, 0x74),
    RGB(0xc8, 0xc5, 0xa3),
    RGB(0xfc, 0xfc, 0xfc),
    RGB(0x1b, 0x37, 0x7f),
    RGB(0x14, 0x7a, 0xbf),
    RGB(0x40, 0xaf, 0xdd),
    RGB(0xb2, 0xdb, 0xf4),
    RGB(0x18, 0x16, 0x67),
    RGB(0x3b, 0x2c, 0x96),
    RGB(0x70, 0x6a, 0xe1),
    RGB(0x8f, 0x95, 0xee),
    RGB(0x44, 0x0a, 0x41),
    RGB(0x81, 0x25, 0x93),
    RGB(0xcc, 0x4b, 0xb9),
    RGB(0xec, 0x99, 0xdb),
    RGB(0x3f, 0x00, 0x11),
    RGB(0xb3, 0x1c, 0x35),
    RGB(0xef, 0x20, 0x64),
    RGB(0xf2, 0x62, 0x82),
    RGB(0x96, 0x08, 0x11),
    RGB(0xe8, 0x18, 0x13),
    RGB(0xa7, 0x5d, 0x69),
    RGB(0xec, 0x9e, 0xa4),
    RGB(0x56, 0x0d, 0x04),
    RGB(0xc4, 0x36, 0x11),
    RGB(0xe2, 0x6a, 0x12),
    RGB(0xf0, 0xaf, 0x66),
    RGB(0x2a, 0x1a, 0x14),
    RGB(0x5d, 0x34, 0x2a),
    RGB(0xa6, 0x6e, 0x46),
    RGB(0xdf, 0x9c, 0x6e),
    RGB(0x8e, 0x4e, 0x11),
    RGB(0xd8, 0x95, 0x11),
    RGB(0xea, 0xd1, 0x1e),
    RGB(0xf5, 0xeb, 0x6b),
    RGB(0x2f, 0x54, 0x1c),
    RGB(0x5a, 0x83, 0x1b),
    RGB(0xa2, 0xbb, 0x1e),
    RGB(0xc6, 0xdf, 0x6b),
    RGB(0x0f, 0x45, 0x0f),
    RGB(0x00, 0x8b, 0x12),
    RGB(0x0b, 0xcb, 0x12),
    RGB(0x3e, 0xf3, 0x3f),
    RGB(0x11, 0x51, 0x53),
    RGB(0x0c, 0x85, 0x63),
    RGB(0x04, 0xbf, 0x79),
    RGB(0x6a, 0xe6, 0xaa),
    RGB(0x26, 0x27, 0x26),
    RGB(0x51, 0x4f, 0x4c),
    RGB(0x88, 0x7e, 0x83),
    RGB(0xb3, 0xaa, 0xc0),
];

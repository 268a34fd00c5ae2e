/// Mouse state sampled once per frame, position in logical pixels.
///
/// The pressed/released edges compare against the previous frame's snapshot,
/// so "pressed" is true for exactly the first frame a button is held.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub left_down: bool,
    pub right_down: bool,
    left_pressed: bool,
    left_released: bool,
    right_pressed: bool,
    right_released: bool,
}

impl MouseState {
    /// Build the snapshot for a new frame from freshly sampled button state,
    /// deriving the edge flags from the previous frame.
    pub fn advance(previous: MouseState, x: i32, y: i32, left_down: bool, right_down: bool) -> MouseState {
        MouseState {
            x,
            y,
            left_down,
            right_down,
            left_pressed: left_down && !previous.left_down,
            left_released: !left_down && previous.left_down,
            right_pressed: right_down && !previous.right_down,
            right_released: !right_down && previous.right_down,
        }
    }

    #[inline]
    pub fn left_pressed(&self) -> bool {
        self.left_pressed
    }

    #[inline]
    pub fn left_released(&self) -> bool {
        self.left_released
    }

    #[inline]
    pub fn right_pressed(&self) -> bool {
        self.right_pressed
    }

    #[inline]
    pub fn right_released(&self) -> bool {
        self.right_released
    }
}

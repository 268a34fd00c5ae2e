use pixelgrid_core::application::Application;
use pixelgrid_core::canvas::Canvas;
use pixelgrid_core::palette;
use tinyrand::{Rand, StdRand};

const INITIAL_CELLS: usize = 250;
const CELL_COLOUR_INDEX: u8 = 15;

/// Conway's Game of Life. The grid is square, sized from the screen width on
/// both axes, and updated in place while it is drawn.
#[derive(Default)]
pub struct GameOfLife {
    grid: Vec<Vec<bool>>,
    size: usize,
}

impl Application for GameOfLife {
    fn on_init(&mut self, ctx: &mut Canvas) {
        self.size = ctx.screen_width() as usize;
        self.grid = vec![vec![false; self.size]; self.size];

        let mut rand = StdRand::default();
        for _ in 0..INITIAL_CELLS {
            let x = rand.next_lim_usize(self.size);
            let y = rand.next_lim_usize(self.size);
            self.grid[x][y] = true;
        }
    }

    fn on_update(&mut self, ctx: &mut Canvas) {
        for x in 0..self.size {
            for y in 0..self.size {
                self.update_cell(x, y);

                if self.grid[x][y] {
                    ctx.draw_pixel(x as i32, y as i32, palette::get_colour(CELL_COLOUR_INDEX));
                }
            }
        }
    }
}

impl GameOfLife {
    fn update_cell(&mut self, x: usize, y: usize) {
        let last = self.size - 1;
        let mut neighbours = 0;

        if x > 0 && y > 0 && self.grid[x - 1][y - 1] {
            neighbours += 1;
        }
        if x > 0 && self.grid[x - 1][y] {
            neighbours += 1;
        }
        if x > 0 && y < last && self.grid[x - 1][y + 1] {
            neighbours += 1;
        }
        if y > 0 && self.grid[x][y - 1] {
            neighbours += 1;
        }
        if y < last && self.grid[x][y + 1] {
            neighbours += 1;
        }
        if x < last && y > 0 && self.grid[x + 1][y - 1] {
            neighbours += 1;
        }
        if x < last && self.grid[x + 1][y] {
            neighbours += 1;
        }
        if x < last && y < last && self.grid[x + 1][y + 1] {
            neighbours += 1;
        }

        if neighbours < 2 || neighbours > 3 {
            self.grid[x][y] = false;
        } else if neighbours == 3 {
            self.grid[x][y] = true;
        }
    }
}

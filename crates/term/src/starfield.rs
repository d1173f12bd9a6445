//! Precomputed starfield used for sky cells.

use crate::core::SimpleRng;
use crate::fb::{Cell, CellStyle};
use crate::types::{Bg, Fg};

/// One star per this many cells on average.
const STAR_ONE_IN: u32 = 101;

pub const SKY_STYLE: CellStyle = CellStyle::new(Fg::Gray, Bg::Black);

/// A fixed scatter of `·` stars over a blank sky.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Starfield {
    width: u16,
    height: u16,
    seed: u32,
    cells: Vec<Cell>,
}

impl Starfield {
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let len = (width as usize) * (height as usize);
        let cells = (0..len)
            .map(|_| {
                let ch = if rng.one_in(STAR_ONE_IN) { '·' } else { ' ' };
                SKY_STYLE.into_cell(ch)
            })
            .collect();
        Self {
            width,
            height,
            seed,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Regenerate for a new screen size, keeping the seed.
    pub fn fit(&mut self, width: u16, height: u16) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height, self.seed);
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return SKY_STYLE.into_cell(' ');
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn star_count(&self) -> usize {
        self.cells.iter().filter(|c| c.ch == '·').count()
    }
}

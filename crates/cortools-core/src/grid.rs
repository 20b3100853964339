// crates/cortools-core/src/grid.rs

use crate::error::{CorError, Result};

/// Points per side of a correction table.
pub const GRID_SIZE: usize = 65;

/// Cells in a full table (65 x 65).
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Stored units spanning the whole scan field; `scale = FULL_SCALE / lens_mm`.
pub const FULL_SCALE: f64 = 65536.0;

/// One correction vector in stored units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Displacement {
    pub dx: i64,
    pub dy: i64,
}

impl Displacement {
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    pub fn magnitude(&self) -> f64 {
        (self.dx as f64).hypot(self.dy as f64)
    }
}

/// A complete 65x65 table, row-major by (row, column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectionGrid {
    cells: Vec<Displacement>,
}

impl CorrectionGrid {
    pub fn from_cells(cells: Vec<Displacement>) -> Result<Self> {
        if cells.len() != CELL_COUNT {
            return Err(CorError::Truncated {
                what: "correction grid",
                needed: CELL_COUNT,
                available: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// All-zero table (what an uncalibrated template holds).
    pub fn zeroed() -> Self {
        Self {
            cells: vec![Displacement::default(); CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Displacement] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Displacement> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        self.cells.get(row * GRID_SIZE + col).copied()
    }

    pub fn into_cells(self) -> Vec<Displacement> {
        self.cells
    }
}

/// Split displacements into the (u, v) component sequences a renderer wants.
pub fn components(cells: &[Displacement]) -> (Vec<i64>, Vec<i64>) {
    cells.iter().map(|d| (d.dx, d.dy)).unzip()
}

/// Coordinate mesh for a full table: `x[i][j] = i`, `y[i][j] = j`, flattened row-major.
pub fn mesh() -> (Vec<u32>, Vec<u32>) {
    let mut xs = Vec::with_capacity(CELL_COUNT);
    let mut ys = Vec::with_capacity(CELL_COUNT);
    for i in 0..GRID_SIZE as u32 {
        for j in 0..GRID_SIZE as u32 {
            xs.push(i);
            ys.push(j);
        }
    }
    (xs, ys)
}

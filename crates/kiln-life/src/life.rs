use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;

/// Moore neighborhood, the 8 cells around a cell excluding itself.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Conway's Game of Life over a double-buffered [`Grid`].
///
/// One buffer is active (read by rendering and by the next generation), the
/// other is scratch. `step`, `randomize` and `reset` each write the scratch
/// buffer's interior, carry the border ring over from the active buffer,
/// then flip which buffer is active — so a generation never reads cells it
/// wrote itself, and the outermost ring is a frozen wall.
///
/// The outermost ring is excluded from every write path, so whatever the
/// grid held on its border at construction stays there for the lifetime of
/// the simulation.
pub struct Life {
    grids: [Grid; 2],
    active: usize,
    rng: StdRng,
}

impl Life {
    /// Allocates both buffers and randomizes the interior as the initial
    /// condition.
    ///
    /// `side` must be at least 3 so the grid has an interior at all.
    /// The same `seed` reproduces the same initial state and the same
    /// sequence of later `randomize` calls.
    pub fn new(side: usize, seed: u64) -> Self {
        assert!(side >= 3, "grid side {side} leaves no interior cells");
        let mut life = Self {
            grids: [Grid::new(side), Grid::new(side)],
            active: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        log::debug!("allocated {side}x{side} double buffer (seed {seed})");
        life.randomize();
        life
    }

    /// Side length in cells.
    #[inline]
    pub fn side(&self) -> usize {
        self.grids[0].side()
    }

    /// Reads a cell from the active buffer. Panics out of range.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.grids[self.active].get(row, col)
    }

    /// Iterates the active buffer row-major, `side²` booleans.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.grids[self.active].cells()
    }

    /// Live cells in the active buffer.
    pub fn population(&self) -> usize {
        self.grids[self.active].population()
    }

    /// Re-seeds every interior cell alive with probability 0.5.
    pub fn randomize(&mut self) {
        let side = self.side();
        let (prev, next) = split(&mut self.grids, self.active);
        next.copy_border_from(prev);
        for row in 1..side - 1 {
            for col in 1..side - 1 {
                next.set(row, col, self.rng.random_bool(0.5));
            }
        }
        self.active ^= 1;
    }

    /// Kills every interior cell.
    pub fn reset(&mut self) {
        let (prev, next) = split(&mut self.grids, self.active);
        next.clear();
        next.copy_border_from(prev);
        self.active ^= 1;
    }

    /// Advances one generation.
    ///
    /// Neighbor counts are read exclusively from the buffer that was active
    /// when the call started; a live cell survives on 2 or 3 neighbors, a
    /// dead cell is born on exactly 3.
    pub fn step(&mut self) {
        let side = self.side();
        let (prev, next) = split(&mut self.grids, self.active);
        next.copy_border_from(prev);
        for row in 1..side - 1 {
            for col in 1..side - 1 {
                let mut live = 0u32;
                for (dr, dc) in NEIGHBORS {
                    let r = (row as i32 + dr) as usize;
                    let c = (col as i32 + dc) as usize;
                    if prev.get(r, c) {
                        live += 1;
                    }
                }
                let alive = if prev.get(row, col) {
                    live == 2 || live == 3
                } else {
                    live == 3
                };
                next.set(row, col, alive);
            }
        }
        self.active ^= 1;
    }

    /// Installs `grid` as the active buffer. Test seam only; the public
    /// mutation paths are `step`, `randomize` and `reset`.
    #[cfg(test)]
    pub(crate) fn with_pattern(grid: Grid, seed: u64) -> Self {
        let scratch = Grid::new(grid.side());
        Self {
            grids: [grid, scratch],
            active: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Splits the buffer pair into (active, scratch).
fn split(grids: &mut [Grid; 2], active: usize) -> (&Grid, &mut Grid) {
    let [a, b] = grids;
    if active == 0 { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(life: &Life) -> Vec<bool> {
        life.cells().collect()
    }

    #[test]
    fn blinker_oscillates() {
        // Horizontal blinker in row 2 flips to a vertical one in column 2.
        let life_grid = Grid::from_rows(&[
            ".....", //
            ".....", //
            ".###.", //
            ".....", //
            ".....",
        ]);
        let mut life = Life::with_pattern(life_grid, 0);

        life.step();
        let vertical = Grid::from_rows(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        assert_eq!(flat(&life), vertical.cells().collect::<Vec<_>>());

        life.step();
        let horizontal = Grid::from_rows(&[
            ".....", //
            ".....", //
            ".###.", //
            ".....", //
            ".....",
        ]);
        assert_eq!(flat(&life), horizontal.cells().collect::<Vec<_>>());
    }

    #[test]
    fn lone_cell_dies() {
        let grid = Grid::from_rows(&[
            ".....", //
            ".....", //
            "..#..", //
            ".....", //
            ".....",
        ]);
        let mut life = Life::with_pattern(grid, 0);
        life.step();
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn dead_interior_is_a_fixed_point() {
        let mut life = Life::with_pattern(Grid::new(6), 0);
        life.step();
        assert_eq!(life.population(), 0);
        life.step();
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn reset_then_step_stays_dead() {
        let mut life = Life::new(8, 42);
        assert!(life.population() > 0, "seed 42 should produce live cells");
        life.reset();
        assert_eq!(life.population(), 0);
        life.step();
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn block_is_stable() {
        let grid = Grid::from_rows(&[
            "......", //
            ".##...", //
            ".##...", //
            "......", //
            "......", //
            "......",
        ]);
        let mut life = Life::with_pattern(grid.clone(), 0);
        life.step();
        assert_eq!(flat(&life), grid.cells().collect::<Vec<_>>());
    }

    #[test]
    fn border_survives_step_randomize_reset() {
        // Seed the border ring live; no operation may touch it.
        let mut grid = Grid::new(6);
        for i in 0..6 {
            grid.set(0, i, true);
            grid.set(5, i, true);
            grid.set(i, 0, true);
            grid.set(i, 5, true);
        }
        let mut life = Life::with_pattern(grid, 7);

        let border_of = |life: &Life| -> Vec<bool> {
            let mut ring = Vec::new();
            for i in 0..6 {
                ring.push(life.cell(0, i));
                ring.push(life.cell(5, i));
                ring.push(life.cell(i, 0));
                ring.push(life.cell(i, 5));
            }
            ring
        };
        let before = border_of(&life);

        life.step();
        assert_eq!(border_of(&life), before);
        life.randomize();
        assert_eq!(border_of(&life), before);
        life.reset();
        assert_eq!(border_of(&life), before);
        life.step();
        assert_eq!(border_of(&life), before);
    }

    #[test]
    fn border_cells_do_not_feed_births_from_outside() {
        // Two live border cells next to an interior cell: the interior cell
        // still counts them as neighbors, but the border itself never
        // changes.
        let grid = Grid::from_rows(&[
            "##...", //
            "#....", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let mut life = Life::with_pattern(grid, 0);
        life.step();
        // (1,1) sees three live neighbors (0,0), (0,1), (1,0) and is born.
        assert!(life.cell(1, 1));
        assert!(life.cell(0, 0) && life.cell(0, 1) && life.cell(1, 0));
    }

    #[test]
    fn same_seed_same_world() {
        let a = Life::new(16, 99);
        let b = Life::new(16, 99);
        assert_eq!(flat(&a), flat(&b));

        let c = Life::new(16, 100);
        assert_ne!(flat(&a), flat(&c), "different seeds should diverge");
    }

    #[test]
    fn randomize_advances_the_owned_rng() {
        let mut a = Life::new(16, 5);
        let first = flat(&a);
        a.randomize();
        assert_ne!(flat(&a), first);
    }

    #[test]
    fn randomize_touches_interior_only() {
        let mut life = Life::new(32, 11);
        life.randomize();
        for i in 0..32 {
            assert!(!life.cell(0, i));
            assert!(!life.cell(31, i));
            assert!(!life.cell(i, 0));
            assert!(!life.cell(i, 31));
        }
        assert!(life.population() > 0);
    }

    #[test]
    #[should_panic(expected = "no interior")]
    fn degenerate_side_panics() {
        Life::new(2, 0);
    }
}

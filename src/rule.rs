use crate::grid::{Cell, Grid};

/// B3/S23: a live cell survives with two or three live neighbors, a dead
/// cell is born with exactly three.
#[inline]
pub fn next_state(cell: Cell, live_neighbors: usize) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Apply the rule to every cell at once. The result has the same dimensions
/// as `grid`; cells past the edges count as dead.
pub fn step(grid: &Grid) -> Grid {
    let (rows, columns) = grid.dimensions();

    Grid::from_fn(rows, columns, |row, column| {
        next_state(
            grid.cell_at(row as isize, column as isize),
            grid.live_neighbors(row, column),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{arb_grid, grid};
    use crate::pad::pad;
    use proptest::prelude::*;

    #[test]
    fn survival_and_birth_table() {
        for n in 0..=8 {
            let survives = n == 2 || n == 3;
            let born = n == 3;

            assert_eq!(next_state(Cell::Alive, n), Cell::from(survives), "alive, {} neighbors", n);
            assert_eq!(next_state(Cell::Dead, n), Cell::from(born), "dead, {} neighbors", n);
        }
    }

    #[test]
    fn blinker_flips() {
        let horizontal = grid(&["00000", "00000", "01110", "00000", "00000"]);
        let vertical = grid(&["00000", "00100", "00100", "00100", "00000"]);

        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn block_is_still() {
        let block = grid(&["0000", "0110", "0110", "0000"]);

        assert_eq!(step(&block), block);
    }

    #[test]
    fn update_is_simultaneous() {
        // Row-by-row in-place updating would let the first birth feed the next.
        let g = grid(&["110", "100", "000"]);

        assert_eq!(step(&g), grid(&["110", "110", "000"]));
    }

    #[test]
    fn edges_do_not_wrap() {
        // A wrapped blinker on a 3-wide strip would see its own ends.
        let g = grid(&["111"]);

        assert_eq!(step(&g), grid(&["010"]));
    }

    proptest! {
        #[test]
        fn step_keeps_padded_dimensions(g in arb_grid(6, 6)) {
            let (rows, columns) = g.dimensions();

            prop_assert_eq!(step(&pad(&g)).dimensions(), (rows + 2, columns + 2));
        }

        #[test]
        fn step_commutes_with_rotation(g in arb_grid(7, 7)) {
            prop_assert_eq!(step(&g.rotated_180()), step(&g).rotated_180());
        }
    }
}

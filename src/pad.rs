use crate::grid::Grid;

/// Surround `grid` with one ring of dead cells, so that births just outside
/// the current bounding box have somewhere to land. Cell `(r, c)` moves to
/// `(r + 1, c + 1)`.
pub fn pad(grid: &Grid) -> Grid {
    let (rows, columns) = grid.dimensions();

    Grid::from_fn(rows + 2, columns + 2, |row, column| {
        grid.cell_at(row as isize - 1, column as isize - 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{arb_grid, grid, Cell};
    use proptest::prelude::*;

    #[test]
    fn pads_single_cell() {
        assert_eq!(pad(&grid(&["1"])), grid(&["000", "010", "000"]));
    }

    #[test]
    fn pads_rectangle() {
        assert_eq!(
            pad(&grid(&["110", "011"])),
            grid(&["00000", "01100", "00110", "00000"]),
        );
    }

    proptest! {
        #[test]
        fn padding_adds_a_dead_ring(g in arb_grid(6, 6)) {
            let padded = pad(&g);
            let (rows, columns) = g.dimensions();

            prop_assert_eq!(padded.dimensions(), (rows + 2, columns + 2));
            prop_assert_eq!(padded.population(), g.population());
            prop_assert!(padded.row(0).all(|cell| cell == Cell::Dead));
            prop_assert!(padded.row(rows + 1).all(|cell| cell == Cell::Dead));
            prop_assert!(padded.column(0).all(|cell| cell == Cell::Dead));
            prop_assert!(padded.column(columns + 1).all(|cell| cell == Cell::Dead));

            for row in 0..rows {
                for column in 0..columns {
                    prop_assert_eq!(
                        padded.cell_at(row as isize + 1, column as isize + 1),
                        g.cell_at(row as isize, column as isize)
                    );
                }
            }
        }
    }
}

use std::iter::FusedIterator;

use log::{debug, info};

use crate::grid::Grid;
use crate::pad::pad;
use crate::rule::step;
use crate::trim::trim;

/// One generation: pad, apply the rule, trim.
#[inline]
pub fn advance(grid: &Grid) -> Grid {
    trim(&step(&pad(grid)))
}

/// Iterator over successive generations, starting with the one after the
/// initial grid. It ends after the requested number of generations, or right
/// after yielding an extinct (empty) grid, whichever comes first.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    remaining: usize,
}

impl Simulation {
    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn into_current(self) -> Grid {
        self.current
    }
}

impl Iterator for Simulation {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.remaining == 0 || self.current.is_empty() {
            self.remaining = 0;
            return None;
        }

        self.remaining -= 1;
        self.current = advance(&self.current);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_empty() {
            (0, Some(0))
        } else {
            (self.remaining.min(1), Some(self.remaining))
        }
    }
}

impl FusedIterator for Simulation {}

pub fn simulate(initial: Grid, generations: usize) -> Simulation {
    Simulation {
        current: initial,
        remaining: generations,
    }
}

/// Run the simulation, handing each grid to `sink` in order together with its
/// generation number, starting with the initial grid as generation 0. Returns
/// the last grid produced.
pub fn run(initial: Grid, generations: usize, mut sink: impl FnMut(usize, &Grid)) -> Grid {
    debug!(
        "generation 0: {:?} cells, population {}",
        initial.dimensions(),
        initial.population()
    );
    sink(0, &initial);

    let mut simulation = simulate(initial, generations);

    for (generation, grid) in (1..).zip(&mut simulation) {
        debug!(
            "generation {}: {:?} cells, population {}",
            generation,
            grid.dimensions(),
            grid.population()
        );

        if grid.is_empty() {
            info!("extinct after {} generations", generation);
        }

        sink(generation, &grid);
    }

    simulation.into_current()
}
